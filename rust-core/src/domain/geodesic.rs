// Geodesic module: Hyperbolic segments between points of the closed upper half-plane
// This module provides the vertical rays and semicircles a renderer strokes as tile edges

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::complex::{ComplexExt, ExtendedPoint};
use crate::config::GEODESIC_VERTICAL_TOLERANCE;

/// Hyperbolic geodesic segment in the upper half-plane model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geodesic {
    /// Segment of the vertical line Re z = `re`; either end may be infinity
    Vertical {
        re: f64,
        from: ExtendedPoint,
        to: ExtendedPoint,
    },
    /// Arc of the circle centred at `center` on the real axis
    Arc {
        center: f64,
        radius: f64,
        /// Angle of the start point seen from the centre, in [0, 2π)
        start_angle: f64,
        /// Angle of the end point seen from the centre, in [0, 2π)
        end_angle: f64,
    },
    /// Both ends at infinity
    Degenerate,
}

impl Geodesic {
    /// Geodesic segment from `from` to `to`
    ///
    /// Points whose real parts differ by less than the vertical tolerance are joined by a
    /// vertical segment, as is any finite point and infinity.
    pub fn between(from: ExtendedPoint, to: ExtendedPoint) -> Self {
        match (from, to) {
            (ExtendedPoint::Infinity, ExtendedPoint::Infinity) => Geodesic::Degenerate,
            (ExtendedPoint::Infinity, ExtendedPoint::Finite(z))
            | (ExtendedPoint::Finite(z), ExtendedPoint::Infinity) => Geodesic::Vertical {
                re: z.re,
                from,
                to,
            },
            (ExtendedPoint::Finite(p), ExtendedPoint::Finite(q)) => {
                if (p.re - q.re).abs() < GEODESIC_VERTICAL_TOLERANCE {
                    return Geodesic::Vertical {
                        re: q.re,
                        from,
                        to,
                    };
                }
                let center = 0.5 * (p.norm_sqr() - q.norm_sqr()) / (p.re - q.re);
                let p_rel = p - center;
                let q_rel = q - center;
                Geodesic::Arc {
                    center,
                    radius: p_rel.norm(),
                    start_angle: p_rel.principal_arg(),
                    end_angle: q_rel.principal_arg(),
                }
            }
        }
    }

    /// Check if the segment reaches the point at infinity
    pub fn is_unbounded(&self) -> bool {
        match self {
            Geodesic::Vertical { from, to, .. } => from.is_infinity() || to.is_infinity(),
            Geodesic::Arc { .. } => false,
            Geodesic::Degenerate => true,
        }
    }

    /// `segments + 1` evenly spaced points from start to end
    ///
    /// Unbounded segments have no finite parametrisation and yield an empty list.
    pub fn sample(&self, segments: usize) -> Vec<Complex64> {
        let segments = segments.max(1);
        match *self {
            Geodesic::Vertical {
                from: ExtendedPoint::Finite(p),
                to: ExtendedPoint::Finite(q),
                ..
            } => (0..=segments)
                .map(|k| {
                    let t = k as f64 / segments as f64;
                    p + (q - p) * t
                })
                .collect(),
            Geodesic::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => (0..=segments)
                .map(|k| {
                    let t = k as f64 / segments as f64;
                    let theta = start_angle + (end_angle - start_angle) * t;
                    Complex64::new(center, 0.0) + Complex64::from_polar(radius, theta)
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}
