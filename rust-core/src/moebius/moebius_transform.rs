// Möbius transformation module: Contains the 2x2 matrix action on the extended plane
// This module provides composition, inversion and point transformation for group elements

use nalgebra::Matrix2;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

use crate::complex::{ComplexExt, ExtendedPoint};

/// Möbius transformation z ↦ (az + b) / (cz + d)
///
/// Represents the matrix `[[a, b], [c, d]]` acting projectively on the extended complex
/// plane. Scalar multiples describe the same map, but no normalization is performed:
/// callers keep the determinant at ±1. Serialized as the row-major tuple `[a, b, c, d]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Moebius {
    matrix: Matrix2<f64>,
}

impl Moebius {
    /// Create a transformation from its row-major entries
    ///
    /// # Arguments
    /// * `a`, `b` - First matrix row
    /// * `c`, `d` - Second matrix row
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self {
            matrix: Matrix2::new(a, b, c, d),
        }
    }

    /// Create the identity transformation
    pub fn identity() -> Self {
        Self {
            matrix: Matrix2::identity(),
        }
    }

    /// Create the translation z ↦ z + n
    ///
    /// # Arguments
    /// * `n` - Translation offset along the real axis
    pub fn translation(n: f64) -> Self {
        Self::new(1.0, n, 0.0, 1.0)
    }

    /// Create the inversion generator S = (0, -1, 1, 0), z ↦ -1/z
    pub fn inversion() -> Self {
        Self::new(0.0, -1.0, 1.0, 0.0)
    }

    pub fn a(&self) -> f64 {
        self.matrix[(0, 0)]
    }

    pub fn b(&self) -> f64 {
        self.matrix[(0, 1)]
    }

    pub fn c(&self) -> f64 {
        self.matrix[(1, 0)]
    }

    pub fn d(&self) -> f64 {
        self.matrix[(1, 1)]
    }

    /// Row-major entries `[a, b, c, d]`
    pub fn entries(&self) -> [f64; 4] {
        [self.a(), self.b(), self.c(), self.d()]
    }

    /// Underlying matrix
    pub fn matrix(&self) -> &Matrix2<f64> {
        &self.matrix
    }

    /// Determinant ad - bc
    pub fn determinant(&self) -> f64 {
        self.a() * self.d() - self.b() * self.c()
    }

    /// Compose this transformation with another one
    ///
    /// The result applies `other` first and then `self`, i.e. its matrix is
    /// `self.matrix * other.matrix`.
    ///
    /// # Arguments
    /// * `other` - The transformation applied first
    pub fn compose(&self, other: &Moebius) -> Moebius {
        Moebius {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Inverse transformation as the adjugate (d, -b, -c, a)
    ///
    /// The determinant is not divided out, so this is the exact matrix inverse only for
    /// determinant ±1. As a map of the plane it is the inverse for any invertible matrix.
    pub fn inverse(&self) -> Moebius {
        Moebius::new(self.d(), -self.b(), -self.c(), self.a())
    }

    /// Apply the transformation to a point of the extended plane
    ///
    /// Infinity goes to a/c, or stays at infinity when c = 0. A finite point whose
    /// denominator cz + d is exactly zero goes to infinity.
    ///
    /// # Arguments
    /// * `point` - Point to transform
    ///
    /// # Returns
    /// The transformed point
    pub fn apply(&self, point: ExtendedPoint) -> ExtendedPoint {
        match point {
            ExtendedPoint::Infinity => {
                if self.c() == 0.0 {
                    ExtendedPoint::Infinity
                } else {
                    ExtendedPoint::Finite(Complex64::new(self.a() / self.c(), 0.0))
                }
            }
            ExtendedPoint::Finite(z) => self.apply_complex(z),
        }
    }

    /// Apply the transformation to a finite point
    pub fn apply_complex(&self, z: Complex64) -> ExtendedPoint {
        let q = z * self.c() + self.d();
        if q.is_exact_zero() {
            return ExtendedPoint::Infinity;
        }
        ExtendedPoint::Finite((z * self.a() + self.b()) / q)
    }

    /// Entry-wise comparison within `tol`
    pub fn approx_eq(&self, other: &Moebius, tol: f64) -> bool {
        self.entries()
            .iter()
            .zip(other.entries().iter())
            .all(|(x, y)| (x - y).abs() <= tol)
    }

    /// Check if this is the identity matrix (not merely the identity map)
    pub fn is_identity(&self, tol: f64) -> bool {
        self.approx_eq(&Moebius::identity(), tol)
    }
}

impl Default for Moebius {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Moebius {
    type Output = Moebius;

    fn mul(self, rhs: Moebius) -> Moebius {
        self.compose(&rhs)
    }
}

impl From<[f64; 4]> for Moebius {
    fn from(entries: [f64; 4]) -> Self {
        let [a, b, c, d] = entries;
        Moebius::new(a, b, c, d)
    }
}

impl From<Moebius> for [f64; 4] {
    fn from(m: Moebius) -> Self {
        m.entries()
    }
}

impl fmt::Display for Moebius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[[{}, {}], [{}, {}]]",
            self.a(),
            self.b(),
            self.c(),
            self.d()
        )
    }
}
