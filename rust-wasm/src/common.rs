use modular_domains::complex::ExtendedPoint;
use modular_domains::domain::Geodesic;
use modular_domains::moebius::Moebius;
use serde::{Deserialize, Serialize};

/// Point of the extended plane for JavaScript interop; `infinite` wins over x/y
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PointData {
    pub x: f64,
    pub y: f64,
    pub infinite: bool,
}

impl From<ExtendedPoint> for PointData {
    fn from(point: ExtendedPoint) -> Self {
        match point {
            ExtendedPoint::Finite(z) => PointData {
                x: z.re,
                y: z.im,
                infinite: false,
            },
            ExtendedPoint::Infinity => PointData {
                x: 0.0,
                y: 0.0,
                infinite: true,
            },
        }
    }
}

/// Möbius transformation entries for JavaScript interop
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MatrixData {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl From<Moebius> for MatrixData {
    fn from(m: Moebius) -> Self {
        MatrixData {
            a: m.a(),
            b: m.b(),
            c: m.c(),
            d: m.d(),
        }
    }
}

/// Tile edge for JavaScript interop
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EdgeData {
    Vertical {
        x: f64,
        from: PointData,
        to: PointData,
    },
    Arc {
        center: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Degenerate,
}

impl From<Geodesic> for EdgeData {
    fn from(edge: Geodesic) -> Self {
        match edge {
            Geodesic::Vertical { re, from, to } => EdgeData::Vertical {
                x: re,
                from: from.into(),
                to: to.into(),
            },
            Geodesic::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => EdgeData::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            },
            Geodesic::Degenerate => EdgeData::Degenerate,
        }
    }
}

/// Result of locating a point in the tessellation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LocateData {
    /// Element g with the point inside g(F)
    pub element: MatrixData,
    /// Representative whose tile contains the point, if the tessellation knows one
    pub tile: Option<usize>,
    pub iterations: usize,
}
