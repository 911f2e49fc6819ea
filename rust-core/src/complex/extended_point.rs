use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point of the extended complex plane.
///
/// The point at infinity is its own variant; it is never represented by a large or
/// non-finite number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ExtendedPoint {
    /// Ordinary complex number
    Finite(Complex64),
    /// The point at infinity
    Infinity,
}

impl ExtendedPoint {
    /// Create a finite point from its real and imaginary parts
    pub fn finite(re: f64, im: f64) -> Self {
        ExtendedPoint::Finite(Complex64::new(re, im))
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, ExtendedPoint::Infinity)
    }

    /// The finite value, or `None` for the point at infinity
    pub fn as_complex(&self) -> Option<Complex64> {
        match self {
            ExtendedPoint::Finite(z) => Some(*z),
            ExtendedPoint::Infinity => None,
        }
    }

    /// Both at infinity, or both finite and within `tol` of each other.
    pub fn approx_eq(&self, other: &ExtendedPoint, tol: f64) -> bool {
        match (self, other) {
            (ExtendedPoint::Infinity, ExtendedPoint::Infinity) => true,
            (ExtendedPoint::Finite(z), ExtendedPoint::Finite(w)) => (z - w).norm() <= tol,
            _ => false,
        }
    }
}

impl From<Complex64> for ExtendedPoint {
    fn from(z: Complex64) -> Self {
        ExtendedPoint::Finite(z)
    }
}

impl From<f64> for ExtendedPoint {
    fn from(x: f64) -> Self {
        ExtendedPoint::Finite(Complex64::new(x, 0.0))
    }
}

impl fmt::Display for ExtendedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtendedPoint::Finite(z) => write!(f, "{}", z),
            ExtendedPoint::Infinity => write!(f, "∞"),
        }
    }
}
