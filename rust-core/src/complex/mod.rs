// Complex module: Complex arithmetic and the extended complex plane
// This module provides the value types every transformation acts on

// ======================== MODULE DECLARATIONS ========================
pub mod complex_ext;
pub mod extended_point;


// ======================== COMPLEX VALUES ========================
pub use num_complex::Complex64; // struct - complex number (re, im) with the usual arithmetic, also against f64 operands
// Complex64 methods used throughout:
//   norm(&self) -> f64                                       - magnitude
//   norm_sqr(&self) -> f64                                   - squared magnitude
//   inv(&self) -> Complex64                                  - multiplicative inverse

pub use complex_ext::ComplexExt; // trait - extra operations on Complex64
// ComplexExt methods:
//   principal_arg(&self) -> f64                              - argument in [0, 2π)
//   is_exact_zero(&self) -> bool                             - both components exactly zero

// ======================== EXTENDED PLANE ========================
pub use extended_point::ExtendedPoint; // enum - finite complex point or the point at infinity
// ExtendedPoint impl methods:
//   finite(re: f64, im: f64) -> Self                         - creates a finite point
//   is_infinity(&self) -> bool                               - checks for the point at infinity
//   as_complex(&self) -> Option<Complex64>                   - finite value, if any
//   approx_eq(&self, other: &ExtendedPoint, tol: f64) -> bool - tag equality plus tolerance on finite values
