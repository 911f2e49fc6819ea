// Moebius module: Projective action of 2x2 matrices on the extended complex plane
// This module provides the transformation type shared by the coset enumerator and the locator

// ======================== MODULE DECLARATIONS ========================
pub mod moebius_transform;

// Test modules
mod _tests_moebius;

// ======================== TRANSFORMATIONS ========================
pub use moebius_transform::Moebius; // struct - Möbius transformation z -> (az + b) / (cz + d)
// Moebius impl methods:
//   new(a: f64, b: f64, c: f64, d: f64) -> Self              - creates transformation from row-major entries
//   identity() -> Self                                       - (1, 0, 0, 1)
//   translation(n: f64) -> Self                              - z -> z + n
//   inversion() -> Self                                      - S = (0, -1, 1, 0), z -> -1/z
//   a(&self), b(&self), c(&self), d(&self) -> f64            - read-only entries
//   entries(&self) -> [f64; 4]                               - row-major entries
//   matrix(&self) -> &Matrix2<f64>                           - underlying matrix
//   determinant(&self) -> f64                                - ad - bc
//   compose(&self, other: &Moebius) -> Moebius               - self applied after other (also `*`)
//   inverse(&self) -> Moebius                                - adjugate, exact for determinant ±1
//   apply(&self, point: ExtendedPoint) -> ExtendedPoint      - projective action
//   apply_complex(&self, z: Complex64) -> ExtendedPoint      - action on a finite point
//   approx_eq(&self, other: &Moebius, tol: f64) -> bool      - entry-wise comparison
//   is_identity(&self, tol: f64) -> bool                     - entry-wise comparison with the identity
