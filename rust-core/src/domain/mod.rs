// Domain module: Fundamental domains, reduction and hyperbolic geodesics
// This module provides point location in the tessellation of the upper half-plane

// ======================== MODULE DECLARATIONS ========================
pub mod fundamental_domain;
pub mod geodesic;
pub mod reduction;


// ======================== FUNDAMENTAL DOMAINS ========================
pub use fundamental_domain::{
    FundamentalDomain,  // struct - corner polygon plus reducer
    in_standard_domain, // fn(z: Complex64, tol: f64) -> bool - closed standard domain test
};
// FundamentalDomain impl methods:
//   new(corners: Vec<ExtendedPoint>, reducer: Reducer) -> Self - custom domain
//   standard() -> Self                                       - |Re z| <= 1/2, |z| >= 1
//   corners(&self) -> &[ExtendedPoint]                       - boundary polygon
//   reduce(&self, point: ExtendedPoint) -> Result<Reduction> - detailed reduction
//   find_coset_of(&self, point: ExtendedPoint) -> Option<Moebius> - element g with point in g(F)
//   locate_representative(&self, subgroup, level, reps, point) -> Option<usize> - tile index
//   tile(&self, g: &Moebius) -> Vec<ExtendedPoint>           - corners of g(F)
//   tile_edges(&self, g: &Moebius) -> Vec<Geodesic>          - edges of g(F)

// ======================== REDUCTION ========================
pub use reduction::{
    Reducer,                   // type - fn(Complex64) -> Result<Reduction>
    Reduction,                 // struct - element, reducing element, reduced point, iteration count
    reduce_to_standard_domain, // fn(z: Complex64) -> Result<Reduction> - default budget
    reduce_with_budget,        // fn(z: Complex64, max_iterations: usize) -> Result<Reduction>
};

// ======================== GEODESICS ========================
pub use geodesic::Geodesic; // enum - Vertical, Arc or Degenerate segment
// Geodesic impl methods:
//   between(from: ExtendedPoint, to: ExtendedPoint) -> Self  - segment joining two points
//   is_unbounded(&self) -> bool                              - reaches infinity
//   sample(&self, segments: usize) -> Vec<Complex64>         - points along a bounded segment
