// Constants

// Iteration budgets
pub const MAX_REDUCTION_ITERATIONS: usize = 100; // Translate/invert cycles before the locator gives up

// Tolerances
pub const MOEBIUS_TOLERANCE: f64 = 1e-10; // Entry-wise comparison of transformations
pub const GEODESIC_VERTICAL_TOLERANCE: f64 = 1e-10; // Real parts closer than this span a vertical geodesic
pub const DOMAIN_TOLERANCE: f64 = 1e-9; // Boundary slack for membership in the standard domain
