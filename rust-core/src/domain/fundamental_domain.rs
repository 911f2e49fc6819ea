// Fundamental domain module: Corner polygon plus reduction for a domain of the modular group
// This module locates points in the tessellation and produces the tiles a renderer draws

use log::{debug, warn};
use num_complex::Complex64;

use crate::complex::ExtendedPoint;
use crate::congruence::{CongruenceSubgroup, Level};
use crate::domain::geodesic::Geodesic;
use crate::domain::reduction::{Reducer, Reduction, reduce_to_standard_domain};
use crate::error::ModularError;
use crate::moebius::Moebius;

/// Fundamental domain of the modular group
///
/// The boundary is the ordered corner list, traversed once; the last and first corner
/// close the polygon. Edges are hyperbolic geodesics. The reducer maps a point to the
/// group element whose copy of the domain contains it.
#[derive(Debug, Clone)]
pub struct FundamentalDomain {
    corners: Vec<ExtendedPoint>,
    reducer: Reducer,
}

impl FundamentalDomain {
    /// Create a domain from its corner polygon and its reduction function
    pub fn new(corners: Vec<ExtendedPoint>, reducer: Reducer) -> Self {
        Self { corners, reducer }
    }

    /// The standard domain |Re z| ≤ 1/2, |z| ≥ 1
    ///
    /// Corners are e^{2πi/3}, e^{πi/3} and infinity.
    pub fn standard() -> Self {
        let h = 3.0_f64.sqrt() / 2.0;
        Self::new(
            vec![
                ExtendedPoint::finite(-0.5, h),
                ExtendedPoint::finite(0.5, h),
                ExtendedPoint::Infinity,
            ],
            reduce_to_standard_domain,
        )
    }

    pub fn corners(&self) -> &[ExtendedPoint] {
        &self.corners
    }

    /// Reduce a point, reporting the details of the reduction
    ///
    /// # Errors
    /// * [`ModularError::OutsideUpperHalfPlane`] for infinity or Im ≤ 0
    /// * [`ModularError::ReductionExhausted`] if the reducer gives up
    pub fn reduce(&self, point: ExtendedPoint) -> Result<Reduction, ModularError> {
        let z = point
            .as_complex()
            .ok_or(ModularError::OutsideUpperHalfPlane)?;
        let reduction = (self.reducer)(z)?;
        debug!(
            "Reduced {} in {} iterations to {}",
            z, reduction.iterations, reduction.element
        );
        Ok(reduction)
    }

    /// Group element g such that `point` lies in g(F)
    ///
    /// Returns `None` outside the upper half-plane and when the reduction budget runs
    /// out; the latter is logged as a warning.
    pub fn find_coset_of(&self, point: ExtendedPoint) -> Option<Moebius> {
        match self.reduce(point) {
            Ok(reduction) => Some(reduction.element),
            Err(ModularError::ReductionExhausted { iterations }) => {
                warn!(
                    "Failed to reduce {} into the fundamental domain after {} iterations",
                    point, iterations
                );
                None
            }
            Err(_) => None,
        }
    }

    /// Index of the representative whose tile contains `point`
    ///
    /// The tiles `r(F)` for the representatives `r` of `subgroup` form a fundamental
    /// domain of the subgroup; this picks the one the point is equivalent to.
    pub fn locate_representative(
        &self,
        subgroup: CongruenceSubgroup,
        level: Level,
        representatives: &[Moebius],
        point: ExtendedPoint,
    ) -> Option<usize> {
        let g = self.find_coset_of(point)?;
        subgroup.find_coset_index(level, representatives, &g)
    }

    /// Corners of the copy g(F)
    pub fn tile(&self, g: &Moebius) -> Vec<ExtendedPoint> {
        self.corners.iter().map(|&c| g.apply(c)).collect()
    }

    /// Boundary geodesics of g(F), closing edge included
    pub fn tile_edges(&self, g: &Moebius) -> Vec<Geodesic> {
        let corners = self.tile(g);
        let n = corners.len();
        (0..n)
            .map(|i| Geodesic::between(corners[i], corners[(i + 1) % n]))
            .collect()
    }
}

impl Default for FundamentalDomain {
    fn default() -> Self {
        Self::standard()
    }
}

/// Check if a finite point lies in the closed standard domain, within `tol`
pub fn in_standard_domain(z: Complex64, tol: f64) -> bool {
    z.im > 0.0 && z.re.abs() <= 0.5 + tol && z.norm() >= 1.0 - tol
}
