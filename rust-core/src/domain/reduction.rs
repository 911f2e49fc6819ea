// Reduction module: Moves upper half-plane points into the standard fundamental domain
// This module alternates integer translations and the inversion z -> -1/z, the process
// behind continued-fraction expansions

use num_complex::Complex64;

use crate::config::MAX_REDUCTION_ITERATIONS;
use crate::complex::ExtendedPoint;
use crate::error::ModularError;
use crate::moebius::Moebius;

/// Outcome of a successful reduction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reduction {
    /// Element g with the target point inside g(F); the inverse of `reducing`
    pub element: Moebius,
    /// Element carrying the target point into F
    pub reducing: Moebius,
    /// Image of the target point under `reducing`, or `None` if it went to infinity
    pub reduced_point: Option<Complex64>,
    /// Number of translate/invert cycles used
    pub iterations: usize,
}

/// Function that reduces a point into a particular fundamental domain
pub type Reducer = fn(Complex64) -> Result<Reduction, ModularError>;

/// Reduce `z` into the standard domain |Re z| ≤ 1/2, |z| ≥ 1 with the default budget.
pub fn reduce_to_standard_domain(z: Complex64) -> Result<Reduction, ModularError> {
    reduce_with_budget(z, MAX_REDUCTION_ITERATIONS)
}

/// Reduce `z` into the standard domain using at most `max_iterations` cycles.
///
/// Each cycle translates by the nearest integer (halves round up), stops once the point
/// is on or outside the unit circle, and otherwise applies z ↦ -1/z.
///
/// # Errors
/// * [`ModularError::OutsideUpperHalfPlane`] if Im z ≤ 0
/// * [`ModularError::ReductionExhausted`] if the budget runs out
pub fn reduce_with_budget(z: Complex64, max_iterations: usize) -> Result<Reduction, ModularError> {
    if z.im <= 0.0 {
        return Err(ModularError::OutsideUpperHalfPlane);
    }

    // (0, 1, -1, 0) acts as z -> -1/z like S, with the opposite sign convention
    let invert = Moebius::new(0.0, 1.0, -1.0, 0.0);
    let mut reducing = Moebius::identity();
    let mut current = ExtendedPoint::Finite(z);

    for iteration in 1..=max_iterations {
        let w = match current {
            ExtendedPoint::Infinity => {
                return Ok(finish(reducing, None, iteration));
            }
            ExtendedPoint::Finite(w) => w,
        };

        let n = (w.re + 0.5).floor();
        reducing = Moebius::translation(-n).compose(&reducing);
        current = reducing.apply_complex(z);

        if let ExtendedPoint::Finite(w) = current {
            if w.norm_sqr() >= 1.0 {
                return Ok(finish(reducing, Some(w), iteration));
            }
        }

        reducing = invert.compose(&reducing);
        current = reducing.apply_complex(z);
    }

    Err(ModularError::ReductionExhausted {
        iterations: max_iterations,
    })
}

fn finish(reducing: Moebius, reduced_point: Option<Complex64>, iterations: usize) -> Reduction {
    Reduction {
        element: reducing.inverse(),
        reducing,
        reduced_point,
        iterations,
    }
}
