use num_complex::Complex64;
use std::f64::consts::PI;

/// Operations on [`Complex64`] that the Möbius and geodesic code relies on.
pub trait ComplexExt {
    /// Principal argument in `[0, 2π)`.
    ///
    /// On the imaginary axis this is π/2 above the origin, 3π/2 below it, and 0 at the
    /// origin itself.
    fn principal_arg(&self) -> f64;

    /// True only if both components are exactly zero
    fn is_exact_zero(&self) -> bool;
}

impl ComplexExt for Complex64 {
    fn principal_arg(&self) -> f64 {
        let (re, im) = (self.re, self.im);
        if re == 0.0 {
            return if im > 0.0 {
                0.5 * PI
            } else if im < 0.0 {
                1.5 * PI
            } else {
                0.0
            };
        }
        let phi = (im / re).atan();
        if re > 0.0 {
            if phi < 0.0 {
                2.0 * PI + phi
            } else {
                phi
            }
        } else {
            phi + PI
        }
    }

    fn is_exact_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}
