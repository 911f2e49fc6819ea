//! Modular group tessellation library
//!
//! This library provides the arithmetic behind fundamental-domain pictures of congruence
//! subgroups: Möbius transformations on the extended complex plane, right-coset
//! enumeration for Γ(N), Γ0(N) and Γ1(N), and reduction of upper half-plane points into
//! the standard fundamental domain of the modular group.

pub mod complex;
pub mod config;
pub mod congruence;
pub mod domain;
pub mod error;
pub mod moebius;

pub use error::ModularError;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, ModularError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A convenience prelude for importing common items.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::complex::{ComplexExt, ExtendedPoint};
    #[doc(no_inline)]
    pub use crate::congruence::{CongruenceSubgroup, CosetEnumerator, DedupStrategy, Level};
    #[doc(no_inline)]
    pub use crate::domain::{FundamentalDomain, Geodesic};
    #[doc(no_inline)]
    pub use crate::moebius::Moebius;
    #[doc(no_inline)]
    pub use num_complex::Complex64;
}
