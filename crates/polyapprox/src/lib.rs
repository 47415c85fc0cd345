//! # polyapprox
//!
//! Some tools for forming polynomial or rational approximations of the
//! inverse of a function.
//!
//! Given the truncated Taylor expansion of f around a point a with
//! f'(a) ≠ 0, this crate computes:
//!
//! - [`revert`]: the compositional inverse of a formal power series
//! - [`inverse_taylor`]: the Taylor expansion of f⁻¹ around f(a)
//! - [`inverse_pade`]: the \[m/n\] Padé approximant of f⁻¹ around f(a)
//!
//! All arithmetic is exact over a coefficient [`Field`](rings::Field); the
//! rationals [`Q`](rings::Q) are the concrete field used throughout the
//! examples.
//!
//! ## Quick start
//!
//! ```
//! use polyapprox::prelude::*;
//! use polyapprox::{inverse_pade, inverse_taylor};
//!
//! // exp around 0, retaining 5 coefficients
//! let exp: TaylorExpansion<Q> = TaylorExpansion::exp(5);
//!
//! // Taylor expansion of log around 1
//! let log = inverse_taylor(&exp).unwrap();
//! assert_eq!(log.coeff(2), Q::new(-1, 2));
//!
//! // [2/2] rational approximation of log around 1
//! let approx = inverse_pade(&exp, 2, 2).unwrap();
//! assert_eq!(approx.center(), &Q::from_integer(1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use polyapprox_linalg as linalg;
pub use polyapprox_poly as poly;
pub use polyapprox_rational as rational;
pub use polyapprox_rings as rings;
pub use polyapprox_series as series;

pub use polyapprox_rational::inverse_pade;
pub use polyapprox_series::{inverse_taylor, revert};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use polyapprox_poly::DensePoly;
    pub use polyapprox_rational::{inverse_pade, pade, PadeApproximant, RationalFunction};
    pub use polyapprox_rings::{Field, Ring, Q};
    pub use polyapprox_series::{inverse_taylor, revert, PowerSeries, TaylorExpansion};
}
