//! Truncated power series and Taylor expansions.
//!
//! This crate provides:
//! - [`PowerSeries`]: truncated formal power series with exact coefficients
//! - [`TaylorExpansion`]: a power series together with its expansion center
//! - [`revert`]: series reversion (the compositional inverse)
//! - [`inverse_taylor`]: the Taylor expansion of a function's inverse
//!
//! # Key algorithms
//!
//! - Reversion: coefficient recurrence from [yⁿ] f(g(y)) = 0
//! - Multiplicative inversion: Cauchy-product recurrence
//! - Composition: truncated Horner accumulation

pub mod power_series;
pub mod reversion;
pub mod taylor;

#[cfg(test)]
mod proptests;

pub use power_series::PowerSeries;
pub use reversion::{inverse_taylor, revert, ReversionError};
pub use taylor::TaylorExpansion;
