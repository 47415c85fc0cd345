//! Dense univariate polynomials for the polyapprox workspace.
//!
//! Provides [`DensePoly`] with exact coefficient arithmetic, plus the
//! division, GCD and normalization routines the rational-function layer
//! builds on. Degrees in inverse approximation stay small, so all
//! multiplication is schoolbook.

pub mod algorithms;
pub mod dense;

#[cfg(test)]
mod proptests;

pub use dense::DensePoly;
