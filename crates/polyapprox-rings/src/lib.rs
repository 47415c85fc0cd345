//! Algebraic foundations for the polyapprox workspace.
//!
//! This crate provides:
//! - [`Ring`] and [`Field`]: the traits the polynomial and series crates
//!   are generic over
//! - [`Q`]: arbitrary precision rational numbers, the concrete coefficient
//!   field used throughout the tests and benchmarks

pub mod rationals;
pub mod traits;

pub use rationals::Q;
pub use traits::{Field, Ring};
