//! Polynomial algorithms.

pub mod gcd;
