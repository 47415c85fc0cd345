//! Exact dense linear algebra for the polyapprox workspace.
//!
//! The Padé coefficient system is a small square linear system over the
//! coefficient field; [`DenseMatrix::solve`] handles it by Gauss-Jordan
//! elimination with exact arithmetic.

pub mod matrix;

pub use matrix::DenseMatrix;
