//! Rational functions and Padé approximation.
//!
//! This crate provides:
//! - [`RationalFunction`]: canonical quotients of polynomials
//! - [`pade`]: the [m/n] Padé approximant of a truncated series
//! - [`PadeApproximant`] and [`inverse_pade`]: rational approximation of a
//!   function's inverse around a point

pub mod pade;
pub mod rational_func;

pub use pade::{inverse_pade, pade, PadeApproximant, PadeError};
pub use rational_func::RationalFunction;
