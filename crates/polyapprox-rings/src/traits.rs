//! Algebraic structure traits.
//!
//! Coefficient arithmetic in this workspace is generic over these traits.
//! Only the two levels the approximation algorithms actually need are
//! modeled: rings (polynomial coefficients) and fields (everything that
//! divides: series reversion, Padé denominators, Gaussian elimination).

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A commutative ring with identity.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Embeds the non-negative integer n as 1 + 1 + ... (n times).
    fn from_usize(n: usize) -> Self {
        let one = Self::one();
        let mut result = Self::zero();
        for _ in 0..n {
            result = result + one.clone();
        }
        result
    }

    /// Computes self + self + ... (n times), negated for negative n.
    fn mul_by_scalar(&self, n: i64) -> Self {
        if n == 0 {
            return Self::zero();
        }

        let mut result = self.clone();
        let abs_n = n.unsigned_abs();

        for _ in 1..abs_n {
            result = result + self.clone();
        }

        if n < 0 {
            -result
        } else {
            result
        }
    }

    /// Computes self^n for non-negative n by binary exponentiation.
    fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A field: a ring where every non-zero element has a multiplicative inverse.
pub trait Field: Ring {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    fn field_div(&self, other: &Self) -> Self {
        self.clone() * other.inv().expect("division by zero")
    }
}
