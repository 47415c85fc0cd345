//! Dense univariate polynomials.
//!
//! Coefficients are stored in ascending degree order with trailing zeros
//! stripped; the zero polynomial is a single zero coefficient.

use polyapprox_rings::Ring;

/// A dense univariate polynomial.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DensePoly<R: Ring> {
    /// Coefficients in ascending degree order.
    coeffs: Vec<R>,
}

impl<R: Ring> DensePoly<R> {
    /// Creates a new polynomial from coefficients, stripping trailing zeros.
    #[must_use]
    pub fn new(mut coeffs: Vec<R>) -> Self {
        while coeffs.len() > 1 && coeffs.last().is_some_and(Ring::is_zero) {
            coeffs.pop();
        }

        if coeffs.is_empty() {
            coeffs.push(R::zero());
        }

        Self { coeffs }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![R::zero()],
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![R::one()],
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::new(vec![c])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::new(vec![R::zero(), R::one()])
    }

    /// Returns the degree of the polynomial.
    ///
    /// The zero polynomial has degree 0 under this convention.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> &R {
        self.coeffs.last().expect("coefficient vector is never empty")
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        let mut result = R::zero();
        for c in self.coeffs.iter().rev() {
            result = result * x.clone() + c.clone();
        }
        result
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);

        for i in 0..len {
            let a = self.coeffs.get(i).cloned().unwrap_or_else(R::zero);
            let b = other.coeffs.get(i).cloned().unwrap_or_else(R::zero);
            result.push(a + b);
        }

        Self::new(result)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(self.coeffs.iter().map(|c| -c.clone()).collect())
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials (schoolbook).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![R::zero(); n + m - 1];

        for i in 0..n {
            if self.coeffs[i].is_zero() {
                continue;
            }
            for j in 0..m {
                result[i + j] =
                    result[i + j].clone() + self.coeffs[i].clone() * other.coeffs[j].clone();
            }
        }

        Self::new(result)
    }

    /// Multiplies two polynomials modulo x^len.
    ///
    /// Used where the product stands in for a truncated power series.
    #[must_use]
    pub fn mul_truncated(&self, other: &Self, len: usize) -> Self {
        if len == 0 || self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let mut result = vec![R::zero(); len.min(self.coeffs.len() + other.coeffs.len() - 1)];

        for (i, a) in self.coeffs.iter().enumerate() {
            if i >= len {
                break;
            }
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                if i + j >= len {
                    break;
                }
                result[i + j] = result[i + j].clone() + a.clone() * b.clone();
            }
        }

        Self::new(result)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self::new(self.coeffs.iter().map(|x| x.clone() * c.clone()).collect())
    }

    /// Computes the formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.degree() == 0 {
            return Self::zero();
        }

        let mut result = Vec::with_capacity(self.coeffs.len() - 1);
        for (i, c) in self.coeffs.iter().skip(1).enumerate() {
            result.push(c.mul_by_scalar((i + 1) as i64));
        }

        Self::new(result)
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            exp >>= 1;
        }

        result
    }
}

impl<R: Ring> std::fmt::Display for DensePoly<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms = Vec::new();
        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }

            let term = match i {
                0 => format!("{c:?}"),
                1 => format!("{c:?}*x"),
                _ => format!("{c:?}*x^{i}"),
            };
            terms.push(term);
        }

        write!(f, "{}", terms.join(" + "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyapprox_rings::Q;

    fn poly(coeffs: &[i64]) -> DensePoly<Q> {
        DensePoly::new(coeffs.iter().map(|&n| Q::from_integer(n)).collect())
    }

    #[test]
    fn test_normalization() {
        let p = poly(&[1, 2, 0, 0]);
        assert_eq!(p.degree(), 1);

        let z = poly(&[0, 0]);
        assert!(z.is_zero());
        assert_eq!(z, DensePoly::zero());
    }

    #[test]
    fn test_add_sub() {
        let p = poly(&[1, 2]);
        let q = poly(&[3, 4, 5]);

        let sum = p.add(&q);
        assert_eq!(sum, poly(&[4, 6, 5]));
        assert_eq!(sum.sub(&q), p);
    }

    #[test]
    fn test_mul() {
        // (1 + 2x)(3 + 4x) = 3 + 10x + 8x^2
        let prod = poly(&[1, 2]).mul(&poly(&[3, 4]));
        assert_eq!(prod, poly(&[3, 10, 8]));
    }

    #[test]
    fn test_mul_truncated() {
        let a = poly(&[1, 1, 1]);
        let b = poly(&[1, 2, 3]);

        let full = a.mul(&b);
        let trunc = a.mul_truncated(&b, 3);

        for i in 0..3 {
            assert_eq!(trunc.coeff(i), full.coeff(i));
        }
        assert!(trunc.degree() < 3);
    }

    #[test]
    fn test_eval() {
        // p(x) = 1 + 2x + 3x^2, p(2) = 17
        let p = poly(&[1, 2, 3]);
        assert_eq!(p.eval(&Q::from_integer(2)), Q::from_integer(17));
    }

    #[test]
    fn test_derivative() {
        // d/dx (1 + 2x + 3x^2) = 2 + 6x
        assert_eq!(poly(&[1, 2, 3]).derivative(), poly(&[2, 6]));
    }

    #[test]
    fn test_pow() {
        // (1 + x)^3 = 1 + 3x + 3x^2 + x^3
        assert_eq!(poly(&[1, 1]).pow(3), poly(&[1, 3, 3, 1]));
    }
}
