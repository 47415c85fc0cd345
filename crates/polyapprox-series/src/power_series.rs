//! Truncated formal power series.
//!
//! A series carries exactly `precision` coefficients; everything from
//! x^precision on is unknown, not zero. Binary operations truncate to the
//! smaller precision of their operands.

use polyapprox_rings::Field;

/// A truncated formal power series Σ aₙxⁿ.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PowerSeries<F: Field> {
    /// Coefficients a₀, a₁, ... in ascending order; the length is the
    /// precision of the series.
    coeffs: Vec<F>,
}

impl<F: Field> PowerSeries<F> {
    /// Creates a series from explicit coefficients.
    ///
    /// The precision equals the number of coefficients supplied.
    #[must_use]
    pub fn from_coeffs(coeffs: Vec<F>) -> Self {
        Self { coeffs }
    }

    /// Creates the zero series with the given precision.
    #[must_use]
    pub fn zero(precision: usize) -> Self {
        Self {
            coeffs: vec![F::zero(); precision],
        }
    }

    /// Creates a constant series with the given precision.
    #[must_use]
    pub fn constant(c: F, precision: usize) -> Self {
        let mut coeffs = vec![F::zero(); precision];
        if precision > 0 {
            coeffs[0] = c;
        }
        Self { coeffs }
    }

    /// Creates the identity series x with the given precision.
    #[must_use]
    pub fn identity(precision: usize) -> Self {
        let mut coeffs = vec![F::zero(); precision];
        if precision > 1 {
            coeffs[1] = F::one();
        }
        Self { coeffs }
    }

    /// Returns the coefficient of xⁿ.
    ///
    /// Coefficients at or beyond the precision read as zero.
    #[must_use]
    pub fn coeff(&self, n: usize) -> F {
        self.coeffs.get(n).cloned().unwrap_or_else(F::zero)
    }

    /// Returns the retained coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[F] {
        &self.coeffs
    }

    /// Returns the precision (number of retained coefficients).
    #[must_use]
    pub fn precision(&self) -> usize {
        self.coeffs.len()
    }

    /// Truncates to a lower precision.
    #[must_use]
    pub fn truncate(&self, precision: usize) -> Self {
        let mut coeffs = self.coeffs.clone();
        coeffs.truncate(precision);
        Self { coeffs }
    }

    /// Adds two series.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let precision = self.precision().min(other.precision());
        let coeffs = (0..precision)
            .map(|n| self.coeff(n) + other.coeff(n))
            .collect();
        Self { coeffs }
    }

    /// Subtracts two series.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let precision = self.precision().min(other.precision());
        let coeffs = (0..precision)
            .map(|n| self.coeff(n) - other.coeff(n))
            .collect();
        Self { coeffs }
    }

    /// Scales a series by a constant.
    #[must_use]
    pub fn scale(&self, c: &F) -> Self {
        let coeffs = self.coeffs.iter().map(|a| a.clone() * c.clone()).collect();
        Self { coeffs }
    }

    /// Multiplies two series (truncated Cauchy product).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let precision = self.precision().min(other.precision());
        let mut coeffs = vec![F::zero(); precision];

        for (i, a) in self.coeffs.iter().enumerate().take(precision) {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                if i + j >= precision {
                    break;
                }
                coeffs[i + j] = coeffs[i + j].clone() + a.clone() * b.clone();
            }
        }

        Self { coeffs }
    }

    /// Computes the multiplicative inverse 1/f.
    ///
    /// Returns `None` if f(0) = 0. Uses the Cauchy-product recurrence
    /// gₙ = -1/f₀ · Σᵢ₌₁ⁿ fᵢ g₍ₙ₋ᵢ₎.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let precision = self.precision();
        let f0_inv = self.coeff(0).inv()?;

        let mut g = Vec::with_capacity(precision);
        if precision > 0 {
            g.push(f0_inv.clone());
        }

        for n in 1..precision {
            let mut sum = F::zero();
            for i in 1..=n {
                sum = sum + self.coeff(i) * g[n - i].clone();
            }
            g.push(-(f0_inv.clone() * sum));
        }

        Some(Self { coeffs: g })
    }

    /// Divides two series.
    ///
    /// Returns `None` if the divisor has a zero constant term.
    #[must_use]
    pub fn div(&self, other: &Self) -> Option<Self> {
        Some(self.mul(&other.inverse()?))
    }

    /// Computes the composition f(g(x)).
    ///
    /// Requires g(0) = 0; returns `None` otherwise.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Option<Self> {
        if other.precision() > 0 && !other.coeff(0).is_zero() {
            return None;
        }

        let precision = self.precision().min(other.precision());
        let mut result = Self::constant(self.coeff(0), precision);

        // Accumulate f_k g^k; g has valuation >= 1, so powers past the
        // precision contribute nothing.
        let mut power = other.truncate(precision);
        for k in 1..precision {
            result = result.add(&power.scale(&self.coeff(k)));
            power = power.mul(other);
        }

        Some(result)
    }
}

/// Standard expansions at the origin.
impl<F: Field> PowerSeries<F> {
    /// exp(x) = Σ xⁿ/n!
    #[must_use]
    pub fn exp(precision: usize) -> Self {
        let mut coeffs = Vec::with_capacity(precision);
        let mut inv_factorial = F::one();
        for n in 0..precision {
            if n > 0 {
                inv_factorial = inv_factorial.field_div(&F::from_usize(n));
            }
            coeffs.push(inv_factorial.clone());
        }
        Self { coeffs }
    }

    /// sin(x) = x - x³/3! + x⁵/5! - ...
    #[must_use]
    pub fn sin(precision: usize) -> Self {
        let exp = Self::exp(precision);
        let mut coeffs = vec![F::zero(); precision];
        for n in (1..precision).step_by(2) {
            let term = exp.coeff(n);
            coeffs[n] = if (n / 2) % 2 == 0 { term } else { -term };
        }
        Self { coeffs }
    }

    /// cos(x) = 1 - x²/2! + x⁴/4! - ...
    #[must_use]
    pub fn cos(precision: usize) -> Self {
        let exp = Self::exp(precision);
        let mut coeffs = vec![F::zero(); precision];
        for n in (0..precision).step_by(2) {
            let term = exp.coeff(n);
            coeffs[n] = if (n / 2) % 2 == 0 { term } else { -term };
        }
        Self { coeffs }
    }

    /// log(1+x) = x - x²/2 + x³/3 - ...
    #[must_use]
    pub fn log1p(precision: usize) -> Self {
        let mut coeffs = vec![F::zero(); precision];
        for (n, c) in coeffs.iter_mut().enumerate().skip(1) {
            let term = F::one().field_div(&F::from_usize(n));
            *c = if n % 2 == 1 { term } else { -term };
        }
        Self { coeffs }
    }

    /// 1/(1-x) = 1 + x + x² + ...
    #[must_use]
    pub fn geometric(precision: usize) -> Self {
        Self {
            coeffs: vec![F::one(); precision],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyapprox_rings::Q;

    fn q(n: i64, d: i64) -> Q {
        Q::new(n, d)
    }

    fn series(coeffs: &[i64]) -> PowerSeries<Q> {
        PowerSeries::from_coeffs(coeffs.iter().map(|&n| Q::from_integer(n)).collect())
    }

    #[test]
    fn test_add_truncates() {
        let a = series(&[1, 2, 3]);
        let b = series(&[4, 5]);
        let sum = a.add(&b);

        assert_eq!(sum.precision(), 2);
        assert_eq!(sum.coeff(0), q(5, 1));
        assert_eq!(sum.coeff(1), q(7, 1));
    }

    #[test]
    fn test_mul() {
        // (1 + 2x)(3 + 4x) = 3 + 10x + 8x² but precision 2 keeps 3 + 10x
        let prod = series(&[1, 2]).mul(&series(&[3, 4]));

        assert_eq!(prod.precision(), 2);
        assert_eq!(prod.coeff(0), q(3, 1));
        assert_eq!(prod.coeff(1), q(10, 1));
    }

    #[test]
    fn test_inverse_geometric() {
        // 1/(1-x) = 1 + x + x² + ...
        let f = series(&[1, -1, 0, 0, 0]);
        let inv = f.inverse().unwrap();

        for n in 0..5 {
            assert_eq!(inv.coeff(n), q(1, 1));
        }
    }

    #[test]
    fn test_inverse_roundtrip() {
        let f = PowerSeries::<Q>::exp(8);
        let product = f.mul(&f.inverse().unwrap());

        assert_eq!(product.coeff(0), q(1, 1));
        for n in 1..8 {
            assert_eq!(product.coeff(n), q(0, 1));
        }
    }

    #[test]
    fn test_inverse_zero_constant_term() {
        assert!(series(&[0, 1]).inverse().is_none());
    }

    #[test]
    fn test_compose_requires_zero_constant() {
        let f = series(&[1, 1]);
        assert!(f.compose(&series(&[1, 1])).is_none());
        assert!(f.compose(&series(&[0, 1])).is_some());
    }

    #[test]
    fn test_compose_identity() {
        let f = PowerSeries::<Q>::log1p(6);
        let composed = f.compose(&PowerSeries::identity(6)).unwrap();

        assert_eq!(composed, f);
    }

    #[test]
    fn test_compose_exp_of_2x() {
        // exp(2x) has coefficients 2ⁿ/n!
        let f = PowerSeries::<Q>::exp(6);
        let g = series(&[0, 2, 0, 0, 0, 0]);
        let composed = f.compose(&g).unwrap();

        assert_eq!(composed.coeff(0), q(1, 1));
        assert_eq!(composed.coeff(1), q(2, 1));
        assert_eq!(composed.coeff(2), q(2, 1));
        assert_eq!(composed.coeff(3), q(4, 3));
        assert_eq!(composed.coeff(4), q(2, 3));
    }

    #[test]
    fn test_exp_coeffs() {
        let exp = PowerSeries::<Q>::exp(5);

        assert_eq!(exp.coeff(0), q(1, 1));
        assert_eq!(exp.coeff(1), q(1, 1));
        assert_eq!(exp.coeff(2), q(1, 2));
        assert_eq!(exp.coeff(3), q(1, 6));
        assert_eq!(exp.coeff(4), q(1, 24));
    }

    #[test]
    fn test_sin_cos_coeffs() {
        let sin = PowerSeries::<Q>::sin(6);
        assert_eq!(sin.coeff(1), q(1, 1));
        assert_eq!(sin.coeff(2), q(0, 1));
        assert_eq!(sin.coeff(3), q(-1, 6));
        assert_eq!(sin.coeff(5), q(1, 120));

        let cos = PowerSeries::<Q>::cos(6);
        assert_eq!(cos.coeff(0), q(1, 1));
        assert_eq!(cos.coeff(2), q(-1, 2));
        assert_eq!(cos.coeff(4), q(1, 24));
    }

    #[test]
    fn test_log1p_coeffs() {
        let log = PowerSeries::<Q>::log1p(5);

        assert_eq!(log.coeff(0), q(0, 1));
        assert_eq!(log.coeff(1), q(1, 1));
        assert_eq!(log.coeff(2), q(-1, 2));
        assert_eq!(log.coeff(3), q(1, 3));
        assert_eq!(log.coeff(4), q(-1, 4));
    }

    #[test]
    fn test_pythagorean_identity() {
        // sin² + cos² = 1 to precision
        let sin = PowerSeries::<Q>::sin(8);
        let cos = PowerSeries::<Q>::cos(8);
        let sum = sin.mul(&sin).add(&cos.mul(&cos));

        assert_eq!(sum.coeff(0), q(1, 1));
        for n in 1..8 {
            assert_eq!(sum.coeff(n), q(0, 1));
        }
    }
}
