//! Padé approximation of truncated series and of functional inverses.
//!
//! The [m/n] Padé approximant of a series c(x) is the rational function
//! P(x)/Q(x) with deg P <= m, deg Q <= n and Q(0) = 1 whose expansion
//! matches c through order m + n. The denominator coefficients solve the
//! n x n linear system given by orders m+1 .. m+n of c(x)·Q(x) ≡ P(x),
//! and the numerator follows by truncated multiplication.

use polyapprox_linalg::DenseMatrix;
use polyapprox_poly::DensePoly;
use polyapprox_rings::Field;
use polyapprox_series::reversion::{inverse_taylor, ReversionError};
use polyapprox_series::TaylorExpansion;
use thiserror::Error;

use crate::rational_func::RationalFunction;

/// Errors from Padé approximation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PadeError {
    /// The series does not retain enough coefficients for the requested orders.
    #[error("Pade [m/n] needs {needed} series coefficients, only {available} available")]
    InsufficientPrecision {
        /// Coefficients required: m + n + 1.
        needed: usize,
        /// Coefficients actually available.
        available: usize,
    },

    /// The linear system for the denominator has no solution.
    #[error("the Pade linear system is degenerate; no [m/n] approximant exists")]
    DegenerateSystem,

    /// The inverse series could not be formed.
    #[error(transparent)]
    Reversion(#[from] ReversionError),
}

/// Computes the [m/n] Padé approximant of a truncated series.
///
/// Takes at least m + n + 1 coefficients c₀, c₁, ... and returns (P, Q)
/// with c(x)·Q(x) ≡ P(x) (mod x^{m+n+1}) and Q(0) = 1.
///
/// # Example
///
/// ```
/// use polyapprox_rings::Q;
/// use polyapprox_rational::pade;
/// use polyapprox_series::PowerSeries;
///
/// // exp(x) [1/1] = (1 + x/2) / (1 - x/2)
/// let exp = PowerSeries::<Q>::exp(3);
/// let (p, q) = pade(exp.coeffs(), 1, 1).unwrap();
/// assert_eq!(p.coeff(1), Q::new(1, 2));
/// assert_eq!(q.coeff(1), Q::new(-1, 2));
/// ```
pub fn pade<F: Field>(
    c: &[F],
    m: usize,
    n: usize,
) -> Result<(DensePoly<F>, DensePoly<F>), PadeError> {
    let needed = m + n + 1;
    if c.len() < needed {
        return Err(PadeError::InsufficientPrecision {
            needed,
            available: c.len(),
        });
    }

    // Denominator: orders m+1 .. m+n of c·Q vanish, so
    //   Σⱼ₌₁ⁿ c₍ₘ₊ᵢ₋ⱼ₎ qⱼ = -c₍ₘ₊ᵢ₎   for i = 1..n,
    // with cₖ = 0 for k < 0.
    let mut den_coeffs = vec![F::one()];
    if n > 0 {
        let mut rows = Vec::with_capacity(n);
        let mut rhs = Vec::with_capacity(n);
        for i in 1..=n {
            let row = (1..=n)
                .map(|j| {
                    if j > m + i {
                        F::zero()
                    } else {
                        c[m + i - j].clone()
                    }
                })
                .collect();
            rows.push(row);
            rhs.push(-c[m + i].clone());
        }

        let q = DenseMatrix::from_rows(rows)
            .solve(&rhs)
            .ok_or(PadeError::DegenerateSystem)?;
        den_coeffs.extend(q);
    }
    let den = DensePoly::new(den_coeffs);

    // Numerator: the low orders of the same product
    let series = DensePoly::new(c[..needed].to_vec());
    let num = series.mul_truncated(&den, m + 1);

    Ok((num, den))
}

/// A Padé approximant of a function around a point.
///
/// Represents P(t)/Q(t) in the local variable t = y - center, with
/// Q(0) = 1.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PadeApproximant<F: Field> {
    /// The expansion point of the approximated function.
    center: F,
    /// Numerator polynomial in (y - center).
    numerator: DensePoly<F>,
    /// Denominator polynomial in (y - center), unit constant term.
    denominator: DensePoly<F>,
}

impl<F: Field> PadeApproximant<F> {
    /// Returns the expansion center.
    pub fn center(&self) -> &F {
        &self.center
    }

    /// Returns the numerator polynomial in (y - center).
    pub fn numerator(&self) -> &DensePoly<F> {
        &self.numerator
    }

    /// Returns the denominator polynomial in (y - center).
    pub fn denominator(&self) -> &DensePoly<F> {
        &self.denominator
    }

    /// Evaluates the approximant at a point y.
    ///
    /// Returns `None` at a pole of the denominator.
    pub fn eval(&self, y: &F) -> Option<F> {
        let t = y.clone() - self.center.clone();
        let den_inv = self.denominator.eval(&t).inv()?;
        Some(self.numerator.eval(&t) * den_inv)
    }

    /// Converts into a canonical rational function in t = y - center.
    pub fn into_rational_function(self) -> RationalFunction<F> {
        RationalFunction::new(self.numerator, self.denominator)
    }
}

/// Computes the [m/n] Padé approximant of a function's inverse.
///
/// Given the Taylor expansion of f around a with f'(a) ≠ 0 and at least
/// m + n + 1 retained coefficients, returns the [m/n] approximant of f⁻¹
/// around b = f(a), as a rational function in y - b.
pub fn inverse_pade<F: Field>(
    f: &TaylorExpansion<F>,
    m: usize,
    n: usize,
) -> Result<PadeApproximant<F>, PadeError> {
    let needed = m + n + 1;
    if f.precision() < needed {
        return Err(PadeError::InsufficientPrecision {
            needed,
            available: f.precision(),
        });
    }

    let inverse = inverse_taylor(f)?;
    let (num, den) = pade(&inverse.series().coeffs()[..needed], m, n)?;

    Ok(PadeApproximant {
        center: inverse.center().clone(),
        numerator: num,
        denominator: den,
    })
}
