//! Series reversion and Taylor expansion of functional inverses.
//!
//! Given f with f(0) = 0 and f'(0) ≠ 0, the reversion of f is the series
//! g with f(g(y)) = y and g(f(x)) = x. [`revert`] computes it by the
//! coefficient recurrence obtained from [yⁿ] f(g(y)) = 0; [`inverse_taylor`]
//! lifts it to expansions around an arbitrary point.

use polyapprox_rings::Field;
use thiserror::Error;

use crate::power_series::PowerSeries;
use crate::taylor::TaylorExpansion;

/// Errors from series reversion.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReversionError {
    /// Fewer than two coefficients: the linear term is not even represented.
    #[error("series must retain at least two coefficients to be reverted")]
    InsufficientPrecision,

    /// f(0) ≠ 0: the series is not a reversion candidate around the origin.
    #[error("series has a non-zero constant term")]
    NonzeroConstantTerm,

    /// f'(0) = 0: no compositional inverse exists as a formal power series.
    #[error("series has a zero linear coefficient and cannot be reverted")]
    ZeroLinearCoefficient,
}

/// Computes the compositional inverse (reversion) of a power series.
///
/// Given f with f(0) = 0 and f'(0) ≠ 0, returns g with f(g(y)) = y to the
/// precision of the input.
///
/// # Example
///
/// ```
/// use polyapprox_rings::Q;
/// use polyapprox_series::{revert, PowerSeries};
///
/// // revert(log(1+x)) = exp(y) - 1
/// let log = PowerSeries::<Q>::log1p(5);
/// let expm1 = revert(&log).unwrap();
/// assert_eq!(expm1.coeff(2), Q::new(1, 2));
/// assert_eq!(expm1.coeff(3), Q::new(1, 6));
/// ```
pub fn revert<F: Field>(f: &PowerSeries<F>) -> Result<PowerSeries<F>, ReversionError> {
    let precision = f.precision();
    if precision < 2 {
        return Err(ReversionError::InsufficientPrecision);
    }
    if !f.coeff(0).is_zero() {
        return Err(ReversionError::NonzeroConstantTerm);
    }
    let f1_inv = f
        .coeff(1)
        .inv()
        .ok_or(ReversionError::ZeroLinearCoefficient)?;

    let mut g = vec![F::zero(); precision];
    g[1] = f1_inv.clone();

    // From [yⁿ] f(g(y)) = 0 for n >= 2:
    //
    //   f₁·gₙ = -[yⁿ] Σₖ₌₂ⁿ fₖ·g(y)ᵏ
    //
    // The right-hand side only involves g₁..gₙ₋₁, because g has valuation 1
    // and every index in a k-fold product (k >= 2) summing to n stays below n.
    for n in 2..precision {
        let g_known = PowerSeries::from_coeffs(g[..=n].to_vec());
        let mut power = g_known.mul(&g_known);
        let mut rhs = F::zero();

        for k in 2..=n {
            let f_k = f.coeff(k);
            if !f_k.is_zero() {
                rhs = rhs + f_k * power.coeff(n);
            }
            if k < n {
                power = power.mul(&g_known);
            }
        }

        g[n] = -(f1_inv.clone() * rhs);
    }

    Ok(PowerSeries::from_coeffs(g))
}

/// Computes the Taylor expansion of a function's inverse.
///
/// Given the expansion of f around a with f'(a) ≠ 0, returns the expansion
/// of f⁻¹ around b = f(a). The constant coefficient of the result is a,
/// and its precision matches the input.
pub fn inverse_taylor<F: Field>(
    f: &TaylorExpansion<F>,
) -> Result<TaylorExpansion<F>, ReversionError> {
    // Shift so the series to revert vanishes at the origin: the reversion
    // of f(x) - f(a) in (x - a) is f⁻¹ in (y - b).
    let mut shifted = f.series().coeffs().to_vec();
    if shifted.is_empty() {
        return Err(ReversionError::InsufficientPrecision);
    }
    let b = std::mem::replace(&mut shifted[0], F::zero());

    let reverted = revert(&PowerSeries::from_coeffs(shifted))?;

    let mut coeffs = reverted.coeffs().to_vec();
    coeffs[0] = f.center().clone();

    Ok(TaylorExpansion::from_coefficients(b, coeffs))
}
