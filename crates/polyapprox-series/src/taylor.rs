//! Taylor expansion of functions around a point.
//!
//! A `TaylorExpansion` is a power series in (x-a) together with the
//! expansion point a: f(x) = Σᵢ (f⁽ⁱ⁾(a)/i!) (x-a)ⁱ.

use polyapprox_rings::Field;

use crate::power_series::PowerSeries;

/// A Taylor expansion around a point.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TaylorExpansion<F: Field> {
    /// The expansion point a.
    center: F,
    /// The power series in (x-a).
    series: PowerSeries<F>,
}

impl<F: Field> TaylorExpansion<F> {
    /// Creates a Taylor expansion from a power series at a point.
    pub fn new(center: F, series: PowerSeries<F>) -> Self {
        Self { center, series }
    }

    /// Creates a Taylor expansion from explicit coefficients.
    ///
    /// The coefficients are already divided by n!.
    pub fn from_coefficients(center: F, coefficients: Vec<F>) -> Self {
        Self {
            center,
            series: PowerSeries::from_coeffs(coefficients),
        }
    }

    /// Creates a Taylor expansion from derivatives at a point.
    ///
    /// Given f(a), f'(a), f''(a), ..., constructs the Taylor series with
    /// coefficients f⁽ⁿ⁾(a)/n!.
    pub fn from_derivatives(center: F, derivatives: Vec<F>) -> Self {
        let mut factorial = F::one();
        let coeffs: Vec<F> = derivatives
            .into_iter()
            .enumerate()
            .map(|(n, d)| {
                if n > 0 {
                    factorial = factorial.clone() * F::from_usize(n);
                }
                d.field_div(&factorial)
            })
            .collect();

        Self {
            center,
            series: PowerSeries::from_coeffs(coeffs),
        }
    }

    /// Returns the expansion center.
    pub fn center(&self) -> &F {
        &self.center
    }

    /// Returns the underlying power series.
    pub fn series(&self) -> &PowerSeries<F> {
        &self.series
    }

    /// Returns the coefficient of (x-a)ⁿ.
    pub fn coeff(&self, n: usize) -> F {
        self.series.coeff(n)
    }

    /// Returns the precision (number of retained coefficients).
    pub fn precision(&self) -> usize {
        self.series.precision()
    }

    /// Evaluates the truncated expansion at a point x.
    ///
    /// Computes Σᵢ aᵢ(x-a)ⁱ over the retained coefficients.
    pub fn evaluate(&self, x: &F) -> F {
        let h = x.clone() - self.center.clone();
        let mut result = F::zero();

        // Horner, highest coefficient first
        for n in (0..self.series.precision()).rev() {
            result = result * h.clone() + self.series.coeff(n);
        }

        result
    }
}

/// Standard Taylor expansions at the origin.
impl<F: Field> TaylorExpansion<F> {
    /// Taylor expansion of exp(x) at 0.
    pub fn exp(precision: usize) -> Self {
        Self::new(F::zero(), PowerSeries::exp(precision))
    }

    /// Taylor expansion of sin(x) at 0.
    pub fn sin(precision: usize) -> Self {
        Self::new(F::zero(), PowerSeries::sin(precision))
    }

    /// Taylor expansion of cos(x) at 0.
    pub fn cos(precision: usize) -> Self {
        Self::new(F::zero(), PowerSeries::cos(precision))
    }

    /// Taylor expansion of log(1+x) at 0.
    pub fn log1p(precision: usize) -> Self {
        Self::new(F::zero(), PowerSeries::log1p(precision))
    }

    /// Taylor expansion of 1/(1-x) at 0.
    pub fn geometric(precision: usize) -> Self {
        Self::new(F::zero(), PowerSeries::geometric(precision))
    }
}
