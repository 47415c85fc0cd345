//! Core rational function type.
//!
//! A rational function is a quotient of two polynomials P(x)/Q(x) in
//! canonical form:
//! - The denominator is monic (leading coefficient = 1)
//! - The numerator and denominator are coprime (gcd = 1)
//! - Zero is represented as 0/1

use polyapprox_poly::algorithms::gcd::{make_monic, poly_div_rem, poly_gcd};
use polyapprox_poly::DensePoly;
use polyapprox_rings::Field;

/// A rational function P(x)/Q(x) over a field.
#[derive(Clone, Debug)]
pub struct RationalFunction<F: Field> {
    numerator: DensePoly<F>,
    denominator: DensePoly<F>,
}

impl<F: Field> RationalFunction<F> {
    /// Creates a new rational function from numerator and denominator.
    ///
    /// The result is automatically normalized to canonical form.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    pub fn new(numerator: DensePoly<F>, denominator: DensePoly<F>) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");

        let mut rf = Self {
            numerator,
            denominator,
        };
        rf.normalize();
        rf
    }

    /// Creates a rational function from a polynomial (denominator = 1).
    pub fn from_poly(p: DensePoly<F>) -> Self {
        Self {
            numerator: p,
            denominator: DensePoly::one(),
        }
    }

    /// Creates a constant rational function c/1.
    pub fn constant(c: F) -> Self {
        Self {
            numerator: DensePoly::constant(c),
            denominator: DensePoly::one(),
        }
    }

    /// Returns the numerator polynomial.
    pub fn numerator(&self) -> &DensePoly<F> {
        &self.numerator
    }

    /// Returns the denominator polynomial.
    pub fn denominator(&self) -> &DensePoly<F> {
        &self.denominator
    }

    /// Returns true if this is the zero rational function.
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Returns true if this is a polynomial (denominator = 1).
    pub fn is_polynomial(&self) -> bool {
        self.denominator.degree() == 0 && self.denominator.leading_coeff().is_one()
    }

    /// Reduces by the GCD and makes the denominator monic.
    fn normalize(&mut self) {
        if self.numerator.is_zero() {
            self.denominator = DensePoly::one();
            return;
        }

        let g = poly_gcd(&self.numerator, &self.denominator);
        if g.degree() > 0 {
            let (num, _) = poly_div_rem(&self.numerator, &g);
            let (den, _) = poly_div_rem(&self.denominator, &g);
            self.numerator = num;
            self.denominator = den;
        }

        let lead = self.denominator.leading_coeff().clone();
        if !lead.is_one() {
            let lead_inv = lead.inv().expect("denominator is non-zero");
            self.numerator = self.numerator.scale(&lead_inv);
            self.denominator = make_monic(&self.denominator);
        }
    }

    /// Evaluates the rational function at a point.
    ///
    /// Returns `None` at a pole (denominator zero).
    pub fn eval(&self, x: &F) -> Option<F> {
        let den_val = self.denominator.eval(x);
        let den_inv = den_val.inv()?;
        Some(self.numerator.eval(x) * den_inv)
    }
}

impl<F: Field> PartialEq for RationalFunction<F> {
    fn eq(&self, other: &Self) -> bool {
        // Both sides are canonical, so compare directly
        self.numerator == other.numerator && self.denominator == other.denominator
    }
}

impl<F: Field> Eq for RationalFunction<F> {}

impl<F: Field> std::fmt::Display for RationalFunction<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_polynomial() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "({}) / ({})", self.numerator, self.denominator)
        }
    }
}
