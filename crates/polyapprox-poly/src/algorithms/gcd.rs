//! Polynomial division and GCD over a field.
//!
//! These routines back the canonical form of rational functions: the
//! numerator/denominator pair is reduced by its GCD and the denominator
//! made monic.

use polyapprox_rings::Field;

use crate::dense::DensePoly;

/// Computes the monic GCD of two polynomials by the Euclidean algorithm.
pub fn poly_gcd<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>) -> DensePoly<F> {
    if a.is_zero() {
        return b.clone();
    }
    if b.is_zero() {
        return a.clone();
    }

    let mut p = a.clone();
    let mut q = b.clone();

    while !q.is_zero() {
        let (_, r) = poly_div_rem(&p, &q);
        p = q;
        q = r;
    }

    make_monic(&p)
}

/// Divides polynomial a by b, returning (quotient, remainder).
///
/// # Panics
///
/// Panics if `b` is zero.
pub fn poly_div_rem<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>) -> (DensePoly<F>, DensePoly<F>) {
    assert!(!b.is_zero(), "division by zero polynomial");

    if a.degree() < b.degree() || a.is_zero() {
        return (DensePoly::zero(), a.clone());
    }

    let b_lead_inv = b
        .leading_coeff()
        .inv()
        .expect("leading coefficient is non-zero");
    let mut quotient = vec![F::zero(); a.degree() - b.degree() + 1];
    let mut remainder = a.coeffs().to_vec();

    while remainder.len() >= b.coeffs().len() {
        let deg_diff = remainder.len() - b.coeffs().len();
        let coeff = remainder.last().expect("remainder is non-empty").clone() * b_lead_inv.clone();

        quotient[deg_diff] = coeff.clone();

        for (i, bc) in b.coeffs().iter().enumerate() {
            remainder[deg_diff + i] = remainder[deg_diff + i].clone() - coeff.clone() * bc.clone();
        }

        while remainder.len() > 1 && remainder.last().is_some_and(|c| c.is_zero()) {
            remainder.pop();
        }

        if remainder.len() == 1 && remainder[0].is_zero() {
            break;
        }
    }

    (DensePoly::new(quotient), DensePoly::new(remainder))
}

/// Makes a polynomial monic (leading coefficient = 1).
pub fn make_monic<F: Field>(p: &DensePoly<F>) -> DensePoly<F> {
    if p.is_zero() {
        return p.clone();
    }

    let lead_inv = p
        .leading_coeff()
        .inv()
        .expect("leading coefficient is non-zero");
    p.scale(&lead_inv)
}
