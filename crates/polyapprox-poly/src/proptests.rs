//! Property-based tests for polynomial arithmetic.

use proptest::prelude::*;

use crate::algorithms::gcd::{poly_div_rem, poly_gcd};
use crate::dense::DensePoly;
use polyapprox_rings::Q;

// Strategy for generating small rational coefficients
fn small_coeff() -> impl Strategy<Value = Q> {
    (-100i64..100i64).prop_map(Q::from_integer)
}

// Strategy for generating small polynomials (degree 0-4)
fn small_poly() -> impl Strategy<Value = DensePoly<Q>> {
    proptest::collection::vec(small_coeff(), 1..=5).prop_map(DensePoly::new)
}

// Strategy for generating non-zero polynomials
fn nonzero_poly() -> impl Strategy<Value = DensePoly<Q>> {
    small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
}

proptest! {
    // Polynomial ring axioms

    #[test]
    fn poly_add_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(a.add(&b), b.add(&a));
    }

    #[test]
    fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
        prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
    }

    #[test]
    fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(a.mul(&b), b.mul(&a));
    }

    #[test]
    fn poly_mul_distributes(a in small_poly(), b in small_poly(), c in small_poly()) {
        prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
    }

    #[test]
    fn poly_sub_self_is_zero(a in small_poly()) {
        prop_assert!(a.sub(&a).is_zero());
    }

    // Division

    #[test]
    fn poly_div_rem_reconstructs(a in small_poly(), b in nonzero_poly()) {
        let (q, r) = poly_div_rem(&a, &b);
        prop_assert_eq!(b.mul(&q).add(&r), a);
        prop_assert!(r.is_zero() || r.degree() < b.degree());
    }

    #[test]
    fn poly_gcd_divides_both(a in nonzero_poly(), b in nonzero_poly()) {
        let g = poly_gcd(&a, &b);
        let (_, ra) = poly_div_rem(&a, &g);
        let (_, rb) = poly_div_rem(&b, &g);
        prop_assert!(ra.is_zero());
        prop_assert!(rb.is_zero());
    }
}
