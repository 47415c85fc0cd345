//! Property-based tests for series arithmetic and reversion.

use proptest::prelude::*;

use crate::power_series::PowerSeries;
use crate::reversion::revert;
use polyapprox_rings::Q;

fn small_coeff() -> impl Strategy<Value = Q> {
    (-20i64..20i64).prop_map(Q::from_integer)
}

// Series with f(0) = 0 and f'(0) != 0, the reversion preconditions
fn invertible_series() -> impl Strategy<Value = PowerSeries<Q>> {
    (
        (1i64..20i64),
        proptest::collection::vec(small_coeff(), 0..6),
    )
        .prop_map(|(linear, tail)| {
            let mut coeffs = vec![Q::from_integer(0), Q::from_integer(linear)];
            coeffs.extend(tail);
            PowerSeries::from_coeffs(coeffs)
        })
}

fn small_series() -> impl Strategy<Value = PowerSeries<Q>> {
    proptest::collection::vec(small_coeff(), 1..=6).prop_map(PowerSeries::from_coeffs)
}

proptest! {
    #[test]
    fn series_mul_commutative(a in small_series(), b in small_series()) {
        prop_assert_eq!(a.mul(&b), b.mul(&a));
    }

    #[test]
    fn series_mul_distributes(a in small_series(), b in small_series(), c in small_series()) {
        prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
    }

    #[test]
    fn revert_is_two_sided_inverse(f in invertible_series()) {
        let g = revert(&f).unwrap();
        let id = PowerSeries::identity(f.precision());

        prop_assert_eq!(f.compose(&g).unwrap(), id.clone());
        prop_assert_eq!(g.compose(&f).unwrap(), id);
    }

    #[test]
    fn revert_is_involutive(f in invertible_series()) {
        let g = revert(&f).unwrap();
        prop_assert_eq!(revert(&g).unwrap(), f);
    }
}
