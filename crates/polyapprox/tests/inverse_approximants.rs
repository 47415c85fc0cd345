//! End-to-end tests of the public surface: the three entry points
//! compose over the same expansion.

use polyapprox::prelude::*;

fn q(n: i64, d: i64) -> Q {
    Q::new(n, d)
}

#[test]
fn revert_and_inverse_taylor_agree_at_origin() {
    // For an expansion centered at 0 with value 0, inverse_taylor is
    // exactly the reversion of the underlying series.
    let sin: TaylorExpansion<Q> = TaylorExpansion::sin(8);

    let reverted = revert(sin.series()).unwrap();
    let arcsin = inverse_taylor(&sin).unwrap();

    assert_eq!(arcsin.center(), &q(0, 1));
    for n in 0..8 {
        assert_eq!(arcsin.coeff(n), reverted.coeff(n));
    }
}

#[test]
fn taylor_and_pade_approximants_of_log() {
    let exp: TaylorExpansion<Q> = TaylorExpansion::exp(6);

    let log_taylor = inverse_taylor(&exp).unwrap();
    let log_pade = inverse_pade(&exp, 2, 3).unwrap();

    // Same expansion point, and the Padé numerator/denominator re-expand
    // to the Taylor coefficients through order m + n
    assert_eq!(log_pade.center(), log_taylor.center());

    let p = log_pade.numerator();
    let d = log_pade.denominator();
    let expansion = PowerSeries::from_coeffs((0..6).map(|i| p.coeff(i)).collect())
        .div(&PowerSeries::from_coeffs((0..6).map(|i| d.coeff(i)).collect()))
        .unwrap();

    for n in 0..6 {
        assert_eq!(expansion.coeff(n), log_taylor.coeff(n));
    }
}

#[test]
fn pade_beats_taylor_on_log_far_from_center() {
    // At y = 3 (so log 3 ≈ 1.0986), the [2/2] rational approximant of
    // log should land closer than the degree-4 Taylor polynomial, which
    // is far outside its radius of convergence.
    let exp: TaylorExpansion<Q> = TaylorExpansion::exp(5);

    let taylor = inverse_taylor(&exp).unwrap();
    let rational = inverse_pade(&exp, 2, 2).unwrap();

    let y = q(3, 1);
    let taylor_value = taylor.evaluate(&y);
    let pade_value = rational.eval(&y).unwrap();

    let log3 = q(10986, 10000);
    let taylor_err = (taylor_value - log3.clone()).abs();
    let pade_err = (pade_value - log3).abs();

    assert!(pade_err < taylor_err);
}

#[test]
fn sqrt_from_square_round_trip() {
    // f(x) = x² around 1, then evaluate the inverse approximants at
    // exact squares.
    let square = TaylorExpansion::from_coefficients(q(1, 1), vec![q(1, 1), q(2, 1), q(1, 1)]);

    let sqrt_taylor = inverse_taylor(&square).unwrap();
    assert_eq!(sqrt_taylor.coeff(1), q(1, 2));

    let sqrt_pade = inverse_pade(&square, 1, 1).unwrap();
    // sqrt(1) = 1 exactly at the center
    assert_eq!(sqrt_pade.eval(&q(1, 1)), Some(q(1, 1)));
}
