//! The X-only ladder against double-and-add

use ecclab_algorithms::ec::{recover_point, DoubleAndAdd, Point, ScalarMultiplication, XOnlyLadder};
use ecclab_tests::{named_curve, toy_subgroup};
use num_bigint::BigUint;
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = BigUint> {
    prop::collection::vec(any::<u8>(), 1..=40).prop_map(|bytes| BigUint::from_bytes_be(&bytes))
}

fn curve_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["secp256k1", "prime256v1", "brainpoolP192r1", "secp112r1"])
}

fn check_ladder(p: &Point, k: &BigUint) -> Result<(), TestCaseError> {
    let expected = DoubleAndAdd.multiply(k, p);
    prop_assert_eq!(
        p.scalar_mul_x_only(k),
        expected.x().cloned(),
        "x-only ladder disagrees for k = {}",
        k
    );
    prop_assert_eq!(XOnlyLadder.multiply(k, p), expected.clone());

    if let Some((_, y)) = expected.coordinates() {
        let x = p.scalar_mul_x_only(k).unwrap();
        let recovered = recover_point(p.curve(), x.value(), y.bit(0)).unwrap();
        prop_assert_eq!(recovered, expected);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn ladder_matches_double_and_add(name in curve_name(), k in scalar()) {
        let curve = named_curve(name);
        let g = curve.generator().unwrap();
        check_ladder(&g, &k)?;
    }

    #[test]
    fn scalar_multiplication_is_linear(name in curve_name(), k1 in scalar(), k2 in scalar()) {
        let curve = named_curve(name);
        let g = curve.generator().unwrap();
        let sum = &g.scalar_mul(&k1) + &g.scalar_mul(&k2);
        prop_assert_eq!(g.scalar_mul(&(&k1 + &k2)), sum);
    }

    #[test]
    fn multiples_of_the_order_vanish(name in curve_name(), k in scalar()) {
        let curve = named_curve(name);
        let g = curve.generator().unwrap();
        let n = curve.order().unwrap();
        let multiple = &k * n;
        prop_assert!(g.scalar_mul(&multiple).is_neutral());
        prop_assert!(g.scalar_mul_x_only(&multiple).is_none());
        prop_assert_eq!(g.scalar_mul(&(&multiple + 1u32)), g);
    }
}

#[test]
fn toy_subgroup_multiples() {
    let curve = toy_subgroup();
    let g = curve.generator().unwrap();
    let expected = [(5, 4), (17, 20), (13, 16), (13, 7), (17, 3), (5, 19)];
    for (k, (x, y)) in (1u32..).zip(expected) {
        let point = g.scalar_mul(&BigUint::from(k));
        assert_eq!(
            point,
            curve.point(BigUint::from(x as u32), BigUint::from(y as u32)).unwrap()
        );
        assert_eq!(
            g.scalar_mul_x_only(&BigUint::from(k)).unwrap().value(),
            &BigUint::from(x as u32)
        );
    }
    assert!(g.scalar_mul(&BigUint::from(7u32)).is_neutral());
}
