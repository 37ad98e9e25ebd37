//! Property-based tests for prime field arithmetic

use ecclab_algorithms::FieldElement;
use num_bigint::BigUint;
use proptest::prelude::*;

/// A spread of prime moduli, from the toy field up to a Mersenne prime
fn modulus() -> impl Strategy<Value = BigUint> {
    prop::sample::select(vec![
        "23",
        "97",
        "10007",
        "2147483647",
        "170141183460469231731687303715884105727",
        "115792089210356248762697446949407573530086143415290314195533631308867097853951",
    ])
    .prop_map(|p| p.parse::<BigUint>().unwrap())
}

/// A non-zero element of one of the fields above
fn nonzero_element() -> impl Strategy<Value = FieldElement> {
    (modulus(), prop::collection::vec(any::<u8>(), 1..48)).prop_filter_map(
        "zero element",
        |(p, bytes)| {
            let e = FieldElement::new(BigUint::from_bytes_be(&bytes), p);
            (!e.is_zero()).then_some(e)
        },
    )
}

proptest! {
    #[test]
    fn inverse_multiplies_to_one(a in nonzero_element()) {
        let inv = a.inverse().unwrap();
        prop_assert!((&a * &inv).is_one());
        prop_assert_eq!(inv.inverse().unwrap(), a);
    }

    #[test]
    fn division_undoes_multiplication(a in nonzero_element(), raw in any::<u64>()) {
        let b = a.with_value(BigUint::from(raw));
        prop_assert_eq!((&b * &a).divide(&a).unwrap(), b);
    }

    #[test]
    fn squares_have_both_roots(a in nonzero_element()) {
        let square = a.square();
        prop_assert!(square.is_quadratic_residue());
        prop_assert_eq!(square.legendre_symbol(), 1);

        let (even, odd) = square.square_root().unwrap();
        prop_assert_eq!(even.square(), square.clone());
        prop_assert_eq!(odd.square(), square);
        prop_assert!(!even.is_odd());
        prop_assert!(odd.is_odd());
        prop_assert!((&even + &odd).is_zero());
        prop_assert!(even == a || odd == a);
    }

    #[test]
    fn non_residues_have_no_root(a in nonzero_element()) {
        if a.legendre_symbol() == -1 {
            prop_assert!(!a.is_quadratic_residue());
            prop_assert!(a.square_root().is_none());
        } else {
            prop_assert!(a.square_root().is_some());
        }
    }

    #[test]
    fn subtraction_inverts_addition(a in nonzero_element(), raw in any::<u64>()) {
        let b = a.with_value(BigUint::from(raw));
        prop_assert_eq!(&(&a + &b) - &b, a.clone());
        prop_assert_eq!(a.checked_add(&b).unwrap(), &a + &b);
    }
}

#[test]
fn zero_is_its_own_root() {
    let zero = FieldElement::zero(BigUint::from(23u32));
    assert_eq!(zero.legendre_symbol(), 0);
    let (r1, r2) = zero.square_root().unwrap();
    assert!(r1.is_zero() && r2.is_zero());
    assert!(zero.inverse().is_err());
}
