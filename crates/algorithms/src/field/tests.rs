use super::*;

fn fe(value: u64, p: u64) -> FieldElement {
    FieldElement::from_u64(value, BigUint::from(p))
}

fn hex(s: &str) -> BigUint {
    BigUint::parse_bytes(s.as_bytes(), 16).unwrap()
}

#[test]
fn test_construction_reduces() {
    assert_eq!(fe(30, 23).value(), &BigUint::from(7u32));
    let neg = FieldElement::from_bigint(&BigInt::from(-1), BigUint::from(23u32));
    assert_eq!(neg.value(), &BigUint::from(22u32));
    let neg_big = FieldElement::from_bigint(&BigInt::from(-47), BigUint::from(23u32));
    assert_eq!(neg_big.value(), &BigUint::from(22u32));
}

#[test]
fn test_basic_arithmetic() {
    let a = fe(20, 23);
    let b = fe(5, 23);
    assert_eq!(&a + &b, fe(2, 23));
    assert_eq!(&b - &a, fe(8, 23));
    assert_eq!(&a * &b, fe(8, 23));
    assert_eq!(-&b, fe(18, 23));
    assert_eq!(-fe(0, 23), fe(0, 23));
    assert_eq!(a.pow(&BigUint::from(22u32)), fe(1, 23));
    assert_eq!(b.scale(5), fe(2, 23));
}

#[test]
fn test_inverse_of_every_nonzero_element() {
    for p in [23u64, 97, 113, 65537] {
        for v in 1..p.min(2000) {
            let a = fe(v, p);
            let inv = a.inverse().unwrap();
            assert!((&a * &inv).is_one(), "{v}^-1 mod {p}");
        }
    }
}

#[test]
fn test_inverse_of_zero_fails() {
    assert_eq!(
        fe(0, 23).inverse(),
        Err(Error::DivisionByZero {
            context: "field inverse"
        })
    );
    assert!(fe(3, 23).divide(&fe(0, 23)).is_err());
}

#[test]
fn test_divide() {
    let q = fe(7, 23).divide(&fe(3, 23)).unwrap();
    assert_eq!(&q * &fe(3, 23), fe(7, 23));
}

#[test]
fn test_checked_ops_reject_mixed_moduli() {
    let a = fe(3, 23);
    let b = fe(3, 29);
    assert_eq!(a.checked_add(&b), Err(Error::IncompatibleField));
    assert_eq!(a.checked_sub(&b), Err(Error::IncompatibleField));
    assert_eq!(a.checked_mul(&b), Err(Error::IncompatibleField));
    assert_eq!(a.divide(&b), Err(Error::IncompatibleField));
    assert_ne!(a, b);
}

#[test]
#[should_panic(expected = "different prime fields (0x17 and 0x1d)")]
fn test_operator_panics_on_mixed_moduli() {
    let _ = fe(3, 23) + fe(3, 29);
}

#[test]
fn test_equal_moduli_from_different_allocations_combine() {
    let a = fe(3, 23);
    let b = fe(4, 23);
    assert!(!Arc::ptr_eq(a.shared_modulus(), b.shared_modulus()));
    assert_eq!(a.checked_add(&b).unwrap(), fe(7, 23));
}

#[test]
fn test_quadratic_residues_mod_23() {
    let squares: Vec<u64> = (1..23u64).map(|v| v * v % 23).collect();
    for v in 1..23u64 {
        let a = fe(v, 23);
        assert_eq!(a.is_quadratic_residue(), squares.contains(&v), "{v}");
        assert_eq!(a.legendre_symbol(), if squares.contains(&v) { 1 } else { -1 });
    }
    assert!(!fe(0, 23).is_quadratic_residue());
    assert_eq!(fe(0, 23).legendre_symbol(), 0);
}

fn check_all_roots(p: u64) {
    for v in 1..p {
        let a = fe(v, p);
        match a.square_root() {
            Some((r1, r2)) => {
                assert!(a.is_quadratic_residue());
                assert_eq!(r1.square(), a, "root of {v} mod {p}");
                assert_eq!(r2.square(), a, "root of {v} mod {p}");
                assert!((&r1 + &r2).is_zero());
                assert!(!r1.is_odd(), "even root comes first");
            }
            None => assert!(!a.is_quadratic_residue()),
        }
    }
}

#[test]
fn test_square_root_p_3_mod_4() {
    check_all_roots(23);
    check_all_roots(103);
}

#[test]
fn test_square_root_tonelli_shanks() {
    // 17 - 1 = 2^4, 97 - 1 = 3 * 2^5, 113 - 1 = 7 * 2^4
    check_all_roots(17);
    check_all_roots(97);
    check_all_roots(113);
    check_all_roots(257);
}

#[test]
fn test_square_root_large_two_adicity() {
    // NIST P-224: p - 1 = q * 2^96
    let p = hex("ffffffffffffffffffffffffffffffff000000000000000000000001");
    let y = FieldElement::new(hex("b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21"), p);
    let a = y.square();
    let (r1, r2) = a.square_root().unwrap();
    assert!(r1 == y || r2 == y);
    assert_eq!(r1.square(), a);
    assert!(!r1.is_odd());
}

#[test]
fn test_square_root_of_zero_and_non_residue() {
    let (r1, r2) = fe(0, 23).square_root().unwrap();
    assert!(r1.is_zero() && r2.is_zero());
    // 5 is a non-residue mod 23
    assert!(fe(5, 23).square_root().is_none());
}

#[test]
fn test_residue_cache_is_shared_safely() {
    let a = fe(13, 23);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| a.is_quadratic_residue()))
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    });
}

#[test]
fn test_to_bytes_be_is_fixed_width() {
    let p = hex("ffffffffffffffffffffffffffffffff000000000000000000000001");
    let a = FieldElement::new(BigUint::from(0x0102u32), p.clone());
    let bytes = a.to_bytes_be();
    assert_eq!(bytes.len(), 28);
    assert_eq!(&bytes[26..], &[1, 2]);
    assert_eq!(FieldElement::zero(p).to_bytes_be(), vec![0u8; 28]);
}

#[test]
fn test_display() {
    assert_eq!(fe(255, 257).to_string(), "0xff");
}

#[test]
fn test_debug_shows_value_and_modulus() {
    assert_eq!(format!("{:?}", fe(255, 257)), "FieldElement(0xff mod 0x101)");
}

#[test]
fn test_quartic_root() {
    // Fourth powers mod 23 are exactly the squares
    for a in 1..23 {
        let x = fe(a, 23);
        match x.quartic_root() {
            Some(r) => {
                assert!(x.is_quadratic_residue());
                assert_eq!(r.square().square(), x);
            }
            None => assert!(!x.is_quadratic_residue()),
        }
    }
    assert_eq!(fe(16, 23).quartic_root(), Some(fe(2, 23)));

    // Mod 13 the fourth powers are {1, 3, 9}; 4 = 2^2 is a square only
    assert_eq!(fe(3, 13).quartic_root().unwrap().pow(&BigUint::from(4u32)), fe(3, 13));
    assert!(fe(4, 13).square_root().is_some());
    assert!(fe(4, 13).quartic_root().is_none());
    assert!(fe(0, 13).quartic_root().unwrap().is_zero());
}

#[test]
fn test_signed_value() {
    assert_eq!(fe(22, 23).signed_value(), BigInt::from(-1));
    assert_eq!(fe(12, 23).signed_value(), BigInt::from(-11));
    assert_eq!(fe(11, 23).signed_value(), BigInt::from(11));
    assert_eq!(fe(0, 23).signed_value(), BigInt::from(0));

    let p = hex("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");
    let minus_three = FieldElement::new(&p - 3u32, p.clone());
    assert_eq!(minus_three.signed_value(), BigInt::from(-3));
    let far = FieldElement::new(&p - 2_000_000_000u64, p.clone());
    assert_eq!(far.signed_value(), BigInt::from_biguint(Sign::Plus, &p - 2_000_000_000u64));
}
