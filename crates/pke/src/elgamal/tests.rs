use super::*;
use ecclab_algorithms::ec::CurveParameters;
use ecclab_params::curves::presets;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn big(v: u64) -> BigUint {
    BigUint::from(v)
}

// y^2 = x^3 + x + 1 over F_23, cyclic of order 28
fn toy_curve() -> Curve {
    Curve::new(
        CurveParameters::short_weierstrass(1, 1, 23u32)
            .with_generator(3u32, 10u32)
            .with_order(28u32, 1u32),
    )
    .unwrap()
}

fn toy_scheme(bits: u32) -> ElGamal {
    ElGamal::new(ElGamalConfig {
        message_bits: bits,
        ..ElGamalConfig::default()
    })
}

#[test]
fn test_config_defaults() {
    let config = ElGamalConfig::default();
    assert_eq!(config.max_attempts, 100);
    assert_eq!(config.message_bits, 128);
    assert_eq!(ElGamalConfig::for_message_len(11).message_bits, 88);
}

#[test]
fn test_encoding_on_toy_curve() {
    let curve = toy_curve();
    let scheme = toy_scheme(2);

    assert_eq!(scheme.encode(&curve, &[0]).unwrap(), curve.point(big(0), big(22)).unwrap());
    assert_eq!(scheme.encode(&curve, &[3]).unwrap(), curve.point(big(3), big(10)).unwrap());
    // 2 is not an X coordinate, 2 | (1 << 2) = 6 is
    let p = scheme.encode(&curve, &[2]).unwrap();
    assert_eq!(p, curve.point(big(6), big(4)).unwrap());
    assert_eq!(scheme.decode(&p).unwrap(), [2]);
}

#[test]
fn test_encoding_failures() {
    let curve = toy_curve();

    assert_eq!(
        toy_scheme(2).encode(&curve, &[4]).unwrap_err(),
        Error::MessageTooLong { bits: 3, max: 2 }
    );

    let one_try = ElGamal::new(ElGamalConfig {
        message_bits: 3,
        max_attempts: 1,
    });
    assert_eq!(
        one_try.encode(&curve, &[2]).unwrap_err(),
        Error::EncodingExhausted { attempts: 1 }
    );

    // 8 is not an X coordinate and 8 | (1 << 4) already exceeds p, so the
    // search stops after one candidate
    let err = toy_scheme(4).encode(&curve, &[8]).unwrap_err();
    assert_eq!(err, Error::EncodingExhausted { attempts: 1 });
    let api: ecclab_api::Error = err.into();
    assert!(matches!(api, ecclab_api::Error::EncodingExhausted { .. }));
}

#[test]
fn test_toy_round_trip_all_messages() {
    let curve = toy_curve();
    let scheme = toy_scheme(2);
    let d = big(11);
    let q = curve.generator().unwrap().scalar_mul(&d);
    for m in 0u8..4 {
        for k in [1u64, 5, 13, 27] {
            let ct = scheme.encrypt_with_ephemeral(&q, &[m], &big(k)).unwrap();
            assert_eq!(scheme.decrypt(&curve, &d, &ct).unwrap(), [m], "m={m} k={k}");
        }
    }
}

#[test]
fn test_round_trip_secp521r1() {
    let curve = Curve::from_entry(&presets::SECP521R1).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let message = "Привет, мир! hello world".as_bytes();
    let scheme = ElGamal::new(ElGamalConfig::for_message_len(message.len()));
    let d = big(0x5eed);
    let q = curve.generator().unwrap().scalar_mul(&d);

    let ct = scheme.encrypt(&q, message, &mut rng).unwrap();
    assert_eq!(scheme.decrypt(&curve, &d, &ct).unwrap(), message);
    assert_ne!(scheme.decrypt(&curve, &big(0x5eee), &ct).unwrap(), message);
}

#[test]
fn test_short_message_is_zero_padded() {
    let curve = Curve::from_entry(&presets::PRIME256V1).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let scheme = ElGamal::default();
    let d = big(99);
    let q = curve.generator().unwrap().scalar_mul(&d);

    let ct = scheme.encrypt(&q, b"hi", &mut rng).unwrap();
    let mut expected = b"hi".to_vec();
    expected.resize(16, 0);
    assert_eq!(scheme.decrypt(&curve, &d, &ct).unwrap(), expected);
}

#[test]
fn test_ciphertext_bytes() {
    let curve = Curve::from_entry(&presets::PRIME256V1).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(8);
    let scheme = ElGamal::default();
    let d = big(1234);
    let q = curve.generator().unwrap().scalar_mul(&d);
    let ct = scheme.encrypt(&q, b"sixteen byte msg", &mut rng).unwrap();

    let bytes = ct.to_bytes().unwrap();
    assert_eq!(bytes.len(), 130);
    assert_eq!((bytes[0], bytes[65]), (0x04, 0x04));
    let parsed = ElGamalCiphertext::from_bytes(&curve, &bytes).unwrap();
    assert_eq!(parsed, ct);
    assert_eq!(scheme.decrypt(&curve, &d, &parsed).unwrap(), b"sixteen byte msg");

    assert!(matches!(
        ElGamalCiphertext::from_bytes(&curve, &bytes[..129]),
        Err(Error::InvalidCiphertextFormat(_))
    ));
}

#[test]
fn test_rejects_bad_inputs() {
    let curve = toy_curve();
    let scheme = toy_scheme(2);
    let q = curve.generator().unwrap().scalar_mul(&big(3));

    assert!(matches!(
        scheme.encrypt_with_ephemeral(&q, &[1], &big(0)),
        Err(Error::InvalidKey(_))
    ));
    assert!(matches!(
        scheme.encrypt_with_ephemeral(&curve.neutral(), &[1], &big(2)),
        Err(Error::InvalidKey(_))
    ));

    let ct = scheme.encrypt_with_ephemeral(&q, &[1], &big(2)).unwrap();
    assert!(matches!(
        scheme.decrypt(&curve, &big(28), &ct),
        Err(Error::InvalidKey(_))
    ));
    let p256 = Curve::from_entry(&presets::PRIME256V1).unwrap();
    assert!(matches!(
        scheme.decrypt(&p256, &big(3), &ct),
        Err(Error::InvalidCiphertextFormat(_))
    ));
}
