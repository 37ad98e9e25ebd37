//! End-to-end flows through the `ecclab` facade

use ecclab::config::Config;
use ecclab::params::curves::presets;
use ecclab::pke::{EciesCiphertext, ElGamalCiphertext};
use ecclab::prelude::*;
use ecclab::sign::Signature;
use ecclab_tests::{init_tracing, named_curve, rng, toy_curve, toy_subgroup};
use num_bigint::BigUint;

fn big(v: u32) -> BigUint {
    BigUint::from(v)
}

#[test]
fn test_configured_session() {
    init_tracing();
    let config = Config::from_toml_str(
        r#"
        curve = "NIST P-256"
        hash = "sha384"

        [ecies]
        cipher = "aes256-cbc"
        kdf = { algorithm = "hkdf", hash = "sha256" }

        [elgamal]
        message_bits = 96
        "#,
    )
    .unwrap();
    let registry = CurveRegistry::with_builtin();
    let session = config.resolve(&registry).unwrap();
    let mut rng = rng(1);

    let alice = PrivateKey::generate(&session.curve, &mut rng).unwrap();
    let bob = PrivateKey::generate(&session.curve, &mut rng).unwrap();

    let signature = alice
        .sign(b"hello bob", session.hash, None, &mut rng)
        .unwrap();
    assert_eq!(signature.hash(), Some(HashAlgorithm::Sha384));
    assert!(alice.public_key().verify(b"hello bob", &signature));

    let der = signature.to_der();
    let parsed = Signature::from_der(&der, Some(session.hash)).unwrap();
    assert!(alice.public_key().verify(b"hello bob", &parsed));

    let ct = bob
        .public_key()
        .encrypt(&session.ecies, b"meet at noon", &mut rng)
        .unwrap();
    let wire = ct.to_bytes().unwrap();
    let received = EciesCiphertext::from_bytes(&session.curve, &wire).unwrap();
    assert_eq!(bob.decrypt(&session.ecies, &received).unwrap(), b"meet at noon");

    let ct = bob
        .public_key()
        .encrypt(&session.elgamal, b"twelve bytes", &mut rng)
        .unwrap();
    let received = ElGamalCiphertext::from_bytes(&session.curve, &ct.to_bytes().unwrap()).unwrap();
    assert_eq!(bob.decrypt(&session.elgamal, &received).unwrap(), b"twelve bytes");

    assert_eq!(
        alice.shared_secret(bob.public_key()).unwrap(),
        bob.shared_secret(alice.public_key()).unwrap()
    );
}

#[test]
fn test_nonce_reuse_attack() {
    init_tracing();
    let curve = named_curve("secp256k1");
    let mut rng = rng(2);
    let victim = PrivateKey::generate(&curve, &mut rng).unwrap();
    let k = BigUint::from(0xdead_beef_u64);

    let s1 = victim
        .sign(b"pay alice 1 coin", HashAlgorithm::Sha256, Some(&k), &mut rng)
        .unwrap();
    let s2 = victim
        .sign(b"pay carol 5 coins", HashAlgorithm::Sha256, Some(&k), &mut rng)
        .unwrap();
    assert_eq!(s1.r(), s2.r());

    let recovered = victim
        .public_key()
        .recover_from_reused_nonce(b"pay alice 1 coin", &s1, b"pay carol 5 coins", &s2)
        .unwrap();
    assert_eq!(recovered.nonce, k);

    let forged_key = PrivateKey::new(recovered.private, &curve).unwrap();
    assert_eq!(forged_key, victim);
    let forged = forged_key
        .sign(b"pay mallory everything", HashAlgorithm::Sha256, None, &mut rng)
        .unwrap();
    assert!(victim.public_key().verify(b"pay mallory everything", &forged));
}

#[test]
fn test_toy_ecdh_vector() {
    let curve = toy_curve();
    let alice = PrivateKey::new(big(5), &curve).unwrap();
    let bob = PrivateKey::new(big(9), &curve).unwrap();
    assert_eq!(alice.public_key().point(), &curve.point(big(9), big(16)).unwrap());
    assert_eq!(bob.public_key().point(), &curve.point(big(0), big(1)).unwrap());
    assert_eq!(
        alice.agree(bob.public_key()).unwrap(),
        curve.point(big(18), big(3)).unwrap()
    );
}

#[test]
fn test_toy_ecdsa_exhaustive() {
    let curve = toy_subgroup();
    let mut rng = rng(3);
    for d in 1u32..7 {
        let key = PrivateKey::new(big(d), &curve).unwrap();
        for k in 1u32..7 {
            match key.sign_digest(&[0x20], None, Some(&big(k)), &mut rng) {
                Ok(sig) => assert!(key.public_key().verify_digest(&[0x20], &sig)),
                Err(err) => assert!(matches!(err, Error::PreconditionFailed { .. })),
            }
        }
    }
}

#[test]
fn test_every_builtin_curve_agrees() {
    init_tracing();
    let registry = CurveRegistry::with_builtin();
    let mut rng = rng(4);
    for entry in registry.iter() {
        let curve = Curve::from_entry(entry).unwrap();
        let alice = PrivateKey::generate(&curve, &mut rng).unwrap();
        let bob = PrivateKey::generate(&curve, &mut rng).unwrap();
        let ab = alice.agree(bob.public_key()).unwrap();
        assert_eq!(ab, bob.agree(alice.public_key()).unwrap(), "{}", entry.name);

        let bytes = alice.public_key().to_uncompressed().unwrap();
        assert_eq!(bytes.len(), 1 + 2 * curve.byte_length(), "{}", entry.name);
        assert_eq!(
            &PublicKey::from_uncompressed(&curve, &bytes).unwrap(),
            alice.public_key(),
            "{}",
            entry.name
        );
    }
}

#[test]
fn test_keys_do_not_cross_curves() {
    let mut rng = rng(5);
    let p256 = Curve::from_entry(&presets::PRIME256V1).unwrap();
    let k256 = Curve::from_entry(&presets::SECP256K1).unwrap();
    let a = PrivateKey::generate(&p256, &mut rng).unwrap();
    let b = PrivateKey::generate(&k256, &mut rng).unwrap();

    assert!(a.agree(b.public_key()).is_err());
    let sig = a.sign(b"msg", HashAlgorithm::Sha256, None, &mut rng).unwrap();
    assert!(!b.public_key().verify(b"msg", &sig));

    let bytes = a.public_key().to_uncompressed().unwrap();
    assert!(PublicKey::from_uncompressed(&k256, &bytes).is_err());
}

#[test]
fn test_unknown_curve_in_config() {
    let config = Config::from_toml_str("curve = \"curve25519\"").unwrap();
    let err: Error = config
        .resolve(&CurveRegistry::with_builtin())
        .unwrap_err()
        .into();
    assert!(matches!(err, Error::UnknownCurve { .. }));
}
