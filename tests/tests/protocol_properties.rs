//! Round-trip properties of the protocols over the key types

use ecclab::prelude::*;
use ecclab_tests::{init_tracing, named_curve, rng};
use num_bigint::BigUint;
use proptest::prelude::*;

fn hash() -> impl Strategy<Value = HashAlgorithm> {
    prop::sample::select(HashAlgorithm::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn ecdsa_round_trip(
        seed in any::<u64>(),
        hash in hash(),
        message in prop::collection::vec(any::<u8>(), 0..128),
    ) {
        init_tracing();
        let curve = named_curve("secp256k1");
        let mut rng = rng(seed);
        let key = PrivateKey::generate(&curve, &mut rng).unwrap();

        let signature = key.sign(&message, hash, None, &mut rng).unwrap();
        prop_assert!(key.public_key().verify(&message, &signature));

        let mut tampered = message.clone();
        tampered.push(0x5a);
        prop_assert!(!key.public_key().verify(&tampered, &signature));
    }

    #[test]
    fn nonce_reuse_recovers_the_key(
        seed in any::<u64>(),
        nonce in 1u64..,
        first in prop::collection::vec(any::<u8>(), 1..64),
        second in prop::collection::vec(any::<u8>(), 1..64),
    ) {
        prop_assume!(first != second);
        let curve = named_curve("prime256v1");
        let mut rng = rng(seed);
        let key = PrivateKey::generate(&curve, &mut rng).unwrap();
        let k = BigUint::from(nonce);

        let s1 = key.sign(&first, HashAlgorithm::Sha256, Some(&k), &mut rng).unwrap();
        let s2 = key.sign(&second, HashAlgorithm::Sha256, Some(&k), &mut rng).unwrap();
        let recovered = key
            .public_key()
            .recover_from_reused_nonce(&first, &s1, &second, &s2)
            .unwrap();
        prop_assert_eq!(recovered.nonce, k);
        prop_assert_eq!(recovered.private, key.scalar());
    }

    #[test]
    fn ecies_round_trip(
        seed in any::<u64>(),
        plaintext in prop::collection::vec(any::<u8>(), 0..96),
    ) {
        let curve = named_curve("prime256v1");
        let mut rng = rng(seed);
        let key = PrivateKey::generate(&curve, &mut rng).unwrap();
        let scheme = Ecies::new(EciesConfig::default()).unwrap();

        let ciphertext = key.public_key().encrypt(&scheme, &plaintext, &mut rng).unwrap();
        let wire = ciphertext.to_bytes().unwrap();
        let parsed = ecclab::pke::EciesCiphertext::from_bytes(&curve, &wire).unwrap();
        prop_assert_eq!(key.decrypt(&scheme, &parsed).unwrap(), plaintext);
    }

    #[test]
    fn elgamal_round_trip(
        seed in any::<u64>(),
        message in prop::collection::vec(any::<u8>(), 1..=16),
    ) {
        let curve = named_curve("secp256k1");
        let mut rng = rng(seed);
        let key = PrivateKey::generate(&curve, &mut rng).unwrap();
        let scheme = ElGamal::new(ElGamalConfig::for_message_len(message.len()));

        let ciphertext = key.public_key().encrypt(&scheme, &message, &mut rng).unwrap();
        prop_assert_eq!(key.decrypt(&scheme, &ciphertext).unwrap(), message);
    }

    #[test]
    fn ecdh_agrees(seed in any::<u64>()) {
        let curve = named_curve("brainpoolP224r1");
        let mut rng = rng(seed);
        let alice = PrivateKey::generate(&curve, &mut rng).unwrap();
        let bob = PrivateKey::generate(&curve, &mut rng).unwrap();

        prop_assert_eq!(
            alice.shared_secret(bob.public_key()).unwrap(),
            bob.shared_secret(alice.public_key()).unwrap()
        );
        prop_assert_eq!(
            ecclab::kem::shared_secret_x_only(&curve, &alice.scalar(), bob.public_key().point()).unwrap(),
            alice.shared_secret(bob.public_key()).unwrap()
        );
    }
}
