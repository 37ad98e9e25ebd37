//! Public key encryption capabilities
//!
//! Both traits are parameterised by the scheme, which also carries the
//! scheme's configuration. A key type can therefore implement
//! `Encryptor<Ecies>` and `Encryptor<ElGamal>` side by side.

use crate::Result;
use rand::{CryptoRng, RngCore};

/// Encrypts to a public key under scheme `S`.
pub trait Encryptor<S> {
    /// Ciphertext produced by the scheme
    type Ciphertext;

    /// Encrypt `plaintext`, drawing ephemeral randomness from `rng`
    fn encrypt<R: RngCore + CryptoRng>(
        &self,
        scheme: &S,
        plaintext: &[u8],
        rng: &mut R,
    ) -> Result<Self::Ciphertext>;
}

/// Decrypts with a private key under scheme `S`.
pub trait Decryptor<S> {
    /// Ciphertext accepted by the scheme
    type Ciphertext;

    /// Decrypt `ciphertext`.
    ///
    /// Authentication failures are errors and never yield plaintext bytes.
    fn decrypt(&self, scheme: &S, ciphertext: &Self::Ciphertext) -> Result<Vec<u8>>;
}
