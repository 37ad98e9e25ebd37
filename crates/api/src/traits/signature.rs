//! Digital signature capabilities

use crate::{HashAlgorithm, Result};
use rand::{CryptoRng, RngCore};

/// Produces signatures with a private key.
pub trait Signer {
    /// Signature produced by this signer
    type Signature;

    /// Per-signature nonce type
    type Nonce;

    /// Sign an already computed message digest.
    ///
    /// When `nonce` is `None` a fresh nonce is drawn from `rng`. Supplying a
    /// nonce is meant for test vectors and for demonstrating nonce reuse.
    fn sign_digest<R: RngCore + CryptoRng>(
        &self,
        digest: &[u8],
        hash: Option<HashAlgorithm>,
        nonce: Option<&Self::Nonce>,
        rng: &mut R,
    ) -> Result<Self::Signature>;

    /// Hash `message` with `hash` and sign the digest
    fn sign<R: RngCore + CryptoRng>(
        &self,
        message: &[u8],
        hash: HashAlgorithm,
        nonce: Option<&Self::Nonce>,
        rng: &mut R,
    ) -> Result<Self::Signature>;
}

/// Checks signatures against a public key.
///
/// Malformed signatures are reported as `false`, never as an error.
pub trait Verifier {
    /// Signature accepted by this verifier
    type Signature;

    /// Verify a signature over an already computed digest
    fn verify_digest(&self, digest: &[u8], signature: &Self::Signature) -> bool;

    /// Verify a signature over `message`, hashing it with the algorithm the
    /// signature records
    fn verify(&self, message: &[u8], signature: &Self::Signature) -> bool;
}

/// Recovers a private key from two signatures that share a nonce.
pub trait NonceReuseAnalyzer {
    /// Signature type analysed
    type Signature;

    /// What the analysis yields (nonce and private scalar)
    type Recovered;

    /// Recover the nonce and private key from two signatures over distinct
    /// messages made with the same nonce.
    ///
    /// Fails with [`crate::Error::PreconditionFailed`] when the messages are
    /// equal, the `r` values differ, or the result does not match this key.
    fn recover_from_reused_nonce(
        &self,
        message1: &[u8],
        signature1: &Self::Signature,
        message2: &[u8],
        signature2: &Self::Signature,
    ) -> Result<Self::Recovered>;
}
