use std::fmt;

use ecclab_algorithms::ec::{Curve, Point};
use ecclab_api::{Encryptor, Error, NonceReuseAnalyzer, Result, ResultExt, Verifier};
use ecclab_pke::{Ecies, EciesCiphertext, ElGamal, ElGamalCiphertext};
use ecclab_sign::{ecdsa, RecoveredKey, Signature};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

/// A public point `Q = d * G`, never the neutral element
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    point: Point,
}

impl PublicKey {
    /// Wrap `point`, which must be a non-neutral point of its curve
    pub fn new(point: Point) -> Result<Self> {
        if point.is_neutral() {
            return Err(Error::InvalidKey {
                context: "PublicKey::new",
                message: "the neutral element is not a public key".to_string(),
            });
        }
        if !point.is_on_curve() {
            return Err(Error::InvalidKey {
                context: "PublicKey::new",
                message: "point is not on its curve".to_string(),
            });
        }
        Ok(Self { point })
    }

    /// Parse `0x04 || X || Y` on `curve`
    pub fn from_uncompressed(curve: &Curve, bytes: &[u8]) -> Result<Self> {
        let point = Point::from_uncompressed_bytes(curve, bytes)
            .with_context("PublicKey::from_uncompressed")?;
        Self::new(point)
    }

    /// `0x04 || X || Y`
    pub fn to_uncompressed(&self) -> Result<Vec<u8>> {
        Ok(self.point.to_uncompressed_bytes()?)
    }

    /// The point `Q`
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// The curve of this key
    pub fn curve(&self) -> &Curve {
        self.point.curve()
    }

    /// ECIES key encapsulation: `(R, S) = (r * G, r * Q)`
    pub fn ecies_encapsulate<R: RngCore + CryptoRng>(
        &self,
        ephemeral: Option<&BigUint>,
        rng: &mut R,
    ) -> Result<(Point, Point)> {
        Ok(Ecies::encapsulate(&self.point, ephemeral, rng)?)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey<{}>", self.point)
    }
}

impl Verifier for PublicKey {
    type Signature = Signature;

    fn verify_digest(&self, digest: &[u8], signature: &Signature) -> bool {
        ecdsa::verify_digest(&self.point, digest, signature)
    }

    fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        ecdsa::verify(&self.point, message, signature)
    }
}

impl NonceReuseAnalyzer for PublicKey {
    type Signature = Signature;
    type Recovered = RecoveredKey;

    fn recover_from_reused_nonce(
        &self,
        message1: &[u8],
        signature1: &Signature,
        message2: &[u8],
        signature2: &Signature,
    ) -> Result<RecoveredKey> {
        Ok(ecdsa::recover_from_reused_nonce(
            &self.point,
            message1,
            signature1,
            message2,
            signature2,
        )?)
    }
}

impl Encryptor<Ecies> for PublicKey {
    type Ciphertext = EciesCiphertext;

    fn encrypt<R: RngCore + CryptoRng>(
        &self,
        scheme: &Ecies,
        plaintext: &[u8],
        rng: &mut R,
    ) -> Result<EciesCiphertext> {
        Ok(scheme.encrypt(&self.point, plaintext, rng)?)
    }
}

impl Encryptor<ElGamal> for PublicKey {
    type Ciphertext = ElGamalCiphertext;

    fn encrypt<R: RngCore + CryptoRng>(
        &self,
        scheme: &ElGamal,
        plaintext: &[u8],
        rng: &mut R,
    ) -> Result<ElGamalCiphertext> {
        Ok(scheme.encrypt(&self.point, plaintext, rng)?)
    }
}
