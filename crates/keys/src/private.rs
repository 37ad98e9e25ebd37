use std::fmt;

use ecclab_algorithms::ec::{Curve, Point};
use ecclab_algorithms::{encoding, random};
use ecclab_api::{Decryptor, Error, HashAlgorithm, KeyAgreement, Result, ResultExt, Signer};
use ecclab_pke::{Ecies, EciesCiphertext, ElGamal, ElGamalCiphertext};
use ecclab_sign::{ecdsa, Signature};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use crate::PublicKey;

/// A private scalar `d` in `[1, n - 1]` together with its public key.
///
/// The scalar is held as fixed-width big-endian bytes that are zeroized on
/// drop. [`PrivateKey::scalar`] hands out a transient integer copy.
#[derive(Clone)]
pub struct PrivateKey {
    scalar: Zeroizing<Vec<u8>>,
    public: PublicKey,
}

impl PrivateKey {
    /// Key with scalar `d` on `curve`
    pub fn new(d: BigUint, curve: &Curve) -> Result<Self> {
        let (g, n) = curve.domain().with_context("PrivateKey::new")?;
        if d.is_zero() || &d >= n {
            return Err(Error::InvalidKey {
                context: "PrivateKey::new",
                message: "scalar outside [1, n - 1]".to_string(),
            });
        }
        let public = PublicKey::new(g.scalar_mul(&d))?;
        let scalar = Zeroizing::new(encoding::int_to_bytes_be(&d, encoding::byte_length(n))?);
        Ok(Self { scalar, public })
    }

    /// Fresh key with `d` uniform in `[1, n - 1]`
    pub fn generate<R: RngCore + CryptoRng>(curve: &Curve, rng: &mut R) -> Result<Self> {
        let (_, n) = curve.domain().with_context("PrivateKey::generate")?;
        let d = random::random_integer_between(&BigUint::from(1u32), &(n - 1u32), rng)?;
        let key = Self::new(d, curve)?;
        debug!(curve = %curve, "generated private key");
        Ok(key)
    }

    /// Key from the fixed-width big-endian scalar encoding
    pub fn from_bytes(curve: &Curve, bytes: &[u8]) -> Result<Self> {
        let width = encoding::byte_length(curve.domain().with_context("PrivateKey::from_bytes")?.1);
        if bytes.len() != width {
            return Err(Error::InvalidLength {
                context: "PrivateKey::from_bytes",
                expected: width,
                actual: bytes.len(),
            });
        }
        Self::new(encoding::bytes_to_int_be(bytes), curve)
    }

    /// The scalar big-endian at the byte width of the group order
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        self.scalar.clone()
    }

    /// The scalar `d`
    pub fn scalar(&self) -> BigUint {
        encoding::bytes_to_int_be(&self.scalar)
    }

    /// The curve of this key
    pub fn curve(&self) -> &Curve {
        self.public.curve()
    }

    /// `d * G`
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Shared point `d * peer`
    pub fn ecdh_compute(&self, peer: &PublicKey) -> Result<Point> {
        Ok(ecclab_kem::shared_point(self.curve(), &self.scalar(), peer.point())?)
    }

    /// ECIES shared point `S = d * R` from the transmitted `R`
    pub fn ecies_decapsulate(&self, ephemeral: &Point) -> Result<Point> {
        Ok(Ecies::decapsulate(self.curve(), &self.scalar(), ephemeral)?)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey<{}>", self.curve())
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.public == other.public
    }
}

impl Eq for PrivateKey {}

impl Signer for PrivateKey {
    type Signature = Signature;
    type Nonce = BigUint;

    fn sign_digest<R: RngCore + CryptoRng>(
        &self,
        digest: &[u8],
        hash: Option<HashAlgorithm>,
        nonce: Option<&BigUint>,
        rng: &mut R,
    ) -> Result<Signature> {
        Ok(ecdsa::sign_digest(
            self.curve(),
            &self.scalar(),
            digest,
            hash,
            nonce,
            rng,
        )?)
    }

    fn sign<R: RngCore + CryptoRng>(
        &self,
        message: &[u8],
        hash: HashAlgorithm,
        nonce: Option<&BigUint>,
        rng: &mut R,
    ) -> Result<Signature> {
        Ok(ecdsa::sign(self.curve(), &self.scalar(), message, hash, nonce, rng)?)
    }
}

impl KeyAgreement for PrivateKey {
    type PeerKey = PublicKey;
    type SharedPoint = Point;

    fn agree(&self, peer: &PublicKey) -> Result<Point> {
        self.ecdh_compute(peer)
    }

    fn shared_secret(&self, peer: &PublicKey) -> Result<Vec<u8>> {
        Ok(ecclab_kem::shared_secret(self.curve(), &self.scalar(), peer.point())?)
    }
}

impl Decryptor<Ecies> for PrivateKey {
    type Ciphertext = EciesCiphertext;

    fn decrypt(&self, scheme: &Ecies, ciphertext: &EciesCiphertext) -> Result<Vec<u8>> {
        Ok(scheme.decrypt(self.curve(), &self.scalar(), ciphertext)?)
    }
}

impl Decryptor<ElGamal> for PrivateKey {
    type Ciphertext = ElGamalCiphertext;

    fn decrypt(&self, scheme: &ElGamal, ciphertext: &ElGamalCiphertext) -> Result<Vec<u8>> {
        Ok(scheme.decrypt(self.curve(), &self.scalar(), ciphertext)?)
    }
}
