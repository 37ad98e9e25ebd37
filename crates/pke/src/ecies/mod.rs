//! Elliptic Curve Integrated Encryption Scheme
//!
//! The sender draws an ephemeral scalar `r` and transmits `R = r * G`.
//! Both sides arrive at the shared point `S = r * Q = d * R`. The X and Y
//! coordinates of `S`, each big-endian at field width, are expanded through
//! the configured KDF into the cipher key `k_e` and the MAC key `k_m`.
//! Decryption checks the tag before touching the ciphertext and fails
//! closed on mismatch.

mod ciphertext;


pub use ciphertext::EciesCiphertext;

use ecclab_algorithms::block::{CipherAlgorithm, AES_BLOCK_SIZE};
use ecclab_algorithms::ec::{Curve, Point};
use ecclab_algorithms::encoding;
use ecclab_algorithms::kdf::KdfAlgorithm;
use ecclab_algorithms::mac::MacAlgorithm;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use tracing::{debug, warn};
use zeroize::Zeroizing;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ephemeral;
use crate::error::{Error, Result};

/// Algorithms and the fixed IV used by [`Ecies`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EciesConfig {
    /// KDF expanding the shared coordinates
    pub kdf: KdfAlgorithm,
    /// Block cipher keyed with `k_e`
    pub cipher: CipherAlgorithm,
    /// MAC keyed with `k_m`
    pub mac: MacAlgorithm,
    /// Fixed CBC initialization vector
    pub iv: Vec<u8>,
}

impl Default for EciesConfig {
    fn default() -> Self {
        Self {
            kdf: KdfAlgorithm::default(),
            cipher: CipherAlgorithm::default(),
            mac: MacAlgorithm::default(),
            iv: vec![0; AES_BLOCK_SIZE],
        }
    }
}

/// Symmetric keys derived from one shared point
pub struct DerivedKeys {
    /// Cipher key `k_e`
    pub encryption: Zeroizing<Vec<u8>>,
    /// MAC key `k_m`
    pub mac: Zeroizing<Vec<u8>>,
}

/// ECIES under a fixed [`EciesConfig`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ecies {
    config: EciesConfig,
}

impl Ecies {
    /// Scheme with `config`; the IV must be one cipher block long
    pub fn new(config: EciesConfig) -> Result<Self> {
        if config.iv.len() != config.cipher.block_size() {
            return Err(ecclab_algorithms::Error::Length {
                context: "ECIES IV",
                expected: config.cipher.block_size(),
                actual: config.iv.len(),
            }
            .into());
        }
        Ok(Self { config })
    }

    /// The configuration in use
    pub fn config(&self) -> &EciesConfig {
        &self.config
    }

    /// `(R, S) = (r * G, r * recipient)` with `r` drawn from `[1, n - 1]`
    /// unless supplied
    pub fn encapsulate<R: RngCore + CryptoRng>(
        recipient: &Point,
        ephemeral: Option<&BigUint>,
        rng: &mut R,
    ) -> Result<(Point, Point)> {
        match ephemeral {
            Some(r) => encapsulate_with(recipient, r),
            None => {
                let (_, n) = recipient.curve().domain()?;
                let r = ephemeral::random_scalar(n, rng)?;
                encapsulate_with(recipient, &r)
            }
        }
    }

    /// `S = d * R` on `curve`
    pub fn decapsulate(curve: &Curve, d: &BigUint, ephemeral: &Point) -> Result<Point> {
        let (_, n) = curve.domain()?;
        ephemeral::check_scalar(d, n, "private scalar outside [1, n - 1]")?;
        if ephemeral.curve() != curve {
            return Err(Error::InvalidCiphertextFormat(
                "ephemeral point belongs to another curve",
            ));
        }
        if ephemeral.is_neutral() || !ephemeral.is_on_curve() {
            return Err(Error::InvalidCiphertextFormat("ephemeral point is not usable"));
        }
        let shared = ephemeral.scalar_mul(d);
        if shared.is_neutral() {
            return Err(Error::DecryptionFailed("shared point is the point at infinity"));
        }
        Ok(shared)
    }

    /// Expand the coordinates of `shared` into `k_e` and `k_m`
    pub fn derive_keys(&self, shared: &Point) -> Result<DerivedKeys> {
        let (x, y) = shared
            .coordinates()
            .ok_or(Error::KeyDerivationFailed("shared point is the point at infinity"))?;
        let width = shared.curve().byte_length();
        let x = Zeroizing::new(encoding::int_to_bytes_be(x, width)?);
        let y = Zeroizing::new(encoding::int_to_bytes_be(y, width)?);

        let kdf = self.config.kdf;
        let encryption = kdf
            .derive(&x, &[], self.config.cipher.key_len())
            .map_err(|_| Error::KeyDerivationFailed("cipher key"))?;
        let mac = kdf
            .derive(&y, &[], self.config.mac.key_len())
            .map_err(|_| Error::KeyDerivationFailed("MAC key"))?;
        Ok(DerivedKeys {
            encryption: Zeroizing::new(encryption),
            mac: Zeroizing::new(mac),
        })
    }

    /// Encrypt `plaintext` for `recipient` under a fresh ephemeral scalar
    pub fn encrypt<R: RngCore + CryptoRng>(
        &self,
        recipient: &Point,
        plaintext: &[u8],
        rng: &mut R,
    ) -> Result<EciesCiphertext> {
        let (ephemeral, shared) = Self::encapsulate(recipient, None, rng)?;
        self.seal(ephemeral, &shared, plaintext)
    }

    /// Encrypt with a caller-chosen ephemeral scalar
    pub fn encrypt_with_ephemeral(
        &self,
        recipient: &Point,
        plaintext: &[u8],
        r: &BigUint,
    ) -> Result<EciesCiphertext> {
        let (ephemeral, shared) = encapsulate_with(recipient, r)?;
        self.seal(ephemeral, &shared, plaintext)
    }

    fn seal(&self, ephemeral: Point, shared: &Point, plaintext: &[u8]) -> Result<EciesCiphertext> {
        let keys = self.derive_keys(shared)?;
        let ciphertext = self
            .config
            .cipher
            .encrypt(&keys.encryption, &self.config.iv, plaintext)?;
        let tag = self.config.mac.compute(&keys.mac, &ciphertext)?;
        debug!(
            curve = %ephemeral.curve(),
            cipher = self.config.cipher.name(),
            mac = self.config.mac.name(),
            len = plaintext.len(),
            "ECIES encryption"
        );
        Ok(EciesCiphertext::new(ephemeral, ciphertext, tag))
    }

    /// Decrypt with private scalar `d` of `curve`; no plaintext is produced
    /// unless the tag verifies
    pub fn decrypt(&self, curve: &Curve, d: &BigUint, ciphertext: &EciesCiphertext) -> Result<Vec<u8>> {
        let shared = Self::decapsulate(curve, d, ciphertext.ephemeral())?;
        let keys = self.derive_keys(&shared)?;

        if self
            .config
            .mac
            .verify(&keys.mac, ciphertext.ciphertext(), ciphertext.tag())
            .is_err()
        {
            warn!(curve = %curve, mac = self.config.mac.name(), "ECIES tag mismatch");
            return Err(Error::AuthenticationFailed);
        }

        self.config
            .cipher
            .decrypt(&keys.encryption, &self.config.iv, ciphertext.ciphertext())
            .map_err(|_| Error::DecryptionFailed("cipher rejected the authenticated ciphertext"))
    }
}

fn encapsulate_with(recipient: &Point, r: &BigUint) -> Result<(Point, Point)> {
    let (g, n) = recipient.curve().domain()?;
    ephemeral::check_scalar(r, n, "ephemeral scalar outside [1, n - 1]")?;
    if recipient.is_neutral() || !recipient.is_on_curve() {
        return Err(Error::InvalidKey("recipient point is not usable"));
    }
    let shared = recipient.scalar_mul(r);
    if shared.is_neutral() {
        return Err(Error::EncryptionFailed("shared point is the point at infinity"));
    }
    Ok((g.scalar_mul(r), shared))
}
