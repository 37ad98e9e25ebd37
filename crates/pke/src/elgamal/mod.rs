//! ElGamal encryption on elliptic curves
//!
//! A message of at most `w` bits is read as a little-endian integer `m`
//! and mapped to the first point whose X coordinate is `m | (i << w)` for
//! `i = 0, 1, 2, ...`. The search is bounded, so encoding can fail; about
//! half of all X values lie on the curve and the bound makes failure
//! unlikely rather than impossible.
//!
//! Encryption publishes `C1 = k * G` and `C2 = k * Q + P_m`. Decryption
//! recovers `P_m = C2 - d * C1` and masks its X coordinate back to `w` bits.

#[cfg(test)]
mod tests;

use ecclab_algorithms::ec::{Curve, Point};
use ecclab_algorithms::encoding;
use num_bigint::BigUint;
use num_traits::One;
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ephemeral;
use crate::error::{Error, Result};

/// Default bound on encoding attempts
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Default message width in bits
pub const DEFAULT_MESSAGE_BITS: u32 = 128;

/// Message width and encoding search bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ElGamalConfig {
    /// Width `w` of the message integer in bits
    pub message_bits: u32,
    /// Offsets `i` tried before giving up
    pub max_attempts: u32,
}

impl Default for ElGamalConfig {
    fn default() -> Self {
        Self {
            message_bits: DEFAULT_MESSAGE_BITS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl ElGamalConfig {
    /// Width of `len`-byte messages and the default attempt bound
    pub fn for_message_len(len: usize) -> Self {
        Self {
            message_bits: (len * 8) as u32,
            ..Self::default()
        }
    }
}

/// `(C1, C2)`, serialised as two uncompressed points back to back
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElGamalCiphertext {
    /// `k * G`
    pub c1: Point,
    /// `k * Q + P_m`
    pub c2: Point,
}

impl ElGamalCiphertext {
    /// `C1 || C2`, both uncompressed
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = self.c1.to_uncompressed_bytes()?;
        out.extend(self.c2.to_uncompressed_bytes()?);
        Ok(out)
    }

    /// Parse `C1 || C2` on `curve`
    pub fn from_bytes(curve: &Curve, bytes: &[u8]) -> Result<Self> {
        let point_len = 1 + 2 * curve.byte_length();
        if bytes.len() != 2 * point_len {
            return Err(Error::InvalidCiphertextFormat(
                "expected two uncompressed points",
            ));
        }
        let (c1, c2) = bytes.split_at(point_len);
        Ok(Self {
            c1: Point::from_uncompressed_bytes(curve, c1)?,
            c2: Point::from_uncompressed_bytes(curve, c2)?,
        })
    }
}

/// ElGamal under a fixed [`ElGamalConfig`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElGamal {
    config: ElGamalConfig,
}

impl ElGamal {
    /// Scheme with `config`
    pub fn new(config: ElGamalConfig) -> Self {
        Self { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &ElGamalConfig {
        &self.config
    }

    fn mask(&self) -> BigUint {
        (BigUint::one() << self.config.message_bits) - 1u32
    }

    /// Map `message` to a point of `curve`
    pub fn encode(&self, curve: &Curve, message: &[u8]) -> Result<Point> {
        let w = self.config.message_bits;
        let m = encoding::bytes_to_int_le(message);
        if m.bits() > u64::from(w) {
            return Err(Error::MessageTooLong { bits: m.bits(), max: w });
        }

        let mut attempts = 0;
        for i in 0..self.config.max_attempts {
            let candidate = &m | (BigUint::from(i) << w);
            if &candidate >= curve.modulus() {
                debug!(curve = %curve, attempt = i, "ElGamal candidate reached the field modulus");
                break;
            }
            attempts = i + 1;
            if let Some((point, _)) = curve.get_point_with_x(&candidate) {
                trace!(curve = %curve, attempts = i + 1, "ElGamal message encoded");
                return Ok(point);
            }
        }
        Err(Error::EncodingExhausted { attempts })
    }

    /// Low `w` bits of the X coordinate as `ceil(w / 8)` little-endian bytes
    pub fn decode(&self, point: &Point) -> Result<Vec<u8>> {
        let (x, _) = point
            .coordinates()
            .ok_or(Error::DecryptionFailed("message point is the point at infinity"))?;
        let len = (self.config.message_bits as usize).div_ceil(8);
        Ok(encoding::int_to_bytes_le(&(x & self.mask()), len)?)
    }

    /// Encrypt `message` for `recipient` under a fresh ephemeral scalar
    pub fn encrypt<R: RngCore + CryptoRng>(
        &self,
        recipient: &Point,
        message: &[u8],
        rng: &mut R,
    ) -> Result<ElGamalCiphertext> {
        let (_, n) = recipient.curve().domain()?;
        let k = ephemeral::random_scalar(n, rng)?;
        self.encrypt_with_ephemeral(recipient, message, &k)
    }

    /// Encrypt with a caller-chosen ephemeral scalar `k`
    pub fn encrypt_with_ephemeral(
        &self,
        recipient: &Point,
        message: &[u8],
        k: &BigUint,
    ) -> Result<ElGamalCiphertext> {
        let curve = recipient.curve();
        let (g, n) = curve.domain()?;
        ephemeral::check_scalar(k, n, "ephemeral scalar outside [1, n - 1]")?;
        if recipient.is_neutral() || !recipient.is_on_curve() {
            return Err(Error::InvalidKey("recipient point is not usable"));
        }

        let p_m = self.encode(curve, message)?;
        let c1 = g.scalar_mul(k);
        let c2 = &recipient.scalar_mul(k) + &p_m;
        debug!(curve = %curve, bits = self.config.message_bits, "ElGamal encryption");
        Ok(ElGamalCiphertext { c1, c2 })
    }

    /// Decrypt with private scalar `d` of `curve`
    pub fn decrypt(&self, curve: &Curve, d: &BigUint, ciphertext: &ElGamalCiphertext) -> Result<Vec<u8>> {
        let (_, n) = curve.domain()?;
        ephemeral::check_scalar(d, n, "private scalar outside [1, n - 1]")?;
        if ciphertext.c1.curve() != curve || ciphertext.c2.curve() != curve {
            return Err(Error::InvalidCiphertextFormat(
                "ciphertext points belong to another curve",
            ));
        }
        let p_m = &ciphertext.c2 - &ciphertext.c1.scalar_mul(d);
        self.decode(&p_m)
    }
}
