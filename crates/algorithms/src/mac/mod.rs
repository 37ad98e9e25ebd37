//! Message authentication codes

use hmac::{Hmac, Mac};
use subtle::ConstantTimeEq;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{validate, Error, Result};

/// MAC protecting the ECIES ciphertext
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MacAlgorithm {
    /// HMAC-SHA256
    #[default]
    HmacSha256,
    /// HMAC-SHA384
    HmacSha384,
    /// HMAC-SHA512
    HmacSha512,
}

impl MacAlgorithm {
    /// Derived key length: one digest output
    pub const fn key_len(self) -> usize {
        self.tag_len()
    }

    /// Tag length in bytes
    pub const fn tag_len(self) -> usize {
        match self {
            Self::HmacSha256 => 32,
            Self::HmacSha384 => 48,
            Self::HmacSha512 => 64,
        }
    }

    /// Algorithm name
    pub const fn name(self) -> &'static str {
        match self {
            Self::HmacSha256 => "hmac-sha256",
            Self::HmacSha384 => "hmac-sha384",
            Self::HmacSha512 => "hmac-sha512",
        }
    }

    /// Tag over `data`
    pub fn compute(self, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::HmacSha256 => tag::<Hmac<sha2::Sha256>>(key, data),
            Self::HmacSha384 => tag::<Hmac<sha2::Sha384>>(key, data),
            Self::HmacSha512 => tag::<Hmac<sha2::Sha512>>(key, data),
        }
    }

    /// Recompute the tag and compare it with `expected` in constant time
    pub fn verify(self, key: &[u8], data: &[u8], expected: &[u8]) -> Result<()> {
        let actual = self.compute(key, data)?;
        let matches = actual.len() == expected.len() && bool::from(actual.ct_eq(expected));
        validate::authentication(matches, self.name())
    }
}

fn tag<M: Mac + hmac::digest::KeyInit>(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let mut mac = <M as Mac>::new_from_slice(key).map_err(|_| Error::param("key", "rejected by HMAC"))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";

    #[test]
    fn test_hmac_vectors() {
        assert_eq!(
            hex::encode(MacAlgorithm::HmacSha256.compute(b"key", FOX).unwrap()),
            "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
        );
        assert_eq!(
            hex::encode(MacAlgorithm::HmacSha512.compute(b"key", FOX).unwrap()),
            "b42af09057bac1e2d41708e48a902e09b5ff7f12ab428a4fe86653c73dd248fb\
             82f948a549f7b791a5b41915ee4d1ec3935357e4e2317250d0372afa2ebeeb3a"
        );
    }

    #[test]
    fn test_verify() {
        let alg = MacAlgorithm::HmacSha384;
        let tag = alg.compute(b"k", b"data").unwrap();
        assert_eq!(tag.len(), alg.tag_len());
        assert!(alg.verify(b"k", b"data", &tag).is_ok());

        let mut forged = tag.clone();
        forged[0] ^= 1;
        assert_eq!(
            alg.verify(b"k", b"data", &forged),
            Err(Error::Authentication {
                algorithm: "hmac-sha384"
            })
        );
        assert!(alg.verify(b"k", b"data", &tag[..10]).is_err());
        assert!(alg.verify(b"other", b"data", &tag).is_err());
    }
}
