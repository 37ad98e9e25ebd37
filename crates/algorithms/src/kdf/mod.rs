//! Key derivation functions for ECIES key material

use hkdf::SimpleHkdf;
use sha2::digest::core_api::BlockSizeUser;
use sha2::Digest;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{validate, Error, Result};
use crate::hash::{self, HashAlgorithm};

/// A key derivation function and the digest it is built on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "algorithm", content = "hash", rename_all = "kebab-case")
)]
pub enum KdfAlgorithm {
    /// ANSI X9.63 / SEC 1 KDF: `H(Z || counter || SharedInfo)` blocks with a
    /// 32-bit big-endian counter starting at 1
    X963(HashAlgorithm),
    /// HKDF (RFC 5869) with an empty salt
    Hkdf(HashAlgorithm),
}

impl Default for KdfAlgorithm {
    fn default() -> Self {
        Self::X963(HashAlgorithm::Sha256)
    }
}

impl KdfAlgorithm {
    /// Digest underlying the KDF
    pub fn hash(self) -> HashAlgorithm {
        match self {
            Self::X963(hash) | Self::Hkdf(hash) => hash,
        }
    }

    /// Human readable name, e.g. `x963-sha256`
    pub fn name(self) -> String {
        match self {
            Self::X963(hash) => format!("x963-{hash}"),
            Self::Hkdf(hash) => format!("hkdf-{hash}"),
        }
    }

    /// Derive `length` bytes from `ikm`, bound to `info`
    pub fn derive(self, ikm: &[u8], info: &[u8], length: usize) -> Result<Vec<u8>> {
        match self {
            Self::X963(hash) => x963(hash, ikm, info, length),
            Self::Hkdf(hash) => match hash {
                HashAlgorithm::Sha224 => hkdf::<sha2::Sha224>(ikm, info, length),
                HashAlgorithm::Sha256 => hkdf::<sha2::Sha256>(ikm, info, length),
                HashAlgorithm::Sha384 => hkdf::<sha2::Sha384>(ikm, info, length),
                HashAlgorithm::Sha512 => hkdf::<sha2::Sha512>(ikm, info, length),
                HashAlgorithm::Sha3_256 => hkdf::<sha3::Sha3_256>(ikm, info, length),
                HashAlgorithm::Sha3_384 => hkdf::<sha3::Sha3_384>(ikm, info, length),
                HashAlgorithm::Sha3_512 => hkdf::<sha3::Sha3_512>(ikm, info, length),
            },
        }
    }
}

fn x963(hash: HashAlgorithm, ikm: &[u8], info: &[u8], length: usize) -> Result<Vec<u8>> {
    let block = hash.output_size();
    let blocks = length.div_ceil(block);
    validate::max_length("X9.63 KDF output", blocks, u32::MAX as usize - 1)?;

    let mut out = Vec::with_capacity(blocks * block);
    for counter in 1..=blocks as u32 {
        let counter = counter.to_be_bytes();
        out.extend_from_slice(&hash::digest_parts(hash, &[ikm, counter.as_slice(), info]));
    }
    out.truncate(length);
    Ok(out)
}

fn hkdf<D>(ikm: &[u8], info: &[u8], length: usize) -> Result<Vec<u8>>
where
    D: Digest + BlockSizeUser + Clone,
{
    let mut okm = vec![0u8; length];
    SimpleHkdf::<D>::new(None, ikm)
        .expand(info, &mut okm)
        .map_err(|_| Error::Length {
            context: "HKDF output",
            expected: 255 * <D as Digest>::output_size(),
            actual: length,
        })?;
    Ok(okm)
}
