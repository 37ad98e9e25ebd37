//! Block ciphers in CBC mode with PKCS#7 padding

use aes::{Aes128, Aes256};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{validate, Error, Result};

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Symmetric cipher used for the ECIES payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CipherAlgorithm {
    /// AES-128 in CBC mode
    #[default]
    Aes128Cbc,
    /// AES-256 in CBC mode
    Aes256Cbc,
}

impl CipherAlgorithm {
    /// Key length in bytes
    pub const fn key_len(self) -> usize {
        match self {
            Self::Aes128Cbc => 16,
            Self::Aes256Cbc => 32,
        }
    }

    /// Block (and IV) length in bytes
    pub const fn block_size(self) -> usize {
        AES_BLOCK_SIZE
    }

    /// Algorithm name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aes128Cbc => "aes-128-cbc",
            Self::Aes256Cbc => "aes-256-cbc",
        }
    }

    fn check(self, key: &[u8], iv: &[u8]) -> Result<()> {
        validate::length("cipher key", key.len(), self.key_len())?;
        validate::length("cipher IV", iv.len(), self.block_size())
    }

    /// Pad `plaintext` with PKCS#7 and encrypt it
    pub fn encrypt(self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        self.check(key, iv)?;
        let ciphertext = match self {
            Self::Aes128Cbc => cbc::Encryptor::<Aes128>::new_from_slices(key, iv)
                .map_err(|_| Error::param("key", "rejected by AES-128"))?
                .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
            Self::Aes256Cbc => cbc::Encryptor::<Aes256>::new_from_slices(key, iv)
                .map_err(|_| Error::param("key", "rejected by AES-256"))?
                .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        };
        Ok(ciphertext)
    }

    /// Decrypt `ciphertext` and strip the PKCS#7 padding
    pub fn decrypt(self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.check(key, iv)?;
        validate::parameter(
            !ciphertext.is_empty() && ciphertext.len() % self.block_size() == 0,
            "ciphertext",
            "length must be a positive multiple of the block size",
        )?;
        let unpadded = match self {
            Self::Aes128Cbc => cbc::Decryptor::<Aes128>::new_from_slices(key, iv)
                .map_err(|_| Error::param("key", "rejected by AES-128"))?
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
            Self::Aes256Cbc => cbc::Decryptor::<Aes256>::new_from_slices(key, iv)
                .map_err(|_| Error::param("key", "rejected by AES-256"))?
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
        };
        unpadded.map_err(|_| Error::Processing {
            operation: "CBC decryption",
            details: "invalid padding",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aes128_cbc_vector() {
        let key: Vec<u8> = (0u8..16).collect();
        let iv = [0u8; 16];
        let ct = CipherAlgorithm::Aes128Cbc
            .encrypt(&key, &iv, b"attack at dawn")
            .unwrap();
        assert_eq!(hex::encode(&ct), "b1c64636d3c201d622ea58e3577d5479");
        let pt = CipherAlgorithm::Aes128Cbc.decrypt(&key, &iv, &ct).unwrap();
        assert_eq!(pt, b"attack at dawn");
    }

    #[test]
    fn test_aes256_pads_full_block() {
        let key = [7u8; 32];
        let iv = [1u8; 16];
        let ct = CipherAlgorithm::Aes256Cbc.encrypt(&key, &iv, &[0u8; 16]).unwrap();
        assert_eq!(ct.len(), 32);
        assert_eq!(
            CipherAlgorithm::Aes256Cbc.decrypt(&key, &iv, &ct).unwrap(),
            vec![0u8; 16]
        );
    }

    #[test]
    fn test_rejects_bad_inputs() {
        let alg = CipherAlgorithm::Aes128Cbc;
        assert!(matches!(
            alg.encrypt(&[0u8; 15], &[0u8; 16], b"x"),
            Err(Error::Length { .. })
        ));
        assert!(alg.decrypt(&[0u8; 16], &[0u8; 16], &[0u8; 15]).is_err());
        assert!(alg.decrypt(&[0u8; 16], &[0u8; 16], &[]).is_err());
    }
}
