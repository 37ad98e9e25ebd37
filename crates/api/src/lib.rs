//! Public API traits and types for the ecclab library
//!
//! This crate provides the public API surface shared by every ecclab crate:
//! the error type, the hash algorithm identifier, and the capability traits
//! that key types implement (signing, verification, key agreement,
//! encryption and the ECDSA nonce-reuse analysis).

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use types::HashAlgorithm;

pub use traits::{
    Decryptor, Encryptor, KeyAgreement, NonceReuseAnalyzer, Signer, Verifier,
};
