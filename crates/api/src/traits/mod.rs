//! Capability traits implemented by ecclab key types
//!
//! Each protocol capability is a separate trait so that it can be implemented
//! and tested on its own. Private keys carry [`Signer`], [`KeyAgreement`] and
//! [`Decryptor`]; public keys carry [`Verifier`], [`NonceReuseAnalyzer`] and
//! [`Encryptor`].

pub mod agreement;
pub mod encryption;
pub mod signature;

pub use agreement::KeyAgreement;
pub use encryption::{Decryptor, Encryptor};
pub use signature::{NonceReuseAnalyzer, Signer, Verifier};
