//! ECDSA for the ecclab library
//!
//! Signing and verification over any validated curve from
//! `ecclab-algorithms`, the fixed-width and DER signature encodings, and
//! private key recovery from two signatures that reused a nonce.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod ecdsa;
pub mod error;

pub use ecdsa::{RecoveredKey, Signature};
pub use error::{Error, Result};
