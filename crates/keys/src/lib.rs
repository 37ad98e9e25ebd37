//! Key types for the ecclab library
//!
//! [`PrivateKey`] and [`PublicKey`] bind a scalar or a point to its curve
//! and carry the protocol capabilities as trait implementations:
//!
//! | key | capabilities |
//! |---|---|
//! | `PrivateKey` | `Signer`, `KeyAgreement`, `Decryptor<Ecies>`, `Decryptor<ElGamal>` |
//! | `PublicKey` | `Verifier`, `NonceReuseAnalyzer`, `Encryptor<Ecies>`, `Encryptor<ElGamal>` |

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod private;
mod public;


pub use private::PrivateKey;
pub use public::PublicKey;
