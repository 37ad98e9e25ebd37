//! Public key encryption over elliptic curves for the ecclab library.
//!
//! Two schemes live here. [`Ecies`] derives symmetric keys from a
//! Diffie-Hellman point, encrypts with a block cipher and authenticates
//! with a MAC. [`ElGamal`] maps short messages onto curve points and
//! masks them with a shared point.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod ecies;
pub mod elgamal;
pub mod error;

mod ephemeral;

pub use ecies::{Ecies, EciesCiphertext, EciesConfig};
pub use elgamal::{ElGamal, ElGamalCiphertext, ElGamalConfig};
pub use error::{Error, Result};
