//! Elliptic-curve Diffie-Hellman for the ecclab library
//!
//! Shared points and shared secrets between a private scalar and a peer's
//! public point, computed either with full point arithmetic or with the
//! X-only ladder.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod ecdh;
pub mod error;

pub use ecdh::{shared_point, shared_secret, shared_secret_x_only};
pub use error::{Error, Result};
