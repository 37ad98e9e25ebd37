//! Mathematical kernel and primitive providers for ecclab
//!
//! This crate provides the layers every ecclab protocol is built on:
//!
//! - [`field`]: elements of a prime field `Z/pZ`, including the modular
//!   inverse, the quadratic residue test and Tonelli-Shanks square roots
//! - [`ec`]: short Weierstrass curves, their points and the group law,
//!   plus double-and-add and X-only ladder scalar multiplication
//! - [`random`] and [`primes`]: unbiased random integers and primality tests
//! - [`hash`], [`kdf`], [`block`], [`mac`]: the symmetric primitives used by
//!   ECDSA and ECIES, addressed through small algorithm identifiers
//!
//! None of the arithmetic here is constant time.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod block;
pub mod ec;
pub mod encoding;
pub mod error;
pub mod field;
pub mod hash;
pub mod kdf;
pub mod mac;
pub mod primes;
pub mod random;

pub use error::{Error, Result};
pub use field::FieldElement;
