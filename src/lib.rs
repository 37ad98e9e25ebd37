//! # ecclab
//!
//! Prime-field elliptic-curve cryptography written to be read: field
//! arithmetic, the short Weierstrass group law, scalar multiplication and
//! the ECDSA, ECDH, ECIES and ElGamal protocols, including the recovery of
//! an ECDSA private key from two signatures that reuse a nonce.
//!
//! ## Features
//!
//! - `protocols` (default): signatures, key agreement, encryption and the
//!   key types
//! - `serde` (default): serializable configuration and the TOML loader in
//!   [`config`]
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`api`]: error type, hash identifiers and capability traits
//! - [`params`]: named-curve parameter sets and the [`CurveRegistry`]
//! - [`algorithms`]: field and curve arithmetic, hashing, KDFs, ciphers, MACs
//! - `sign`: ECDSA and nonce-reuse recovery
//! - `kem`: Diffie-Hellman shared secrets
//! - `pke`: ECIES and ElGamal
//! - `keys`: [`PrivateKey`] and [`PublicKey`]
//!
//! ```no_run
//! use ecclab::prelude::*;
//! use ecclab::rand::rngs::OsRng;
//!
//! # fn main() -> ecclab::api::Result<()> {
//! let registry = CurveRegistry::with_builtin();
//! let curve = Curve::from_entry(registry.get("secp256r1")?)?;
//! let key = PrivateKey::generate(&curve, &mut OsRng)?;
//! let signature = key.sign(b"hello", HashAlgorithm::Sha256, None, &mut OsRng)?;
//! assert!(key.public_key().verify(b"hello", &signature));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Core re-exports (always available)
pub use ecclab_algorithms as algorithms;
pub use ecclab_api as api;
pub use ecclab_params as params;

// Feature-gated re-exports
#[cfg(feature = "sign")]
pub use ecclab_sign as sign;

#[cfg(feature = "kem")]
pub use ecclab_kem as kem;

#[cfg(feature = "pke")]
pub use ecclab_pke as pke;

#[cfg(feature = "keys")]
pub use ecclab_keys as keys;

#[cfg(all(feature = "serde", feature = "pke"))]
pub mod config;

pub use num_bigint;
pub use rand;

pub use ecclab_algorithms::ec::{Curve, Point};
pub use ecclab_algorithms::FieldElement;
pub use ecclab_params::CurveRegistry;

#[cfg(feature = "keys")]
pub use ecclab_keys::{PrivateKey, PublicKey};

/// Common imports for ecclab users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{
        Decryptor, Encryptor, HashAlgorithm, KeyAgreement, NonceReuseAnalyzer, Signer, Verifier,
    };

    pub use crate::{Curve, CurveRegistry, FieldElement, Point};

    #[cfg(feature = "keys")]
    pub use crate::{PrivateKey, PublicKey};

    #[cfg(feature = "pke")]
    pub use crate::pke::{Ecies, EciesConfig, ElGamal, ElGamalConfig};

    #[cfg(all(feature = "serde", feature = "pke"))]
    pub use crate::config::Config;
}
