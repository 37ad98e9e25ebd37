//! Named elliptic-curve domain parameters for ecclab
//!
//! The crate holds the parameter sets of the standard short-Weierstrass
//! curves and a [`CurveRegistry`] that resolves names, aliases and object
//! identifiers to them. It performs no arithmetic: turning a parameter set
//! into a validated curve is the job of `ecclab-algorithms`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod curves;
pub mod error;
pub mod registry;

pub use curves::{CurveEntry, DomainParameters};
pub use error::{RegistryError, Result};
pub use registry::CurveRegistry;
