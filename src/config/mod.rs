//! TOML configuration for the protocol layer
//!
//! A [`Config`] names a curve and picks the hash, ECIES and ElGamal
//! settings. Every field is optional in the file:
//!
//! ```toml
//! curve = "brainpoolP256r1"
//! hash = "sha3-256"
//!
//! [ecies]
//! cipher = "aes256-cbc"
//! mac = "hmac-sha512"
//! kdf = { algorithm = "hkdf", hash = "sha384" }
//!
//! [elgamal]
//! message_bits = 64
//! ```
//!
//! Curve names are resolved against a caller-owned [`CurveRegistry`].

use std::fs;
use std::path::{Path, PathBuf};

use ecclab_algorithms::ec::Curve;
use ecclab_api::{Error as CoreError, HashAlgorithm};
use ecclab_params::{CurveRegistry, RegistryError};
use ecclab_pke::{Ecies, EciesConfig, ElGamal, ElGamalConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(test)]
mod tests;

/// Curve used when the configuration names none
pub const DEFAULT_CURVE: &str = "secp256r1";

/// Errors raised while loading or resolving a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The TOML text does not describe a configuration
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be written out
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The curve name is not in the registry
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The registry entry does not form a valid curve
    #[error(transparent)]
    Curve(#[from] ecclab_algorithms::Error),

    /// The scheme settings are inconsistent
    #[error(transparent)]
    Scheme(#[from] ecclab_pke::Error),
}

impl From<ConfigError> for CoreError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Registry(e) => e.into(),
            ConfigError::Curve(e) => e.into(),
            ConfigError::Scheme(e) => e.into(),
            e => CoreError::SerializationError {
                context: "configuration",
                message: e.to_string(),
            },
        }
    }
}

/// Result type for configuration handling
pub type Result<T> = core::result::Result<T, ConfigError>;

/// Curve name and protocol settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Registry name, alias or OID of the curve
    pub curve: String,
    /// Hash used for signatures
    pub hash: HashAlgorithm,
    /// ECIES algorithms and IV
    pub ecies: EciesConfig,
    /// ElGamal message width and attempt bound
    pub elgamal: ElGamalConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            curve: DEFAULT_CURVE.to_string(),
            hash: HashAlgorithm::Sha256,
            ecies: EciesConfig::default(),
            elgamal: ElGamalConfig::default(),
        }
    }
}

/// A [`Config`] with its curve looked up and its schemes built
#[derive(Debug, Clone)]
pub struct Resolved {
    /// The validated curve
    pub curve: Curve,
    /// Hash used for signatures
    pub hash: HashAlgorithm,
    /// ECIES instance
    pub ecies: Ecies,
    /// ElGamal instance
    pub elgamal: ElGamal,
}

impl Config {
    /// Parse TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), curve = %config.curve, "configuration loaded");
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Look the curve up by name, falling back to OIDs
    pub fn curve(&self, registry: &CurveRegistry) -> Result<Curve> {
        let entry = match registry.get(&self.curve) {
            Ok(entry) => entry,
            Err(RegistryError::UnknownCurve { .. }) => registry
                .by_oid(&self.curve)
                .map_err(|_| RegistryError::UnknownCurve {
                    name: self.curve.clone(),
                })?,
            Err(e) => return Err(e.into()),
        };
        Ok(Curve::from_entry(entry)?)
    }

    /// ECIES with the configured algorithms
    pub fn ecies(&self) -> Result<Ecies> {
        Ok(Ecies::new(self.ecies.clone())?)
    }

    /// ElGamal with the configured message width
    pub fn elgamal(&self) -> ElGamal {
        ElGamal::new(self.elgamal)
    }

    /// Resolve every part against `registry`
    pub fn resolve(&self, registry: &CurveRegistry) -> Result<Resolved> {
        Ok(Resolved {
            curve: self.curve(registry)?,
            hash: self.hash,
            ecies: self.ecies()?,
            elgamal: self.elgamal(),
        })
    }
}
