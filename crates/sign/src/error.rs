//! Error types for the signature crate

use ecclab_algorithms::Error as AlgoError;
use ecclab_api::Error as ApiError;

/// Errors that can occur during signature operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Error from the arithmetic layer
    #[error(transparent)]
    Algorithm(AlgoError),

    /// The curve cannot be used for ECDSA
    #[error("Curve lacks {missing} required for ECDSA")]
    IncompleteDomain {
        /// The missing domain parameter
        missing: &'static str,
    },

    /// Invalid private key
    #[error("Invalid key: {0}")]
    InvalidKey(&'static str),

    /// A supplied nonce is unusable
    #[error("Nonce error: {0}")]
    Nonce(&'static str),

    /// Signature encoding error
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The signature records no hash algorithm
    #[error("Signature does not record its hash algorithm")]
    MissingHash,

    /// Nonce-reuse recovery called outside its contract
    #[error("Nonce reuse recovery precondition failed: {0}")]
    RecoveryPrecondition(&'static str),

    /// The recovered scalar does not reproduce the public key
    #[error("Recovered private key does not match the public key")]
    RecoveryMismatch,
}

impl From<AlgoError> for Error {
    fn from(err: AlgoError) -> Self {
        match err {
            AlgoError::IncompleteDomain { missing } => Error::IncompleteDomain { missing },
            other => Error::Algorithm(other),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Algorithm(e) => e.into(),
            Error::IncompleteDomain { missing } => ApiError::DomainParameters {
                context: "ECDSA",
                message: format!("curve has no {missing}"),
            },
            Error::InvalidKey(msg) => ApiError::InvalidKey {
                context: "ECDSA",
                message: msg.to_string(),
            },
            Error::Nonce(msg) => ApiError::PreconditionFailed {
                context: "ECDSA nonce",
                message: msg.to_string(),
            },
            Error::Encoding(msg) => ApiError::InvalidSignature {
                context: "ECDSA signature encoding",
                message: msg,
            },
            Error::MissingHash => ApiError::InvalidSignature {
                context: "ECDSA signature",
                message: "no hash algorithm recorded".to_string(),
            },
            Error::RecoveryPrecondition(msg) => ApiError::PreconditionFailed {
                context: "ECDSA nonce reuse",
                message: msg.to_string(),
            },
            Error::RecoveryMismatch => ApiError::PreconditionFailed {
                context: "ECDSA nonce reuse",
                message: "recovered key does not match the public key".to_string(),
            },
        }
    }
}

/// Result type for signature operations
pub type Result<T> = core::result::Result<T, Error>;
