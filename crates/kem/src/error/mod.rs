//! Error handling for key agreement

use ecclab_algorithms::Error as PrimitiveError;
use ecclab_api::Error as CoreError;

pub mod validate;

/// Error type for key agreement
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Primitive error
    #[error(transparent)]
    Primitive(#[from] PrimitiveError),

    /// Invalid key
    #[error("Invalid {key_type} key: {reason}")]
    InvalidKey {
        /// Which key was rejected
        key_type: &'static str,
        /// Why
        reason: &'static str,
    },

    /// The two keys live on different curves
    #[error("Keys belong to different curves")]
    CurveMismatch,

    /// The agreement produced the neutral point
    #[error("Key agreement failed: {details}")]
    Agreement {
        /// What went wrong
        details: &'static str,
    },
}

/// Result type for key agreement
pub type Result<T> = core::result::Result<T, Error>;

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::InvalidKey { key_type, reason } => CoreError::InvalidKey {
                context: key_type,
                message: reason.to_string(),
            },
            Error::CurveMismatch => CoreError::InvalidKey {
                context: "ECDH",
                message: "peer key belongs to a different curve".to_string(),
            },
            Error::Agreement { details } => CoreError::InvalidKey {
                context: "ECDH",
                message: details.to_string(),
            },
        }
    }
}
