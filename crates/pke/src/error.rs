//! Error handling for PKE operations.

use ecclab_algorithms::Error as PrimitiveError;
use ecclab_api::Error as CoreError;

/// Error type for PKE operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Error from the arithmetic or primitive layer
    #[error("PKE primitive error: {0}")]
    Primitive(PrimitiveError),

    /// The curve cannot be used for encryption
    #[error("Curve lacks {missing} required for encryption")]
    IncompleteDomain {
        /// The missing domain parameter
        missing: &'static str,
    },

    /// A key or ephemeral scalar was rejected
    #[error("Invalid PKE key: {0}")]
    InvalidKey(&'static str),

    /// The ciphertext does not parse or belongs to another curve
    #[error("Invalid PKE ciphertext format: {0}")]
    InvalidCiphertextFormat(&'static str),

    /// Encryption could not complete
    #[error("PKE encryption failed: {0}")]
    EncryptionFailed(&'static str),

    /// Decryption could not complete
    #[error("PKE decryption failed: {0}")]
    DecryptionFailed(&'static str),

    /// The authentication tag did not match
    #[error("PKE authentication failed")]
    AuthenticationFailed,

    /// The KDF could not produce key material
    #[error("PKE key derivation failed: {0}")]
    KeyDerivationFailed(&'static str),

    /// The message does not fit the configured width
    #[error("Message of {bits} bits exceeds the {max}-bit message width")]
    MessageTooLong {
        /// Bit length of the message integer
        bits: u64,
        /// Configured width
        max: u32,
    },

    /// No X coordinate was found for the message within the attempt bound
    #[error("No curve point encodes the message after {attempts} attempts")]
    EncodingExhausted {
        /// Attempts made
        attempts: u32,
    },
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        match err {
            PrimitiveError::IncompleteDomain { missing } => Error::IncompleteDomain { missing },
            other => Error::Primitive(other),
        }
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::IncompleteDomain { missing } => CoreError::DomainParameters {
                context: "PKE",
                message: format!("curve has no {missing}"),
            },
            Error::InvalidKey(reason) => CoreError::InvalidKey {
                context: "PKE",
                message: reason.to_string(),
            },
            Error::InvalidCiphertextFormat(reason) => CoreError::InvalidCiphertext {
                context: "PKE",
                message: reason.to_string(),
            },
            Error::EncryptionFailed(reason) => CoreError::Other {
                context: "PKE encryption",
                message: reason.to_string(),
            },
            Error::DecryptionFailed(reason) => CoreError::DecryptionFailed {
                context: "PKE decryption",
                message: reason.to_string(),
            },
            Error::AuthenticationFailed => CoreError::AuthenticationFailed {
                context: "ECIES",
                message: "tag mismatch".to_string(),
            },
            Error::KeyDerivationFailed(reason) => CoreError::Other {
                context: "ECIES KDF",
                message: reason.to_string(),
            },
            e @ Error::MessageTooLong { .. } => CoreError::InvalidParameter {
                context: "ElGamal message",
                message: e.to_string(),
            },
            e @ Error::EncodingExhausted { .. } => CoreError::EncodingExhausted {
                context: "ElGamal message encoding",
                message: e.to_string(),
            },
        }
    }
}

/// Result type for PKE operations.
pub type Result<T> = core::result::Result<T, Error>;
