//! Error type definitions for elliptic-curve operations

/// Primary error type for ecclab operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Invalid key error
    #[error("Invalid key: {context}: {message}")]
    InvalidKey {
        /// Operation or type that rejected the key
        context: &'static str,
        /// Details
        message: String,
    },

    /// Invalid signature error
    #[error("Invalid signature: {context}: {message}")]
    InvalidSignature {
        /// Operation or type that rejected the signature
        context: &'static str,
        /// Details
        message: String,
    },

    /// Decryption error
    #[error("Decryption failed: {context}: {message}")]
    DecryptionFailed {
        /// Scheme that failed
        context: &'static str,
        /// Details
        message: String,
    },

    /// Invalid ciphertext error
    #[error("Invalid ciphertext: {context}: {message}")]
    InvalidCiphertext {
        /// Scheme that rejected the ciphertext
        context: &'static str,
        /// Details
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        /// Input that had the wrong length
        context: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        /// Parameter or operation
        context: &'static str,
        /// Details
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {context}: {message}")]
    SerializationError {
        /// Type being encoded or decoded
        context: &'static str,
        /// Details
        message: String,
    },

    /// Random generation error
    #[error("Random generation error: {context}: {message}")]
    RandomGenerationError {
        /// Operation that needed randomness
        context: &'static str,
        /// Details
        message: String,
    },

    /// Authentication failed error
    #[error("Authentication failed: {context}: {message}")]
    AuthenticationFailed {
        /// Scheme whose tag did not verify
        context: &'static str,
        /// Details
        message: String,
    },

    /// Curve domain parameters failed validation
    #[error("Invalid domain parameters: {context}: {message}")]
    DomainParameters {
        /// Curve or parameter set
        context: &'static str,
        /// Which check failed
        message: String,
    },

    /// Field or group arithmetic error (inverse of zero, mixed moduli)
    #[error("Arithmetic error: {context}: {message}")]
    Arithmetic {
        /// Operation
        context: &'static str,
        /// Details
        message: String,
    },

    /// A caller contract was not met
    #[error("Precondition failed: {context}: {message}")]
    PreconditionFailed {
        /// Operation
        context: &'static str,
        /// Which precondition
        message: String,
    },

    /// Message-to-point encoding gave up after its attempt bound
    #[error("Encoding exhausted: {context}: {message}")]
    EncodingExhausted {
        /// Encoding
        context: &'static str,
        /// Details
        message: String,
    },

    /// Curve name or OID not present in the registry
    #[error("Unknown curve: {name}")]
    UnknownCurve {
        /// Name or OID that was looked up
        name: String,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        /// Operation
        context: &'static str,
        /// Details
        message: String,
    },
}

/// Result type for ecclab operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its message
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidSignature { message, .. } => Self::InvalidSignature { context, message },
            Self::DecryptionFailed { message, .. } => Self::DecryptionFailed { context, message },
            Self::InvalidCiphertext { message, .. } => Self::InvalidCiphertext { context, message },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::SerializationError { message, .. } => {
                Self::SerializationError { context, message }
            }
            Self::RandomGenerationError { message, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::AuthenticationFailed { message, .. } => {
                Self::AuthenticationFailed { context, message }
            }
            Self::DomainParameters { message, .. } => Self::DomainParameters { context, message },
            Self::Arithmetic { message, .. } => Self::Arithmetic { context, message },
            Self::PreconditionFailed { message, .. } => {
                Self::PreconditionFailed { context, message }
            }
            Self::EncodingExhausted { message, .. } => Self::EncodingExhausted { context, message },
            Self::UnknownCurve { name } => Self::UnknownCurve { name },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// Replace the message of an existing error
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::InvalidSignature { context, .. } => Self::InvalidSignature { context, message },
            Self::DecryptionFailed { context, .. } => Self::DecryptionFailed { context, message },
            Self::InvalidCiphertext { context, .. } => Self::InvalidCiphertext { context, message },
            Self::InvalidLength { context, expected, actual } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::SerializationError { context, .. } => {
                Self::SerializationError { context, message }
            }
            Self::RandomGenerationError { context, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::AuthenticationFailed { context, .. } => {
                Self::AuthenticationFailed { context, message }
            }
            Self::DomainParameters { context, .. } => Self::DomainParameters { context, message },
            Self::Arithmetic { context, .. } => Self::Arithmetic { context, message },
            Self::PreconditionFailed { context, .. } => {
                Self::PreconditionFailed { context, message }
            }
            Self::EncodingExhausted { context, .. } => Self::EncodingExhausted { context, message },
            Self::UnknownCurve { name } => Self::UnknownCurve { name },
            Self::Other { context, .. } => Self::Other { context, message },
        }
    }

    /// Shorthand for an [`Error::InvalidParameter`]
    pub fn invalid_parameter(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an [`Error::PreconditionFailed`]
    pub fn precondition(context: &'static str, message: impl Into<String>) -> Self {
        Self::PreconditionFailed {
            context,
            message: message.into(),
        }
    }
}
