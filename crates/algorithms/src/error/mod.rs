//! Error handling for the mathematical kernel and primitive providers

use std::borrow::Cow;

use ecclab_api::Error as CoreError;

/// The error type for field, curve and primitive operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Parameter validation error
    #[error("Invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    #[error("Invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Two field elements with different moduli were combined
    #[error("Cannot combine elements of different prime fields")]
    IncompatibleField,

    /// Inverse of zero
    #[error("Division by zero in {context}")]
    DivisionByZero {
        /// Operation that divided
        context: &'static str,
    },

    /// Curve construction rejected its domain parameters
    #[error("Invalid domain parameters: {reason}")]
    DomainParameters {
        /// Which validation failed
        reason: Cow<'static, str>,
    },

    /// The curve lacks a generator or group order
    #[error("Curve has no {missing}")]
    IncompleteDomain {
        /// The missing domain parameter
        missing: &'static str,
    },

    /// Coordinates do not satisfy the curve equation
    #[error("Point is not on the curve")]
    PointNotOnCurve,

    /// Two points on different curves were combined
    #[error("Points belong to different curves")]
    IncompatibleCurve,

    /// A point encoding with an unsupported leading tag byte
    #[error("Unsupported point encoding tag 0x{tag:02x}")]
    UnsupportedFormat {
        /// The tag byte found
        tag: u8,
    },

    /// Authentication failure (MAC tag mismatch)
    #[error("Authentication failed for {algorithm}")]
    Authentication {
        /// Algorithm that failed authentication
        algorithm: &'static str,
    },

    /// Processing error during a primitive operation
    #[error("Processing error in {operation}: {details}")]
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },

    /// The random source failed
    #[error("Random generation failed: {details}")]
    RandomGeneration {
        /// Message of the underlying failure
        details: String,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<R: Into<Cow<'static, str>>>(name: &'static str, reason: R) -> Self {
        Error::Parameter {
            name,
            reason: reason.into(),
        }
    }

    /// Shorthand to create a DomainParameters error
    pub fn domain<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        Error::DomainParameters {
            reason: reason.into(),
        }
    }
}

/// Result type for kernel operations
pub type Result<T> = core::result::Result<T, Error>;

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::IncompatibleField => CoreError::Arithmetic {
                context: "field",
                message: "elements belong to different fields".to_string(),
            },
            Error::DivisionByZero { context } => CoreError::Arithmetic {
                context,
                message: "division by zero".to_string(),
            },
            Error::DomainParameters { reason } => CoreError::DomainParameters {
                context: "curve construction",
                message: reason.into_owned(),
            },
            Error::IncompleteDomain { missing } => CoreError::DomainParameters {
                context: "curve",
                message: format!("curve has no {missing}"),
            },
            Error::PointNotOnCurve => CoreError::InvalidKey {
                context: "point",
                message: "point is not on the curve".to_string(),
            },
            Error::IncompatibleCurve => CoreError::InvalidParameter {
                context: "point",
                message: "points belong to different curves".to_string(),
            },
            Error::UnsupportedFormat { tag } => CoreError::SerializationError {
                context: "point",
                message: format!("unsupported encoding tag 0x{tag:02x}"),
            },
            Error::Authentication { algorithm } => CoreError::AuthenticationFailed {
                context: algorithm,
                message: "authentication failed".to_string(),
            },
            Error::Processing { operation, details } => CoreError::Other {
                context: operation,
                message: details.to_string(),
            },
            Error::RandomGeneration { details } => CoreError::RandomGenerationError {
                context: "random source",
                message: details,
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
