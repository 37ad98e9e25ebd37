//! Registry errors

use ecclab_api::Error as CoreError;

/// Error raised by [`crate::CurveRegistry`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// One or more names of a new entry are already registered
    #[error("Curve(s) named {names} already registered")]
    DuplicateName {
        /// Comma separated list of the clashing names, sorted
        names: String,
    },

    /// No curve with that name or alias
    #[error("Curve named {name} is not known")]
    UnknownCurve {
        /// Name that was looked up
        name: String,
    },

    /// No curve with that object identifier
    #[error("No curve with OID {oid}")]
    UnknownOid {
        /// OID that was looked up
        oid: String,
    },
}

/// Result type for registry operations
pub type Result<T> = core::result::Result<T, RegistryError>;

impl From<RegistryError> for CoreError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::UnknownCurve { name } => CoreError::UnknownCurve { name },
            RegistryError::UnknownOid { oid } => CoreError::UnknownCurve { name: oid },
            e @ RegistryError::DuplicateName { .. } => CoreError::InvalidParameter {
                context: "curve registry",
                message: e.to_string(),
            },
        }
    }
}
