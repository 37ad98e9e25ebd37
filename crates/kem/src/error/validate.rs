//! Validation utilities for key agreement

use super::{Error, Result};

/// Validate a key
pub fn key(condition: bool, key_type: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidKey { key_type, reason });
    }
    Ok(())
}

/// Validate an agreement result
pub fn agreement(condition: bool, details: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Agreement { details });
    }
    Ok(())
}
