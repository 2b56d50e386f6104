//! Error types for the contacts API.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by the contact service and store.
///
/// The HTTP adapter maps these onto status codes: validation errors become
/// 400, missing records 404, id collisions 409, everything else 500.
#[derive(Error, Debug)]
pub enum ContactApiError {
    /// Input failed validation before reaching the store
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No record exists with the referenced id
    #[error("Contact with id {0} not found")]
    NotFound(String),

    /// A record with this id already exists
    #[error("Contact with id {0} already exists")]
    Conflict(String),

    /// Unclassified internal failure
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactApiError
pub type ContactResult<T> = Result<T, ContactApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContactApiError::NotFound("zzz".to_string());
        assert_eq!(err.to_string(), "Contact with id zzz not found");

        let err = ContactApiError::Conflict("1".to_string());
        assert_eq!(err.to_string(), "Contact with id 1 already exists");

        let err = ConfigError::MissingVar("BIND_ADDR".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: BIND_ADDR"
        );
    }

    #[test]
    fn test_validation_error_passes_through() {
        let err: ContactApiError = ValidationError::MissingField("email").into();
        assert_eq!(err.to_string(), "Missing required field: email");
    }
}
