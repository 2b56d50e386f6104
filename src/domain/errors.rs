//! Domain validation errors.

use std::fmt;

/// Errors that can occur while validating contact input.
///
/// Validation stops at the first failure, so a single variant always
/// describes exactly one problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent or empty. Carries the field name.
    MissingField(&'static str),

    /// The email address does not match the accepted syntax.
    InvalidEmail,

    /// The provided contact id is empty.
    EmptyId,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "Missing required field: {}", field),
            Self::InvalidEmail => write!(f, "Invalid email format"),
            Self::EmptyId => write!(f, "Contact ID cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_names_the_field() {
        let err = ValidationError::MissingField("first_name");
        assert_eq!(err.to_string(), "Missing required field: first_name");
    }

    #[test]
    fn test_invalid_email_message() {
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Invalid email format"
        );
    }
}
