/// Core error types for the Vision API
use crate::types::{FieldError, UserId};
use thiserror::Error;

/// Result type alias using `VisionError`
pub type Result<T> = std::result::Result<T, VisionError>;

/// Core error type for the Vision API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VisionError {
    /// A required argument was not provided
    #[error("Value cannot be null. (Parameter '{0}')")]
    InvalidArgument(String),

    /// A field failed business validation
    #[error("{message}")]
    Validation {
        /// Name of the offending field
        field: String,
        /// Human readable reason
        message: String,
    },

    /// No user with the given ID
    #[error("User with ID {0} not found")]
    NotFound(UserId),

    /// Anything else
    #[error("{0}")]
    Internal(String),
}

impl VisionError {
    /// Build a validation error for a single field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The (field, message) pair carried by a validation error
    pub fn field_error(&self) -> Option<FieldError> {
        match self {
            Self::Validation { field, message } => Some(FieldError::new(field, message)),
            _ => None,
        }
    }
}

impl From<FieldError> for VisionError {
    fn from(err: FieldError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}
