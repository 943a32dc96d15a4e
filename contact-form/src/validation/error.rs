use thiserror::Error;

use crate::field::Field;

/// Why a field value was rejected. The Display text is what the form shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{field} must have at least {min} characters.")]
    TooShort { field: Field, min: usize },

    #[error("{field} is a required field.")]
    Required { field: Field },

    #[error("{field} must be a valid email address.")]
    InvalidEmail { field: Field },
}

/// Broad category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Length,
    Required,
    Format,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            Self::TooShort { field, .. }
            | Self::Required { field }
            | Self::InvalidEmail { field } => *field,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TooShort { .. } => ErrorKind::Length,
            Self::Required { .. } => ErrorKind::Required,
            Self::InvalidEmail { .. } => ErrorKind::Format,
        }
    }
}
