//! Order error types.

use thiserror::Error;

use crate::domain::validation::FieldError;

/// Order error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum OrderError {
    #[error("order validation failed")]
    Validation { errors: Vec<FieldError> },

    #[error("order {id} already exists")]
    DuplicateId { id: String },

    #[error("order store error: {message}")]
    StoreFailed { message: String },
}

impl OrderError {
    /// Creates a validation error.
    #[must_use]
    pub const fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation { errors }
    }

    /// Creates a duplicate id error.
    #[must_use]
    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    /// Creates a store failure error.
    #[must_use]
    pub fn store_failed(message: impl Into<String>) -> Self {
        Self::StoreFailed {
            message: message.into(),
        }
    }

    /// Returns the per-field failures for a validation error.
    #[must_use]
    pub fn field_errors(&self) -> Option<&[FieldError]> {
        match self {
            Self::Validation { errors } => Some(errors),
            _ => None,
        }
    }

    /// Returns whether the error should keep the form open for correction.
    #[must_use]
    pub const fn is_user_correctable(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::DuplicateId { .. })
    }
}
