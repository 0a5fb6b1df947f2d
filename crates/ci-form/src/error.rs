//! Error types for form validation and calculation.

use ci_core::Field;
use ci_solver::SolveError;
use thiserror::Error;

/// Result type for form operations.
pub type FormResult<T> = Result<T, FormError>;

/// A supplied field failed its range or type check.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} is required.")]
    Missing { field: Field },

    #[error("{field} must be a number (got '{text}').")]
    NotANumber { field: Field, text: String },

    #[error("{field} must be a positive number.")]
    NotPositive { field: Field },

    #[error("{field} must be a non-negative number.")]
    Negative { field: Field },

    #[error("{field} must be a positive whole number.")]
    NotPositiveInteger { field: Field },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Missing { field }
            | ValidationError::NotANumber { field, .. }
            | ValidationError::NotPositive { field }
            | ValidationError::Negative { field }
            | ValidationError::NotPositiveInteger { field } => *field,
        }
    }
}

/// Anything that stops a calculation from producing a solution.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Solve(#[from] SolveError),
}
