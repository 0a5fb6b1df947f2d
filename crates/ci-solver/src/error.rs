//! Error types for solver operations.

use ci_core::Field;
use thiserror::Error;

/// Result type for solver operations.
pub type SolveResult<T> = Result<T, SolveError>;

/// Errors raised by the solvers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolveError {
    /// A required value is missing or outside its valid range.
    #[error("Invalid input: {field} {requirement}")]
    InvalidInput {
        field: Field,
        requirement: &'static str,
    },

    /// Values are individually valid but jointly inconsistent.
    #[error("Invalid combination: {what}")]
    DomainViolation { what: &'static str },

    /// The closed-form expression is undefined or not finite.
    #[error("Numeric domain error: {what}")]
    NumericDomain { what: &'static str },

    /// No numeric solver exists for the requested field.
    #[error("Unsupported operation: {what}")]
    Unsupported { what: String },
}

impl SolveError {
    pub(crate) fn invalid(field: Field, requirement: &'static str) -> Self {
        SolveError::InvalidInput { field, requirement }
    }
}
