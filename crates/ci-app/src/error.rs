//! Error types for the ci-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and provides a unified error interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Scenario error: {0}")]
    Project(String),

    #[error("Failed to read scenario file: {path}")]
    ScenarioFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Scenario validation failed: {0}")]
    Validation(String),

    #[error("Calculation not found: {0}")]
    CalculationNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Solver error: {0}")]
    Solver(String),

    #[error("Report error: {0}")]
    Report(String),
}

/// Result type for ci-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<ci_project::ProjectError> for AppError {
    fn from(err: ci_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<ci_project::ValidationError> for AppError {
    fn from(err: ci_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<ci_solver::SolveError> for AppError {
    fn from(err: ci_solver::SolveError) -> Self {
        AppError::Solver(err.to_string())
    }
}

impl From<ci_core::CoreError> for AppError {
    fn from(err: ci_core::CoreError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Report(err.to_string())
    }
}
