//! Error types for the lw-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and provides a unified error interface for the CLI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read walk file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: lw_project::ProjectError,
    },

    #[error("Configuration validation failed: {0}")]
    Validation(String),

    #[error("Pendulum model error: {0}")]
    Simulation(String),

    #[error("Controller error: {0}")]
    Control(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for lw-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<lw_project::ProjectError> for AppError {
    fn from(err: lw_project::ProjectError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<lw_project::ValidationError> for AppError {
    fn from(err: lw_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<lw_sim::SimError> for AppError {
    fn from(err: lw_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}

impl From<lw_controls::ControlError> for AppError {
    fn from(err: lw_controls::ControlError) -> Self {
        AppError::Control(err.to_string())
    }
}
