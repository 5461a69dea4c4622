//! Error types for controller configuration.

use thiserror::Error;

/// Result type for control operations.
pub type ControlResult<T> = Result<T, ControlError>;

/// Configuration errors. All of them are raised at construction time; a
/// constructed controller never fails.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlError {
    /// Invalid argument provided to a constructor.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Step table needs an initial stance plus at least one step.
    #[error("Step table must have at least 2 entries, got {len}")]
    StepTableTooShort { len: usize },

    /// A precomputed quantity is NaN or infinite.
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

impl From<lw_core::CoreError> for ControlError {
    fn from(e: lw_core::CoreError) -> Self {
        match e {
            lw_core::CoreError::NonFinite { what, value } => ControlError::NonFinite { what, value },
            lw_core::CoreError::NonPositive { what, .. } | lw_core::CoreError::InvalidArg { what } => {
                ControlError::InvalidArg { what }
            }
        }
    }
}
