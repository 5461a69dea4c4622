//! Error types for pendulum simulation.

use thiserror::Error;

/// Errors encountered while configuring the pendulum model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-physical condition: {what}")]
    NonPhysical { what: &'static str },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<lw_core::CoreError> for SimError {
    fn from(e: lw_core::CoreError) -> Self {
        match e {
            lw_core::CoreError::NonPositive { what, .. } => SimError::NonPhysical { what },
            lw_core::CoreError::NonFinite { what, .. } | lw_core::CoreError::InvalidArg { what } => {
                SimError::InvalidArg { what }
            }
        }
    }
}
