//! Walk configuration validation.

use crate::schema::WalkConfig;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Step table must have at least 2 entries, got {len}")]
    TooFewSteps { len: usize },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: &str, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn require_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(invalid(field, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(invalid(field, value, "must be positive"));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(field, value, "must be finite and non-negative"));
    }
    Ok(())
}

pub fn validate_config(config: &WalkConfig) -> Result<(), ValidationError> {
    if config.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: config.version,
        });
    }

    require_positive("pendulum.height_m", config.pendulum.height_m)?;
    require_positive("pendulum.gravity_mps2", config.pendulum.gravity_mps2)?;
    require_positive("timing.timestep_s", config.timing.timestep_s)?;
    require_positive("timing.support_duration_s", config.timing.support_duration_s)?;
    if config.timing.timestep_s > config.timing.support_duration_s {
        return Err(invalid(
            "timing.timestep_s",
            config.timing.timestep_s,
            "must not exceed the support duration",
        ));
    }

    require_non_negative("gains.a", config.gains.a)?;
    require_non_negative("gains.b", config.gains.b)?;
    if config.gains.a == 0.0 && config.gains.b == 0.0 {
        return Err(invalid("gains.a", 0.0, "gains a and b must not both be zero"));
    }

    if config.steps.len() < 2 {
        return Err(ValidationError::TooFewSteps {
            len: config.steps.len(),
        });
    }
    for (i, step) in config.steps.iter().enumerate() {
        for (axis, v) in ["dx", "dy"].iter().zip(step) {
            if !v.is_finite() {
                return Err(invalid(&format!("steps[{i}].{axis}"), *v, "must be finite"));
            }
        }
    }

    if config.run.record_every == 0 {
        return Err(invalid("run.record_every", 0.0, "must be at least 1"));
    }

    Ok(())
}
