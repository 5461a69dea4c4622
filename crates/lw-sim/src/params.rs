//! Physical and numerical parameters of the pendulum.

use lw_core::{Accel, Length, Real, Time, ensure_positive, in_m, in_mps2, in_s};

use crate::error::SimResult;

/// Immutable pendulum parameters.
///
/// Fields are private so that a `PendulumParameters` value is always valid:
/// every constructor rejects non-positive or non-finite inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendulumParameters {
    pendulum_height: Real,
    timestep: Real,
    gravity: Real,
}

impl PendulumParameters {
    /// Create parameters from typed SI quantities.
    pub fn new(pendulum_height: Length, timestep: Time, gravity: Accel) -> SimResult<Self> {
        Self::from_si(in_m(pendulum_height), in_s(timestep), in_mps2(gravity))
    }

    /// Create parameters from raw SI values (m, s, m/s^2).
    pub fn from_si(pendulum_height_m: Real, timestep_s: Real, gravity_mps2: Real) -> SimResult<Self> {
        Ok(Self {
            pendulum_height: ensure_positive(pendulum_height_m, "pendulum height")?,
            timestep: ensure_positive(timestep_s, "timestep")?,
            gravity: ensure_positive(gravity_mps2, "gravity")?,
        })
    }

    /// Create parameters under standard gravity.
    pub fn with_standard_gravity(pendulum_height_m: Real, timestep_s: Real) -> SimResult<Self> {
        Self::from_si(
            pendulum_height_m,
            timestep_s,
            lw_core::constants::G0_MPS2,
        )
    }

    pub fn pendulum_height(&self) -> Real {
        self.pendulum_height
    }

    pub fn timestep(&self) -> Real {
        self.timestep
    }

    pub fn gravity(&self) -> Real {
        self.gravity
    }

    /// `g / h`, the squared natural frequency of the pendulum.
    pub fn omega_squared(&self) -> Real {
        self.gravity / self.pendulum_height
    }

    /// `sqrt(h / g)`.
    pub fn time_constant(&self) -> Real {
        (self.pendulum_height / self.gravity).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;
    use lw_core::{constants, m, s};

    #[test]
    fn typed_and_raw_constructors_agree() {
        let typed = PendulumParameters::new(m(0.8), s(0.001), constants::g0()).unwrap();
        let raw = PendulumParameters::with_standard_gravity(0.8, 0.001).unwrap();
        assert_eq!(typed, raw);
        assert_eq!(raw.gravity(), constants::G0_MPS2);
    }

    #[test]
    fn derived_constants() {
        let p = PendulumParameters::from_si(1.0, 0.01, 4.0).unwrap();
        assert_eq!(p.omega_squared(), 4.0);
        assert_eq!(p.time_constant(), 0.5);
    }

    #[test]
    fn rejects_non_positive_inputs() {
        assert_eq!(
            PendulumParameters::from_si(0.0, 0.001, 9.8),
            Err(SimError::NonPhysical {
                what: "pendulum height"
            })
        );
        assert_eq!(
            PendulumParameters::from_si(-0.8, 0.001, 9.8),
            Err(SimError::NonPhysical {
                what: "pendulum height"
            })
        );
        assert_eq!(
            PendulumParameters::from_si(0.8, 0.0, 9.8),
            Err(SimError::NonPhysical { what: "timestep" })
        );
        assert_eq!(
            PendulumParameters::from_si(0.8, 0.001, -9.8),
            Err(SimError::NonPhysical { what: "gravity" })
        );
        assert_eq!(
            PendulumParameters::from_si(0.8, 0.001, f64::NAN),
            Err(SimError::InvalidArg { what: "gravity" })
        );
    }

    #[test]
    fn rejection_message_names_the_parameter() {
        let err = PendulumParameters::from_si(0.0, 0.001, 9.8).unwrap_err();
        assert_eq!(err.to_string(), "Non-physical condition: pendulum height");
    }
}
