//! Support-phase timing.
//!
//! The controller is sampled once per support phase. Boundary `k` is at
//! `k * support_duration`; it is computed from the index rather than by
//! accumulating durations, so boundary times do not drift.

use lw_core::ensure_finite;

use crate::error::{ControlError, ControlResult};

/// Shortest accepted support phase in seconds. Below this, `sinh` of the
/// normalized duration underflows toward zero and the gains blow up.
pub const MIN_SUPPORT_DURATION: f64 = 1e-6;

/// Clock for support-phase boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupportClock {
    support_duration: f64,
}

impl SupportClock {
    /// Create a new clock.
    ///
    /// # Arguments
    ///
    /// * `support_duration` - Length of one support phase in seconds
    pub fn new(support_duration: f64) -> ControlResult<Self> {
        let support_duration = ensure_finite(support_duration, "support duration")?;
        if support_duration <= MIN_SUPPORT_DURATION {
            return Err(ControlError::InvalidArg {
                what: "support duration must be greater than 1e-6 s",
            });
        }
        Ok(Self { support_duration })
    }

    pub fn support_duration(&self) -> f64 {
        self.support_duration
    }

    /// Time at which step `step_index` begins.
    pub fn boundary_time(&self, step_index: usize) -> f64 {
        step_index as f64 * self.support_duration
    }

    /// Check if boundary `step_index` has been reached at `elapsed`.
    pub fn boundary_reached(&self, step_index: usize, elapsed: f64) -> bool {
        elapsed >= self.boundary_time(step_index)
    }

    /// Time remaining until boundary `step_index`.
    pub fn time_until_boundary(&self, step_index: usize, elapsed: f64) -> f64 {
        (self.boundary_time(step_index) - elapsed).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_multiples_of_duration() {
        let clock = SupportClock::new(0.5).unwrap();
        assert_eq!(clock.boundary_time(0), 0.0);
        assert_eq!(clock.boundary_time(3), 1.5);

        assert!(clock.boundary_reached(0, 0.0));
        assert!(!clock.boundary_reached(1, 0.49));
        assert!(clock.boundary_reached(1, 0.5));
    }

    #[test]
    fn time_until_boundary_saturates_at_zero() {
        let clock = SupportClock::new(0.5).unwrap();
        assert!((clock.time_until_boundary(1, 0.2) - 0.3).abs() < 1e-12);
        assert_eq!(clock.time_until_boundary(1, 0.7), 0.0);
    }

    #[test]
    fn rejects_degenerate_durations() {
        assert!(SupportClock::new(0.0).is_err());
        assert!(SupportClock::new(-0.8).is_err());
        assert!(SupportClock::new(1e-9).is_err());
        assert!(matches!(
            SupportClock::new(f64::NAN),
            Err(ControlError::NonFinite { .. })
        ));
    }
}
