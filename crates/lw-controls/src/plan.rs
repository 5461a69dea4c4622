//! Closed-form support-phase constants for the capture-point law.
//!
//! Over one support phase of length `T` with the pivot held at `p`, the LIPM
//! solution is
//!
//! ```text
//! x(T)  = (x0 - p) * C + Tc * v0 * S + p
//! v(T)  = (x0 - p) * S / Tc + v0 * C
//! ```
//!
//! with `Tc = sqrt(h/g)`, `C = cosh(T/Tc)`, `S = sinh(T/Tc)`. The pivot target
//! minimizes `a * |x(T) - xd|^2 + b * |v(T) - xd_dot|^2`, which gives the
//! normalizer `D = a (C-1)^2 + b (S/Tc)^2`.

use lw_core::{Vec2, ensure_finite, ensure_non_negative, vec2};
use lw_sim::PendulumParameters;
use serde::{Deserialize, Serialize};

use crate::error::{ControlError, ControlResult};
use crate::sampled::SupportClock;

/// Weights on end-of-step position error (`a`) and velocity error (`b`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaptureGains {
    pub a: f64,
    pub b: f64,
}

impl Default for CaptureGains {
    fn default() -> Self {
        Self { a: 10.0, b: 1.0 }
    }
}

/// Constants of one support phase. Pure function of fixed parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPlan {
    time_constant: f64,
    cosh: f64,
    sinh: f64,
    gains: CaptureGains,
    d: f64,
    forward_velocity_ratio: f64,
    lateral_velocity_ratio: f64,
    position_gain: f64,
    velocity_gain: f64,
}

impl StepPlan {
    pub fn new(
        clock: &SupportClock,
        params: &PendulumParameters,
        gains: CaptureGains,
    ) -> ControlResult<Self> {
        Self::compute(clock, params, gains).inspect_err(|e| {
            tracing::warn!(
                a = gains.a,
                b = gains.b,
                support_duration = clock.support_duration(),
                time_constant = params.time_constant(),
                error = %e,
                "rejecting step plan"
            );
        })
    }

    fn compute(
        clock: &SupportClock,
        params: &PendulumParameters,
        gains: CaptureGains,
    ) -> ControlResult<Self> {
        let a = ensure_non_negative(gains.a, "gain a")?;
        let b = ensure_non_negative(gains.b, "gain b")?;

        let time_constant = params.time_constant();
        let phase = clock.support_duration() / time_constant;
        let cosh = ensure_finite(phase.cosh(), "cosh(T/Tc)")?;
        let sinh = ensure_finite(phase.sinh(), "sinh(T/Tc)")?;
        if sinh <= 0.0 {
            return Err(ControlError::InvalidArg {
                what: "support duration too short for pendulum time constant",
            });
        }

        let d = ensure_finite(
            a * (cosh - 1.0).powi(2) + b * (sinh / time_constant).powi(2),
            "gain normalizer d",
        )?;
        if d <= 0.0 {
            return Err(ControlError::InvalidArg {
                what: "capture gains must not both be zero",
            });
        }

        Ok(Self {
            time_constant,
            cosh,
            sinh,
            gains,
            d,
            forward_velocity_ratio: ensure_finite(
                (cosh + 1.0) / (time_constant * sinh),
                "forward velocity ratio",
            )?,
            lateral_velocity_ratio: ensure_finite(
                (cosh - 1.0) / (time_constant * sinh),
                "lateral velocity ratio",
            )?,
            position_gain: ensure_finite(-a * (cosh - 1.0) / d, "position gain")?,
            velocity_gain: ensure_finite(b * sinh / (time_constant * d), "velocity gain")?,
        })
    }

    pub fn time_constant(&self) -> f64 {
        self.time_constant
    }

    pub fn cosh(&self) -> f64 {
        self.cosh
    }

    pub fn sinh(&self) -> f64 {
        self.sinh
    }

    pub fn gains(&self) -> CaptureGains {
        self.gains
    }

    pub fn d(&self) -> f64 {
        self.d
    }

    /// `((C+1)/(Tc S), (C-1)/(Tc S))`: end-of-step velocity per unit offset,
    /// forward and lateral.
    pub fn capture_velocity_ratios(&self) -> Vec2 {
        vec2(self.forward_velocity_ratio, self.lateral_velocity_ratio)
    }

    /// Target end-of-step velocity for an end-of-step offset `x_bar`.
    ///
    /// Forward uses `(C+1)`, giving symmetric walking-through motion; lateral
    /// uses `(C-1)`, giving sway that turns back at each step.
    pub fn terminal_velocity(&self, x_bar: &Vec2) -> Vec2 {
        vec2(
            x_bar.x * self.forward_velocity_ratio,
            x_bar.y * self.lateral_velocity_ratio,
        )
    }

    /// Pivot target driving `(position, velocity)` to `(xd, xd_dot)` at the
    /// end of the support phase.
    pub fn pivot_target(&self, xd: &Vec2, xd_dot: &Vec2, position: &Vec2, velocity: &Vec2) -> Vec2 {
        let c = self.cosh;
        let s = self.sinh;
        let tc = self.time_constant;
        let position_error = xd - position * c - velocity * (tc * s);
        let velocity_error = xd_dot - position * (s / tc) - velocity * c;
        position_error * self.position_gain - velocity_error * self.velocity_gain
    }

    /// State reached after one support phase with the pivot held at `pivot`.
    pub fn end_of_phase(&self, pivot: &Vec2, position: &Vec2, velocity: &Vec2) -> (Vec2, Vec2) {
        let c = self.cosh;
        let s = self.sinh;
        let tc = self.time_constant;
        let offset = position - pivot;
        (
            offset * c + velocity * (tc * s) + pivot,
            offset * (s / tc) + velocity * c,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_plan() -> StepPlan {
        let params = PendulumParameters::with_standard_gravity(0.8, 0.001).unwrap();
        let clock = SupportClock::new(0.8).unwrap();
        StepPlan::new(&clock, &params, CaptureGains::default()).unwrap()
    }

    #[test]
    fn demo_constants() {
        let plan = demo_plan();
        assert!((plan.time_constant() - 0.285_617_396).abs() < 1e-8);
        assert!((plan.cosh() - 8.260_513_143).abs() < 1e-8);
        assert!((plan.sinh() - 8.199_760_813).abs() < 1e-8);
        assert!((plan.d() - 1351.351_359).abs() < 1e-5);

        let ratios = plan.capture_velocity_ratios();
        let tc_sh = plan.time_constant() * plan.sinh();
        assert!((ratios.x - (plan.cosh() + 1.0) / tc_sh).abs() < 1e-12);
        assert!((ratios.y - (plan.cosh() - 1.0) / tc_sh).abs() < 1e-12);
        assert!(ratios.x > ratios.y);
    }

    #[test]
    fn pivot_target_from_rest_is_finite() {
        let plan = demo_plan();
        let x_bar = vec2(0.0, 0.1);
        let xd_dot = plan.terminal_velocity(&x_bar);
        let p = plan.pivot_target(&x_bar, &xd_dot, &Vec2::zeros(), &Vec2::zeros());
        assert!(p.x.abs() < 1e-15);
        assert!((p.y + 0.011_958_900_9).abs() < 1e-9);
    }

    #[test]
    fn pivot_target_is_a_weighted_least_squares_optimum() {
        let plan = demo_plan();
        let xd = vec2(0.15, 0.1);
        let xd_dot = plan.terminal_velocity(&vec2(0.15, -0.1));
        let x = vec2(0.02, 0.09);
        let v = vec2(0.1, 0.05);
        let p = plan.pivot_target(&xd, &xd_dot, &x, &v);

        let cost = |pivot: &Vec2| {
            let (xe, ve) = plan.end_of_phase(pivot, &x, &v);
            let CaptureGains { a, b } = plan.gains();
            a * (xe - xd).norm_squared() + b * (ve - xd_dot).norm_squared()
        };
        let best = cost(&p);
        for delta in [vec2(1e-4, 0.0), vec2(-1e-4, 0.0), vec2(0.0, 1e-4), vec2(0.0, -1e-4)] {
            assert!(cost(&(p + delta)) > best);
        }
    }

    #[test]
    fn rejects_zero_gains_and_negative_gains() {
        let params = PendulumParameters::with_standard_gravity(0.8, 0.001).unwrap();
        let clock = SupportClock::new(0.8).unwrap();
        assert!(StepPlan::new(&clock, &params, CaptureGains { a: 0.0, b: 0.0 }).is_err());
        assert!(StepPlan::new(&clock, &params, CaptureGains { a: -1.0, b: 1.0 }).is_err());
        assert!(StepPlan::new(&clock, &params, CaptureGains { a: 0.0, b: 1.0 }).is_ok());
    }

    #[test]
    fn rejects_overflowing_support_duration() {
        let params = PendulumParameters::with_standard_gravity(0.8, 0.001).unwrap();
        let clock = SupportClock::new(1e3).unwrap();
        assert!(matches!(
            StepPlan::new(&clock, &params, CaptureGains::default()),
            Err(ControlError::NonFinite { .. })
        ));
    }
}
