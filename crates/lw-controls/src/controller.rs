//! The footstep-triggered capture-point controller.
//!
//! A sampled feedback law: the pivot target is recomputed once per support
//! phase, at the boundary, from the pendulum state at that instant, and held
//! until the next boundary. Step indices run `0..=N-1`; index `N-1` is
//! terminal and holds the last pivot target indefinitely.

use lw_core::{Vec2, vec2};
use lw_sim::{PendulumParameters, PendulumState};

use crate::error::ControlResult;
use crate::plan::{CaptureGains, StepPlan};
use crate::sampled::SupportClock;
use crate::step_table::StepTable;

/// Mutable controller bookkeeping, owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControllerState {
    /// Index of the next step to trigger; terminal at `N-1`.
    pub step_index: usize,
    /// World position of the current stance foot.
    pub support_position: Vec2,
    /// Current pivot target (`p_star`).
    pub pivot_target: Vec2,
}

/// Output of one controller tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepCommand {
    pub pivot_target: Vec2,
    pub support_position: Vec2,
    /// A step boundary was processed during this tick.
    pub stepped: bool,
}

/// Capture-point step controller configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct StepController {
    table: StepTable,
    clock: SupportClock,
    plan: StepPlan,
}

impl StepController {
    /// Create a new controller.
    ///
    /// # Arguments
    ///
    /// * `table` - Planned footstep displacements
    /// * `support_duration` - Length of one support phase (seconds)
    /// * `params` - Pendulum parameters (height and gravity are used)
    /// * `gains` - Capture-law weights
    pub fn new(
        table: StepTable,
        support_duration: f64,
        params: &PendulumParameters,
        gains: CaptureGains,
    ) -> ControlResult<Self> {
        let clock = SupportClock::new(support_duration).inspect_err(|e| {
            tracing::warn!(support_duration, error = %e, "rejecting support duration");
        })?;
        let plan = StepPlan::new(&clock, params, gains)?;
        Ok(Self { table, clock, plan })
    }

    pub fn table(&self) -> &StepTable {
        &self.table
    }

    pub fn clock(&self) -> &SupportClock {
        &self.clock
    }

    pub fn plan(&self) -> &StepPlan {
        &self.plan
    }

    pub fn terminal_index(&self) -> usize {
        self.table.terminal_index()
    }

    /// Controller state at simulation start: index 0, foot and pivot at origin.
    pub fn initial_state(&self) -> ControllerState {
        ControllerState::default()
    }

    pub fn is_terminal(&self, state: &ControllerState) -> bool {
        state.step_index >= self.table.terminal_index()
    }

    /// Run the controller for one integrator tick.
    ///
    /// Call before advancing the pendulum; the returned pivot target is the
    /// one to integrate with during this tick. At most one step is processed
    /// per call, even if `elapsed` has jumped over several boundaries.
    pub fn tick(
        &self,
        state: &ControllerState,
        elapsed: f64,
        pendulum: &PendulumState,
    ) -> (ControllerState, StepCommand) {
        let k = state.step_index;
        if self.is_terminal(state) || !self.clock.boundary_reached(k, elapsed) {
            return (
                *state,
                StepCommand {
                    pivot_target: state.pivot_target,
                    support_position: state.support_position,
                    stepped: false,
                },
            );
        }

        // Place the foot for step k, then aim the CoM halfway toward the
        // foot of step k+1.
        let support_position = state.support_position + self.table.signed_displacement(k);
        let next = self.table.signed_displacement(k + 1);
        let x_bar = next * 0.5;

        let xd = support_position + x_bar;
        let xd_dot = self.plan.terminal_velocity(&x_bar);
        let pivot_target =
            self.plan
                .pivot_target(&xd, &xd_dot, &pendulum.position, &pendulum.velocity);

        let new_state = ControllerState {
            step_index: k + 1,
            support_position,
            pivot_target,
        };
        (
            new_state,
            StepCommand {
                pivot_target,
                support_position,
                stepped: true,
            },
        )
    }

    /// Desired end-of-step CoM position for a processed step, for drawing.
    pub fn target_com(&self, state: &ControllerState) -> Option<Vec2> {
        if state.step_index == 0 || state.step_index > self.table.terminal_index() {
            return None;
        }
        let next = self.table.signed_displacement(state.step_index);
        Some(state.support_position + vec2(next.x * 0.5, next.y * 0.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ControlError;

    fn params() -> PendulumParameters {
        PendulumParameters::with_standard_gravity(0.8, 0.001).unwrap()
    }

    fn demo_controller() -> StepController {
        let table = StepTable::from_pairs(&[
            [0.0, 0.0],
            [0.0, 0.2],
            [0.3, 0.2],
            [0.3, 0.2],
            [0.3, 0.2],
            [0.0, 0.2],
            [0.0, 0.0],
        ])
        .unwrap();
        StepController::new(table, 0.8, &params(), CaptureGains::default()).unwrap()
    }

    #[test]
    fn first_tick_triggers_initial_step() {
        let ctrl = demo_controller();
        let state = ctrl.initial_state();
        let (next, cmd) = ctrl.tick(&state, 0.0, &PendulumState::default());

        assert!(cmd.stepped);
        assert_eq!(next.step_index, 1);
        // Entry 0 is (0, 0): the initial stance does not move.
        assert_eq!(cmd.support_position, Vec2::zeros());
        assert!(cmd.pivot_target.x.is_finite() && cmd.pivot_target.y.is_finite());
        // Aiming toward +y, so the pivot is pushed to -y.
        assert!(cmd.pivot_target.y < 0.0);
    }

    #[test]
    fn second_step_lands_on_positive_lateral_side() {
        let ctrl = demo_controller();
        let pendulum = PendulumState::default();
        let (s1, _) = ctrl.tick(&ctrl.initial_state(), 0.0, &pendulum);
        let (s2, cmd) = ctrl.tick(&s1, 0.8, &pendulum);
        assert!(cmd.stepped);
        assert_eq!(s2.step_index, 2);
        assert_eq!(s2.support_position, vec2(0.0, 0.2));

        let (s3, _) = ctrl.tick(&s2, 1.6, &pendulum);
        assert!((s3.support_position - vec2(0.3, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn holds_between_boundaries() {
        let ctrl = demo_controller();
        let pendulum = PendulumState::new(vec2(0.01, 0.02), vec2(0.1, 0.1));
        let (s1, first) = ctrl.tick(&ctrl.initial_state(), 0.0, &pendulum);

        for t in [0.001, 0.4, 0.799] {
            let (s, cmd) = ctrl.tick(&s1, t, &pendulum);
            assert!(!cmd.stepped);
            assert_eq!(s, s1);
            assert_eq!(cmd.pivot_target, first.pivot_target);
            assert_eq!(cmd.support_position, first.support_position);
        }
    }

    #[test]
    fn at_most_one_step_per_tick() {
        let ctrl = demo_controller();
        let (s1, _) = ctrl.tick(&ctrl.initial_state(), 100.0, &PendulumState::default());
        assert_eq!(s1.step_index, 1);
        let (s2, _) = ctrl.tick(&s1, 100.0, &PendulumState::default());
        assert_eq!(s2.step_index, 2);
    }

    #[test]
    fn last_step_targets_final_foot_at_rest() {
        let ctrl = demo_controller();
        let mut state = ctrl.initial_state();
        let pendulum = PendulumState::default();
        for k in 0..6 {
            state = ctrl.tick(&state, k as f64 * 0.8, &pendulum).0;
        }
        assert!(ctrl.is_terminal(&state));
        assert_eq!(state.step_index, 6);
        // Table entry 6 is (0, 0): the final target is the last foothold.
        let target = ctrl.target_com(&state).unwrap();
        assert!((target - state.support_position).norm() < 1e-12);
    }

    #[test]
    fn terminal_state_holds_forever() {
        let ctrl = demo_controller();
        let mut state = ctrl.initial_state();
        let pendulum = PendulumState::default();
        for k in 0..6 {
            state = ctrl.tick(&state, k as f64 * 0.8, &pendulum).0;
        }
        let held = state;
        for t in [4.0, 10.0, 1e6] {
            let moved = PendulumState::new(vec2(t, -t), vec2(1.0, 1.0));
            let (s, cmd) = ctrl.tick(&state, t, &moved);
            assert!(!cmd.stepped);
            assert_eq!(s, held);
            state = s;
        }
    }

    #[test]
    fn two_entry_table_takes_a_single_step() {
        let table = StepTable::from_pairs(&[[0.1, 0.05], [0.2, 0.1]]).unwrap();
        let ctrl = StepController::new(table, 0.5, &params(), CaptureGains::default()).unwrap();
        let (s1, cmd) = ctrl.tick(&ctrl.initial_state(), 0.0, &PendulumState::default());
        assert!(cmd.stepped);
        assert_eq!(s1.support_position, vec2(0.1, -0.05));
        assert!(ctrl.is_terminal(&s1));
        let target = ctrl.target_com(&s1).unwrap();
        assert!((target - vec2(0.2, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn rejects_bad_support_duration() {
        let table = StepTable::from_pairs(&[[0.0, 0.0], [0.1, 0.1]]).unwrap();
        for duration in [0.0, -1.0, 1e-7, f64::NAN] {
            assert!(
                StepController::new(table.clone(), duration, &params(), CaptureGains::default())
                    .is_err()
            );
        }
        assert!(matches!(
            StepController::new(table, 0.0, &params(), CaptureGains::default()),
            Err(ControlError::InvalidArg { .. })
        ));
    }
}
