//! The tick loop: controller first, then the pendulum.

use lw_controls::{CaptureGains, ControllerState, StepController, StepTable};
use lw_core::{Vec2, m, mps2, s};
use lw_project::{IntegratorDef, WalkConfig};
use lw_sim::{IntegratorType, PendulumParameters, PendulumState};

use crate::error::AppResult;

/// Everything the driver observes after one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSample {
    pub tick: usize,
    /// Elapsed time seen by the controller this tick.
    pub time_s: f64,
    /// Controller step index after this tick.
    pub step_index: usize,
    pub stepped: bool,
    /// Pendulum state after this tick's integration.
    pub state: PendulumState,
    pub pivot_target: Vec2,
    pub support_position: Vec2,
}

/// Owns the pendulum and controller state of one walk.
#[derive(Debug, Clone)]
pub struct WalkRuntime {
    params: PendulumParameters,
    controller: StepController,
    integrator: IntegratorType,
    pendulum: PendulumState,
    control: ControllerState,
    tick: usize,
}

impl WalkRuntime {
    pub fn new(
        params: PendulumParameters,
        controller: StepController,
        integrator: IntegratorType,
    ) -> Self {
        let control = controller.initial_state();
        Self {
            params,
            controller,
            integrator,
            pendulum: PendulumState::default(),
            control,
            tick: 0,
        }
    }

    /// Build from a walk configuration. All configuration errors surface here.
    pub fn from_config(config: &WalkConfig) -> AppResult<Self> {
        lw_project::validate_config(config)?;
        let params = PendulumParameters::new(
            m(config.pendulum.height_m),
            s(config.timing.timestep_s),
            mps2(config.pendulum.gravity_mps2),
        )?;
        let table = StepTable::from_pairs(&config.steps)?;
        let gains = CaptureGains {
            a: config.gains.a,
            b: config.gains.b,
        };
        let controller =
            StepController::new(table, config.timing.support_duration_s, &params, gains)?;
        let integrator = match config.run.integrator {
            IntegratorDef::Euler => IntegratorType::ForwardEuler,
            IntegratorDef::Rk4 => IntegratorType::RK4,
        };
        Ok(Self::new(params, controller, integrator))
    }

    pub fn with_integrator(mut self, integrator: IntegratorType) -> Self {
        self.integrator = integrator;
        self
    }

    pub fn params(&self) -> &PendulumParameters {
        &self.params
    }

    pub fn controller(&self) -> &StepController {
        &self.controller
    }

    pub fn integrator(&self) -> IntegratorType {
        self.integrator
    }

    pub fn pendulum(&self) -> &PendulumState {
        &self.pendulum
    }

    pub fn control(&self) -> &ControllerState {
        &self.control
    }

    /// Number of ticks performed so far.
    pub fn ticks(&self) -> usize {
        self.tick
    }

    pub fn is_terminal(&self) -> bool {
        self.controller.is_terminal(&self.control)
    }

    /// Perform one tick.
    pub fn tick(&mut self) -> TickSample {
        let tick = self.tick;
        let time_s = tick as f64 * self.params.timestep();

        let (control, cmd) = self.controller.tick(&self.control, time_s, &self.pendulum);
        self.control = control;
        if cmd.stepped {
            tracing::debug!(
                step = control.step_index,
                t = time_s,
                support_x = cmd.support_position.x,
                support_y = cmd.support_position.y,
                pivot_x = cmd.pivot_target.x,
                pivot_y = cmd.pivot_target.y,
                "step boundary"
            );
        }

        self.pendulum = self
            .integrator
            .advance(&self.pendulum, &cmd.pivot_target, &self.params);
        self.tick += 1;

        TickSample {
            tick,
            time_s,
            step_index: control.step_index,
            stepped: cmd.stepped,
            state: self.pendulum,
            pivot_target: cmd.pivot_target,
            support_position: cmd.support_position,
        }
    }
}
