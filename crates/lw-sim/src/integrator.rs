//! Fixed-step time integrators for the linear inverted pendulum.
//!
//! The dynamics are, per horizontal axis, `x'' = (g/h) * (x - p)` where `p` is
//! the pivot target held by the controller.

use lw_core::Vec2;

use crate::params::PendulumParameters;
use crate::state::PendulumState;

/// Trait for pendulum integrators.
pub trait Integrator {
    /// Advance state by one timestep toward/away from `pivot_target`.
    fn advance(
        &self,
        state: &PendulumState,
        pivot_target: &Vec2,
        params: &PendulumParameters,
    ) -> PendulumState;
}

/// Integrator selection for a walk run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntegratorType {
    /// Forward Euler (default, reproduces the reference trajectories).
    #[default]
    ForwardEuler,
    /// 4th-order Runge-Kutta (4 rhs evaluations per step).
    RK4,
}

impl IntegratorType {
    pub fn advance(
        self,
        state: &PendulumState,
        pivot_target: &Vec2,
        params: &PendulumParameters,
    ) -> PendulumState {
        match self {
            IntegratorType::ForwardEuler => ForwardEuler.advance(state, pivot_target, params),
            IntegratorType::RK4 => RK4.advance(state, pivot_target, params),
        }
    }
}

/// Forward Euler (explicit, 1st order).
///
/// Position is advanced with the velocity from *before* this step. Keep that
/// ordering: trajectories are expected to match it bit for bit.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn advance(
        &self,
        state: &PendulumState,
        pivot_target: &Vec2,
        params: &PendulumParameters,
    ) -> PendulumState {
        let dt = params.timestep();
        let acceleration = params.omega_squared() * (state.position - pivot_target);
        PendulumState {
            position: state.position + state.velocity * dt,
            velocity: state.velocity + acceleration * dt,
        }
    }
}

/// Classical RK4 (Runge-Kutta 4th order) integrator.
#[derive(Clone, Copy, Debug, Default)]
pub struct RK4;

impl Integrator for RK4 {
    fn advance(
        &self,
        state: &PendulumState,
        pivot_target: &Vec2,
        params: &PendulumParameters,
    ) -> PendulumState {
        let dt = params.timestep();
        let w2 = params.omega_squared();
        // (dx/dt, dv/dt)
        let rhs = |x: &Vec2, v: &Vec2| (*v, w2 * (x - pivot_target));

        let x0 = state.position;
        let v0 = state.velocity;

        let (k1x, k1v) = rhs(&x0, &v0);
        let (k2x, k2v) = rhs(&(x0 + k1x * (0.5 * dt)), &(v0 + k1v * (0.5 * dt)));
        let (k3x, k3v) = rhs(&(x0 + k2x * (0.5 * dt)), &(v0 + k2v * (0.5 * dt)));
        let (k4x, k4v) = rhs(&(x0 + k3x * dt), &(v0 + k3v * dt));

        PendulumState {
            position: x0 + (k1x + k2x * 2.0 + k3x * 2.0 + k4x) * (dt / 6.0),
            velocity: v0 + (k1v + k2v * 2.0 + k3v * 2.0 + k4v) * (dt / 6.0),
        }
    }
}

/// Advance `state` by one timestep with the reference forward Euler scheme.
pub fn advance(
    state: &PendulumState,
    pivot_target: &Vec2,
    params: &PendulumParameters,
) -> PendulumState {
    ForwardEuler.advance(state, pivot_target, params)
}
