//! Linear inverted pendulum dynamics for lipwalk.
//!
//! Provides:
//! - Pendulum parameters (height, timestep, gravity) validated at construction
//! - Horizontal center-of-mass state
//! - Fixed-step integrators: forward Euler (reference scheme) and RK4
//!
//! The integrator is a leaf: it knows nothing about footsteps or controllers,
//! it only drives the center of mass away from a given pivot target.

pub mod error;
pub mod integrator;
pub mod params;
pub mod state;

// Re-exports for public API
pub use error::{SimError, SimResult};
pub use integrator::{ForwardEuler, Integrator, IntegratorType, RK4, advance};
pub use params::PendulumParameters;
pub use state::PendulumState;
