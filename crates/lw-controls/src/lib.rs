//! Footstep-triggered capture-point control for the linear inverted pendulum.
//!
//! The controller holds a fixed table of footstep displacements. At every
//! support-phase boundary it places the next support foot and computes a new
//! pivot target (`p_star`) from the closed-form LIPM solution over one support
//! phase. Between boundaries the pivot target is held (zero-order hold).
//!
//! # Architecture
//!
//! - [`StepTable`]: validated, immutable gait plan
//! - [`StepPlan`]: hyperbolic constants and gains, computed once
//! - [`SupportClock`]: decides when a boundary has been crossed
//! - [`StepController`]: the sampled feedback law, operating on an explicit
//!   [`ControllerState`] owned by the caller

pub mod controller;
pub mod error;
pub mod plan;
pub mod sampled;
pub mod step_table;

pub use controller::{ControllerState, StepCommand, StepController};
pub use error::{ControlError, ControlResult};
pub use plan::{CaptureGains, StepPlan};
pub use sampled::{MIN_SUPPORT_DURATION, SupportClock};
pub use step_table::{StepTable, lateral_sign};
