//! Walk configuration schema.

use lw_core::constants::G0_MPS2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalkConfig {
    pub version: u32,
    pub name: String,
    pub pendulum: PendulumDef,
    pub timing: TimingDef,
    #[serde(default)]
    pub gains: GainsDef,
    /// `[dx, dy]` footstep displacements; entry 0 is the initial stance.
    pub steps: Vec<[f64; 2]>,
    #[serde(default)]
    pub run: RunDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PendulumDef {
    pub height_m: f64,
    #[serde(default = "default_gravity")]
    pub gravity_mps2: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingDef {
    pub timestep_s: f64,
    pub support_duration_s: f64,
}

/// Capture-law weights on end-of-step position (`a`) and velocity (`b`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GainsDef {
    pub a: f64,
    pub b: f64,
}

impl Default for GainsDef {
    fn default() -> Self {
        Self { a: 10.0, b: 1.0 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum IntegratorDef {
    #[default]
    Euler,
    Rk4,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunDef {
    #[serde(default = "default_ticks")]
    pub ticks: usize,
    #[serde(default = "default_record_every")]
    pub record_every: usize,
    #[serde(default)]
    pub integrator: IntegratorDef,
}

impl Default for RunDef {
    fn default() -> Self {
        Self {
            ticks: default_ticks(),
            record_every: default_record_every(),
            integrator: IntegratorDef::default(),
        }
    }
}

fn default_gravity() -> f64 {
    G0_MPS2
}

fn default_ticks() -> usize {
    4000
}

fn default_record_every() -> usize {
    1
}

impl WalkConfig {
    /// Seven-entry forward walk: 0.3 m strides, 0.2 m lateral foot spacing.
    pub fn demo() -> Self {
        let x_step = 0.3;
        let y_step = 0.2;
        Self {
            version: crate::validate::LATEST_VERSION,
            name: "Forward walk".to_string(),
            pendulum: PendulumDef {
                height_m: 0.8,
                gravity_mps2: G0_MPS2,
            },
            timing: TimingDef {
                timestep_s: 0.001,
                support_duration_s: 0.8,
            },
            gains: GainsDef::default(),
            steps: vec![
                [0.0, 0.0],
                [0.0, y_step],
                [x_step, y_step],
                [x_step, y_step],
                [x_step, y_step],
                [0.0, y_step],
                [0.0, 0.0],
            ],
            run: RunDef {
                ticks: 4800,
                ..RunDef::default()
            },
        }
    }

    /// Simulated duration of a run, seconds.
    pub fn duration_s(&self) -> f64 {
        self.run.ticks as f64 * self.timing.timestep_s
    }
}
