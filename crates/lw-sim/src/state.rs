//! Center-of-mass state in the horizontal plane.

use lw_core::{Vec2, vec2};

use crate::params::PendulumParameters;

/// Horizontal position and velocity of the center of mass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendulumState {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl PendulumState {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }

    /// Center of mass at rest over `position`.
    pub fn at_rest(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::zeros(),
        }
    }

    /// Per-axis orbital energy about `pivot`:
    /// `0.5 * v^2 - 0.5 * (g/h) * (x - p)^2`.
    ///
    /// Conserved by the continuous dynamics while the pivot is held fixed.
    pub fn orbital_energy(&self, params: &PendulumParameters, pivot: &Vec2) -> Vec2 {
        let w2 = params.omega_squared();
        let offset = self.position - pivot;
        vec2(
            0.5 * self.velocity.x * self.velocity.x - 0.5 * w2 * offset.x * offset.x,
            0.5 * self.velocity.y * self.velocity.y - 0.5 * w2 * offset.y * offset.y,
        )
    }

    pub fn is_finite(&self) -> bool {
        self.position.iter().chain(self.velocity.iter()).all(|v| v.is_finite())
    }
}

impl Default for PendulumState {
    fn default() -> Self {
        Self::at_rest(Vec2::zeros())
    }
}
