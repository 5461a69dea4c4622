//! Planned footstep displacements.

use lw_core::{Vec2, ensure_finite_vec, vec2};
use serde::{Deserialize, Serialize};

use crate::error::{ControlError, ControlResult};

/// Lateral sign applied to the `dy` of step `step_index`.
///
/// Feet alternate: even indices step to `-dy`, odd indices to `+dy`. With the
/// usual table whose entry 0 is `(0, 0)`, the first foot placed off the
/// initial stance (index 1) lands on the `+y` side.
#[inline]
pub fn lateral_sign(step_index: usize) -> f64 {
    if step_index % 2 == 0 { -1.0 } else { 1.0 }
}

/// Ordered, immutable sequence of `(dx, dy)` footstep displacements.
///
/// Entry 0 is the initial stance. Entries are relative to the previous
/// support foot; the lateral component is unsigned and gets its sign from
/// [`lateral_sign`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec2>", into = "Vec<Vec2>")]
pub struct StepTable {
    steps: Vec<Vec2>,
}

impl StepTable {
    /// Create a table, rejecting fewer than 2 entries or non-finite values.
    pub fn new(steps: Vec<Vec2>) -> ControlResult<Self> {
        if steps.len() < 2 {
            tracing::warn!(len = steps.len(), "rejecting step table");
            return Err(ControlError::StepTableTooShort { len: steps.len() });
        }
        for (index, step) in steps.iter().enumerate() {
            if let Err(e) = ensure_finite_vec(step, "step displacement") {
                tracing::warn!(index, error = %e, "rejecting step table");
                return Err(e.into());
            }
        }
        Ok(Self { steps })
    }

    /// Create a table from `[dx, dy]` pairs.
    pub fn from_pairs(pairs: &[[f64; 2]]) -> ControlResult<Self> {
        Self::new(pairs.iter().map(|p| vec2(p[0], p[1])).collect())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// A constructed table is never empty.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the terminal state: no step triggers once it is reached.
    pub fn terminal_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn get(&self, step_index: usize) -> Option<&Vec2> {
        self.steps.get(step_index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.steps.iter()
    }

    /// Displacement of step `step_index` with its lateral sign applied.
    ///
    /// Panics if `step_index` is out of range.
    pub fn signed_displacement(&self, step_index: usize) -> Vec2 {
        let step = self.steps[step_index];
        vec2(step.x, lateral_sign(step_index) * step.y)
    }

    /// Absolute support positions visited by a controller starting from
    /// `origin`, one per non-terminal index.
    pub fn footholds(&self, origin: Vec2) -> Vec<Vec2> {
        (0..self.terminal_index())
            .scan(origin, |support, k| {
                *support += self.signed_displacement(k);
                Some(*support)
            })
            .collect()
    }
}

impl TryFrom<Vec<Vec2>> for StepTable {
    type Error = ControlError;

    fn try_from(steps: Vec<Vec2>) -> ControlResult<Self> {
        Self::new(steps)
    }
}

impl From<StepTable> for Vec<Vec2> {
    fn from(table: StepTable) -> Self {
        table.steps
    }
}
