//! Post-run summary of a recorded walk.

use lw_core::{Vec2, vec2};

use crate::run_service::WalkRecord;

/// Axis-aligned bounding box in the ground plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn of<'a>(points: impl IntoIterator<Item = &'a Vec2>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(
            Self {
                min: first,
                max: first,
            },
            |b, p| Self {
                min: b.min.inf(p),
                max: b.max.sup(p),
            },
        ))
    }

    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            min: self.min - vec2(margin, margin),
            max: self.max + vec2(margin, margin),
        }
    }

    pub fn contains(&self, p: &Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Distance from `p` to the box; zero inside.
    pub fn distance_to(&self, p: &Vec2) -> f64 {
        let dx = (self.min.x - p.x).max(0.0).max(p.x - self.max.x);
        let dy = (self.min.y - p.y).max(0.0).max(p.y - self.max.y);
        dx.hypot(dy)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WalkSummary {
    pub ticks: usize,
    pub duration_s: f64,
    pub steps_taken: usize,
    pub final_step_index: usize,
    pub reached_terminal: bool,
    pub final_position: Vec2,
    pub final_velocity: Vec2,
    pub com_bounds: Option<Bounds>,
    pub support_bounds: Option<Bounds>,
    /// Largest distance of the recorded CoM path outside the support box.
    pub max_excursion: f64,
    pub finite: bool,
}

pub fn summarize(record: &WalkRecord) -> WalkSummary {
    let last = record.last();
    let positions: Vec<Vec2> = record.samples.iter().map(|s| s.state.position).collect();
    let supports: Vec<Vec2> = record.events.iter().map(|e| e.support_position).collect();
    let com_bounds = Bounds::of(&positions);
    let support_bounds = Bounds::of(&supports);

    let max_excursion = support_bounds.map_or(0.0, |b| {
        positions
            .iter()
            .map(|p| b.distance_to(p))
            .fold(0.0, f64::max)
    });

    WalkSummary {
        ticks: last.map_or(0, |s| s.tick + 1),
        duration_s: last.map_or(0.0, |s| s.time_s + record.timestep_s),
        steps_taken: record.events.len(),
        final_step_index: record.final_step_index(),
        reached_terminal: record.reached_terminal(),
        final_position: last.map_or(Vec2::zeros(), |s| s.state.position),
        final_velocity: last.map_or(Vec2::zeros(), |s| s.state.velocity),
        com_bounds,
        support_bounds,
        max_excursion,
        finite: record.samples.iter().all(|s| s.state.is_finite()),
    }
}
