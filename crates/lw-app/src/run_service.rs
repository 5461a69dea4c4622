//! Walk execution service.

use lw_core::Vec2;
use lw_project::WalkConfig;
use lw_sim::{IntegratorType, PendulumState};

use crate::error::{AppError, AppResult};
use crate::progress::{RunProgressEvent, RunStage};
use crate::runtime::{TickSample, WalkRuntime};

/// Overrides applied on top of the configuration's `run` section.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub ticks: Option<usize>,
    pub record_every: Option<usize>,
    pub integrator: Option<IntegratorType>,
}

/// A processed step boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupportEvent {
    pub tick: usize,
    pub time_s: f64,
    /// Step index after the boundary.
    pub step_index: usize,
    pub support_position: Vec2,
    pub pivot_target: Vec2,
    /// Pendulum state the pivot target was computed from.
    pub state_at_boundary: PendulumState,
}

/// Recorded walk.
#[derive(Debug, Clone)]
pub struct WalkRecord {
    pub name: String,
    pub timestep_s: f64,
    pub support_duration_s: f64,
    pub terminal_index: usize,
    /// Decimated samples; stepping ticks and the final tick are always kept.
    pub samples: Vec<TickSample>,
    pub events: Vec<SupportEvent>,
    pub planned_footholds: Vec<Vec2>,
}

impl WalkRecord {
    pub fn last(&self) -> Option<&TickSample> {
        self.samples.last()
    }

    pub fn final_step_index(&self) -> usize {
        self.samples.last().map_or(0, |s| s.step_index)
    }

    pub fn reached_terminal(&self) -> bool {
        self.final_step_index() == self.terminal_index
    }
}

pub fn run_walk(config: &WalkConfig, options: &RunOptions) -> AppResult<WalkRecord> {
    run_walk_with_progress(config, options, None)
}

pub fn run_walk_with_progress(
    config: &WalkConfig,
    options: &RunOptions,
    mut progress_cb: Option<&mut dyn FnMut(RunProgressEvent)>,
) -> AppResult<WalkRecord> {
    let ticks = options.ticks.unwrap_or(config.run.ticks);
    let record_every = options.record_every.unwrap_or(config.run.record_every);
    if record_every == 0 {
        return Err(AppError::InvalidInput(
            "record_every must be at least 1".to_string(),
        ));
    }

    emit(&mut progress_cb, RunProgressEvent::stage(RunStage::Building, ticks, None));
    let mut runtime = WalkRuntime::from_config(config)?;
    if let Some(integrator) = options.integrator {
        runtime = runtime.with_integrator(integrator);
    }
    let planned_footholds = runtime.controller().table().footholds(Vec2::zeros());

    tracing::info!(
        name = %config.name,
        ticks,
        steps = config.steps.len(),
        integrator = ?runtime.integrator(),
        "starting walk"
    );

    let mut samples = Vec::with_capacity(ticks / record_every + 8);
    let mut events = Vec::new();
    let report_every = (ticks / 10).max(1);

    for i in 0..ticks {
        let before = *runtime.pendulum();
        let sample = runtime.tick();

        if sample.stepped {
            events.push(SupportEvent {
                tick: sample.tick,
                time_s: sample.time_s,
                step_index: sample.step_index,
                support_position: sample.support_position,
                pivot_target: sample.pivot_target,
                state_at_boundary: before,
            });
        }

        let is_last = i + 1 == ticks;
        if sample.stepped || i % record_every == 0 || is_last {
            tracing::trace!(tick = i, x = sample.state.position.x, y = sample.state.position.y);
            samples.push(sample);
        }

        if (i + 1) % report_every == 0 || is_last {
            emit(
                &mut progress_cb,
                RunProgressEvent {
                    stage: RunStage::Running,
                    tick: i + 1,
                    total_ticks: ticks,
                    sim_time_s: sample.time_s,
                    step_index: sample.step_index,
                    fraction_complete: (i + 1) as f64 / ticks as f64,
                    message: None,
                },
            );
        }
    }

    let final_state = runtime.pendulum();
    tracing::info!(
        steps_taken = events.len(),
        step_index = runtime.control().step_index,
        terminal = runtime.is_terminal(),
        x = final_state.position.x,
        y = final_state.position.y,
        "walk finished"
    );
    if !final_state.is_finite() {
        tracing::warn!("pendulum state became non-finite");
    }

    emit(
        &mut progress_cb,
        RunProgressEvent {
            stage: RunStage::Completed,
            tick: ticks,
            total_ticks: ticks,
            sim_time_s: ticks as f64 * runtime.params().timestep(),
            step_index: runtime.control().step_index,
            fraction_complete: 1.0,
            message: Some(format!("{} steps", events.len())),
        },
    );

    Ok(WalkRecord {
        name: config.name.clone(),
        timestep_s: runtime.params().timestep(),
        support_duration_s: runtime.controller().clock().support_duration(),
        terminal_index: runtime.controller().terminal_index(),
        samples,
        events,
        planned_footholds,
    })
}

fn emit(progress_cb: &mut Option<&mut dyn FnMut(RunProgressEvent)>, event: RunProgressEvent) {
    if let Some(cb) = progress_cb.as_deref_mut() {
        cb(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimation_keeps_step_ticks_and_final_tick() {
        let config = WalkConfig::demo();
        let options = RunOptions {
            ticks: Some(1000),
            record_every: Some(300),
            ..RunOptions::default()
        };
        let record = run_walk(&config, &options).unwrap();
        let ticks: Vec<usize> = record.samples.iter().map(|s| s.tick).collect();
        assert!(ticks.contains(&0));
        assert!(ticks.contains(&300));
        assert!(ticks.contains(&800));
        assert_eq!(*ticks.last().unwrap(), 999);
        assert_eq!(record.events.len(), 2);
    }

    #[test]
    fn zero_ticks_records_nothing() {
        let options = RunOptions {
            ticks: Some(0),
            ..RunOptions::default()
        };
        let record = run_walk(&WalkConfig::demo(), &options).unwrap();
        assert!(record.samples.is_empty());
        assert_eq!(record.final_step_index(), 0);
    }

    #[test]
    fn rejects_zero_record_every_override() {
        let options = RunOptions {
            record_every: Some(0),
            ..RunOptions::default()
        };
        assert!(matches!(
            run_walk(&WalkConfig::demo(), &options),
            Err(AppError::InvalidInput(_))
        ));
    }
}
