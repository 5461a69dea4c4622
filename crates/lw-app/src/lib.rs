//! Shared application service layer for lipwalk.
//!
//! This crate is the driver around the control core: it builds the pendulum
//! and controller from a walk configuration, owns their state, advances the
//! simulation tick by tick and records what happened. The CLI is a thin
//! front end over it.

pub mod error;
pub mod export;
pub mod progress;
pub mod project_service;
pub mod run_service;
pub mod runtime;
pub mod summary;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use export::write_csv;
pub use progress::{RunProgressEvent, RunStage};
pub use project_service::{load_config, planned_footholds, save_config, validate_config};
pub use run_service::{RunOptions, SupportEvent, WalkRecord, run_walk, run_walk_with_progress};
pub use runtime::{TickSample, WalkRuntime};
pub use summary::{Bounds, WalkSummary, summarize};
