//! Walk configuration loading and inspection.

use std::path::Path;

use lw_controls::StepTable;
use lw_core::Vec2;
use lw_project::WalkConfig;

use crate::error::{AppError, AppResult};

/// Load a walk file (YAML, or JSON by extension). Validation is part of loading.
pub fn load_config(path: &Path) -> AppResult<WalkConfig> {
    lw_project::load(path).map_err(|source| AppError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_config(path: &Path, config: &WalkConfig) -> AppResult<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => lw_project::save_json(path, config)?,
        _ => lw_project::save_yaml(path, config)?,
    }
    Ok(())
}

pub fn validate_config(config: &WalkConfig) -> AppResult<()> {
    lw_project::validate_config(config)?;
    Ok(())
}

/// Absolute support positions the walk will step on, starting at the origin.
pub fn planned_footholds(config: &WalkConfig) -> AppResult<Vec<Vec2>> {
    let table = StepTable::from_pairs(&config.steps)?;
    Ok(table.footholds(Vec2::zeros()))
}
