//! Loading walk files through the service layer.

use std::path::PathBuf;

use lw_app::{AppError, RunOptions, load_config, planned_footholds, run_walk, save_config, summarize};
use lw_project::WalkConfig;

fn walk_file(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // go to crates
    path.pop(); // go to repo root
    path.push("walks");
    path.push(name);
    path
}

#[test]
fn shipped_walk_files_run_to_completion() {
    for name in ["forward_walk.yaml", "side_step.yaml"] {
        let config = load_config(&walk_file(name)).unwrap();
        let ticks = config.run.ticks;
        let record = run_walk(&config, &RunOptions::default()).unwrap();
        let summary = summarize(&record);
        assert_eq!(summary.ticks, ticks, "{name}");
        assert!(summary.finite, "{name}");
        assert!(summary.steps_taken >= 2, "{name}");
    }
}

#[test]
fn missing_file_reports_path() {
    let path = walk_file("does_not_exist.yaml");
    let err = load_config(&path).unwrap_err();
    assert!(matches!(err, AppError::ConfigFileRead { .. }));
    assert!(err.to_string().contains("does_not_exist.yaml"));
}

#[test]
fn save_then_load_json() {
    let config = WalkConfig::demo();
    let path = std::env::temp_dir().join("lw_app_config_roundtrip.json");
    save_config(&path, &config).unwrap();
    assert_eq!(load_config(&path).unwrap(), config);
}

#[test]
fn planned_footholds_of_demo() {
    let footholds = planned_footholds(&WalkConfig::demo()).unwrap();
    assert_eq!(footholds.len(), 6);
    assert!((footholds[5].x - 0.9).abs() < 1e-12);
    assert!((footholds[5].y - 0.2).abs() < 1e-12);
}
