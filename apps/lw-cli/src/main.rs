use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use lw_app::{
    AppResult, RunOptions, RunProgressEvent, RunStage, WalkRecord, load_config, planned_footholds,
    run_walk_with_progress, summarize, validate_config, write_csv,
};
use lw_project::WalkConfig;
use lw_sim::IntegratorType;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lw-cli")]
#[command(about = "lipwalk CLI - Capture-point walking on a linear inverted pendulum", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum IntegratorArg {
    Euler,
    Rk4,
}

impl From<IntegratorArg> for IntegratorType {
    fn from(arg: IntegratorArg) -> Self {
        match arg {
            IntegratorArg::Euler => IntegratorType::ForwardEuler,
            IntegratorArg::Rk4 => IntegratorType::RK4,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a walk file
    Validate {
        /// Path to the walk YAML/JSON file
        walk_path: PathBuf,
    },
    /// Print the planned footholds of a walk
    Steps {
        /// Path to the walk YAML/JSON file
        walk_path: PathBuf,
    },
    /// Run a walk file
    Run {
        /// Path to the walk YAML/JSON file
        walk_path: PathBuf,
        /// Number of ticks (overrides the file)
        #[arg(long)]
        ticks: Option<usize>,
        /// Record every N-th tick (overrides the file)
        #[arg(long)]
        record_every: Option<usize>,
        /// Integration scheme (overrides the file)
        #[arg(long, value_enum)]
        integrator: Option<IntegratorArg>,
        /// Output CSV file path (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run the built-in forward walk
    Demo {
        /// Output CSV file path (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { walk_path } => cmd_validate(&walk_path),
        Commands::Steps { walk_path } => cmd_steps(&walk_path),
        Commands::Run {
            walk_path,
            ticks,
            record_every,
            integrator,
            output,
        } => {
            let config = load_config(&walk_path)?;
            let options = RunOptions {
                ticks,
                record_every,
                integrator: integrator.map(IntegratorType::from),
            };
            cmd_run(&config, &options, output.as_deref())
        }
        Commands::Demo { output } => {
            cmd_run(&WalkConfig::demo(), &RunOptions::default(), output.as_deref())
        }
    }
}

fn cmd_validate(walk_path: &Path) -> AppResult<()> {
    println!("Validating walk: {}", walk_path.display());
    let config = load_config(walk_path)?;
    validate_config(&config)?;
    println!(
        "✓ Walk is valid ({} steps, {:.3} s simulated)",
        config.steps.len(),
        config.duration_s()
    );
    Ok(())
}

fn cmd_steps(walk_path: &Path) -> AppResult<()> {
    let config = load_config(walk_path)?;
    let footholds = planned_footholds(&config)?;
    println!("Planned footholds for {}:", config.name);
    for (k, p) in footholds.iter().enumerate() {
        println!(
            "  step {:>2} @ {:>6.3} s: ({:>7.3}, {:>7.3})",
            k,
            k as f64 * config.timing.support_duration_s,
            p.x,
            p.y
        );
    }
    Ok(())
}

fn cmd_run(config: &WalkConfig, options: &RunOptions, output: Option<&Path>) -> AppResult<()> {
    println!("Running walk: {}", config.name);
    let started = Instant::now();
    let mut last_emit = Instant::now();

    let record = run_walk_with_progress(
        config,
        options,
        Some(&mut |event| {
            let emit_now =
                event.stage != RunStage::Running || last_emit.elapsed().as_millis() >= 100;
            if emit_now {
                render_cli_progress(&event);
                last_emit = Instant::now();
            }
        }),
    )?;
    clear_progress_line();

    print_summary(&record, started.elapsed().as_secs_f64());

    if let Some(path) = output {
        let file = File::create(path)?;
        write_csv(&record, BufWriter::new(file))?;
        println!("✓ Wrote {} samples to {}", record.samples.len(), path.display());
    }
    Ok(())
}

fn print_summary(record: &WalkRecord, wall_s: f64) {
    let summary = summarize(record);
    println!("✓ Walk completed in {:.3} s wall time", wall_s);
    println!(
        "  Simulated: {:.3} s ({} ticks)",
        summary.duration_s, summary.ticks
    );
    println!(
        "  Steps taken: {} (index {}/{}{})",
        summary.steps_taken,
        summary.final_step_index,
        record.terminal_index,
        if summary.reached_terminal { ", terminal" } else { "" }
    );
    println!(
        "  Final CoM: ({:.4}, {:.4}) m, velocity ({:.4}, {:.4}) m/s",
        summary.final_position.x,
        summary.final_position.y,
        summary.final_velocity.x,
        summary.final_velocity.y
    );
    println!("  Max excursion outside footholds: {:.4} m", summary.max_excursion);
    if !summary.finite {
        println!("  ! Pendulum state became non-finite");
    }
    for event in &record.events {
        println!(
            "  step {:>2} @ {:>6.3} s  support ({:>7.3}, {:>7.3})  pivot ({:>7.3}, {:>7.3})",
            event.step_index,
            event.time_s,
            event.support_position.x,
            event.support_position.y,
            event.pivot_target.x,
            event.pivot_target.y
        );
    }
}

fn render_cli_progress(event: &RunProgressEvent) {
    let line = match event.stage {
        RunStage::Building => "Building controller...".to_string(),
        RunStage::Running => format!(
            "Running: {:>5.1}%  t={:.3} s  step {}",
            event.fraction_complete * 100.0,
            event.sim_time_s,
            event.step_index
        ),
        RunStage::Completed => "Completed".to_string(),
    };
    print!("\r{:<60}", line);
    let _ = io::stdout().flush();
}

fn clear_progress_line() {
    print!("\r{:<60}\r", "");
    let _ = io::stdout().flush();
}
