//! gymtimer - Terminal interval timer for workouts
//!
//! Modes:
//! - Clock: wall-clock time
//! - EMOM: every minute on the minute
//! - Tabata / Custom: alternating work and rest intervals
//! - AMRAP: as many rounds as possible in a fixed time
//! - Stopwatch: count-up timer that keeps running in the background

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};

use gymtimer::app::{self, RunOptions};
use gymtimer::cli::{Cli, Commands, Display, PlanArgs, RunArgs};
use gymtimer::sound::{default_assets_dir, write_assets};
use gymtimer::timer::Timer;
use gymtimer::types::WorkoutConfig;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    if let Err(e) = init_tracing(&cli) {
        Display::show_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
///
/// Logs go to `--log-file` when given. Otherwise they go to stderr, except
/// while the timer UI owns the terminal, where they are discarded.
fn init_tracing(cli: &Cli) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let builder = fmt().with_env_filter(filter).with_target(false);

    if let Some(path) = &cli.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.with_ansi(false).with_writer(Mutex::new(file)).init();
    } else if is_interactive(cli) {
        builder.without_time().with_writer(std::io::sink).init();
    } else {
        builder.without_time().with_writer(std::io::stderr).init();
    }

    Ok(())
}

/// Returns true if the command runs the timer UI.
fn is_interactive(cli: &Cli) -> bool {
    matches!(cli.command, None | Some(Commands::Run(_)))
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    // Set verbose logging if requested
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    let sound = !cli.no_sound;

    match cli.command {
        Some(Commands::Run(args)) => {
            app::run(run_options(args, sound)?).await?;
        }
        Some(Commands::Plan(args)) => {
            show_plan(&args)?;
        }
        Some(Commands::Sounds { out }) => {
            write_sounds(out)?;
        }
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
        None => {
            app::run(RunOptions {
                sound,
                ..RunOptions::default()
            })
            .await?;
        }
    }

    Ok(())
}

/// Builds the session options of the run command.
fn run_options(args: RunArgs, sound: bool) -> Result<RunOptions> {
    let config = WorkoutConfig::from(args.workout);
    if args.mode.is_none() && !config.is_empty() {
        bail!("workout overrides require --mode");
    }
    config.validate().map_err(anyhow::Error::msg)?;

    Ok(RunOptions {
        mode: args.mode,
        config,
        sound,
    })
}

/// Prints the plan of the requested workout.
fn show_plan(args: &PlanArgs) -> Result<()> {
    let config = WorkoutConfig::from(args.workout);
    config.validate().map_err(anyhow::Error::msg)?;

    let mut timer = Timer::for_mode(args.mode);
    timer.apply_config(&config);
    let plan = timer.plan();

    if args.json {
        Display::show_plan_json(&plan).context("Failed to serialize plan")?;
    } else {
        Display::show_plan(&plan);
    }
    Ok(())
}

/// Writes the cue sounds into `out` or the default assets directory.
fn write_sounds(out: Option<PathBuf>) -> Result<()> {
    let dir = out.unwrap_or_else(default_assets_dir);
    let paths = write_assets(&dir)
        .with_context(|| format!("Failed to write sounds to {}", dir.display()))?;
    Display::show_sounds_written(&paths);
    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
