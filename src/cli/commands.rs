//! Command definitions for the gymtimer CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::types::{Mode, WorkoutConfig};

// ============================================================================
// CLI Structure
// ============================================================================

/// gymtimer - Terminal interval timer for workouts
#[derive(Parser, Debug)]
#[command(
    name = "gymtimer",
    version,
    about = "Terminal interval timer for workouts",
    long_about = "Interval timer for the terminal with Clock, EMOM, Tabata, AMRAP, Custom \
                  and Stopwatch modes and audible cues at every transition.\n\
                  Runs the interactive timer when no subcommand is given.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Start with audio cues muted
    #[arg(long, global = true)]
    pub no_sound: bool,

    /// Write logs to this file (logs are discarded while the timer UI runs otherwise)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the interactive timer (default)
    Run(RunArgs),

    /// Print the plan of a workout without starting it
    Plan(PlanArgs),

    /// Write the cue sounds as WAV files
    Sounds {
        /// Output directory (defaults to the user cache directory)
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Command Arguments
// ============================================================================

/// Arguments for the run command
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Mode to open: clock, emom, tabata, amrap, custom or stopwatch
    #[arg(short, long)]
    pub mode: Option<Mode>,

    #[command(flatten)]
    pub workout: WorkoutArgs,
}

/// Arguments for the plan command
#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    /// Mode to plan: clock, emom, tabata, amrap, custom or stopwatch
    pub mode: Mode,

    #[command(flatten)]
    pub workout: WorkoutArgs,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

/// Workout overrides shared by `run` and `plan`
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkoutArgs {
    /// Work interval in seconds (5-300)
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u32).range(5..=300)
    )]
    pub work: Option<u32>,

    /// Rest interval in seconds (5-300)
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u32).range(5..=300)
    )]
    pub rest: Option<u32>,

    /// Number of rounds (1-99)
    #[arg(
        short = 'n',
        long,
        value_parser = clap::value_parser!(u32).range(1..=99)
    )]
    pub rounds: Option<u32>,

    /// AMRAP duration in minutes (1-60)
    #[arg(
        long,
        value_parser = clap::value_parser!(u32).range(1..=60)
    )]
    pub minutes: Option<u32>,
}

impl From<WorkoutArgs> for WorkoutConfig {
    fn from(args: WorkoutArgs) -> Self {
        Self {
            work_secs: args.work,
            rest_secs: args.rest,
            rounds: args.rounds,
            minutes: args.minutes,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
