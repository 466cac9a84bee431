//! CLI module for gymtimer.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `display`: Output formatting for the non-interactive subcommands

pub mod commands;
pub mod display;

pub use commands::{Cli, Commands, PlanArgs, RunArgs, WorkoutArgs};
pub use display::Display;
