//! Display utilities for the gymtimer CLI.
//!
//! This module provides formatted output for:
//! - Workout plans (text and JSON)
//! - Exported sound files
//! - Error messages

use std::path::PathBuf;

use crate::timer::format_minutes_seconds;
use crate::types::WorkoutPlan;

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows a workout plan as text.
    pub fn show_plan(plan: &WorkoutPlan) {
        print!("{}", Self::format_plan(plan));
    }

    /// Shows a workout plan as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn show_plan_json(plan: &WorkoutPlan) -> serde_json::Result<()> {
        println!("{}", serde_json::to_string_pretty(plan)?);
        Ok(())
    }

    /// Shows the paths of written sound files.
    pub fn show_sounds_written(paths: &[PathBuf]) {
        for path in paths {
            println!("* {}", path.display());
        }
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("error: {}", message);
    }

    /// Formats a workout plan as aligned text lines.
    fn format_plan(plan: &WorkoutPlan) -> String {
        let mut out = format!("Workout: {}\n", plan.mode);

        if let Some(work) = plan.work_seconds {
            out.push_str(&format!("  Work:   {}s\n", work));
        }
        if let Some(rest) = plan.rest_seconds {
            out.push_str(&format!("  Rest:   {}s\n", rest));
        }
        if let Some(rounds) = plan.rounds {
            out.push_str(&format!("  Rounds: {}\n", rounds));
        }
        if let Some(minutes) = plan.minutes {
            out.push_str(&format!("  Duration: {} min\n", minutes));
        }
        match plan.total_seconds {
            Some(total) => out.push_str(&format!(
                "  Total:  {}\n",
                format_minutes_seconds(std::time::Duration::from_secs(total))
            )),
            None => out.push_str("  Open-ended\n"),
        }

        out
    }
}

// ============================================================================
// Tests
// ============================================================================
