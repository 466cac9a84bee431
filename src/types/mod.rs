//! Core data types for the Gym Timer.
//!
//! This module defines the data structures used for:
//! - Timer modes and interval phases
//! - Setting limits applied when the user adjusts a workout
//! - Command-line workout overrides with validation
//! - The serializable workout plan summary

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

// ============================================================================
// Mode
// ============================================================================

/// Training protocol driven by the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Wall-clock display, no countdown
    #[default]
    Clock,
    /// Every Minute On the Minute
    Emom,
    /// Tabata intervals (20s work / 10s rest by default)
    Tabata,
    /// As Many Rounds As Possible: a single countdown
    Amrap,
    /// User-defined work/rest intervals
    Custom,
    /// Shows the independent stopwatch
    Stopwatch,
}

impl Mode {
    /// All modes, in key-binding order (`1` through `6`).
    pub const ALL: [Mode; 6] = [
        Mode::Clock,
        Mode::Emom,
        Mode::Tabata,
        Mode::Amrap,
        Mode::Custom,
        Mode::Stopwatch,
    ];

    /// Returns the display name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Clock => "CLOCK",
            Mode::Emom => "EMOM",
            Mode::Tabata => "TABATA",
            Mode::Amrap => "AMRAP",
            Mode::Custom => "CUSTOM",
            Mode::Stopwatch => "STOPWATCH",
        }
    }

    /// Returns true for modes that alternate work and rest intervals.
    pub fn is_interval(&self) -> bool {
        matches!(self, Mode::Tabata | Mode::Custom)
    }

    /// Returns true for modes the engine counts down in.
    pub fn is_countdown(&self) -> bool {
        matches!(self, Mode::Emom | Mode::Tabata | Mode::Amrap | Mode::Custom)
    }

    /// Returns true if the mode tracks rounds.
    pub fn has_rounds(&self) -> bool {
        matches!(self, Mode::Emom | Mode::Tabata | Mode::Custom)
    }

    /// Returns the setting fields editable on this mode's setup screen.
    pub fn setting_fields(&self) -> &'static [SettingField] {
        match self {
            Mode::Emom => &[SettingField::Rounds],
            Mode::Tabata | Mode::Custom => {
                &[SettingField::Work, SettingField::Rest, SettingField::Rounds]
            }
            Mode::Amrap => &[SettingField::Duration],
            Mode::Clock | Mode::Stopwatch => &[],
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clock" => Ok(Mode::Clock),
            "emom" => Ok(Mode::Emom),
            "tabata" => Ok(Mode::Tabata),
            "amrap" => Ok(Mode::Amrap),
            "custom" => Ok(Mode::Custom),
            "stopwatch" => Ok(Mode::Stopwatch),
            other => Err(format!(
                "unknown mode '{}' (expected clock, emom, tabata, amrap, custom or stopwatch)",
                other
            )),
        }
    }
}

// ============================================================================
// Phase
// ============================================================================

/// Work or rest phase of an interval workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Working interval
    #[default]
    Work,
    /// Resting interval
    Rest,
    /// Lead-in before the first interval (reserved, never entered by the engines)
    Countdown,
}

impl Phase {
    /// Returns the display name of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Work => "WORK",
            Phase::Rest => "REST",
            Phase::Countdown => "GET READY",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Setting limits
// ============================================================================

/// A setting the user can adjust on the setup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingField {
    /// Work interval length
    Work,
    /// Rest interval length
    Rest,
    /// Target round count
    Rounds,
    /// AMRAP total duration
    Duration,
}

/// Shortest allowed work or rest interval.
pub const MIN_INTERVAL: Duration = Duration::from_secs(5);
/// Longest allowed work or rest interval.
pub const MAX_INTERVAL: Duration = Duration::from_secs(5 * 60);
/// Adjustment step for work and rest intervals.
pub const INTERVAL_STEP: Duration = Duration::from_secs(5);

pub const MIN_ROUNDS: u32 = 1;
pub const MAX_ROUNDS: u32 = 99;

/// Shortest allowed AMRAP duration.
pub const MIN_AMRAP: Duration = Duration::from_secs(60);
/// Longest allowed AMRAP duration.
pub const MAX_AMRAP: Duration = Duration::from_secs(60 * 60);
/// Adjustment step for the AMRAP duration.
pub const AMRAP_STEP: Duration = Duration::from_secs(60);

// ============================================================================
// WorkoutConfig
// ============================================================================

/// Workout overrides supplied on the command line.
///
/// Every field is optional; unset fields keep the mode defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkoutConfig {
    /// Work interval in seconds (5-300)
    pub work_secs: Option<u32>,
    /// Rest interval in seconds (5-300)
    pub rest_secs: Option<u32>,
    /// Number of rounds (1-99)
    pub rounds: Option<u32>,
    /// AMRAP duration in minutes (1-60)
    pub minutes: Option<u32>,
}

impl WorkoutConfig {
    pub fn with_work_secs(mut self, secs: u32) -> Self {
        self.work_secs = Some(secs);
        self
    }

    pub fn with_rest_secs(mut self, secs: u32) -> Self {
        self.rest_secs = Some(secs);
        self
    }

    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = Some(rounds);
        self
    }

    pub fn with_minutes(mut self, minutes: u32) -> Self {
        self.minutes = Some(minutes);
        self
    }

    /// Returns true if no override is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Validates the overrides against the setting limits.
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        let interval_range = MIN_INTERVAL.as_secs()..=MAX_INTERVAL.as_secs();
        if let Some(work) = self.work_secs {
            if !interval_range.contains(&u64::from(work)) {
                return Err("work interval must be between 5 and 300 seconds".to_string());
            }
        }
        if let Some(rest) = self.rest_secs {
            if !interval_range.contains(&u64::from(rest)) {
                return Err("rest interval must be between 5 and 300 seconds".to_string());
            }
        }
        if let Some(rounds) = self.rounds {
            if !(MIN_ROUNDS..=MAX_ROUNDS).contains(&rounds) {
                return Err("rounds must be between 1 and 99".to_string());
            }
        }
        if let Some(minutes) = self.minutes {
            if !(1..=60).contains(&minutes) {
                return Err("AMRAP duration must be between 1 and 60 minutes".to_string());
            }
        }
        Ok(())
    }
}

// ============================================================================
// WorkoutPlan
// ============================================================================

/// Summary of a configured workout, printed by `gymtimer plan`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Training protocol
    pub mode: Mode,
    /// Work interval in seconds
    #[serde(rename = "workSeconds", skip_serializing_if = "Option::is_none")]
    pub work_seconds: Option<u64>,
    /// Rest interval in seconds
    #[serde(rename = "restSeconds", skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u64>,
    /// Target round count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounds: Option<u32>,
    /// AMRAP time cap in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u64>,
    /// Nominal workout length in seconds
    #[serde(rename = "totalSeconds", skip_serializing_if = "Option::is_none")]
    pub total_seconds: Option<u64>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Mode Tests
    // ------------------------------------------------------------------------

    mod mode_tests {
        use super::*;

        #[test]
        fn test_default_is_clock() {
            assert_eq!(Mode::default(), Mode::Clock);
        }

        #[test]
        fn test_as_str() {
            assert_eq!(Mode::Clock.as_str(), "CLOCK");
            assert_eq!(Mode::Emom.as_str(), "EMOM");
            assert_eq!(Mode::Tabata.as_str(), "TABATA");
            assert_eq!(Mode::Amrap.as_str(), "AMRAP");
            assert_eq!(Mode::Custom.as_str(), "CUSTOM");
            assert_eq!(Mode::Stopwatch.as_str(), "STOPWATCH");
        }

        #[test]
        fn test_from_str_is_case_insensitive() {
            assert_eq!("tabata".parse::<Mode>(), Ok(Mode::Tabata));
            assert_eq!("EMOM".parse::<Mode>(), Ok(Mode::Emom));
            assert_eq!("Amrap".parse::<Mode>(), Ok(Mode::Amrap));
        }

        #[test]
        fn test_from_str_unknown() {
            let err = "hiit".parse::<Mode>().unwrap_err();
            assert!(err.contains("hiit"));
        }

        #[test]
        fn test_classification() {
            assert!(Mode::Tabata.is_interval());
            assert!(Mode::Custom.is_interval());
            assert!(!Mode::Emom.is_interval());

            assert!(Mode::Amrap.is_countdown());
            assert!(!Mode::Clock.is_countdown());
            assert!(!Mode::Stopwatch.is_countdown());

            assert!(Mode::Emom.has_rounds());
            assert!(!Mode::Amrap.has_rounds());
        }

        #[test]
        fn test_setting_fields() {
            assert_eq!(Mode::Emom.setting_fields(), &[SettingField::Rounds]);
            assert_eq!(Mode::Amrap.setting_fields(), &[SettingField::Duration]);
            assert_eq!(Mode::Tabata.setting_fields().len(), 3);
            assert!(Mode::Clock.setting_fields().is_empty());
        }

        #[test]
        fn test_serialize() {
            let json = serde_json::to_string(&Mode::Tabata).unwrap();
            assert_eq!(json, "\"tabata\"");
        }
    }

    // ------------------------------------------------------------------------
    // Phase Tests
    // ------------------------------------------------------------------------

    mod phase_tests {
        use super::*;

        #[test]
        fn test_default_is_work() {
            assert_eq!(Phase::default(), Phase::Work);
        }

        #[test]
        fn test_display() {
            assert_eq!(Phase::Work.to_string(), "WORK");
            assert_eq!(Phase::Rest.to_string(), "REST");
            assert_eq!(Phase::Countdown.to_string(), "GET READY");
        }
    }

    // ------------------------------------------------------------------------
    // WorkoutConfig Tests
    // ------------------------------------------------------------------------

    mod workout_config_tests {
        use super::*;

        #[test]
        fn test_default_is_empty() {
            assert!(WorkoutConfig::default().is_empty());
            assert!(WorkoutConfig::default().validate().is_ok());
        }

        #[test]
        fn test_builder_pattern() {
            let config = WorkoutConfig::default()
                .with_work_secs(40)
                .with_rest_secs(20)
                .with_rounds(6)
                .with_minutes(12);

            assert_eq!(config.work_secs, Some(40));
            assert_eq!(config.rest_secs, Some(20));
            assert_eq!(config.rounds, Some(6));
            assert_eq!(config.minutes, Some(12));
            assert!(!config.is_empty());
        }

        #[test]
        fn test_validate_boundary_values() {
            let config = WorkoutConfig::default()
                .with_work_secs(5)
                .with_rest_secs(300)
                .with_rounds(99)
                .with_minutes(1);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_validate_work_too_short() {
            let config = WorkoutConfig::default().with_work_secs(4);
            assert!(config.validate().unwrap_err().contains("work"));
        }

        #[test]
        fn test_validate_rest_too_long() {
            let config = WorkoutConfig::default().with_rest_secs(301);
            assert!(config.validate().unwrap_err().contains("rest"));
        }

        #[test]
        fn test_validate_rounds_out_of_range() {
            assert!(WorkoutConfig::default().with_rounds(0).validate().is_err());
            assert!(WorkoutConfig::default().with_rounds(100).validate().is_err());
        }

        #[test]
        fn test_validate_minutes_out_of_range() {
            assert!(WorkoutConfig::default().with_minutes(0).validate().is_err());
            assert!(WorkoutConfig::default().with_minutes(61).validate().is_err());
        }
    }

    // ------------------------------------------------------------------------
    // WorkoutPlan Tests
    // ------------------------------------------------------------------------

    mod workout_plan_tests {
        use super::*;

        #[test]
        fn test_serialize_skips_missing_fields() {
            let plan = WorkoutPlan {
                mode: Mode::Amrap,
                work_seconds: None,
                rest_seconds: None,
                rounds: None,
                minutes: Some(20),
                total_seconds: Some(1200),
            };
            let json = serde_json::to_string(&plan).unwrap();
            assert_eq!(json, r#"{"mode":"amrap","minutes":20,"totalSeconds":1200}"#);
        }

        #[test]
        fn test_serialize_interval_plan() {
            let plan = WorkoutPlan {
                mode: Mode::Tabata,
                work_seconds: Some(20),
                rest_seconds: Some(10),
                rounds: Some(8),
                minutes: None,
                total_seconds: Some(240),
            };
            let json = serde_json::to_string(&plan).unwrap();
            assert!(!json.contains("minutes"));
            assert!(json.contains("\"workSeconds\":20"));
            assert!(json.contains("\"restSeconds\":10"));
            assert!(json.contains("\"rounds\":8"));
        }
    }
}
