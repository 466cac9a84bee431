//! gymtimer library
//!
//! This library provides the core functionality of the gymtimer CLI.
//! It includes:
//! - Timer engines for Clock, EMOM, Tabata, AMRAP, Custom and Stopwatch
//! - The application controller and terminal loop
//! - Terminal rendering
//! - Audio cues (synthesized WAV, rodio and external players)
//! - CLI command parsing and display utilities
//! - Type definitions for modes, settings and workout plans

pub mod app;
pub mod cli;
pub mod sound;
pub mod timer;
pub mod types;
pub mod ui;

// Re-export commonly used types for convenience
pub use types::{Mode, Phase, SettingField, WorkoutConfig, WorkoutPlan};

pub use timer::{Stopwatch, Timer, TimerEvent};

pub use app::{Action, AppController, AppStatus, KeyMap};

pub use sound::{
    AudioCues, Cue, CuePlayer, MockCuePlayer, MockSoundPlayer, Sound, SoundError, SoundPlayer,
};

pub use ui::Theme;
