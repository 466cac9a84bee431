//! Sound playback system for the workout timer.
//!
//! This module provides the audio cues, including:
//!
//! - Synthesized beep and chime sounds
//! - In-process playback through rodio
//! - Fallback playback through `paplay` / `aplay`
//! - Graceful degradation when audio is unavailable
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │    AudioCues     │ ← Used by the controller (CuePlayer)
//! └────────┬─────────┘
//!          │ channel
//!          ▼
//! ┌──────────────────┐     ┌──────────────────┐
//! │   audio worker   │────▶│ RodioSoundPlayer │
//! │                  │     ├──────────────────┤
//! │                  │────▶│CommandSoundPlayer│
//! │                  │     ├──────────────────┤
//! │                  │────▶│     silent       │
//! └──────────────────┘     └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use gymtimer::sound::{AudioCues, CuePlayer};
//!
//! let cues = AudioCues::spawn(true);
//! cues.play_countdown(3);
//! cues.play_interval(true);
//! ```

mod command;
mod cues;
mod error;
mod player;
mod source;
mod wav;

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

pub use command::{find_in_path, CommandSoundPlayer};
pub use cues::{AudioCues, Cue, CuePlayer, MockCuePlayer};
pub use error::SoundError;
pub use player::RodioSoundPlayer;
pub use source::{default_assets_dir, write_assets, Sound};
pub use wav::{beep, chime, wav_header, HEADER_LEN, SAMPLE_RATE};

/// Trait for sound playback implementations.
///
/// This trait abstracts the sound playback functionality, allowing for
/// different implementations (e.g., rodio-based, external command, mock).
pub trait SoundPlayer {
    /// Plays a sound.
    ///
    /// This method should be non-blocking; the sound plays in the background.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails.
    fn play(&self, sound: Sound) -> Result<(), SoundError>;

    /// Returns a short name of the backend, used in logs.
    fn backend(&self) -> &str;
}

impl SoundPlayer for RodioSoundPlayer {
    fn play(&self, sound: Sound) -> Result<(), SoundError> {
        RodioSoundPlayer::play(self, sound)
    }

    fn backend(&self) -> &str {
        "rodio"
    }
}

impl SoundPlayer for CommandSoundPlayer {
    fn play(&self, sound: Sound) -> Result<(), SoundError> {
        CommandSoundPlayer::play(self, sound)
    }

    fn backend(&self) -> &str {
        self.program()
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("command")
    }
}

impl<P: SoundPlayer + ?Sized> SoundPlayer for Arc<P> {
    fn play(&self, sound: Sound) -> Result<(), SoundError> {
        (**self).play(sound)
    }

    fn backend(&self) -> &str {
        (**self).backend()
    }
}

impl<P: SoundPlayer + ?Sized> SoundPlayer for Box<P> {
    fn play(&self, sound: Sound) -> Result<(), SoundError> {
        (**self).play(sound)
    }

    fn backend(&self) -> &str {
        (**self).backend()
    }
}

/// Tries to create a sound player, returning None if audio is unavailable.
///
/// rodio is tried first, then an external command player that reads its
/// assets from `assets_dir`. Errors are logged as warnings.
pub fn try_create_player(assets_dir: &Path) -> Option<Box<dyn SoundPlayer>> {
    match RodioSoundPlayer::new() {
        Ok(player) => {
            debug!("Sound backend: rodio");
            return Some(Box::new(player));
        }
        Err(e) => {
            debug!("rodio unavailable: {}", e);
        }
    }

    match CommandSoundPlayer::detect(assets_dir) {
        Ok(player) => {
            debug!("Sound backend: {}", player.program().display());
            Some(Box::new(player))
        }
        Err(e) => {
            warn!("Audio unavailable, cues will be silent: {}", e);
            None
        }
    }
}

/// Mock sound player for testing.
#[derive(Debug, Default)]
pub struct MockSoundPlayer {
    play_calls: Mutex<Vec<Sound>>,
    should_fail: AtomicBool,
}

impl MockSoundPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn get_play_calls(&self) -> Vec<Sound> {
        self.play_calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl SoundPlayer for MockSoundPlayer {
    fn play(&self, sound: Sound) -> Result<(), SoundError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        if let Ok(mut calls) = self.play_calls.lock() {
            calls.push(sound);
        }
        Ok(())
    }

    fn backend(&self) -> &str {
        "mock"
    }
}
