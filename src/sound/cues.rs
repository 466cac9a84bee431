//! Audio cue dispatch.
//!
//! The controller never talks to a sound backend directly. It asks a
//! [`CuePlayer`] for a cue, and [`AudioCues`] forwards the matching sound to
//! a worker thread that owns the backend. A missing or failing backend only
//! produces log lines.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use crossbeam_channel::Sender;
use tracing::{debug, warn};

use super::source::{default_assets_dir, Sound};
use super::{try_create_player, SoundPlayer};

/// An audio cue requested by the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Countdown beep with the seconds left in the interval
    Countdown(u64),
    /// Interval change into work (`true`) or rest (`false`)
    Interval { is_work: bool },
    /// Workout complete
    Finish,
}

impl Cue {
    /// Returns the sound played for this cue.
    #[must_use]
    pub fn sound(&self) -> Sound {
        match self {
            Self::Countdown(_) => Sound::Beep,
            Self::Interval { .. } | Self::Finish => Sound::Chime,
        }
    }
}

/// Plays timer cues.
///
/// Every method is fire-and-forget. Implementations must ignore requests
/// while disabled.
pub trait CuePlayer {
    /// Plays the countdown beep.
    fn play_countdown(&self, seconds_remaining: u64);

    /// Plays the interval change chime.
    fn play_interval(&self, is_work: bool);

    /// Plays the completion chime.
    fn play_finish(&self);

    /// Enables or disables all cues.
    fn set_enabled(&self, enabled: bool);

    /// Returns true if cues are enabled.
    fn is_enabled(&self) -> bool;

    /// Flips the enabled flag and returns the new state.
    fn toggle(&self) -> bool {
        let enabled = !self.is_enabled();
        self.set_enabled(enabled);
        enabled
    }
}

/// Cue player backed by a dedicated audio worker thread.
pub struct AudioCues {
    enabled: Arc<AtomicBool>,
    tx: Option<Sender<Sound>>,
    worker: Option<JoinHandle<()>>,
}

impl AudioCues {
    /// Starts the audio worker with the best available backend.
    ///
    /// Sound assets for command-line players go to [`default_assets_dir`].
    #[must_use]
    pub fn spawn(enabled: bool) -> Self {
        Self::spawn_with_assets(enabled, default_assets_dir())
    }

    /// Starts the audio worker, writing sound assets to `assets_dir` when an
    /// external player is selected.
    #[must_use]
    pub fn spawn_with_assets(enabled: bool, assets_dir: PathBuf) -> Self {
        Self::start(enabled, move || try_create_player(&assets_dir))
    }

    /// Starts the audio worker with an explicit backend.
    #[must_use]
    pub fn with_player<P>(player: P, enabled: bool) -> Self
    where
        P: SoundPlayer + Send + 'static,
    {
        Self::start(enabled, move || {
            Some(Box::new(player) as Box<dyn SoundPlayer>)
        })
    }

    /// Creates a cue player without any backend.
    #[must_use]
    pub fn silent(enabled: bool) -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(enabled)),
            tx: None,
            worker: None,
        }
    }

    fn start<F>(enabled: bool, make_player: F) -> Self
    where
        F: FnOnce() -> Option<Box<dyn SoundPlayer>> + Send + 'static,
    {
        let enabled = Arc::new(AtomicBool::new(enabled));
        let flag = Arc::clone(&enabled);
        let (tx, rx) = crossbeam_channel::unbounded::<Sound>();

        // rodio's output stream is not Send, so the backend is built here.
        let spawned = std::thread::Builder::new()
            .name("gymtimer-audio".to_string())
            .spawn(move || {
                let player = make_player();
                if let Some(player) = &player {
                    debug!("Audio worker started with backend: {}", player.backend());
                }

                for sound in rx.iter() {
                    if !flag.load(Ordering::SeqCst) {
                        continue;
                    }
                    let Some(player) = &player else {
                        continue;
                    };
                    if let Err(e) = player.play(sound) {
                        warn!("Failed to play {}: {} ({})", sound.name(), e, e.suggestion());
                    }
                }

                debug!("Audio worker stopped");
            });

        match spawned {
            Ok(worker) => Self {
                enabled,
                tx: Some(tx),
                worker: Some(worker),
            },
            Err(e) => {
                warn!("Failed to start audio worker: {}", e);
                Self {
                    enabled,
                    tx: None,
                    worker: None,
                }
            }
        }
    }

    fn send(&self, sound: Sound) {
        if !self.is_enabled() {
            return;
        }
        if let Some(tx) = &self.tx {
            if tx.send(sound).is_err() {
                debug!("Audio worker gone, dropping {}", sound.name());
            }
        }
    }
}

impl CuePlayer for AudioCues {
    fn play_countdown(&self, seconds_remaining: u64) {
        self.send(Cue::Countdown(seconds_remaining).sound());
    }

    fn play_interval(&self, is_work: bool) {
        self.send(Cue::Interval { is_work }.sound());
    }

    fn play_finish(&self) {
        self.send(Cue::Finish.sound());
    }

    fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
        debug!("Sound {}", if enabled { "enabled" } else { "disabled" });
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

impl Drop for AudioCues {
    fn drop(&mut self) {
        // Closing the channel ends the worker loop.
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("Audio worker panicked");
            }
        }
    }
}

impl std::fmt::Debug for AudioCues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioCues")
            .field("enabled", &self.is_enabled())
            .field("worker", &self.worker.is_some())
            .finish()
    }
}

/// Mock cue player for testing.
#[derive(Debug)]
pub struct MockCuePlayer {
    cues: Mutex<Vec<Cue>>,
    enabled: AtomicBool,
}

impl Default for MockCuePlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCuePlayer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cues: Mutex::new(Vec::new()),
            enabled: AtomicBool::new(true),
        }
    }

    /// Returns every cue recorded while enabled.
    #[must_use]
    pub fn cues(&self) -> Vec<Cue> {
        self.cues.lock().map(|cues| cues.clone()).unwrap_or_default()
    }

    /// Returns only the countdown values.
    #[must_use]
    pub fn countdowns(&self) -> Vec<u64> {
        self.cues()
            .into_iter()
            .filter_map(|cue| match cue {
                Cue::Countdown(seconds) => Some(seconds),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        if let Ok(mut cues) = self.cues.lock() {
            cues.clear();
        }
    }

    fn record(&self, cue: Cue) {
        if !self.is_enabled() {
            return;
        }
        if let Ok(mut cues) = self.cues.lock() {
            cues.push(cue);
        }
    }
}

impl CuePlayer for MockCuePlayer {
    fn play_countdown(&self, seconds_remaining: u64) {
        self.record(Cue::Countdown(seconds_remaining));
    }

    fn play_interval(&self, is_work: bool) {
        self.record(Cue::Interval { is_work });
    }

    fn play_finish(&self) {
        self.record(Cue::Finish);
    }

    fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}
