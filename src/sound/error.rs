//! Sound system error types.
//!
//! This module defines the error types for the sound playback system.
//! None of these errors ever reach the timer: the cue dispatcher logs them
//! and keeps going.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the sound playback system.
#[derive(Debug, Error)]
pub enum SoundError {
    /// Audio device is not available (e.g., no sound server running).
    #[error("audio device not available: {0}")]
    DeviceNotAvailable(String),

    /// No external command-line player was found on `PATH`.
    #[error("no sound player found on PATH (tried {0})")]
    PlayerNotFound(String),

    /// A generated sound asset could not be written.
    #[error("failed to write sound asset {}", path.display())]
    Io {
        /// Asset path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to decode the audio data.
    #[error("failed to decode sound: {0}")]
    DecodeError(String),

    /// Failed to create the audio output stream.
    #[error("failed to create audio stream: {0}")]
    StreamError(String),

    /// Generic sound playback error.
    #[error("sound playback error: {0}")]
    PlaybackError(String),
}

impl SoundError {
    /// Returns true if this error is related to device availability.
    #[must_use]
    pub fn is_device_error(&self) -> bool {
        matches!(
            self,
            Self::DeviceNotAvailable(_) | Self::StreamError(_) | Self::PlayerNotFound(_)
        )
    }

    /// Returns a user-friendly suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::DeviceNotAvailable(_) | Self::StreamError(_) => {
                "check that an audio output device is available"
            }
            Self::PlayerNotFound(_) => "install pulseaudio-utils (paplay) or alsa-utils (aplay)",
            Self::Io { .. } => "check permissions of the cache directory",
            Self::DecodeError(_) => "the sound data may be corrupted",
            Self::PlaybackError(_) => "restart the application",
        }
    }
}
