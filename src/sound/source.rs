//! Sound source management.
//!
//! This module names the cue sounds, provides their synthesized WAV data
//! and writes them to disk for players that need a file path.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::SoundError;
use super::wav;

/// A sound the timer can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    /// Short beep for the 3-2-1 countdown
    Beep,
    /// Two-tone chime for interval changes and completion
    Chime,
}

impl Sound {
    /// Every sound, in asset-writing order.
    pub const ALL: [Sound; 2] = [Sound::Beep, Sound::Chime];

    /// Returns the name of the sound.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Beep => "beep",
            Self::Chime => "chime",
        }
    }

    /// Returns the asset file name.
    #[must_use]
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Beep => "beep.wav",
            Self::Chime => "chime.wav",
        }
    }

    /// Synthesizes the WAV data for this sound.
    #[must_use]
    pub fn wav_data(&self) -> Vec<u8> {
        match self {
            Self::Beep => wav::beep(),
            Self::Chime => wav::chime(),
        }
    }
}

/// Returns the directory generated sound assets are written to.
///
/// Falls back to the system temp directory when no cache directory exists.
#[must_use]
pub fn default_assets_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("gymtimer")
}

/// Writes every sound into `dir`, creating it if needed.
///
/// Returns the written paths in [`Sound::ALL`] order.
///
/// # Errors
///
/// Returns `SoundError::Io` if the directory or a file cannot be written.
pub fn write_assets(dir: &Path) -> Result<Vec<PathBuf>, SoundError> {
    std::fs::create_dir_all(dir).map_err(|source| SoundError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    Sound::ALL
        .iter()
        .map(|sound| {
            let path = dir.join(sound.file_name());
            std::fs::write(&path, sound.wav_data()).map_err(|source| SoundError::Io {
                path: path.clone(),
                source,
            })?;
            debug!("Wrote sound asset: {}", path.display());
            Ok(path)
        })
        .collect()
}
