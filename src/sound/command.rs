//! Sound playback through an external command-line player.
//!
//! Used when no in-process audio device can be opened. The cues are written
//! to an assets directory once, then handed to `paplay` or `aplay`.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use super::error::SoundError;
use super::source::{write_assets, Sound};

/// Known players with their extra arguments, in order of preference.
const KNOWN_PLAYERS: &[(&str, &[&str])] = &[("paplay", &[]), ("aplay", &["-q"])];

/// Plays cues by spawning an external player process.
#[derive(Debug, Clone)]
pub struct CommandSoundPlayer {
    program: PathBuf,
    args: Vec<String>,
    assets_dir: PathBuf,
}

impl CommandSoundPlayer {
    /// Finds the first known player on `PATH` and prepares the assets.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::PlayerNotFound` if no known player is installed,
    /// or `SoundError::Io` if the assets cannot be written.
    pub fn detect(assets_dir: impl Into<PathBuf>) -> Result<Self, SoundError> {
        let (program, args) = KNOWN_PLAYERS
            .iter()
            .find_map(|(name, args)| find_in_path(name).map(|path| (path, *args)))
            .ok_or_else(|| {
                let names: Vec<&str> = KNOWN_PLAYERS.iter().map(|(name, _)| *name).collect();
                SoundError::PlayerNotFound(names.join(", "))
            })?;

        Self::new(program, args.iter().map(|a| a.to_string()).collect(), assets_dir)
    }

    /// Creates a player for an explicit program and writes the assets.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::Io` if the assets cannot be written.
    pub fn new(
        program: impl Into<PathBuf>,
        args: Vec<String>,
        assets_dir: impl Into<PathBuf>,
    ) -> Result<Self, SoundError> {
        let assets_dir = assets_dir.into();
        write_assets(&assets_dir)?;

        let program = program.into();
        debug!("Using external sound player: {}", program.display());

        Ok(Self {
            program,
            args,
            assets_dir,
        })
    }

    /// Returns the player executable.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Returns the path handed to the player for `sound`.
    #[must_use]
    pub fn asset_path(&self, sound: Sound) -> PathBuf {
        self.assets_dir.join(sound.file_name())
    }

    /// Spawns the player without waiting for it to finish.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::PlaybackError` if the process cannot be spawned.
    pub fn play(&self, sound: Sound) -> Result<(), SoundError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(self.asset_path(sound))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| SoundError::PlaybackError(format!("{}: {}", self.program.display(), e)))?;

        // Reap in the background so finished players do not linger as zombies.
        std::thread::spawn(move || {
            let _ = child.wait();
        });

        debug!("Spawned {} for {}", self.program.display(), sound.name());
        Ok(())
    }
}

/// Searches `PATH` for an executable named `name`.
pub fn find_in_path(name: &str) -> Option<PathBuf> {
    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}
