//! Sound player implementation using rodio.
//!
//! This module provides the `RodioSoundPlayer` which uses the rodio v0.20
//! audio library for in-process playback of the synthesized cues.

use std::io::Cursor;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use tracing::debug;

use super::error::SoundError;
use super::source::Sound;

/// A sound player that uses rodio for audio playback.
///
/// The output stream is not `Send`; create the player on the thread that
/// plays the sounds. Playback is non-blocking.
pub struct RodioSoundPlayer {
    /// The audio output stream (must be kept alive for playback).
    _stream: OutputStream,
    /// Handle to the output stream for creating sinks.
    stream_handle: OutputStreamHandle,
    beep: Vec<u8>,
    chime: Vec<u8>,
}

impl RodioSoundPlayer {
    /// Opens the default output device and synthesizes the cues.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::DeviceNotAvailable` if no audio output device
    /// is available.
    pub fn new() -> Result<Self, SoundError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;

        debug!("Audio output stream initialized");

        Ok(Self {
            _stream: stream,
            stream_handle,
            beep: Sound::Beep.wav_data(),
            chime: Sound::Chime.wav_data(),
        })
    }

    /// Plays a cue on a detached sink.
    ///
    /// # Errors
    ///
    /// Returns an error if the WAV data cannot be decoded or no sink can be
    /// created.
    pub fn play(&self, sound: Sound) -> Result<(), SoundError> {
        let data = match sound {
            Sound::Beep => self.beep.clone(),
            Sound::Chime => self.chime.clone(),
        };

        let decoder = Decoder::new(Cursor::new(data))
            .map_err(|e| SoundError::DecodeError(format!("{}: {}", sound.name(), e)))?;

        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| SoundError::StreamError(e.to_string()))?;

        sink.append(decoder);
        sink.detach(); // Non-blocking: sound continues after function returns

        debug!("Sound playback started: {}", sound.name());
        Ok(())
    }
}

impl std::fmt::Debug for RodioSoundPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioSoundPlayer").finish_non_exhaustive()
    }
}
