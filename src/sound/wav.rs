//! WAV synthesis for the cue sounds.
//!
//! Both cues are rendered as 16-bit little-endian mono PCM at 44.1kHz with
//! a standard 44-byte RIFF header.
//!
//! - Beep: 150ms, 880Hz sine with a linear attack/release envelope
//! - Chime: 500ms crossfade from C5 to G4 with an exponential decay

use std::f64::consts::PI;

/// Sample rate of every generated sound.
pub const SAMPLE_RATE: u32 = 44_100;

/// Size of the RIFF/WAVE/fmt/data header.
pub const HEADER_LEN: usize = 44;

const BITS_PER_SAMPLE: u16 = 16;
const BLOCK_ALIGN: u16 = 2;

/// Builds the 44-byte header for `num_samples` mono 16-bit samples.
pub fn wav_header(sample_rate: u32, num_samples: usize) -> [u8; HEADER_LEN] {
    let data_size = u32::try_from(num_samples * usize::from(BLOCK_ALIGN)).unwrap_or(u32::MAX);
    let file_size = data_size.saturating_add(36);
    let byte_rate = sample_rate * u32::from(BLOCK_ALIGN);

    let mut header = [0u8; HEADER_LEN];
    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&file_size.to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");
    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes());
    header[20..22].copy_from_slice(&1u16.to_le_bytes()); // PCM
    header[22..24].copy_from_slice(&1u16.to_le_bytes()); // mono
    header[24..28].copy_from_slice(&sample_rate.to_le_bytes());
    header[28..32].copy_from_slice(&byte_rate.to_le_bytes());
    header[32..34].copy_from_slice(&BLOCK_ALIGN.to_le_bytes());
    header[34..36].copy_from_slice(&BITS_PER_SAMPLE.to_le_bytes());
    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_size.to_le_bytes());
    header
}

/// Generates the short countdown beep.
pub fn beep() -> Vec<u8> {
    tone(SAMPLE_RATE, 0.15, 880.0, 0.5)
}

/// Generates the two-tone chime used for interval changes and completion.
pub fn chime() -> Vec<u8> {
    const C5: f64 = 523.25;
    const G4: f64 = 392.00;
    const AMPLITUDE: f64 = 0.4;

    let rate = f64::from(SAMPLE_RATE);
    let num_samples = sample_count(SAMPLE_RATE, 0.5);
    let attack = (SAMPLE_RATE / 50) as usize;

    encode(
        SAMPLE_RATE,
        (0..num_samples).map(|i| {
            let t = i as f64 / rate;
            let progress = i as f64 / num_samples as f64;

            let envelope = if i < attack {
                i as f64 / attack as f64
            } else {
                let decay = (i - attack) as f64 / (num_samples - attack) as f64;
                (-3.0 * decay).exp()
            };

            let blend = (1.0 - progress) * (2.0 * PI * C5 * t).sin()
                + progress * (2.0 * PI * G4 * t).sin();
            AMPLITUDE * envelope * blend
        }),
    )
}

/// Generates a single sine tone with a click-free envelope.
fn tone(sample_rate: u32, seconds: f64, frequency: f64, amplitude: f64) -> Vec<u8> {
    let rate = f64::from(sample_rate);
    let num_samples = sample_count(sample_rate, seconds);
    let attack = (sample_rate / 100) as usize; // 10ms
    let release = (sample_rate / 50) as usize; // 20ms

    encode(
        sample_rate,
        (0..num_samples).map(|i| {
            let t = i as f64 / rate;
            let envelope = if i < attack {
                i as f64 / attack as f64
            } else if i > num_samples.saturating_sub(release) {
                (num_samples - i) as f64 / release as f64
            } else {
                1.0
            };
            amplitude * envelope * (2.0 * PI * frequency * t).sin()
        }),
    )
}

fn sample_count(sample_rate: u32, seconds: f64) -> usize {
    (f64::from(sample_rate) * seconds) as usize
}

/// Serializes samples in `[-1.0, 1.0]` after a WAV header.
fn encode(sample_rate: u32, samples: impl ExactSizeIterator<Item = f64>) -> Vec<u8> {
    let num_samples = samples.len();
    let mut out = Vec::with_capacity(HEADER_LEN + num_samples * usize::from(BLOCK_ALIGN));
    out.extend_from_slice(&wav_header(sample_rate, num_samples));
    for sample in samples {
        let value = (sample.clamp(-1.0, 1.0) * f64::from(i16::MAX)) as i16;
        out.extend_from_slice(&value.to_le_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_u32(data: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ])
    }

    fn read_u16(data: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes([data[offset], data[offset + 1]])
    }

    #[test]
    fn test_header_layout() {
        let header = wav_header(SAMPLE_RATE, 100);

        assert_eq!(&header[0..4], b"RIFF");
        assert_eq!(read_u32(&header, 4), 36 + 200);
        assert_eq!(&header[8..12], b"WAVE");
        assert_eq!(&header[12..16], b"fmt ");
        assert_eq!(read_u32(&header, 16), 16);
        assert_eq!(read_u16(&header, 20), 1);
        assert_eq!(read_u16(&header, 22), 1);
        assert_eq!(read_u32(&header, 24), 44_100);
        assert_eq!(read_u32(&header, 28), 88_200);
        assert_eq!(read_u16(&header, 32), 2);
        assert_eq!(read_u16(&header, 34), 16);
        assert_eq!(&header[36..40], b"data");
        assert_eq!(read_u32(&header, 40), 200);
    }

    #[test]
    fn test_beep_length() {
        let data = beep();
        let samples = (44_100.0 * 0.15) as usize;
        assert_eq!(data.len(), HEADER_LEN + samples * 2);
        assert_eq!(read_u32(&data, 40) as usize, samples * 2);
    }

    #[test]
    fn test_chime_length() {
        let data = chime();
        assert_eq!(data.len(), HEADER_LEN + 22_050 * 2);
    }

    #[test]
    fn test_beep_starts_and_ends_silent() {
        let data = beep();
        let first = i16::from_le_bytes([data[HEADER_LEN], data[HEADER_LEN + 1]]);
        let last = i16::from_le_bytes([data[data.len() - 2], data[data.len() - 1]]);
        assert_eq!(first, 0);
        assert!(last.abs() < 200, "last sample too loud: {}", last);
    }

    #[test]
    fn test_beep_peak_respects_amplitude() {
        let data = beep();
        let peak = data[HEADER_LEN..]
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]).unsigned_abs())
            .max()
            .unwrap();
        assert!(peak > 15_000);
        assert!(peak <= 16_384);
    }
}
