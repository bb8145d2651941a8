//! WAV container I/O
//!
//! Waveforms are written under a two-channel header while the body holds the
//! mono samples in order, so the container sees consecutive samples as
//! (left, right) frames. Reading returns channel 0 only. Existing recordings
//! depend on this layout: at the declared rate each bit of the channel-0 view
//! spans 125 ms and tones read at twice their synthesized frequency.

use crate::buffer::Waveform;
use crate::{CoreError, Result};
use std::io::{ErrorKind, Read, Seek, Write};
use std::path::Path;
use tracing::{info, warn};

/// Header channel count written for every waveform
pub const CONTAINER_CHANNELS: u16 = 2;

/// Bits per PCM sample
pub const BITS_PER_SAMPLE: u16 = 16;

/// Header fields of a waveform container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerSpec {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
}

impl ContainerSpec {
    /// Header for a waveform at `sample_rate`
    pub fn for_rate(sample_rate: u32) -> Self {
        Self {
            channels: CONTAINER_CHANNELS,
            sample_rate,
            bits_per_sample: BITS_PER_SAMPLE,
        }
    }

    /// Sample width in bytes
    pub fn sample_width(&self) -> u16 {
        self.bits_per_sample / 8
    }
}

impl From<ContainerSpec> for hound::WavSpec {
    fn from(spec: ContainerSpec) -> Self {
        hound::WavSpec {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            sample_format: hound::SampleFormat::Int,
        }
    }
}

/// Write `waveform` to any seekable sink
pub fn write_to<W: Write + Seek>(writer: W, waveform: &Waveform) -> Result<ContainerSpec> {
    let spec = ContainerSpec::for_rate(waveform.sample_rate());
    let mut wav = hound::WavWriter::new(writer, spec.into())?;

    for &sample in waveform.samples() {
        wav.write_sample(sample)?;
    }

    // Frames must be complete
    let remainder = waveform.len() % spec.channels as usize;
    if remainder != 0 {
        warn!(
            "Padding {} sample(s) to complete the last frame",
            spec.channels as usize - remainder
        );
        for _ in remainder..spec.channels as usize {
            wav.write_sample(0i16)?;
        }
    }

    wav.finalize()?;
    Ok(spec)
}

/// Write `waveform` to a WAV file at `path`
pub fn write_waveform<P: AsRef<Path>>(path: P, waveform: &Waveform) -> Result<ContainerSpec> {
    let path = path.as_ref();
    let file = std::io::BufWriter::new(std::fs::File::create(path)?);
    let spec = write_to(file, waveform)?;
    info!("Wrote {} samples to {:?}", waveform.len(), path);
    Ok(spec)
}

/// Read channel 0 of a 16-bit integer PCM stream.
///
/// Returns the declared sample rate and the channel-0 samples.
pub fn read_from<R: Read>(reader: R) -> Result<(u32, Vec<i16>)> {
    let mut wav = hound::WavReader::new(reader)?;
    let spec = wav.spec();

    if spec.sample_format != hound::SampleFormat::Int || spec.bits_per_sample != BITS_PER_SAMPLE {
        return Err(CoreError::UnsupportedContainer {
            msg: format!(
                "expected 16-bit integer PCM, got {}-bit {:?}",
                spec.bits_per_sample, spec.sample_format
            ),
        });
    }
    if spec.channels == 0 {
        return Err(CoreError::UnsupportedContainer {
            msg: "container declares zero channels".to_string(),
        });
    }

    let channels = spec.channels as usize;
    let mut first_channel = Vec::with_capacity(wav.len() as usize / channels);
    for (i, sample) in wav.samples::<i16>().enumerate() {
        let sample = sample?;
        if i % channels == 0 {
            first_channel.push(sample);
        }
    }

    Ok((spec.sample_rate, first_channel))
}

/// Read channel 0 of the WAV file at `path`
pub fn read_samples<P: AsRef<Path>>(path: P) -> Result<(u32, Vec<i16>)> {
    let path = path.as_ref();
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(CoreError::MissingFile {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    let (sample_rate, samples) = read_from(std::io::BufReader::new(file))?;
    info!("Read {} samples from {:?}", samples.len(), path);
    Ok((sample_rate, samples))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn round_trip(waveform: &Waveform) -> (u32, Vec<i16>) {
        let mut cursor = Cursor::new(Vec::new());
        write_to(&mut cursor, waveform).unwrap();
        cursor.set_position(0);
        read_from(cursor).unwrap()
    }

    #[test]
    fn test_header_fields() {
        let spec = ContainerSpec::for_rate(44100);
        assert_eq!(spec.channels, 2);
        assert_eq!(spec.sample_width(), 2);

        let wav: hound::WavSpec = spec.into();
        assert_eq!(wav.sample_format, hound::SampleFormat::Int);
        assert_eq!(wav.sample_rate, 44100);
    }

    #[test]
    fn test_reader_returns_first_channel() {
        let waveform = Waveform::from_samples(vec![10, -10, 20, -20, 30, -30], 44100).unwrap();
        let (rate, samples) = round_trip(&waveform);
        assert_eq!(rate, 44100);
        assert_eq!(samples, vec![10, 20, 30]);
    }

    #[test]
    fn test_odd_length_is_padded() {
        let waveform = Waveform::from_samples(vec![1, 2, 3], 8000).unwrap();
        let (rate, samples) = round_trip(&waveform);
        assert_eq!(rate, 8000);
        assert_eq!(samples, vec![1, 3]);
    }

    #[test]
    fn test_missing_file() {
        let err = read_samples("/nonexistent/dir/wavetext-missing.wav").unwrap_err();
        assert!(matches!(err, CoreError::MissingFile { .. }));
    }

    #[test]
    fn test_rejects_float_container() {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
            writer.write_sample(0.5f32).unwrap();
            writer.finalize().unwrap();
        }
        cursor.set_position(0);

        let err = read_from(cursor).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedContainer { .. }));
    }
}
