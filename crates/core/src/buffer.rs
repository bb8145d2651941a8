//! PCM waveform buffer

use crate::{CoreError, Result};

/// Mono signed 16-bit PCM samples tagged with their sample rate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Waveform {
    samples: Vec<i16>,
    sample_rate: u32,
}

impl Waveform {
    /// Create an empty waveform
    pub fn new(sample_rate: u32) -> Result<Self> {
        Self::from_samples(Vec::new(), sample_rate)
    }

    /// Create a waveform from existing samples
    pub fn from_samples(samples: Vec<i16>, sample_rate: u32) -> Result<Self> {
        if sample_rate == 0 {
            return Err(CoreError::InvalidSampleRate {
                rate: sample_rate as f64,
            });
        }

        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Reserve room for at least `additional` more samples
    pub fn with_capacity(mut self, additional: usize) -> Self {
        self.samples.reserve(additional);
        self
    }

    /// Get the sample rate
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Get the number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the waveform holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Playback length in seconds
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Get a reference to the underlying samples
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Append a segment to the end of the waveform
    pub fn extend_from_slice(&mut self, segment: &[i16]) {
        self.samples.extend_from_slice(segment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waveform_creation() {
        let waveform = Waveform::new(44100).unwrap();
        assert!(waveform.is_empty());
        assert_eq!(waveform.sample_rate(), 44100);
    }

    #[test]
    fn test_invalid_sample_rate() {
        assert!(Waveform::new(0).is_err());
        assert!(Waveform::from_samples(vec![1, 2, 3], 0).is_err());
    }

    #[test]
    fn test_extend_and_duration() {
        let mut waveform = Waveform::new(8).unwrap().with_capacity(16);
        waveform.extend_from_slice(&[1, 2, 3, 4]);
        waveform.extend_from_slice(&[5, 6, 7, 8]);
        assert_eq!(waveform.len(), 8);
        assert!((waveform.duration_secs() - 1.0).abs() < 1e-12);
        assert_eq!(waveform.samples(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
