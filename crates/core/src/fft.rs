//! Real FFT wrapper for dominant-frequency detection

use crate::{CoreError, Result};
use realfft::num_complex::Complex64;
use realfft::RealFftPlanner;

/// Sample index range covered by `[start_ms, end_ms]` (end inclusive),
/// clamped to `len`.
pub fn window_bounds(len: usize, sample_rate: u32, start_ms: f64, end_ms: f64) -> (usize, usize) {
    let rate = sample_rate as f64;
    let start = (start_ms * rate / 1000.0).floor().max(0.0) as usize;
    let end = (end_ms * rate / 1000.0).floor().max(-1.0) as isize + 1;
    let end = (end.max(0) as usize).min(len);
    (start.min(end), end)
}

/// Convert bin index to frequency in Hz for an `n`-point transform
pub fn bin_to_frequency(bin: usize, n: usize, sample_rate: u32) -> f64 {
    bin as f64 * sample_rate as f64 / n as f64
}

/// Finds the strongest frequency in a time window of a PCM buffer.
///
/// Plans are cached by the planner, so reusing one segmenter across the
/// windows of a decode avoids replanning for every call.
pub struct SpectralSegmenter {
    planner: RealFftPlanner<f64>,
    input: Vec<f64>,
    spectrum: Vec<Complex64>,
}

impl SpectralSegmenter {
    pub fn new() -> Self {
        Self {
            planner: RealFftPlanner::new(),
            input: Vec::new(),
            spectrum: Vec::new(),
        }
    }

    /// Dominant frequency of `samples[start_ms..=end_ms]` in Hz.
    ///
    /// An empty window reads as silence (0 Hz). Equal peak magnitudes
    /// resolve to the lowest bin.
    pub fn dominant_frequency(
        &mut self,
        samples: &[i16],
        sample_rate: u32,
        start_ms: f64,
        end_ms: f64,
    ) -> Result<f64> {
        if sample_rate == 0 {
            return Err(CoreError::InvalidSampleRate { rate: 0.0 });
        }

        let (start, end) = window_bounds(samples.len(), sample_rate, start_ms, end_ms);
        let window = &samples[start..end];
        if window.is_empty() {
            return Ok(0.0);
        }

        let n = window.len();
        let r2c = self.planner.plan_fft_forward(n);

        self.input.clear();
        self.input.extend(window.iter().map(|&s| s as f64));
        self.spectrum.clear();
        self.spectrum.resize(n / 2 + 1, Complex64::new(0.0, 0.0));

        r2c.process(&mut self.input, &mut self.spectrum)
            .map_err(|e| CoreError::FftError { msg: e.to_string() })?;

        let mut peak_bin = 0;
        let mut peak = f64::NEG_INFINITY;
        for (bin, value) in self.spectrum.iter().enumerate() {
            let magnitude = value.norm();
            if magnitude > peak {
                peak = magnitude;
                peak_bin = bin;
            }
        }

        Ok(bin_to_frequency(peak_bin, n, sample_rate))
    }
}

impl Default for SpectralSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tone::ToneSynthesizer;

    #[test]
    fn test_window_bounds_inclusive_end() {
        // 125 ms at 44100 Hz covers 5512.5 samples; the end index is inclusive
        assert_eq!(window_bounds(100_000, 44100, 0.0, 125.0), (0, 5513));
        assert_eq!(window_bounds(100_000, 44100, 125.0, 250.0), (5512, 11026));
    }

    #[test]
    fn test_window_bounds_clamped() {
        assert_eq!(window_bounds(100, 1000, 50.0, 500.0), (50, 100));
        assert_eq!(window_bounds(100, 1000, 200.0, 300.0), (100, 100));
    }

    #[test]
    fn test_empty_window_is_silence() {
        let mut segmenter = SpectralSegmenter::new();
        let freq = segmenter.dominant_frequency(&[], 44100, 0.0, 125.0).unwrap();
        assert_eq!(freq, 0.0);
    }

    #[test]
    fn test_all_zero_window_is_dc() {
        let mut segmenter = SpectralSegmenter::new();
        let silence = vec![0i16; 4096];
        let freq = segmenter.dominant_frequency(&silence, 44100, 0.0, 50.0).unwrap();
        assert_eq!(freq, 0.0);
    }

    #[test]
    fn test_pure_tone_within_one_bin() {
        let synth = ToneSynthesizer::new(44100);
        let mut segmenter = SpectralSegmenter::new();

        for &f in &[36.0, 196.0, 440.0] {
            let tone = synth.generate(f, 0.25);
            let (start, end) = window_bounds(tone.len(), 44100, 0.0, 250.0);
            let bin_width = 44100.0 / (end - start) as f64;

            let detected = segmenter.dominant_frequency(&tone, 44100, 0.0, 250.0).unwrap();
            assert!(
                (detected - f).abs() <= bin_width,
                "expected ~{} Hz, got {} Hz",
                f,
                detected
            );
        }
    }

    #[test]
    fn test_rejects_zero_sample_rate() {
        let mut segmenter = SpectralSegmenter::new();
        assert!(segmenter.dominant_frequency(&[1, 2, 3], 0, 0.0, 1.0).is_err());
    }
}
