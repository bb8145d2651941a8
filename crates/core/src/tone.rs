//! Sine tone synthesis

use std::f64::consts::PI;

/// Peak amplitude of a synthesized tone
pub const FULL_SCALE: f64 = i16::MAX as f64;

/// Generates fixed-duration mono PCM segments
#[derive(Debug, Clone, Copy)]
pub struct ToneSynthesizer {
    sample_rate: u32,
}

impl ToneSynthesizer {
    /// Create a synthesizer for the given sample rate
    pub fn new(sample_rate: u32) -> Self {
        debug_assert!(sample_rate > 0, "sample rate must be positive");
        Self { sample_rate }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples a segment of `duration` seconds occupies
    pub fn segment_len(&self, duration: f64) -> usize {
        (self.sample_rate as f64 * duration).round() as usize
    }

    /// Generate `duration` seconds of a sine at `frequency` Hz.
    ///
    /// A frequency of zero yields silence. Every segment starts at phase zero.
    pub fn generate(&self, frequency: f64, duration: f64) -> Vec<i16> {
        debug_assert!(frequency >= 0.0, "frequency must not be negative");
        debug_assert!(duration > 0.0, "duration must be positive");

        let omega = 2.0 * PI * frequency / self.sample_rate as f64;
        (0..self.segment_len(duration))
            .map(|n| {
                let value = (FULL_SCALE * (omega * n as f64).sin()).round();
                value.clamp(i16::MIN as f64, i16::MAX as f64) as i16
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_silence_is_all_zero() {
        let synth = ToneSynthesizer::new(44100);
        let segment = synth.generate(0.0, 0.5);
        assert_eq!(segment.len(), 22050);
        assert!(segment.iter().all(|&s| s == 0));
    }

    #[test]
    fn test_segment_length_rounds() {
        let synth = ToneSynthesizer::new(44100);
        assert_eq!(synth.generate(36.0, 0.25).len(), 11025);
        assert_eq!(ToneSynthesizer::new(10).segment_len(0.26), 3);
    }

    #[test]
    fn test_quarter_period_hits_full_scale() {
        // 1 Hz at 4 samples/s: 0, +peak, 0, -peak
        let synth = ToneSynthesizer::new(4);
        assert_eq!(synth.generate(1.0, 1.0), vec![0, 32767, 0, -32767]);
    }

    #[quickcheck]
    fn prop_magnitude_within_full_scale(frequency: u16, tenths: u8) -> bool {
        let duration = (tenths % 10 + 1) as f64 / 100.0;
        let synth = ToneSynthesizer::new(8000);
        synth
            .generate(frequency as f64, duration)
            .iter()
            .all(|&s| (s as i32).abs() <= 32767)
    }
}
