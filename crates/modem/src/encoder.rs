//! Bitstream to waveform encoder

use crate::common::{FskConfig, Symbol};
use crate::{ModemError, Result};
use tracing::debug;
use wavetext_core::buffer::Waveform;
use wavetext_core::tone::ToneSynthesizer;

/// Maps bitstream text to concatenated tone segments.
///
/// The three symbol segments are synthesized once at construction.
pub struct WaveformEncoder {
    config: FskConfig,
    zero: Vec<i16>,
    one: Vec<i16>,
    silence: Vec<i16>,
}

impl WaveformEncoder {
    /// Create an encoder and precompute its symbol segments
    pub fn new(config: FskConfig) -> Result<Self> {
        config.validate()?;

        let synth = ToneSynthesizer::new(config.sample_rate);
        let render = |symbol: Symbol| synth.generate(symbol.frequency(&config), symbol.duration(&config));
        let zero = render(Symbol::Zero);
        let one = render(Symbol::One);
        let silence = render(Symbol::Silence);

        debug!(
            "Symbol table: '0' {} Hz x{}, '1' {} Hz x{}, ' ' x{}",
            config.zero_frequency,
            zero.len(),
            config.one_frequency,
            one.len(),
            silence.len()
        );

        Ok(Self {
            config,
            zero,
            one,
            silence,
        })
    }

    pub fn config(&self) -> &FskConfig {
        &self.config
    }

    /// Precomputed samples for `symbol`
    pub fn segment(&self, symbol: Symbol) -> &[i16] {
        match symbol {
            Symbol::Zero => &self.zero,
            Symbol::One => &self.one,
            Symbol::Silence => &self.silence,
        }
    }

    /// Parse bitstream text into symbols
    pub fn symbols(bitstream: &str) -> Result<Vec<Symbol>> {
        bitstream
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                Symbol::from_char(symbol).ok_or(ModemError::InvalidSymbol { symbol, position })
            })
            .collect()
    }

    /// Number of samples `encode` will produce for `bitstream`
    pub fn expected_len(&self, bitstream: &str) -> Result<usize> {
        Ok(Self::symbols(bitstream)?
            .iter()
            .map(|&s| self.segment(s).len())
            .sum())
    }

    /// Encode bitstream text into a waveform.
    ///
    /// Every character is validated before any sample is produced.
    pub fn encode(&self, bitstream: &str) -> Result<Waveform> {
        let symbols = Self::symbols(bitstream)?;
        let total: usize = symbols.iter().map(|&s| self.segment(s).len()).sum();

        let mut waveform = Waveform::new(self.config.sample_rate)?.with_capacity(total);
        for symbol in symbols {
            waveform.extend_from_slice(self.segment(symbol));
        }

        debug!(
            "Encoded {} symbols into {} samples ({:.2} s)",
            bitstream.len(),
            waveform.len(),
            waveform.duration_secs()
        );
        Ok(waveform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn small_config() -> FskConfig {
        FskConfig {
            sample_rate: 800,
            ..FskConfig::default()
        }
    }

    #[test]
    fn test_encoder_creation() {
        let encoder = WaveformEncoder::new(FskConfig::default()).unwrap();
        assert_eq!(encoder.segment(Symbol::Zero).len(), 11025);
        assert_eq!(encoder.segment(Symbol::One).len(), 11025);
        assert_eq!(encoder.segment(Symbol::Silence).len(), 22050);
        assert!(encoder.segment(Symbol::Silence).iter().all(|&s| s == 0));
    }

    #[test]
    fn test_encode_preserves_order() {
        let encoder = WaveformEncoder::new(small_config()).unwrap();
        let waveform = encoder.encode("10 0").unwrap();

        let one = encoder.segment(Symbol::One);
        let zero = encoder.segment(Symbol::Zero);
        let silence = encoder.segment(Symbol::Silence);
        let expected: Vec<i16> = [one, zero, silence, zero].concat();

        assert_eq!(waveform.samples(), expected.as_slice());
        assert_eq!(waveform.sample_rate(), 800);
    }

    #[test]
    fn test_hi_sample_count() {
        let encoder = WaveformEncoder::new(FskConfig::default()).unwrap();
        let waveform = encoder.encode("01001000 01101001").unwrap();
        // 16 bits of 0.25 s plus one 0.5 s separator
        assert_eq!(waveform.len(), 16 * 11025 + 22050);
        assert_eq!(waveform.len(), 198450);
    }

    #[test]
    fn test_invalid_symbol() {
        let encoder = WaveformEncoder::new(small_config()).unwrap();
        match encoder.encode("0102") {
            Err(ModemError::InvalidSymbol { symbol, position }) => {
                assert_eq!(symbol, '2');
                assert_eq!(position, 3);
            }
            other => panic!("expected InvalidSymbol, got {:?}", other.map(|w| w.len())),
        }
    }

    #[test]
    fn test_empty_bitstream() {
        let encoder = WaveformEncoder::new(small_config()).unwrap();
        assert!(encoder.encode("").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = FskConfig {
            silence_duration: -0.5,
            ..FskConfig::default()
        };
        assert!(WaveformEncoder::new(config).is_err());
    }

    #[quickcheck]
    fn prop_length_is_sum_of_durations(bits: Vec<u8>) -> bool {
        let config = small_config();
        let encoder = WaveformEncoder::new(config.clone()).unwrap();
        let bitstream: String = bits.iter().map(|b| ['0', '1', ' '][(*b % 3) as usize]).collect();

        let expected: f64 = bitstream
            .chars()
            .map(|c| Symbol::from_char(c).unwrap().duration(&config) * config.sample_rate as f64)
            .sum();

        let waveform = encoder.encode(&bitstream).unwrap();
        waveform.len() == expected.round() as usize
            && encoder.expected_len(&bitstream).unwrap() == waveform.len()
    }
}
