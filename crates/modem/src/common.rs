//! Shared symbol definitions and configuration

use crate::{ModemError, Result};
use serde::{Deserialize, Serialize};

/// Transmitted symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Zero,
    One,
    Silence,
}

impl Symbol {
    /// Symbol for a bitstream character
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Symbol::Zero),
            '1' => Some(Symbol::One),
            ' ' => Some(Symbol::Silence),
            _ => None,
        }
    }

    /// Tone frequency in Hz under `config`
    pub fn frequency(&self, config: &FskConfig) -> f64 {
        match self {
            Symbol::Zero => config.zero_frequency,
            Symbol::One => config.one_frequency,
            Symbol::Silence => 0.0,
        }
    }

    /// Duration in seconds under `config`
    pub fn duration(&self, config: &FskConfig) -> f64 {
        match self {
            Symbol::Zero | Symbol::One => config.bit_duration,
            Symbol::Silence => config.silence_duration,
        }
    }
}

/// Decoder window and classification settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Analysis window length in milliseconds
    pub window_ms: f64,
    /// Frequencies below read as '0', above as '1'
    pub threshold_hz: f64,
    /// Fail on a frequency exactly at the threshold instead of dropping the window
    pub strict: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            // Half the 250 ms bit: the channel-0 view of a written file runs at half length
            window_ms: 250.0 / 2.0,
            threshold_hz: 100.0,
            strict: false,
        }
    }
}

impl DecoderConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.window_ms > 0.0) {
            return Err(ModemError::InvalidParameters {
                msg: format!("Invalid window length: {} ms", self.window_ms),
            });
        }
        if !(self.threshold_hz > 0.0) {
            return Err(ModemError::InvalidParameters {
                msg: format!("Invalid classification threshold: {} Hz", self.threshold_hz),
            });
        }
        Ok(())
    }

    /// Samples covered by one window at `sample_rate`
    pub fn samples_per_window(&self, sample_rate: u32) -> f64 {
        sample_rate as f64 * self.window_ms / 1000.0
    }
}

/// FSK codec configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FskConfig {
    pub sample_rate: u32,
    /// Tone for '0' bits in Hz
    pub zero_frequency: f64,
    /// Tone for '1' bits in Hz
    pub one_frequency: f64,
    /// Seconds per bit symbol
    pub bit_duration: f64,
    /// Seconds per group separator
    pub silence_duration: f64,
    pub decoder: DecoderConfig,
}

impl Default for FskConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            zero_frequency: 36.0,
            one_frequency: 196.0,
            bit_duration: 0.25,
            silence_duration: 0.5,
            decoder: DecoderConfig::default(),
        }
    }
}

impl FskConfig {
    /// Check the configuration for values the codec cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(ModemError::InvalidParameters {
                msg: "Sample rate must be positive".to_string(),
            });
        }

        for (name, value) in [
            ("zero", self.zero_frequency),
            ("one", self.one_frequency),
        ] {
            if !(value >= 0.0) || !value.is_finite() {
                return Err(ModemError::InvalidParameters {
                    msg: format!("Invalid {} frequency: {}", name, value),
                });
            }
        }

        for (name, value) in [
            ("bit", self.bit_duration),
            ("silence", self.silence_duration),
        ] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(ModemError::InvalidParameters {
                    msg: format!("Invalid {} duration: {}", name, value),
                });
            }
        }

        self.decoder.validate()?;
        self.validate_timing()
    }

    /// Symbol lengths must line up with the decoder's windows.
    ///
    /// The channel-0 view of a written file holds every other sample, so a
    /// bit must last exactly two decoder windows there, and a separator a
    /// whole number of bits, at least two.
    fn validate_timing(&self) -> Result<()> {
        let bit_len = self.whole_samples("bit", self.bit_duration)?;
        let silence_len = self.whole_samples("silence", self.silence_duration)?;

        if silence_len < 2 * bit_len || silence_len % bit_len != 0 {
            return Err(ModemError::InvalidParameters {
                msg: format!(
                    "Separator of {} samples must be a multiple (at least 2x) of the {}-sample bit",
                    silence_len, bit_len
                ),
            });
        }

        let window = self.decoder.samples_per_window(self.sample_rate);
        if (2.0 * window - bit_len as f64).abs() > 1e-9 {
            return Err(ModemError::InvalidParameters {
                msg: format!(
                    "Decoder window of {} ms must be half the {} s bit",
                    self.decoder.window_ms, self.bit_duration
                ),
            });
        }

        // Tones read back at twice their frequency
        let threshold = self.decoder.threshold_hz;
        if !(self.zero_frequency > 0.0
            && 2.0 * self.zero_frequency < threshold
            && 2.0 * self.one_frequency > threshold)
        {
            return Err(ModemError::InvalidParameters {
                msg: format!(
                    "Tones {} Hz and {} Hz read back on the wrong side of the {} Hz threshold",
                    self.zero_frequency, self.one_frequency, threshold
                ),
            });
        }

        Ok(())
    }

    /// Sample count of `duration`, which must not need rounding
    fn whole_samples(&self, name: &str, duration: f64) -> Result<usize> {
        let exact = self.sample_rate as f64 * duration;
        if (exact - exact.round()).abs() > 1e-9 || exact.round() < 1.0 {
            return Err(ModemError::InvalidParameters {
                msg: format!(
                    "{} duration {} s is not a whole number of samples at {} Hz ({})",
                    name, duration, self.sample_rate, exact
                ),
            });
        }
        Ok(exact.round() as usize)
    }

    /// Samples produced for one `symbol`
    pub fn symbol_len(&self, symbol: Symbol) -> usize {
        (self.sample_rate as f64 * symbol.duration(self)).round() as usize
    }
}
