//! Waveform to message decoder
//!
//! The decoder walks the channel-0 samples of a recording in fixed windows,
//! reads the dominant frequency of each window and classifies it as silence,
//! a '0' bit or a '1' bit. Bits accumulate into a group until silence closes
//! it. A separator lasts two windows, so the window after a closing silence
//! is skipped.

use crate::common::DecoderConfig;
use crate::{ModemError, Result};
use tracing::{debug, info, warn};
use wavetext_codecs::scramble::{assemble_message, code_points};
use wavetext_core::fft::SpectralSegmenter;

/// Classification of one analysis window
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowClass {
    Silence,
    Bit(char),
    /// Exactly at the threshold; carries no bit
    Unclassified,
}

/// Diagnostics gathered during a decode
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeReport {
    pub message: String,
    pub groups: Vec<String>,
    pub code_points: Vec<u32>,
    pub sample_rate: u32,
    pub sample_count: usize,
    pub window_count: usize,
    pub window_ms: f64,
    /// Windows dropped for sitting exactly on the threshold
    pub unclassified_windows: Vec<usize>,
}

/// Spectral FSK decoder
pub struct WaveformDecoder {
    config: DecoderConfig,
    segmenter: SpectralSegmenter,
}

impl WaveformDecoder {
    /// Create a new decoder
    pub fn new(config: DecoderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            segmenter: SpectralSegmenter::new(),
        })
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Classify a dominant frequency
    pub fn classify(&self, frequency: f64) -> WindowClass {
        if frequency == 0.0 {
            WindowClass::Silence
        } else if frequency < self.config.threshold_hz {
            WindowClass::Bit('0')
        } else if frequency > self.config.threshold_hz {
            WindowClass::Bit('1')
        } else {
            WindowClass::Unclassified
        }
    }

    /// Number of whole windows in `sample_count` samples
    pub fn window_count(&self, sample_count: usize, sample_rate: u32) -> usize {
        let per_window = self.config.samples_per_window(sample_rate);
        (sample_count as f64 / per_window).floor() as usize
    }

    /// Decode channel-0 samples into the transmitted message
    pub fn decode(&mut self, samples: &[i16], sample_rate: u32) -> Result<String> {
        Ok(self.decode_with_report(samples, sample_rate)?.message)
    }

    /// Decode and keep the intermediate results
    pub fn decode_with_report(&mut self, samples: &[i16], sample_rate: u32) -> Result<DecodeReport> {
        let window_count = self.window_count(samples.len(), sample_rate);
        let (groups, unclassified_windows) = self.collect_groups(samples, sample_rate, window_count)?;

        let code_points = code_points(groups.as_slice())?;
        let message = assemble_message(groups.as_slice())?;

        info!(
            "Decoded {} group(s) from {} windows of {} ms",
            groups.len(),
            window_count,
            self.config.window_ms
        );

        Ok(DecodeReport {
            message,
            groups,
            code_points,
            sample_rate,
            sample_count: samples.len(),
            window_count,
            window_ms: self.config.window_ms,
            unclassified_windows,
        })
    }

    fn collect_groups(
        &mut self,
        samples: &[i16],
        sample_rate: u32,
        window_count: usize,
    ) -> Result<(Vec<String>, Vec<usize>)> {
        let window_ms = self.config.window_ms;
        let mut groups = Vec::new();
        let mut bits = String::new();
        let mut unclassified = Vec::new();
        let mut skip_next_window = false;

        for window in 0..window_count {
            if skip_next_window {
                skip_next_window = false;
                continue;
            }

            let start_ms = window as f64 * window_ms;
            let frequency =
                self.segmenter
                    .dominant_frequency(samples, sample_rate, start_ms, start_ms + window_ms)?;

            match self.classify(frequency) {
                WindowClass::Silence => {
                    if !bits.is_empty() {
                        debug!("Window {}: group {} closed by silence", window, bits);
                        groups.push(std::mem::take(&mut bits));
                        skip_next_window = true;
                    }
                }
                WindowClass::Bit(bit) => bits.push(bit),
                WindowClass::Unclassified => {
                    if self.config.strict {
                        return Err(ModemError::UnclassifiedFrequency { window, frequency });
                    }
                    warn!("Window {}: {} Hz is on the threshold, dropped", window, frequency);
                    unclassified.push(window);
                }
            }
        }

        // Streams end without a trailing separator
        if !bits.is_empty() {
            debug!("Final group {}", bits);
            groups.push(bits);
        }

        Ok((groups, unclassified))
    }
}
