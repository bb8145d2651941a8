//! Receiver configuration and implementation

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

use wavetext_core::prelude::*;
use wavetext_modem::prelude::*;

use crate::common::load_fsk_config;

/// Receiver configuration
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(about = "Decode a message from a WAV file")]
pub struct RxConfig {
    /// Input file path (WAV)
    #[arg(short, long, default_value = "output.wav")]
    pub input: PathBuf,

    /// Output file path (decoded text)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fail on windows exactly at the classification threshold
    #[arg(long)]
    pub strict: bool,

    /// Codec configuration file (TOML or JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Default for RxConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("output.wav"),
            output: None,
            strict: false,
            config: None,
        }
    }
}

/// wavetext receiver
pub struct Receiver {
    config: RxConfig,
    decoder: WaveformDecoder,
}

impl Receiver {
    /// Create a new receiver, loading the codec configuration if one is given
    pub fn new(config: RxConfig) -> Result<Self> {
        let fsk = load_fsk_config(config.config.as_deref())?;
        Self::with_fsk_config(config, fsk)
    }

    /// Create a new receiver with an explicit codec configuration
    pub fn with_fsk_config(config: RxConfig, fsk: FskConfig) -> Result<Self> {
        let mut decoder_config = fsk.decoder;
        decoder_config.strict |= config.strict;
        let decoder = WaveformDecoder::new(decoder_config)?;

        Ok(Self { config, decoder })
    }

    /// Decode channel-0 samples
    pub fn receive_samples(&mut self, samples: &[i16], sample_rate: u32) -> Result<DecodeReport> {
        info!("Processing {} samples at {} Hz", samples.len(), sample_rate);
        Ok(self.decoder.decode_with_report(samples, sample_rate)?)
    }

    /// Read the configured input file and decode it, writing the text out if asked
    pub fn receive(&mut self) -> Result<DecodeReport> {
        let (sample_rate, samples) = read_samples(&self.config.input)
            .with_context(|| format!("Failed to read WAV file: {:?}", self.config.input))?;

        let report = self.receive_samples(&samples, sample_rate)?;

        if let Some(output) = &self.config.output {
            std::fs::write(output, &report.message)
                .with_context(|| format!("Failed to write decoded text: {:?}", output))?;
            info!("Decoded text written to {:?}", output);
        }

        Ok(report)
    }
}

/// True when `error` was caused by a missing input file
pub fn is_missing_file(error: &anyhow::Error) -> bool {
    error
        .chain()
        .any(|cause| matches!(cause.downcast_ref::<CoreError>(), Some(CoreError::MissingFile { .. })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::{Transmitter, TxConfig};
    use tempfile::tempdir;

    #[test]
    fn test_rx_config_default() {
        let config = RxConfig::default();
        assert_eq!(config.input, PathBuf::from("output.wav"));
        assert!(config.output.is_none());
        assert!(!config.strict);
    }

    #[test]
    fn test_missing_input_file() {
        let dir = tempdir().unwrap();
        let config = RxConfig {
            input: dir.path().join("missing.wav"),
            ..RxConfig::default()
        };

        let mut receiver = Receiver::new(config).unwrap();
        let err = receiver.receive().unwrap_err();
        assert!(is_missing_file(&err));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempdir().unwrap();
        let wav = dir.path().join("hello.wav");
        let text = dir.path().join("hello.txt");

        let transmitter = Transmitter::new(TxConfig {
            output: wav.clone(),
            ..TxConfig::default()
        })
        .unwrap();
        transmitter.transmit_to_file("Hello").unwrap();

        let mut receiver = Receiver::new(RxConfig {
            input: wav,
            output: Some(text.clone()),
            ..RxConfig::default()
        })
        .unwrap();
        let report = receiver.receive().unwrap();

        assert_eq!(report.message, "Hello");
        assert_eq!(report.code_points, vec![72, 101, 108, 108, 111]);
        assert_eq!(report.sample_rate, 44100);
        assert_eq!(std::fs::read_to_string(&text).unwrap(), "Hello");
    }

    #[test]
    fn test_strict_flag_overrides_config() {
        let receiver = Receiver::with_fsk_config(
            RxConfig {
                strict: true,
                ..RxConfig::default()
            },
            FskConfig::default(),
        )
        .unwrap();
        assert!(receiver.decoder.config().strict);
    }
}
