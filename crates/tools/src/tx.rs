//! Transmitter configuration and implementation

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

use wavetext_codecs::prelude::*;
use wavetext_core::prelude::*;
use wavetext_modem::prelude::*;

use crate::common::load_fsk_config;

/// Transmitter configuration
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(about = "Encode a message into a WAV file")]
pub struct TxConfig {
    /// Output file path (WAV)
    #[arg(short, long, default_value = "output.wav")]
    pub output: PathBuf,

    /// Message to encode; prompted for on stdin when omitted
    #[arg(short, long)]
    pub text: Option<String>,

    /// Scramble method turning text into a bitstream
    #[arg(long, default_value = "direct")]
    pub scramble: ScrambleMethod,

    /// Codec configuration file (TOML or JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Default for TxConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("output.wav"),
            text: None,
            scramble: ScrambleMethod::Direct,
            config: None,
        }
    }
}

/// Result of encoding one message
#[derive(Debug, Clone)]
pub struct Transmission {
    pub bitstream: String,
    pub waveform: Waveform,
}

/// wavetext transmitter
pub struct Transmitter {
    config: TxConfig,
    scrambler: Box<dyn Scrambler>,
    encoder: WaveformEncoder,
}

impl Transmitter {
    /// Create a new transmitter, loading the codec configuration if one is given
    pub fn new(config: TxConfig) -> Result<Self> {
        let fsk = load_fsk_config(config.config.as_deref())?;
        Self::with_fsk_config(config, fsk)
    }

    /// Create a new transmitter with an explicit codec configuration
    pub fn with_fsk_config(config: TxConfig, fsk: FskConfig) -> Result<Self> {
        let scrambler = config.scramble.build();
        let encoder = WaveformEncoder::new(fsk)?;

        Ok(Self {
            config,
            scrambler,
            encoder,
        })
    }

    pub fn fsk_config(&self) -> &FskConfig {
        self.encoder.config()
    }

    /// Scramble and encode `message`
    pub fn transmit(&self, message: &str) -> Result<Transmission> {
        if message.is_empty() {
            anyhow::bail!("Input error: message must not be empty");
        }

        let bitstream = self.scrambler.scramble(message)?;
        info!(
            "Scrambled {} characters with {} into {} symbols",
            message.chars().count(),
            self.scrambler.name(),
            bitstream.len()
        );

        let waveform = self.encoder.encode(&bitstream)?;
        info!(
            "Generated {} samples ({:.2} s)",
            waveform.len(),
            waveform.duration_secs()
        );

        Ok(Transmission {
            bitstream,
            waveform,
        })
    }

    /// Encode `message` and write it to the configured output file.
    ///
    /// Nothing is written unless the whole waveform was produced.
    pub fn transmit_to_file(&self, message: &str) -> Result<Transmission> {
        let transmission = self.transmit(message)?;
        write_waveform(&self.config.output, &transmission.waveform)
            .with_context(|| format!("Failed to write WAV file: {:?}", self.config.output))?;
        Ok(transmission)
    }
}
