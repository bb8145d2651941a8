//! Error types for wavetext modem

use thiserror::Error;

/// Modem error types
#[derive(Error, Debug)]
pub enum ModemError {
    #[error("Invalid symbol {symbol:?} at position {position} of the bitstream")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("Unclassified frequency {frequency} Hz in window {window}")]
    UnclassifiedFrequency { window: usize, frequency: f64 },

    #[error("Invalid modulation parameters: {msg}")]
    InvalidParameters { msg: String },

    #[error("Codec error: {0}")]
    Codec(#[from] wavetext_codecs::CodecError),

    #[error("Core error: {0}")]
    Core(#[from] wavetext_core::CoreError),
}

/// Result type for wavetext modem operations
pub type Result<T> = std::result::Result<T, ModemError>;
