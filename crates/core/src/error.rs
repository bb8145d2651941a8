//! Error types for wavetext core

use std::path::PathBuf;
use thiserror::Error;

/// Core error types
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid sample rate: {rate}")]
    InvalidSampleRate { rate: f64 },

    #[error("Audio file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("Unsupported container: {msg}")]
    UnsupportedContainer { msg: String },

    #[error("FFT error: {msg}")]
    FftError { msg: String },

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for wavetext core operations
pub type Result<T> = std::result::Result<T, CoreError>;
