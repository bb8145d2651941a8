//! Error types for wavetext codecs

use thiserror::Error;

/// Codec error types
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Unsupported scramble method: {name}")]
    UnsupportedScrambler { name: String },

    #[error("Malformed bit group #{index}: {group:?}")]
    MalformedBitGroup { index: usize, group: String },
}

/// Result type for wavetext codec operations
pub type Result<T> = std::result::Result<T, CodecError>;
