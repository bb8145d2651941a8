//! wavetext Modem - FSK waveform encoding and decoding
//!
//! Bits become fixed-length sine tones, group separators become silence,
//! and the decoder recovers them by classifying the dominant frequency of
//! fixed-size analysis windows.

pub mod common;
pub mod encoder;
pub mod decoder;
pub mod error;

pub use error::{ModemError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        common::{DecoderConfig, FskConfig, Symbol},
        encoder::WaveformEncoder,
        decoder::{DecodeReport, WaveformDecoder, WindowClass},
        error::{ModemError, Result},
    };
}
