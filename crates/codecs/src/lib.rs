//! wavetext Codecs - message scrambling for the FSK waveform codec
//!
//! A scrambler turns a message into the textual bitstream the waveform
//! encoder consumes; `assemble_message` performs the reverse step on the
//! bit groups recovered by the decoder.

pub mod scramble;
pub mod error;

pub use error::{CodecError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        scramble::{assemble_message, DirectBinaryScrambler, ScrambleMethod, Scrambler},
        error::{CodecError, Result},
    };
}
