//! wavetext Core - PCM buffers, tone synthesis and spectral analysis
//!
//! This crate provides the DSP building blocks shared by the wavetext
//! encoder and decoder: a mono PCM waveform type, a sine tone synthesizer,
//! an FFT-based dominant-frequency detector and WAV container I/O.

pub mod buffer;
pub mod fft;
pub mod tone;
pub mod wav;
pub mod error;

pub use error::{CoreError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        buffer::Waveform,
        fft::SpectralSegmenter,
        tone::ToneSynthesizer,
        wav::{read_samples, write_waveform, ContainerSpec},
        error::{CoreError, Result},
    };
}
