//! wavetext Tools library

pub mod tx;
pub mod rx;
pub mod common;

pub use tx::{TxConfig, Transmitter, Transmission};
pub use rx::{RxConfig, Receiver, is_missing_file};
pub use common::{init_logging, load_config, load_fsk_config, prompt_message, save_config};
