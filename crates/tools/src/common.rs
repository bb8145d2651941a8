//! Common utilities and configuration for tools

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use std::path::Path;
use wavetext_modem::common::FskConfig;

/// Prompt shown when no message is given on the command line
pub const MESSAGE_PROMPT: &str = "Enter a message to encode: ";

/// Tracing level for the global verbosity flags
pub fn log_level(verbose: bool, debug: bool) -> tracing::Level {
    if debug {
        tracing::Level::DEBUG
    } else if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    }
}

/// Initialize the fmt subscriber once per process
pub fn init_logging(verbose: bool, debug: bool) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(verbose, debug))
        .with_target(false)
        .init();
}

/// Load configuration from file
pub fn load_config<T: for<'a> Deserialize<'a>>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    // Try JSON first, then TOML
    if let Ok(config) = serde_json::from_str(&content) {
        return Ok(config);
    }

    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("Failed to parse config file {:?}: {}", path, e),
    }
}

/// Save configuration to file
pub fn save_config<T: Serialize>(config: &T, path: &Path) -> Result<()> {
    let content = if path.extension().and_then(|s| s.to_str()) == Some("json") {
        serde_json::to_string_pretty(config)?
    } else {
        toml::to_string_pretty(config)?
    };

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;
    Ok(())
}

/// Codec configuration from `path`, or the defaults
pub fn load_fsk_config(path: Option<&Path>) -> Result<FskConfig> {
    let config = match path {
        Some(path) => load_config::<FskConfig>(path)?,
        None => FskConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Ask for a message on `output` and read one line from `input`
pub fn prompt_message<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<String> {
    write!(output, "{}", MESSAGE_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read message")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
