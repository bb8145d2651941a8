//! wavetext - encode text into FSK audio and decode it back
//!
//! This is the main entry point for wavetext operations

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

use wavetext_codecs::prelude::*;
use wavetext_modem::prelude::DecodeReport;
use wavetext_tools::{
    init_logging, is_missing_file, load_fsk_config, prompt_message, Receiver, RxConfig,
    Transmitter, TxConfig,
};

/// wavetext FSK audio codec tool
#[derive(Parser)]
#[command(name = "wavetext")]
#[command(about = "Encode text into FSK audio and decode it back")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a message into a WAV file
    Encode(TxConfig),
    /// Decode a message from a WAV file
    Decode(RxConfig),
    /// Show configuration and scramble methods
    Info {
        /// Codec configuration file (TOML or JSON)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn encode(config: TxConfig) -> Result<()> {
    let message = match &config.text {
        Some(text) => text.clone(),
        None => prompt_message(io::stdin().lock(), io::stdout())?,
    };

    let start = Instant::now();
    let transmitter = Transmitter::new(config.clone())?;
    let transmission = transmitter.transmit_to_file(&message)?;
    info!("Transmission generated in {:?}", start.elapsed());

    println!("Encoded Binary Data: {}", transmission.bitstream);
    println!(
        "✓ {} samples ({:.2} s) written to {:?}",
        transmission.waveform.len(),
        transmission.waveform.duration_secs(),
        config.output
    );
    Ok(())
}

fn print_report(report: &DecodeReport) {
    println!("\nSample Rate: {}", report.sample_rate);
    println!("Data Length: {} samples, {} windows", report.sample_count, report.window_count);
    println!("Window: {} ms", report.window_ms);
    println!("\nCollected Data: {:?}", report.groups);
    println!("\nCode Points: {:?}", report.code_points);
    if !report.unclassified_windows.is_empty() {
        println!("\nDropped Windows: {:?}", report.unclassified_windows);
    }
}

fn decode(config: RxConfig, verbose: bool) -> Result<()> {
    info!("Starting reception from {:?}", config.input);

    let mut receiver = Receiver::new(config)?;
    let report = match receiver.receive() {
        Ok(report) => report,
        Err(e) if is_missing_file(&e) => {
            eprintln!("No audio file found. Please run encode first.");
            std::process::exit(1);
        }
        Err(e) => return Err(e),
    };

    if verbose {
        print_report(&report);
    }
    println!("Decoded Message: \n\n{}", report.message);
    Ok(())
}

fn show_info(config: Option<PathBuf>) -> Result<()> {
    let fsk = load_fsk_config(config.as_deref())?;

    println!("\n=== wavetext FSK codec ===");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));

    println!("\n=== Configuration ===");
    print!("{}", toml::to_string_pretty(&fsk)?);

    println!("\n=== Scramble Methods ===");
    for method in ScrambleMethod::all() {
        println!("  • {:<8} - {}", method.name(), method.description());
    }

    println!("\n=== Example Usage ===");
    println!("  Encode: wavetext encode -t \"Hello\" -o output.wav");
    println!("  Decode: wavetext decode -i output.wav --verbose");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.debug);

    match cli.command {
        Commands::Encode(config) => encode(config),
        Commands::Decode(config) => decode(config, cli.verbose),
        Commands::Info { config } => show_info(config),
    }
}
