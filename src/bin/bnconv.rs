//! Convert between Bijoy and Unicode Bengali
//!
//! Reads FILE (or stdin) and writes the converted text to stdout.
//!
//! Usage:
//!   bnconv --direction legacy_to_logical input.txt
//!   echo 'Avwg' | bnconv
//!   echo '{"text":"আমি"}' | bnconv --json --direction logical_to_legacy
//!   bnconv --health
//!
//! Set RUST_LOG=trace to see every pipeline stage.

use bijoy_oxide::config::ConverterConfig;
use bijoy_oxide::converter::{ConversionDirection, Converter};
use bijoy_oxide::detect::detect_encoding;
use bijoy_oxide::wire::{TextRequest, TextResponse};
use bijoy_oxide::{Error, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "bnconv")]
#[command(about = "Convert Bengali text between Bijoy and Unicode")]
#[command(version)]
struct Cli {
    /// legacy_to_logical, logical_to_legacy, or auto
    #[arg(short, long, default_value = "auto")]
    direction: String,

    /// Read a {"text": ...} request and write a {"text": ...} response
    #[arg(long)]
    json: bool,

    /// Print the liveness payload and exit
    #[arg(long)]
    health: bool,

    /// Largest conjunct, in consonants, treated as one cluster
    #[arg(long)]
    max_conjunct: Option<usize>,

    /// Input file; stdin when omitted
    file: Option<PathBuf>,
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        },
    }
}

fn resolve_direction(name: &str, text: &str) -> Result<ConversionDirection> {
    if name.eq_ignore_ascii_case("auto") {
        let encoding = detect_encoding(text).ok_or(Error::UndetectedEncoding)?;
        log::info!("Input looks like {}", encoding);
        Ok(encoding.conversion_direction())
    } else {
        name.parse()
    }
}

fn run(cli: &Cli) -> Result<String> {
    if cli.health {
        return Ok(serde_json::to_string(&TextResponse::health())?);
    }

    let input = read_input(cli.file.as_ref())?;
    let text = if cli.json {
        serde_json::from_str::<TextRequest>(&input)?.text
    } else {
        input
    };

    let direction = resolve_direction(&cli.direction, &text)?;
    let mut config = ConverterConfig::new().with_trace_stages(log::log_enabled!(log::Level::Trace));
    if let Some(max) = cli.max_conjunct {
        config = config.with_max_conjunct_consonants(max);
    }

    let output = Converter::with_config(config).convert(&text, direction);
    if cli.json {
        Ok(serde_json::to_string(&TextResponse { text: output })?)
    } else {
        Ok(output)
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()) {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
