// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use ints2der::{decode_sequence_with, drain, run, walk_sequence, DerError, LengthMode, PipelineOptions};

mod cli;
use cli::{display, Cli, Commands};

/// Environment variable naming the log level explicitly (overrides `-v`)
const LOG_ENV: &str = "INTS2DER_LOG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        None => run_encode(false),
        Some(Commands::Encode { parallel }) => run_encode(parallel),
        Some(Commands::Inspect { file, lenient }) => run_inspect(file.as_deref(), lenient),
        Some(Commands::Decode { file, lenient }) => run_decode(file.as_deref(), lenient),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; stdout carries nothing but output bytes.
fn init_tracing(verbosity: u8) {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|v| v.parse::<Level>().ok())
        .unwrap_or(match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        });

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .finish();

    // Only fails if a subscriber is already installed
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn run_encode(parallel: bool) -> Result<()> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let written = run(stdin, stdout, PipelineOptions { parallel })
        .context("Failed to encode stdin to stdout")?;
    info!(bytes = written, parallel, "encode finished");
    Ok(())
}

fn read_der(file: Option<&Path>) -> Result<Vec<u8>> {
    match file {
        Some(path) => {
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => drain(io::stdin().lock()).context("Failed to read stdin"),
    }
}

fn length_mode(lenient: bool) -> LengthMode {
    if lenient {
        LengthMode::Lenient
    } else {
        LengthMode::Strict
    }
}

/// Decode `bytes`, showing where it broke before handing the error up.
fn decode_or_report(bytes: &[u8], mode: LengthMode) -> Result<Vec<i64>> {
    decode_sequence_with(bytes, mode)
        .map_err(|e: DerError| {
            display::print_error_location(bytes, &e);
            e
        })
        .context("Input is not a DER SEQUENCE OF INTEGER")
}

fn run_inspect(file: Option<&Path>, lenient: bool) -> Result<()> {
    let bytes = read_der(file)?;
    let mode = length_mode(lenient);
    debug!(bytes = bytes.len(), ?mode, "inspecting");

    let values = decode_or_report(&bytes, mode)?;
    // Structure is valid once decoding succeeded
    let records = walk_sequence(&bytes, mode).context("Failed to walk SEQUENCE")?;

    let mut stdout = io::stdout().lock();
    display::print_inspect(&mut stdout, &bytes, &records, &values)
        .context("Failed to write to stdout")?;
    write_json(&mut stdout, &values)
}

fn run_decode(file: Option<&Path>, lenient: bool) -> Result<()> {
    let bytes = read_der(file)?;
    let values = decode_or_report(&bytes, length_mode(lenient))?;
    write_json(&mut io::stdout().lock(), &values)
}

/// One JSON array line; a closed stdout surfaces as an error, not a panic.
fn write_json<W: Write>(out: &mut W, values: &[i64]) -> Result<()> {
    let line = serde_json::to_string(values)?;
    writeln!(out, "{}", line).context("Failed to write to stdout")?;
    out.flush().context("Failed to flush stdout")
}
