// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the ints2der command-line interface.
//!
//! With no subcommand the binary does exactly one thing: JSON array on stdin,
//! DER on stdout, exit 0. The subcommands are for people poking at the
//! output: `inspect` draws the TLV structure, `decode` turns DER back into
//! JSON.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ints2der",
    about = "Encode a JSON array of integers as a DER SEQUENCE OF INTEGER",
    version
)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read a JSON array from stdin and write DER to stdout (the default)
    Encode {
        /// Encode elements on a thread pool; output is identical
        #[arg(long)]
        parallel: bool,
    },

    /// Show the TLV structure of a DER SEQUENCE OF INTEGER
    Inspect {
        /// DER file to read (stdin when omitted)
        file: Option<PathBuf>,

        /// Accept non-minimal length octets
        #[arg(long)]
        lenient: bool,
    },

    /// Decode a DER SEQUENCE OF INTEGER and print it as a JSON array
    Decode {
        /// DER file to read (stdin when omitted)
        file: Option<PathBuf>,

        /// Accept non-minimal length octets
        #[arg(long)]
        lenient: bool,
    },
}
