// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # cdrcodec CLI
//!
//! Command-line tool for looking at and producing CDR payloads.
//!
//! ## Usage
//!
//! ```sh
//! # Show the representation header of a payload
//! cdrcodec inspect message.cdr
//!
//! # Decode a payload with a known primitive layout
//! cdrcodec decode message.cdr --layout uint8,uint64,string
//!
//! # Encode values into a payload
//! cdrcodec encode message.cdr uint8=1 uint64=42 string=hello --hex
//! ```

mod cmd;
mod common;

use std::process;

use clap::{Parser, Subcommand};
use cmd::{DecodeCmd, EncodeCmd, InspectCmd};
use common::Result;

/// cdrcodec - CDR payload toolkit
///
/// Inspect, decode and encode OMG CDR payloads (CDR_BE / CDR_LE).
#[derive(Parser, Clone)]
#[command(name = "cdrcodec")]
#[command(about = "Inspect, decode and encode CDR payloads", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "ArcheBase")]
struct Cli {
    /// Print debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// Show the representation header and sizes of a payload
    Inspect(InspectCmd),

    /// Decode a payload using a comma-separated primitive layout
    Decode(DecodeCmd),

    /// Encode TYPE=VALUE pairs into a payload file
    Encode(EncodeCmd),
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    common::init_tracing(cli.verbose);

    match cli.command {
        Commands::Inspect(cmd) => cmd.run(),
        Commands::Decode(cmd) => cmd.run(),
        Commands::Encode(cmd) => cmd.run(),
    }
}

fn main() {
    let result = run();

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
