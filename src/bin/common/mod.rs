// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for CLI commands.

use std::path::Path;

use anyhow::Context as _;
use cdrcodec::{CdrValue, PrimitiveType};

pub use anyhow::Result as CliResult;
pub type Result<T = ()> = CliResult<T>;

/// Install the stderr log subscriber.
///
/// Warnings only by default, debug output with `--verbose`.
pub fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    // Ignore the error if a subscriber is already set
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Read a whole payload file.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Parse a `TYPE=VALUE` argument, e.g. `uint16=0x0A0B` or `string=hi`.
///
/// Only the first `=` separates type and value.
pub fn parse_assignment(arg: &str) -> Result<CdrValue> {
    let (type_name, value) = arg
        .split_once('=')
        .with_context(|| format!("Expected TYPE=VALUE, got '{arg}'"))?;
    let ty: PrimitiveType = type_name.parse()?;
    Ok(ty.parse_value(value)?)
}

/// Human-readable byte order.
pub fn byte_order_name(little_endian: bool) -> &'static str {
    if little_endian {
        "little-endian"
    } else {
        "big-endian"
    }
}
