// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Encode command - write TYPE=VALUE pairs into a payload file.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;

use crate::common::{byte_order_name, parse_assignment, Result};
use cdrcodec::CdrWriter;

/// Encode values into a payload file, in host byte order.
#[derive(Args, Clone, Debug)]
pub struct EncodeCmd {
    /// Output payload file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Values in wire order, e.g. "uint8=1 uint64=42 string=hello"
    #[arg(value_name = "TYPE=VALUE", required = true, num_args = 1..)]
    values: Vec<String>,

    /// Also print the encoded bytes as hex
    #[arg(long)]
    hex: bool,
}

impl EncodeCmd {
    pub fn run(self) -> Result<()> {
        let mut writer = CdrWriter::new();
        for arg in &self.values {
            let value = parse_assignment(arg)?;
            writer
                .write_value(&value)
                .with_context(|| format!("Failed to encode '{arg}'"))?;
        }

        let little_endian = writer.is_little_endian();
        let data = writer.finish();
        std::fs::write(&self.output, &data)
            .with_context(|| format!("Failed to write {}", self.output.display()))?;

        println!(
            "Wrote {} bytes ({}) to {}",
            data.len(),
            byte_order_name(little_endian),
            self.output.display()
        );
        if self.hex {
            println!("{}", hex::encode(&data));
        }

        Ok(())
    }
}
