// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Decode command - read a payload field by field.

use std::path::PathBuf;

use clap::Args;

use crate::common::{read_input, Result};
use cdrcodec::{CdrReader, PrimitiveType};

/// Decode a payload using a comma-separated primitive layout.
#[derive(Args, Clone, Debug)]
pub struct DecodeCmd {
    /// Input payload file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Field types in wire order, e.g. "uint8,uint64,string"
    #[arg(short, long, value_name = "TYPES")]
    layout: String,

    /// Print the values as a JSON array
    #[arg(long)]
    json: bool,
}

impl DecodeCmd {
    pub fn run(self) -> Result<()> {
        let layout = PrimitiveType::parse_layout(&self.layout)?;
        let data = read_input(&self.input)?;
        let mut reader = CdrReader::new(&data)?;

        let mut values = Vec::with_capacity(layout.len());
        for (index, ty) in layout.iter().enumerate() {
            let value = reader.read_value(*ty).map_err(|err| {
                tracing::debug!(index, fields = ?err.log_fields(), "field decode failed");
                anyhow::Error::new(err).context(format!("Failed to decode field {index} ({ty})"))
            })?;
            values.push(value);
        }

        if reader.remaining() > 0 {
            tracing::warn!(
                remaining = reader.remaining(),
                position = reader.position(),
                "trailing bytes after the last field"
            );
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&values)?);
        } else {
            for (ty, value) in layout.iter().zip(&values) {
                println!("{ty} = {value}");
            }
        }

        Ok(())
    }
}
