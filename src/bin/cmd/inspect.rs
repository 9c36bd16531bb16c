// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Inspect command - show the representation header of a payload.

use std::path::PathBuf;

use clap::Args;

use crate::common::{byte_order_name, read_input, Result};
use cdrcodec::{RepresentationHeader, RepresentationId, CDR_HEADER_SIZE};

/// Show the representation header and sizes of a payload.
#[derive(Args, Clone, Debug)]
pub struct InspectCmd {
    /// Input payload file
    #[arg(value_name = "FILE")]
    input: PathBuf,
}

impl InspectCmd {
    pub fn run(self) -> Result<()> {
        let data = read_input(&self.input)?;
        // Raw fields, so unsupported tags can be shown too
        let (raw_id, options) = RepresentationHeader::read_raw(&data)?;
        let id = RepresentationId::from_u16(raw_id);

        println!("=== {} ===", self.input.display());
        println!(
            "Representation: {} (0x{raw_id:04X})",
            id.map_or("unknown", RepresentationId::name)
        );
        println!("Options: 0x{options:04X}");
        println!("Byte order: {}", byte_order_name(raw_id & 0x0001 == 0x0001));
        println!(
            "Supported: {}",
            if id.is_some_and(RepresentationId::is_supported) {
                "yes"
            } else {
                "no"
            }
        );
        println!("Size: {} bytes", data.len());
        println!("Payload: {} bytes", data.len() - CDR_HEADER_SIZE);

        Ok(())
    }
}
