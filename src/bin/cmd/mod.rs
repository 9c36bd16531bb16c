// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CLI subcommands.

mod decode;
mod encode;
mod inspect;

pub use decode::DecodeCmd;
pub use encode::EncodeCmd;
pub use inspect::InspectCmd;
