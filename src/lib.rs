// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # cdrcodec
//!
//! Encoding and decoding of OMG CDR (Common Data Representation) payloads,
//! the wire format used by DDS / RTPS middleware such as ROS 2.
//!
//! A payload starts with a 4-byte representation header (big-endian u16
//! identifier, big-endian u16 options). The identifier selects the byte
//! order of everything that follows; only plain `CDR_BE` and `CDR_LE` are
//! supported. After the header, primitives are laid out back to back, each
//! aligned to its own size relative to the payload start.
//!
//! ## Architecture
//!
//! - `cdr/` - Header codec, [`CdrReader`] and [`CdrWriter`]
//! - `core/` - [`CodecError`] and the runtime-typed [`CdrValue`] / [`PrimitiveType`]
//!
//! ## Example
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use cdrcodec::{CdrReader, CdrWriter};
//!
//! let mut writer = CdrWriter::new();
//! writer.write_bool(true)?.write_i32(-7)?.write_string("chatter")?;
//! let bytes = writer.finish();
//!
//! let mut reader = CdrReader::new(&bytes)?;
//! assert!(reader.read_bool()?);
//! assert_eq!(reader.read_i32()?, -7);
//! assert_eq!(reader.read_string()?, "chatter");
//! assert!(reader.is_at_end());
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Wire codec
pub mod cdr;

pub use cdr::{CdrReader, CdrWriter, RepresentationHeader, RepresentationId, CDR_HEADER_SIZE};
pub use core::{CdrValue, CodecError, PrimitiveType, Result};
