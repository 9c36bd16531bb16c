// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CDR (Common Data Representation) module.
//!
//! Provides the representation header codec and the paired reader and
//! writer for plain CDR (`CDR_BE` / `CDR_LE`) payloads.
//!
//! Alignment is measured from the start of the payload, i.e. the byte right
//! after the 4-byte header: a value of alignment `A` starts at an absolute
//! offset `p` with `(p - 4) % A == 0`.

pub mod header;
pub mod reader;
pub mod writer;

pub use header::{RepresentationHeader, RepresentationId, CDR_HEADER_SIZE};
pub use reader::CdrReader;
pub use writer::CdrWriter;

/// Number of padding bytes needed at absolute `position` before a value
/// of the given alignment.
///
/// `position` must be at or after the end of the header.
#[inline]
pub(crate) const fn padding_for(position: usize, alignment: usize) -> usize {
    let offset = position - CDR_HEADER_SIZE;
    (alignment - offset % alignment) % alignment
}
