// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CDR representation header.
//!
//! Every serialized payload starts with 4 bytes:
//! - Bytes 0-1: representation identifier (big-endian)
//! - Bytes 2-3: representation options (big-endian, opaque)
//!
//! The header is big-endian whatever the byte order of the payload behind
//! it. The payload is little-endian iff the low bit of the identifier is set.

use std::fmt;

use byteorder::{BigEndian, ByteOrder};

use crate::core::{CodecError, Result};

/// Size of the CDR representation header (4 bytes).
pub const CDR_HEADER_SIZE: usize = 4;

/// Representation identifiers recognized in a CDR header.
///
/// Only [`RepresentationId::CdrBe`] and [`RepresentationId::CdrLe`] can be
/// read or written by this crate. The other tags are recognized so that
/// errors can name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum RepresentationId {
    /// CDR, Big Endian
    CdrBe = 0x0000,
    /// CDR, Little Endian
    CdrLe = 0x0001,
    /// Parameter-list CDR, Little Endian
    PlCdrLe = 0x0002,
    /// Parameter-list CDR, Big Endian
    PlCdrBe = 0x0003,
    /// XML
    Xml = 0x0004,
    /// CDR2, Big Endian
    Cdr2Be = 0x0010,
    /// CDR2, Little Endian
    Cdr2Le = 0x0011,
    /// Parameter-list CDR2, Big Endian
    PlCdr2Be = 0x0012,
    /// Parameter-list CDR2, Little Endian
    PlCdr2Le = 0x0013,
    /// Delimited CDR2, Big Endian
    DCdrBe = 0x0014,
    /// Delimited CDR2, Little Endian
    DCdrLe = 0x0015,
}

impl RepresentationId {
    /// All recognized identifiers, in wire-value order.
    pub const ALL: [RepresentationId; 11] = [
        Self::CdrBe,
        Self::CdrLe,
        Self::PlCdrLe,
        Self::PlCdrBe,
        Self::Xml,
        Self::Cdr2Be,
        Self::Cdr2Le,
        Self::PlCdr2Be,
        Self::PlCdr2Le,
        Self::DCdrBe,
        Self::DCdrLe,
    ];

    /// Map a raw 16-bit value to a recognized identifier.
    pub const fn from_u16(raw: u16) -> Option<Self> {
        match raw {
            0x0000 => Some(Self::CdrBe),
            0x0001 => Some(Self::CdrLe),
            0x0002 => Some(Self::PlCdrLe),
            0x0003 => Some(Self::PlCdrBe),
            0x0004 => Some(Self::Xml),
            0x0010 => Some(Self::Cdr2Be),
            0x0011 => Some(Self::Cdr2Le),
            0x0012 => Some(Self::PlCdr2Be),
            0x0013 => Some(Self::PlCdr2Le),
            0x0014 => Some(Self::DCdrBe),
            0x0015 => Some(Self::DCdrLe),
            _ => None,
        }
    }

    /// Raw wire value.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Whether a payload tagged with this identifier is little-endian.
    #[must_use]
    pub const fn is_little_endian(self) -> bool {
        self.as_u16() & 0x0001 == 0x0001
    }

    /// Whether this crate can read and write payloads with this identifier.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        matches!(self, Self::CdrBe | Self::CdrLe)
    }

    /// Plain CDR identifier matching the byte order of the running host.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(target_endian = "little") {
            Self::CdrLe
        } else {
            Self::CdrBe
        }
    }

    /// Conventional tag name, e.g. `CDR_LE`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CdrBe => "CDR_BE",
            Self::CdrLe => "CDR_LE",
            Self::PlCdrLe => "PL_CDR_LE",
            Self::PlCdrBe => "PL_CDR_BE",
            Self::Xml => "XML",
            Self::Cdr2Be => "CDR2_BE",
            Self::Cdr2Le => "CDR2_LE",
            Self::PlCdr2Be => "PL_CDR2_BE",
            Self::PlCdr2Le => "PL_CDR2_LE",
            Self::DCdrBe => "D_CDR_BE",
            Self::DCdrLe => "D_CDR_LE",
        }
    }
}

impl fmt::Display for RepresentationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parsed 4-byte representation header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepresentationHeader {
    /// Representation identifier (always a supported one once parsed)
    pub id: RepresentationId,
    /// Representation options, kept verbatim
    pub options: u16,
}

impl RepresentationHeader {
    /// Header a fresh writer emits: native byte order, no options.
    #[must_use]
    pub const fn native() -> Self {
        Self {
            id: RepresentationId::native(),
            options: 0,
        }
    }

    /// Parse the header at the start of `data`.
    ///
    /// Fails with [`CodecError::InvalidHeader`] when fewer than 4 bytes are
    /// given and with [`CodecError::UnsupportedRepresentation`] for every
    /// identifier other than `CDR_BE` and `CDR_LE`.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let (raw_id, options) = Self::read_raw(data)?;
        let id = match RepresentationId::from_u16(raw_id) {
            Some(id) if id.is_supported() => id,
            _ => {
                tracing::debug!(raw_id, "rejected CDR representation");
                return Err(CodecError::unsupported_representation(raw_id));
            }
        };

        Ok(Self { id, options })
    }

    /// Read the raw `(identifier, options)` pair at the start of `data`.
    ///
    /// Any identifier is returned, supported or not. Fails only with
    /// [`CodecError::InvalidHeader`] when fewer than 4 bytes are given.
    pub fn read_raw(data: &[u8]) -> Result<(u16, u16)> {
        if data.len() < CDR_HEADER_SIZE {
            return Err(CodecError::InvalidHeader { len: data.len() });
        }
        Ok((
            BigEndian::read_u16(&data[0..2]),
            BigEndian::read_u16(&data[2..4]),
        ))
    }

    /// Whether the payload behind this header is little-endian.
    #[must_use]
    pub const fn is_little_endian(&self) -> bool {
        self.id.is_little_endian()
    }

    /// Encode the header as it appears on the wire.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; CDR_HEADER_SIZE] {
        let mut bytes = [0u8; CDR_HEADER_SIZE];
        BigEndian::write_u16(&mut bytes[0..2], self.id.as_u16());
        BigEndian::write_u16(&mut bytes[2..4], self.options);
        bytes
    }
}
