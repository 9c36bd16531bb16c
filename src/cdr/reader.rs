// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CDR reader for decoding primitives from a CDR-encoded buffer.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use super::header::{RepresentationHeader, RepresentationId, CDR_HEADER_SIZE};
use super::padding_for;
use crate::core::{CdrValue, CodecError, PrimitiveType, Result};

/// CDR reader that tracks position for proper alignment.
///
/// The header is parsed when the reader is created; the byte order it
/// declares then applies to every multi-byte read. Each `read_*` call skips
/// the padding needed to align the value (measured from the payload start),
/// decodes exactly one value and advances past it.
///
/// A failed primitive read does not move the cursor. A failed string read
/// may already have consumed the length prefix. Either way the rest of the
/// message should be considered lost, since CDR has no resync points.
///
/// # Example
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use cdrcodec::cdr::CdrReader;
///
/// let data = [0x00, 0x01, 0x00, 0x00, 0x2A, 0x00, 0x00, 0x00]; // CDR_LE header + u32
/// let mut reader = CdrReader::new(&data)?;
/// assert_eq!(reader.read_u32()?, 42);
/// assert!(reader.is_at_end());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CdrReader<'a> {
    /// The data buffer (includes CDR header)
    data: &'a [u8],
    /// Current read position
    position: usize,
    /// Header parsed at construction
    header: RepresentationHeader,
}

impl<'a> CdrReader<'a> {
    /// Create a reader over `data`, parsing its 4-byte header.
    ///
    /// Fails with [`CodecError::InvalidHeader`] if `data` is shorter than the
    /// header and with [`CodecError::UnsupportedRepresentation`] if the header
    /// is anything other than `CDR_BE` or `CDR_LE`.
    pub fn new(data: &'a [u8]) -> Result<Self> {
        let header = RepresentationHeader::parse(data)?;
        tracing::debug!(
            representation = %header.id,
            options = header.options,
            len = data.len(),
            "opened CDR reader"
        );

        Ok(Self {
            data,
            position: CDR_HEADER_SIZE,
            header,
        })
    }

    /// Representation identifier from the header.
    #[inline]
    pub fn representation_id(&self) -> RepresentationId {
        self.header.id
    }

    /// Representation options from the header, verbatim.
    #[inline]
    pub fn options(&self) -> u16 {
        self.header.options
    }

    /// The parsed header.
    #[inline]
    pub fn header(&self) -> RepresentationHeader {
        self.header
    }

    /// Whether the payload is little-endian.
    #[inline]
    pub fn is_little_endian(&self) -> bool {
        self.header.is_little_endian()
    }

    /// Current absolute position in the buffer.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Check if at end of buffer.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Skip padding for `alignment`, then hand out the next `size` bytes.
    fn take(&mut self, alignment: usize, size: usize) -> Result<&'a [u8]> {
        let padding = padding_for(self.position, alignment);
        let requested = padding + size;
        if requested > self.remaining() {
            return Err(CodecError::buffer_underrun(
                requested,
                self.remaining(),
                self.position,
            ));
        }
        if padding > 0 {
            tracing::trace!(
                alignment,
                padding,
                position = self.position,
                "skipped alignment padding"
            );
        }

        let data = self.data;
        let start = self.position + padding;
        self.position = start + size;
        Ok(&data[start..self.position])
    }

    /// Read a naturally aligned primitive of `size` bytes.
    fn read_primitive<T>(
        &mut self,
        size: usize,
        le: fn(&[u8]) -> T,
        be: fn(&[u8]) -> T,
    ) -> Result<T> {
        let little_endian = self.is_little_endian();
        let bytes = self.take(size, size)?;
        Ok(if little_endian { le(bytes) } else { be(bytes) })
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1, 1)?[0])
    }

    /// Read a boolean. Any nonzero byte is `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0x00)
    }

    /// Read a char: one byte taken as a code point in `U+0000..=U+00FF`.
    pub fn read_char(&mut self) -> Result<char> {
        Ok(char::from(self.read_u8()?))
    }

    /// Read an i16 value.
    pub fn read_i16(&mut self) -> Result<i16> {
        self.read_primitive(2, LittleEndian::read_i16, BigEndian::read_i16)
    }

    /// Read a u16 value.
    pub fn read_u16(&mut self) -> Result<u16> {
        self.read_primitive(2, LittleEndian::read_u16, BigEndian::read_u16)
    }

    /// Read an i32 value.
    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_primitive(4, LittleEndian::read_i32, BigEndian::read_i32)
    }

    /// Read a u32 value.
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_primitive(4, LittleEndian::read_u32, BigEndian::read_u32)
    }

    /// Read an i64 value.
    pub fn read_i64(&mut self) -> Result<i64> {
        self.read_primitive(8, LittleEndian::read_i64, BigEndian::read_i64)
    }

    /// Read a u64 value.
    pub fn read_u64(&mut self) -> Result<u64> {
        self.read_primitive(8, LittleEndian::read_u64, BigEndian::read_u64)
    }

    /// Read an f32 value.
    pub fn read_f32(&mut self) -> Result<f32> {
        self.read_primitive(4, LittleEndian::read_f32, BigEndian::read_f32)
    }

    /// Read an f64 value.
    pub fn read_f64(&mut self) -> Result<f64> {
        self.read_primitive(8, LittleEndian::read_f64, BigEndian::read_f64)
    }

    /// Read an enum discriminant (same wire form as a u32).
    pub fn read_enum(&mut self) -> Result<u32> {
        self.read_u32()
    }

    /// Read a sequence length (same wire form as a u32).
    pub fn read_sequence_length(&mut self) -> Result<u32> {
        self.read_u32()
    }

    /// Read a string without copying it out of the buffer.
    ///
    /// The u32 length prefix counts the null terminator, which is consumed
    /// but not returned. No alignment follows the string.
    pub fn read_str(&mut self) -> Result<&'a str> {
        let length = self.read_u32()?;
        if length == 0 {
            return Err(CodecError::InvalidStringLength {
                length,
                position: self.position - 4,
            });
        }

        let content_position = self.position;
        let bytes = self.take(1, length as usize)?;
        std::str::from_utf8(&bytes[..bytes.len() - 1]).map_err(|_| CodecError::InvalidUtf8 {
            position: content_position,
        })
    }

    /// Read a string.
    pub fn read_string(&mut self) -> Result<String> {
        self.read_str().map(str::to_owned)
    }

    /// Read `count` raw bytes, without alignment.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        self.take(1, count)
    }

    /// Read one value of the given primitive type.
    pub fn read_value(&mut self, ty: PrimitiveType) -> Result<CdrValue> {
        Ok(match ty {
            PrimitiveType::Byte => CdrValue::Byte(self.read_u8()?),
            PrimitiveType::Bool => CdrValue::Bool(self.read_bool()?),
            PrimitiveType::Char => CdrValue::Char(self.read_char()?),
            PrimitiveType::Int16 => CdrValue::Int16(self.read_i16()?),
            PrimitiveType::UInt16 => CdrValue::UInt16(self.read_u16()?),
            PrimitiveType::Int32 => CdrValue::Int32(self.read_i32()?),
            PrimitiveType::UInt32 => CdrValue::UInt32(self.read_u32()?),
            PrimitiveType::Int64 => CdrValue::Int64(self.read_i64()?),
            PrimitiveType::UInt64 => CdrValue::UInt64(self.read_u64()?),
            PrimitiveType::Float32 => CdrValue::Float32(self.read_f32()?),
            PrimitiveType::Float64 => CdrValue::Float64(self.read_f64()?),
            PrimitiveType::String => CdrValue::String(self.read_string()?),
            PrimitiveType::Enum => CdrValue::Enum(self.read_enum()?),
            PrimitiveType::SequenceLength => {
                CdrValue::SequenceLength(self.read_sequence_length()?)
            }
        })
    }
}
