// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CDR writer for encoding primitives into a CDR buffer.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use super::header::{RepresentationHeader, RepresentationId, CDR_HEADER_SIZE};
use super::padding_for;
use crate::core::{CdrValue, CodecError, Result};

/// Default initial capacity for the writer buffer.
const DEFAULT_CAPACITY: usize = 64;

/// CDR writer for encoding primitives.
///
/// The 4-byte header is written when the writer is created. By default the
/// header declares the byte order of the running host (`CDR_LE` or
/// `CDR_BE`, options 0) and every multi-byte value is written in that order.
///
/// Each `write_*` call appends the zero padding needed to align the value
/// (measured from the payload start) and then the value itself. A call that
/// fails appends nothing.
///
/// # Example
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use cdrcodec::cdr::{CdrReader, CdrWriter};
///
/// let mut writer = CdrWriter::new();
/// writer.write_u8(1)?.write_u64(42)?.write_string("hello")?;
/// let data = writer.finish();
///
/// let mut reader = CdrReader::new(&data)?;
/// assert_eq!(reader.read_u8()?, 1);
/// assert_eq!(reader.read_u64()?, 42);
/// assert_eq!(reader.read_string()?, "hello");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CdrWriter {
    /// Output buffer (includes CDR header); its length is the write position
    buffer: Vec<u8>,
    /// Header written at construction
    header: RepresentationHeader,
    /// Hard capacity for fixed-size targets
    capacity_limit: Option<usize>,
}

impl Default for CdrWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CdrWriter {
    /// Create a growable writer in host-native byte order.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a growable writer in host-native byte order, pre-allocating
    /// `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::start(
            RepresentationHeader::native(),
            Vec::with_capacity(capacity.max(CDR_HEADER_SIZE)),
            None,
        )
    }

    /// Create a writer that can never hold more than `capacity` bytes,
    /// header included.
    ///
    /// Writes that would go past the capacity fail with
    /// [`CodecError::BufferOverflow`]. Fails right away if the header does
    /// not fit.
    pub fn fixed(capacity: usize) -> Result<Self> {
        if capacity < CDR_HEADER_SIZE {
            return Err(CodecError::buffer_overflow(CDR_HEADER_SIZE, capacity, 0));
        }
        Ok(Self::start(
            RepresentationHeader::native(),
            Vec::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            Some(capacity),
        ))
    }

    /// Create a growable writer for an explicit representation.
    ///
    /// Only `CDR_BE` and `CDR_LE` are accepted; use this when the payload
    /// must be produced in a byte order other than the host's.
    pub fn with_representation(id: RepresentationId) -> Result<Self> {
        if !id.is_supported() {
            return Err(CodecError::unsupported_representation(id.as_u16()));
        }
        let header = RepresentationHeader { id, options: 0 };
        Ok(Self::start(
            header,
            Vec::with_capacity(DEFAULT_CAPACITY),
            None,
        ))
    }

    fn start(
        header: RepresentationHeader,
        mut buffer: Vec<u8>,
        capacity_limit: Option<usize>,
    ) -> Self {
        buffer.extend_from_slice(&header.to_bytes());
        tracing::debug!(
            representation = %header.id,
            capacity_limit = ?capacity_limit,
            "opened CDR writer"
        );

        Self {
            buffer,
            header,
            capacity_limit,
        }
    }

    /// Representation identifier written in the header.
    #[inline]
    pub fn representation_id(&self) -> RepresentationId {
        self.header.id
    }

    /// Whether multi-byte values are written little-endian.
    #[inline]
    pub fn is_little_endian(&self) -> bool {
        self.header.is_little_endian()
    }

    /// Current write position (equals the encoded size so far).
    #[inline]
    pub fn position(&self) -> usize {
        self.buffer.len()
    }

    /// Capacity limit of a fixed writer.
    #[inline]
    pub fn capacity_limit(&self) -> Option<usize> {
        self.capacity_limit
    }

    /// Get a reference to the encoded data.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    /// Consume the writer and return the encoded data.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.buffer
    }

    /// Check that `additional` more bytes fit.
    fn ensure(&self, additional: usize) -> Result<()> {
        match self.capacity_limit {
            Some(capacity) if self.position() + additional > capacity => Err(
                CodecError::buffer_overflow(additional, capacity, self.position()),
            ),
            _ => Ok(()),
        }
    }

    /// Append zero padding for `alignment`. Capacity must already be ensured.
    fn pad(&mut self, alignment: usize) {
        let padding = padding_for(self.position(), alignment);
        if padding > 0 {
            tracing::trace!(
                alignment,
                padding,
                position = self.position(),
                "inserted alignment padding"
            );
            self.buffer.resize(self.position() + padding, 0x00);
        }
    }

    /// Write a naturally aligned primitive of `size` bytes.
    fn write_primitive<T>(
        &mut self,
        size: usize,
        value: T,
        le: fn(&mut [u8], T),
        be: fn(&mut [u8], T),
    ) -> Result<&mut Self> {
        self.ensure(padding_for(self.position(), size) + size)?;

        let mut scratch = [0u8; 8];
        if self.is_little_endian() {
            le(&mut scratch[..size], value);
        } else {
            be(&mut scratch[..size], value);
        }
        self.pad(size);
        self.buffer.extend_from_slice(&scratch[..size]);
        Ok(self)
    }

    /// Write a single byte.
    pub fn write_u8(&mut self, value: u8) -> Result<&mut Self> {
        self.ensure(1)?;
        self.buffer.push(value);
        Ok(self)
    }

    /// Write a boolean as `0x01` / `0x00`.
    pub fn write_bool(&mut self, value: bool) -> Result<&mut Self> {
        self.write_u8(u8::from(value))
    }

    /// Write a char as one byte.
    ///
    /// Fails with [`CodecError::CharOutOfRange`] above `U+00FF`.
    pub fn write_char(&mut self, value: char) -> Result<&mut Self> {
        let byte = u8::try_from(value).map_err(|_| CodecError::CharOutOfRange { ch: value })?;
        self.write_u8(byte)
    }

    /// Write an i16 value.
    pub fn write_i16(&mut self, value: i16) -> Result<&mut Self> {
        self.write_primitive(2, value, LittleEndian::write_i16, BigEndian::write_i16)
    }

    /// Write a u16 value.
    pub fn write_u16(&mut self, value: u16) -> Result<&mut Self> {
        self.write_primitive(2, value, LittleEndian::write_u16, BigEndian::write_u16)
    }

    /// Write an i32 value.
    pub fn write_i32(&mut self, value: i32) -> Result<&mut Self> {
        self.write_primitive(4, value, LittleEndian::write_i32, BigEndian::write_i32)
    }

    /// Write a u32 value.
    pub fn write_u32(&mut self, value: u32) -> Result<&mut Self> {
        self.write_primitive(4, value, LittleEndian::write_u32, BigEndian::write_u32)
    }

    /// Write an i64 value.
    pub fn write_i64(&mut self, value: i64) -> Result<&mut Self> {
        self.write_primitive(8, value, LittleEndian::write_i64, BigEndian::write_i64)
    }

    /// Write a u64 value.
    pub fn write_u64(&mut self, value: u64) -> Result<&mut Self> {
        self.write_primitive(8, value, LittleEndian::write_u64, BigEndian::write_u64)
    }

    /// Write an f32 value.
    pub fn write_f32(&mut self, value: f32) -> Result<&mut Self> {
        self.write_primitive(4, value, LittleEndian::write_f32, BigEndian::write_f32)
    }

    /// Write an f64 value.
    pub fn write_f64(&mut self, value: f64) -> Result<&mut Self> {
        self.write_primitive(8, value, LittleEndian::write_f64, BigEndian::write_f64)
    }

    /// Write an enum discriminant (same wire form as a u32).
    pub fn write_enum(&mut self, value: u32) -> Result<&mut Self> {
        self.write_u32(value)
    }

    /// Write a sequence length (same wire form as a u32).
    pub fn write_sequence_length(&mut self, value: u32) -> Result<&mut Self> {
        self.write_u32(value)
    }

    /// Write a string: u32 length counting the null terminator, the UTF-8
    /// bytes, then `0x00`. No alignment follows.
    pub fn write_string(&mut self, value: &str) -> Result<&mut Self> {
        let length = value.len() + 1; // Add one for null terminator
        let prefix = u32::try_from(length).map_err(|_| CodecError::LengthOverflow { length })?;
        self.ensure(padding_for(self.position(), 4) + 4 + length)?;

        self.write_u32(prefix)?;
        self.buffer.extend_from_slice(value.as_bytes());
        self.buffer.push(0x00);
        Ok(self)
    }

    /// Write raw bytes, without alignment.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.ensure(data.len())?;
        self.buffer.extend_from_slice(data);
        Ok(self)
    }

    /// Write one runtime-typed value.
    pub fn write_value(&mut self, value: &CdrValue) -> Result<&mut Self> {
        match value {
            CdrValue::Byte(v) => self.write_u8(*v),
            CdrValue::Bool(v) => self.write_bool(*v),
            CdrValue::Char(v) => self.write_char(*v),
            CdrValue::Int16(v) => self.write_i16(*v),
            CdrValue::UInt16(v) => self.write_u16(*v),
            CdrValue::Int32(v) => self.write_i32(*v),
            CdrValue::UInt32(v) => self.write_u32(*v),
            CdrValue::Int64(v) => self.write_i64(*v),
            CdrValue::UInt64(v) => self.write_u64(*v),
            CdrValue::Float32(v) => self.write_f32(*v),
            CdrValue::Float64(v) => self.write_f64(*v),
            CdrValue::String(v) => self.write_string(v),
            CdrValue::Enum(v) => self.write_enum(*v),
            CdrValue::SequenceLength(v) => self.write_sequence_length(*v),
        }
    }
}
