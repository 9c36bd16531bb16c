// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Dynamically typed CDR values.
//!
//! [`PrimitiveType`] names one CDR primitive and carries its wire layout
//! (alignment, fixed size). [`CdrValue`] holds one decoded primitive. Both
//! are used when the field layout is only known at runtime, e.g. from the
//! command line.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{CodecError, Result};

// =============================================================================
// Primitive Type Enum
// =============================================================================

/// Primitive type identifiers understood by the reader and writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    /// Raw byte (octet)
    Byte,
    /// Boolean
    Bool,
    /// 8-bit character
    Char,
    /// 16-bit signed integer
    Int16,
    /// 16-bit unsigned integer
    UInt16,
    /// 32-bit signed integer
    Int32,
    /// 32-bit unsigned integer
    UInt32,
    /// 64-bit signed integer
    Int64,
    /// 64-bit unsigned integer
    UInt64,
    /// 32-bit float
    Float32,
    /// 64-bit float
    Float64,
    /// Null-terminated UTF-8 string with u32 length prefix
    String,
    /// Enum discriminant (u32 on the wire)
    Enum,
    /// Sequence length (u32 on the wire)
    SequenceLength,
}

impl PrimitiveType {
    /// Get the alignment requirement for this primitive type in bytes.
    pub const fn alignment(self) -> usize {
        match self {
            PrimitiveType::Byte | PrimitiveType::Bool | PrimitiveType::Char => 1,
            PrimitiveType::Int16 | PrimitiveType::UInt16 => 2,
            PrimitiveType::Int32
            | PrimitiveType::UInt32
            | PrimitiveType::Float32
            | PrimitiveType::Enum
            | PrimitiveType::SequenceLength => 4,
            PrimitiveType::Int64 | PrimitiveType::UInt64 | PrimitiveType::Float64 => 8,
            PrimitiveType::String => 4, // Length prefix is 4-byte aligned
        }
    }

    /// Get the size in bytes for this primitive type, if fixed.
    pub const fn size(self) -> Option<usize> {
        match self {
            PrimitiveType::String => None,
            other => Some(other.alignment()),
        }
    }

    /// Canonical name, as accepted by [`PrimitiveType::try_from_str`].
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveType::Byte => "byte",
            PrimitiveType::Bool => "bool",
            PrimitiveType::Char => "char",
            PrimitiveType::Int16 => "int16",
            PrimitiveType::UInt16 => "uint16",
            PrimitiveType::Int32 => "int32",
            PrimitiveType::UInt32 => "uint32",
            PrimitiveType::Int64 => "int64",
            PrimitiveType::UInt64 => "uint64",
            PrimitiveType::Float32 => "float32",
            PrimitiveType::Float64 => "float64",
            PrimitiveType::String => "string",
            PrimitiveType::Enum => "enum",
            PrimitiveType::SequenceLength => "sequence_length",
        }
    }

    /// Parse a primitive type from a string.
    ///
    /// Accepts the canonical names plus the usual IDL spellings
    /// (`octet`, `short`, `long long`, `double`, ...).
    pub fn try_from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "byte" | "octet" | "uint8" => Some(PrimitiveType::Byte),
            "bool" | "boolean" => Some(PrimitiveType::Bool),
            "char" => Some(PrimitiveType::Char),
            "int16" | "short" => Some(PrimitiveType::Int16),
            "uint16" | "unsigned short" => Some(PrimitiveType::UInt16),
            "int32" | "long" => Some(PrimitiveType::Int32),
            "uint32" | "unsigned long" => Some(PrimitiveType::UInt32),
            "int64" | "long long" => Some(PrimitiveType::Int64),
            "uint64" | "unsigned long long" => Some(PrimitiveType::UInt64),
            "float32" | "float" => Some(PrimitiveType::Float32),
            "float64" | "double" => Some(PrimitiveType::Float64),
            "string" => Some(PrimitiveType::String),
            "enum" => Some(PrimitiveType::Enum),
            "sequence_length" | "seqlen" => Some(PrimitiveType::SequenceLength),
            _ => None,
        }
    }

    /// Parse a comma-separated layout such as `"byte,uint64,string"`.
    pub fn parse_layout(layout: &str) -> Result<Vec<Self>> {
        layout
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(str::parse)
            .collect()
    }

    /// Parse a value of this type from its textual form.
    pub fn parse_value(self, input: &str) -> Result<CdrValue> {
        let invalid = || CodecError::invalid_value(self.name(), input);
        let value = match self {
            PrimitiveType::Byte => CdrValue::Byte(parse_int(input).ok_or_else(invalid)?),
            PrimitiveType::Bool => CdrValue::Bool(match input {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => return Err(invalid()),
            }),
            PrimitiveType::Char => {
                let mut chars = input.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => CdrValue::Char(ch),
                    _ => return Err(invalid()),
                }
            }
            PrimitiveType::Int16 => CdrValue::Int16(parse_int(input).ok_or_else(invalid)?),
            PrimitiveType::UInt16 => CdrValue::UInt16(parse_int(input).ok_or_else(invalid)?),
            PrimitiveType::Int32 => CdrValue::Int32(parse_int(input).ok_or_else(invalid)?),
            PrimitiveType::UInt32 => CdrValue::UInt32(parse_int(input).ok_or_else(invalid)?),
            PrimitiveType::Int64 => CdrValue::Int64(parse_int(input).ok_or_else(invalid)?),
            PrimitiveType::UInt64 => CdrValue::UInt64(parse_int(input).ok_or_else(invalid)?),
            PrimitiveType::Float32 => CdrValue::Float32(input.parse().map_err(|_| invalid())?),
            PrimitiveType::Float64 => CdrValue::Float64(input.parse().map_err(|_| invalid())?),
            PrimitiveType::String => CdrValue::String(input.to_string()),
            PrimitiveType::Enum => CdrValue::Enum(parse_int(input).ok_or_else(invalid)?),
            PrimitiveType::SequenceLength => {
                CdrValue::SequenceLength(parse_int(input).ok_or_else(invalid)?)
            }
        };
        Ok(value)
    }
}

/// Parse a decimal or `0x`-prefixed hexadecimal integer.
fn parse_int<T>(input: &str) -> Option<T>
where
    T: FromStr + TryFrom<i128>,
{
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };
    let magnitude = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        // Hex digits only after the prefix, no second sign
        Some(hex) if !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()) => {
            i128::from_str_radix(hex, 16).ok()?
        }
        Some(_) => return None,
        None => return input.parse().ok(),
    };
    T::try_from(if negative { -magnitude } else { magnitude }).ok()
}

impl FromStr for PrimitiveType {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from_str(s).ok_or_else(|| CodecError::unknown_type(s.trim()))
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Value Enum
// =============================================================================

/// One decoded CDR primitive.
///
/// Serializes to its bare JSON value (number, bool, string).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CdrValue {
    Byte(u8),
    Bool(bool),
    Char(char),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    String(String),
    Enum(u32),
    SequenceLength(u32),
}

impl CdrValue {
    /// Primitive type of this value.
    pub const fn primitive_type(&self) -> PrimitiveType {
        match self {
            CdrValue::Byte(_) => PrimitiveType::Byte,
            CdrValue::Bool(_) => PrimitiveType::Bool,
            CdrValue::Char(_) => PrimitiveType::Char,
            CdrValue::Int16(_) => PrimitiveType::Int16,
            CdrValue::UInt16(_) => PrimitiveType::UInt16,
            CdrValue::Int32(_) => PrimitiveType::Int32,
            CdrValue::UInt32(_) => PrimitiveType::UInt32,
            CdrValue::Int64(_) => PrimitiveType::Int64,
            CdrValue::UInt64(_) => PrimitiveType::UInt64,
            CdrValue::Float32(_) => PrimitiveType::Float32,
            CdrValue::Float64(_) => PrimitiveType::Float64,
            CdrValue::String(_) => PrimitiveType::String,
            CdrValue::Enum(_) => PrimitiveType::Enum,
            CdrValue::SequenceLength(_) => PrimitiveType::SequenceLength,
        }
    }

    /// Compare two values, floats by bit pattern.
    ///
    /// Unlike `==`, this treats a NaN as equal to itself and tells `0.0`
    /// from `-0.0`.
    pub fn bitwise_eq(&self, other: &CdrValue) -> bool {
        match (self, other) {
            (CdrValue::Float32(a), CdrValue::Float32(b)) => a.to_bits() == b.to_bits(),
            (CdrValue::Float64(a), CdrValue::Float64(b)) => a.to_bits() == b.to_bits(),
            (a, b) => a == b,
        }
    }
}

impl fmt::Display for CdrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CdrValue::Byte(v) => write!(f, "0x{v:02X}"),
            CdrValue::Bool(v) => write!(f, "{v}"),
            CdrValue::Char(v) => write!(f, "{v:?}"),
            CdrValue::Int16(v) => write!(f, "{v}"),
            CdrValue::UInt16(v) => write!(f, "{v}"),
            CdrValue::Int32(v) => write!(f, "{v}"),
            CdrValue::UInt32(v) => write!(f, "{v}"),
            CdrValue::Int64(v) => write!(f, "{v}"),
            CdrValue::UInt64(v) => write!(f, "{v}"),
            CdrValue::Float32(v) => write!(f, "{v}"),
            CdrValue::Float64(v) => write!(f, "{v}"),
            CdrValue::String(v) => write!(f, "{v:?}"),
            CdrValue::Enum(v) => write!(f, "{v}"),
            CdrValue::SequenceLength(v) => write!(f, "{v}"),
        }
    }
}
