// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for cdrcodec.
//!
//! Every failure is fatal for the message being decoded or encoded: CDR has
//! no self-describing frame boundaries, so there is nothing to resynchronize
//! on. Errors carry the cursor position where it helps to locate the fault.

use thiserror::Error;

use crate::cdr::header::RepresentationId;

/// Errors that can occur while reading or writing CDR data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Representation identifier is unknown, or known but not implemented.
    #[error("Unsupported CDR representation: 0x{raw_id:04X}{}", tag_suffix(.raw_id))]
    UnsupportedRepresentation {
        /// Raw 16-bit identifier from the header
        raw_id: u16,
    },

    /// Buffer is too short to hold the 4-byte header.
    #[error("Invalid CDR header: need 4 bytes, got {len}")]
    InvalidHeader {
        /// Length of the buffer that was offered
        len: usize,
    },

    /// Read request goes past the end of the buffer.
    #[error("Buffer underrun: requested {requested} bytes at position {position}, but only {available} bytes available")]
    BufferUnderrun {
        /// Requested bytes, alignment padding included
        requested: usize,
        /// Bytes left in the buffer
        available: usize,
        /// Cursor position when the error occurred
        position: usize,
    },

    /// Write request does not fit into a fixed-capacity buffer.
    #[error("Buffer overflow: writing {requested} bytes at position {position} exceeds capacity {capacity}")]
    BufferOverflow {
        /// Requested bytes, alignment padding included
        requested: usize,
        /// Fixed capacity of the target buffer
        capacity: usize,
        /// Cursor position when the error occurred
        position: usize,
    },

    /// String length prefix cannot describe a null-terminated string.
    #[error("Invalid string length {length} at position {position}")]
    InvalidStringLength {
        /// Length read from the wire
        length: u32,
        /// Position of the length prefix
        position: usize,
    },

    /// String content is not valid UTF-8.
    #[error("Invalid UTF-8 in string at position {position}")]
    InvalidUtf8 {
        /// Position of the first content byte
        position: usize,
    },

    /// Character does not fit in a single CDR char (8-bit code unit).
    #[error("Character {ch:?} (U+{:04X}) does not fit in a CDR char", code_point(.ch))]
    CharOutOfRange {
        /// Offending character
        ch: char,
    },

    /// Length does not fit the 32-bit length prefix.
    #[error("Length {length} does not fit in a 32-bit length prefix")]
    LengthOverflow {
        /// Length that was requested
        length: usize,
    },

    /// Unknown primitive type name.
    #[error("Unknown primitive type: '{name}'")]
    UnknownType {
        /// Name as given
        name: String,
    },

    /// Text does not parse as a value of the requested primitive type.
    #[error("Invalid {type_name} value: '{input}'")]
    InvalidValue {
        /// Primitive type name
        type_name: String,
        /// Text that failed to parse
        input: String,
    },
}

fn code_point(ch: &char) -> u32 {
    *ch as u32
}

fn tag_suffix(raw_id: &u16) -> String {
    match RepresentationId::from_u16(*raw_id) {
        Some(id) => format!(" ({id})"),
        None => String::new(),
    }
}

impl CodecError {
    /// Create an unsupported representation error.
    pub fn unsupported_representation(raw_id: u16) -> Self {
        CodecError::UnsupportedRepresentation { raw_id }
    }

    /// Create a buffer underrun error.
    pub fn buffer_underrun(requested: usize, available: usize, position: usize) -> Self {
        CodecError::BufferUnderrun {
            requested,
            available,
            position,
        }
    }

    /// Create a buffer overflow error.
    pub fn buffer_overflow(requested: usize, capacity: usize, position: usize) -> Self {
        CodecError::BufferOverflow {
            requested,
            capacity,
            position,
        }
    }

    /// Create an invalid value error.
    pub fn invalid_value(type_name: impl Into<String>, input: impl Into<String>) -> Self {
        CodecError::InvalidValue {
            type_name: type_name.into(),
            input: input.into(),
        }
    }

    /// Create an unknown type error.
    pub fn unknown_type(name: impl Into<String>) -> Self {
        CodecError::UnknownType { name: name.into() }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            CodecError::UnsupportedRepresentation { raw_id } => {
                vec![("raw_id", format!("0x{raw_id:04X}"))]
            }
            CodecError::InvalidHeader { len } => vec![("len", len.to_string())],
            CodecError::BufferUnderrun {
                requested,
                available,
                position,
            } => vec![
                ("requested", requested.to_string()),
                ("available", available.to_string()),
                ("position", position.to_string()),
            ],
            CodecError::BufferOverflow {
                requested,
                capacity,
                position,
            } => vec![
                ("requested", requested.to_string()),
                ("capacity", capacity.to_string()),
                ("position", position.to_string()),
            ],
            CodecError::InvalidStringLength { length, position } => vec![
                ("length", length.to_string()),
                ("position", position.to_string()),
            ],
            CodecError::InvalidUtf8 { position } => vec![("position", position.to_string())],
            CodecError::CharOutOfRange { ch } => {
                vec![("char", format!("U+{:04X}", code_point(ch)))]
            }
            CodecError::LengthOverflow { length } => vec![("length", length.to_string())],
            CodecError::UnknownType { name } => vec![("type", name.clone())],
            CodecError::InvalidValue { type_name, input } => {
                vec![("type", type_name.clone()), ("input", input.clone())]
            }
        }
    }
}

/// Result type for cdrcodec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_known_tag_names_it() {
        let err = CodecError::unsupported_representation(0x0002);
        assert_eq!(
            err.to_string(),
            "Unsupported CDR representation: 0x0002 (PL_CDR_LE)"
        );
    }

    #[test]
    fn test_unsupported_unknown_tag() {
        let err = CodecError::unsupported_representation(0xBEEF);
        assert_eq!(err.to_string(), "Unsupported CDR representation: 0xBEEF");
    }

    #[test]
    fn test_invalid_header_error() {
        let err = CodecError::InvalidHeader { len: 2 };
        assert_eq!(err.to_string(), "Invalid CDR header: need 4 bytes, got 2");
    }

    #[test]
    fn test_buffer_underrun_error() {
        let err = CodecError::buffer_underrun(8, 3, 12);
        assert!(matches!(err, CodecError::BufferUnderrun { .. }));
        assert_eq!(
            err.to_string(),
            "Buffer underrun: requested 8 bytes at position 12, but only 3 bytes available"
        );
    }

    #[test]
    fn test_buffer_overflow_error() {
        let err = CodecError::buffer_overflow(4, 6, 5);
        assert_eq!(
            err.to_string(),
            "Buffer overflow: writing 4 bytes at position 5 exceeds capacity 6"
        );
    }

    #[test]
    fn test_char_out_of_range_error() {
        let err = CodecError::CharOutOfRange { ch: 'Ā' };
        assert_eq!(
            err.to_string(),
            "Character 'Ā' (U+0100) does not fit in a CDR char"
        );
    }

    #[test]
    fn test_invalid_value_error() {
        let err = CodecError::invalid_value("int16", "70000");
        assert_eq!(err.to_string(), "Invalid int16 value: '70000'");
    }

    #[test]
    fn test_log_fields_buffer_underrun() {
        let err = CodecError::buffer_underrun(100, 50, 10);
        let fields = err.log_fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], ("requested", "100".to_string()));
        assert_eq!(fields[1], ("available", "50".to_string()));
        assert_eq!(fields[2], ("position", "10".to_string()));
    }

    #[test]
    fn test_log_fields_unsupported() {
        let fields = CodecError::unsupported_representation(0x0015).log_fields();
        assert_eq!(fields, vec![("raw_id", "0x0015".to_string())]);
    }

    #[test]
    fn test_error_clone() {
        let err1 = CodecError::unknown_type("quad");
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
