// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout cdrcodec.
//!
//! - [`CodecError`] - Error handling for every reader/writer operation
//! - [`PrimitiveType`] / [`CdrValue`] - Runtime-typed primitives

pub mod error;
pub mod value;

pub use error::{CodecError, Result};
pub use value::{CdrValue, PrimitiveType};
