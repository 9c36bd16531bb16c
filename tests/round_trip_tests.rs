// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Round-trip tests: values written by `CdrWriter` read back unchanged by
//! `CdrReader`, in both byte orders.

use cdrcodec::{CdrReader, CdrValue, CdrWriter, RepresentationId, CDR_HEADER_SIZE};

const ORDERS: [RepresentationId; 2] = [RepresentationId::CdrBe, RepresentationId::CdrLe];

fn sample_values() -> Vec<CdrValue> {
    vec![
        CdrValue::Byte(0x00),
        CdrValue::Byte(0xFF),
        CdrValue::Bool(true),
        CdrValue::Int64(i64::MIN),
        CdrValue::Bool(false),
        CdrValue::Char('\u{E9}'),
        CdrValue::Int16(i16::MIN),
        CdrValue::UInt16(u16::MAX),
        CdrValue::Int32(-424),
        CdrValue::UInt32(u32::MAX),
        CdrValue::String("Hello World!".to_string()),
        CdrValue::UInt64(0x0A0B0C0D0E0F0102),
        CdrValue::Float32(f32::MIN_POSITIVE),
        CdrValue::String(String::new()),
        CdrValue::Float64(-0.0),
        CdrValue::Enum(3),
        CdrValue::Float32(f32::from_bits(0x7FC0_0001)),
        CdrValue::Float64(f64::from_bits(0xFFF8_0000_0000_0042)),
        CdrValue::SequenceLength(0),
        CdrValue::Float64(f64::INFINITY),
        CdrValue::String("ユニコード".to_string()),
        CdrValue::Int64(i64::MAX),
    ]
}

// ============================================================================
// Value Round Trips
// ============================================================================

#[test]
fn test_round_trip_all_primitives_both_orders() {
    let values = sample_values();

    for id in ORDERS {
        let mut writer = CdrWriter::with_representation(id).expect("create writer");
        for value in &values {
            writer.write_value(value).expect("write value");
        }
        let data = writer.finish();

        let mut reader = CdrReader::new(&data).expect("create reader");
        assert_eq!(reader.representation_id(), id);
        for value in &values {
            let decoded = reader
                .read_value(value.primitive_type())
                .expect("read value");
            assert!(
                decoded.bitwise_eq(value),
                "{id}: expected {value:?}, got {decoded:?}"
            );
        }
        assert!(reader.is_at_end());
    }
}

#[test]
fn test_round_trip_native_writer() {
    let mut writer = CdrWriter::new();
    writer
        .write_i16(0x0A0B)
        .expect("write i16")
        .write_f64(f64::MIN)
        .expect("write f64")
        .write_string("native")
        .expect("write string");
    let data = writer.finish();

    let mut reader = CdrReader::new(&data).expect("create reader");
    assert_eq!(reader.representation_id(), RepresentationId::native());
    assert_eq!(reader.read_i16().expect("read i16"), 0x0A0B);
    assert_eq!(reader.read_f64().expect("read f64"), f64::MIN);
    assert_eq!(reader.read_string().expect("read string"), "native");
}

#[test]
fn test_round_trip_float_bit_patterns() {
    let f32_bits = [
        0x0000_0000u32,
        0x8000_0000,
        0x7F80_0000,
        0xFF80_0000,
        0x7FC0_0000,
        0x7F80_0001,
        0x0000_0001,
    ];
    let f64_bits = [
        0x0000_0000_0000_0000u64,
        0x8000_0000_0000_0000,
        0x7FF0_0000_0000_0000,
        0x7FF8_0000_0000_0000,
        0x7FF0_0000_0000_0001,
        0x0000_0000_0000_0001,
    ];

    for id in ORDERS {
        let mut writer = CdrWriter::with_representation(id).expect("create writer");
        for bits in f32_bits {
            writer.write_f32(f32::from_bits(bits)).expect("write f32");
        }
        for bits in f64_bits {
            writer.write_f64(f64::from_bits(bits)).expect("write f64");
        }
        let data = writer.finish();

        let mut reader = CdrReader::new(&data).expect("create reader");
        for bits in f32_bits {
            assert_eq!(reader.read_f32().expect("read f32").to_bits(), bits);
        }
        for bits in f64_bits {
            assert_eq!(reader.read_f64().expect("read f64").to_bits(), bits);
        }
    }
}

#[test]
fn test_round_trip_chars_in_byte_range() {
    for id in ORDERS {
        let mut writer = CdrWriter::with_representation(id).expect("create writer");
        for byte in 0..=u8::MAX {
            writer.write_char(char::from(byte)).expect("write char");
        }
        let data = writer.finish();

        let mut reader = CdrReader::new(&data).expect("create reader");
        for byte in 0..=u8::MAX {
            assert_eq!(reader.read_char().expect("read char"), char::from(byte));
        }
    }
}

#[test]
fn test_round_trip_raw_bytes() {
    let blob: Vec<u8> = (0..=40u8).collect();
    let mut writer = CdrWriter::new();
    writer
        .write_sequence_length(blob.len() as u32)
        .expect("write sequence length")
        .write_bytes(&blob)
        .expect("write bytes");
    let data = writer.finish();

    let mut reader = CdrReader::new(&data).expect("create reader");
    let len = reader.read_sequence_length().expect("read sequence length");
    assert_eq!(
        reader.read_bytes(len as usize).expect("read bytes"),
        blob.as_slice()
    );
}

// ============================================================================
// Alignment Invariant
// ============================================================================

#[test]
fn test_every_value_starts_aligned() {
    for id in ORDERS {
        let mut writer = CdrWriter::with_representation(id).expect("create writer");
        for value in sample_values() {
            writer.write_value(&value).expect("write value");

            let ty = value.primitive_type();
            let width = ty.size().unwrap_or_else(|| match &value {
                CdrValue::String(s) => 4 + s.len() + 1,
                _ => unreachable!(),
            });
            let start = writer.position() - width;
            assert_eq!(
                (start - CDR_HEADER_SIZE) % ty.alignment(),
                0,
                "{ty} starts misaligned at {start}"
            );
        }
    }
}

#[test]
fn test_padding_bytes_are_zero() {
    let mut writer =
        CdrWriter::with_representation(RepresentationId::CdrLe).expect("create writer");
    writer
        .write_u8(0xFF)
        .expect("write u8")
        .write_u64(u64::MAX)
        .expect("write u64")
        .write_u8(0xFF)
        .expect("write u8")
        .write_u16(u16::MAX)
        .expect("write u16");
    let data = writer.finish();

    assert_eq!(&data[5..12], &[0u8; 7]);
    assert_eq!(data[21], 0x00);
    assert_eq!(data.len(), 24);
}
