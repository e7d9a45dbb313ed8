// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use super::{read_varint, varint_size, write_varint, OntDecode, OntEncode, OntRead, SliceReader};
use crate::error::DecodeError;

#[test]
fn varint_roundtrip() {
    let numbers = [
        0u64,
        252,
        253,
        65_535,
        65_536,
        4_294_967_295,
        4_294_967_296,
        u64::MAX,
    ];

    for value in numbers {
        let mut buf = Vec::new();
        write_varint(&mut buf, value);
        assert_eq!(buf.len(), varint_size(value));
        let mut reader = SliceReader::new(buf.as_slice());
        let decoded = read_varint(&mut reader).unwrap();
        assert_eq!(value, decoded);
    }
}

#[test]
fn varint_rejects_non_canonical_tags() {
    let mut reader = SliceReader::new(&[0xFD, 0x10, 0x00]);
    assert_eq!(
        read_varint(&mut reader),
        Err(DecodeError::InvalidVarIntTag(0xFD))
    );
}

#[test]
fn bool_encoding() {
    let mut buf = Vec::new();
    true.ont_encode(&mut buf);
    false.ont_encode(&mut buf);
    buf.push(2);
    let mut reader = SliceReader::new(buf.as_slice());
    assert!(bool::ont_decode(&mut reader).unwrap());
    assert!(!bool::ont_decode(&mut reader).unwrap());
    assert_eq!(
        bool::ont_decode(&mut reader),
        Err(DecodeError::InvalidValue("bool"))
    );
}

#[test]
fn string_roundtrip() {
    let message = "ontology-native";
    let mut buf = Vec::new();
    message.ont_encode(&mut buf);
    let mut reader = SliceReader::new(buf.as_slice());
    let decoded = String::ont_decode(&mut reader).unwrap();
    assert_eq!(message, decoded);
}

#[test]
fn i64_is_little_endian() {
    let buf = 20_000i64.to_vec();
    assert_eq!(buf, vec![0x20, 0x4E, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn truncated_input_reports_eof() {
    let mut reader = SliceReader::new(&[0x05, 0x01]);
    assert_eq!(
        reader.read_var_bytes(16),
        Err(DecodeError::UnexpectedEof {
            needed: 5,
            remaining: 1
        })
    );
}

#[test]
fn var_bytes_respects_max() {
    let mut reader = SliceReader::new(&[0x03, 1, 2, 3]);
    assert_eq!(
        reader.read_var_bytes(2),
        Err(DecodeError::LengthOutOfRange { len: 3, max: 2 })
    );
}

#[test]
fn varint_wire_bytes() {
    let cases: [(u64, &[u8]); 4] = [
        (0xFC, &[0xFC]),
        (0xFD, &[0xFD, 0xFD, 0x00]),
        (0x1_0000, &[0xFE, 0x00, 0x00, 0x01, 0x00]),
        (0x1_0000_0000, &[0xFF, 0, 0, 0, 0, 1, 0, 0, 0]),
    ];
    for (value, expected) in cases {
        let mut buf = Vec::new();
        write_varint(&mut buf, value);
        assert_eq!(buf, expected, "{value:#x}");
    }
}

#[test]
fn varint_rejects_short_values_in_wide_forms() {
    let mut reader = SliceReader::new(&[0xFE, 0xFF, 0xFF, 0x00, 0x00]);
    assert_eq!(read_varint(&mut reader), Err(DecodeError::InvalidVarIntTag(0xFE)));

    let mut reader = SliceReader::new(&[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0]);
    assert_eq!(read_varint(&mut reader), Err(DecodeError::InvalidVarIntTag(0xFF)));

    let mut reader = SliceReader::new(&[0xFE, 0x00]);
    assert!(matches!(
        read_varint(&mut reader),
        Err(DecodeError::UnexpectedEof { needed: 4, remaining: 1 })
    ));
}

#[test]
fn slice_reader_tracks_position() {
    let mut reader = SliceReader::new(&[1, 2, 3]);
    assert_eq!(reader.read_u8().unwrap(), 1);
    assert_eq!(reader.consumed(), 1);
    assert_eq!(reader.remaining(), 2);
    assert_eq!(reader.finish(), Err(DecodeError::TrailingBytes(2)));

    let mut buf = [0u8; 3];
    assert_eq!(
        reader.read_into(&mut buf),
        Err(DecodeError::UnexpectedEof { needed: 3, remaining: 2 })
    );
    assert_eq!(reader.consumed(), 1);

    let mut buf = [0u8; 2];
    reader.read_into(&mut buf).unwrap();
    assert_eq!(buf, [2, 3]);
    assert!(reader.finish().is_ok());
}
