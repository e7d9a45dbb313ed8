// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Compact length prefix: values below 0xFD are one byte, larger values
//! follow a 0xFD/0xFE/0xFF marker as a 2/4/8-byte little-endian integer.

use super::{OntRead, OntWrite};
use crate::error::{DecodeError, DecodeResult};

/// Marker and operand width for `value`, or `None` when the value is its own
/// single byte.
#[inline]
fn wide_form(value: u64) -> Option<(u8, usize)> {
    match value {
        0..=0xFC => None,
        0xFD..=0xFFFF => Some((0xFD, 2)),
        0x1_0000..=0xFFFF_FFFF => Some((0xFE, 4)),
        _ => Some((0xFF, 8)),
    }
}

pub fn write_varint<W: OntWrite + ?Sized>(writer: &mut W, value: u64) {
    match wide_form(value) {
        None => writer.write_u8(value as u8),
        Some((marker, width)) => {
            writer.write_u8(marker);
            writer.write_bytes(&value.to_le_bytes()[..width]);
        }
    }
}

/// Reads a varint, rejecting wide forms that a shorter form could carry.
pub fn read_varint<R: OntRead + ?Sized>(reader: &mut R) -> DecodeResult<u64> {
    let marker = reader.read_u8()?;
    let (width, smallest) = match marker {
        0xFD => (2, 0xFD),
        0xFE => (4, 0x1_0000),
        0xFF => (8, 0x1_0000_0000),
        short => return Ok(short as u64),
    };

    let mut operand = [0u8; 8];
    reader.read_into(&mut operand[..width])?;
    let value = u64::from_le_bytes(operand);
    if value < smallest {
        return Err(DecodeError::InvalidVarIntTag(marker));
    }
    Ok(value)
}

/// Number of bytes `write_varint` emits for `value`.
#[inline]
pub fn varint_size(value: u64) -> usize {
    wide_form(value).map_or(1, |(_, width)| 1 + width)
}
