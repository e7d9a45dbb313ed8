// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use super::{OntDecode, OntEncode, OntRead, OntWrite};
use crate::error::DecodeResult;

impl OntEncode for bool {
    #[inline]
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        writer.write_bool(*self);
    }
}

impl OntDecode for bool {
    #[inline]
    fn ont_decode<R: OntRead>(reader: &mut R) -> DecodeResult<Self> {
        reader.read_bool()
    }
}

macro_rules! impl_int {
    ($ty:ty, $write:ident, $read:ident) => {
        impl OntEncode for $ty {
            #[inline]
            fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
                writer.$write(*self);
            }
        }

        impl OntDecode for $ty {
            #[inline]
            fn ont_decode<R: OntRead>(reader: &mut R) -> DecodeResult<Self> {
                reader.$read()
            }
        }
    };
}

impl_int!(u8, write_u8, read_u8);
impl_int!(u16, write_u16, read_u16);
impl_int!(u32, write_u32, read_u32);
impl_int!(u64, write_u64, read_u64);
impl_int!(i64, write_i64, read_i64);

impl OntEncode for [u8] {
    #[inline]
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        writer.write_var_bytes(self);
    }
}

impl OntEncode for Vec<u8> {
    #[inline]
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        writer.write_var_bytes(self);
    }
}

impl OntDecode for Vec<u8> {
    #[inline]
    fn ont_decode<R: OntRead>(reader: &mut R) -> DecodeResult<Self> {
        reader.read_var_bytes(u32::MAX as u64)
    }
}

impl OntEncode for str {
    #[inline]
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        writer.write_var_string(self);
    }
}

impl OntEncode for String {
    #[inline]
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        writer.write_var_string(self);
    }
}

impl OntDecode for String {
    #[inline]
    fn ont_decode<R: OntRead>(reader: &mut R) -> DecodeResult<Self> {
        reader.read_var_string(u32::MAX as u64)
    }
}
