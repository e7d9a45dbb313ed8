// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use std::{fmt, ops::Deref, slice, str::FromStr};

use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

use crate::encoding::{decode_hex, write_varint, OntDecode, OntEncode, OntRead, OntWrite, ToHex};
use crate::error::{DecodeError, DecodeResult};

/// Append-only heap byte buffer with lossless hex text round-trip.
///
/// Every `push_*` appends at the end; nothing is ever edited in place.
#[derive(Clone, Default, Eq, PartialEq, Hash)]
pub struct ByteArray(Vec<u8>);

impl ByteArray {
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Parses hex text. Odd length or non-hex characters fail.
    pub fn from_hex(text: &str) -> DecodeResult<Self> {
        decode_hex(text).map(Self)
    }

    /// Takes the UTF-8 bytes of `text` verbatim.
    #[inline]
    pub fn from_binary(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }

    #[inline]
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    #[inline]
    pub fn push_raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.0.extend_from_slice(bytes);
        self
    }

    #[inline]
    pub fn push_u8(&mut self, value: u8) -> &mut Self {
        self.0.push(value);
        self
    }

    #[inline]
    pub fn push_u16(&mut self, value: u16) -> &mut Self {
        self.push_raw(&value.to_le_bytes())
    }

    #[inline]
    pub fn push_u32(&mut self, value: u32) -> &mut Self {
        self.push_raw(&value.to_le_bytes())
    }

    #[inline]
    pub fn push_u64(&mut self, value: u64) -> &mut Self {
        self.push_raw(&value.to_le_bytes())
    }

    #[inline]
    pub fn push_bool(&mut self, value: bool) -> &mut Self {
        self.push_u8(value as u8)
    }

    /// Appends a wire varint.
    #[inline]
    pub fn push_varint(&mut self, value: u64) -> &mut Self {
        write_varint(&mut self.0, value);
        self
    }

    /// Appends `bytes` preceded by its wire varint length.
    #[inline]
    pub fn push_var_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.push_varint(bytes.len() as u64);
        self.push_raw(bytes)
    }

    #[inline]
    pub fn push_var_string(&mut self, text: &str) -> &mut Self {
        self.push_var_bytes(text.as_bytes())
    }
}

impl OntWrite for ByteArray {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.0.extend_from_slice(bytes);
    }

    #[inline]
    fn bytes_written(&self) -> usize {
        self.0.len()
    }
}

impl OntEncode for ByteArray {
    #[inline]
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        writer.write_var_bytes(&self.0);
    }
}

impl OntDecode for ByteArray {
    #[inline]
    fn ont_decode<R: OntRead>(reader: &mut R) -> DecodeResult<Self> {
        Ok(Self(reader.read_var_bytes(u32::MAX as u64)?))
    }
}

impl From<Vec<u8>> for ByteArray {
    #[inline]
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl From<&[u8]> for ByteArray {
    #[inline]
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

impl From<ByteArray> for Vec<u8> {
    #[inline]
    fn from(value: ByteArray) -> Self {
        value.0
    }
}

impl AsRef<[u8]> for ByteArray {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Deref for ByteArray {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl<'a> IntoIterator for &'a ByteArray {
    type Item = &'a u8;
    type IntoIter = slice::Iter<'a, u8>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromStr for ByteArray {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for ByteArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ByteArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "ByteArray(0x{})", self.to_hex())
        } else {
            f.debug_tuple("ByteArray").field(&self.0).finish()
        }
    }
}

impl Serialize for ByteArray {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ByteArray {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        Self::from_hex(&encoded).map_err(D::Error::custom)
    }
}
