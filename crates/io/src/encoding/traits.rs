// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use super::{read_varint, write_varint};
use crate::error::{DecodeError, DecodeResult};

/// All values that can be encoded into the Ontology binary wire format implement this trait.
pub trait OntEncode {
    fn ont_encode<W: OntWrite>(&self, writer: &mut W);

    #[inline]
    fn to_vec(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.ont_encode(&mut buf);
        buf
    }
}

/// Values that can be decoded from the Ontology binary wire format implement this trait.
pub trait OntDecode: Sized {
    fn ont_decode<R: OntRead>(reader: &mut R) -> DecodeResult<Self>;
}

/// Writer abstraction for the wire format.
pub trait OntWrite {
    /// Append raw bytes to the destination buffer.
    fn write_bytes(&mut self, bytes: &[u8]);

    /// Number of bytes written so far.
    fn bytes_written(&self) -> usize;

    #[inline]
    fn write_u8(&mut self, value: u8) {
        self.write_bytes(&[value]);
    }

    #[inline]
    fn write_u16(&mut self, value: u16) {
        self.write_bytes(&value.to_le_bytes());
    }

    #[inline]
    fn write_u32(&mut self, value: u32) {
        self.write_bytes(&value.to_le_bytes());
    }

    #[inline]
    fn write_u64(&mut self, value: u64) {
        self.write_bytes(&value.to_le_bytes());
    }

    #[inline]
    fn write_i64(&mut self, value: i64) {
        self.write_bytes(&value.to_le_bytes());
    }

    #[inline]
    fn write_bool(&mut self, value: bool) {
        self.write_u8(value as u8);
    }

    #[inline]
    fn write_varint(&mut self, value: u64) {
        write_varint(self, value);
    }

    #[inline]
    fn write_var_bytes(&mut self, value: &[u8]) {
        write_varint(self, value.len() as u64);
        self.write_bytes(value);
    }

    #[inline]
    fn write_var_string(&mut self, value: &str) {
        self.write_var_bytes(value.as_bytes());
    }
}

impl OntWrite for Vec<u8> {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }

    #[inline]
    fn bytes_written(&self) -> usize {
        self.len()
    }
}

/// Reader abstraction for the wire format.
pub trait OntRead {
    /// Attempt to read exactly `buf.len()` bytes into the provided slice.
    fn read_into(&mut self, buf: &mut [u8]) -> DecodeResult<()>;

    /// Remaining bytes that can be read from this reader.
    fn remaining(&self) -> usize;

    #[inline]
    fn read_u8(&mut self) -> DecodeResult<u8> {
        let mut buf = [0u8; 1];
        self.read_into(&mut buf)?;
        Ok(buf[0])
    }

    #[inline]
    fn read_u16(&mut self) -> DecodeResult<u16> {
        let mut buf = [0u8; 2];
        self.read_into(&mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }

    #[inline]
    fn read_u32(&mut self) -> DecodeResult<u32> {
        let mut buf = [0u8; 4];
        self.read_into(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    #[inline]
    fn read_u64(&mut self) -> DecodeResult<u64> {
        let mut buf = [0u8; 8];
        self.read_into(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }

    #[inline]
    fn read_i64(&mut self) -> DecodeResult<i64> {
        let mut buf = [0u8; 8];
        self.read_into(&mut buf)?;
        Ok(i64::from_le_bytes(buf))
    }

    #[inline]
    fn read_bool(&mut self) -> DecodeResult<bool> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(DecodeError::InvalidValue("bool")),
        }
    }

    #[inline]
    fn read_varint(&mut self) -> DecodeResult<u64> {
        read_varint(self)
    }

    #[inline]
    fn read_var_bytes(&mut self, max: u64) -> DecodeResult<Vec<u8>> {
        let len = self.read_varint()?;
        if len > max {
            return Err(DecodeError::LengthOutOfRange { len, max });
        }
        if len > self.remaining() as u64 {
            return Err(DecodeError::UnexpectedEof {
                needed: len as usize,
                remaining: self.remaining(),
            });
        }

        let mut buf = vec![0u8; len as usize];
        self.read_into(buf.as_mut_slice())?;
        Ok(buf)
    }

    #[inline]
    fn read_var_string(&mut self, max: u64) -> DecodeResult<String> {
        let bytes = self.read_var_bytes(max)?;
        String::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8)
    }
}
