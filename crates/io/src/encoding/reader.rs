// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use super::OntRead;
use crate::error::{DecodeError, DecodeResult};

/// Reader over an in-memory byte slice. Holds the unread tail and the
/// original length.
pub struct SliceReader<'a> {
    rest: &'a [u8],
    total: usize,
}

impl<'a> SliceReader<'a> {
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            rest: buf,
            total: buf.len(),
        }
    }

    /// Bytes read so far.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.total - self.rest.len()
    }

    /// Fails when any input is left unread.
    pub fn finish(&self) -> DecodeResult<()> {
        if self.rest.is_empty() {
            Ok(())
        } else {
            Err(DecodeError::TrailingBytes(self.rest.len()))
        }
    }
}

impl OntRead for SliceReader<'_> {
    fn read_into(&mut self, buf: &mut [u8]) -> DecodeResult<()> {
        if buf.len() > self.rest.len() {
            return Err(DecodeError::UnexpectedEof {
                needed: buf.len(),
                remaining: self.rest.len(),
            });
        }
        let (head, tail) = self.rest.split_at(buf.len());
        buf.copy_from_slice(head);
        self.rest = tail;
        Ok(())
    }

    #[inline]
    fn remaining(&self) -> usize {
        self.rest.len()
    }
}
