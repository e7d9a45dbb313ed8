// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use crate::error::{DecodeError, DecodeResult};

pub trait ToHex {
    /// Lowercase, even-length hex without a `0x` prefix.
    fn to_hex(&self) -> String;
}

impl<T: AsRef<[u8]>> ToHex for T {
    #[inline]
    fn to_hex(&self) -> String {
        hex::encode(self)
    }
}

pub trait ToRevHex {
    fn to_rev_hex(&self) -> String;
}

impl<T: AsRef<[u8]>> ToRevHex for T {
    #[inline]
    fn to_rev_hex(&self) -> String {
        let mut bytes = self.as_ref().to_vec();
        bytes.reverse();
        hex::encode(bytes)
    }
}

/// Decodes hex text, tolerating an optional `0x`/`0X` prefix.
///
/// Odd-length input and non-hex characters are rejected.
pub fn decode_hex(text: &str) -> DecodeResult<Vec<u8>> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    hex::decode(digits).map_err(|err| DecodeError::InvalidHex(format!("{text}: {err}")))
}
