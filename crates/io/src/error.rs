// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

use thiserror::Error;

/// Failure while turning text or wire bytes back into values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("decode: invalid hex '{0}'")]
    InvalidHex(String),

    #[error("decode: unexpected eof, needed {needed} bytes but {remaining} remaining")]
    UnexpectedEof { needed: usize, remaining: usize },

    #[error("decode: non-canonical varint tag 0x{0:02x}")]
    InvalidVarIntTag(u8),

    #[error("decode: length {len} exceeds maximum {max}")]
    LengthOutOfRange { len: u64, max: u64 },

    #[error("decode: invalid {0} value")]
    InvalidValue(&'static str),

    #[error("decode: invalid utf-8 string")]
    InvalidUtf8,

    #[error("decode: {0} trailing bytes")]
    TrailingBytes(usize),

    #[error("decode: malformed script, {0}")]
    InvalidScript(String),
}

pub type DecodeResult<T> = Result<T, DecodeError>;
