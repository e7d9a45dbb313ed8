//! Fixed-point amounts carried on the wire as signed 64-bit integers.

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use ontio_io::{DecodeError, DecodeResult, OntDecode, OntEncode, OntRead, OntWrite};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A signed 64-bit amount used for gas price and gas limit.
///
/// Built from an `i64` or from decimal-integer text such as `"20000"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fixed64(i64);

impl Fixed64 {
    pub const ZERO: Fixed64 = Fixed64(0);

    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Parses decimal-integer text.
    ///
    /// # Errors
    ///
    /// `CoreError::NumericRange` when the number does not fit in an `i64`,
    /// `CoreError::Encoding` when the text is not a decimal integer.
    pub fn parse(text: &str) -> CoreResult<Self> {
        match text.parse::<i64>() {
            Ok(value) => Ok(Self(value)),
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Err(CoreError::NumericRange {
                        value: text.to_string(),
                    })
                }
                _ => Err(CoreError::Encoding(DecodeError::InvalidValue("fixed64"))),
            },
        }
    }

    /// The 8-byte little-endian wire form.
    #[inline]
    pub fn to_le_bytes(&self) -> [u8; 8] {
        self.0.to_le_bytes()
    }
}

impl From<i64> for Fixed64 {
    #[inline]
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for Fixed64 {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Fixed64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl OntEncode for Fixed64 {
    #[inline]
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        writer.write_i64(self.0);
    }
}

impl OntDecode for Fixed64 {
    #[inline]
    fn ont_decode<R: OntRead>(reader: &mut R) -> DecodeResult<Self> {
        reader.read_i64().map(Self)
    }
}
