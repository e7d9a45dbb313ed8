//! Implementation of `Address`, the 20-byte account and contract identifier.

use std::fmt;
use std::str::FromStr;

use ontio_io::{decode_hex, DecodeResult, OntDecode, OntEncode, OntRead, OntWrite, ToHex};
use ripemd::Ripemd160;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::error::{CoreError, CoreResult};

/// The length of an address in bytes.
pub const ADDRESS_SIZE: usize = 20;

/// Version byte prepended to the base58 text form.
pub const ADDRESS_VERSION: u8 = 0x17;

const BASE58_DECODED_SIZE: usize = 1 + ADDRESS_SIZE + 4;

/// ONT token contract.
pub const ONT_CONTRACT: Address = Address::native(0x01);
/// ONG token contract.
pub const ONG_CONTRACT: Address = Address::native(0x02);
/// ONT ID contract.
pub const ONT_ID_CONTRACT: Address = Address::native(0x03);
/// Global parameters contract.
pub const GLOBAL_PARAMS_CONTRACT: Address = Address::native(0x04);
/// Authorization contract.
pub const AUTH_CONTRACT: Address = Address::native(0x06);
/// Governance contract.
pub const GOVERNANCE_CONTRACT: Address = Address::native(0x07);

/// A 20-byte identifier of an account or a deployed contract.
///
/// The bytes are kept in serialization order, so [`Address::serialize`] and
/// [`Address::to_hex`] never reorder them.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    /// The all-zero address.
    pub const ZERO: Address = Address([0u8; ADDRESS_SIZE]);

    #[inline]
    pub const fn new(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }

    const fn native(id: u8) -> Self {
        let mut bytes = [0u8; ADDRESS_SIZE];
        bytes[ADDRESS_SIZE - 1] = id;
        Self(bytes)
    }

    /// Creates an address from exactly 20 bytes.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidAddress` if the input is not 20 bytes long.
    pub fn from_slice(value: &[u8]) -> CoreResult<Self> {
        let bytes: [u8; ADDRESS_SIZE] = value.try_into().map_err(|_| {
            CoreError::InvalidAddress(format!("expected {ADDRESS_SIZE} bytes, got {}", value.len()))
        })?;
        Ok(Self(bytes))
    }

    /// Parses the hex of the serialized bytes, as produced by [`Address::to_hex`].
    pub fn from_hex(text: &str) -> CoreResult<Self> {
        let bytes = decode_hex(text)?;
        Self::from_slice(&bytes)
    }

    /// Derives a contract address from its deployed code: RIPEMD160(SHA256(code)).
    #[must_use]
    pub fn from_vm_code(code: &[u8]) -> Self {
        let sha = Sha256::digest(code);
        let hash160 = Ripemd160::digest(sha);

        let mut bytes = [0u8; ADDRESS_SIZE];
        bytes.copy_from_slice(&hash160);
        Self(bytes)
    }

    /// The 20 raw bytes in wire order.
    #[inline]
    #[must_use]
    pub fn serialize(&self) -> [u8; ADDRESS_SIZE] {
        self.0
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    /// Lowercase hex of [`Address::serialize`].
    #[inline]
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_SIZE]
    }

    /// Encodes the address as base58: version byte, the 20 bytes, then the
    /// first four bytes of the double SHA-256 of both.
    #[must_use]
    pub fn to_base58(&self) -> String {
        let mut data = Vec::with_capacity(BASE58_DECODED_SIZE);
        data.push(ADDRESS_VERSION);
        data.extend_from_slice(&self.0);

        let checksum = Sha256::digest(Sha256::digest(&data));
        data.extend_from_slice(&checksum[..4]);

        bs58::encode(data).into_string()
    }

    /// Parses a base58 address string.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidAddress` if the text is not base58, has the
    /// wrong length or version byte, or carries a bad checksum.
    pub fn from_base58(text: &str) -> CoreResult<Self> {
        let decoded = bs58::decode(text)
            .into_vec()
            .map_err(|err| CoreError::InvalidAddress(format!("base58: {err}")))?;

        if decoded.len() != BASE58_DECODED_SIZE {
            return Err(CoreError::InvalidAddress(format!(
                "decoded length {} is not {BASE58_DECODED_SIZE}",
                decoded.len()
            )));
        }

        if decoded[0] != ADDRESS_VERSION {
            return Err(CoreError::InvalidAddress(format!(
                "version byte 0x{:02x} is not 0x{ADDRESS_VERSION:02x}",
                decoded[0]
            )));
        }

        let (data, checksum) = decoded.split_at(1 + ADDRESS_SIZE);
        let expected = Sha256::digest(Sha256::digest(data));
        if checksum != &expected[..4] {
            return Err(CoreError::InvalidAddress("checksum mismatch".into()));
        }

        Self::from_slice(&data[1..])
    }
}

impl From<[u8; ADDRESS_SIZE]> for Address {
    #[inline]
    fn from(value: [u8; ADDRESS_SIZE]) -> Self {
        Self(value)
    }
}

impl AsRef<[u8]> for Address {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Address {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl OntEncode for Address {
    #[inline]
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        writer.write_bytes(&self.0);
    }
}

impl OntDecode for Address {
    #[inline]
    fn ont_decode<R: OntRead>(reader: &mut R) -> DecodeResult<Self> {
        let mut bytes = [0u8; ADDRESS_SIZE];
        reader.read_into(&mut bytes)?;
        Ok(Self(bytes))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base58())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_base58(&text).map_err(serde::de::Error::custom)
    }
}
