//! The transaction model and its wire format.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use ontio_io::{
    decode_hex, DecodeError, DecodeResult, OntDecode, OntEncode, OntRead, OntWrite, SliceReader,
    ToHex, ToRevHex,
};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::address::Address;
use crate::config::TX_VERSION;
use crate::error::CoreResult;
use crate::fixed64::Fixed64;
use crate::payload::Payload;
use crate::signature::TxSignature;

/// Size of a transaction hash.
pub const HASH_SIZE: usize = 32;

/// Transaction attributes are always empty; a non-zero count is rejected.
const MAX_ATTRIBUTES: u64 = 0;

/// Upper bound for the signature count while decoding.
pub const MAX_SIGNATURES: u64 = 16;

/// Transaction type byte.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    IntoPrimitive,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum TxType {
    Deploy = 0xd0,
    Invoke = 0xd1,
}

/// Classification carried alongside a transaction. It is not part of the
/// wire format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    #[default]
    Generic,
    /// A native `transfer` or `transferFrom` call.
    Transfer,
}

/// A transaction ready to be signed or broadcast.
///
/// The transaction type is derived from the payload variant, so an
/// `Invoke` transaction can only carry `InvokeCode` and a `Deploy`
/// transaction only `DeployCode`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: u8,
    pub nonce: u32,
    pub kind: TransactionKind,
    pub payload: Payload,
    /// `None` when the caller left it unset; encoded as zero.
    pub gas_price: Option<Fixed64>,
    pub gas_limit: Option<Fixed64>,
    /// `None` is encoded as the zero address.
    pub payer: Option<Address>,
    pub sigs: Vec<TxSignature>,
}

impl Transaction {
    /// An unsigned transaction with no gas settings and no payer.
    pub fn new(payload: impl Into<Payload>) -> Self {
        Self {
            version: TX_VERSION,
            nonce: 0,
            kind: TransactionKind::Generic,
            payload: payload.into(),
            gas_price: None,
            gas_limit: None,
            payer: None,
            sigs: Vec::new(),
        }
    }

    #[inline]
    pub fn tx_type(&self) -> TxType {
        self.payload.tx_type()
    }

    #[inline]
    pub fn is_transfer(&self) -> bool {
        self.kind == TransactionKind::Transfer
    }

    #[inline]
    pub fn set_nonce(&mut self, nonce: u32) -> &mut Self {
        self.nonce = nonce;
        self
    }

    /// The encoding covered by signatures: every field except `sigs`.
    pub fn serialize_unsigned(&self) -> Vec<u8> {
        let mut writer = Vec::new();
        self.encode_unsigned(&mut writer);
        writer
    }

    fn encode_unsigned<W: OntWrite>(&self, writer: &mut W) {
        writer.write_u8(self.version);
        writer.write_u8(self.tx_type().into());
        writer.write_u32(self.nonce);
        self.gas_price.unwrap_or_default().ont_encode(writer);
        self.gas_limit.unwrap_or_default().ont_encode(writer);
        self.payer.unwrap_or_default().ont_encode(writer);
        self.payload.ont_encode(writer);
        writer.write_varint(0);
    }

    /// Full wire form: the unsigned encoding followed by the signatures.
    #[inline]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_vec()
    }

    #[inline]
    pub fn to_hex(&self) -> String {
        self.to_vec().to_hex()
    }

    /// SHA256(SHA256(unsigned encoding)).
    pub fn hash(&self) -> [u8; HASH_SIZE] {
        let first = Sha256::digest(self.serialize_unsigned());
        Sha256::digest(first).into()
    }

    /// Hash in display order, byte-reversed.
    #[inline]
    pub fn hash_hex(&self) -> String {
        self.hash().to_rev_hex()
    }

    /// Decodes the full wire form. The kind of a decoded transaction is
    /// always `Generic`; zero gas fields decode as `Some(0)` and a zero payer
    /// as `None`.
    pub fn from_bytes(bytes: &[u8]) -> CoreResult<Self> {
        let mut reader = SliceReader::new(bytes);
        let tx = Self::ont_decode(&mut reader)?;
        reader.finish()?;
        Ok(tx)
    }

    pub fn from_hex(text: &str) -> CoreResult<Self> {
        Self::from_bytes(&decode_hex(text)?)
    }
}

impl OntEncode for Transaction {
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        self.encode_unsigned(writer);
        writer.write_varint(self.sigs.len() as u64);
        for sig in &self.sigs {
            sig.ont_encode(writer);
        }
    }
}

impl OntDecode for Transaction {
    fn ont_decode<R: OntRead>(reader: &mut R) -> DecodeResult<Self> {
        let version = reader.read_u8()?;
        let tx_type = TxType::try_from(reader.read_u8()?)
            .map_err(|_| DecodeError::InvalidValue("transaction type"))?;
        let nonce = reader.read_u32()?;
        let gas_price = Fixed64::ont_decode(reader)?;
        let gas_limit = Fixed64::ont_decode(reader)?;
        let payer = Address::ont_decode(reader)?;
        let payload = Payload::decode_for(tx_type, reader)?;

        let attributes = reader.read_varint()?;
        if attributes > MAX_ATTRIBUTES {
            return Err(DecodeError::LengthOutOfRange {
                len: attributes,
                max: MAX_ATTRIBUTES,
            });
        }

        let count = reader.read_varint()?;
        if count > MAX_SIGNATURES {
            return Err(DecodeError::LengthOutOfRange {
                len: count,
                max: MAX_SIGNATURES,
            });
        }
        let sigs = (0..count)
            .map(|_| TxSignature::ont_decode(reader))
            .collect::<DecodeResult<Vec<_>>>()?;

        Ok(Self {
            version,
            nonce,
            kind: TransactionKind::Generic,
            payload,
            gas_price: Some(gas_price),
            gas_limit: Some(gas_limit),
            payer: (!payer.is_zero()).then_some(payer),
            sigs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::payload::{DeployCode, InvokeCode};
    use crate::signature::{PublicKey, SignatureScheme};

    fn invoke_tx() -> Transaction {
        let mut tx = Transaction::new(InvokeCode::new(vec![0x51, 0x68]));
        tx.gas_price = Some(Fixed64::new(500));
        tx.gas_limit = Some(Fixed64::new(20000));
        tx.payer = Some(Address::new([0x0a; 20]));
        tx
    }

    #[test]
    fn type_follows_payload() {
        assert_eq!(invoke_tx().tx_type(), TxType::Invoke);
        assert_eq!(Transaction::new(DeployCode::default()).tx_type(), TxType::Deploy);
        assert_eq!(u8::from(TxType::Deploy), 0xd0);
        assert_eq!(u8::from(TxType::Invoke), 0xd1);
    }

    #[test]
    fn unsigned_layout() {
        let bytes = invoke_tx().serialize_unsigned();
        assert_eq!(bytes[0], 0x00);
        assert_eq!(bytes[1], 0xd1);
        assert_eq!(&bytes[2..6], &[0, 0, 0, 0]);
        assert_eq!(&bytes[6..14], &500i64.to_le_bytes());
        assert_eq!(&bytes[14..22], &20000i64.to_le_bytes());
        assert_eq!(&bytes[22..42], &[0x0a; 20]);
        assert_eq!(&bytes[42..45], &[0x02, 0x51, 0x68]);
        assert_eq!(bytes[45], 0x00);
        assert_eq!(bytes.len(), 46);
    }

    #[test]
    fn unset_fields_encode_as_zero() {
        let tx = Transaction::new(InvokeCode::new(vec![0x61]));
        let bytes = tx.serialize_unsigned();
        assert!(bytes[6..42].iter().all(|b| *b == 0));
    }

    #[test]
    fn hash_ignores_signatures() {
        let mut tx = invoke_tx();
        let before = tx.hash();
        tx.sigs.push(TxSignature::new(
            PublicKey::Ed25519([0x01; 32]),
            SignatureScheme::Sha512WithEddsa,
            vec![0x02; 64],
        ));
        assert_eq!(tx.hash(), before);
        assert_ne!(tx.to_bytes(), tx.serialize_unsigned());
    }

    #[test]
    fn nonce_changes_hash() {
        let mut tx = invoke_tx();
        let before = tx.hash_hex();
        tx.set_nonce(7);
        assert_ne!(tx.hash_hex(), before);
        assert_eq!(tx.hash_hex().len(), 64);
    }

    #[test]
    fn decodes_full_form() {
        let mut tx = invoke_tx();
        tx.set_nonce(0x01020304);
        tx.sigs.push(TxSignature::new(
            PublicKey::Ed25519([0x03; 32]),
            SignatureScheme::Sha512WithEddsa,
            vec![0x04; 64],
        ));

        let decoded = Transaction::from_hex(&tx.to_hex()).unwrap();
        assert_eq!(decoded, tx);
    }

    #[test]
    fn decode_rejects_unknown_type_and_trailing_bytes() {
        let mut bytes = invoke_tx().to_bytes();
        bytes[1] = 0x99;
        assert!(Transaction::from_bytes(&bytes).is_err());

        let mut bytes = invoke_tx().to_bytes();
        bytes.push(0x00);
        assert!(Transaction::from_bytes(&bytes).is_err());
    }

    #[test]
    fn oversized_signature_push_is_rejected() {
        // One signature whose invocation script claims a 4 GiB push.
        let mut bytes = invoke_tx().serialize_unsigned();
        bytes.extend_from_slice(&[0x01, 0x05, 0x4e, 0xff, 0xff, 0xff, 0xff, 0x00]);

        assert!(matches!(
            Transaction::from_bytes(&bytes),
            Err(CoreError::Encoding(DecodeError::UnexpectedEof {
                needed: 0xFFFF_FFFF,
                remaining: 0,
            }))
        ));
    }
}
