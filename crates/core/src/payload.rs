//! Transaction payloads: invocation scripts and contract deployments.

use ontio_io::{ByteArray, DecodeResult, OntDecode, OntEncode, OntRead, OntWrite};
use serde::{Deserialize, Serialize};

use crate::transaction::TxType;

/// Upper bound accepted for code while decoding.
pub const MAX_CODE_SIZE: u64 = 1024 * 1024;

/// Upper bound accepted for each deploy metadata string while decoding.
pub const MAX_METADATA_SIZE: u64 = 0xFFFF;

/// Executable script of an invoke transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokeCode {
    pub code: ByteArray,
}

impl InvokeCode {
    #[inline]
    pub fn new(code: impl Into<ByteArray>) -> Self {
        Self { code: code.into() }
    }
}

impl OntEncode for InvokeCode {
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        writer.write_var_bytes(&self.code);
    }
}

impl OntDecode for InvokeCode {
    fn ont_decode<R: OntRead>(reader: &mut R) -> DecodeResult<Self> {
        let code = reader.read_var_bytes(MAX_CODE_SIZE)?;
        Ok(Self { code: code.into() })
    }
}

/// Code and metadata of a contract deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployCode {
    pub code: ByteArray,
    pub need_storage: bool,
    pub name: String,
    pub version: String,
    pub author: String,
    pub email: String,
    pub description: String,
}

impl OntEncode for DeployCode {
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        writer.write_var_bytes(&self.code);
        writer.write_bool(self.need_storage);
        writer.write_var_string(&self.name);
        writer.write_var_string(&self.version);
        writer.write_var_string(&self.author);
        writer.write_var_string(&self.email);
        writer.write_var_string(&self.description);
    }
}

impl OntDecode for DeployCode {
    fn ont_decode<R: OntRead>(reader: &mut R) -> DecodeResult<Self> {
        Ok(Self {
            code: reader.read_var_bytes(MAX_CODE_SIZE)?.into(),
            need_storage: reader.read_bool()?,
            name: reader.read_var_string(MAX_METADATA_SIZE)?,
            version: reader.read_var_string(MAX_METADATA_SIZE)?,
            author: reader.read_var_string(MAX_METADATA_SIZE)?,
            email: reader.read_var_string(MAX_METADATA_SIZE)?,
            description: reader.read_var_string(MAX_METADATA_SIZE)?,
        })
    }
}

/// The payload of a transaction. Its variant fixes the transaction type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Payload {
    InvokeCode(InvokeCode),
    DeployCode(DeployCode),
}

impl Payload {
    /// The transaction type this payload travels under.
    #[inline]
    pub fn tx_type(&self) -> TxType {
        match self {
            Payload::InvokeCode(_) => TxType::Invoke,
            Payload::DeployCode(_) => TxType::Deploy,
        }
    }

    #[inline]
    pub fn code(&self) -> &[u8] {
        match self {
            Payload::InvokeCode(p) => &p.code,
            Payload::DeployCode(p) => &p.code,
        }
    }

    /// Lowercase hex of the carried code.
    #[inline]
    pub fn code_hex(&self) -> String {
        match self {
            Payload::InvokeCode(p) => p.code.to_hex(),
            Payload::DeployCode(p) => p.code.to_hex(),
        }
    }

    /// Decodes the payload body that follows a header of type `tx_type`.
    pub fn decode_for<R: OntRead>(tx_type: TxType, reader: &mut R) -> DecodeResult<Self> {
        match tx_type {
            TxType::Invoke => InvokeCode::ont_decode(reader).map(Payload::InvokeCode),
            TxType::Deploy => DeployCode::ont_decode(reader).map(Payload::DeployCode),
        }
    }
}

impl From<InvokeCode> for Payload {
    #[inline]
    fn from(value: InvokeCode) -> Self {
        Payload::InvokeCode(value)
    }
}

impl From<DeployCode> for Payload {
    #[inline]
    fn from(value: DeployCode) -> Self {
        Payload::DeployCode(value)
    }
}

impl OntEncode for Payload {
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        match self {
            Payload::InvokeCode(p) => p.ont_encode(writer),
            Payload::DeployCode(p) => p.ont_encode(writer),
        }
    }
}
