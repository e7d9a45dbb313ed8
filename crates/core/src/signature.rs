//! Transaction signatures and the public keys they carry.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use ontio_io::{
    decode_hex, ByteArray, DecodeError, DecodeResult, OntDecode, OntEncode, OntRead, OntWrite,
    ToHex,
};
use ontio_vm::{OpCode, ScriptBuilder, ScriptReader};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CoreError, CoreResult};

/// Size of a compressed P-256 public key.
pub const ECDSA_PUBLIC_KEY_SIZE: usize = 33;

/// Size of an Ed25519 public key.
pub const ED25519_PUBLIC_KEY_SIZE: usize = 32;

/// Curve label that follows the key-type byte of an Ed25519 key.
pub const ED25519_CURVE_LABEL: u8 = 0x19;

/// Upper bound for invocation and verification scripts while decoding.
const MAX_WITNESS_SCRIPT_SIZE: u64 = 1024;

/// Signature schemes with their Ontology identifiers.
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
pub enum SignatureScheme {
    Sha224WithEcdsa = 0,
    Sha256WithEcdsa = 1,
    Sha384WithEcdsa = 2,
    Sha512WithEcdsa = 3,
    Sha3_224WithEcdsa = 4,
    Sha3_256WithEcdsa = 5,
    Sha3_384WithEcdsa = 6,
    Sha3_512WithEcdsa = 7,
    Ripemd160WithEcdsa = 8,
    Sm3WithSm2 = 9,
    Sha512WithEddsa = 10,
}

impl SignatureScheme {
    #[inline]
    pub fn id(self) -> u8 {
        self.into()
    }

    /// Human-readable label, e.g. `SHA256withECDSA`.
    pub fn label(self) -> &'static str {
        match self {
            SignatureScheme::Sha224WithEcdsa => "SHA224withECDSA",
            SignatureScheme::Sha256WithEcdsa => "SHA256withECDSA",
            SignatureScheme::Sha384WithEcdsa => "SHA384withECDSA",
            SignatureScheme::Sha512WithEcdsa => "SHA512withECDSA",
            SignatureScheme::Sha3_224WithEcdsa => "SHA3-224withECDSA",
            SignatureScheme::Sha3_256WithEcdsa => "SHA3-256withECDSA",
            SignatureScheme::Sha3_384WithEcdsa => "SHA3-384withECDSA",
            SignatureScheme::Sha3_512WithEcdsa => "SHA3-512withECDSA",
            SignatureScheme::Ripemd160WithEcdsa => "RIPEMD160withECDSA",
            SignatureScheme::Sm3WithSm2 => "SM3withSM2",
            SignatureScheme::Sha512WithEddsa => "SHA512withEdDSA",
        }
    }
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Key-type tag prefixed to non-ECDSA public keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum KeyType {
    Ecdsa = 0x12,
    Sm2 = 0x13,
    Eddsa = 0x14,
}

/// A public key as it appears in a verification script.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicKey {
    /// Compressed SEC1 point on P-256.
    EcdsaP256([u8; ECDSA_PUBLIC_KEY_SIZE]),
    Ed25519([u8; ED25519_PUBLIC_KEY_SIZE]),
}

impl PublicKey {
    #[inline]
    pub fn key_type(&self) -> KeyType {
        match self {
            PublicKey::EcdsaP256(_) => KeyType::Ecdsa,
            PublicKey::Ed25519(_) => KeyType::Eddsa,
        }
    }

    /// Serialized key: the bare compressed point for P-256, or
    /// `0x14 0x19` followed by the 32 key bytes for Ed25519.
    pub fn serialize(&self) -> Vec<u8> {
        match self {
            PublicKey::EcdsaP256(point) => point.to_vec(),
            PublicKey::Ed25519(key) => {
                let mut out = Vec::with_capacity(2 + ED25519_PUBLIC_KEY_SIZE);
                out.push(KeyType::Eddsa.into());
                out.push(ED25519_CURVE_LABEL);
                out.extend_from_slice(key);
                out
            }
        }
    }

    /// Parses the output of [`PublicKey::serialize`].
    pub fn from_bytes(bytes: &[u8]) -> CoreResult<Self> {
        let invalid = || CoreError::Encoding(DecodeError::InvalidValue("public key"));

        match bytes.len() {
            ECDSA_PUBLIC_KEY_SIZE if matches!(bytes[0], 0x02 | 0x03) => {
                let mut point = [0u8; ECDSA_PUBLIC_KEY_SIZE];
                point.copy_from_slice(bytes);
                Ok(PublicKey::EcdsaP256(point))
            }
            n if n == 2 + ED25519_PUBLIC_KEY_SIZE => {
                if bytes[0] != u8::from(KeyType::Eddsa) || bytes[1] != ED25519_CURVE_LABEL {
                    return Err(invalid());
                }
                let mut key = [0u8; ED25519_PUBLIC_KEY_SIZE];
                key.copy_from_slice(&bytes[2..]);
                Ok(PublicKey::Ed25519(key))
            }
            _ => Err(invalid()),
        }
    }

    pub fn from_hex(text: &str) -> CoreResult<Self> {
        Self::from_bytes(&decode_hex(text)?)
    }

    #[inline]
    pub fn to_hex(&self) -> String {
        self.serialize().to_hex()
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({:?}, {})", self.key_type(), self.to_hex())
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(serde::de::Error::custom)
    }
}

/// One signature attached to a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxSignature {
    pub public_key: PublicKey,
    pub scheme: SignatureScheme,
    /// Raw signature as produced by the key, without the scheme byte.
    pub signature: ByteArray,
}

impl TxSignature {
    pub fn new(
        public_key: PublicKey,
        scheme: SignatureScheme,
        signature: impl Into<ByteArray>,
    ) -> Self {
        Self {
            public_key,
            scheme,
            signature: signature.into(),
        }
    }

    /// Signature bytes as pushed by the invocation script. SHA256withECDSA
    /// signatures are the bare `r || s`, every other scheme is prefixed with
    /// its identifier.
    pub fn signature_data(&self) -> Vec<u8> {
        if self.scheme == SignatureScheme::Sha256WithEcdsa {
            return self.signature.as_slice().to_vec();
        }

        let mut data = Vec::with_capacity(1 + self.signature.len());
        data.push(self.scheme.id());
        data.extend_from_slice(&self.signature);
        data
    }

    /// `PUSH(signature)`
    pub fn invocation_script(&self) -> Vec<u8> {
        let mut sb = ScriptBuilder::new();
        sb.push_array(&self.signature_data());
        sb.into_bytes()
    }

    /// `PUSH(public key) CHECKSIG`
    pub fn verification_script(&self) -> Vec<u8> {
        let mut sb = ScriptBuilder::new();
        sb.push_array(&self.public_key.serialize())
            .push_opcode(OpCode::CHECKSIG);
        sb.into_bytes()
    }

    fn from_scripts(invocation: &[u8], verification: &[u8]) -> CoreResult<Self> {
        let mut reader = ScriptReader::new(invocation);
        let data = reader.read_push_data()?;
        if !reader.is_at_end() {
            return Err(
                DecodeError::InvalidScript("invocation script has trailing opcodes".into()).into(),
            );
        }

        let (scheme, signature) = match data.len() {
            64 => (SignatureScheme::Sha256WithEcdsa, data),
            n if n > 1 => {
                let scheme = SignatureScheme::try_from(data[0])
                    .map_err(|_| DecodeError::InvalidValue("signature scheme"))?;
                (scheme, data[1..].to_vec())
            }
            _ => return Err(DecodeError::InvalidValue("signature").into()),
        };

        let mut reader = ScriptReader::new(verification);
        let public_key = PublicKey::from_bytes(&reader.read_push_data()?)?;
        reader.expect_opcode(OpCode::CHECKSIG)?;
        if !reader.is_at_end() {
            return Err(DecodeError::InvalidScript(
                "verification script has trailing opcodes".into(),
            )
            .into());
        }

        Ok(Self::new(public_key, scheme, signature))
    }
}

impl OntEncode for TxSignature {
    fn ont_encode<W: OntWrite>(&self, writer: &mut W) {
        writer.write_var_bytes(&self.invocation_script());
        writer.write_var_bytes(&self.verification_script());
    }
}

impl OntDecode for TxSignature {
    fn ont_decode<R: OntRead>(reader: &mut R) -> DecodeResult<Self> {
        let invocation = reader.read_var_bytes(MAX_WITNESS_SCRIPT_SIZE)?;
        let verification = reader.read_var_bytes(MAX_WITNESS_SCRIPT_SIZE)?;

        Self::from_scripts(&invocation, &verification).map_err(|err| match err {
            CoreError::Encoding(inner) => inner,
            other => DecodeError::InvalidScript(other.to_string()),
        })
    }
}
