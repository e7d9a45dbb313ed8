//! Private keys and the signing seam used by the transaction signer.

use std::fmt;

use ed25519_dalek::Signer as _;
use ontio_io::decode_hex;
use p256::ecdsa::signature::Signer as _;
use p256::SecretKey;

use crate::error::{CoreError, CoreResult};
use crate::signature::{PublicKey, SignatureScheme, ECDSA_PUBLIC_KEY_SIZE};

/// Size of a raw private key for either supported curve.
pub const PRIVATE_KEY_SIZE: usize = 32;

/// Anything able to produce signatures over transaction hashes.
///
/// Implemented by [`PrivateKey`]; hardware or remote signers implement it to
/// plug into [`sign_transaction`](crate::sign_transaction).
pub trait SigningKey {
    fn public_key(&self) -> PublicKey;

    /// Scheme used when the caller does not pick one.
    fn default_scheme(&self) -> SignatureScheme;

    /// Signs `message` with `scheme`, returning the raw signature bytes.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Signing` if the key cannot sign with `scheme`.
    fn sign(&self, message: &[u8], scheme: SignatureScheme) -> CoreResult<Vec<u8>>;
}

/// An in-memory private key.
#[derive(Clone)]
pub enum PrivateKey {
    EcdsaP256(p256::ecdsa::SigningKey),
    Ed25519(ed25519_dalek::SigningKey),
}

impl PrivateKey {
    /// Creates a P-256 key from its 32-byte scalar.
    pub fn ecdsa_from_bytes(bytes: &[u8]) -> CoreResult<Self> {
        let raw = raw_key(bytes)?;
        let secret = SecretKey::from_bytes((&raw).into())
            .map_err(|err| CoreError::Signing(format!("invalid P-256 private key: {err}")))?;
        Ok(PrivateKey::EcdsaP256(p256::ecdsa::SigningKey::from(secret)))
    }

    /// Creates an Ed25519 key from its 32-byte seed.
    pub fn ed25519_from_bytes(bytes: &[u8]) -> CoreResult<Self> {
        let raw = raw_key(bytes)?;
        Ok(PrivateKey::Ed25519(ed25519_dalek::SigningKey::from_bytes(&raw)))
    }

    pub fn ecdsa_from_hex(text: &str) -> CoreResult<Self> {
        Self::ecdsa_from_bytes(&decode_hex(text)?)
    }

    pub fn ed25519_from_hex(text: &str) -> CoreResult<Self> {
        Self::ed25519_from_bytes(&decode_hex(text)?)
    }

    fn curve(&self) -> &'static str {
        match self {
            PrivateKey::EcdsaP256(_) => "P-256",
            PrivateKey::Ed25519(_) => "Ed25519",
        }
    }
}

fn raw_key(bytes: &[u8]) -> CoreResult<[u8; PRIVATE_KEY_SIZE]> {
    bytes.try_into().map_err(|_| {
        CoreError::Signing(format!(
            "private key must be {PRIVATE_KEY_SIZE} bytes, got {}",
            bytes.len()
        ))
    })
}

impl SigningKey for PrivateKey {
    fn public_key(&self) -> PublicKey {
        match self {
            PrivateKey::EcdsaP256(key) => {
                let point = key.verifying_key().to_encoded_point(true);
                let mut compressed = [0u8; ECDSA_PUBLIC_KEY_SIZE];
                compressed.copy_from_slice(point.as_bytes());
                PublicKey::EcdsaP256(compressed)
            }
            PrivateKey::Ed25519(key) => PublicKey::Ed25519(key.verifying_key().to_bytes()),
        }
    }

    fn default_scheme(&self) -> SignatureScheme {
        match self {
            PrivateKey::EcdsaP256(_) => SignatureScheme::Sha256WithEcdsa,
            PrivateKey::Ed25519(_) => SignatureScheme::Sha512WithEddsa,
        }
    }

    fn sign(&self, message: &[u8], scheme: SignatureScheme) -> CoreResult<Vec<u8>> {
        match (self, scheme) {
            (PrivateKey::EcdsaP256(key), SignatureScheme::Sha256WithEcdsa) => {
                let signature: p256::ecdsa::Signature = key.sign(message);
                Ok(signature.to_bytes().to_vec())
            }
            (PrivateKey::Ed25519(key), SignatureScheme::Sha512WithEddsa) => {
                let signature: ed25519_dalek::Signature = key.sign(message);
                Ok(signature.to_bytes().to_vec())
            }
            (key, scheme) => Err(CoreError::Signing(format!(
                "scheme {scheme} is not supported for {} keys",
                key.curve()
            ))),
        }
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey({}, {:?})", self.curve(), self.public_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use p256::ecdsa::signature::Verifier;

    #[test]
    fn ecdsa_public_key_is_compressed() {
        let key = PrivateKey::ecdsa_from_bytes(&[0x01u8; 32]).unwrap();
        let PublicKey::EcdsaP256(point) = key.public_key() else {
            panic!("expected a P-256 key");
        };
        assert!(matches!(point[0], 0x02 | 0x03));
        assert_eq!(key.default_scheme(), SignatureScheme::Sha256WithEcdsa);
    }

    #[test]
    fn ecdsa_signature_verifies() {
        let key = PrivateKey::ecdsa_from_bytes(&[0x07u8; 32]).unwrap();
        let message = b"ontology";
        let sig = key.sign(message, SignatureScheme::Sha256WithEcdsa).unwrap();
        assert_eq!(sig.len(), 64);

        let PrivateKey::EcdsaP256(inner) = &key else {
            panic!("expected a P-256 key");
        };
        let parsed = p256::ecdsa::Signature::from_slice(&sig).unwrap();
        assert!(inner.verifying_key().verify(message, &parsed).is_ok());
    }

    #[test]
    fn ed25519_signature_is_deterministic() {
        let key = PrivateKey::ed25519_from_bytes(&[0x09u8; 32]).unwrap();
        let a = key.sign(b"msg", SignatureScheme::Sha512WithEddsa).unwrap();
        let b = key.sign(b"msg", SignatureScheme::Sha512WithEddsa).unwrap();
        assert_eq!(a.len(), 64);
        assert_eq!(a, b);
        assert!(matches!(key.public_key(), PublicKey::Ed25519(_)));
    }

    #[test]
    fn mismatched_scheme_is_a_signing_error() {
        let key = PrivateKey::ecdsa_from_bytes(&[0x01u8; 32]).unwrap();
        assert!(matches!(
            key.sign(b"msg", SignatureScheme::Sm3WithSm2),
            Err(CoreError::Signing(_))
        ));

        let key = PrivateKey::ed25519_from_bytes(&[0x01u8; 32]).unwrap();
        assert!(matches!(
            key.sign(b"msg", SignatureScheme::Sha256WithEcdsa),
            Err(CoreError::Signing(_))
        ));
    }

    #[test]
    fn invalid_key_material() {
        assert!(matches!(
            PrivateKey::ecdsa_from_bytes(&[0u8; 32]),
            Err(CoreError::Signing(_))
        ));
        assert!(matches!(
            PrivateKey::ed25519_from_bytes(&[1u8; 31]),
            Err(CoreError::Signing(_))
        ));
        assert!(matches!(
            PrivateKey::ecdsa_from_hex("not hex"),
            Err(CoreError::Encoding(_))
        ));
    }
}
