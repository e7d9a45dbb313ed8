//! Error types for transaction assembly and signing.

use ontio_io::DecodeError;
use ontio_vm::VmError;
use thiserror::Error;

/// Errors surfaced by the transaction builders, the wire codec and the signer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Malformed hex, truncated wire data or a script that does not decode.
    #[error("encoding: {0}")]
    Encoding(#[from] DecodeError),

    /// A contract argument the ABI encoder cannot express.
    #[error("unsupported parameter '{name}': {reason}")]
    UnsupportedParameter { name: String, reason: String },

    /// A numeric string outside the signed 64-bit range.
    #[error("numeric value '{value}' is out of the 64-bit range")]
    NumericRange { value: String },

    /// Invalid key material or an unsupported key/scheme pairing.
    #[error("signing: {0}")]
    Signing(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("config: {0}")]
    Config(String),
}

impl From<VmError> for CoreError {
    fn from(err: VmError) -> Self {
        match err {
            VmError::Decode(inner) => CoreError::Encoding(inner),
            other => CoreError::Encoding(DecodeError::InvalidScript(other.to_string())),
        }
    }
}

/// Result alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
