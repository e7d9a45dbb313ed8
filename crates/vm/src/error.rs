//! Errors raised while building or reading scripts.

use ontio_io::DecodeError;

use crate::op_code::OpCode;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    #[error("vm: {0}")]
    Decode(#[from] DecodeError),

    #[error("vm: unknown opcode 0x{0:02x}")]
    UnknownOpcode(u8),

    #[error("vm: expected {expected} but found opcode 0x{found:02x}")]
    UnexpectedOpcode { expected: &'static str, found: u8 },

    #[error("vm: expected opcode {expected:?} but found 0x{found:02x}")]
    OpcodeMismatch { expected: OpCode, found: u8 },
}

pub type VmResult<T> = Result<T, VmError>;
