//! NeoVM opcodes as executed by Ontology nodes.
//!
//! Only the instructions this workspace emits or inspects are listed. Byte
//! values `0x01..=0x4B` are `PUSHBYTESn` and carry their length in the opcode
//! itself; they are handled by [`OpCode::is_push_bytes`] rather than variants.

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::VmError;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
pub enum OpCode {
    // Constants
    PUSH0 = 0x00,
    PUSHBYTES1 = 0x01,
    PUSHBYTES75 = 0x4B,
    PUSHDATA1 = 0x4C,
    PUSHDATA2 = 0x4D,
    PUSHDATA4 = 0x4E,
    PUSHM1 = 0x4F,
    PUSH1 = 0x51,
    PUSH2 = 0x52,
    PUSH3 = 0x53,
    PUSH4 = 0x54,
    PUSH5 = 0x55,
    PUSH6 = 0x56,
    PUSH7 = 0x57,
    PUSH8 = 0x58,
    PUSH9 = 0x59,
    PUSH10 = 0x5A,
    PUSH11 = 0x5B,
    PUSH12 = 0x5C,
    PUSH13 = 0x5D,
    PUSH14 = 0x5E,
    PUSH15 = 0x5F,
    PUSH16 = 0x60,

    // Flow control
    NOP = 0x61,
    JMP = 0x62,
    JMPIF = 0x63,
    JMPIFNOT = 0x64,
    CALL = 0x65,
    RET = 0x66,
    APPCALL = 0x67,
    SYSCALL = 0x68,
    TAILCALL = 0x69,

    // Stack
    DUPFROMALTSTACK = 0x6A,
    TOALTSTACK = 0x6B,
    FROMALTSTACK = 0x6C,
    DROP = 0x75,
    DUP = 0x76,
    SWAP = 0x7C,

    // Crypto
    CHECKSIG = 0xAC,
    CHECKMULTISIG = 0xAE,

    // Compound types
    ARRAYSIZE = 0xC0,
    PACK = 0xC1,
    UNPACK = 0xC2,
    PICKITEM = 0xC3,
    SETITEM = 0xC4,
    NEWARRAY = 0xC5,
    NEWSTRUCT = 0xC6,
    NEWMAP = 0xC7,
    APPEND = 0xC8,

    // Exceptions
    THROW = 0xF0,
    THROWIFNOT = 0xF1,
}

impl OpCode {
    /// `true` is pushed with the same byte as `PUSH1`.
    pub const PUSHT: OpCode = OpCode::PUSH1;
    /// `false` is pushed with the same byte as `PUSH0`.
    pub const PUSHF: OpCode = OpCode::PUSH0;

    #[inline]
    pub fn as_byte(self) -> u8 {
        self.into()
    }

    /// Whether `byte` is a `PUSHBYTES1..=PUSHBYTES75` instruction.
    #[inline]
    pub fn is_push_bytes(byte: u8) -> bool {
        (OpCode::PUSHBYTES1 as u8..=OpCode::PUSHBYTES75 as u8).contains(&byte)
    }

    /// The `PUSH1..=PUSH16` opcode for `value`, if there is one.
    #[inline]
    pub fn small_int(value: i64) -> Option<OpCode> {
        if (1..=16).contains(&value) {
            OpCode::try_from(OpCode::PUSH1 as u8 + (value as u8 - 1)).ok()
        } else {
            None
        }
    }

    pub fn from_byte(byte: u8) -> Result<OpCode, VmError> {
        OpCode::try_from(byte).map_err(|_| VmError::UnknownOpcode(byte))
    }
}
