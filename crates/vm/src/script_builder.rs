//! Script builder module for the NeoVM.
//!
//! Scripts are emitted strictly in call order. Callers push arguments and the
//! callee identity before the invocation opcode, the way the stack machine
//! consumes them.

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use ontio_io::{decode_hex, ByteArray};
use tracing::trace;

use crate::error::VmResult;
use crate::op_code::OpCode;

/// Largest payload whose length fits into a `PUSHBYTESn` opcode.
pub const MAX_PUSHBYTES_LEN: usize = OpCode::PUSHBYTES75 as usize;

/// Helps construct VM scripts programmatically.
#[derive(Debug, Clone, Default)]
pub struct ScriptBuilder {
    /// The script being built
    script: ByteArray,
}

impl ScriptBuilder {
    /// Creates a new script builder.
    #[inline]
    pub fn new() -> Self {
        Self {
            script: ByteArray::new(),
        }
    }

    /// Emits a single byte to the script.
    #[inline]
    pub fn emit(&mut self, op: u8) -> &mut Self {
        self.script.push_u8(op);
        self
    }

    /// Emits an opcode to the script.
    #[inline]
    pub fn push_opcode(&mut self, op: OpCode) -> &mut Self {
        self.emit(op.as_byte())
    }

    /// Emits raw bytes without interpretation.
    #[inline]
    pub fn emit_raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.script.push_raw(bytes);
        self
    }

    /// Emits a push operation with the given data.
    ///
    /// Lengths up to 75 are carried by the opcode itself, longer payloads use
    /// `PUSHDATA1`/`PUSHDATA2`/`PUSHDATA4` followed by a little-endian length.
    pub fn push_array(&mut self, data: &[u8]) -> &mut Self {
        let len = data.len();

        if len <= MAX_PUSHBYTES_LEN {
            self.emit(len as u8);
        } else if len < 0x100 {
            self.push_opcode(OpCode::PUSHDATA1);
            self.emit(len as u8);
        } else if len < 0x1_0000 {
            self.push_opcode(OpCode::PUSHDATA2);
            self.script.push_u16(len as u16);
        } else {
            self.push_opcode(OpCode::PUSHDATA4);
            self.script.push_u32(len as u32);
        }

        self.emit_raw(data)
    }

    /// Decodes `hex` and pushes the bytes as with [`push_array`](Self::push_array).
    pub fn push_hex_string(&mut self, hex: &str) -> VmResult<&mut Self> {
        let bytes = decode_hex(hex)?;
        Ok(self.push_array(&bytes))
    }

    /// Pushes the UTF-8 bytes of `value`.
    #[inline]
    pub fn push_string(&mut self, value: &str) -> &mut Self {
        self.push_array(value.as_bytes())
    }

    /// Emits a push operation for an integer.
    ///
    /// `-1..=16` use the dedicated single-byte opcodes; everything else is
    /// pushed as minimal two's-complement little-endian bytes.
    pub fn push_num(&mut self, value: i64) -> &mut Self {
        if value == -1 {
            return self.push_opcode(OpCode::PUSHM1);
        }
        if value == 0 {
            return self.push_opcode(OpCode::PUSH0);
        }
        if let Some(op) = OpCode::small_int(value) {
            return self.push_opcode(op);
        }

        let mut bytes = Vec::new();
        let mut v = value;

        // Convert to little-endian byte representation
        while v != 0 && v != -1 {
            bytes.push((v & 0xFF) as u8);
            v >>= 8;
        }

        // Handle sign bit
        let high_bit = bytes.last().is_some_and(|b| b & 0x80 != 0);
        if v == -1 && !high_bit {
            bytes.push(0xFF);
        } else if v == 0 && high_bit {
            bytes.push(0x00);
        }

        self.push_array(&bytes)
    }

    /// Emits a push operation for an arbitrary precision integer.
    pub fn push_bigint(&mut self, value: &BigInt) -> &mut Self {
        if let Some(v) = value.to_i64() {
            return self.push_num(v);
        }
        self.push_array(&value.to_signed_bytes_le())
    }

    /// Emits a push operation for a boolean.
    #[inline]
    pub fn push_bool(&mut self, value: bool) -> &mut Self {
        if value {
            self.push_opcode(OpCode::PUSHT)
        } else {
            self.push_opcode(OpCode::PUSHF)
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.script.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.script.as_slice()
    }

    #[inline]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.script.as_slice().to_vec()
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.script.into_vec()
    }

    /// Lowercase hex of the script emitted so far.
    pub fn to_hex(&self) -> String {
        trace!(len = self.script.len(), "script emitted");
        self.script.to_hex()
    }
}
