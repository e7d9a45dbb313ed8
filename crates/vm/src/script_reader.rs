//! Sequential reader over push-data instructions.

use ontio_io::{DecodeError, OntRead, SliceReader};

use crate::error::{VmError, VmResult};
use crate::op_code::OpCode;

pub struct ScriptReader<'a> {
    reader: SliceReader<'a>,
}

impl<'a> ScriptReader<'a> {
    #[inline]
    pub fn new(script: &'a [u8]) -> Self {
        Self {
            reader: SliceReader::new(script),
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.reader.remaining() == 0
    }

    #[inline]
    pub fn read_byte(&mut self) -> VmResult<u8> {
        Ok(self.reader.read_u8()?)
    }

    /// Consumes one opcode and checks it is `expected`.
    pub fn expect_opcode(&mut self, expected: OpCode) -> VmResult<()> {
        let found = self.read_byte()?;
        if found != expected.as_byte() {
            return Err(VmError::OpcodeMismatch { expected, found });
        }
        Ok(())
    }

    /// Reads the payload of one push-data instruction emitted by
    /// [`ScriptBuilder::push_array`](crate::ScriptBuilder::push_array).
    pub fn read_push_data(&mut self) -> VmResult<Vec<u8>> {
        let op = self.read_byte()?;
        let len = match op {
            0x00 => 0usize,
            b if OpCode::is_push_bytes(b) => b as usize,
            b if b == OpCode::PUSHDATA1.as_byte() => self.reader.read_u8()? as usize,
            b if b == OpCode::PUSHDATA2.as_byte() => self.reader.read_u16()? as usize,
            b if b == OpCode::PUSHDATA4.as_byte() => self.reader.read_u32()? as usize,
            found => {
                return Err(VmError::UnexpectedOpcode {
                    expected: "push data",
                    found,
                })
            }
        };

        let remaining = self.reader.remaining();
        if len > remaining {
            return Err(DecodeError::UnexpectedEof {
                needed: len,
                remaining,
            }
            .into());
        }

        let mut data = vec![0u8; len];
        self.reader.read_into(&mut data)?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptBuilder;

    #[test]
    fn reads_back_every_prefix_width() {
        let payloads = [vec![], vec![1u8; 20], vec![2u8; 200], vec![3u8; 300]];

        let mut builder = ScriptBuilder::new();
        for payload in &payloads {
            builder.push_array(payload);
        }
        builder.push_opcode(OpCode::CHECKSIG);

        let script = builder.into_bytes();
        let mut reader = ScriptReader::new(&script);
        for payload in &payloads {
            assert_eq!(&reader.read_push_data().unwrap(), payload);
        }
        reader.expect_opcode(OpCode::CHECKSIG).unwrap();
        assert!(reader.is_at_end());
    }

    #[test]
    fn rejects_non_push_instruction() {
        let mut reader = ScriptReader::new(&[0x68]);
        assert_eq!(
            reader.read_push_data(),
            Err(VmError::UnexpectedOpcode {
                expected: "push data",
                found: 0x68
            })
        );
    }

    #[test]
    fn truncated_push_is_an_error() {
        let mut reader = ScriptReader::new(&[0x03, 0x01]);
        assert!(matches!(
            reader.read_push_data(),
            Err(VmError::Decode(DecodeError::UnexpectedEof { .. }))
        ));
    }

    #[test]
    fn oversized_length_fails_before_reading() {
        let mut reader = ScriptReader::new(&[0x4e, 0xff, 0xff, 0xff, 0xff, 0x01]);
        assert_eq!(
            reader.read_push_data(),
            Err(VmError::Decode(DecodeError::UnexpectedEof {
                needed: 0xFFFF_FFFF,
                remaining: 1,
            }))
        );
    }
}
