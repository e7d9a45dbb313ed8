//! Contract ABI parameters and their NeoVM encoding.

use num_bigint::BigInt;
use ontio_io::ByteArray;
use ontio_vm::{OpCode, ScriptBuilder};
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::error::{CoreError, CoreResult};

/// Value of a contract argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ParameterValue {
    Boolean(bool),
    Integer(i64),
    Long(BigInt),
    ByteArray(ByteArray),
    String(String),
    Address(Address),
    Array(Vec<Parameter>),
    Struct(Vec<Parameter>),
    /// Entries are pushed in the given order; keys are strings.
    Map(Vec<(String, Parameter)>),
    Interface(String),
}

impl ParameterValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            ParameterValue::Boolean(_) => "Boolean",
            ParameterValue::Integer(_) => "Integer",
            ParameterValue::Long(_) => "Long",
            ParameterValue::ByteArray(_) => "ByteArray",
            ParameterValue::String(_) => "String",
            ParameterValue::Address(_) => "Address",
            ParameterValue::Array(_) => "Array",
            ParameterValue::Struct(_) => "Struct",
            ParameterValue::Map(_) => "Map",
            ParameterValue::Interface(_) => "Interface",
        }
    }
}

/// A named contract argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(flatten)]
    pub value: ParameterValue,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: ParameterValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// An unnamed argument, as used for array and struct members.
    pub fn unnamed(value: ParameterValue) -> Self {
        Self::new("", value)
    }
}

/// A contract function call: the method name and its arguments in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiFunction {
    pub name: String,
    pub parameters: Vec<Parameter>,
}

impl AbiFunction {
    pub fn new(name: impl Into<String>, parameters: Vec<Parameter>) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }
}

/// Turns a contract function call into the argument script that precedes
/// `APPCALL`.
pub trait AbiEncoder {
    /// # Errors
    ///
    /// Returns `CoreError::UnsupportedParameter` for argument types the
    /// encoder cannot express.
    fn encode_function(&self, function: &AbiFunction) -> CoreResult<Vec<u8>>;
}

/// Encoder for NeoVM contracts.
///
/// Arguments are pushed last-to-first and packed into one array, followed by
/// the method name, so the callee pops the name first and then the argument
/// array.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeoVmParamsBuilder;

impl NeoVmParamsBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Pushes one argument onto `sb`.
    pub fn push_parameter(&self, sb: &mut ScriptBuilder, param: &Parameter) -> CoreResult<()> {
        match &param.value {
            ParameterValue::Boolean(value) => {
                sb.push_bool(*value);
            }
            ParameterValue::Integer(value) => {
                sb.push_num(*value);
            }
            ParameterValue::Long(value) => {
                sb.push_bigint(value);
            }
            ParameterValue::ByteArray(value) => {
                sb.push_array(value);
            }
            ParameterValue::String(value) => {
                sb.push_string(value);
            }
            ParameterValue::Address(value) => {
                sb.push_array(&value.serialize());
            }
            ParameterValue::Array(items) => self.push_array_items(sb, items)?,
            ParameterValue::Struct(items) => self.push_struct(sb, items)?,
            ParameterValue::Map(entries) => self.push_map(sb, entries)?,
            ParameterValue::Interface(_) => {
                return Err(CoreError::UnsupportedParameter {
                    name: param.name.clone(),
                    reason: format!("{} arguments cannot be encoded", param.value.type_name()),
                });
            }
        }
        Ok(())
    }

    /// `itemN .. item1 N PACK`
    pub fn push_array_items(&self, sb: &mut ScriptBuilder, items: &[Parameter]) -> CoreResult<()> {
        for item in items.iter().rev() {
            self.push_parameter(sb, item)?;
        }
        sb.push_num(items.len() as i64).push_opcode(OpCode::PACK);
        Ok(())
    }

    /// `PUSH0 NEWSTRUCT TOALTSTACK (item DUPFROMALTSTACK SWAP APPEND)* FROMALTSTACK`
    pub fn push_struct(&self, sb: &mut ScriptBuilder, items: &[Parameter]) -> CoreResult<()> {
        sb.push_num(0)
            .push_opcode(OpCode::NEWSTRUCT)
            .push_opcode(OpCode::TOALTSTACK);
        for item in items {
            self.push_parameter(sb, item)?;
            sb.push_opcode(OpCode::DUPFROMALTSTACK)
                .push_opcode(OpCode::SWAP)
                .push_opcode(OpCode::APPEND);
        }
        sb.push_opcode(OpCode::FROMALTSTACK);
        Ok(())
    }

    /// `NEWMAP TOALTSTACK (DUPFROMALTSTACK key value SETITEM)* FROMALTSTACK`
    pub fn push_map(
        &self,
        sb: &mut ScriptBuilder,
        entries: &[(String, Parameter)],
    ) -> CoreResult<()> {
        sb.push_opcode(OpCode::NEWMAP).push_opcode(OpCode::TOALTSTACK);
        for (key, value) in entries {
            sb.push_opcode(OpCode::DUPFROMALTSTACK).push_string(key);
            self.push_parameter(sb, value)?;
            sb.push_opcode(OpCode::SETITEM);
        }
        sb.push_opcode(OpCode::FROMALTSTACK);
        Ok(())
    }
}

impl AbiEncoder for NeoVmParamsBuilder {
    fn encode_function(&self, function: &AbiFunction) -> CoreResult<Vec<u8>> {
        let mut sb = ScriptBuilder::new();
        self.push_array_items(&mut sb, &function.parameters)?;
        sb.push_string(&function.name);
        Ok(sb.into_bytes())
    }
}
