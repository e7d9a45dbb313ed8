//! Helpers for the ONT and ONG native token contracts.

use std::fmt;

use num_bigint::BigInt;
use ontio_vm::{OpCode, ScriptBuilder};

use crate::abi::{NeoVmParamsBuilder, Parameter, ParameterValue};
use crate::address::{Address, ONG_CONTRACT, ONT_CONTRACT};
use crate::builder::TransactionBuilder;
use crate::error::CoreResult;
use crate::transaction::Transaction;

/// The two native tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeToken {
    Ont,
    Ong,
}

impl NativeToken {
    #[inline]
    pub fn contract(self) -> Address {
        match self {
            NativeToken::Ont => ONT_CONTRACT,
            NativeToken::Ong => ONG_CONTRACT,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            NativeToken::Ont => "ONT",
            NativeToken::Ong => "ONG",
        }
    }
}

impl fmt::Display for NativeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

fn state(members: Vec<ParameterValue>) -> Vec<Parameter> {
    members.into_iter().map(Parameter::unnamed).collect()
}

/// Parameter script of a native `transfer`: a one-element list holding the
/// struct `(from, to, amount)`.
pub fn transfer_params(from: &Address, to: &Address, amount: u64) -> CoreResult<String> {
    let transfer = state(vec![
        ParameterValue::Address(*from),
        ParameterValue::Address(*to),
        ParameterValue::Long(BigInt::from(amount)),
    ]);

    let mut sb = ScriptBuilder::new();
    NeoVmParamsBuilder.push_struct(&mut sb, &transfer)?;
    sb.push_num(1).push_opcode(OpCode::PACK);
    Ok(sb.to_hex())
}

/// Parameter script of a native `transferFrom`: the struct
/// `(sender, from, to, amount)`.
pub fn transfer_from_params(
    sender: &Address,
    from: &Address,
    to: &Address,
    amount: u64,
) -> CoreResult<String> {
    let transfer = state(vec![
        ParameterValue::Address(*sender),
        ParameterValue::Address(*from),
        ParameterValue::Address(*to),
        ParameterValue::Long(BigInt::from(amount)),
    ]);

    let mut sb = ScriptBuilder::new();
    NeoVmParamsBuilder.push_struct(&mut sb, &transfer)?;
    Ok(sb.to_hex())
}

/// Builds a token transfer paid for by `from`.
pub fn make_transfer_tx(
    token: NativeToken,
    from: &Address,
    to: &Address,
    amount: u64,
    gas_price: &str,
    gas_limit: &str,
) -> CoreResult<Transaction> {
    let params = transfer_params(from, to, amount)?;
    TransactionBuilder::new().make_native_contract_tx(
        "transfer",
        &params,
        &token.contract(),
        Some(gas_price),
        Some(gas_limit),
        Some(from),
    )
}

/// Builds a `transferFrom` of an allowance, paid for by `sender`.
pub fn make_transfer_from_tx(
    token: NativeToken,
    sender: &Address,
    from: &Address,
    to: &Address,
    amount: u64,
    gas_price: &str,
    gas_limit: &str,
) -> CoreResult<Transaction> {
    let params = transfer_from_params(sender, from, to, amount)?;
    TransactionBuilder::new().make_native_contract_tx(
        "transferFrom",
        &params,
        &token.contract(),
        Some(gas_price),
        Some(gas_limit),
        Some(sender),
    )
}
