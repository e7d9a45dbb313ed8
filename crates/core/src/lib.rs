//! # Ontio Core
//!
//! Transactions for the Ontology blockchain: how contract calls become
//! scripts, how scripts become payloads, and how transactions are encoded,
//! hashed and signed.
//!
//! ## Calling conventions
//!
//! - **Native contracts** ([`make_native_contract_tx`]): arguments, method
//!   name and contract address are pushed, then `SYSCALL` into
//!   `Ontology.Native.Invoke`.
//! - **NeoVM contracts** ([`make_invoke_transaction`]): arguments are encoded
//!   by an [`AbiEncoder`] and followed by `APPCALL` and the contract address.
//! - **Deployments** ([`make_deploy_code_transaction`]): the contract code
//!   and its metadata are carried as-is.
//!
//! ## Example
//!
//! ```rust
//! use ontio_core::{make_native_contract_tx, Address, TransactionKind};
//!
//! let tx = make_native_contract_tx("transfer", "", &Address::ZERO, None, None, None).unwrap();
//! assert_eq!(tx.kind, TransactionKind::Transfer);
//! assert!(tx.payload.code_hex().ends_with("68164f6e746f6c6f67792e4e61746976652e496e766f6b65"));
//! ```

pub mod abi;
pub mod address;
pub mod builder;
pub mod config;
pub mod crypto;
pub mod error;
pub mod fixed64;
pub mod native;
pub mod payload;
pub mod signature;
pub mod transaction;

pub use abi::{AbiEncoder, AbiFunction, NeoVmParamsBuilder, Parameter, ParameterValue};
pub use address::{
    Address, ADDRESS_SIZE, AUTH_CONTRACT, GLOBAL_PARAMS_CONTRACT, GOVERNANCE_CONTRACT,
    ONG_CONTRACT, ONT_CONTRACT, ONT_ID_CONTRACT,
};
pub use builder::{
    add_sign, make_deploy_code_transaction, make_invoke_transaction, make_native_contract_tx,
    sign_transaction, InvokeParams, TransactionBuilder,
};
pub use config::{BuilderConfig, DEFAULT_CONFIG};
pub use crypto::{PrivateKey, SigningKey};
pub use error::{CoreError, CoreResult};
pub use fixed64::Fixed64;
pub use native::{make_transfer_from_tx, make_transfer_tx, NativeToken};
pub use payload::{DeployCode, InvokeCode, Payload};
pub use signature::{KeyType, PublicKey, SignatureScheme, TxSignature};
pub use transaction::{Transaction, TransactionKind, TxType};
