//! # ontio-tx: Ontology transaction construction in Rust
//!
//! Builds, encodes and signs the transactions an Ontology node accepts:
//!
//! - Native contract calls (`SYSCALL Ontology.Native.Invoke`)
//! - NeoVM contract calls (ABI-encoded arguments + `APPCALL`)
//! - Contract deployments
//!
//! ## Quick Start
//!
//! ```rust
//! use ontio_tx::prelude::*;
//!
//! let from = Address::new([0x01; 20]);
//! let to = Address::new([0x02; 20]);
//! let mut tx = make_transfer_tx(NativeToken::Ont, &from, &to, 100, "500", "20000").unwrap();
//!
//! let key = PrivateKey::ecdsa_from_bytes(&[0x11; 32]).unwrap();
//! sign_transaction(&mut tx, &key, None).unwrap();
//!
//! assert!(tx.is_transfer());
//! assert_eq!(tx.sigs.len(), 1);
//! let _wire = tx.to_hex();
//! ```
//!
//! ## Architecture
//!
//! - [`io`]: byte buffers, hex text and the binary wire format
//! - [`vm`]: NeoVM opcodes and the script builder
//! - [`tx`]: transactions, payloads, encoders and signing

pub use ontio_core as tx;
pub use ontio_io as io;
pub use ontio_vm as vm;

/// Everything needed to build and sign a transaction.
pub mod prelude {
    pub use ontio_core::{
        add_sign, make_deploy_code_transaction, make_invoke_transaction, make_native_contract_tx,
        make_transfer_from_tx, make_transfer_tx, sign_transaction, AbiEncoder, AbiFunction,
        Address, BuilderConfig, CoreError, CoreResult, DeployCode, Fixed64, InvokeCode,
        InvokeParams, NativeToken, NeoVmParamsBuilder, Parameter, ParameterValue, Payload,
        PrivateKey, PublicKey, SignatureScheme, SigningKey, Transaction, TransactionBuilder,
        TransactionKind, TxSignature, TxType,
    };
    pub use ontio_io::{ByteArray, ToHex};
    pub use ontio_vm::{OpCode, ScriptBuilder};
}
