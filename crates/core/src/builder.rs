//! Transaction assembly for native calls, NeoVM calls and deployments, and
//! the signer that attaches signatures to the result.

use ontio_io::decode_hex;
use ontio_vm::{OpCode, ScriptBuilder};
use tracing::{debug, warn};

use crate::abi::{AbiEncoder, AbiFunction, NeoVmParamsBuilder, Parameter};
use crate::address::Address;
use crate::config::{BuilderConfig, DEFAULT_CONFIG, TX_VERSION};
use crate::crypto::SigningKey;
use crate::error::CoreResult;
use crate::fixed64::Fixed64;
use crate::payload::{DeployCode, InvokeCode, Payload};
use crate::signature::{SignatureScheme, TxSignature};
use crate::transaction::{Transaction, TransactionKind};

/// Native method names that move tokens.
pub const TRANSFER_METHODS: [&str; 2] = ["transfer", "transferFrom"];

/// Arguments of a NeoVM contract call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvokeParams {
    /// An argument script already encoded as hex; it is pushed as one byte array.
    RawHex(String),
    /// Arguments passed through the ABI encoder.
    Structured(Vec<Parameter>),
}

impl From<Vec<Parameter>> for InvokeParams {
    fn from(value: Vec<Parameter>) -> Self {
        InvokeParams::Structured(value)
    }
}

impl From<&str> for InvokeParams {
    fn from(value: &str) -> Self {
        InvokeParams::RawHex(value.to_string())
    }
}

/// Builds unsigned transactions and signs them.
///
/// The free functions of this module use a builder with the process-wide
/// [`DEFAULT_CONFIG`] and the NeoVM ABI encoder.
#[derive(Debug, Clone)]
pub struct TransactionBuilder<E = NeoVmParamsBuilder> {
    config: BuilderConfig,
    encoder: E,
}

impl TransactionBuilder {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CONFIG.clone())
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        Self::with_encoder(config, NeoVmParamsBuilder)
    }
}

impl Default for TransactionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: AbiEncoder> TransactionBuilder<E> {
    pub fn with_encoder(config: BuilderConfig, encoder: E) -> Self {
        Self { config, encoder }
    }

    #[inline]
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Builds a call into a native contract.
    ///
    /// The script pushes the parameters, the method name and the contract
    /// address, then a zero version and `SYSCALL` of the native-invoke
    /// service. `transfer` and `transferFrom` calls are tagged as transfers.
    /// Gas fields and payer are only set when supplied; an empty gas string
    /// counts as not supplied.
    ///
    /// # Errors
    ///
    /// `CoreError::Encoding` for malformed `params_hex`, and
    /// `CoreError::NumericRange` / `CoreError::Encoding` for bad gas text.
    pub fn make_native_contract_tx(
        &self,
        fn_name: &str,
        params_hex: &str,
        contract: &Address,
        gas_price: Option<&str>,
        gas_limit: Option<&str>,
        payer: Option<&Address>,
    ) -> CoreResult<Transaction> {
        let mut sb = ScriptBuilder::new();
        sb.push_hex_string(params_hex)?;
        sb.push_string(fn_name)
            .push_array(&contract.serialize())
            .push_num(0)
            .push_opcode(OpCode::SYSCALL)
            .push_string(&self.config.native_invoke_name);

        let mut tx = self.new_tx(InvokeCode::new(sb.into_bytes()));
        if TRANSFER_METHODS.contains(&fn_name) {
            tx.kind = TransactionKind::Transfer;
        }
        tx.gas_price = optional_gas(gas_price)?;
        tx.gas_limit = optional_gas(gas_limit)?;
        tx.payer = payer.copied();

        debug!(
            fn_name,
            contract = %contract.to_hex(),
            kind = ?tx.kind,
            code_len = tx.payload.code().len(),
            "assembled native contract transaction"
        );
        Ok(tx)
    }

    /// Builds a call into a NeoVM contract.
    ///
    /// Raw hex arguments are pushed as one byte array; structured arguments
    /// go through the ABI encoder and are appended as-is. `APPCALL` and the
    /// contract address follow. Missing gas values take the configured
    /// defaults.
    ///
    /// # Errors
    ///
    /// `CoreError::Encoding` for malformed hex, `CoreError::UnsupportedParameter`
    /// from the ABI encoder.
    pub fn make_invoke_transaction(
        &self,
        fn_name: &str,
        params: &InvokeParams,
        contract: &Address,
        gas_price: Option<&str>,
        gas_limit: Option<&str>,
        payer: Option<&Address>,
    ) -> CoreResult<Transaction> {
        let mut sb = ScriptBuilder::new();
        match params {
            InvokeParams::RawHex(hex) => {
                sb.push_hex_string(hex)?;
            }
            InvokeParams::Structured(parameters) => {
                let function = AbiFunction::new(fn_name, parameters.clone());
                sb.emit_raw(&self.encoder.encode_function(&function)?);
            }
        }
        sb.push_opcode(OpCode::APPCALL);
        sb.push_hex_string(&contract.to_hex())?;

        let mut tx = self.new_tx(InvokeCode::new(sb.into_bytes()));
        tx.gas_price = Some(self.gas_or_default(gas_price, &self.config.default_gas_price)?);
        tx.gas_limit = Some(self.gas_or_default(gas_limit, &self.config.default_gas_limit)?);
        tx.payer = payer.copied();

        debug!(
            fn_name,
            contract = %contract.to_hex(),
            code_len = tx.payload.code().len(),
            "assembled vm contract transaction"
        );
        Ok(tx)
    }

    /// Builds a contract deployment. The code is carried verbatim.
    ///
    /// # Errors
    ///
    /// `CoreError::Encoding` for malformed code hex or gas text,
    /// `CoreError::NumericRange` for gas out of range.
    #[allow(clippy::too_many_arguments)]
    pub fn make_deploy_code_transaction(
        &self,
        code_hex: &str,
        name: &str,
        version: &str,
        author: &str,
        email: &str,
        description: &str,
        need_storage: bool,
        gas_price: &str,
        gas_limit: &str,
        payer: Option<&Address>,
    ) -> CoreResult<Transaction> {
        let deploy = DeployCode {
            code: decode_hex(code_hex)?.into(),
            need_storage,
            name: name.to_string(),
            version: version.to_string(),
            author: author.to_string(),
            email: email.to_string(),
            description: description.to_string(),
        };

        let mut tx = Transaction::new(deploy);
        tx.version = TX_VERSION;
        tx.gas_price = Some(Fixed64::parse(gas_price)?);
        tx.gas_limit = Some(Fixed64::parse(gas_limit)?);
        tx.payer = payer.copied();

        debug!(
            name,
            version,
            code_len = tx.payload.code().len(),
            need_storage,
            "assembled deploy transaction"
        );
        Ok(tx)
    }

    /// Replaces the signatures of `tx` with one signature by `key`.
    pub fn sign_transaction<K>(
        &self,
        tx: &mut Transaction,
        key: &K,
        scheme: Option<SignatureScheme>,
    ) -> CoreResult<()>
    where
        K: SigningKey + ?Sized,
    {
        sign_transaction(tx, key, scheme)
    }

    /// Appends a signature by `key` after the existing ones.
    pub fn add_sign<K>(
        &self,
        tx: &mut Transaction,
        key: &K,
        scheme: Option<SignatureScheme>,
    ) -> CoreResult<()>
    where
        K: SigningKey + ?Sized,
    {
        add_sign(tx, key, scheme)
    }

    fn new_tx(&self, payload: impl Into<Payload>) -> Transaction {
        let mut tx = Transaction::new(payload);
        tx.version = self.config.tx_version;
        tx
    }

    fn gas_or_default(&self, value: Option<&str>, default: &str) -> CoreResult<Fixed64> {
        match value {
            Some(text) if !text.is_empty() => Fixed64::parse(text),
            _ => Fixed64::parse(default),
        }
    }
}

fn optional_gas(value: Option<&str>) -> CoreResult<Option<Fixed64>> {
    match value {
        Some(text) if !text.is_empty() => Fixed64::parse(text).map(Some),
        _ => Ok(None),
    }
}

fn create_signature<K>(
    tx: &Transaction,
    key: &K,
    scheme: Option<SignatureScheme>,
) -> CoreResult<TxSignature>
where
    K: SigningKey + ?Sized,
{
    let scheme = scheme.unwrap_or_else(|| key.default_scheme());
    let hash = tx.hash();
    match key.sign(&hash, scheme) {
        Ok(signature) => Ok(TxSignature::new(key.public_key(), scheme, signature)),
        Err(err) => {
            warn!(%err, %scheme, tx = %tx.hash_hex(), "signing failed");
            Err(err)
        }
    }
}

/// See [`TransactionBuilder::make_native_contract_tx`].
pub fn make_native_contract_tx(
    fn_name: &str,
    params_hex: &str,
    contract: &Address,
    gas_price: Option<&str>,
    gas_limit: Option<&str>,
    payer: Option<&Address>,
) -> CoreResult<Transaction> {
    TransactionBuilder::new().make_native_contract_tx(
        fn_name, params_hex, contract, gas_price, gas_limit, payer,
    )
}

/// See [`TransactionBuilder::make_invoke_transaction`].
pub fn make_invoke_transaction(
    fn_name: &str,
    params: &InvokeParams,
    contract: &Address,
    gas_price: Option<&str>,
    gas_limit: Option<&str>,
    payer: Option<&Address>,
) -> CoreResult<Transaction> {
    TransactionBuilder::new().make_invoke_transaction(
        fn_name, params, contract, gas_price, gas_limit, payer,
    )
}

/// See [`TransactionBuilder::make_deploy_code_transaction`].
#[allow(clippy::too_many_arguments)]
pub fn make_deploy_code_transaction(
    code_hex: &str,
    name: &str,
    version: &str,
    author: &str,
    email: &str,
    description: &str,
    need_storage: bool,
    gas_price: &str,
    gas_limit: &str,
    payer: Option<&Address>,
) -> CoreResult<Transaction> {
    TransactionBuilder::new().make_deploy_code_transaction(
        code_hex,
        name,
        version,
        author,
        email,
        description,
        need_storage,
        gas_price,
        gas_limit,
        payer,
    )
}

/// Signs the unsigned encoding of `tx` and replaces its signatures with the
/// result. `tx` is untouched when signing fails.
pub fn sign_transaction<K>(
    tx: &mut Transaction,
    key: &K,
    scheme: Option<SignatureScheme>,
) -> CoreResult<()>
where
    K: SigningKey + ?Sized,
{
    let sig = create_signature(tx, key, scheme)?;
    tx.sigs = vec![sig];
    debug!(tx = %tx.hash_hex(), "transaction signed");
    Ok(())
}

/// Signs the unsigned encoding of `tx` and appends the result after the
/// existing signatures. `tx` is untouched when signing fails.
pub fn add_sign<K>(tx: &mut Transaction, key: &K, scheme: Option<SignatureScheme>) -> CoreResult<()>
where
    K: SigningKey + ?Sized,
{
    let sig = create_signature(tx, key, scheme)?;
    tx.sigs.push(sig);
    debug!(tx = %tx.hash_hex(), sigs = tx.sigs.len(), "signature added");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::ParameterValue;
    use crate::address::ONT_CONTRACT;
    use crate::error::CoreError;
    use crate::signature::PublicKey;
    use crate::transaction::TxType;

    const GOLDEN_TRANSFER: &str = "00087472616e736665721400000000000000000000000000000000000000000068164f6e746f6c6f67792e4e61746976652e496e766f6b65";

    /// Produces a fixed signature and records nothing; fails on demand.
    struct FixedKey {
        tag: u8,
        fail: bool,
    }

    impl SigningKey for FixedKey {
        fn public_key(&self) -> PublicKey {
            PublicKey::Ed25519([self.tag; 32])
        }

        fn default_scheme(&self) -> SignatureScheme {
            SignatureScheme::Sha512WithEddsa
        }

        fn sign(&self, _message: &[u8], _scheme: SignatureScheme) -> CoreResult<Vec<u8>> {
            if self.fail {
                return Err(CoreError::Signing("key is locked".into()));
            }
            Ok(vec![self.tag; 64])
        }
    }

    fn native_tx(fn_name: &str) -> Transaction {
        make_native_contract_tx(fn_name, "", &Address::ZERO, None, None, None).unwrap()
    }

    #[test]
    fn native_transfer_golden_script() {
        let tx = native_tx("transfer");
        assert_eq!(tx.payload.code_hex(), GOLDEN_TRANSFER);
        assert_eq!(tx.tx_type(), TxType::Invoke);
        assert_eq!(tx.kind, TransactionKind::Transfer);
    }

    #[test]
    fn transfer_tagging() {
        assert!(native_tx("transfer").is_transfer());
        assert!(native_tx("transferFrom").is_transfer());
        assert!(!native_tx("approve").is_transfer());
        assert!(!native_tx("Transfer").is_transfer());
    }

    #[test]
    fn vm_calls_are_never_tagged_as_transfers() {
        let contract = Address::new([0x55; 20]);
        for name in TRANSFER_METHODS {
            let tx = make_invoke_transaction(
                name,
                &InvokeParams::RawHex(String::new()),
                &contract,
                None,
                None,
                None,
            )
            .unwrap();
            assert_eq!(tx.kind, TransactionKind::Generic);
            assert!(!tx.is_transfer());
        }
    }

    #[test]
    fn native_gas_is_optional() {
        let tx = native_tx("balanceOf");
        assert_eq!(tx.gas_price, None);
        assert_eq!(tx.gas_limit, None);
        assert_eq!(tx.payer, None);

        let payer = Address::new([0x33; 20]);
        let tx = make_native_contract_tx(
            "balanceOf",
            "",
            &ONT_CONTRACT,
            Some("0"),
            Some(""),
            Some(&payer),
        )
        .unwrap();
        assert_eq!(tx.gas_price, Some(Fixed64::ZERO));
        assert_eq!(tx.gas_limit, None);
        assert_eq!(tx.payer, Some(payer));
    }

    #[test]
    fn native_params_are_length_prefixed() {
        let tx = make_native_contract_tx("name", "abcd", &ONT_CONTRACT, None, None, None).unwrap();
        assert!(tx.payload.code_hex().starts_with("02abcd046e616d6514"));
    }

    #[test]
    fn native_rejects_malformed_params() {
        for params in ["abc", "zz"] {
            assert!(matches!(
                make_native_contract_tx("transfer", params, &ONT_CONTRACT, None, None, None),
                Err(CoreError::Encoding(_))
            ));
        }
        assert!(matches!(
            make_native_contract_tx(
                "transfer",
                "",
                &ONT_CONTRACT,
                Some("99999999999999999999"),
                None,
                None
            ),
            Err(CoreError::NumericRange { .. })
        ));
    }

    #[test]
    fn vm_call_applies_default_gas() {
        let contract = Address::new([0x44; 20]);
        let tx = make_invoke_transaction(
            "name",
            &InvokeParams::Structured(vec![]),
            &contract,
            None,
            None,
            None,
        )
        .unwrap();
        assert_eq!(tx.gas_price, Some(Fixed64::ZERO));
        assert_eq!(tx.gas_limit, Some(Fixed64::new(20000)));
        assert_eq!(tx.kind, TransactionKind::Generic);

        // PUSH0 PACK "name" APPCALL PUSH(contract)
        let expected = format!("00c1046e616d656714{}", contract.to_hex());
        assert_eq!(tx.payload.code_hex(), expected);
    }

    #[test]
    fn vm_call_with_raw_hex() {
        let tx = make_invoke_transaction(
            "ignored",
            &"51c1".into(),
            &ONT_CONTRACT,
            Some("500"),
            Some("30000"),
            None,
        )
        .unwrap();
        assert_eq!(tx.gas_price, Some(Fixed64::new(500)));
        assert_eq!(tx.gas_limit, Some(Fixed64::new(30000)));
        assert!(tx.payload.code_hex().starts_with("0251c167"));
    }

    #[test]
    fn vm_call_uses_configured_defaults() {
        let config = BuilderConfig {
            default_gas_price: "500".into(),
            default_gas_limit: "40000".into(),
            ..BuilderConfig::default()
        };
        let tx = TransactionBuilder::with_config(config)
            .make_invoke_transaction(
                "f",
                &InvokeParams::RawHex(String::new()),
                &ONT_CONTRACT,
                None,
                None,
                None,
            )
            .unwrap();
        assert_eq!(tx.gas_price, Some(Fixed64::new(500)));
        assert_eq!(tx.gas_limit, Some(Fixed64::new(40000)));
    }

    #[test]
    fn vm_call_errors_propagate() {
        assert!(matches!(
            make_invoke_transaction(
                "f",
                &InvokeParams::RawHex("0g".into()),
                &ONT_CONTRACT,
                None,
                None,
                None
            ),
            Err(CoreError::Encoding(_))
        ));

        let params = InvokeParams::Structured(vec![Parameter::new(
            "cb",
            ParameterValue::Interface("IFoo".into()),
        )]);
        assert!(matches!(
            make_invoke_transaction("f", &params, &ONT_CONTRACT, None, None, None),
            Err(CoreError::UnsupportedParameter { .. })
        ));
    }

    #[test]
    fn custom_encoder_output_is_appended_raw() {
        struct Canned;
        impl AbiEncoder for Canned {
            fn encode_function(&self, _function: &AbiFunction) -> CoreResult<Vec<u8>> {
                Ok(vec![0xde, 0xad])
            }
        }

        let builder = TransactionBuilder::with_encoder(BuilderConfig::default(), Canned);
        let tx = builder
            .make_invoke_transaction(
                "f",
                &InvokeParams::Structured(vec![]),
                &ONT_CONTRACT,
                None,
                None,
                None,
            )
            .unwrap();
        assert!(tx.payload.code_hex().starts_with("dead67"));
    }

    #[test]
    fn deploy_carries_fields_verbatim() {
        let tx = make_deploy_code_transaction(
            "0x00c56b",
            "Token",
            "1.0",
            "alice",
            "alice@example.com",
            "demo",
            true,
            "500",
            "20000000",
            None,
        )
        .unwrap();
        assert_eq!(tx.tx_type(), TxType::Deploy);
        assert_eq!(tx.version, 0x00);
        assert_eq!(tx.gas_price, Some(Fixed64::new(500)));
        assert_eq!(tx.gas_limit, Some(Fixed64::new(20_000_000)));

        let Payload::DeployCode(deploy) = &tx.payload else {
            panic!("expected a deploy payload");
        };
        assert_eq!(deploy.code.to_hex(), "00c56b");
        assert_eq!(deploy.name, "Token");
        assert_eq!(deploy.version, "1.0");
        assert_eq!(deploy.author, "alice");
        assert_eq!(deploy.email, "alice@example.com");
        assert_eq!(deploy.description, "demo");
        assert!(deploy.need_storage);
    }

    #[test]
    fn deploy_rejects_bad_input() {
        assert!(matches!(
            make_deploy_code_transaction("xyz", "", "", "", "", "", false, "0", "0", None),
            Err(CoreError::Encoding(_))
        ));
        assert!(matches!(
            make_deploy_code_transaction("00", "", "", "", "", "", false, "0", "", None),
            Err(CoreError::Encoding(_))
        ));
    }

    #[test]
    fn sign_replaces_and_add_sign_appends() {
        let mut tx = native_tx("transfer");
        let (a, b, c) = (
            FixedKey { tag: 1, fail: false },
            FixedKey { tag: 2, fail: false },
            FixedKey { tag: 3, fail: false },
        );

        sign_transaction(&mut tx, &a, None).unwrap();
        add_sign(&mut tx, &b, None).unwrap();
        add_sign(&mut tx, &b, None).unwrap();
        let tags: Vec<_> = tx.sigs.iter().map(|s| s.signature[0]).collect();
        assert_eq!(tags, vec![1, 2, 2]);

        sign_transaction(&mut tx, &c, None).unwrap();
        assert_eq!(tx.sigs.len(), 1);
        assert_eq!(tx.sigs[0].public_key, PublicKey::Ed25519([3; 32]));
        assert_eq!(tx.sigs[0].scheme, SignatureScheme::Sha512WithEddsa);
    }

    #[test]
    fn failed_signing_leaves_sigs_alone() {
        let mut tx = native_tx("transfer");
        sign_transaction(&mut tx, &FixedKey { tag: 1, fail: false }, None).unwrap();

        let locked = FixedKey { tag: 9, fail: true };
        assert!(matches!(
            add_sign(&mut tx, &locked, None),
            Err(CoreError::Signing(_))
        ));
        assert!(matches!(
            sign_transaction(&mut tx, &locked, None),
            Err(CoreError::Signing(_))
        ));
        assert_eq!(tx.sigs.len(), 1);
        assert_eq!(tx.sigs[0].signature[0], 1);
    }

    #[test]
    fn signing_through_trait_object() {
        let mut tx = native_tx("transfer");
        let key: Box<dyn SigningKey> = Box::new(FixedKey { tag: 5, fail: false });
        TransactionBuilder::new()
            .sign_transaction(&mut tx, key.as_ref(), Some(SignatureScheme::Sha512WithEddsa))
            .unwrap();
        assert_eq!(tx.sigs.len(), 1);
    }
}
