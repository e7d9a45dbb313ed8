//! Builder configuration: the native-invoke marker, default gas values and
//! the transaction version.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::fixed64::Fixed64;

/// Interop service name that dispatches into native contracts.
pub const NATIVE_INVOKE_NAME: &str = "Ontology.Native.Invoke";

pub const DEFAULT_GAS_PRICE: &str = "0";
pub const DEFAULT_GAS_LIMIT: &str = "20000";

/// Version byte of every transaction this crate assembles.
pub const TX_VERSION: u8 = 0x00;

/// Process-wide default configuration.
pub static DEFAULT_CONFIG: Lazy<BuilderConfig> = Lazy::new(BuilderConfig::default);

/// Settings read by [`TransactionBuilder`](crate::TransactionBuilder).
///
/// Every field is optional in a TOML file; missing ones take the defaults.
///
/// ```toml
/// native_invoke_name = "Ontology.Native.Invoke"
/// default_gas_price = "500"
/// default_gas_limit = "20000"
/// tx_version = 0
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub native_invoke_name: String,
    pub default_gas_price: String,
    pub default_gas_limit: String,
    pub tx_version: u8,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            native_invoke_name: NATIVE_INVOKE_NAME.to_string(),
            default_gas_price: DEFAULT_GAS_PRICE.to_string(),
            default_gas_limit: DEFAULT_GAS_LIMIT.to_string(),
            tx_version: TX_VERSION,
        }
    }
}

impl BuilderConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> CoreResult<Self> {
        let config: BuilderConfig =
            toml::from_str(text).map_err(|err| CoreError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|err| CoreError::Config(format!("{}: {err}", path.display())))?;

        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded builder config");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> CoreResult<String> {
        toml::to_string_pretty(self).map_err(|err| CoreError::Config(err.to_string()))
    }

    /// Checks the marker is non-empty and both gas defaults parse.
    pub fn validate(&self) -> CoreResult<()> {
        if self.native_invoke_name.is_empty() {
            return Err(CoreError::Config("native_invoke_name must not be empty".into()));
        }
        self.gas_price()?;
        self.gas_limit()?;
        Ok(())
    }

    #[inline]
    pub fn gas_price(&self) -> CoreResult<Fixed64> {
        Fixed64::parse(&self.default_gas_price)
    }

    #[inline]
    pub fn gas_limit(&self) -> CoreResult<Fixed64> {
        Fixed64::parse(&self.default_gas_limit)
    }
}
