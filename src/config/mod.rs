// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for tokenview components
//!
//! - [`RegistryConfig`] controls the structural rules used by
//!   [`crate::TokenRegistry::resolve`] (native denom, bech32 prefix, the
//!   contract-address length heuristic).
//! - [`FormatterConfig`] controls [`crate::NumberFormatter`].
//!
//! # Example: Using defaults
//!
//! ```rust
//! use tokenview::{FormatterConfig, RegistryConfig};
//!
//! // Injective mainnet conventions, USD-style 2-decimal formatting
//! let registry_config = RegistryConfig::default();
//! let formatter_config = FormatterConfig::default();
//! assert_eq!(registry_config.native_denom, "inj");
//! assert_eq!(formatter_config.decimal_places, 2);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use tokenview::RegistryConfigBuilder;
//!
//! let config = RegistryConfigBuilder::new()
//!     .native_denom("utest")
//!     .address_prefix("test")
//!     .build();
//! assert_eq!(config.address_prefix, "test");
//! ```

use serde::{Deserialize, Serialize};

pub mod constants;
mod formatter;

pub use formatter::{FormatterConfig, FormatterConfigBuilder};

use constants::{addresses, denoms};

/// Configuration for [`crate::TokenRegistry`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistryConfig {
    /// Native gas-token denom, resolved from the verified denom index only
    /// Default: `inj`
    pub native_denom: String,

    /// Bech32 prefix of CW20 contract addresses
    /// Default: `inj`
    pub address_prefix: String,

    /// Inputs shorter than this are looked up as symbols/short denoms first
    /// Default: 42
    pub contract_address_length: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            native_denom: denoms::INJ_DENOM.to_string(),
            address_prefix: denoms::INJ_ADDRESS_PREFIX.to_string(),
            contract_address_length: addresses::CONTRACT_ADDRESS_LENGTH,
        }
    }
}

/// Builder for [`RegistryConfig`]
#[derive(Debug, Clone, Default)]
pub struct RegistryConfigBuilder {
    config: RegistryConfig,
}

impl RegistryConfigBuilder {
    /// Create a new builder with Injective defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the native gas-token denom
    pub fn native_denom(mut self, denom: impl Into<String>) -> Self {
        self.config.native_denom = denom.into();
        self
    }

    /// Set the bech32 prefix used to recognize CW20 addresses
    pub fn address_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.address_prefix = prefix.into();
        self
    }

    /// Set the length below which inputs are treated as symbols/short denoms
    pub fn contract_address_length(mut self, length: usize) -> Self {
        self.config.contract_address_length = length;
        self
    }

    /// Build the configuration
    pub fn build(self) -> RegistryConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_defaults() {
        let config = RegistryConfig::default();
        assert_eq!(config.native_denom, "inj");
        assert_eq!(config.address_prefix, "inj");
        assert_eq!(config.contract_address_length, 42);
    }

    #[test]
    fn test_registry_builder() {
        let config = RegistryConfigBuilder::new()
            .native_denom("uosmo")
            .address_prefix("osmo")
            .contract_address_length(43)
            .build();
        assert_eq!(config.native_denom, "uosmo");
        assert_eq!(config.address_prefix, "osmo");
        assert_eq!(config.contract_address_length, 43);
    }

    #[test]
    fn test_registry_config_deserialize_partial() {
        let config: RegistryConfig = serde_json::from_str(r#"{"nativeDenom": "uatom"}"#).unwrap();
        assert_eq!(config.native_denom, "uatom");
        assert_eq!(config.address_prefix, "inj");
    }
}
