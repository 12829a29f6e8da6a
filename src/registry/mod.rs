// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Denom and symbol resolution over a token list.
//!
//! A [`TokenRegistry`] is built once from the records served by a
//! token-metadata service and then answers "which token is this string?"
//! without allocation or I/O. Every key space is split into a verified and an
//! unverified tier, and the verified tier always wins.
//!
//! ```text
//! records ──build──► denoms      (verified | unverified)
//!                    symbols     (verified, lowercase)
//!                    insurance   (lowercase, all tiers)
//!                    factory     (verified | unverified)
//!                    cw20        (verified | unverified, by address)
//!                    ibc         (verified | unverified)
//!                    ibc_base    (verified | unverified, native-protected)
//! ```
//!
//! Lookups are total: a miss is `None`, and callers substitute
//! [`crate::TokenRecord::unknown`] while they fetch metadata elsewhere.
//!
//! For concurrent readers with occasional rebuilds, wrap the registry in a
//! [`SharedTokenRegistry`], which swaps whole snapshots instead of mutating
//! indices under a reader.

mod index;
mod resolve;
mod shared;

pub use resolve::ResolveOptions;
pub use shared::SharedTokenRegistry;

use tracing::debug;

use crate::config::RegistryConfig;
use crate::errors::RegistryError;
use crate::spans;
use crate::types::tokens::TokenRecord;

use index::RegistryIndices;

/// Multi-index token lookup with verification-tier fallback.
///
/// # Examples
///
/// ```
/// use tokenview::{TokenRecord, TokenRegistry, TokenType, TokenVerification};
///
/// let registry = TokenRegistry::new(vec![
///     TokenRecord::new("inj", "INJ", TokenType::Native, TokenVerification::Verified),
///     TokenRecord::new(
///         "peggy0xdAC17F958D2ee523a2206206994597C13D831ec7",
///         "USDT",
///         TokenType::Erc20,
///         TokenVerification::Verified,
///     ),
/// ]);
///
/// assert_eq!(registry.resolve("usdt").map(|t| t.symbol.as_str()), Some("USDT"));
/// assert_eq!(registry.resolve(" inj ").map(|t| t.denom.as_str()), Some("inj"));
/// assert!(registry.resolve("unknown").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    config: RegistryConfig,
    indices: RegistryIndices,
}

impl TokenRegistry {
    /// Build a registry with the default [`RegistryConfig`]
    pub fn new(records: impl IntoIterator<Item = TokenRecord>) -> Self {
        Self::with_config(RegistryConfig::default(), records)
    }

    /// Build a registry with a custom configuration
    pub fn with_config(
        config: RegistryConfig,
        records: impl IntoIterator<Item = TokenRecord>,
    ) -> Self {
        let mut registry = Self {
            config,
            indices: RegistryIndices::default(),
        };
        registry.build(records);
        registry
    }

    /// Decode a JSON array of token records and build a registry from it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Decode`] if the input is not a JSON array of
    /// records.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let records: Vec<TokenRecord> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    /// Replace every index with ones built from `records`.
    ///
    /// Nothing from the previous build survives; an empty list leaves an empty
    /// registry. Later records overwrite earlier ones with the same key.
    pub fn build(&mut self, records: impl IntoIterator<Item = TokenRecord>) {
        let records: Vec<TokenRecord> = records.into_iter().collect();
        let span = spans::build_registry(records.len());
        let _guard = span.enter();

        self.indices = RegistryIndices::build(records);

        let indices = &self.indices;
        debug!(
            records = indices.records.len(),
            denoms = indices.denoms.len(),
            symbols = indices.symbols.len(),
            insurance = indices.insurance.len(),
            factory = indices.factory.len(),
            cw20 = indices.cw20.len(),
            ibc = indices.ibc.len(),
            ibc_base = indices.ibc_base.len(),
            "Built token registry"
        );
    }

    /// Decode a JSON token list and rebuild in place.
    ///
    /// On a decode error the current indices are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Decode`] if the input is not a JSON array of
    /// records.
    pub fn rebuild_from_json(&mut self, json: &str) -> Result<(), RegistryError> {
        let records: Vec<TokenRecord> = serde_json::from_str(json)?;
        self.build(records);
        Ok(())
    }

    /// Active configuration
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Number of ingested records, duplicates included
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.records.len()
    }

    /// Whether the registry holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.records.is_empty()
    }

    /// Ingested records in ingestion order
    pub fn tokens(&self) -> impl Iterator<Item = &TokenRecord> {
        self.indices.records.iter()
    }

    /// Whether `denom_or_symbol` resolves to any token
    #[must_use]
    pub fn contains(&self, denom_or_symbol: &str) -> bool {
        self.resolve(denom_or_symbol).is_some()
    }
}
