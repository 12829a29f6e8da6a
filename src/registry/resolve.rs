// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Lookup precedence for [`TokenRegistry`]

use tracing::trace;

use crate::config::constants::denoms::{FACTORY_PREFIX, WORMHOLE_FACTORY_PREFIX};
use crate::spans;
use crate::types::tokens::{is_cw20_address, TokenRecord, TokenSource, TokenVerification};

use super::index::TieredIndex;
use super::TokenRegistry;

/// Narrowing options for [`TokenRegistry::resolve_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Only match IBC records bridged from this source
    pub source: Option<TokenSource>,
    /// `Some(Verified)` restricts every tiered lookup to the verified tier.
    /// Any other value keeps the verified-then-unverified fallback.
    pub verification: Option<TokenVerification>,
}

impl ResolveOptions {
    /// Options restricting lookups to the verified tier
    pub fn verified() -> Self {
        Self {
            source: None,
            verification: Some(TokenVerification::Verified),
        }
    }

    /// Options filtering IBC records by bridge source
    pub fn from_source(source: TokenSource) -> Self {
        Self {
            source: Some(source),
            verification: None,
        }
    }

    /// Set the verification preference
    pub fn with_verification(mut self, verification: TokenVerification) -> Self {
        self.verification = Some(verification);
        self
    }

    fn verified_only(&self) -> bool {
        self.verification == Some(TokenVerification::Verified)
    }

    fn without_source(&self) -> Self {
        Self {
            source: None,
            verification: self.verification,
        }
    }
}

impl TokenRegistry {
    /// Resolve a denom or symbol with no narrowing options.
    ///
    /// See [`TokenRegistry::resolve_with`] for the precedence rules.
    pub fn resolve(&self, denom_or_symbol: &str) -> Option<&TokenRecord> {
        self.resolve_with(denom_or_symbol, ResolveOptions::default())
    }

    /// Resolve a denom or symbol to a token record.
    ///
    /// The input is trimmed, then the first matching rule wins:
    ///
    /// 1. the native denom resolves from the verified denom index only
    /// 2. with a `source` option, only the IBC-by-source lookup runs
    /// 3. `factory/wormhole...` denoms resolve as IBC
    /// 4. inputs shorter than a contract address try symbol, insurance fund,
    ///    IBC and verified denom, in that order
    /// 5. CW20 contract addresses resolve from the CW20 index
    /// 6. `factory/...` denoms resolve from the token-factory index
    /// 7. anything else falls back to the denom index, verified tier first
    pub fn resolve_with(
        &self,
        denom_or_symbol: &str,
        options: ResolveOptions,
    ) -> Option<&TokenRecord> {
        let input = denom_or_symbol.trim();
        let span = spans::resolve(input);
        let _guard = span.enter();

        if input.is_empty() {
            return None;
        }

        if input == self.config.native_denom {
            trace!("native denom");
            return self.lookup(&self.indices.denoms, input, true);
        }

        if options.source.is_some() {
            trace!(source = ?options.source, "ibc by source");
            return self.resolve_ibc(input, options);
        }

        if input.starts_with(WORMHOLE_FACTORY_PREFIX) {
            trace!("wormhole factory denom");
            return self.resolve_ibc(input, options.without_source());
        }

        if input.len() < self.config.contract_address_length {
            trace!("short input");
            return self
                .resolve_symbol(input)
                .or_else(|| self.resolve_insurance_fund(input))
                .or_else(|| self.resolve_ibc(input, options.without_source()))
                .or_else(|| self.lookup(&self.indices.denoms, input, true));
        }

        if is_cw20_address(input, &self.config.address_prefix) {
            trace!("cw20 address");
            return self.resolve_cw20(input, options);
        }

        if input.starts_with(FACTORY_PREFIX) {
            trace!("token factory denom");
            return self.resolve_token_factory(input, options);
        }

        trace!("denom fallback");
        self.resolve_denom(input)
    }

    /// Resolve an IBC voucher by denom or base denom.
    ///
    /// Without a source, the verified base-denom and denom indices are tried
    /// before the unverified ones (the unverified tier is skipped when only
    /// verified records are requested). With a source, the first IBC record
    /// in ingestion order whose source matches and whose denom or base denom
    /// equals the input wins, verified records first.
    pub fn resolve_ibc(&self, denom: &str, options: ResolveOptions) -> Option<&TokenRecord> {
        let denom = denom.trim();
        let ibc = &self.indices.ibc;
        let ibc_base = &self.indices.ibc_base;

        if let Some(source) = options.source {
            let matches = |record: &&TokenRecord| {
                record.source == Some(source)
                    && (record.denom == denom || record.base_denom.as_deref() == Some(denom))
            };

            let mut verified = ibc.verified.values().map(|id| self.indices.record(*id));
            if options.verified_only() {
                return verified.find(matches);
            }

            let unverified = ibc.unverified.values().map(|id| self.indices.record(*id));
            return verified.chain(unverified).find(matches);
        }

        let verified = ibc_base
            .verified
            .get(denom)
            .or_else(|| ibc.verified.get(denom));
        if options.verified_only() {
            return verified.map(|id| self.indices.record(*id));
        }

        verified
            .or_else(|| ibc_base.unverified.get(denom))
            .or_else(|| ibc.unverified.get(denom))
            .map(|id| self.indices.record(*id))
    }

    /// Resolve a CW20 token by contract address
    pub fn resolve_cw20(&self, address: &str, options: ResolveOptions) -> Option<&TokenRecord> {
        self.lookup(&self.indices.cw20, address.trim(), options.verified_only())
    }

    /// Resolve a `factory/{creator}/{subdenom}` token
    pub fn resolve_token_factory(
        &self,
        denom: &str,
        options: ResolveOptions,
    ) -> Option<&TokenRecord> {
        self.lookup(&self.indices.factory, denom.trim(), options.verified_only())
    }

    /// Resolve a verified token by symbol, case-insensitively
    pub fn resolve_symbol(&self, symbol: &str) -> Option<&TokenRecord> {
        self.indices
            .symbols
            .get(&symbol.trim().to_lowercase())
            .map(|id| self.indices.record(*id))
    }

    /// Resolve an insurance fund share token by symbol, case-insensitively
    pub fn resolve_insurance_fund(&self, symbol: &str) -> Option<&TokenRecord> {
        self.indices
            .insurance
            .get(&symbol.trim().to_lowercase())
            .map(|id| self.indices.record(*id))
    }

    /// Resolve by exact denom, verified tier first
    pub fn resolve_denom(&self, denom: &str) -> Option<&TokenRecord> {
        self.lookup(&self.indices.denoms, denom.trim(), false)
    }

    /// Resolve, or build an unknown placeholder for the input.
    ///
    /// The placeholder is what callers show while they look the token up in a
    /// metadata service.
    pub fn resolve_or_unknown(&self, denom_or_symbol: &str) -> TokenRecord {
        self.resolve(denom_or_symbol)
            .cloned()
            .unwrap_or_else(|| TokenRecord::unknown(denom_or_symbol))
    }

    fn lookup(&self, index: &TieredIndex, key: &str, verified_only: bool) -> Option<&TokenRecord> {
        index
            .get(key, verified_only)
            .map(|id| self.indices.record(id))
    }
}
