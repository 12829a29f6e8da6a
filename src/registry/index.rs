// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Lookup indices derived from a token list

use indexmap::IndexMap;

use crate::config::constants::denoms::{FACTORY_PREFIX, UNKNOWN_BASE_DENOM};
use crate::types::tokens::{TokenRecord, TokenType};

/// Position of a record in [`RegistryIndices::records`]
pub(crate) type RecordId = usize;

/// Insertion-ordered key → record map.
///
/// Re-inserting an existing key replaces the record but keeps the key's
/// original position, so iteration order is first-ingestion order.
pub(crate) type Index = IndexMap<String, RecordId>;

/// A key space split by verification tier
#[derive(Debug, Clone, Default)]
pub(crate) struct TieredIndex {
    pub(crate) verified: Index,
    pub(crate) unverified: Index,
}

impl TieredIndex {
    fn tier_mut(&mut self, verified: bool) -> &mut Index {
        if verified {
            &mut self.verified
        } else {
            &mut self.unverified
        }
    }

    fn insert(&mut self, key: &str, id: RecordId, verified: bool) {
        self.tier_mut(verified).insert(key.to_string(), id);
    }

    /// Look up `key`, verified tier first; the unverified tier is skipped when
    /// `verified_only` is set.
    pub(crate) fn get(&self, key: &str, verified_only: bool) -> Option<RecordId> {
        self.verified.get(key).copied().or_else(|| {
            if verified_only {
                None
            } else {
                self.unverified.get(key).copied()
            }
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.verified.len() + self.unverified.len()
    }
}

/// All indices of a registry, built in a single pass
#[derive(Debug, Clone, Default)]
pub(crate) struct RegistryIndices {
    /// Every ingested record, in ingestion order
    pub(crate) records: Vec<TokenRecord>,
    /// denom → record
    pub(crate) denoms: TieredIndex,
    /// lowercase symbol → record (verified only)
    pub(crate) symbols: Index,
    /// CW20 contract address → record
    pub(crate) cw20: TieredIndex,
    /// `factory/...` denom → record
    pub(crate) factory: TieredIndex,
    /// IBC denom → record
    pub(crate) ibc: TieredIndex,
    /// IBC base denom → record
    pub(crate) ibc_base: TieredIndex,
    /// lowercase insurance fund symbol → record (all tiers)
    pub(crate) insurance: Index,
}

impl RegistryIndices {
    /// Build every index from `records` in one pass. O(n) in record count.
    ///
    /// Records with an empty denom cannot be addressed and are skipped.
    pub(crate) fn build(records: impl IntoIterator<Item = TokenRecord>) -> Self {
        let records: Vec<TokenRecord> = records
            .into_iter()
            .enumerate()
            .filter_map(|(position, record)| {
                if record.denom.trim().is_empty() {
                    tracing::warn!(position, symbol = %record.symbol, "Skipping token record with empty denom");
                    None
                } else {
                    Some(record)
                }
            })
            .collect();

        let mut denoms = TieredIndex::default();
        let mut symbols = Index::new();
        let mut cw20 = TieredIndex::default();
        let mut factory = TieredIndex::default();
        let mut ibc = TieredIndex::default();
        let mut ibc_base = TieredIndex::default();
        let mut insurance = Index::new();

        for (id, record) in records.iter().enumerate() {
            let verified = record.is_verified();

            // Blacklisted and every non-verified tier share the unverified index
            denoms.insert(&record.denom, id, verified);
            if verified {
                symbols.insert(record.symbol_key(), id);
            }

            if record.token_type == TokenType::InsuranceFund {
                insurance.insert(record.symbol_key(), id);
            }

            if record.denom.starts_with(FACTORY_PREFIX) {
                factory.insert(&record.denom, id, verified);
            }

            if record.token_type == TokenType::Cw20 {
                cw20.insert(&record.address, id, verified);
            }

            if record.token_type == TokenType::Ibc {
                ibc.insert(&record.denom, id, verified);

                if let Some(base_denom) = record.base_denom.as_deref() {
                    if verified {
                        // Native tokens keep the verified base-denom slot
                        let occupied_by_native = ibc_base
                            .verified
                            .get(base_denom)
                            .is_some_and(|existing| records[*existing].is_native);
                        if !occupied_by_native {
                            ibc_base.insert(base_denom, id, true);
                        }
                    } else if base_denom != UNKNOWN_BASE_DENOM {
                        ibc_base.insert(base_denom, id, false);
                    }
                }
            }
        }

        Self {
            records,
            denoms,
            symbols,
            cw20,
            factory,
            ibc,
            ibc_base,
            insurance,
        }
    }

    pub(crate) fn record(&self, id: RecordId) -> &TokenRecord {
        &self.records[id]
    }
}
