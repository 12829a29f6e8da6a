// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Snapshot-publishing wrapper for concurrent readers

use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::errors::RegistryError;
use crate::types::tokens::TokenRecord;

use super::TokenRegistry;

/// A [`TokenRegistry`] shared across threads.
///
/// Readers take an `Arc` snapshot and resolve against it without holding the
/// lock. A rebuild constructs a fresh registry off-lock and swaps it in, so a
/// reader never sees half-built indices.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use tokenview::{SharedTokenRegistry, TokenRecord, TokenRegistry, TokenType, TokenVerification};
///
/// let shared = Arc::new(SharedTokenRegistry::new(TokenRegistry::default()));
/// let before = shared.snapshot().unwrap();
///
/// shared
///     .rebuild(vec![TokenRecord::new("inj", "INJ", TokenType::Native, TokenVerification::Verified)])
///     .unwrap();
///
/// assert!(before.resolve("inj").is_none());
/// assert!(shared.snapshot().unwrap().resolve("inj").is_some());
/// ```
#[derive(Debug, Default)]
pub struct SharedTokenRegistry {
    current: RwLock<Arc<TokenRegistry>>,
}

impl SharedTokenRegistry {
    /// Wrap an initial registry
    pub fn new(registry: TokenRegistry) -> Self {
        Self {
            current: RwLock::new(Arc::new(registry)),
        }
    }

    /// Current registry snapshot
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::LockPoisoned`] if a writer panicked.
    pub fn snapshot(&self) -> Result<Arc<TokenRegistry>, RegistryError> {
        self.current
            .read()
            .map(|current| Arc::clone(&current))
            .map_err(|_| RegistryError::LockPoisoned)
    }

    /// Replace the current registry
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::LockPoisoned`] if a writer panicked.
    pub fn publish(&self, registry: TokenRegistry) -> Result<(), RegistryError> {
        let registry = Arc::new(registry);
        let mut current = self
            .current
            .write()
            .map_err(|_| RegistryError::LockPoisoned)?;
        debug!(
            previous = current.len(),
            records = registry.len(),
            "Publishing token registry"
        );
        *current = registry;
        Ok(())
    }

    /// Build a registry from `records` with the current configuration and
    /// publish it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::LockPoisoned`] if a writer panicked.
    pub fn rebuild(
        &self,
        records: impl IntoIterator<Item = TokenRecord>,
    ) -> Result<(), RegistryError> {
        let config = self.snapshot()?.config().clone();
        self.publish(TokenRegistry::with_config(config, records))
    }

    /// Decode a JSON token list and publish a registry built from it.
    ///
    /// On a decode error the current registry stays published.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Decode`] for a malformed list and
    /// [`RegistryError::LockPoisoned`] if a writer panicked.
    pub fn rebuild_from_json(&self, json: &str) -> Result<(), RegistryError> {
        let records: Vec<TokenRecord> = serde_json::from_str(json)?;
        self.rebuild(records)
    }
}
