// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for token-list ingestion.
//!
//! Lookups on a built [`crate::TokenRegistry`] never fail; absence is a regular
//! `None`. These errors only surface while decoding a token list supplied by a
//! metadata service, or when a shared registry lock is poisoned.

/// Errors that can occur while ingesting token records.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The token list is not valid JSON or does not match the record shape.
    #[error("Failed to decode token list: {0}")]
    Decode(#[from] serde_json::Error),

    /// The shared registry lock was poisoned by a panicking writer.
    #[error("Token registry lock poisoned")]
    LockPoisoned,
}
