// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the tokenview library.
//!
//! Resolution and formatting are total: a missing token is `None` and a
//! non-numeric value formats as zero. Errors exist only at the edges:
//!
//! - [`FormatConfigError`] - a formatter configuration rejected at build time
//! - [`RegistryError`] - a token list that cannot be ingested
//! - [`NumericError`] - a human amount with no chain representation
//!
//! [`TokenviewError`] unifies them for callers that don't need to distinguish.
//!
//! # Examples
//!
//! ```rust
//! use tokenview::{FormatterConfigBuilder, TokenRegistry, TokenviewError};
//!
//! fn setup(list: &str) -> Result<(), TokenviewError> {
//!     let _config = FormatterConfigBuilder::new().decimal_places(4).build()?;
//!     let _registry = TokenRegistry::from_json(list)?;
//!     Ok(())
//! }
//!
//! assert!(setup("[]").is_ok());
//! assert!(setup("not json").is_err());
//! ```

mod format;
mod numeric;
mod registry;

pub use format::FormatConfigError;
pub use numeric::NumericError;
pub use registry::RegistryError;

/// Unified error type for all tokenview operations.
///
/// All module-specific error types convert via `From`, so `?` works across
/// configuration, ingestion and conversion code.
#[derive(Debug, thiserror::Error)]
pub enum TokenviewError {
    /// Error from formatter configuration.
    #[error("Formatter configuration error: {0}")]
    FormatConfig(#[from] FormatConfigError),

    /// Error from token-list ingestion.
    #[error("Token registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Error from amount conversions.
    #[error("Numeric conversion error: {0}")]
    Numeric(#[from] NumericError),
}
