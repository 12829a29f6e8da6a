// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token resolution and numeric display formatting for exchange front ends.
//!
//! - [`TokenRegistry`] indexes a token list from a metadata service and
//!   resolves denoms, symbols, CW20 addresses and IBC base denoms to a
//!   [`TokenRecord`], preferring verified tokens.
//! - [`NumberFormatter`] renders arbitrary-precision amounts as fixed and
//!   locale-grouped strings with rounding modes, the `< 0.0001` marker,
//!   `≈1.5M` abbreviation and a gas-fee-buffered variant.
//! - [`numeric`] holds the shared decimal primitives both build on.
//!
//! # Example
//!
//! ```
//! use tokenview::{
//!     to_balance_in_token, NumberFormatter, TokenRegistry, U256,
//! };
//!
//! let registry = TokenRegistry::from_json(
//!     r#"[{"denom": "inj", "symbol": "INJ", "decimals": 18,
//!          "tokenType": "native", "tokenVerification": "verified"}]"#,
//! )
//! .unwrap();
//!
//! let inj = registry.resolve("INJ").unwrap();
//! let balance = to_balance_in_token(U256::from(1_234_567_000_000_000_000_000u128), inj.decimals);
//!
//! let formatter = NumberFormatter::default();
//! assert_eq!(formatter.format_display(balance), "1,234.56");
//! ```

pub mod config;
pub mod errors;
pub mod format;
pub mod numeric;
pub mod registry;
mod spans;
pub mod types;

pub use alloy_primitives::U256;

pub use config::{FormatterConfig, FormatterConfigBuilder, RegistryConfig, RegistryConfigBuilder};
pub use errors::{FormatConfigError, NumericError, RegistryError, TokenviewError};
pub use format::{abbreviate, FormattedNumber, MinimalDisplay, NumberFormatter, NumberLocale, NumericInput};
pub use numeric::{
    decimal_places_from_tick, exact_decimals, parse_decimal, shift_decimal,
    tens_multiplier, to_balance_in_token, to_chain_format, to_plain_string, trim_trailing_zeros,
    RoundingMode,
};
pub use registry::{ResolveOptions, SharedTokenRegistry, TokenRegistry};
pub use types::tokens::{
    is_cw20_address, TokenDecimals, TokenRecord, TokenSource, TokenType, TokenVerification,
};
