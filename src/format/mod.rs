// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Numeric display formatting.
//!
//! A [`NumberFormatter`] turns any numeric input into the strings a trading UI
//! shows, as a pure function of (value, [`crate::FormatterConfig`]):
//!
//! ```text
//! input ──to_decimal──► value ──zero?──────────────► "0.00"
//!                         │
//!                         ├──|v| >= floor──────────► "≈1.5M"      (abbreviate)
//!                         │
//!                         └──round(places, mode)──► fixed "1234.12"
//!                                   │
//!                                   └─ |v| < minimal ? "< 0.0001" : grouped "1,234.12"
//! ```
//!
//! The same pipeline runs a second time on `value - gas_fee_buffer` for the
//! buffered variants.

mod abbreviate;
mod formatter;
mod input;
mod locale;
mod minimal;

pub use abbreviate::abbreviate;
pub use formatter::{FormattedNumber, NumberFormatter};
pub use input::NumericInput;
pub use locale::NumberLocale;
pub use minimal::MinimalDisplay;
