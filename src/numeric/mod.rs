// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Shared decimal primitives.
//!
//! This module holds the arithmetic the formatter and calling code share:
//! - Decimal precision helpers (exact decimal count, tens multiplier)
//! - Positional rendering (no scientific notation), digit grouping
//! - Rounding rules
//! - Chain amount ↔ human amount conversion

mod balance;
mod decimal;
mod rounding;

pub use balance::{to_balance_in_token, to_chain_format};
pub use decimal::{
    decimal_places_from_tick, exact_decimals, parse_decimal,
    shift_decimal, ten_pow, tens_multiplier, to_plain_string, trim_trailing_zeros,
};
pub use rounding::RoundingMode;
