// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Compact `≈1.5M` rendering for large magnitudes

use bigdecimal::{BigDecimal, Zero};

use crate::config::constants::formatting::APPROXIMATELY;
use crate::numeric::{shift_decimal, ten_pow, to_plain_string, trim_trailing_zeros, RoundingMode};

use super::locale::NumberLocale;

/// Power-of-ten exponent and suffix, ascending
const UNITS: [(i64, &str); 5] = [(0, ""), (3, "K"), (6, "M"), (9, "B"), (12, "T")];

/// Fractional digits kept in abbreviated form
const ABBREVIATION_DECIMALS: u32 = 1;

/// Render `value` scaled to the nearest K/M/B/T unit with one decimal place.
///
/// Trailing zeros are dropped (`1.0B` renders as `1B`) and rounding that
/// reaches the next unit promotes to it (`999,960` renders as `≈1M`).
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use bigdecimal::BigDecimal;
/// use tokenview::{abbreviate, NumberLocale};
///
/// let value = BigDecimal::from_str("1000000000.123").unwrap();
/// assert_eq!(abbreviate(&value, &NumberLocale::en_us()), "≈1B");
/// ```
pub fn abbreviate(value: &BigDecimal, locale: &NumberLocale) -> String {
    let negative = *value < BigDecimal::zero();
    let magnitude = value.abs();

    let mut unit = UNITS
        .iter()
        .rposition(|(exp, _)| magnitude >= ten_pow(*exp))
        .unwrap_or(0);

    let rounded = loop {
        let (exp, _) = UNITS[unit];
        let scaled =
            RoundingMode::HalfUp.round(&shift_decimal(&magnitude, -exp), ABBREVIATION_DECIMALS);
        if scaled >= BigDecimal::from(1000) && unit + 1 < UNITS.len() {
            unit += 1;
            continue;
        }
        break scaled;
    };

    let numeral = locale.format_grouped(&trim_trailing_zeros(&to_plain_string(&rounded)));
    let sign = if negative { "-" } else { "" };
    format!("{APPROXIMATELY}{sign}{numeral}{}", UNITS[unit].1)
}
