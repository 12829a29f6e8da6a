// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Threshold below which a value renders as `< minimal`

use bigdecimal::{BigDecimal, Zero};

use crate::config::constants::formatting::MAX_ABSOLUTE_DECIMAL_PLACES;
use crate::config::FormatterConfig;
use crate::numeric::{exact_decimals, ten_pow};

/// Smallest amount shown as a number; anything smaller renders as `< display_amount`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalDisplay {
    /// Decimal places used to render `display_amount`
    pub decimal_places: u32,
    /// `10^-decimal_places`, or zero for a zero value
    pub display_amount: BigDecimal,
    /// Derived from the value's own significant decimals rather than the configured threshold
    pub absolute: bool,
}

impl MinimalDisplay {
    /// Resolve the minimal display amount for `value` under `config`.
    ///
    /// - Zero: 2 places, amount zero (nothing is ever below it).
    /// - `|value| <= 10^-minimal_decimal_places` with
    ///   `display_absolute_decimal_place`: the value's exact fractional digit
    ///   count, capped at [`MAX_ABSOLUTE_DECIMAL_PLACES`].
    /// - Otherwise: the configured `minimal_decimal_places`.
    pub fn resolve(value: &BigDecimal, config: &FormatterConfig) -> Self {
        if value.is_zero() {
            return Self {
                decimal_places: 2,
                display_amount: BigDecimal::zero(),
                absolute: false,
            };
        }

        let threshold = ten_pow(-i64::from(config.minimal_decimal_places));
        if config.display_absolute_decimal_place && value.abs() <= threshold {
            let places = exact_decimals(value).min(MAX_ABSOLUTE_DECIMAL_PLACES);
            return Self {
                decimal_places: places,
                display_amount: ten_pow(-i64::from(places)),
                absolute: true,
            };
        }

        Self {
            decimal_places: config.minimal_decimal_places,
            display_amount: threshold,
            absolute: false,
        }
    }

    /// Whether `value` falls below the displayable amount
    pub fn is_below(&self, value: &BigDecimal) -> bool {
        value.abs() < self.display_amount
    }
}
