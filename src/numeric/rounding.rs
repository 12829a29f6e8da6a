// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Rounding rules applied when cutting a value to a number of decimal places

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::decimal::to_plain_string;

/// Rounding rule for fixed-decimal rendering.
///
/// `Down` truncates the magnitude (toward zero, not toward negative infinity)
/// and is the default for balances: a wallet should never display more than
/// it holds. `Up` rounds the magnitude away from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundingMode {
    /// Away from zero
    Up,
    /// Toward zero
    #[default]
    Down,
    /// Toward positive infinity
    Ceil,
    /// Toward negative infinity
    Floor,
    /// Nearest, ties away from zero
    HalfUp,
    /// Nearest, ties toward zero
    HalfDown,
    /// Nearest, ties to even
    HalfEven,
}

impl RoundingMode {
    fn as_bigdecimal(self) -> bigdecimal::RoundingMode {
        match self {
            RoundingMode::Up => bigdecimal::RoundingMode::Up,
            RoundingMode::Down => bigdecimal::RoundingMode::Down,
            RoundingMode::Ceil => bigdecimal::RoundingMode::Ceiling,
            RoundingMode::Floor => bigdecimal::RoundingMode::Floor,
            RoundingMode::HalfUp => bigdecimal::RoundingMode::HalfUp,
            RoundingMode::HalfDown => bigdecimal::RoundingMode::HalfDown,
            RoundingMode::HalfEven => bigdecimal::RoundingMode::HalfEven,
        }
    }

    /// Round `value` to exactly `places` fractional digits.
    ///
    /// The result always carries scale `places`, so rendering it keeps the
    /// padding zeros (`2` rounded to 2 places renders as `2.00`).
    pub fn round(self, value: &BigDecimal, places: u32) -> BigDecimal {
        let places = i64::from(places);
        value
            .with_scale_round(places, self.as_bigdecimal())
            .with_scale(places)
    }

    /// Round and render with exactly `places` fractional digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::str::FromStr;
    /// use bigdecimal::BigDecimal;
    /// use tokenview::RoundingMode;
    ///
    /// let value = BigDecimal::from_str("1.999999").unwrap();
    /// assert_eq!(RoundingMode::Down.to_fixed(&value, 2), "1.99");
    /// assert_eq!(RoundingMode::Up.to_fixed(&value, 2), "2.00");
    /// ```
    pub fn to_fixed(self, value: &BigDecimal, places: u32) -> String {
        to_plain_string(&self.round(value, places))
    }
}
