// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Conversion between chain (base-unit) amounts and human token amounts

use alloy_primitives::U256;
use bigdecimal::num_bigint::{BigInt, Sign};
use bigdecimal::{BigDecimal, RoundingMode as BigRoundingMode, Zero};

use crate::errors::NumericError;
use crate::types::tokens::TokenDecimals;

use super::decimal::shift_decimal;

/// Convert a raw on-chain amount to a human token amount: `raw / 10^decimals`.
///
/// The division is exact; no precision is lost for any `U256`.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use alloy_primitives::U256;
/// use bigdecimal::BigDecimal;
/// use tokenview::{to_balance_in_token, TokenDecimals};
///
/// let raw = U256::from(1_500_000u64); // 1.5 USDT (6 decimals)
/// let human = to_balance_in_token(raw, TokenDecimals::COSMOS);
/// assert_eq!(human, BigDecimal::from_str("1.5").unwrap());
/// ```
pub fn to_balance_in_token(raw: U256, decimals: TokenDecimals) -> BigDecimal {
    let digits = BigInt::from_bytes_be(Sign::Plus, &raw.to_be_bytes::<32>());
    BigDecimal::new(digits, decimals.scale())
}

/// Convert a human token amount to its raw on-chain amount: `amount * 10^decimals`.
///
/// Digits beyond the token's precision are truncated, never rounded up, so
/// the chain amount never exceeds what the user typed.
///
/// # Errors
///
/// Returns [`NumericError::NegativeAmount`] for negative amounts and
/// [`NumericError::Overflow`] when the scaled amount exceeds `U256::MAX`.
pub fn to_chain_format(amount: &BigDecimal, decimals: TokenDecimals) -> Result<U256, NumericError> {
    if *amount < BigDecimal::zero() {
        return Err(NumericError::negative_amount(amount));
    }

    let scaled = shift_decimal(amount, decimals.scale())
        .with_scale_round(0, BigRoundingMode::Down)
        .with_scale(0);
    let (digits, _) = scaled.as_bigint_and_exponent();
    let (_, bytes) = digits.to_bytes_be();

    U256::try_from_be_slice(&bytes).ok_or_else(|| NumericError::overflow(&digits))
}
