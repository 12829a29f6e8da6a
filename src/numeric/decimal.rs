// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Decimal-precision primitives shared by the formatter and calling code

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, Zero};
use std::str::FromStr;

/// Exact power of ten: `10^exp` (negative exponents give `0.1`, `0.01`, ...)
pub fn ten_pow(exp: i64) -> BigDecimal {
    BigDecimal::new(BigInt::from(1u8), -exp)
}

/// Multiply by `10^places` without rounding (shifts the decimal point).
pub fn shift_decimal(value: &BigDecimal, places: i64) -> BigDecimal {
    let (digits, scale) = value.as_bigint_and_exponent();
    BigDecimal::new(digits, scale - places)
}

/// Parse a user- or API-supplied numeric string.
///
/// Returns `None` for empty or non-numeric input; scientific notation
/// (`1e-7`) is accepted. Digit separators (`1_000`) are not.
pub fn parse_decimal(value: &str) -> Option<BigDecimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.contains('_') {
        return None;
    }
    BigDecimal::from_str(trimmed).ok()
}

/// Number of significant fractional digits of `value`.
///
/// Trailing zeros do not count: `1.2500` has 2, `100` has 0, `0.0000123` has 7.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use bigdecimal::BigDecimal;
/// use tokenview::exact_decimals;
///
/// assert_eq!(exact_decimals(&BigDecimal::from_str("1.2500").unwrap()), 2);
/// assert_eq!(exact_decimals(&BigDecimal::from_str("0.0000123").unwrap()), 7);
/// assert_eq!(exact_decimals(&BigDecimal::from(100)), 0);
/// ```
pub fn exact_decimals(value: &BigDecimal) -> u32 {
    if value.is_zero() {
        return 0;
    }
    let (_, scale) = value.normalized().as_bigint_and_exponent();
    u32::try_from(scale.max(0)).unwrap_or(u32::MAX)
}

/// Power of ten that `value` is expressed in.
///
/// Values below one map to the negated count of their fractional digits
/// (`0.001` → -3, `0.005` → -3); values at or above one map to their number of
/// integer digits minus one (`1` → 0, `25` → 1, `1000` → 3). Zero maps to 0.
pub fn tens_multiplier(value: &BigDecimal) -> i64 {
    if value.is_zero() {
        return 0;
    }

    let magnitude = value.abs();
    if magnitude < BigDecimal::from(1) {
        return -i64::from(exact_decimals(&magnitude));
    }

    let (digits, scale) = magnitude.normalized().as_bigint_and_exponent();
    let digit_count = digits.to_string().len() as i64;
    (digit_count - scale).max(1) - 1
}

/// Display decimals implied by a market tick size (`0.001` → 3, `10` → 0).
pub fn decimal_places_from_tick(tick: &BigDecimal) -> u32 {
    u32::try_from((-tens_multiplier(tick)).max(0)).unwrap_or(0)
}

/// Render without scientific notation, keeping the value's own scale.
///
/// `BigDecimal`'s `Display` switches to exponent form for very small or very
/// large magnitudes; display code always wants positional digits.
pub fn to_plain_string(value: &BigDecimal) -> String {
    let (digits, scale) = value.as_bigint_and_exponent();
    let rendered = digits.to_string();
    let (negative, magnitude) = match rendered.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, rendered.as_str()),
    };

    let mut out = String::with_capacity(magnitude.len() + 4);
    if negative {
        out.push('-');
    }

    if scale <= 0 {
        out.push_str(magnitude);
        if magnitude != "0" {
            out.extend(std::iter::repeat('0').take(scale.unsigned_abs() as usize));
        }
        return out;
    }

    let scale = scale as usize;
    let padded = if magnitude.len() <= scale {
        format!("{}{}", "0".repeat(scale + 1 - magnitude.len()), magnitude)
    } else {
        magnitude.to_string()
    };
    let split = padded.len() - scale;
    out.push_str(&padded[..split]);
    out.push('.');
    out.push_str(&padded[split..]);
    out
}

/// Strip trailing zeros from the fractional part only.
///
/// The integer part is never touched: `"1200"` stays `"1200"`, `"1.2300"`
/// becomes `"1.23"` and `"5.000"` becomes `"5"`.
pub fn trim_trailing_zeros(value: &str) -> String {
    match value.split_once('.') {
        Some((integer, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                integer.to_string()
            } else {
                format!("{integer}.{fraction}")
            }
        }
        None => value.to_string(),
    }
}
