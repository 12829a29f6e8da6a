// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw numeric input accepted by the formatter

use bigdecimal::{BigDecimal, Zero};

use crate::numeric::parse_decimal;

/// A value to format: API string, float from a price feed, or an exact decimal.
///
/// Conversion to a decimal is total: empty, non-numeric, NaN and infinite
/// inputs become zero.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericInput {
    /// Text as received from an API or user input
    Text(String),
    /// Binary float, rendered through its shortest round-trip representation
    Float(f64),
    /// Exact decimal
    Decimal(BigDecimal),
}

impl NumericInput {
    /// Coerce to a decimal, normalizing invalid input to zero
    pub fn to_decimal(&self) -> BigDecimal {
        let parsed = match self {
            NumericInput::Text(text) => parse_decimal(text),
            NumericInput::Float(value) if value.is_finite() => parse_decimal(&value.to_string()),
            NumericInput::Float(_) => None,
            NumericInput::Decimal(value) => return value.clone(),
        };

        parsed.unwrap_or_else(|| {
            tracing::debug!(input = ?self, "Non-numeric input normalized to zero");
            BigDecimal::zero()
        })
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        NumericInput::Text(value)
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Float(value)
    }
}

impl From<i64> for NumericInput {
    fn from(value: i64) -> Self {
        NumericInput::Decimal(BigDecimal::from(value))
    }
}

impl From<u64> for NumericInput {
    fn from(value: u64) -> Self {
        NumericInput::Decimal(BigDecimal::from(value))
    }
}

impl From<BigDecimal> for NumericInput {
    fn from(value: BigDecimal) -> Self {
        NumericInput::Decimal(value)
    }
}

impl From<&BigDecimal> for NumericInput {
    fn from(value: &BigDecimal) -> Self {
        NumericInput::Decimal(value.clone())
    }
}

impl<T: Into<NumericInput>> From<Option<T>> for NumericInput {
    fn from(value: Option<T>) -> Self {
        value
            .map(Into::into)
            .unwrap_or_else(|| NumericInput::Decimal(BigDecimal::zero()))
    }
}
