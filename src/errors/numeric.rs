// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for decimal/chain-amount conversions.

/// Errors that can occur converting between human amounts and chain amounts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumericError {
    /// The amount is negative and has no chain representation.
    #[error("Amount must not be negative: {value}")]
    NegativeAmount {
        /// Rendered amount
        value: String,
    },

    /// The scaled amount does not fit in 256 bits.
    #[error("Amount {value} does not fit in U256")]
    Overflow {
        /// Rendered scaled amount
        value: String,
    },
}

impl NumericError {
    /// Create a `NegativeAmount` error.
    pub fn negative_amount(value: impl std::fmt::Display) -> Self {
        NumericError::NegativeAmount {
            value: value.to_string(),
        }
    }

    /// Create an `Overflow` error.
    pub fn overflow(value: impl std::fmt::Display) -> Self {
        NumericError::Overflow {
            value: value.to_string(),
        }
    }
}
