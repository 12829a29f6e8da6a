// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for formatter configuration.
//!
//! Formatting itself never fails: invalid numeric input is normalized to zero.
//! The only rejected condition is a configuration that cannot produce a
//! meaningful rendering, which is caught when the configuration is built.

/// Errors raised by [`crate::FormatterConfigBuilder::build`].
///
/// # Examples
///
/// ```rust
/// use tokenview::{FormatConfigError, FormatterConfigBuilder};
///
/// let result = FormatterConfigBuilder::new().decimal_places(64).build();
/// assert!(matches!(result, Err(FormatConfigError::DecimalPlacesOutOfRange { .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatConfigError {
    /// `decimal_places` exceeds the supported maximum.
    #[error("decimal places {value} exceeds maximum of {max}")]
    DecimalPlacesOutOfRange {
        /// Requested decimal places
        value: u32,
        /// Maximum accepted value
        max: u32,
    },

    /// `minimal_decimal_places` exceeds the supported maximum.
    #[error("minimal decimal places {value} exceeds maximum of {max}")]
    MinimalDecimalPlacesOutOfRange {
        /// Requested minimal decimal places
        value: u32,
        /// Maximum accepted value
        max: u32,
    },

    /// The gas-fee buffer is negative.
    #[error("gas fee buffer must not be negative: {value}")]
    NegativeGasFeeBuffer {
        /// Rendered buffer value
        value: String,
    },

    /// The abbreviation floor is zero or negative.
    #[error("abbreviation floor must be positive: {value}")]
    NonPositiveAbbreviationFloor {
        /// Rendered floor value
        value: String,
    },
}

impl FormatConfigError {
    /// Create a `NegativeGasFeeBuffer` error.
    pub fn negative_gas_fee_buffer(value: impl std::fmt::Display) -> Self {
        FormatConfigError::NegativeGasFeeBuffer {
            value: value.to_string(),
        }
    }

    /// Create a `NonPositiveAbbreviationFloor` error.
    pub fn non_positive_abbreviation_floor(value: impl std::fmt::Display) -> Self {
        FormatConfigError::NonPositiveAbbreviationFloor {
            value: value.to_string(),
        }
    }
}
