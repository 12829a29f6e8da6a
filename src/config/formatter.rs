// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Numeric formatter configuration

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::constants::formatting::{
    DEFAULT_DECIMAL_PLACES, DEFAULT_GAS_FEE_BUFFER, DEFAULT_MINIMAL_DECIMAL_PLACES,
    MAX_DECIMAL_PLACES,
};
use crate::errors::FormatConfigError;
use crate::format::NumberLocale;
use crate::numeric::RoundingMode;

/// Configuration for [`crate::NumberFormatter`]
///
/// Use [`FormatterConfigBuilder`] for a validated, fluent construction.
/// `FormatterConfig::default()` is always valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatterConfig {
    /// Maximum fractional digits kept
    /// Default: 2
    pub decimal_places: u32,

    /// Values below `10^-minimal_decimal_places` render as `< 0.0001`
    /// Default: 4
    pub minimal_decimal_places: u32,

    /// Rule applied when cutting to `decimal_places`
    /// Default: [`RoundingMode::Down`]
    pub rounding_mode: RoundingMode,

    /// Magnitude at/above which values render abbreviated (`≈1.5M`)
    /// Default: None (disabled)
    pub abbreviation_floor: Option<BigDecimal>,

    /// Amount subtracted for the buffered variants (reserve for gas)
    /// Default: 0.005
    pub gas_fee_buffer: BigDecimal,

    /// Plain truncated numeral: no `<` marker, no abbreviation, no padding
    /// Default: false
    pub should_truncate: bool,

    /// Show a tiny value's own significant decimals (up to 12) instead of `< 0.0001`
    /// Default: false
    pub display_absolute_decimal_place: bool,

    /// Separators used by the grouped (display) variants
    /// Default: en-US (`1,234.56`)
    pub locale: NumberLocale,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            minimal_decimal_places: DEFAULT_MINIMAL_DECIMAL_PLACES,
            rounding_mode: RoundingMode::default(),
            abbreviation_floor: None,
            gas_fee_buffer: default_gas_fee_buffer(),
            should_truncate: false,
            display_absolute_decimal_place: false,
            locale: NumberLocale::default(),
        }
    }
}

fn default_gas_fee_buffer() -> BigDecimal {
    BigDecimal::from_str(DEFAULT_GAS_FEE_BUFFER).unwrap_or_default()
}

impl FormatterConfig {
    /// Check the invariants [`FormatterConfigBuilder::build`] enforces.
    ///
    /// Useful for configurations deserialized from JSON, which bypass the builder.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), FormatConfigError> {
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(FormatConfigError::DecimalPlacesOutOfRange {
                value: self.decimal_places,
                max: MAX_DECIMAL_PLACES,
            });
        }

        if self.minimal_decimal_places > MAX_DECIMAL_PLACES {
            return Err(FormatConfigError::MinimalDecimalPlacesOutOfRange {
                value: self.minimal_decimal_places,
                max: MAX_DECIMAL_PLACES,
            });
        }

        if self.gas_fee_buffer < BigDecimal::zero() {
            return Err(FormatConfigError::negative_gas_fee_buffer(
                &self.gas_fee_buffer,
            ));
        }

        if let Some(floor) = &self.abbreviation_floor {
            if *floor <= BigDecimal::zero() {
                return Err(FormatConfigError::non_positive_abbreviation_floor(floor));
            }
        }

        Ok(())
    }
}

/// Builder for [`FormatterConfig`]
///
/// # Example
///
/// ```rust
/// use tokenview::{FormatterConfigBuilder, RoundingMode};
///
/// let config = FormatterConfigBuilder::new()
///     .decimal_places(4)
///     .rounding_mode(RoundingMode::Up)
///     .abbreviation_floor(1_000_000)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.decimal_places, 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormatterConfigBuilder {
    config: FormatterConfig,
}

impl FormatterConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum fractional digits
    pub fn decimal_places(mut self, places: u32) -> Self {
        self.config.decimal_places = places;
        self
    }

    /// Set the `< minimal` threshold in decimal places
    pub fn minimal_decimal_places(mut self, places: u32) -> Self {
        self.config.minimal_decimal_places = places;
        self
    }

    /// Set the rounding rule
    pub fn rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.config.rounding_mode = mode;
        self
    }

    /// Enable abbreviation at or above `floor`
    pub fn abbreviation_floor(mut self, floor: impl Into<BigDecimal>) -> Self {
        self.config.abbreviation_floor = Some(floor.into());
        self
    }

    /// Set the gas-fee buffer for the buffered variants
    pub fn gas_fee_buffer(mut self, buffer: impl Into<BigDecimal>) -> Self {
        self.config.gas_fee_buffer = buffer.into();
        self
    }

    /// Render plain truncated numerals
    pub fn should_truncate(mut self, truncate: bool) -> Self {
        self.config.should_truncate = truncate;
        self
    }

    /// Show the exact decimal place of tiny values
    pub fn display_absolute_decimal_place(mut self, enabled: bool) -> Self {
        self.config.display_absolute_decimal_place = enabled;
        self
    }

    /// Set the grouping locale
    pub fn locale(mut self, locale: NumberLocale) -> Self {
        self.config.locale = locale;
        self
    }

    /// Validate and build the configuration
    ///
    /// # Errors
    ///
    /// Returns [`FormatConfigError`] when a setting is out of range.
    pub fn build(self) -> Result<FormatterConfig, FormatConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = FormatterConfig::default();
        assert_eq!(config.decimal_places, 2);
        assert_eq!(config.minimal_decimal_places, 4);
        assert_eq!(config.rounding_mode, RoundingMode::Down);
        assert_eq!(config.gas_fee_buffer, BigDecimal::from_str("0.005").unwrap());
        assert!(config.abbreviation_floor.is_none());
        assert!(!config.should_truncate);
        assert!(!config.display_absolute_decimal_place);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_sets_all_fields() {
        let config = FormatterConfigBuilder::new()
            .decimal_places(6)
            .minimal_decimal_places(8)
            .rounding_mode(RoundingMode::HalfUp)
            .abbreviation_floor(1000)
            .gas_fee_buffer(0)
            .should_truncate(true)
            .display_absolute_decimal_place(true)
            .locale(NumberLocale::de_de())
            .build()
            .unwrap();

        assert_eq!(config.decimal_places, 6);
        assert_eq!(config.minimal_decimal_places, 8);
        assert_eq!(config.rounding_mode, RoundingMode::HalfUp);
        assert_eq!(config.abbreviation_floor, Some(BigDecimal::from(1000)));
        assert_eq!(config.gas_fee_buffer, BigDecimal::zero());
        assert!(config.should_truncate);
        assert!(config.display_absolute_decimal_place);
        assert_eq!(config.locale, NumberLocale::de_de());
    }

    #[test]
    fn test_rejects_out_of_range_places() {
        let err = FormatterConfigBuilder::new()
            .decimal_places(37)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            FormatConfigError::DecimalPlacesOutOfRange { value: 37, max: 36 }
        );

        let err = FormatterConfigBuilder::new()
            .minimal_decimal_places(100)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            FormatConfigError::MinimalDecimalPlacesOutOfRange { .. }
        ));
    }

    #[test]
    fn test_rejects_negative_gas_buffer() {
        let err = FormatterConfigBuilder::new()
            .gas_fee_buffer(-1)
            .build()
            .unwrap_err();
        assert!(matches!(err, FormatConfigError::NegativeGasFeeBuffer { .. }));
    }

    #[test]
    fn test_rejects_non_positive_floor() {
        let err = FormatterConfigBuilder::new()
            .abbreviation_floor(0)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            FormatConfigError::NonPositiveAbbreviationFloor { .. }
        ));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: FormatterConfig =
            serde_json::from_str(r#"{"decimalPlaces": 4, "shouldTruncate": true}"#).unwrap();
        assert_eq!(config.decimal_places, 4);
        assert!(config.should_truncate);
        assert_eq!(config.minimal_decimal_places, 4);
        assert!(config.validate().is_ok());
    }
}
