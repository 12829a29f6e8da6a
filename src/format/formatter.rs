// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Decimal → display string conversion

use bigdecimal::{BigDecimal, Zero};

use crate::config::constants::formatting::LESS_THAN;
use crate::config::FormatterConfig;
use crate::errors::FormatConfigError;
use crate::numeric::{to_plain_string, trim_trailing_zeros};

use super::abbreviate::abbreviate;
use super::input::NumericInput;
use super::minimal::MinimalDisplay;

/// All renderings of one value under one configuration.
///
/// `fixed` is a plain positional numeral (`1234.12`); `display` is grouped
/// with the configured locale (`1,234.12`) and may carry the `< ` or `≈`
/// markers. The `buffered_*` fields render `value - gas_fee_buffer`, floored
/// at zero, for "max amount" inputs that must leave gas behind.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedNumber {
    /// Parsed input (zero for invalid input)
    pub value: BigDecimal,
    /// `value` rounded to the configured decimal places
    pub rounded: BigDecimal,
    /// Fixed-decimal rendering of `value`
    pub fixed: String,
    /// Grouped rendering of `value`
    pub display: String,
    /// `max(value - gas_fee_buffer, 0)`
    pub buffered_value: BigDecimal,
    /// Fixed-decimal rendering of `buffered_value`
    pub buffered_fixed: String,
    /// Grouped rendering of `buffered_value`
    pub buffered_display: String,
}

/// Configurable, stateless number formatter.
///
/// # Examples
///
/// ```
/// use tokenview::{FormatterConfig, NumberFormatter};
///
/// let formatter = NumberFormatter::new(FormatterConfig::default()).unwrap();
///
/// let formatted = formatter.format("1234.12345678");
/// assert_eq!(formatted.fixed, "1234.12");
/// assert_eq!(formatted.display, "1,234.12");
///
/// assert_eq!(formatter.format_display("0.00001"), "< 0.0001");
/// assert_eq!(formatter.format_display(""), "0.00");
/// ```
#[derive(Debug, Clone, Default)]
pub struct NumberFormatter {
    config: FormatterConfig,
}

/// Fixed and display renderings of a single value
struct Rendered {
    fixed: String,
    display: String,
}

impl NumberFormatter {
    /// Create a formatter, validating `config` first.
    ///
    /// # Errors
    ///
    /// Returns [`FormatConfigError`] for any setting [`FormatterConfig::validate`]
    /// rejects, including configurations deserialized from JSON.
    pub fn new(config: FormatterConfig) -> Result<Self, FormatConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Format `value` into every variant
    pub fn format(&self, value: impl Into<NumericInput>) -> FormattedNumber {
        let value = value.into().to_decimal();
        let rounded = self
            .config
            .rounding_mode
            .round(&value, self.config.decimal_places);

        let buffered_value = self.apply_gas_buffer(&value);
        let primary = self.render(&value);
        let buffered = self.render(&buffered_value);

        FormattedNumber {
            value,
            rounded,
            fixed: primary.fixed,
            display: primary.display,
            buffered_value,
            buffered_fixed: buffered.fixed,
            buffered_display: buffered.display,
        }
    }

    /// Fixed-decimal rendering only
    pub fn format_fixed(&self, value: impl Into<NumericInput>) -> String {
        self.render(&value.into().to_decimal()).fixed
    }

    /// Grouped display rendering only
    pub fn format_display(&self, value: impl Into<NumericInput>) -> String {
        self.render(&value.into().to_decimal()).display
    }

    fn apply_gas_buffer(&self, value: &BigDecimal) -> BigDecimal {
        let buffered = value - &self.config.gas_fee_buffer;
        if buffered < BigDecimal::zero() {
            BigDecimal::zero()
        } else {
            buffered
        }
    }

    /// Zero renders with the configured places; zero places still show one (`0.0`).
    fn zero(&self) -> String {
        let places = self.config.decimal_places.max(1) as usize;
        format!("0.{}", "0".repeat(places))
    }

    fn render(&self, value: &BigDecimal) -> Rendered {
        let config = &self.config;
        let locale = &config.locale;

        if value.is_zero() {
            let zero = self.zero();
            return Rendered {
                fixed: zero.clone(),
                display: locale.format_grouped(&zero),
            };
        }

        if !config.should_truncate {
            if let Some(floor) = &config.abbreviation_floor {
                if value.abs() >= *floor {
                    let abbreviated = abbreviate(value, locale);
                    return Rendered {
                        fixed: abbreviated.clone(),
                        display: abbreviated,
                    };
                }
            }
        }

        let rounded = config.rounding_mode.round(value, config.decimal_places);

        if config.should_truncate {
            let plain = trim_trailing_zeros(&to_plain_string(&rounded));
            return Rendered {
                display: locale.format_grouped(&plain),
                fixed: plain,
            };
        }

        let fixed = to_plain_string(&rounded);
        let minimal = MinimalDisplay::resolve(value, config);

        let display = if minimal.is_below(value) {
            let amount = minimal
                .display_amount
                .with_scale(i64::from(minimal.decimal_places));
            format!("{LESS_THAN}{}", locale.format_grouped(&to_plain_string(&amount)))
        } else if minimal.absolute && minimal.decimal_places > config.decimal_places {
            let exact = config.rounding_mode.round(value, minimal.decimal_places);
            locale.format_grouped(&to_plain_string(&exact))
        } else {
            locale.format_grouped(&fixed)
        };

        Rendered { fixed, display }
    }
}
