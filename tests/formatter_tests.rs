// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tests for NumberFormatter display rules
//!
//! Exercises the formatter through the public API with the configurations a
//! trading UI uses: USD prices, token balances, "max" inputs with a gas
//! buffer, and abbreviated market stats.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use tokenview::{
    to_balance_in_token, FormatConfigError, FormatterConfig, FormatterConfigBuilder,
    NumberFormatter, NumberLocale, RoundingMode, TokenDecimals, TokenviewError, U256,
};

fn formatter(builder: FormatterConfigBuilder) -> NumberFormatter {
    NumberFormatter::new(builder.build().expect("valid formatter config"))
        .expect("validated config")
}

fn dec(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).expect("valid decimal")
}

#[test]
fn test_usd_price_default_config() {
    let formatter = NumberFormatter::default();
    assert_eq!(formatter.format_display("1234.12345678"), "1,234.12");
    assert_eq!(formatter.format_fixed("1234.12345678"), "1234.12");
    assert_eq!(formatter.format_display("1234567890.5"), "1,234,567,890.50");
}

#[test]
fn test_zero_and_invalid_inputs() {
    let formatter = NumberFormatter::default();
    for input in ["", "0", "0.000", "abc", "1.2.3", "-"] {
        assert_eq!(formatter.format_display(input), "0.00", "input {input:?}");
    }
    assert_eq!(formatter.format_display(f64::INFINITY), "0.00");
    assert_eq!(formatter.format_display(None::<&str>), "0.00");

    let no_places = formatter_with_places(0);
    assert_eq!(no_places.format_display("0"), "0.0");
}

fn formatter_with_places(places: u32) -> NumberFormatter {
    formatter(FormatterConfigBuilder::new().decimal_places(places))
}

#[test]
fn test_rounding_down_and_up_at_boundary() {
    let down = NumberFormatter::default();
    assert_eq!(down.format_display("1.999999"), "1.99");

    let up = formatter(FormatterConfigBuilder::new().rounding_mode(RoundingMode::Up));
    assert_eq!(up.format_display("1.999999"), "2.00");
    assert_eq!(up.format_display("-1.001"), "-1.01");
}

#[test]
fn test_round_down_truncates_magnitude_for_negatives() {
    let formatter = NumberFormatter::default();
    assert_eq!(formatter.format_display("-1.999"), "-1.99");

    let floor = formatter_mode(RoundingMode::Floor);
    assert_eq!(floor.format_display("-1.991"), "-2.00");
}

fn formatter_mode(mode: RoundingMode) -> NumberFormatter {
    formatter(FormatterConfigBuilder::new().rounding_mode(mode))
}

#[test]
fn test_half_modes() {
    assert_eq!(formatter_mode(RoundingMode::HalfUp).format_display("2.345"), "2.35");
    assert_eq!(formatter_mode(RoundingMode::HalfDown).format_display("2.345"), "2.34");
    assert_eq!(formatter_mode(RoundingMode::HalfEven).format_display("2.345"), "2.34");
    assert_eq!(formatter_mode(RoundingMode::HalfEven).format_display("2.355"), "2.36");
    assert_eq!(formatter_mode(RoundingMode::Ceil).format_display("2.341"), "2.35");
}

#[test]
fn test_less_than_minimal() {
    let formatter = formatter(FormatterConfigBuilder::new().minimal_decimal_places(2));
    assert_eq!(formatter.format_display("0.0000001"), "< 0.01");
    assert_eq!(formatter.format_display("0.01"), "0.01");

    let default = NumberFormatter::default();
    assert_eq!(default.format_display("0.00005"), "< 0.0001");
}

#[test]
fn test_negative_sign_stays_outside_numeral() {
    let formatter = formatter_with_places(3);
    assert_eq!(formatter.format_display("-1234.567"), "-1,234.567");
    assert_eq!(formatter.format_display("-1234567.1"), "-1,234,567.100");
}

#[test]
fn test_abbreviation_for_market_stats() {
    let formatter = formatter(FormatterConfigBuilder::new().abbreviation_floor(1_000_000));
    let formatted = formatter.format("1000000000.123");
    assert_eq!(formatted.fixed, "≈1B");
    assert_eq!(formatted.display, "≈1B");

    assert_eq!(formatter.format_display("2500000"), "≈2.5M");
    assert_eq!(formatter.format_display("-2500000"), "≈-2.5M");
    assert_eq!(formatter.format_display("999999.99"), "999,999.99");
}

#[test]
fn test_truncate_mode_is_plain_numeral() {
    let formatter = formatter(
        FormatterConfigBuilder::new()
            .decimal_places(6)
            .should_truncate(true)
            .abbreviation_floor(1_000),
    );
    assert_eq!(formatter.format_display("12345.1200009"), "12,345.12");
    assert_eq!(formatter.format_fixed("12345.1200009"), "12345.12");
    assert_eq!(formatter.format_display("0.0000001"), "0");
}

#[test]
fn test_absolute_decimal_place_reveals_dust() {
    let formatter = formatter(FormatterConfigBuilder::new().display_absolute_decimal_place(true));

    // Exactly as many places as the value carries
    assert_eq!(formatter.format_display("0.00000042"), "0.00000042");
    // Capped at twelve places
    assert_eq!(formatter.format_display("0.0000000000000042"), "< 0.000000000001");
    // Above the minimal threshold the regular rules apply
    assert_eq!(formatter.format_display("0.25"), "0.25");
    // Fixed output keeps the configured places
    assert_eq!(formatter.format_fixed("0.00000042"), "0.00");
}

#[test]
fn test_buffered_variants_for_max_input() {
    let formatter = NumberFormatter::default();
    let formatted = formatter.format("10.0");
    assert_eq!(formatted.buffered_value, dec("9.995"));
    assert_eq!(formatted.buffered_fixed, "9.99");
    assert_eq!(formatted.buffered_display, "9.99");

    let custom = formatter_buffer("1.5");
    let formatted = custom.format("1");
    assert_eq!(formatted.buffered_display, "0.00");
    assert_eq!(formatted.display, "1.00");
}

fn formatter_buffer(buffer: &str) -> NumberFormatter {
    formatter(FormatterConfigBuilder::new().gas_fee_buffer(dec(buffer)))
}

#[test]
fn test_buffered_variant_can_drop_below_minimal() {
    let formatter = NumberFormatter::default();
    let formatted = formatter.format("0.00501");
    assert_eq!(formatted.buffered_value, dec("0.00001"));
    assert_eq!(formatted.buffered_display, "< 0.0001");
}

#[test]
fn test_locales() {
    let german = formatter(FormatterConfigBuilder::new().locale(NumberLocale::de_de()));
    assert_eq!(german.format_display("1234567.891"), "1.234.567,89");

    let swiss = formatter(FormatterConfigBuilder::new().locale(NumberLocale::de_ch()));
    assert_eq!(swiss.format_display("1234567.891"), "1'234'567.89");

    let french = formatter(FormatterConfigBuilder::new().locale(NumberLocale::fr_fr()));
    assert_eq!(french.format_display("1234.5"), "1\u{a0}234,50");
}

#[test]
fn test_system_locale_is_memoized() {
    let first = NumberLocale::system();
    let second = NumberLocale::system();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_token_balance_pipeline() {
    let raw = U256::from(1_500_000u64);
    let balance = to_balance_in_token(raw, TokenDecimals::COSMOS);
    let formatter = formatter_with_places(6);
    assert_eq!(formatter.format_display(balance), "1.500000");
}

#[test]
fn test_config_from_json() -> anyhow::Result<()> {
    let config: FormatterConfig = serde_json::from_str(
        r#"{"decimalPlaces": 4, "roundingMode": "halfUp", "shouldTruncate": false}"#,
    )?;
    let formatter = NumberFormatter::new(config)?;
    assert_eq!(formatter.format_display("1.23456"), "1.2346");
    Ok(())
}

#[test]
fn test_json_config_is_validated_on_construction() -> anyhow::Result<()> {
    let config: FormatterConfig = serde_json::from_str(r#"{"decimalPlaces": 1000000}"#)?;
    let err = NumberFormatter::new(config).unwrap_err();
    assert!(matches!(err, FormatConfigError::DecimalPlacesOutOfRange { .. }));
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected() {
    let err = FormatterConfigBuilder::new().decimal_places(99).build().unwrap_err();
    assert!(matches!(err, FormatConfigError::DecimalPlacesOutOfRange { .. }));

    let err = FormatterConfigBuilder::new()
        .gas_fee_buffer(dec("-0.1"))
        .build()
        .unwrap_err();
    let unified: TokenviewError = err.into();
    assert!(matches!(unified, TokenviewError::FormatConfig(_)));
}
