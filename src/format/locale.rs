// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Digit grouping and decimal separators

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thousands::{digits, Separable, SeparatorPolicy};

/// Environment variables consulted for the system locale, in priority order
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

static SYSTEM_LOCALE: OnceLock<NumberLocale> = OnceLock::new();

/// Separators used to render grouped numbers.
///
/// # Examples
///
/// ```
/// use tokenview::NumberLocale;
///
/// assert_eq!(NumberLocale::en_us().format_grouped("-1234567.89"), "-1,234,567.89");
/// assert_eq!(NumberLocale::de_de().format_grouped("1234567.89"), "1.234.567,89");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberLocale {
    /// Placed between groups of three integer digits
    pub group_separator: String,
    /// Placed between integer and fractional digits
    pub decimal_separator: String,
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl NumberLocale {
    /// Create a locale from explicit separators
    pub fn new(group_separator: impl Into<String>, decimal_separator: impl Into<String>) -> Self {
        Self {
            group_separator: group_separator.into(),
            decimal_separator: decimal_separator.into(),
        }
    }

    /// `1,234.56`
    pub fn en_us() -> Self {
        Self::new(",", ".")
    }

    /// `1.234,56`
    pub fn de_de() -> Self {
        Self::new(".", ",")
    }

    /// `1 234,56` (no-break space)
    pub fn fr_fr() -> Self {
        Self::new("\u{a0}", ",")
    }

    /// `1'234.56`
    pub fn de_ch() -> Self {
        Self::new("'", ".")
    }

    /// Map a POSIX (`de_DE.UTF-8`) or BCP-47 (`de-DE`) tag to separators.
    ///
    /// Unknown languages fall back to en-US.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.split(['.', '@']).next().unwrap_or_default();
        let mut parts = tag.split(['_', '-']);
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();
        let region = parts.next().unwrap_or_default().to_ascii_uppercase();

        match (language.as_str(), region.as_str()) {
            ("de", "CH") | ("de", "LI") | ("it", "CH") => Self::de_ch(),
            ("de" | "es" | "it" | "nl" | "pt" | "id" | "tr" | "da" | "el", _) => Self::de_de(),
            ("fr" | "ru" | "pl" | "cs" | "sk" | "sv" | "nb" | "no" | "fi" | "uk" | "bg" | "hu", _) => {
                Self::fr_fr()
            }
            _ => Self::en_us(),
        }
    }

    /// Locale of the running process, detected once and memoized.
    ///
    /// Reads `LC_ALL`, `LC_NUMERIC` then `LANG`; the `C`/`POSIX` locales and
    /// unset variables fall through to en-US. Later changes to the
    /// environment are not observed.
    pub fn system() -> &'static NumberLocale {
        SYSTEM_LOCALE.get_or_init(|| {
            let tag = LOCALE_ENV_VARS
                .iter()
                .filter_map(|var| std::env::var(var).ok())
                .find(|value| !value.is_empty() && value != "C" && value != "POSIX");

            let locale = tag.as_deref().map(Self::from_tag).unwrap_or_default();
            tracing::debug!(
                tag = tag.as_deref().unwrap_or("default"),
                group = %locale.group_separator,
                decimal = %locale.decimal_separator,
                "Detected system number locale"
            );
            locale
        })
    }

    /// Group a plain positional numeral (`-1234.5`) with this locale's separators.
    pub fn format_grouped(&self, plain: &str) -> String {
        match plain.split_once('.') {
            Some((integer, fraction)) => format!(
                "{}{}{}",
                self.group_integer(integer),
                self.decimal_separator,
                fraction
            ),
            None => self.group_integer(plain),
        }
    }

    /// Separate groups of three integer digits; a leading sign is left in place.
    fn group_integer(&self, integer: &str) -> String {
        integer.separate_by_policy(SeparatorPolicy {
            separator: &self.group_separator,
            groups: &[3],
            digits: digits::ASCII_DECIMAL,
        })
    }
}
