// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token metadata record as served by the token-metadata service

use serde::{Deserialize, Serialize};

use super::decimals::TokenDecimals;
use super::kind::{TokenSource, TokenType, TokenVerification};
use crate::config::constants::denoms;

/// One fungible asset known to the exchange.
///
/// Field names follow the camelCase JSON shape of the metadata service, so a
/// token list can be decoded directly with `serde_json`.
///
/// # Examples
///
/// ```
/// use tokenview::{TokenRecord, TokenType, TokenVerification};
///
/// let json = r#"{
///     "denom": "inj",
///     "symbol": "INJ",
///     "name": "Injective",
///     "decimals": 18,
///     "tokenType": "native",
///     "tokenVerification": "verified",
///     "isNative": true
/// }"#;
///
/// let token: TokenRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(token.token_type, TokenType::Native);
/// assert!(token.is_verified());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    /// Unique chain identifier
    pub denom: String,
    /// Origin denom for IBC vouchers and bridged assets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_denom: Option<String>,
    /// Human-readable name
    #[serde(default)]
    pub name: String,
    /// Ticker, matched case-insensitively
    #[serde(default)]
    pub symbol: String,
    /// Contract or bank address
    #[serde(default)]
    pub address: String,
    /// Decimals between chain amount and human amount
    #[serde(default)]
    pub decimals: TokenDecimals,
    /// Logo URL or asset path
    #[serde(default)]
    pub logo: String,
    /// CoinGecko identifier for price feeds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coin_gecko_id: Option<String>,
    /// On-chain representation
    #[serde(default)]
    pub token_type: TokenType,
    /// Verification tier
    #[serde(default)]
    pub token_verification: TokenVerification,
    /// Bridge/provenance tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<TokenSource>,
    /// Native to the origin chain (never evicted from the verified base-denom slot)
    #[serde(default)]
    pub is_native: bool,
}

impl TokenRecord {
    /// Create a record with the identifying fields set and everything else defaulted.
    pub fn new(
        denom: impl Into<String>,
        symbol: impl Into<String>,
        token_type: TokenType,
        token_verification: TokenVerification,
    ) -> Self {
        let denom = denom.into();
        let symbol = symbol.into();
        Self {
            name: symbol.clone(),
            address: denom.clone(),
            denom,
            base_denom: None,
            symbol,
            decimals: TokenDecimals::default(),
            logo: String::new(),
            coin_gecko_id: None,
            token_type,
            token_verification,
            source: None,
            is_native: false,
        }
    }

    /// Placeholder record for a denom the registry does not know.
    ///
    /// The token type is inferred from the denom prefix, and the symbol from
    /// its most readable segment. Callers substitute this record while an
    /// asynchronous metadata lookup is pending.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokenview::{TokenRecord, TokenType, TokenVerification};
    ///
    /// let token = TokenRecord::unknown("factory/inj1creator/kira");
    /// assert_eq!(token.token_type, TokenType::TokenFactory);
    /// assert_eq!(token.symbol, "kira");
    /// assert_eq!(token.address, "inj1creator");
    /// assert_eq!(token.token_verification, TokenVerification::Unverified);
    /// ```
    pub fn unknown(denom: impl Into<String>) -> Self {
        let denom = denom.into().trim().to_string();
        let token_type = TokenType::from_denom(&denom);

        let (symbol, address) = match token_type {
            TokenType::TokenFactory => {
                let mut segments = denom.split('/').skip(1);
                let creator = segments.next().unwrap_or_default().to_string();
                let subdenom = segments.last().unwrap_or_default().to_string();
                (subdenom, creator)
            }
            TokenType::Erc20 => {
                let address = denom
                    .strip_prefix(denoms::PEGGY_PREFIX)
                    .unwrap_or(&denom)
                    .to_string();
                (denom.clone(), address)
            }
            TokenType::Ibc => (
                denom
                    .strip_prefix(denoms::IBC_PREFIX)
                    .unwrap_or(&denom)
                    .to_string(),
                denom.clone(),
            ),
            _ => (denom.clone(), denom.clone()),
        };

        Self {
            name: denom.clone(),
            denom,
            base_denom: None,
            symbol,
            address,
            decimals: TokenDecimals::default(),
            logo: String::new(),
            coin_gecko_id: None,
            token_type,
            token_verification: TokenVerification::Unverified,
            source: None,
            is_native: false,
        }
    }

    /// Set the base denom
    pub fn with_base_denom(mut self, base_denom: impl Into<String>) -> Self {
        self.base_denom = Some(base_denom.into());
        self
    }

    /// Set the contract or bank address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the bridge source tag
    pub fn with_source(mut self, source: TokenSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the decimals
    pub fn with_decimals(mut self, decimals: impl Into<TokenDecimals>) -> Self {
        self.decimals = decimals.into();
        self
    }

    /// Set the native flag
    pub fn with_native(mut self, is_native: bool) -> Self {
        self.is_native = is_native;
        self
    }

    /// Whether the record belongs to the verified tier
    pub fn is_verified(&self) -> bool {
        self.token_verification.is_verified()
    }

    /// Lowercased symbol used as the symbol-index key
    pub fn symbol_key(&self) -> String {
        self.symbol.to_lowercase()
    }
}

impl std::fmt::Display for TokenRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.symbol, self.denom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let token = TokenRecord::new("inj", "INJ", TokenType::Native, TokenVerification::Verified);
        assert_eq!(token.name, "INJ");
        assert_eq!(token.address, "inj");
        assert_eq!(token.decimals, TokenDecimals::STANDARD);
        assert!(token.base_denom.is_none());
        assert!(token.is_verified());
        assert_eq!(token.symbol_key(), "inj");
    }

    #[test]
    fn test_deserialize_with_missing_optional_fields() {
        let token: TokenRecord = serde_json::from_str(r#"{"denom": "uatom"}"#).unwrap();
        assert_eq!(token.denom, "uatom");
        assert_eq!(token.token_type, TokenType::Unknown);
        assert_eq!(token.token_verification, TokenVerification::Unverified);
        assert!(!token.is_native);
    }

    #[test]
    fn test_deserialize_unknown_verification_tier() {
        let token: TokenRecord =
            serde_json::from_str(r#"{"denom":"x","tokenVerification":"somethingNew"}"#).unwrap();
        assert_eq!(token.token_verification, TokenVerification::Unverified);
        assert!(!token.is_verified());
    }

    #[test]
    fn test_deserialize_ibc_record() {
        let json = r#"{
            "denom": "ibc/C4CFF46FD6DE35CA4CF4CE031E643C8FDC9BA4B99AE598E9B0ED98FE3A2319F9",
            "baseDenom": "uatom",
            "symbol": "ATOM",
            "decimals": 6,
            "tokenType": "ibc",
            "tokenVerification": "verified",
            "source": "cosmos",
            "isNative": true
        }"#;
        let token: TokenRecord = serde_json::from_str(json).unwrap();
        assert_eq!(token.base_denom.as_deref(), Some("uatom"));
        assert_eq!(token.decimals, TokenDecimals::COSMOS);
        assert_eq!(token.source, Some(TokenSource::Cosmos));
        assert!(token.is_native);
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let token = TokenRecord::new("ibc/ABC", "ABC", TokenType::Ibc, TokenVerification::Verified)
            .with_base_denom("uabc");
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["baseDenom"], "uabc");
        assert_eq!(json["tokenType"], "ibc");
        assert_eq!(json["tokenVerification"], "verified");
        assert!(json.get("source").is_none());
    }

    #[test]
    fn test_unknown_placeholder_by_type() {
        let peggy = TokenRecord::unknown("peggy0xdAC17F958D2ee523a2206206994597C13D831ec7");
        assert_eq!(peggy.token_type, TokenType::Erc20);
        assert_eq!(peggy.address, "0xdAC17F958D2ee523a2206206994597C13D831ec7");

        let ibc = TokenRecord::unknown(" ibc/ABCDEF ");
        assert_eq!(ibc.denom, "ibc/ABCDEF");
        assert_eq!(ibc.symbol, "ABCDEF");

        let bank = TokenRecord::unknown("uatom");
        assert_eq!(bank.token_type, TokenType::Unknown);
        assert_eq!(bank.symbol, "uatom");
    }

    #[test]
    fn test_display() {
        let token = TokenRecord::new("inj", "INJ", TokenType::Native, TokenVerification::Verified);
        assert_eq!(token.to_string(), "INJ (inj)");
    }
}
