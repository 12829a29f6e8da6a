// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token classification enums: type, verification tier and bridge source

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::constants::{addresses, denoms};

/// How a token is represented on chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenType {
    /// Native bank denom (INJ and chain-native assets)
    Native,
    /// CosmWasm CW20 contract token
    Cw20,
    /// Token-factory denom (`factory/{creator}/{subdenom}`)
    TokenFactory,
    /// IBC voucher (`ibc/{hash}`)
    Ibc,
    /// Peggy-bridged ERC-20 (`peggy0x...`)
    Erc20,
    /// EVM-native asset addressed by hex
    Evm,
    /// Insurance fund share token
    InsuranceFund,
    /// Anything the metadata service could not classify
    #[default]
    #[serde(other)]
    Unknown,
}

impl TokenType {
    /// Classify a denom by its structural prefix.
    ///
    /// Used when a token is missing from the registry and a placeholder has to
    /// be built from the denom alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokenview::TokenType;
    ///
    /// assert_eq!(TokenType::from_denom("inj"), TokenType::Native);
    /// assert_eq!(TokenType::from_denom("factory/inj1abc/atom"), TokenType::TokenFactory);
    /// assert_eq!(TokenType::from_denom("ibc/C4CFF46FD6DE35CA"), TokenType::Ibc);
    /// assert_eq!(TokenType::from_denom("peggy0xdAC17F958D2ee523a2206206994597C13D831ec7"), TokenType::Erc20);
    /// assert_eq!(TokenType::from_denom("share12"), TokenType::InsuranceFund);
    /// ```
    pub fn from_denom(denom: &str) -> Self {
        let denom = denom.trim();

        if denom == denoms::INJ_DENOM {
            TokenType::Native
        } else if denom.starts_with(denoms::FACTORY_PREFIX) {
            TokenType::TokenFactory
        } else if denom.starts_with(denoms::IBC_PREFIX) {
            TokenType::Ibc
        } else if denom.starts_with(denoms::PEGGY_PREFIX) {
            TokenType::Erc20
        } else if denom.starts_with(denoms::EVM_PREFIX) {
            TokenType::Evm
        } else if denom.starts_with(denoms::INSURANCE_FUND_PREFIX) {
            TokenType::InsuranceFund
        } else if is_cw20_address(denom, denoms::INJ_ADDRESS_PREFIX) {
            TokenType::Cw20
        } else {
            TokenType::Unknown
        }
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenType::Native => "native",
            TokenType::Cw20 => "cw20",
            TokenType::TokenFactory => "tokenFactory",
            TokenType::Ibc => "ibc",
            TokenType::Erc20 => "erc20",
            TokenType::Evm => "evm",
            TokenType::InsuranceFund => "insuranceFund",
            TokenType::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Check whether `value` has the shape of a bech32 contract address for `prefix`.
///
/// Matches `{prefix}1` followed by lowercase bech32 data characters, at either
/// the 20-byte or the 32-byte address length.
pub fn is_cw20_address(value: &str, prefix: &str) -> bool {
    let Some(data) = value
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('1'))
    else {
        return false;
    };

    matches!(
        data.len(),
        addresses::BECH32_DATA_LENGTH | addresses::LONG_BECH32_DATA_LENGTH
    ) && data
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
}

/// Verification tier assigned by the token-metadata service.
///
/// Tiers are ordered `Verified > Internal > External > Unverified`, with
/// `Blacklisted` below everything. Only `Verified` records enter the verified
/// indices of the registry; every other tier is looked up as unverified.
/// Unrecognized tier names decode as `Unverified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenVerification {
    /// Known bad asset
    Blacklisted,
    /// No review
    #[default]
    Unverified,
    /// Listed by an external curator
    External,
    /// Listed by the exchange itself
    Internal,
    /// Fully reviewed
    Verified,
}

impl TokenVerification {
    /// Whether this record belongs to the verified indices
    pub const fn is_verified(&self) -> bool {
        matches!(self, TokenVerification::Verified)
    }

    /// Parse a wire tier name, falling back to `Unverified`
    pub fn from_wire(tier: &str) -> Self {
        match tier {
            "verified" => TokenVerification::Verified,
            "internal" => TokenVerification::Internal,
            "external" => TokenVerification::External,
            "blacklisted" => TokenVerification::Blacklisted,
            _ => TokenVerification::Unverified,
        }
    }
}

// `#[serde(other)]` requires the last variant; unknown tiers map here instead.
impl<'de> Deserialize<'de> for TokenVerification {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tier = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&tier))
    }
}

/// Bridge or provenance tag of an asset.
///
/// Several IBC or wormhole records can share a base denom; the source tag picks
/// the right one (e.g. USDC bridged from Ethereum vs. from Solana).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenSource {
    /// Native Cosmos-SDK chain over IBC
    Cosmos,
    /// Ethereum via Peggy
    Ethereum,
    /// Ethereum via Wormhole
    EthereumWh,
    /// Solana via Wormhole
    Solana,
    /// Aptos via Wormhole
    Aptos,
    /// Sui via Wormhole
    Sui,
    /// Polygon via Wormhole
    Polygon,
    /// Arbitrum via Wormhole
    Arbitrum,
    /// BNB Smart Chain via Wormhole
    BinanceSmartChain,
    /// Klaytn via Wormhole
    Klaytn,
    /// Unrecognized tag
    #[serde(other)]
    Unknown,
}
