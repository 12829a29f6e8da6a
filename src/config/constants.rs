// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known denoms, prefixes and formatting limits
//!
//! This module centralizes magic constants used throughout the tokenview crate,
//! improving discoverability and maintainability.

/// Denom prefixes used to classify chain denoms
pub mod denoms {
    /// Native gas-token denom on Injective
    pub const INJ_DENOM: &str = "inj";

    /// Bech32 human-readable prefix of Injective accounts and contracts
    pub const INJ_ADDRESS_PREFIX: &str = "inj";

    /// Token-factory denoms: `factory/{creator}/{subdenom}`
    pub const FACTORY_PREFIX: &str = "factory/";

    /// Wormhole-wrapped assets are minted through the token factory but
    /// registered as IBC-style assets with a `source` tag.
    pub const WORMHOLE_FACTORY_PREFIX: &str = "factory/wormhole";

    /// IBC vouchers: `ibc/{hash}`
    pub const IBC_PREFIX: &str = "ibc/";

    /// Peggy bridge ERC-20 denoms: `peggy0x...`
    pub const PEGGY_PREFIX: &str = "peggy";

    /// EVM hex addresses
    pub const EVM_PREFIX: &str = "0x";

    /// Insurance fund share denoms: `share{id}`
    pub const INSURANCE_FUND_PREFIX: &str = "share";

    /// Base denom reported by the metadata service when the origin is not known
    pub const UNKNOWN_BASE_DENOM: &str = "Unknown";
}

/// Address shape heuristics
pub mod addresses {
    /// Length of a bech32 account/contract address (`inj1` + 38 chars).
    ///
    /// Inputs shorter than this are treated as symbols or short denoms.
    pub const CONTRACT_ADDRESS_LENGTH: usize = 42;

    /// Length of the long (32-byte) bech32 contract address form
    pub const LONG_CONTRACT_ADDRESS_LENGTH: usize = 62;

    /// Data + checksum characters after `{prefix}1` in a 20-byte address
    pub const BECH32_DATA_LENGTH: usize = 38;

    /// Data + checksum characters after `{prefix}1` in a 32-byte address
    pub const LONG_BECH32_DATA_LENGTH: usize = 58;
}

/// Formatting defaults and limits
pub mod formatting {
    /// Default maximum number of fractional digits
    pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

    /// Default threshold (as a number of decimals) below which a value renders as `< 0.0001`
    pub const DEFAULT_MINIMAL_DECIMAL_PLACES: u32 = 4;

    /// Default gas-fee buffer subtracted for the buffered variants, in INJ
    pub const DEFAULT_GAS_FEE_BUFFER: &str = "0.005";

    /// Upper bound on significant fractional digits shown when displaying the
    /// absolute decimal place of a tiny value
    pub const MAX_ABSOLUTE_DECIMAL_PLACES: u32 = 12;

    /// Upper bound accepted for any configured decimal place count
    pub const MAX_DECIMAL_PLACES: u32 = 36;

    /// Marker prefixed to abbreviated values
    pub const APPROXIMATELY: &str = "≈";

    /// Marker prefixed to values below the minimal display amount
    pub const LESS_THAN: &str = "< ";
}
