// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Chain-to-human precision of a token

use serde::{Deserialize, Serialize};

/// Places between a token's base-unit amount and its human amount.
///
/// INJ, Peggy ERC-20 assets and most token-factory denoms use 18; Cosmos-SDK
/// bank denoms arriving over IBC usually use 6. Token lists omit the field for
/// 18-decimal tokens, hence the default.
///
/// # Examples
///
/// ```
/// use tokenview::{TokenDecimals, TokenRecord};
///
/// let atom: TokenRecord = serde_json::from_str(r#"{"denom": "uatom", "decimals": 6}"#).unwrap();
/// assert_eq!(atom.decimals, TokenDecimals::COSMOS);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u8);

impl TokenDecimals {
    /// 18: INJ and EVM-style assets
    pub const STANDARD: Self = Self(18);

    /// 6: Cosmos-SDK bank denoms
    pub const COSMOS: Self = Self(6);

    /// 8: bridged bitcoin
    pub const WBTC: Self = Self(8);

    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Decimal exponent for shifting base units: `human = raw * 10^-scale`
    pub fn scale(&self) -> i64 {
        i64::from(self.0)
    }
}

impl Default for TokenDecimals {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl From<u8> for TokenDecimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}
