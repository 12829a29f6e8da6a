// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for tokenview integration tests
//!
//! Token-list fixtures shaped like the responses of a token-metadata service.

use tokenview::{TokenRecord, TokenSource, TokenType, TokenVerification};

/// 20-byte CW20 contract address (42 chars)
pub const CW20_ADDRESS: &str = "inj14au322k9munkmx5wrchz9q30juf5wjgz2cfqku";

/// 32-byte CW20 contract address (62 chars)
#[allow(dead_code)]
pub const LONG_CW20_ADDRESS: &str =
    "inj1q2m26a7jdzjyfdn545vqsude3zwwtfrdap5jgz4mnlxp9q4z3tssas9stn";

/// Peggy-bridged USDT denom
pub const USDT_DENOM: &str = "peggy0xdAC17F958D2ee523a2206206994597C13D831ec7";

/// Shorthand for a record with default metadata
pub fn token(
    denom: &str,
    symbol: &str,
    token_type: TokenType,
    verification: TokenVerification,
) -> TokenRecord {
    TokenRecord::new(denom, symbol, token_type, verification)
}

/// IBC voucher with a base denom and optional bridge source
#[allow(dead_code)]
pub fn ibc_token(
    hash: &str,
    base_denom: &str,
    symbol: &str,
    verification: TokenVerification,
    source: Option<TokenSource>,
) -> TokenRecord {
    let record = token(&format!("ibc/{hash}"), symbol, TokenType::Ibc, verification)
        .with_base_denom(base_denom);
    match source {
        Some(source) => record.with_source(source),
        None => record,
    }
}

/// A small mainnet-like token list covering every index
#[allow(dead_code)]
pub fn mainnet_tokens() -> Vec<TokenRecord> {
    vec![
        token("inj", "INJ", TokenType::Native, TokenVerification::Verified).with_native(true),
        token(USDT_DENOM, "USDT", TokenType::Erc20, TokenVerification::Verified),
        ibc_token(
            "C4CFF46FD6DE35CA4CF4CE031E643C8FDC9BA4B99AE598E9B0ED98FE3A2319F9",
            "uatom",
            "ATOM",
            TokenVerification::Verified,
            Some(TokenSource::Cosmos),
        )
        .with_native(true),
        ibc_token(
            "2CBC2EA121AE42563B08028466F37B600F2D7D4282342DE938283CC3FB2BC00E",
            "uusdc",
            "USDCnb",
            TokenVerification::Verified,
            Some(TokenSource::Cosmos),
        ),
        token(
            CW20_ADDRESS,
            "CWT",
            TokenType::Cw20,
            TokenVerification::Internal,
        ),
        token(
            "factory/inj14au322k9munkmx5wrchz9q30juf5wjgz2cfqku/kira",
            "KIRA",
            TokenType::TokenFactory,
            TokenVerification::Verified,
        ),
        token(
            "share15",
            "INJ/USDT PERP",
            TokenType::InsuranceFund,
            TokenVerification::Unverified,
        ),
        token(
            "factory/wormhole/WETH",
            "WETH",
            TokenType::Ibc,
            TokenVerification::Verified,
        )
        .with_base_denom("weth")
        .with_source(TokenSource::EthereumWh),
    ]
}

/// The same list as [`mainnet_tokens`] serialized the way the metadata
/// service sends it
#[allow(dead_code)]
pub fn mainnet_tokens_json() -> String {
    serde_json::to_string(&mainnet_tokens()).unwrap_or_else(|err| panic!("fixture: {err}"))
}
