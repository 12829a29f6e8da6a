// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for token metadata
//!
//! ```text
//! TokenRecord
//!   ├── TokenType          (how the asset lives on chain, inferred from denom shape)
//!   ├── TokenVerification  (Verified > Internal > External > Unverified, Blacklisted)
//!   ├── TokenSource        (bridge/provenance tag for IBC and wormhole assets)
//!   └── TokenDecimals      (chain amount ↔ human amount)
//! ```

mod decimals;
mod kind;
mod record;

pub use decimals::TokenDecimals;
pub use kind::{is_cw20_address, TokenSource, TokenType, TokenVerification};
pub use record::TokenRecord;
