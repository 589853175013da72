// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub const ACCOUNT_ID_ENV: &str = "HEDERA_ACCOUNT_ID";
pub const PRIVATE_KEY_ENV: &str = "HEDERA_PRIVATE_KEY";
pub const NETWORK_ENV: &str = "HEDERA_NETWORK";
pub const RELAY_URL_ENV: &str = "LEDGER_RELAY_URL";
pub const MIRROR_URL_ENV: &str = "LEDGER_MIRROR_URL";

/// Default fee ceiling for every transaction, in HBAR.
pub const DEFAULT_MAX_FEE: &str = "5";
