// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{
    core::{
        ledger::{Hbar, LedgerClient},
        session::Session,
    },
    utils::format_balance,
    Result,
};

/// Prints the operator balance, colored against the minimum a deployment needs.
pub async fn balance<C: LedgerClient>(session: &Session<C>, minimum: Hbar) -> Result<Hbar> {
    let balance = session.operator_balance().await?;
    greyln!(
        "operator {} balance: {}",
        session.operator().account_id().to_string().lavender(),
        format_balance(balance, minimum)
    );
    if balance <= minimum {
        warn!(@yellow, "a deployment needs more than {minimum}");
    }
    Ok(balance)
}
