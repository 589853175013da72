// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use eduledger_tools::{core::ledger::Hbar, ops};

use crate::{
    common_args::{AuthArgs, NetworkArgs},
    error::DeployCliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Balance a deployment needs to exceed, in HBAR
    #[arg(long, default_value = "1")]
    min_balance: Hbar,

    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    network: NetworkArgs,
}

pub async fn exec(args: Args) -> DeployCliResult {
    let session = args.network.build_session(&args.auth)?;
    ops::balance(&session, args.min_balance).await?;
    Ok(())
}
