// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use eduledger_tools::{
    core::ledger::Hbar,
    ops::{self, DriverConfig, LINKED_CONTRACT, PRIMARY_CONTRACT},
};

use crate::{
    common_args::{ArtifactArgs, AuthArgs, DeployArgs, NetworkArgs, UploadArgs},
    error::DeployCliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Contract deployed first
    #[arg(long, default_value = PRIMARY_CONTRACT)]
    primary: String,
    /// Contract deployed second, with the first contract's address as constructor argument
    #[arg(long, default_value = LINKED_CONTRACT)]
    linked: String,
    /// Balance the operator must exceed before anything is submitted, in HBAR
    #[arg(long, default_value = "1")]
    min_balance: Hbar,
    /// Append a JSON line per deployed contract to this file
    #[arg(long)]
    record: Option<PathBuf>,

    #[command(flatten)]
    artifacts: ArtifactArgs,
    #[command(flatten)]
    upload: UploadArgs,
    #[command(flatten)]
    deploy: DeployArgs,
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    network: NetworkArgs,
}

pub async fn exec(args: Args) -> DeployCliResult {
    let config = DriverConfig {
        base_dir: args.artifacts.base_dir,
        primary: args.primary,
        linked: args.linked,
        min_balance: args.min_balance,
        upload: args.upload.config()?,
        deployment: args.deploy.config(),
        record: args.record,
    };
    let session = args.network.build_session(&args.auth)?;
    let report = ops::deploy_linked(&session, &config).await?;
    report.print();
    Ok(())
}
