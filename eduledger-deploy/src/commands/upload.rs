// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use eduledger_tools::ops;

use crate::{
    common_args::{ArtifactArgs, AuthArgs, NetworkArgs, UploadArgs},
    error::DeployCliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Name of the contract whose artifact to upload
    contract: String,

    #[command(flatten)]
    artifacts: ArtifactArgs,
    #[command(flatten)]
    upload: UploadArgs,
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    network: NetworkArgs,
}

pub async fn exec(args: Args) -> DeployCliResult {
    let config = args.upload.config()?;
    let session = args.network.build_session(&args.auth)?;
    ops::upload(&session, &args.artifacts.base_dir, &args.contract, &config).await?;
    Ok(())
}
