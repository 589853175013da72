// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use eduledger_tools::{
    core::{artifact::Artifact, ledger::FileId},
    ops,
};

use crate::{
    common_args::{ArtifactArgs, AuthArgs, DeployArgs, NetworkArgs},
    error::DeployCliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Bytecode file to create the contract from
    #[arg(long)]
    file_id: FileId,
    /// Contract whose artifact ABI types the constructor arguments. Without it, every argument
    /// must be an address.
    #[arg(long)]
    contract: Option<String>,
    /// The constructor arguments.
    #[arg(
        long,
        num_args(0..),
        value_name = "ARGS",
        allow_hyphen_values = true,
    )]
    constructor_args: Vec<String>,

    #[command(flatten)]
    artifacts: ArtifactArgs,
    #[command(flatten)]
    deploy: DeployArgs,
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    network: NetworkArgs,
}

pub async fn exec(args: Args) -> DeployCliResult {
    let artifact = args
        .contract
        .as_deref()
        .map(|name| Artifact::load(&args.artifacts.base_dir, name))
        .transpose()?;
    let params = ops::constructor_parameters(&args.constructor_args, artifact.as_ref())?;
    let session = args.network.build_session(&args.auth)?;
    ops::create(&session, args.file_id, &params, &args.deploy.config()).await?;
    Ok(())
}
