// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use eduledger_tools::{
    core::chain::DEFAULT_MAX_CHUNK_SIZE,
    ops::{self, LINKED_CONTRACT, PRIMARY_CONTRACT},
};

use crate::{
    common_args::{chain_config, ArtifactArgs, UploadArgs},
    error::DeployCliResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Contracts to inspect
    #[arg(default_values_t = [PRIMARY_CONTRACT.to_owned(), LINKED_CONTRACT.to_owned()])]
    contracts: Vec<String>,
    /// Largest chunk the network accepts in one file transaction, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_CHUNK_SIZE)]
    max_chunk_size: usize,

    #[command(flatten)]
    artifacts: ArtifactArgs,
    #[command(flatten)]
    upload: UploadArgs,
}

pub fn exec(args: Args) -> DeployCliResult {
    let config = args.upload.config()?;
    ops::size(
        &args.artifacts.base_dir,
        &args.contracts,
        &config,
        &chain_config(args.max_chunk_size),
    )?;
    Ok(())
}
