// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::DeployCliResult;

mod balance;
mod create;
mod deploy;
mod size;
mod upload;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print the operator account balance
    #[clap(visible_alias = "b")]
    Balance(balance::Args),
    /// Create a contract from a bytecode file uploaded earlier
    #[clap(visible_alias = "c")]
    Create(create::Args),
    /// Upload and deploy the certificate NFT and ledger contracts
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// Print bytecode sizes and upload chunk plans
    #[clap(visible_alias = "s")]
    Size(size::Args),
    /// Upload one contract's bytecode to a new file
    #[clap(visible_alias = "u")]
    Upload(upload::Args),
}

pub async fn exec(cmd: Command) -> DeployCliResult {
    match cmd {
        Command::Balance(args) => balance::exec(args).await,
        Command::Create(args) => create::exec(args).await,
        Command::Deploy(args) => deploy::exec(args).await,
        Command::Size(args) => size::exec(args),
        Command::Upload(args) => upload::exec(args).await,
    }
}
