// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{
    core::{
        artifact::Artifact,
        deployment::{deploy_contract, ConstructorParameters, ContractHandle, DeploymentConfig},
        ledger::{FileId, LedgerClient},
        session::Session,
    },
    utils::color::DebugColor,
    Result,
};

/// Builds constructor arguments, typed by the artifact's ABI when one is available.
///
/// Without an ABI every argument must be an address.
pub fn constructor_parameters(
    args: &[String],
    artifact: Option<&Artifact>,
) -> Result<ConstructorParameters> {
    let params = match artifact.and_then(Artifact::constructor) {
        Some(constructor) => ConstructorParameters::coerce(args, constructor)?,
        None => ConstructorParameters::parse_addresses(args)?,
    };
    Ok(params)
}

/// Creates a contract from a bytecode file uploaded earlier.
pub async fn create<C: LedgerClient>(
    session: &Session<C>,
    file_id: FileId,
    params: &ConstructorParameters,
    config: &DeploymentConfig,
) -> Result<ContractHandle> {
    let handle = deploy_contract(session, file_id, params, config).await?;
    mintln!(
        "created contract {} from file {file_id}",
        handle.contract_id
    );
    greyln!("evm address: {}", handle.evm_address.debug_lavender());
    greyln!("transaction: {}", handle.transaction_id.lavender());
    Ok(handle)
}
