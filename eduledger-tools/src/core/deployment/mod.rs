// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::Address;
use serde::Serialize;

use crate::{
    core::{
        ledger::{ContractId, FileId, Hbar, LedgerClient, RemoteError, Status},
        session::Session,
    },
    utils::color::{Color, DebugColor},
};

pub use constructor::{parse_address, ConstructorParameters};
pub use request::ContractCreateRequest;

mod constructor;
mod request;

/// Default gas limit for contract creation.
pub const DEFAULT_GAS: u64 = 1_000_000;

#[derive(Debug, Clone)]
pub struct DeploymentConfig {
    pub gas: u64,
    pub max_fee: Hbar,
    pub memo: Option<String>,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            gas: DEFAULT_GAS,
            max_fee: Hbar::from_hbar(5),
            memo: None,
        }
    }
}

/// A live contract instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractHandle {
    pub contract_id: ContractId,
    /// Long-zero EVM address of `contract_id`
    pub evm_address: Address,
    pub transaction_id: String,
}

impl ContractHandle {
    pub fn new(contract_id: ContractId, transaction_id: String) -> Self {
        Self {
            contract_id,
            evm_address: contract_id.to_evm_address(),
            transaction_id,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("{0}")]
    Remote(#[from] RemoteError),
    #[error(
        "contract create from file {file_id} was rejected in {} (status {})",
        .transaction_id,
        .status.to_string().red(),
    )]
    Rejected {
        file_id: FileId,
        transaction_id: String,
        status: Status,
    },
    #[error("contract create from file {file_id} returned no contract id ({transaction_id})")]
    DeployFailed {
        file_id: FileId,
        transaction_id: String,
    },
    #[error("invalid constructor: {0}")]
    InvalidConstructor(String),
    #[error("invalid address {0:?}, expected shard.realm.num or a hex EVM address")]
    InvalidAddress(String),
}

/// Creates a contract instance from an uploaded bytecode file.
///
/// Not idempotent: each call creates a new instance with its own id, and nothing here retries.
pub async fn deploy_contract<C: LedgerClient>(
    session: &Session<C>,
    file_id: FileId,
    params: &ConstructorParameters,
    config: &DeploymentConfig,
) -> Result<ContractHandle, DeploymentError> {
    debug!(@grey, "creating contract from file {} with {} constructor args", file_id.to_string().lavender(), params.len());
    let handle = ContractCreateRequest::new(file_id, params.encode(), config)
        .exec(session)
        .await?;
    info!(@grey, "deployed contract {} at address: {}", handle.contract_id.to_string().lavender(), handle.evm_address.debug_lavender());
    Ok(handle)
}
