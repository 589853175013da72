// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract-create transaction for bytecode already held in a file

use alloy::primitives::Bytes;

use super::{ContractHandle, DeploymentConfig, DeploymentError};
use crate::core::{
    ledger::{FileId, Hbar, LedgerClient, TransactionBody},
    session::Session,
};

/// Contract-create request for a previously uploaded bytecode file
#[derive(Debug, Clone)]
pub struct ContractCreateRequest {
    file_id: FileId,
    body: TransactionBody,
    max_fee: Hbar,
    memo: Option<String>,
}

impl ContractCreateRequest {
    pub fn new(file_id: FileId, constructor_parameters: Bytes, config: &DeploymentConfig) -> Self {
        Self {
            file_id,
            body: TransactionBody::ContractCreate {
                bytecode_file_id: file_id,
                gas: config.gas,
                constructor_parameters,
            },
            max_fee: config.max_fee,
            memo: config.memo.clone(),
        }
    }

    pub fn body(&self) -> &TransactionBody {
        &self.body
    }

    /// Submits the request once. A contract is created on every successful call.
    pub async fn exec<C: LedgerClient>(
        self,
        session: &Session<C>,
    ) -> Result<ContractHandle, DeploymentError> {
        let receipt = session.submit(self.body, self.max_fee, self.memo).await?;
        if !receipt.status.is_success() {
            return Err(DeploymentError::Rejected {
                file_id: self.file_id,
                transaction_id: receipt.transaction_id,
                status: receipt.status,
            });
        }
        let Some(contract_id) = receipt.contract_id else {
            return Err(DeploymentError::DeployFailed {
                file_id: self.file_id,
                transaction_id: receipt.transaction_id,
            });
        };
        debug!(@grey, "contract create tx: {}", receipt.transaction_id.lavender());
        Ok(ContractHandle::new(contract_id, receipt.transaction_id))
    }
}
