// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;

use serde::{Deserialize, Serialize};

use super::id::{ContractId, FileId};

/// Terminal status code of a submitted transaction.
///
/// Only [`Status::Success`] counts as success; every other code is a rejection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Success,
    Busy,
    PlatformTransactionNotCreated,
    PlatformNotActive,
    InsufficientPayerBalance,
    InsufficientTxFee,
    InvalidSignature,
    InvalidFileId,
    MaxFileSizeExceeded,
    ContractRevertExecuted,
    InsufficientGas,
    Other(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "SUCCESS",
            Self::Busy => "BUSY",
            Self::PlatformTransactionNotCreated => "PLATFORM_TRANSACTION_NOT_CREATED",
            Self::PlatformNotActive => "PLATFORM_NOT_ACTIVE",
            Self::InsufficientPayerBalance => "INSUFFICIENT_PAYER_BALANCE",
            Self::InsufficientTxFee => "INSUFFICIENT_TX_FEE",
            Self::InvalidSignature => "INVALID_SIGNATURE",
            Self::InvalidFileId => "INVALID_FILE_ID",
            Self::MaxFileSizeExceeded => "MAX_FILE_SIZE_EXCEEDED",
            Self::ContractRevertExecuted => "CONTRACT_REVERT_EXECUTED",
            Self::InsufficientGas => "INSUFFICIENT_GAS",
            Self::Other(code) => code,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Whether the network never processed the transaction, so resubmitting it cannot apply it
    /// twice.
    pub fn is_retriable(&self) -> bool {
        matches!(
            self,
            Self::Busy | Self::PlatformTransactionNotCreated | Self::PlatformNotActive
        )
    }
}

impl From<String> for Status {
    fn from(code: String) -> Self {
        match code.as_str() {
            "SUCCESS" => Self::Success,
            "BUSY" => Self::Busy,
            "PLATFORM_TRANSACTION_NOT_CREATED" => Self::PlatformTransactionNotCreated,
            "PLATFORM_NOT_ACTIVE" => Self::PlatformNotActive,
            "INSUFFICIENT_PAYER_BALANCE" => Self::InsufficientPayerBalance,
            "INSUFFICIENT_TX_FEE" => Self::InsufficientTxFee,
            "INVALID_SIGNATURE" => Self::InvalidSignature,
            "INVALID_FILE_ID" => Self::InvalidFileId,
            "MAX_FILE_SIZE_EXCEEDED" => Self::MaxFileSizeExceeded,
            "CONTRACT_REVERT_EXECUTED" => Self::ContractRevertExecuted,
            "INSUFFICIENT_GAS" => Self::InsufficientGas,
            _ => Self::Other(code),
        }
    }
}

impl From<Status> for String {
    fn from(status: Status) -> String {
        match status {
            Status::Other(code) => code,
            status => status.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Acknowledgment of a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub transaction_id: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_id: Option<FileId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<ContractId>,
}

impl Receipt {
    pub fn new(transaction_id: impl Into<String>, status: Status) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            status,
            file_id: None,
            contract_id: None,
        }
    }
}
