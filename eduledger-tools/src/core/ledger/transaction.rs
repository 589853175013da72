// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Requests submitted to the ledger.

use alloy::primitives::Bytes;
use serde::Serialize;

use super::{
    hbar::Hbar,
    id::{AccountId, FileId},
};

/// Unsigned transaction paid for by the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub payer: AccountId,
    pub max_fee: Hbar,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(flatten)]
    pub body: TransactionBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TransactionBody {
    /// Create a file whose first contents are `contents`, modifiable only by `keys`.
    FileCreate { keys: Vec<Bytes>, contents: Bytes },
    /// Append `contents` to the end of an existing file.
    FileAppend { file_id: FileId, contents: Bytes },
    /// Instantiate a contract from the bytecode stored in a file.
    ContractCreate {
        bytecode_file_id: FileId,
        gas: u64,
        constructor_parameters: Bytes,
    },
}

impl TransactionBody {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FileCreate { .. } => "file create",
            Self::FileAppend { .. } => "file append",
            Self::ContractCreate { .. } => "contract create",
        }
    }
}

/// Transaction together with the operator's signature over its JSON encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedTransaction {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub public_key: Bytes,
    pub signature: Bytes,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn wire_format() {
        let tx = Transaction {
            payer: AccountId::new(0, 0, 1001),
            max_fee: Hbar::from_hbar(5),
            memo: None,
            body: TransactionBody::FileAppend {
                file_id: FileId::new(0, 0, 42),
                contents: Bytes::from_static(&[0xab, 0xcd]),
            },
        };
        assert_eq!(
            serde_json::to_value(&tx).unwrap(),
            json!({
                "payer": "0.0.1001",
                "maxFee": 500_000_000u64,
                "type": "fileAppend",
                "fileId": "0.0.42",
                "contents": "0xabcd",
            })
        );
    }

    #[test]
    fn contract_create_fields() {
        let body = TransactionBody::ContractCreate {
            bytecode_file_id: FileId::new(0, 0, 7),
            gas: 1_000_000,
            constructor_parameters: Bytes::new(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["type"], "contractCreate");
        assert_eq!(value["bytecodeFileId"], "0.0.7");
        assert_eq!(value["constructorParameters"], "0x");
        assert_eq!(body.kind(), "contract create");
    }
}
