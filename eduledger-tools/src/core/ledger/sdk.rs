// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Ledger client speaking the network's native gRPC API through the Hedera SDK.

use std::{collections::HashMap, fmt};

use hedera::{
    AccountBalanceQuery, Client, ContractCreateTransaction, FileAppendTransaction,
    FileCreateTransaction, PublicKey, TransactionResponse,
};

use super::{
    AccountId, FileId, Hbar, LedgerClient, Receipt, RemoteError, Status, Transaction,
    TransactionBody,
};
use crate::core::{network::Network, operator::Operator};

/// Consensus node of a network started with the local node tooling.
const LOCAL_NODE: &str = "127.0.0.1:50211";
const LOCAL_NODE_ACCOUNT: u64 = 3;

/// Transaction id reported for transactions refused at precheck, which never reach consensus.
const UNSUBMITTED: &str = "unsubmitted";

pub struct HederaClient {
    network: Network,
    client: Client,
}

impl HederaClient {
    /// Connects to `network`, paying for and signing every transaction as `operator`.
    pub fn new(network: Network, operator: &Operator) -> Result<Self, RemoteError> {
        let client = match network {
            Network::Mainnet => Client::for_mainnet(),
            Network::Testnet => Client::for_testnet(),
            Network::Previewnet => Client::for_previewnet(),
            Network::Local => {
                let node = hedera::AccountId::new(0, 0, LOCAL_NODE_ACCOUNT);
                Client::for_network(HashMap::from([(LOCAL_NODE.to_owned(), node)]))?
            }
        };
        client.set_operator(
            sdk_account_id(operator.account_id()),
            operator.key().clone(),
        );
        Ok(Self { network, client })
    }

    pub fn network(&self) -> Network {
        self.network
    }

    async fn receipt(
        &self,
        executed: Result<TransactionResponse, hedera::Error>,
    ) -> Result<Receipt, RemoteError> {
        let response = match executed {
            Ok(response) => response,
            Err(hedera::Error::TransactionPreCheckStatus { status, .. }) => {
                return Ok(Receipt::new(UNSUBMITTED, status_code(status)));
            }
            Err(err) => return Err(err.into()),
        };
        let transaction_id = response.transaction_id.to_string();
        match response.get_receipt(&self.client).await {
            Ok(receipt) => Ok(Receipt {
                transaction_id,
                status: status_code(receipt.status),
                file_id: receipt
                    .file_id
                    .map(|id| id.to_string().parse())
                    .transpose()?,
                contract_id: receipt
                    .contract_id
                    .map(|id| id.to_string().parse())
                    .transpose()?,
            }),
            Err(hedera::Error::ReceiptStatus { status, .. }) => {
                Ok(Receipt::new(transaction_id, status_code(status)))
            }
            Err(err) => Err(err.into()),
        }
    }
}

impl fmt::Debug for HederaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HederaClient")
            .field("network", &self.network)
            .finish_non_exhaustive()
    }
}

impl LedgerClient for HederaClient {
    async fn submit(&self, tx: &Transaction) -> Result<Receipt, RemoteError> {
        debug!(@grey, "executing {} on {}", tx.body.kind(), self.network.lavender());
        let max_fee = sdk_hbar(tx.max_fee);
        let memo = tx.memo.clone().unwrap_or_default();
        let executed = match &tx.body {
            TransactionBody::FileCreate { keys, contents } => {
                let keys = keys
                    .iter()
                    .map(|key| PublicKey::from_bytes(key))
                    .collect::<Result<Vec<_>, hedera::Error>>()?;
                FileCreateTransaction::new()
                    .keys(keys)
                    .contents(contents.to_vec())
                    .max_transaction_fee(max_fee)
                    .transaction_memo(memo)
                    .execute(&self.client)
                    .await
            }
            TransactionBody::FileAppend { file_id, contents } => {
                // one append per chunk: the planner already sized it
                FileAppendTransaction::new()
                    .file_id(sdk_file_id(*file_id))
                    .contents(contents.to_vec())
                    .chunk_size(contents.len().max(1))
                    .max_transaction_fee(max_fee)
                    .transaction_memo(memo)
                    .execute(&self.client)
                    .await
            }
            TransactionBody::ContractCreate {
                bytecode_file_id,
                gas,
                constructor_parameters,
            } => {
                ContractCreateTransaction::new()
                    .bytecode_file_id(sdk_file_id(*bytecode_file_id))
                    .gas(*gas)
                    .constructor_parameters(constructor_parameters.to_vec())
                    .max_transaction_fee(max_fee)
                    .transaction_memo(memo)
                    .execute(&self.client)
                    .await
            }
        };
        self.receipt(executed).await
    }

    async fn account_balance(&self, account: AccountId) -> Result<Hbar, RemoteError> {
        let balance = AccountBalanceQuery::new()
            .account_id(sdk_account_id(account))
            .execute(&self.client)
            .await?;
        let tinybars = balance.hbars.to_tinybars().max(0);
        Ok(Hbar::from_tinybars(tinybars as u64))
    }
}

fn sdk_account_id(id: AccountId) -> hedera::AccountId {
    hedera::AccountId::new(u64::from(id.0.shard), id.0.realm, id.0.num)
}

fn sdk_file_id(id: FileId) -> hedera::FileId {
    hedera::FileId::new(u64::from(id.0.shard), id.0.realm, id.0.num)
}

fn sdk_hbar(amount: Hbar) -> hedera::Hbar {
    hedera::Hbar::from_tinybars(i64::try_from(amount.tinybars()).unwrap_or(i64::MAX))
}

/// Maps an SDK status onto its `SCREAMING_SNAKE_CASE` response code name.
fn status_code(status: impl fmt::Debug) -> Status {
    let name = format!("{status:?}");
    let mut code = String::with_capacity(name.len() + 8);
    for (i, c) in name.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            code.push('_');
        }
        code.push(c.to_ascii_uppercase());
    }
    Status::from(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ledger::ContractId;

    #[test]
    fn status_codes_follow_response_code_names() {
        assert_eq!(status_code(hedera::Status::Success), Status::Success);
        assert_eq!(status_code(hedera::Status::Busy), Status::Busy);
        assert_eq!(
            status_code(hedera::Status::PlatformTransactionNotCreated),
            Status::PlatformTransactionNotCreated
        );
        assert_eq!(
            status_code(hedera::Status::InsufficientPayerBalance),
            Status::InsufficientPayerBalance
        );
    }

    #[test]
    fn ids_convert_both_ways() {
        let file_id = FileId::new(0, 0, 5005);
        let sdk = sdk_file_id(file_id);
        assert_eq!(sdk.to_string().parse::<FileId>().unwrap(), file_id);
        assert_eq!(
            sdk_account_id(AccountId::new(0, 0, 1001)).to_string(),
            "0.0.1001"
        );
        let contract = hedera::ContractId::new(0, 0, 5006);
        assert_eq!(
            contract.to_string().parse::<ContractId>().unwrap(),
            ContractId::new(0, 0, 5006)
        );
    }

    #[test]
    fn fees_convert_to_tinybars() {
        assert_eq!(sdk_hbar(Hbar::from_hbar(5)).to_tinybars(), 500_000_000);
    }
}
