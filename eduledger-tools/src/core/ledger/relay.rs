// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! HTTP ledger client.
//!
//! An alternative to [`super::HederaClient`] for setups that front the network with a JSON
//! gateway. Transactions signed by the operator go to the relay as JSON; balances are read from
//! the network's mirror node REST API.

use std::time::Duration;

use serde::{de::DeserializeOwned, Deserialize};
use typed_builder::TypedBuilder;

use super::{AccountId, Hbar, LedgerClient, Receipt, RemoteError, Transaction};
use crate::core::operator::Operator;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, TypedBuilder)]
pub struct RelayClient {
    #[builder(setter(into))]
    relay_url: String,
    #[builder(setter(into))]
    mirror_url: String,
    operator: Operator,
    #[builder(default = DEFAULT_REQUEST_TIMEOUT)]
    timeout: Duration,
    #[builder(default)]
    http: reqwest::Client,
}

impl RelayClient {
    pub fn relay_url(&self) -> &str {
        &self.relay_url
    }

    pub fn mirror_url(&self) -> &str {
        &self.mirror_url
    }

    fn transactions_endpoint(&self) -> String {
        format!(
            "{}/api/v1/transactions",
            self.relay_url.trim_end_matches('/')
        )
    }

    fn account_endpoint(&self, account: AccountId) -> String {
        format!(
            "{}/api/v1/accounts/{account}",
            self.mirror_url.trim_end_matches('/')
        )
    }
}

impl LedgerClient for RelayClient {
    async fn submit(&self, tx: &Transaction) -> Result<Receipt, RemoteError> {
        let endpoint = self.transactions_endpoint();
        debug!(@grey, "posting {} to {}", tx.body.kind(), endpoint.lavender());
        let signed = self.operator.sign(tx.clone())?;
        let response = self
            .http
            .post(&endpoint)
            .timeout(self.timeout)
            .json(&signed)
            .send()
            .await?;
        read_json(&endpoint, response).await
    }

    async fn account_balance(&self, account: AccountId) -> Result<Hbar, RemoteError> {
        let endpoint = self.account_endpoint(account);
        debug!(@grey, "querying balance at {}", endpoint.lavender());
        let request = self.http.get(&endpoint).timeout(self.timeout);
        let info: AccountInfo = read_json(&endpoint, request.send().await?).await?;
        Ok(info.balance.balance)
    }
}

/// Subset of the mirror node's `/api/v1/accounts/{id}` response.
#[derive(Debug, Deserialize)]
struct AccountInfo {
    balance: AccountBalance,
}

#[derive(Debug, Deserialize)]
struct AccountBalance {
    balance: Hbar,
}

async fn read_json<T: DeserializeOwned>(
    endpoint: &str,
    response: reqwest::Response,
) -> Result<T, RemoteError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(RemoteError::Http {
            endpoint: endpoint.to_owned(),
            status: status.as_u16(),
            body,
        });
    }
    serde_json::from_str(&body).map_err(|source| RemoteError::Decode {
        endpoint: endpoint.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::test_operator;

    #[test]
    fn endpoints_ignore_trailing_slash() {
        let client = RelayClient::builder()
            .relay_url("http://localhost:5600/")
            .mirror_url("https://testnet.mirrornode.hedera.com")
            .operator(test_operator())
            .build();
        assert_eq!(
            client.transactions_endpoint(),
            "http://localhost:5600/api/v1/transactions"
        );
        assert_eq!(
            client.account_endpoint(AccountId::new(0, 0, 1001)),
            "https://testnet.mirrornode.hedera.com/api/v1/accounts/0.0.1001"
        );
    }

    #[test]
    fn decode_mirror_account() {
        let info: AccountInfo = serde_json::from_str(
            r#"{
                "account": "0.0.1001",
                "balance": {"balance": 250000000, "timestamp": "1700000000.000000001", "tokens": []},
                "memo": ""
            }"#,
        )
        .unwrap();
        assert_eq!(info.balance.balance, Hbar::from_tinybars(250_000_000));
    }
}
