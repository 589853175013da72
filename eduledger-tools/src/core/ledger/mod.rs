// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Request and receipt surface of the remote ledger.
//!
//! The ledger itself (consensus, durability, fee charging) is an external service. This module
//! only describes what gets sent to it and what comes back, behind the [`LedgerClient`] trait.

pub use hbar::{Hbar, InvalidHbar, TINYBARS_PER_HBAR};
pub use id::{AccountId, ContractId, EntityId, FileId, InvalidEntityId};
pub use receipt::{Receipt, Status};
pub use relay::{RelayClient, DEFAULT_REQUEST_TIMEOUT};
pub use sdk::HederaClient;
pub use transaction::{SignedTransaction, Transaction, TransactionBody};

mod hbar;
mod id;
mod receipt;
mod relay;
mod sdk;
mod transaction;

/// Connection to a ledger network.
///
/// Every call suspends until the network answers. Implementations must not reorder or batch
/// submissions: callers rely on one submission being acknowledged before the next is issued.
/// Implementations sign with the operator they were built for.
#[allow(async_fn_in_trait)]
pub trait LedgerClient {
    /// Signs and submits a transaction and waits for its receipt.
    async fn submit(&self, tx: &Transaction) -> Result<Receipt, RemoteError>;

    /// Queries the current balance of an account.
    async fn account_balance(&self, account: AccountId) -> Result<Hbar, RemoteError>;
}

/// Client picked at startup: the network's native API, or a JSON relay when one is configured.
#[derive(Debug)]
pub enum NetworkClient {
    Hedera(HederaClient),
    Relay(RelayClient),
}

impl LedgerClient for NetworkClient {
    async fn submit(&self, tx: &Transaction) -> Result<Receipt, RemoteError> {
        match self {
            Self::Hedera(client) => client.submit(tx).await,
            Self::Relay(client) => client.submit(tx).await,
        }
    }

    async fn account_balance(&self, account: AccountId) -> Result<Hbar, RemoteError> {
        match self {
            Self::Hedera(client) => client.account_balance(account).await,
            Self::Relay(client) => client.account_balance(account).await,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("hedera sdk error: {0}")]
    Sdk(#[from] hedera::Error),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{endpoint} returned http {status}: {body}")]
    Http {
        endpoint: String,
        status: u16,
        body: String,
    },
    #[error("invalid response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid entity id in receipt: {0}")]
    EntityId(#[from] InvalidEntityId),
    #[error("failed to encode transaction: {0}")]
    Encode(#[source] serde_json::Error),
}
