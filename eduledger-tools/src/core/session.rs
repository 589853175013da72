// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Explicit connection state shared by every pipeline step.

use crate::{
    core::{
        chain::ChainConfig,
        ledger::{AccountId, Hbar, LedgerClient, Receipt, RemoteError, Transaction, TransactionBody},
        operator::Operator,
    },
    error::Result,
    utils::color::{Color, DebugColor},
};

/// A ledger client paired with the operator that signs and pays for its requests.
///
/// Built once by the caller and passed by reference to each component, so nothing in the
/// pipeline reaches for ambient client state.
#[derive(Debug)]
pub struct Session<C> {
    client: C,
    operator: Operator,
    chain: ChainConfig,
}

impl<C: LedgerClient> Session<C> {
    pub fn new(client: C, operator: Operator) -> Self {
        Self {
            client,
            operator,
            chain: ChainConfig::default(),
        }
    }

    pub fn with_chain_config(mut self, chain: ChainConfig) -> Self {
        self.chain = chain;
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    pub fn chain(&self) -> &ChainConfig {
        &self.chain
    }

    /// Submits a transaction paid for by the operator and waits for the receipt.
    pub async fn submit(
        &self,
        body: TransactionBody,
        max_fee: Hbar,
        memo: Option<String>,
    ) -> Result<Receipt, RemoteError> {
        let kind = body.kind();
        let tx = Transaction {
            payer: self.operator.account_id(),
            max_fee,
            memo,
            body,
        };
        let receipt = self.client.submit(&tx).await?;
        debug!(@grey, "{kind} {} returned {}", receipt.transaction_id.lavender(), receipt.status.debug_lavender());
        Ok(receipt)
    }

    pub async fn operator_balance(&self) -> Result<Hbar, RemoteError> {
        self.client
            .account_balance(self.operator.account_id())
            .await
    }

    /// Fails unless the operator balance is strictly above `minimum`.
    pub async fn check_balance(&self, minimum: Hbar) -> Result<Hbar> {
        let balance = self.operator_balance().await?;
        debug!(@grey, "operator balance: {}", balance.to_string().lavender());
        if balance <= minimum {
            return Err(PreconditionError::InsufficientBalance {
                account: self.operator.account_id(),
                balance,
                minimum,
            }
            .into());
        }
        Ok(balance)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PreconditionError {
    #[error(
        "not enough funds in operator account {}\n\
         balance {} must exceed {}",
        .account.to_string().red(),
        .balance.to_string().red(),
        .minimum,
    )]
    InsufficientBalance {
        account: AccountId,
        balance: Hbar,
        minimum: Hbar,
    },
}
