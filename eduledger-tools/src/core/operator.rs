// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Operator credentials: the account that signs and pays for every request.

use std::{fmt, path::Path};

use alloy::{primitives::Bytes, signers::local::PrivateKeySigner};
use hedera::PrivateKey;

use crate::{
    core::ledger::{AccountId, RemoteError, SignedTransaction, Transaction},
    error::ConfigError,
};

/// DER prefix of a PKCS#8 encoded secp256k1 private key.
const ECDSA_SECP256K1_DER_PREFIX: &[u8] = &[
    0x30, 0x30, 0x02, 0x01, 0x00, 0x30, 0x07, 0x06, 0x05, 0x2b, 0x81, 0x04, 0x00, 0x0a, 0x04, 0x22,
    0x04, 0x20,
];

/// DER prefix of a PKCS#8 encoded ED25519 private key.
const ED25519_DER_PREFIX: &[u8] = &[
    0x30, 0x2e, 0x02, 0x01, 0x00, 0x30, 0x05, 0x06, 0x03, 0x2b, 0x65, 0x70, 0x04, 0x22, 0x04, 0x20,
];

const KEY_LENGTH: usize = 32;

#[derive(Clone)]
pub struct Operator {
    account_id: AccountId,
    key: PrivateKey,
}

impl Operator {
    pub fn new(account_id: AccountId, key: PrivateKey) -> Self {
        Self { account_id, key }
    }

    /// Builds an operator from a hex private key, with or without `0x`.
    ///
    /// DER-encoded keys may be ECDSA secp256k1 or ED25519. A raw 32-byte key is read as ECDSA
    /// secp256k1.
    pub fn from_private_key(account_id: AccountId, key: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(account_id, parse_private_key(key)?))
    }

    /// Builds an operator from an encrypted JSON keystore holding a secp256k1 key.
    pub fn from_keystore(
        account_id: AccountId,
        keystore: impl AsRef<Path>,
        password: impl AsRef<[u8]>,
    ) -> Result<Self, ConfigError> {
        let signer = PrivateKeySigner::decrypt_keystore(keystore, password)
            .map_err(|err| ConfigError::Keystore(err.to_string()))?;
        let key = PrivateKey::from_bytes_ecdsa(signer.to_bytes().as_slice())
            .map_err(|err| ConfigError::Keystore(err.to_string()))?;
        Ok(Self::new(account_id, key))
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn key(&self) -> &PrivateKey {
        &self.key
    }

    /// Raw public key, used as the key of uploaded files: 33 compressed SEC1 bytes for
    /// secp256k1, 32 bytes for ED25519.
    pub fn public_key(&self) -> Bytes {
        self.key.public_key().to_bytes_raw().into()
    }

    /// Signs the JSON encoding of a transaction.
    pub fn sign(&self, transaction: Transaction) -> Result<SignedTransaction, RemoteError> {
        let message = serde_json::to_vec(&transaction).map_err(RemoteError::Encode)?;
        let signature = self.key.sign(&message);
        Ok(SignedTransaction {
            transaction,
            public_key: self.public_key(),
            signature: signature.into(),
        })
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
            .field("account_id", &self.account_id)
            .field("public_key", &self.public_key())
            .finish_non_exhaustive()
    }
}

pub fn parse_private_key(key: &str) -> Result<PrivateKey, ConfigError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(ConfigError::MissingPrivateKey);
    }
    let key = key.strip_prefix("0x").unwrap_or(key);
    let bytes = hex::decode(key).map_err(|_| ConfigError::InvalidPrivateKey)?;

    let parsed = if bytes.len() == KEY_LENGTH {
        PrivateKey::from_bytes_ecdsa(&bytes)
    } else if let Some(raw) = bytes.strip_prefix(ECDSA_SECP256K1_DER_PREFIX) {
        check_length(raw)?;
        PrivateKey::from_bytes_ecdsa(raw)
    } else if let Some(raw) = bytes.strip_prefix(ED25519_DER_PREFIX) {
        check_length(raw)?;
        PrivateKey::from_bytes_ed25519(raw)
    } else {
        return Err(ConfigError::InvalidPrivateKey);
    };
    parsed.map_err(|_| ConfigError::InvalidPrivateKey)
}

fn check_length(raw: &[u8]) -> Result<(), ConfigError> {
    if raw.len() != KEY_LENGTH {
        return Err(ConfigError::InvalidPrivateKey);
    }
    Ok(())
}
