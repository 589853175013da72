// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Uploading a payload to the ledger's file service, one chunk per transaction.

use std::{fmt, str::FromStr, time::Duration};

use alloy::primitives::Bytes;

use crate::{
    core::{
        chunking::{ChunkConfig, ChunkPlan},
        ledger::{FileId, Hbar, LedgerClient, Receipt, RemoteError, Status, TransactionBody},
        session::Session,
    },
    error::ConfigError,
    utils::color::Color,
};

#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub chunks: ChunkConfig,
    pub encoding: PayloadEncoding,
    pub create_max_fee: Hbar,
    pub append_max_fee: Hbar,
    pub retry: RetryPolicy,
    pub memo: Option<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            chunks: ChunkConfig::default(),
            encoding: PayloadEncoding::default(),
            create_max_fee: Hbar::from_hbar(5),
            append_max_fee: Hbar::from_hbar(5),
            retry: RetryPolicy::default(),
            memo: None,
        }
    }
}

/// How bytecode is written into the file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PayloadEncoding {
    /// Hex text, which is what contract creation reads from bytecode files.
    #[default]
    Hex,
    /// The bytes as-is.
    Raw,
}

impl PayloadEncoding {
    pub fn encode(&self, bytecode: &[u8]) -> Bytes {
        match self {
            Self::Hex => hex::encode(bytecode).into_bytes().into(),
            Self::Raw => Bytes::copy_from_slice(bytecode),
        }
    }
}

impl fmt::Display for PayloadEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex => f.write_str("hex"),
            Self::Raw => f.write_str("raw"),
        }
    }
}

impl FromStr for PayloadEncoding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "raw" => Ok(Self::Raw),
            _ => Err(ConfigError::InvalidEncoding(s.to_owned())),
        }
    }
}

/// Resubmission of file transactions the network reports it never processed.
///
/// Receipts with any other status, and transport failures, are never retried: the
/// transaction may have been applied, and appending twice would corrupt the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total submissions per transaction, including the first.
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl RetryPolicy {
    pub const fn none() -> Self {
        Self {
            max_attempts: 1,
            backoff: Duration::ZERO,
        }
    }

    pub fn new(max_attempts: u32, backoff: Duration) -> Result<Self, ConfigError> {
        if max_attempts == 0 {
            return Err(ConfigError::InvalidRetryAttempts);
        }
        Ok(Self {
            max_attempts,
            backoff,
        })
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("chunk plan covers {plan_len} bytes but the payload has {payload_len}")]
    PlanMismatch { plan_len: usize, payload_len: usize },
    #[error(
        "file create {} returned no file id (status {})",
        .transaction_id,
        .status.to_string().red(),
    )]
    CreateFailed {
        transaction_id: String,
        status: Status,
    },
    #[error(
        "append of chunk {chunk_index}/{} to file {file_id} was rejected in {} (status {})",
        .chunk_count - 1,
        .transaction_id,
        .status.to_string().red(),
    )]
    AppendFailed {
        file_id: FileId,
        chunk_index: usize,
        chunk_count: usize,
        transaction_id: String,
        status: Status,
    },
    #[error("chunk {chunk_index} of {chunk_count} could not be submitted: {source}")]
    Remote {
        chunk_index: usize,
        chunk_count: usize,
        #[source]
        source: RemoteError,
    },
}

/// Uploads `payload` as a new file, creating it with the first chunk of `plan` and appending the
/// rest strictly in order.
///
/// Each append is acknowledged before the next is submitted, since the file service assembles
/// the file in append order. The first rejected chunk aborts the upload.
pub async fn upload_file<C: LedgerClient>(
    session: &Session<C>,
    payload: &[u8],
    plan: &ChunkPlan,
    config: &UploadConfig,
) -> Result<FileId, UploadError> {
    if plan.total_len() != payload.len() {
        return Err(UploadError::PlanMismatch {
            plan_len: plan.total_len(),
            payload_len: payload.len(),
        });
    }
    let chunk_count = plan.len();
    let mut chunks = plan.chunks(payload);
    let remote = |chunk_index| {
        move |source| UploadError::Remote {
            chunk_index,
            chunk_count,
            source,
        }
    };

    let first = chunks.next().unwrap_or_default();
    let create = TransactionBody::FileCreate {
        keys: vec![session.operator().public_key()],
        contents: Bytes::copy_from_slice(first),
    };
    let receipt = submit_with_retry(session, create, config.create_max_fee, config)
        .await
        .map_err(remote(0))?;
    let file_id = match receipt.file_id {
        Some(file_id) if receipt.status.is_success() => file_id,
        _ => {
            return Err(UploadError::CreateFailed {
                transaction_id: receipt.transaction_id,
                status: receipt.status,
            });
        }
    };
    debug!(@grey, "created file {} with chunk 0 ({} bytes)", file_id.to_string().lavender(), first.len());

    for (chunk_index, chunk) in chunks.enumerate().map(|(i, chunk)| (i + 1, chunk)) {
        let append = TransactionBody::FileAppend {
            file_id,
            contents: Bytes::copy_from_slice(chunk),
        };
        let receipt = submit_with_retry(session, append, config.append_max_fee, config)
            .await
            .map_err(remote(chunk_index))?;
        if !receipt.status.is_success() {
            return Err(UploadError::AppendFailed {
                file_id,
                chunk_index,
                chunk_count,
                transaction_id: receipt.transaction_id,
                status: receipt.status,
            });
        }
        debug!(@grey, "appended chunk {chunk_index}/{} ({} bytes)", chunk_count - 1, chunk.len());
    }

    info!(@grey, "uploaded {} bytes to file {} in {} chunks", payload.len(), file_id.to_string().lavender(), chunk_count);
    Ok(file_id)
}

async fn submit_with_retry<C: LedgerClient>(
    session: &Session<C>,
    body: TransactionBody,
    max_fee: Hbar,
    config: &UploadConfig,
) -> Result<Receipt, RemoteError> {
    let retry = &config.retry;
    let mut attempt = 1;
    loop {
        let receipt = session
            .submit(body.clone(), max_fee, config.memo.clone())
            .await?;
        if !receipt.status.is_retriable() || attempt >= retry.max_attempts {
            return Ok(receipt);
        }
        warn!(@yellow,
            "{} returned {}, resubmitting in {:?} (attempt {}/{})",
            body.kind(),
            receipt.status,
            retry.backoff,
            attempt + 1,
            retry.max_attempts
        );
        tokio::time::sleep(retry.backoff).await;
        attempt += 1;
    }
}
