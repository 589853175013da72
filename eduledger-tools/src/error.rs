// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{
    core::{
        artifact::ArtifactError, deployment::DeploymentError, deployment::ContractHandle,
        ledger::RemoteError, session::PreconditionError, upload::UploadError,
    },
    ops::Step,
    utils::color::Color,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Precondition(#[from] PreconditionError),
    #[error("{0}")]
    Artifact(#[from] ArtifactError),
    #[error("{0}")]
    Upload(#[from] UploadError),
    #[error("{0}")]
    Deploy(#[from] DeploymentError),
    #[error("{0}")]
    Remote(#[from] RemoteError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{step} failed for {}: {source}", .contract.lavender())]
    Pipeline {
        contract: String,
        step: Step,
        #[source]
        source: Box<Error>,
    },
    #[error(
        "{source}\n\
         contract {} is already deployed as {} ({}) and must be cleaned up manually",
        .deployed_name.lavender(),
        .deployed.contract_id.to_string().yellow(),
        .deployed.evm_address,
    )]
    PartialDeployment {
        deployed_name: String,
        deployed: Box<ContractHandle>,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn pipeline(contract: &str, step: Step, source: impl Into<Error>) -> Self {
        Self::Pipeline {
            contract: contract.to_owned(),
            step,
            source: Box::new(source.into()),
        }
    }

    /// Whether the error comes from missing or invalid configuration rather than a failed step.
    ///
    /// A partial deployment never counts as a configuration error, whatever stopped it: a
    /// contract is already live.
    pub fn is_config(&self) -> bool {
        match self {
            Self::Config(_) => true,
            Self::Pipeline { source, .. } => source.is_config(),
            _ => false,
        }
    }
}

/// Missing or invalid operator credentials, network selection or tool settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing operator account id (set HEDERA_ACCOUNT_ID or --account-id)")]
    MissingAccountId,
    #[error("missing operator private key (set HEDERA_PRIVATE_KEY, --private-key, --private-key-path or --keystore-path)")]
    MissingPrivateKey,
    #[error("invalid operator private key")]
    InvalidPrivateKey,
    #[error("could not decrypt keystore: {0}")]
    Keystore(String),
    #[error("{0}")]
    EntityId(#[from] crate::core::ledger::InvalidEntityId),
    #[error("{0}")]
    Hbar(#[from] crate::core::ledger::InvalidHbar),
    #[error("no network selected (set HEDERA_NETWORK or --network)")]
    MissingNetwork,
    #[error("unknown network {0:?}, expected mainnet, testnet, previewnet or local")]
    UnknownNetwork(String),
    #[error("invalid chunk policy {0:?}, expected size:<bytes>, count:<n> or <bytes>")]
    InvalidChunkPolicy(String),
    #[error("chunk size {size} exceeds the network's {max} byte payload limit")]
    ChunkTooLarge { size: usize, max: usize },
    #[error("invalid payload encoding {0:?}, expected hex or raw")]
    InvalidEncoding(String),
    #[error("retry attempts must be at least 1")]
    InvalidRetryAttempts,
}
