// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, num::NonZeroUsize, path::PathBuf, time::Duration};

use eduledger_tools::{
    core::{
        chain::{ChainConfig, DEFAULT_MAX_CHUNK_SIZE},
        chunking::{ChunkConfig, ChunkPolicy},
        deployment::{DeploymentConfig, DEFAULT_GAS},
        ledger::{AccountId, Hbar, HederaClient, NetworkClient, RelayClient},
        network::Network,
        operator::Operator,
        session::Session,
        upload::{PayloadEncoding, RetryPolicy, UploadConfig},
    },
    ConfigError,
};

use crate::constants::{
    ACCOUNT_ID_ENV, DEFAULT_MAX_FEE, MIRROR_URL_ENV, NETWORK_ENV, PRIVATE_KEY_ENV, RELAY_URL_ENV,
};

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// Operator account id, as shard.realm.num
    #[arg(long, env = ACCOUNT_ID_ENV)]
    account_id: Option<String>,
    /// Operator private key as raw or DER-encoded hex. Warning: this exposes your key to shell
    /// history
    #[arg(long, env = PRIVATE_KEY_ENV, hide_env_values = true)]
    private_key: Option<String>,
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Path to an encrypted JSON keystore holding the operator key
    #[arg(long)]
    keystore_path: Option<PathBuf>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
}

impl AuthArgs {
    pub fn operator(&self) -> eduledger_tools::Result<Operator> {
        let account_id = self
            .account_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(ConfigError::MissingAccountId)?
            .parse::<AccountId>()
            .map_err(ConfigError::from)?;

        if let Some(key) = &self.private_key {
            return Ok(Operator::from_private_key(account_id, key)?);
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file)?;
            return Ok(Operator::from_private_key(account_id, &key)?);
        }

        let keystore = self
            .keystore_path
            .as_ref()
            .ok_or(ConfigError::MissingPrivateKey)?;
        let password = self
            .keystore_password_path
            .as_ref()
            .map(fs::read_to_string)
            .unwrap_or(Ok("".into()))?;
        Ok(Operator::from_keystore(
            account_id,
            keystore,
            password.trim_end(),
        )?)
    }
}

#[derive(Debug, clap::Args)]
pub struct NetworkArgs {
    /// Network to use: mainnet, testnet, previewnet or local
    #[arg(long, env = NETWORK_ENV)]
    network: Option<Network>,
    /// Send transactions to this JSON relay instead of the network's consensus nodes
    #[arg(long, env = RELAY_URL_ENV)]
    relay_url: Option<String>,
    /// Mirror node endpoint for balances when using a relay (defaults to the network's public
    /// mirror node)
    #[arg(long, env = MIRROR_URL_ENV)]
    mirror_url: Option<String>,
    /// Timeout for each request to the relay or mirror node
    #[arg(long, value_parser = humantime::parse_duration, default_value = "30s")]
    request_timeout: Duration,
    /// Largest chunk the network accepts in one file transaction, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_CHUNK_SIZE)]
    max_chunk_size: usize,
}

impl NetworkArgs {
    pub fn build_session(
        &self,
        auth: &AuthArgs,
    ) -> eduledger_tools::Result<Session<NetworkClient>> {
        let operator = auth.operator()?;
        let network = self.network.ok_or(ConfigError::MissingNetwork)?;
        let client = match &self.relay_url {
            Some(relay_url) => {
                let mirror_url = self
                    .mirror_url
                    .clone()
                    .unwrap_or_else(|| network.mirror_url().to_owned());
                log::debug!("using {network} via relay {relay_url} and mirror {mirror_url}");
                let relay = RelayClient::builder()
                    .relay_url(relay_url.clone())
                    .mirror_url(mirror_url)
                    .operator(operator.clone())
                    .timeout(self.request_timeout)
                    .build();
                NetworkClient::Relay(relay)
            }
            None => {
                log::debug!("using {network} consensus nodes");
                NetworkClient::Hedera(HederaClient::new(network, &operator)?)
            }
        };
        Ok(Session::new(client, operator).with_chain_config(self.chain_config()))
    }

    pub fn chain_config(&self) -> ChainConfig {
        chain_config(self.max_chunk_size)
    }
}

pub fn chain_config(max_chunk_size: usize) -> ChainConfig {
    ChainConfig {
        max_chunk_size,
        ..Default::default()
    }
}

#[derive(Debug, clap::Args)]
pub struct ArtifactArgs {
    /// Project directory containing artifacts/contracts/
    #[arg(long, default_value = ".")]
    pub base_dir: PathBuf,
}

#[derive(Debug, clap::Args)]
pub struct UploadArgs {
    /// How to split bytecode: size:<bytes>, count:<n> or <bytes>. Sizes apply to the encoded
    /// payload: hex encoding doubles the bytecode length, so chunk sizes sum to twice the raw size
    #[arg(long, default_value_t = ChunkPolicy::default())]
    chunk_policy: ChunkPolicy,
    /// Size of the first chunk, sent with the file create
    #[arg(long)]
    first_chunk_size: Option<NonZeroUsize>,
    /// Encoding of the uploaded bytecode: hex or raw
    #[arg(long, default_value_t = PayloadEncoding::Hex)]
    encoding: PayloadEncoding,
    /// Max fee for the file create, in HBAR
    #[arg(long, default_value = DEFAULT_MAX_FEE)]
    create_max_fee: Hbar,
    /// Max fee for each file append, in HBAR
    #[arg(long, default_value = DEFAULT_MAX_FEE)]
    append_max_fee: Hbar,
    /// Submissions per file transaction while the network reports it unprocessed
    #[arg(long, default_value_t = 1)]
    retry_attempts: u32,
    /// Wait between resubmissions
    #[arg(long, value_parser = humantime::parse_duration, default_value = "2s")]
    retry_backoff: Duration,
    /// Memo attached to file transactions
    #[arg(long)]
    file_memo: Option<String>,
}

impl UploadArgs {
    pub fn config(&self) -> Result<UploadConfig, ConfigError> {
        Ok(UploadConfig {
            chunks: ChunkConfig {
                policy: self.chunk_policy,
                first_chunk_size: self.first_chunk_size,
            },
            encoding: self.encoding,
            create_max_fee: self.create_max_fee,
            append_max_fee: self.append_max_fee,
            retry: RetryPolicy::new(self.retry_attempts, self.retry_backoff)?,
            memo: self.file_memo.clone(),
        })
    }
}

#[derive(Debug, clap::Args)]
pub struct DeployArgs {
    /// Gas limit for contract creation
    #[arg(long, default_value_t = DEFAULT_GAS)]
    gas: u64,
    /// Max fee for contract creation, in HBAR
    #[arg(long, default_value = DEFAULT_MAX_FEE)]
    contract_max_fee: Hbar,
    /// Memo attached to contract create transactions
    #[arg(long)]
    contract_memo: Option<String>,
}

impl DeployArgs {
    pub fn config(&self) -> DeploymentConfig {
        DeploymentConfig {
            gas: self.gas,
            max_fee: self.contract_max_fee,
            memo: self.contract_memo.clone(),
        }
    }
}
