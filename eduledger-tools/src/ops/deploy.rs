// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Two-contract deployment.
//!
//! The certificate NFT contract is uploaded and created first. The ledger contract follows, with
//! the NFT contract's EVM address as its only constructor argument.

use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::{
    core::{
        artifact::Artifact,
        deployment::{deploy_contract, ConstructorParameters, ContractHandle, DeploymentConfig},
        ledger::{FileId, Hbar, LedgerClient},
        session::Session,
        upload::UploadConfig,
    },
    error::Error,
    ops::{upload_artifact, Step},
    utils::color::DebugColor,
    Result,
};

pub const PRIMARY_CONTRACT: &str = "EduCertificateNFT";
pub const LINKED_CONTRACT: &str = "EduLedger";

/// The operator balance must be strictly above this before anything is submitted.
pub const DEFAULT_MIN_BALANCE: Hbar = Hbar::from_hbar(1);

#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Project directory holding `artifacts/contracts/`
    pub base_dir: PathBuf,
    /// Contract deployed first, with no constructor arguments
    pub primary: String,
    /// Contract deployed second, given the primary's address
    pub linked: String,
    pub min_balance: Hbar,
    pub upload: UploadConfig,
    pub deployment: DeploymentConfig,
    /// File receiving one JSON line per contract as soon as it is created.
    pub record: Option<PathBuf>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            primary: PRIMARY_CONTRACT.to_owned(),
            linked: LINKED_CONTRACT.to_owned(),
            min_balance: DEFAULT_MIN_BALANCE,
            upload: UploadConfig::default(),
            deployment: DeploymentConfig::default(),
            record: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployedContract {
    pub name: String,
    pub file_id: FileId,
    #[serde(flatten)]
    pub handle: ContractHandle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentReport {
    pub primary: DeployedContract,
    pub linked: DeployedContract,
}

impl DeploymentReport {
    pub fn print(&self) {
        for contract in [&self.primary, &self.linked] {
            mintln!("{} deployed", contract.name);
            greyln!(
                "contract id: {}",
                contract.handle.contract_id.to_string().lavender()
            );
            greyln!(
                "evm address: {}",
                contract.handle.evm_address.debug_lavender()
            );
            greyln!("bytecode file: {}", contract.file_id);
        }
    }
}

/// Deploys the primary contract, then the linked contract pointing at it.
///
/// Nothing is read or submitted unless the chunk settings are valid and the operator balance
/// exceeds [`DriverConfig::min_balance`]. A failure after the primary contract exists is reported
/// as [`Error::PartialDeployment`], since that contract stays on the ledger.
pub async fn deploy_linked<C: LedgerClient>(
    session: &Session<C>,
    config: &DriverConfig,
) -> Result<DeploymentReport> {
    config.upload.chunks.validate(session.chain())?;
    let balance = session.check_balance(config.min_balance).await?;
    info!(@grey, "operator {} balance: {}", session.operator().account_id(), balance);

    let no_args = ConstructorParameters::new();
    let primary = deploy_artifact(session, &config.primary, &no_args, config).await?;
    record(config.record.as_deref(), &primary);

    let params = ConstructorParameters::new().add_address(primary.handle.evm_address);
    let linked = match deploy_artifact(session, &config.linked, &params, config).await {
        Ok(linked) => linked,
        Err(source) => {
            return Err(Error::PartialDeployment {
                deployed_name: primary.name,
                deployed: Box::new(primary.handle),
                source: Box::new(source),
            });
        }
    };
    record(config.record.as_deref(), &linked);

    Ok(DeploymentReport { primary, linked })
}

/// Loads, uploads and creates one contract.
pub async fn deploy_artifact<C: LedgerClient>(
    session: &Session<C>,
    name: &str,
    params: &ConstructorParameters,
    config: &DriverConfig,
) -> Result<DeployedContract> {
    let artifact = Artifact::load(&config.base_dir, name)
        .map_err(|err| Error::pipeline(name, Step::LoadArtifact, err))?;
    // checked before uploading so a bad argument list leaves no orphaned file behind
    params
        .check(artifact.constructor())
        .map_err(|err| Error::pipeline(name, Step::Deploy, err))?;

    let file_id = upload_artifact(session, &artifact, &config.upload).await?;
    let handle = deploy_contract(session, file_id, params, &config.deployment)
        .await
        .map_err(|err| Error::pipeline(name, Step::Deploy, err))?;

    Ok(DeployedContract {
        name: name.to_owned(),
        file_id,
        handle,
    })
}

fn record(path: Option<&Path>, contract: &DeployedContract) {
    let Some(path) = path else {
        return;
    };
    if let Err(err) = append_record(path, contract) {
        warn!(@yellow, "could not record {} in {}: {err}", contract.name, path.display());
    }
}

fn append_record(path: &Path, contract: &DeployedContract) -> Result<()> {
    let mut line = serde_json::to_vec(contract)?;
    line.push(b'\n');
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(&line)?;
    debug!(@grey, "recorded {} in {}", contract.name, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{fs, num::NonZeroUsize};

    use super::*;
    use crate::{
        core::{
            chunking::{ChunkConfig, ChunkPolicy},
            deployment::DeploymentError,
            ledger::{Status, TransactionBody},
            session::PreconditionError,
            upload::PayloadEncoding,
        },
        utils::testing::{test_session, write_artifact, MockLedger},
    };

    const LEDGER_ABI: &str = r#"[{
        "type": "constructor",
        "stateMutability": "nonpayable",
        "inputs": [{"name": "nft", "type": "address", "internalType": "address"}]
    }]"#;

    fn project(primary_len: usize, linked_len: usize) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let primary: Vec<u8> = (0..primary_len).map(|i| (i % 253) as u8).collect();
        write_artifact(dir.path(), PRIMARY_CONTRACT, &primary, "[]");
        let linked = vec![0x60; linked_len];
        write_artifact(dir.path(), LINKED_CONTRACT, &linked, LEDGER_ABI);
        dir
    }

    fn config(base_dir: &Path, chunk_size: usize) -> DriverConfig {
        DriverConfig {
            base_dir: base_dir.to_owned(),
            upload: UploadConfig {
                chunks: ChunkConfig::new(ChunkPolicy::FixedSize(
                    NonZeroUsize::new(chunk_size).unwrap(),
                )),
                encoding: PayloadEncoding::Raw,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn kinds(session: &Session<MockLedger>) -> Vec<&'static str> {
        session
            .client()
            .submitted()
            .iter()
            .map(|tx| tx.body.kind())
            .collect()
    }

    #[tokio::test]
    async fn deploys_both_contracts_in_order() {
        let dir = project(10_000, 500);
        let session = test_session(MockLedger::new());

        let report = deploy_linked(&session, &config(dir.path(), 3_000))
            .await
            .unwrap();

        assert_eq!(
            kinds(&session),
            vec![
                "file create",
                "file append",
                "file append",
                "file append",
                "contract create",
                "file create",
                "contract create",
            ]
        );
        let submitted = session.client().submitted();
        let append_lengths: Vec<usize> = submitted[..5]
            .iter()
            .filter_map(|tx| match &tx.body {
                TransactionBody::FileCreate { contents, .. }
                | TransactionBody::FileAppend { contents, .. } => Some(contents.len()),
                _ => None,
            })
            .collect();
        assert_eq!(append_lengths, vec![3_000, 3_000, 3_000, 1_000]);

        match &submitted[4].body {
            TransactionBody::ContractCreate {
                bytecode_file_id,
                constructor_parameters,
                ..
            } => {
                assert_eq!(*bytecode_file_id, report.primary.file_id);
                assert!(constructor_parameters.is_empty());
            }
            body => panic!("expected contract create, got {body:?}"),
        }

        let expected = ConstructorParameters::new()
            .add_address(report.primary.handle.evm_address)
            .encode();
        match &submitted[6].body {
            TransactionBody::ContractCreate {
                bytecode_file_id,
                constructor_parameters,
                ..
            } => {
                assert_eq!(*bytecode_file_id, report.linked.file_id);
                assert_eq!(constructor_parameters, &expected);
            }
            body => panic!("expected contract create, got {body:?}"),
        }
        assert_eq!(report.primary.name, PRIMARY_CONTRACT);
        assert_eq!(report.linked.name, LINKED_CONTRACT);
        let contracts = session.client().contracts();
        assert_eq!(
            contracts,
            vec![
                (report.primary.handle.contract_id, report.primary.file_id),
                (report.linked.handle.contract_id, report.linked.file_id),
            ]
        );
        assert_ne!(report.primary.file_id, report.linked.file_id);
    }

    #[tokio::test]
    async fn low_balance_aborts_before_loading() {
        // no artifacts on disk: a load attempt would fail with a different error
        let dir = tempfile::tempdir().unwrap();
        let ledger = MockLedger::new().with_balance(Hbar::from_tinybars(99_999_999));
        let session = test_session(ledger);

        let err = deploy_linked(&session, &config(dir.path(), 3_000))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Precondition(PreconditionError::InsufficientBalance { .. })
        ));
        assert!(session.client().submitted().is_empty());
    }

    #[tokio::test]
    async fn invalid_chunk_size_is_a_config_error() {
        let dir = project(100, 100);
        let session = test_session(MockLedger::new());

        let err = deploy_linked(&session, &config(dir.path(), 6_000))
            .await
            .unwrap_err();
        assert!(err.is_config());
        assert_eq!(session.client().balance_queries(), 0);
    }

    #[tokio::test]
    async fn missing_primary_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let session = test_session(MockLedger::new());

        let err = deploy_linked(&session, &config(dir.path(), 3_000))
            .await
            .unwrap_err();
        match err {
            Error::Pipeline { contract, step, .. } => {
                assert_eq!(contract, PRIMARY_CONTRACT);
                assert_eq!(step, Step::LoadArtifact);
            }
            err => panic!("unexpected error: {err}"),
        }
        assert!(session.client().submitted().is_empty());
    }

    #[tokio::test]
    async fn failed_second_deploy_reports_first_contract() {
        let dir = project(1_000, 1_000);
        let ledger = MockLedger::new().fail_contract(1, Status::ContractRevertExecuted);
        let session = test_session(ledger);

        let err = deploy_linked(&session, &config(dir.path(), 3_000))
            .await
            .unwrap_err();
        let (deployed_name, deployed, source) = match err {
            Error::PartialDeployment {
                deployed_name,
                deployed,
                source,
            } => (deployed_name, deployed, source),
            err => panic!("expected a partial deployment, got {err}"),
        };
        assert_eq!(deployed_name, PRIMARY_CONTRACT);
        assert_eq!(session.client().contracts()[0].0, deployed.contract_id);
        assert!(matches!(
            *source,
            Error::Pipeline {
                step: Step::Deploy,
                ref source,
                ..
            } if matches!(**source, Error::Deploy(DeploymentError::Rejected { .. }))
        ));
    }

    #[tokio::test]
    async fn partial_deployment_is_never_a_config_error() {
        // a single chunk fits the primary contract but not the linked one
        let dir = project(100, 6_000);
        let session = test_session(MockLedger::new());
        let mut config = config(dir.path(), 3_000);
        config.upload.chunks = ChunkConfig::new(ChunkPolicy::FixedCount(NonZeroUsize::MIN));

        let err = deploy_linked(&session, &config).await.unwrap_err();
        match &err {
            Error::PartialDeployment { source, .. } => assert!(source.is_config()),
            err => panic!("expected a partial deployment, got {err}"),
        }
        assert!(!err.is_config());
        assert_eq!(session.client().contracts().len(), 1);
    }

    #[tokio::test]
    async fn constructor_mismatch_uploads_nothing() {
        let dir = project(100, 100);
        let abi = r#"[{
            "type": "constructor",
            "stateMutability": "nonpayable",
            "inputs": [
                {"name": "nft", "type": "address", "internalType": "address"},
                {"name": "limit", "type": "uint256", "internalType": "uint256"}
            ]
        }]"#;
        write_artifact(dir.path(), LINKED_CONTRACT, &[0x60; 100], abi);
        let session = test_session(MockLedger::new());

        let err = deploy_linked(&session, &config(dir.path(), 3_000))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::PartialDeployment { .. }));
        // only the primary contract's upload and create went out
        assert_eq!(kinds(&session), vec!["file create", "contract create"]);
    }

    #[tokio::test]
    async fn records_each_deployment() {
        let dir = project(100, 100);
        let record_path = dir.path().join("deployments.jsonl");
        let session = test_session(MockLedger::new());
        let config = DriverConfig {
            record: Some(record_path.clone()),
            ..config(dir.path(), 3_000)
        };

        let report = deploy_linked(&session, &config).await.unwrap();

        let text = fs::read_to_string(&record_path).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["name"], PRIMARY_CONTRACT);
        assert_eq!(
            lines[1]["contractId"],
            report.linked.handle.contract_id.to_string()
        );
        assert_eq!(lines[1]["fileId"], report.linked.file_id.to_string());
    }
}
