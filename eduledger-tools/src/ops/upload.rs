// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::Path;

use crate::{
    core::{
        artifact::Artifact,
        chunking::ChunkPlan,
        ledger::{FileId, LedgerClient},
        session::Session,
        upload::{upload_file, UploadConfig},
    },
    error::Error,
    ops::Step,
    Result,
};

/// Encodes an artifact's bytecode, plans its chunks, and uploads it as a new file.
pub async fn upload_artifact<C: LedgerClient>(
    session: &Session<C>,
    artifact: &Artifact,
    config: &UploadConfig,
) -> Result<FileId> {
    let name = artifact.contract_name();
    if artifact.size() as u64 > session.chain().max_code_size {
        warn!(@yellow,
            "{name} bytecode is {} bytes, above the {} byte contract size limit",
            artifact.size(),
            session.chain().max_code_size
        );
    }

    let payload = config.encoding.encode(artifact.bytecode());
    let plan = ChunkPlan::new(payload.len(), &config.chunks);
    plan.validate(session.chain())
        .map_err(|err| Error::pipeline(name, Step::Plan, err))?;
    debug!(@grey,
        "uploading {} ({} payload bytes, {} encoded) in {} chunks",
        name.lavender(),
        payload.len(),
        config.encoding,
        plan.len()
    );

    upload_file(session, &payload, &plan, config)
        .await
        .map_err(|err| Error::pipeline(name, Step::Upload, err))
}

/// Loads a contract artifact and uploads its bytecode, printing the new file id.
pub async fn upload<C: LedgerClient>(
    session: &Session<C>,
    base_dir: impl AsRef<Path>,
    contract: &str,
    config: &UploadConfig,
) -> Result<FileId> {
    config.chunks.validate(session.chain())?;
    let artifact = Artifact::load(base_dir, contract)
        .map_err(|err| Error::pipeline(contract, Step::LoadArtifact, err))?;
    let file_id = upload_artifact(session, &artifact, config).await?;
    mintln!("uploaded {contract} bytecode to file {file_id}");
    Ok(file_id)
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;
    use crate::{
        core::{
            chunking::{ChunkConfig, ChunkPolicy},
            ledger::TransactionBody,
            upload::PayloadEncoding,
        },
        utils::testing::{test_session, write_artifact, MockLedger},
    };

    #[tokio::test]
    async fn uploads_hex_encoded_bytecode() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "EduLedger", &[0x60, 0x80, 0x60, 0x40], "[]");
        let session = test_session(MockLedger::new());

        let file_id = upload(&session, dir.path(), "EduLedger", &UploadConfig::default())
            .await
            .unwrap();
        assert_eq!(
            session.client().file_contents(file_id).unwrap(),
            b"60806040".to_vec()
        );
    }

    #[tokio::test]
    async fn splits_encoded_payload() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "EduLedger", &[0xab; 100], "[]");
        let session = test_session(MockLedger::new());
        let config = UploadConfig {
            chunks: ChunkConfig::new(ChunkPolicy::FixedSize(NonZeroUsize::new(64).unwrap())),
            ..Default::default()
        };

        let file_id = upload(&session, dir.path(), "EduLedger", &config)
            .await
            .unwrap();
        // 100 bytes become 200 hex characters: 64 + 64 + 64 + 8
        let submitted = session.client().submitted();
        assert_eq!(submitted.len(), 4);
        assert!(matches!(submitted[0].body, TransactionBody::FileCreate { .. }));
        assert_eq!(
            session.client().file_contents(file_id).unwrap(),
            "ab".repeat(100).into_bytes()
        );
    }

    #[tokio::test]
    async fn raw_encoding_uploads_bytes() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "EduLedger", &[1, 2, 3], "[]");
        let session = test_session(MockLedger::new());
        let config = UploadConfig {
            encoding: PayloadEncoding::Raw,
            ..Default::default()
        };
        let file_id = upload(&session, dir.path(), "EduLedger", &config)
            .await
            .unwrap();
        assert_eq!(
            session.client().file_contents(file_id).unwrap(),
            vec![1, 2, 3]
        );
    }

    #[tokio::test]
    async fn missing_artifact_is_a_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        let session = test_session(MockLedger::new());
        let err = upload(&session, dir.path(), "EduLedger", &UploadConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Pipeline {
                step: Step::LoadArtifact,
                ..
            }
        ));
        assert!(session.client().submitted().is_empty());
    }

    #[tokio::test]
    async fn oversized_count_plan_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), "EduLedger", &[0; 6_000], "[]");
        let session = test_session(MockLedger::new());
        let config = UploadConfig {
            chunks: ChunkConfig::new(ChunkPolicy::FixedCount(NonZeroUsize::new(1).unwrap())),
            encoding: PayloadEncoding::Raw,
            ..Default::default()
        };
        let err = upload(&session, dir.path(), "EduLedger", &config)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Pipeline {
                step: Step::Plan,
                ..
            }
        ));
        assert!(err.is_config());
        assert!(session.client().submitted().is_empty());
    }
}
