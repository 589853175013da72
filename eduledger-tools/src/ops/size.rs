// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::Path;

use bytesize::ByteSize;

use crate::{
    core::{
        artifact::Artifact,
        chain::ChainConfig,
        chunking::ChunkPlan,
        upload::UploadConfig,
    },
    error::Error,
    ops::Step,
    utils::format_file_size,
    Result,
};

/// Bytecode sizes and the chunks an upload would use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSize {
    pub contract: String,
    pub bytecode_len: usize,
    pub payload_len: usize,
    pub chunk_lengths: Vec<usize>,
}

/// Prints the bytecode size and upload plan of each contract without touching the network.
pub fn size<S: AsRef<str>>(
    base_dir: impl AsRef<Path>,
    contracts: &[S],
    config: &UploadConfig,
    chain: &ChainConfig,
) -> Result<Vec<ArtifactSize>> {
    let base_dir = base_dir.as_ref();
    let mut sizes = Vec::with_capacity(contracts.len());
    for contract in contracts {
        let contract = contract.as_ref();
        let artifact = Artifact::load(base_dir, contract)
            .map_err(|err| Error::pipeline(contract, Step::LoadArtifact, err))?;
        let payload_len = config.encoding.encode(artifact.bytecode()).len();
        let plan = ChunkPlan::new(payload_len, &config.chunks);

        greyln!("{}", contract.lavender());
        greyln!(
            "bytecode size: {}",
            format_file_size(
                ByteSize::b(artifact.size() as u64),
                ByteSize::kib(16),
                ByteSize::b(chain.max_code_size)
            )
        );
        greyln!(
            "{} payload: {} bytes in {} chunks ({})",
            config.encoding,
            payload_len,
            plan.len(),
            config.chunks.policy
        );
        if let Err(err) = plan.validate(chain) {
            warn!(@yellow, "{err}");
        }

        sizes.push(ArtifactSize {
            contract: contract.to_owned(),
            bytecode_len: artifact.size(),
            payload_len,
            chunk_lengths: plan.chunk_lengths(),
        });
    }
    Ok(sizes)
}
