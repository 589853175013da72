// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// Maximum runtime code size per EIP-170
pub const DEFAULT_MAX_CODE_SIZE: u64 = 24_576;

/// Largest file payload accepted in one transaction, leaving room for the signed envelope inside
/// the 6 KiB transaction size limit.
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 5_120;

#[derive(Debug, Clone)]
pub struct ChainConfig {
    pub max_code_size: u64,
    pub max_chunk_size: usize,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            max_code_size: DEFAULT_MAX_CODE_SIZE,
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
        }
    }
}
