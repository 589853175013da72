// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Splitting an upload payload into ordered chunks.

use std::{fmt, num::NonZeroUsize, ops::Range, str::FromStr};

use crate::{core::chain::ChainConfig, error::ConfigError};

/// Default chunk size, matching the file service's usual append size.
pub const DEFAULT_CHUNK_SIZE: NonZeroUsize = match NonZeroUsize::new(4_096) {
    Some(size) => size,
    None => unreachable!(),
};

/// How to divide a payload into chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkPolicy {
    /// Split into at most this many chunks of `ceil(len / n)` bytes.
    FixedCount(NonZeroUsize),
    /// Split into chunks of exactly this many bytes, except the last.
    FixedSize(NonZeroUsize),
}

impl ChunkPolicy {
    /// Chunk size this policy yields for a payload of `len` bytes.
    pub fn chunk_size(&self, len: usize) -> usize {
        match self {
            Self::FixedCount(count) => len.div_ceil(count.get()).max(1),
            Self::FixedSize(size) => size.get(),
        }
    }
}

impl Default for ChunkPolicy {
    fn default() -> Self {
        Self::FixedSize(DEFAULT_CHUNK_SIZE)
    }
}

impl fmt::Display for ChunkPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedCount(count) => write!(f, "count:{count}"),
            Self::FixedSize(size) => write!(f, "size:{size}"),
        }
    }
}

/// Parses `size:<bytes>`, `count:<n>`, or a bare number of bytes.
impl FromStr for ChunkPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidChunkPolicy(s.to_owned());
        let text = s.trim();
        let (kind, value) = text.split_once(':').unwrap_or(("size", text));
        let value: NonZeroUsize = value.trim().parse().map_err(|_| invalid())?;
        match kind.trim() {
            "size" => Ok(Self::FixedSize(value)),
            "count" => Ok(Self::FixedCount(value)),
            _ => Err(invalid()),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChunkConfig {
    pub policy: ChunkPolicy,
    /// Size of the first chunk, which doubles as the file-create payload. Defaults to the
    /// policy's chunk size.
    pub first_chunk_size: Option<NonZeroUsize>,
}

impl ChunkConfig {
    pub fn new(policy: ChunkPolicy) -> Self {
        Self {
            policy,
            first_chunk_size: None,
        }
    }

    /// Rejects fixed chunk sizes the network cannot accept in one transaction.
    ///
    /// Count-based plans depend on the payload, so they are checked by [`ChunkPlan::validate`].
    pub fn validate(&self, chain: &ChainConfig) -> Result<(), ConfigError> {
        let sizes = [
            match self.policy {
                ChunkPolicy::FixedSize(size) => Some(size.get()),
                ChunkPolicy::FixedCount(_) => None,
            },
            self.first_chunk_size.map(NonZeroUsize::get),
        ];
        for size in sizes.into_iter().flatten() {
            if size > chain.max_chunk_size {
                return Err(ConfigError::ChunkTooLarge {
                    size,
                    max: chain.max_chunk_size,
                });
            }
        }
        Ok(())
    }
}

/// Ordered, contiguous byte ranges covering a payload exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkPlan {
    ranges: Vec<Range<usize>>,
}

impl ChunkPlan {
    /// Plans chunks for a payload of `len` bytes.
    ///
    /// A payload no larger than one chunk yields a single chunk; an empty payload yields a single
    /// empty chunk, since the file still has to be created.
    pub fn new(len: usize, config: &ChunkConfig) -> Self {
        let chunk_size = config.policy.chunk_size(len);
        let first_size = config
            .first_chunk_size
            .map_or(chunk_size, NonZeroUsize::get)
            .min(len);

        let mut ranges = vec![0..first_size];
        let mut start = first_size;
        while start < len {
            let end = start.saturating_add(chunk_size).min(len);
            ranges.push(start..end);
            start = end;
        }
        Self { ranges }
    }

    /// Rejects plans containing a chunk larger than the network accepts.
    pub fn validate(&self, chain: &ChainConfig) -> Result<(), ConfigError> {
        match self.ranges.iter().map(|range| range.len()).max() {
            Some(size) if size > chain.max_chunk_size => Err(ConfigError::ChunkTooLarge {
                size,
                max: chain.max_chunk_size,
            }),
            _ => Ok(()),
        }
    }

    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    /// Number of chunks
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Total number of bytes covered
    pub fn total_len(&self) -> usize {
        self.ranges.last().map_or(0, |range| range.end)
    }

    /// Chunk lengths in order
    pub fn chunk_lengths(&self) -> Vec<usize> {
        self.ranges.iter().map(|range| range.len()).collect()
    }

    /// Slices of `payload`, in upload order
    pub fn chunks<'a>(&'a self, payload: &'a [u8]) -> impl Iterator<Item = &'a [u8]> + 'a {
        self.ranges.iter().map(move |range| &payload[range.clone()])
    }
}
