// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;

pub use balance::balance;
pub use create::{constructor_parameters, create};
pub use deploy::{
    deploy_artifact, deploy_linked, DeployedContract, DeploymentReport, DriverConfig,
    DEFAULT_MIN_BALANCE, LINKED_CONTRACT, PRIMARY_CONTRACT,
};
pub use size::{size, ArtifactSize};
pub use upload::{upload, upload_artifact};

mod balance;
mod create;
mod deploy;
mod size;
mod upload;

/// Pipeline step a contract was in when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    LoadArtifact,
    Plan,
    Upload,
    Deploy,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoadArtifact => f.write_str("artifact load"),
            Self::Plan => f.write_str("chunk planning"),
            Self::Upload => f.write_str("file upload"),
            Self::Deploy => f.write_str("contract create"),
        }
    }
}
