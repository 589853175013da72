// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

use eduledger_tools::{core::artifact::ArtifactError, ConfigError};

pub type DeployCliResult = Result<(), DeployCliError>;

/// Exit code for missing or invalid configuration.
const CONFIG_EXIT_CODE: u8 = 2;

#[derive(Debug)]
pub struct DeployCliError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl DeployCliError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for DeployCliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for DeployCliError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for DeployCliError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eduledger_tools::Error> for DeployCliError {
    fn from(err: eduledger_tools::Error) -> Self {
        let exit_code = if err.is_config() {
            ExitCode::from(CONFIG_EXIT_CODE)
        } else {
            ExitCode::FAILURE
        };
        Self {
            error: err.into(),
            exit_code,
        }
    }
}

impl From<ConfigError> for DeployCliError {
    fn from(err: ConfigError) -> Self {
        eduledger_tools::Error::from(err).into()
    }
}

impl From<ArtifactError> for DeployCliError {
    fn from(err: ArtifactError) -> Self {
        eduledger_tools::Error::from(err).into()
    }
}
