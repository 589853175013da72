// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.
//!
//! The canonical format is the Hardhat artifact written to
//! `<base>/artifacts/contracts/<Name>.sol/<Name>.json`. The creation bytecode in `bytecode` is
//! what gets uploaded; `deployedBytecode` is only accepted as a fallback.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use alloy::{
    json_abi::{Constructor, JsonAbi},
    primitives::Bytes,
};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact not found at {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("could not read artifact {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("artifact for {contract} is not valid JSON: {source}")]
    Parse {
        contract: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("artifact for {contract} has neither bytecode nor deployedBytecode")]
    MissingField { contract: String },
    #[error("bytecode of {contract} is not valid hex: {source}")]
    InvalidHex {
        contract: String,
        #[source]
        source: hex::FromHexError,
    },
    #[error("bytecode of {contract} contains unlinked library placeholders")]
    UnlinkedLibrary { contract: String },
}

/// Deterministic location of a contract's artifact under a project directory.
pub fn artifact_path(base: impl AsRef<Path>, contract_name: &str) -> PathBuf {
    base.as_ref()
        .join("artifacts")
        .join("contracts")
        .join(format!("{contract_name}.sol"))
        .join(format!("{contract_name}.json"))
}

/// Compiled contract: raw bytecode plus optional ABI.
#[derive(Debug, Clone)]
pub struct Artifact {
    contract_name: String,
    bytecode: Bytes,
    abi: Option<JsonAbi>,
}

impl Artifact {
    pub fn new(contract_name: impl Into<String>, bytecode: Bytes, abi: Option<JsonAbi>) -> Self {
        Self {
            contract_name: contract_name.into(),
            bytecode,
            abi,
        }
    }

    /// Reads the artifact for `contract_name` from its standard path under `base`.
    pub fn load(base: impl AsRef<Path>, contract_name: &str) -> Result<Self, ArtifactError> {
        let path = artifact_path(base, contract_name);
        if !path.exists() {
            return Err(ArtifactError::NotFound { path });
        }
        debug!(@grey, "reading artifact at {}", path.to_string_lossy().lavender());
        let json = fs::read_to_string(&path).map_err(|source| ArtifactError::Read {
            path: path.clone(),
            source,
        })?;
        Self::from_json(contract_name, &json)
    }

    pub fn from_json(contract_name: &str, json: &str) -> Result<Self, ArtifactError> {
        let raw: RawArtifact =
            serde_json::from_str(json).map_err(|source| ArtifactError::Parse {
                contract: contract_name.to_owned(),
                source,
            })?;
        if let Some(name) = raw.contract_name.as_deref() {
            if name != contract_name {
                warn!(@yellow, "artifact for {contract_name} declares contract name {name}");
            }
        }

        let bytecode = match decode_bytecode(contract_name, raw.bytecode.as_ref())? {
            Some(bytecode) => bytecode,
            None => {
                let bytecode = decode_bytecode(contract_name, raw.deployed_bytecode.as_ref())?
                    .ok_or_else(|| ArtifactError::MissingField {
                        contract: contract_name.to_owned(),
                    })?;
                warn!(@yellow, "{contract_name} has no creation bytecode, using deployedBytecode");
                bytecode
            }
        };

        Ok(Self::new(contract_name, bytecode, raw.abi))
    }

    pub fn contract_name(&self) -> &str {
        &self.contract_name
    }

    pub fn bytecode(&self) -> &Bytes {
        &self.bytecode
    }

    pub fn abi(&self) -> Option<&JsonAbi> {
        self.abi.as_ref()
    }

    pub fn constructor(&self) -> Option<&Constructor> {
        self.abi.as_ref().and_then(|abi| abi.constructor.as_ref())
    }

    /// Bytecode length in bytes
    pub fn size(&self) -> usize {
        self.bytecode.len()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    #[serde(default)]
    contract_name: Option<String>,
    #[serde(default)]
    abi: Option<JsonAbi>,
    #[serde(default)]
    bytecode: Option<BytecodeField>,
    #[serde(default)]
    deployed_bytecode: Option<BytecodeField>,
}

/// Hardhat stores bytecode as a hex string, Foundry as `{ "object": "0x..." }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BytecodeField {
    Hex(String),
    Object { object: String },
}

impl BytecodeField {
    fn as_str(&self) -> &str {
        match self {
            Self::Hex(hex) | Self::Object { object: hex } => hex,
        }
    }
}

/// Decodes a hex bytecode field, treating an absent or empty (`0x`) field as missing.
fn decode_bytecode(
    contract: &str,
    field: Option<&BytecodeField>,
) -> Result<Option<Bytes>, ArtifactError> {
    let Some(field) = field else {
        return Ok(None);
    };
    let text = field.as_str().trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    if text.is_empty() {
        return Ok(None);
    }
    if text.contains("__") {
        return Err(ArtifactError::UnlinkedLibrary {
            contract: contract.to_owned(),
        });
    }
    hex::decode(text)
        .map(|bytes| Some(bytes.into()))
        .map_err(|source| ArtifactError::InvalidHex {
            contract: contract.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_hex_prefix() {
        let artifact = Artifact::from_json("Token", r#"{"bytecode": "0x1234"}"#).unwrap();
        assert_eq!(artifact.bytecode().as_ref(), &[0x12, 0x34]);
        assert_eq!(artifact.size(), 2);
        assert!(artifact.abi().is_none());
    }

    #[test]
    fn missing_bytecode_fields() {
        let err = Artifact::from_json("Token", r#"{"contractName": "Token", "abi": []}"#)
            .unwrap_err();
        assert!(matches!(err, ArtifactError::MissingField { contract } if contract == "Token"));

        let err = Artifact::from_json("Token", r#"{"bytecode": "0x", "deployedBytecode": "0x"}"#)
            .unwrap_err();
        assert!(matches!(err, ArtifactError::MissingField { .. }));
    }

    #[test]
    fn falls_back_to_deployed_bytecode() {
        let artifact =
            Artifact::from_json("Token", r#"{"bytecode": "0x", "deployedBytecode": "6080"}"#)
                .unwrap();
        assert_eq!(artifact.bytecode().as_ref(), &[0x60, 0x80]);
    }

    #[test]
    fn accepts_object_bytecode() {
        let artifact =
            Artifact::from_json("Token", r#"{"bytecode": {"object": "0xfeed"}}"#).unwrap();
        assert_eq!(artifact.bytecode().as_ref(), &[0xfe, 0xed]);
    }

    #[test]
    fn rejects_invalid_content() {
        assert!(matches!(
            Artifact::from_json("Token", "not json"),
            Err(ArtifactError::Parse { .. })
        ));
        assert!(matches!(
            Artifact::from_json("Token", r#"{"bytecode": "0x12g4"}"#),
            Err(ArtifactError::InvalidHex { .. })
        ));
        assert!(matches!(
            Artifact::from_json(
                "Token",
                r#"{"bytecode": "0x73__$ab12cd34ef56ab12cd34ef56ab12cd34ef$__6080"}"#
            ),
            Err(ArtifactError::UnlinkedLibrary { .. })
        ));
    }

    #[test]
    fn reads_constructor_from_abi() {
        let artifact = Artifact::from_json(
            "EduLedger",
            r#"{
                "contractName": "EduLedger",
                "abi": [{
                    "type": "constructor",
                    "stateMutability": "nonpayable",
                    "inputs": [{"name": "nft", "type": "address", "internalType": "address"}]
                }],
                "bytecode": "0x6080"
            }"#,
        )
        .unwrap();
        let constructor = artifact.constructor().unwrap();
        assert_eq!(constructor.inputs.len(), 1);
        assert_eq!(constructor.inputs[0].ty, "address");
    }

    #[test]
    fn load_from_project_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = Artifact::load(dir.path(), "EduLedger").unwrap_err();
        assert!(matches!(err, ArtifactError::NotFound { .. }));

        let path = artifact_path(dir.path(), "EduLedger");
        assert!(path.ends_with("artifacts/contracts/EduLedger.sol/EduLedger.json"));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"bytecode": "0x00ff"}"#).unwrap();
        let artifact = Artifact::load(dir.path(), "EduLedger").unwrap();
        assert_eq!(artifact.contract_name(), "EduLedger");
        assert_eq!(artifact.bytecode().as_ref(), &[0x00, 0xff]);
    }
}
