// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub mod artifact;
pub mod chain;
pub mod chunking;
pub mod deployment;
pub mod ledger;
pub mod network;
pub mod operator;
pub mod session;
pub mod upload;
