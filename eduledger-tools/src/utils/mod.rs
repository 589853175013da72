// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use bytesize::ByteSize;
use color::{Color, GREY, MINT, PINK, YELLOW};

use crate::core::ledger::Hbar;

pub mod color;

#[cfg(test)]
pub(crate) mod testing;

/// Pretty-prints a balance relative to the minimum a deployment needs.
pub fn format_balance(balance: Hbar, minimum: Hbar) -> String {
    let text = balance.to_string();
    if balance <= minimum {
        text.red()
    } else if balance.tinybars() <= minimum.tinybars().saturating_mul(10) {
        text.yellow()
    } else {
        text.mint()
    }
}

/// Pretty-prints a file size based on its limits.
pub fn format_file_size(len: ByteSize, mid: ByteSize, max: ByteSize) -> String {
    let color = if len <= mid {
        MINT
    } else if len <= max {
        YELLOW
    } else {
        PINK
    };

    format!("{color}{len}{GREY} ({} bytes)", len.as_u64())
}
