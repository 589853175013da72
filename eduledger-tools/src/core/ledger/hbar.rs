// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub const TINYBARS_PER_HBAR: u64 = 100_000_000;

/// Number of decimal places in an HBAR amount.
const DECIMALS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid HBAR amount {0:?}")]
pub struct InvalidHbar(pub String);

/// Amount of the network's native currency, held in tinybars.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Hbar(u64);

impl Hbar {
    pub const ZERO: Self = Self(0);

    pub const fn from_tinybars(tinybars: u64) -> Self {
        Self(tinybars)
    }

    pub const fn from_hbar(hbar: u64) -> Self {
        Self(hbar * TINYBARS_PER_HBAR)
    }

    pub const fn tinybars(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Hbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / TINYBARS_PER_HBAR;
        let frac = self.0 % TINYBARS_PER_HBAR;
        if frac == 0 {
            return write!(f, "{whole} HBAR");
        }
        let frac = format!("{frac:0width$}", width = DECIMALS);
        write!(f, "{whole}.{} HBAR", frac.trim_end_matches('0'))
    }
}

/// Parses a decimal HBAR amount such as `10`, `0.5` or `2.25 HBAR`.
impl FromStr for Hbar {
    type Err = InvalidHbar;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidHbar(s.to_owned());
        let text = s.trim();
        let text = text
            .strip_suffix("HBAR")
            .or_else(|| text.strip_suffix('ℏ'))
            .unwrap_or(text)
            .trim_end();
        let (whole, frac) = text.split_once('.').unwrap_or((text, ""));
        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty())
            || frac.len() > DECIMALS
            || !digits(whole)
            || !digits(frac)
        {
            return Err(invalid());
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let frac: u64 = if frac.is_empty() {
            0
        } else {
            let scale = 10u64.pow((DECIMALS - frac.len()) as u32);
            frac.parse::<u64>().map_err(|_| invalid())? * scale
        };
        whole
            .checked_mul(TINYBARS_PER_HBAR)
            .and_then(|tinybars| tinybars.checked_add(frac))
            .map(Self)
            .ok_or_else(invalid)
    }
}
