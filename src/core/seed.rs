//! Game seeds.
//!
//! A seed is the opaque 32-byte identifier (typically a content hash) that
//! fixes the whole tile sequence of a game. Two engines initialised with
//! the same seed see the same tiles in the same order.
//!
//! ```
//! use pop_puzzle::core::GameSeed;
//!
//! let seed: GameSeed = "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff"
//!     .parse()
//!     .unwrap();
//! assert_eq!(seed.short(), "00112233...");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Length of a seed in bytes.
pub const SEED_LEN: usize = 32;

/// Opaque deterministic game identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameSeed([u8; SEED_LEN]);

/// Errors from parsing a seed.
#[derive(Debug, Error, PartialEq)]
pub enum SeedError {
    #[error("invalid seed hex: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl GameSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    /// Expand a small integer into a seed. Handy for tests and benches.
    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; SEED_LEN];
        bytes[..8].copy_from_slice(&value.to_le_bytes());
        Self(bytes)
    }

    /// Parse a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, SeedError> {
        let mut bytes = [0u8; SEED_LEN];
        hex::decode_to_slice(s.trim(), &mut bytes)?;
        Ok(Self(bytes))
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// First eight hex digits followed by an ellipsis, for compact display.
    #[must_use]
    pub fn short(&self) -> String {
        let mut s = self.to_hex();
        s.truncate(8);
        s.push_str("...");
        s
    }
}

impl From<[u8; SEED_LEN]> for GameSeed {
    fn from(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }
}

impl FromStr for GameSeed {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl std::fmt::Display for GameSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
