//! Document identifiers for the team collection.
//!
//! A `DocumentId` is 12 bytes generated client-side at creation time:
//! a 4-byte big-endian unix-seconds timestamp, 5 random bytes fixed per
//! process, and a 3-byte wrapping counter seeded randomly at startup.
//! The wire form is exactly 24 lowercase hex characters; documents store
//! and operators type ids in that form. Equality is byte-wise.
//!
//! No uniqueness check is performed against existing documents; the
//! collision probability is treated as negligible.

use crate::core::error::CardKeeperError;
use rand::RngCore;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

const RAW_LEN: usize = 12;
const HEX_LEN: usize = 2 * RAW_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId([u8; RAW_LEN]);

impl DocumentId {
    /// Generates a fresh identifier. Immutable once assigned to an entity.
    pub fn generate() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as u32;

        let mut bytes = [0u8; RAW_LEN];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..9].copy_from_slice(process_entropy());
        // Low 3 bytes of the counter, big-endian, wrapping.
        bytes[9..].copy_from_slice(&next_count().to_be_bytes()[1..]);
        Self(bytes)
    }

    /// Parses the 24-character hex wire form. Existence is not checked
    /// here; lookups decide whether the id matches anything.
    pub fn parse(input: &str) -> Result<Self, CardKeeperError> {
        let raw = input.trim();
        if raw.len() != HEX_LEN {
            return Err(CardKeeperError::ValidationError(format!(
                "identifier must be {HEX_LEN} hex characters, got '{raw}'"
            )));
        }
        let mut bytes = [0u8; RAW_LEN];
        for (i, chunk) in raw.as_bytes().chunks_exact(2).enumerate() {
            match (hex_val(chunk[0]), hex_val(chunk[1])) {
                (Some(hi), Some(lo)) => bytes[i] = (hi << 4) | lo,
                _ => {
                    return Err(CardKeeperError::ValidationError(format!(
                        "identifier '{raw}' is not valid hex"
                    )));
                }
            }
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; RAW_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for DocumentId {
    type Err = CardKeeperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for DocumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Random segment shared by every id generated in this process.
fn process_entropy() -> &'static [u8; 5] {
    static ENTROPY: OnceLock<[u8; 5]> = OnceLock::new();
    ENTROPY.get_or_init(|| {
        let mut bytes = [0u8; 5];
        rand::thread_rng().fill_bytes(&mut bytes);
        bytes
    })
}

fn next_count() -> u32 {
    static COUNTER: OnceLock<AtomicU32> = OnceLock::new();
    COUNTER
        .get_or_init(|| AtomicU32::new(rand::random::<u32>() & 0x00ff_ffff))
        .fetch_add(1, Ordering::Relaxed)
}
