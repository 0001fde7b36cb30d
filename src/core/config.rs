//! Startup settings: where the store lives.
//!
//! Read once from a JSON key-value file before anything touches the
//! store. A missing or malformed file is fatal; the process reports the
//! error and exits non-zero.

use crate::core::error::CardKeeperError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SETTINGS_FILE: &str = "cardkeeper.json";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Directory holding the store's database file.
    pub connection_string: String,
    /// Logical store name; the database file is `<name>.db`.
    pub database_name: String,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, CardKeeperError> {
        let content = fs::read_to_string(path).map_err(|e| {
            CardKeeperError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        let settings: Settings = serde_json::from_str(&content).map_err(|e| {
            CardKeeperError::ConfigError(format!("malformed {}: {e}", path.display()))
        })?;
        if settings.connection_string.trim().is_empty()
            || settings.database_name.trim().is_empty()
        {
            return Err(CardKeeperError::ConfigError(
                "connection_string and database_name must be set".to_string(),
            ));
        }
        Ok(settings)
    }

    pub fn database_path(&self) -> PathBuf {
        Path::new(&self.connection_string).join(format!("{}.db", self.database_name))
    }
}
