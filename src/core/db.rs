use crate::core::config::Settings;
use crate::core::error::CardKeeperError;
use rusqlite::Connection;
use std::fs;

/// One row per team document; the aggregate is stored whole as JSON text.
pub const TEAMS_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS teams (
    id   TEXT PRIMARY KEY,
    doc  TEXT NOT NULL
);";

pub fn db_connect(db_path: &str) -> Result<Connection, CardKeeperError> {
    let conn = Connection::open(db_path)?;
    conn.busy_timeout(std::time::Duration::from_secs(5))
        .map_err(CardKeeperError::RusqliteError)?;
    conn.query_row("PRAGMA journal_mode=WAL;", [], |_| Ok(()))
        .map_err(CardKeeperError::RusqliteError)?;
    Ok(conn)
}

/// Opens (creating if needed) the store database the settings point at.
/// The connection lives for the rest of the process.
pub fn open_store_db(settings: &Settings) -> Result<Connection, CardKeeperError> {
    let db_path = settings.database_path();
    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent).map_err(CardKeeperError::IoError)?;
    }
    db_connect(&db_path.to_string_lossy())
}
