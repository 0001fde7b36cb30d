//! The document collection seam.
//!
//! The rest of the crate only ever talks to a [`TeamStore`]: insert one
//! document, fetch every document, replace one by id, delete one by id.
//! No filtered or partial queries exist — every read pulls the whole
//! collection and filtering happens in memory, every write replaces a
//! whole root document.

use crate::core::db;
use crate::core::error::CardKeeperError;
use crate::core::id::DocumentId;
use crate::core::model::Team;
use rusqlite::Connection;
use std::cell::RefCell;

pub trait TeamStore {
    fn insert_one(&self, team: &Team) -> Result<(), CardKeeperError>;

    /// Every team document, in the store's natural order. For the SQLite
    /// backend that is `rowid` order; callers must not rely on anything
    /// stronger.
    fn find_all(&self) -> Result<Vec<Team>, CardKeeperError>;

    /// Replaces the whole document keyed by `id`. Returns whether a
    /// document was there to replace.
    fn replace_one(&self, id: DocumentId, team: &Team) -> Result<bool, CardKeeperError>;

    /// Returns whether a document was there to delete.
    fn delete_one(&self, id: DocumentId) -> Result<bool, CardKeeperError>;
}

/// Production store: one SQLite table, one JSON document per row.
pub struct SqliteTeamStore {
    conn: Connection,
}

impl SqliteTeamStore {
    pub fn new(conn: Connection) -> Result<Self, CardKeeperError> {
        conn.execute(db::TEAMS_SCHEMA, [])?;
        Ok(Self { conn })
    }
}

impl TeamStore for SqliteTeamStore {
    fn insert_one(&self, team: &Team) -> Result<(), CardKeeperError> {
        let doc = serde_json::to_string(team)?;
        self.conn.execute(
            "INSERT INTO teams (id, doc) VALUES (?1, ?2)",
            rusqlite::params![team.id.to_hex(), doc],
        )?;
        Ok(())
    }

    fn find_all(&self) -> Result<Vec<Team>, CardKeeperError> {
        let mut stmt = self.conn.prepare("SELECT doc FROM teams ORDER BY rowid")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut teams = Vec::new();
        for doc in rows {
            teams.push(serde_json::from_str(&doc?)?);
        }
        Ok(teams)
    }

    fn replace_one(&self, id: DocumentId, team: &Team) -> Result<bool, CardKeeperError> {
        let doc = serde_json::to_string(team)?;
        let changed = self.conn.execute(
            "UPDATE teams SET doc = ?2 WHERE id = ?1",
            rusqlite::params![id.to_hex(), doc],
        )?;
        Ok(changed > 0)
    }

    fn delete_one(&self, id: DocumentId) -> Result<bool, CardKeeperError> {
        let changed = self.conn.execute(
            "DELETE FROM teams WHERE id = ?1",
            rusqlite::params![id.to_hex()],
        )?;
        Ok(changed > 0)
    }
}

/// Insertion-ordered in-memory store. Lets the mutation protocol be
/// exercised without a database file; semantics match the SQLite backend.
#[derive(Debug, Default)]
pub struct MemoryTeamStore {
    teams: RefCell<Vec<Team>>,
}

impl MemoryTeamStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TeamStore for MemoryTeamStore {
    fn insert_one(&self, team: &Team) -> Result<(), CardKeeperError> {
        self.teams.borrow_mut().push(team.clone());
        Ok(())
    }

    fn find_all(&self) -> Result<Vec<Team>, CardKeeperError> {
        Ok(self.teams.borrow().clone())
    }

    fn replace_one(&self, id: DocumentId, team: &Team) -> Result<bool, CardKeeperError> {
        let mut teams = self.teams.borrow_mut();
        match teams.iter_mut().find(|t| t.id == id) {
            Some(slot) => {
                *slot = team.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_one(&self, id: DocumentId) -> Result<bool, CardKeeperError> {
        let mut teams = self.teams.borrow_mut();
        let before = teams.len();
        teams.retain(|t| t.id != id);
        Ok(teams.len() < before)
    }
}
