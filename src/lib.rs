//! Cardkeeper: a console-driven soccer card collection manager.
//!
//! One operator, one synchronous menu loop, one document per team. Teams
//! own players, players own cards, and the whole aggregate is persisted
//! as a single JSON document in an embedded SQLite store.
//!
//! # Architecture
//!
//! Every mutation — at any nesting depth — goes through the same
//! protocol: fetch the full collection, find the first team owning the
//! target identifier, mutate the in-memory copy, replace the whole
//! document. There is no partial update, no filtered query, no
//! transaction spanning the fetch/replace pair, and no concurrency
//! token; the tool assumes exclusive single-operator use.
//!
//! - [`crate::core::store`] — the four-operation document collection
//!   seam (insert-one, find-all, replace-one, delete-one)
//! - [`crate::core::aggregate`] — the whole-aggregate mutation protocol
//!   and the CRUD operations built on it
//! - [`crate::core::reports`] — flattened views and summary statistics
//! - [`crate::menu`] — the interactive numbered-menu console surface

pub mod core;
pub mod menu;

use crate::core::config::{DEFAULT_SETTINGS_FILE, Settings};
use crate::core::db;
use crate::core::error::CardKeeperError;
use crate::core::store::SqliteTeamStore;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "cardkeeper",
    version = env!("CARGO_PKG_VERSION"),
    about = "Console-driven soccer card collection manager"
)]
struct Cli {
    /// Settings file holding the store's connection string and database
    /// name.
    #[clap(long, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,
}

/// Loads settings, opens the store, and hands control to the menu loop.
/// Any error that reaches the caller is fatal: settings problems at
/// startup, store failures at any point after.
pub fn run() -> Result<(), CardKeeperError> {
    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)?;
    let conn = db::open_store_db(&settings)?;
    let store = SqliteTeamStore::new(conn)?;
    menu::run_menu(&store)
}
