//! Shared fixtures for controller tests.

use std::sync::Arc;

use tempfile::{tempdir, TempDir};

use crate::config::Config;
use crate::db::{Database, SqliteNoteStore};
use crate::notes::NoteActions;
use crate::AppState;

/// App state over a migrated database in a fresh temp dir. Keep the TempDir
/// alive for as long as the state is used.
pub fn test_state() -> (TempDir, AppState) {
    let dir = tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("notes.db");
    let config = Config {
        database_url: db_path.to_string_lossy().to_string(),
        db_pool_size: 2,
        ..Config::default()
    };

    let db = Arc::new(
        Database::new(&config.database_url, config.db_pool_size).expect("Failed to open database"),
    );
    db.migrate_01().expect("Failed to migrate");

    let state = AppState {
        notes: NoteActions::new(Arc::new(SqliteNoteStore::new(Arc::clone(&db)))),
        db,
        config,
    };

    (dir, state)
}
