//! Schema setup. There is a single migration: the initial `notes` table.

use super::sqlite::{Database, DbResult};

pub const NOTES_TABLE: &str = "notes";

const MIGRATION_01: &str = "
    CREATE TABLE IF NOT EXISTS notes (
        id TEXT PRIMARY KEY NOT NULL,
        label TEXT NOT NULL,
        body TEXT,
        tags TEXT NOT NULL DEFAULT '[]',
        created_at TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_notes_label ON notes (label, id);
    CREATE INDEX IF NOT EXISTS idx_notes_created_at ON notes (created_at, id);
";

impl Database {
    /// Migration 01: create the notes table. Safe to run more than once.
    pub fn migrate_01(&self) -> DbResult<()> {
        log::debug!("[DB] Creating table {}", NOTES_TABLE);

        let conn = self.conn()?;
        conn.execute_batch(MIGRATION_01).map_err(|e| {
            log::error!("[DB] Failed to create table {}: {}", NOTES_TABLE, e);
            e
        })?;

        log::info!("[DB] Migration 01 applied");
        Ok(())
    }
}
