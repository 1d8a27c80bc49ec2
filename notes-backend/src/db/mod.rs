pub mod migrations;
pub mod note_store;
pub mod sqlite;
pub mod tables;

pub use note_store::SqliteNoteStore;
pub use sqlite::Database;
