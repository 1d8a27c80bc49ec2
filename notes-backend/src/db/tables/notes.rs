//! Note table operations. Each takes the connection (or open transaction)
//! it runs on, so callers decide the transaction boundary.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

use super::super::sqlite::DbResult;
use crate::models::{Note, UpdateArgs};
use crate::notes::ListArgs;

const NOTE_COLUMNS: &str = "id, label, body, tags, created_at";

/// Fixed-width UTC timestamps, so text order matches time order
fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn conversion_error<E>(idx: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

/// Insert a new note row. A duplicate id fails on the primary key.
pub fn insert(conn: &Connection, note: &Note) -> DbResult<usize> {
    let tags = serde_json::to_string(&note.tags)?;

    let rows = conn.execute(
        "INSERT INTO notes (id, label, body, tags, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            note.id.to_string(),
            note.label,
            note.body,
            tags,
            format_timestamp(&note.created_at),
        ],
    )?;

    Ok(rows)
}

/// Replace label, body and tags. Returns the number of rows touched.
pub fn update(conn: &Connection, args: &UpdateArgs) -> DbResult<usize> {
    let tags = serde_json::to_string(&args.tags)?;

    let rows = conn.execute(
        "UPDATE notes SET label = ?1, body = ?2, tags = ?3 WHERE id = ?4",
        params![args.label, args.body, tags, args.id.to_string()],
    )?;

    Ok(rows)
}

/// Delete every note whose id is in `ids`
pub fn delete_many(conn: &Connection, ids: &[Uuid]) -> DbResult<usize> {
    if ids.is_empty() {
        return Ok(0);
    }

    let ids_json = serde_json::to_string(ids)?;
    let rows = conn.execute(
        "DELETE FROM notes WHERE id IN (SELECT value FROM json_each(?1))",
        params![ids_json],
    )?;

    Ok(rows)
}

pub fn get(conn: &Connection, id: Uuid) -> DbResult<Option<Note>> {
    let note = conn
        .query_row(
            &format!("SELECT {} FROM notes WHERE id = ?1", NOTE_COLUMNS),
            params![id.to_string()],
            row_to_note,
        )
        .optional()?;

    Ok(note)
}

/// One page of notes in the requested order
pub fn query(conn: &Connection, args: &ListArgs) -> DbResult<Vec<Note>> {
    // order_clause() only yields fixed literals
    let sql = format!(
        "SELECT {} FROM notes ORDER BY {} LIMIT ?1 OFFSET ?2",
        NOTE_COLUMNS,
        args.order_clause()
    );

    let mut stmt = conn.prepare(&sql)?;
    let notes = stmt
        .query_map(params![args.limit_param(), args.offset_param()], row_to_note)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(notes)
}

pub fn count(conn: &Connection) -> DbResult<u64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))?;
    Ok(count.max(0) as u64)
}

fn row_to_note(row: &Row) -> rusqlite::Result<Note> {
    let id_str: String = row.get(0)?;
    let body: Option<String> = row.get(2)?;
    let tags_str: String = row.get(3)?;
    let created_at_str: String = row.get(4)?;

    Ok(Note {
        id: Uuid::parse_str(&id_str).map_err(|e| conversion_error(0, e))?,
        label: row.get(1)?,
        body: body.unwrap_or_default(),
        tags: serde_json::from_str(&tags_str).map_err(|e| conversion_error(3, e))?,
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| conversion_error(4, e))?
            .with_timezone(&Utc),
    })
}
