//! SqliteNoteStore - `NoteStore` implementation over the pooled database.
//!
//! Each call runs in its own transaction on the blocking pool. When the
//! caller's context is cancelled or expires, the running statement is
//! interrupted and the transaction rolls back, so an error returned here
//! never leaves a write behind.

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use rusqlite::{Connection, InterruptHandle, TransactionBehavior};
use uuid::Uuid;

use super::sqlite::{Database, DbError, DbResult};
use super::tables::notes;
use crate::models::{Note, UpdateArgs};
use crate::notes::{Context, ListArgs, NoteError, NoteStore};

pub struct SqliteNoteStore {
    db: Arc<Database>,
}

impl SqliteNoteStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    async fn blocking<T, F>(
        &self,
        ctx: &Context,
        op: &'static str,
        behavior: TransactionBehavior,
        f: F,
    ) -> Result<T, NoteError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> DbResult<T> + Send + 'static,
    {
        ctx.check()?;

        let db = Arc::clone(&self.db);
        let guard = ctx.clone();
        let interrupt: Arc<OnceLock<InterruptHandle>> = Arc::default();
        let slot = Arc::clone(&interrupt);

        let mut task = tokio::task::spawn_blocking(move || {
            let mut conn = db.conn().map_err(|e| NoteError::store(op, e))?;
            // Published before the first context check, so a watcher that
            // finds the slot empty is always caught by that check.
            let _ = slot.set(conn.get_interrupt_handle());
            in_transaction(&mut conn, &guard, op, behavior, f)
        });

        let finished = tokio::select! {
            biased;
            joined = &mut task => Some(joined),
            reason = ctx.done() => {
                log::debug!("[DB] {} interrupted: {}", op, reason);
                if let Some(handle) = interrupt.get() {
                    handle.interrupt();
                }
                None
            }
        };

        let joined = match finished {
            Some(joined) => joined,
            // The blocking call still decides the outcome: either it committed
            // before the interrupt landed, or it rolled back.
            None => task.await,
        };

        joined.map_err(|e| NoteError::store(op, e))?
    }
}

/// Run `f` in a transaction that only commits while `ctx` is still live
fn in_transaction<T, F>(
    conn: &mut Connection,
    ctx: &Context,
    op: &'static str,
    behavior: TransactionBehavior,
    f: F,
) -> Result<T, NoteError>
where
    F: FnOnce(&Connection) -> DbResult<T>,
{
    // An interrupted statement surfaces as a sqlite error; report the
    // context's reason instead when that is what stopped it.
    let fail = |e: DbError| match ctx.check() {
        Err(reason) => reason,
        Ok(()) => {
            log::debug!("[DB] {} failed: {}", op, e);
            NoteError::store(op, e)
        }
    };

    ctx.check()?;
    let tx = conn
        .transaction_with_behavior(behavior)
        .map_err(|e| fail(e.into()))?;

    ctx.check()?;
    let value = f(&tx).map_err(fail)?;

    // Dropping `tx` without commit rolls back
    ctx.check()?;
    tx.commit().map_err(|e| fail(e.into()))?;

    Ok(value)
}

#[async_trait]
impl NoteStore for SqliteNoteStore {
    async fn create(&self, ctx: &Context, note: &Note) -> Result<(), NoteError> {
        log::debug!("[DB] Saving note {}", note.id);
        let note = note.clone();
        let rows = self
            .blocking(ctx, "save note to database", TransactionBehavior::Immediate, move |conn| {
                notes::insert(conn, &note)
            })
            .await?;
        log::debug!("[DB] Created {} row(s)", rows);
        Ok(())
    }

    async fn update(&self, ctx: &Context, args: &UpdateArgs) -> Result<(), NoteError> {
        log::debug!("[DB] Updating note {:?}", args);
        let args = args.clone();
        let rows = self
            .blocking(ctx, "update note in database", TransactionBehavior::Immediate, move |conn| {
                notes::update(conn, &args)
            })
            .await?;
        log::debug!("[DB] Updated {} row(s)", rows);
        Ok(())
    }

    async fn delete(&self, ctx: &Context, ids: &[Uuid]) -> Result<(), NoteError> {
        log::debug!("[DB] Deleting notes {:?}", ids);
        let ids = ids.to_vec();
        let rows = self
            .blocking(ctx, "delete notes by ids", TransactionBehavior::Immediate, move |conn| {
                notes::delete_many(conn, &ids)
            })
            .await?;
        log::debug!("[DB] Deleted {} row(s)", rows);
        Ok(())
    }

    async fn get_by_id(&self, ctx: &Context, id: Uuid) -> Result<Note, NoteError> {
        log::debug!("[DB] Getting note {}", id);
        self.blocking(ctx, "get note by id", TransactionBehavior::Deferred, move |conn| {
            notes::get(conn, id)
        })
        .await?
        .ok_or(NoteError::NotFound)
    }

    async fn query(&self, ctx: &Context, args: &ListArgs) -> Result<Vec<Note>, NoteError> {
        log::debug!("[DB] Querying notes {:?}", args);
        let args = *args;
        let notes = self
            .blocking(ctx, "get notes", TransactionBehavior::Deferred, move |conn| {
                notes::query(conn, &args)
            })
            .await?;

        if notes.is_empty() {
            return Err(NoteError::NotFound);
        }
        Ok(notes)
    }

    async fn count(&self, ctx: &Context) -> Result<u64, NoteError> {
        self.blocking(ctx, "count notes", TransactionBehavior::Deferred, notes::count)
            .await
    }
}
