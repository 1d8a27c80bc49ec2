use std::sync::Arc;

use crate::models::ListNotes;
use crate::notes::context::Context;
use crate::notes::error::NoteError;
use crate::notes::pagination::ListArgs;
use crate::notes::store::NoteStore;

/// Lists one page of notes with the store-wide total.
///
/// The store reports an empty page as not-found; here that becomes an empty,
/// successful listing.
#[derive(Clone)]
pub struct ListAction {
    store: Arc<dyn NoteStore>,
}

impl ListAction {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    pub async fn run(&self, ctx: &Context, args: ListArgs) -> Result<ListNotes, NoteError> {
        let notes = match self.store.query(ctx, &args).await {
            Ok(notes) => notes,
            Err(e) if e.is_not_found() => {
                log::debug!("[NOTES] No notes for {:?}", args);
                return Ok(ListNotes::default());
            }
            Err(e) => return Err(e.wrap("list notes")),
        };

        let total = self
            .store
            .count(ctx)
            .await
            .map_err(|e| e.wrap("list notes"))?;

        log::debug!("[NOTES] Listed {} of {} notes for {:?}", notes.len(), total, args);

        Ok(ListNotes { notes, total })
    }
}
