use std::sync::Arc;

use crate::models::{CreateArgs, Note};
use crate::notes::context::Context;
use crate::notes::error::NoteError;
use crate::notes::store::NoteStore;

/// Builds, validates and persists a new note
#[derive(Clone)]
pub struct CreateAction {
    store: Arc<dyn NoteStore>,
}

impl CreateAction {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    pub async fn run(&self, ctx: &Context, args: CreateArgs) -> Result<Note, NoteError> {
        let note = Note::new(args.label, args.body, args.tags);

        // Invalid notes never reach the store
        note.validate()?;

        log::debug!("[NOTES] Creating note {:?}", note);

        self.store
            .create(ctx, &note)
            .await
            .map_err(|e| e.wrap("failed during save to store new note"))?;

        Ok(note)
    }
}
