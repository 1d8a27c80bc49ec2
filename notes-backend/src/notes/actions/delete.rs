use std::sync::Arc;

use uuid::Uuid;

use crate::notes::context::Context;
use crate::notes::error::NoteError;
use crate::notes::store::NoteStore;

#[derive(Clone)]
pub struct DeleteAction {
    store: Arc<dyn NoteStore>,
}

impl DeleteAction {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    /// Delete any number of notes. Ids that do not exist are ignored.
    pub async fn run(&self, ctx: &Context, ids: &[Uuid]) -> Result<(), NoteError> {
        self.store
            .delete(ctx, ids)
            .await
            .map_err(|e| e.wrap("failed during action deleting"))?;

        log::debug!("[NOTES] Deleted notes {:?}", ids);

        Ok(())
    }
}
