use std::sync::Arc;

use super::get_by_id::GetByIdAction;
use crate::models::{Note, UpdateArgs};
use crate::notes::context::Context;
use crate::notes::error::NoteError;
use crate::notes::store::NoteStore;

/// Replaces a note's mutable fields and returns the stored result.
///
/// Unlike create, the new label and body are not validated here.
#[derive(Clone)]
pub struct UpdateAction {
    store: Arc<dyn NoteStore>,
    get_by_id: GetByIdAction,
}

impl UpdateAction {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self {
            get_by_id: GetByIdAction::new(Arc::clone(&store)),
            store,
        }
    }

    pub async fn run(&self, ctx: &Context, args: UpdateArgs) -> Result<Note, NoteError> {
        self.store
            .update(ctx, &args)
            .await
            .map_err(|e| e.wrap("failed action update"))?;

        // Separate round trip; a concurrent delete shows up as not-found here
        let updated = self
            .get_by_id
            .run(ctx, args.id)
            .await
            .map_err(|e| e.wrap("failed during getting updated note"))?;

        log::debug!("[NOTES] Updated note {:?}", updated);

        Ok(updated)
    }
}
