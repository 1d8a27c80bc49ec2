use std::sync::Arc;

use uuid::Uuid;

use crate::models::Note;
use crate::notes::context::Context;
use crate::notes::error::NoteError;
use crate::notes::store::NoteStore;

#[derive(Clone)]
pub struct GetByIdAction {
    store: Arc<dyn NoteStore>,
}

impl GetByIdAction {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    /// Fetch one note. Not-found comes back unwrapped so callers can match on it.
    pub async fn run(&self, ctx: &Context, id: Uuid) -> Result<Note, NoteError> {
        let note = match self.store.get_by_id(ctx, id).await {
            Ok(note) => note,
            Err(e) if e.is_not_found() => return Err(e),
            Err(e) => return Err(e.wrap("failed during getting from store")),
        };

        log::debug!("[NOTES] Got note from store {:?}", note);

        Ok(note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::error::ErrorKind;
    use crate::notes::testing::{sample_note, SpyStore};

    #[tokio::test]
    async fn test_get_returns_stored_note() {
        let note = sample_note("Stored");
        let spy = Arc::new(SpyStore::with_notes(vec![note.clone()]));
        let action = GetByIdAction::new(spy.clone());

        let found = action.run(&Context::new(), note.id).await.unwrap();
        assert_eq!(found, note);
        assert_eq!(spy.calls().get_by_id, 1);
    }

    #[tokio::test]
    async fn test_get_propagates_not_found_unchanged() {
        let spy = Arc::new(SpyStore::new());
        let action = GetByIdAction::new(spy);

        let err = action.run(&Context::new(), Uuid::now_v7()).await.unwrap_err();
        assert!(matches!(err, NoteError::NotFound));
    }

    #[tokio::test]
    async fn test_get_wraps_other_failures() {
        let spy = Arc::new(SpyStore::new());
        spy.fail_get();
        let action = GetByIdAction::new(spy);

        let err = action.run(&Context::new(), Uuid::now_v7()).await.unwrap_err();
        assert!(matches!(err, NoteError::Wrapped { .. }));
        assert_eq!(err.kind(), ErrorKind::Internal);
    }
}
