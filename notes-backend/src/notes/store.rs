//! NoteStore - persistence contract consumed by the note actions.

use async_trait::async_trait;
use uuid::Uuid;

use super::context::Context;
use super::error::NoteError;
use super::pagination::ListArgs;
use crate::models::{Note, UpdateArgs};

/// Storage backend for notes.
///
/// Implementations must report a missing row as [`NoteError::NotFound`],
/// distinct from any other failure, and must honor the [`Context`] passed to
/// every call.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Persist a new note. No validation happens here.
    async fn create(&self, ctx: &Context, note: &Note) -> Result<(), NoteError>;

    /// Replace label, body and tags of the row with `args.id`. An unknown id
    /// touches zero rows and is not an error.
    async fn update(&self, ctx: &Context, args: &UpdateArgs) -> Result<(), NoteError>;

    /// Remove every row whose id is in `ids`. Unknown ids are ignored.
    async fn delete(&self, ctx: &Context, ids: &[Uuid]) -> Result<(), NoteError>;

    async fn get_by_id(&self, ctx: &Context, id: Uuid) -> Result<Note, NoteError>;

    /// One ordered page of notes. An empty page is reported as
    /// [`NoteError::NotFound`].
    async fn query(&self, ctx: &Context, args: &ListArgs) -> Result<Vec<Note>, NoteError>;

    /// Number of notes in the store, regardless of any page window
    async fn count(&self, ctx: &Context) -> Result<u64, NoteError>;
}
