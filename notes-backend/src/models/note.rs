use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Reasons a note fails its entity invariant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("note ID is required")]
    MissingId,
    #[error("note label is required")]
    EmptyLabel,
}

/// Note - a labelled text note with ordered tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: Uuid,
    pub label: String,
    pub body: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Build a fresh note with a time-ordered id and the current timestamp
    pub fn new(label: String, body: String, tags: Vec<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            label,
            body,
            tags,
            created_at: Utc::now(),
        }
    }

    /// A note is valid only with a non-nil id and a non-empty label
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_nil() {
            return Err(ValidationError::MissingId);
        }
        if self.label.is_empty() {
            return Err(ValidationError::EmptyLabel);
        }
        Ok(())
    }
}

/// One page of notes plus the total number of notes in the store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListNotes {
    pub notes: Vec<Note>,
    pub total: u64,
}

/// Fields for a new note
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateArgs {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Full replacement of a note's mutable fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateArgs {
    pub id: Uuid,
    pub label: String,
    pub body: String,
    pub tags: Vec<String>,
}

/// Request body for `PUT /api/v1/note/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl UpdateNoteRequest {
    pub fn into_args(self, id: Uuid) -> UpdateArgs {
        UpdateArgs {
            id,
            label: self.label,
            body: self.body,
            tags: self.tags,
        }
    }
}

/// Request body for `DELETE /api/v1/note`
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteNotesRequest {
    #[serde(rename = "noteId", default)]
    pub note_ids: Vec<Uuid>,
}
