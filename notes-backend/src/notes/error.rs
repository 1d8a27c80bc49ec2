//! Error type shared by note actions and note stores.
//!
//! `NotFound` is a distinct variant rather than a message. Context added on the
//! way up goes through `Wrapped`, and `kind()` looks through every layer, so a
//! caller can still branch on not-found after any number of wraps.

use std::error::Error as StdError;

use thiserror::Error;

use crate::models::ValidationError;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Classification used by callers to branch on an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Cancelled,
    DeadlineExceeded,
    Internal,
}

#[derive(Debug, Error)]
pub enum NoteError {
    #[error("note validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Not Found")]
    NotFound,

    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        #[source]
        source: BoxError,
    },

    #[error("{context}: {source}")]
    Wrapped {
        context: &'static str,
        #[source]
        source: Box<NoteError>,
    },

    #[error("operation cancelled")]
    Cancelled,

    #[error("deadline exceeded")]
    DeadlineExceeded,
}

impl NoteError {
    /// Backend failure with the operation that was running
    pub fn store<E>(context: &'static str, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        NoteError::Store {
            context,
            source: source.into(),
        }
    }

    /// Add context while keeping the inner kind queryable
    pub fn wrap(self, context: &'static str) -> Self {
        NoteError::Wrapped {
            context,
            source: Box::new(self),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            NoteError::Validation(_) => ErrorKind::Validation,
            NoteError::NotFound => ErrorKind::NotFound,
            NoteError::Store { .. } => ErrorKind::Internal,
            NoteError::Wrapped { source, .. } => source.kind(),
            NoteError::Cancelled => ErrorKind::Cancelled,
            NoteError::DeadlineExceeded => ErrorKind::DeadlineExceeded,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}
