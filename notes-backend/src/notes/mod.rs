//! Notes core - use-case actions over an abstract note store
//!
//! Actions validate what they can locally and delegate persistence to a
//! [`NoteStore`]. The SQLite implementation lives in `crate::db`; the HTTP
//! surface in `crate::controllers::notes`.

pub mod actions;
pub mod context;
pub mod error;
pub mod pagination;
pub mod store;

#[cfg(test)]
pub mod testing;

pub use actions::NoteActions;
pub use context::Context;
pub use error::{ErrorKind, NoteError};
pub use pagination::ListArgs;
pub use store::NoteStore;
