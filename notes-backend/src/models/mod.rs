pub mod note;

pub use note::{
    CreateArgs, DeleteNotesRequest, ListNotes, Note, UpdateArgs, UpdateNoteRequest,
    ValidationError,
};
