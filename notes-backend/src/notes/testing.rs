//! In-memory spy store for action tests.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use super::context::Context;
use super::error::NoteError;
use super::pagination::{ListArgs, SortDirection, SortField};
use super::store::NoteStore;
use crate::models::{Note, UpdateArgs};

pub fn sample_note(label: &str) -> Note {
    Note::new(label.to_string(), String::new(), vec![])
}

/// Number of calls received per store operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calls {
    pub create: usize,
    pub update: usize,
    pub delete: usize,
    pub get_by_id: usize,
    pub query: usize,
    pub count: usize,
}

#[derive(Default)]
struct Failures {
    create: bool,
    update: bool,
    delete: bool,
    get: bool,
    query: bool,
    count: bool,
}

/// Store that keeps notes in a Vec, records every call, and can be told to
/// fail individual operations.
#[derive(Default)]
pub struct SpyStore {
    notes: Mutex<Vec<Note>>,
    created: Mutex<Vec<Note>>,
    calls: Mutex<Calls>,
    failures: Mutex<Failures>,
    count_override: Mutex<Option<u64>>,
}

impl SpyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes(notes: Vec<Note>) -> Self {
        let store = Self::default();
        *store.notes.lock().unwrap() = notes;
        store
    }

    pub fn calls(&self) -> Calls {
        *self.calls.lock().unwrap()
    }

    pub fn notes(&self) -> Vec<Note> {
        self.notes.lock().unwrap().clone()
    }

    /// Notes received through `create`
    pub fn created(&self) -> Vec<Note> {
        self.created.lock().unwrap().clone()
    }

    pub fn set_count_override(&self, count: u64) {
        *self.count_override.lock().unwrap() = Some(count);
    }

    pub fn fail_create(&self) {
        self.failures.lock().unwrap().create = true;
    }

    pub fn fail_update(&self) {
        self.failures.lock().unwrap().update = true;
    }

    pub fn fail_delete(&self) {
        self.failures.lock().unwrap().delete = true;
    }

    pub fn fail_get(&self) {
        self.failures.lock().unwrap().get = true;
    }

    pub fn fail_query(&self) {
        self.failures.lock().unwrap().query = true;
    }

    pub fn fail_count(&self) {
        self.failures.lock().unwrap().count = true;
    }

    fn injected(&self, pick: impl Fn(&Failures) -> bool, op: &'static str) -> Result<(), NoteError> {
        let failures = self.failures.lock().unwrap();
        if pick(&*failures) {
            return Err(NoteError::store(op, "injected failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl NoteStore for SpyStore {
    async fn create(&self, ctx: &Context, note: &Note) -> Result<(), NoteError> {
        self.calls.lock().unwrap().create += 1;
        ctx.check()?;
        self.injected(|f| f.create, "save note to database")?;

        let mut notes = self.notes.lock().unwrap();
        if notes.iter().any(|n| n.id == note.id) {
            return Err(NoteError::store("save note to database", "duplicate id"));
        }
        notes.push(note.clone());
        self.created.lock().unwrap().push(note.clone());
        Ok(())
    }

    async fn update(&self, ctx: &Context, args: &UpdateArgs) -> Result<(), NoteError> {
        self.calls.lock().unwrap().update += 1;
        ctx.check()?;
        self.injected(|f| f.update, "update note in database")?;

        let mut notes = self.notes.lock().unwrap();
        if let Some(note) = notes.iter_mut().find(|n| n.id == args.id) {
            note.label = args.label.clone();
            note.body = args.body.clone();
            note.tags = args.tags.clone();
        }
        Ok(())
    }

    async fn delete(&self, ctx: &Context, ids: &[Uuid]) -> Result<(), NoteError> {
        self.calls.lock().unwrap().delete += 1;
        ctx.check()?;
        self.injected(|f| f.delete, "delete notes by ids")?;

        self.notes.lock().unwrap().retain(|n| !ids.contains(&n.id));
        Ok(())
    }

    async fn get_by_id(&self, ctx: &Context, id: Uuid) -> Result<Note, NoteError> {
        self.calls.lock().unwrap().get_by_id += 1;
        ctx.check()?;
        self.injected(|f| f.get, "get note by id")?;

        self.notes
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or(NoteError::NotFound)
    }

    async fn query(&self, ctx: &Context, args: &ListArgs) -> Result<Vec<Note>, NoteError> {
        self.calls.lock().unwrap().query += 1;
        ctx.check()?;
        self.injected(|f| f.query, "get notes")?;

        let mut notes = self.notes();
        notes.sort_by(|a, b| {
            let ord = match args.sort_by {
                SortField::Label => a.label.cmp(&b.label),
                SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            }
            .then(a.id.cmp(&b.id));
            match args.sort_direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });

        let page: Vec<Note> = notes
            .into_iter()
            .skip(args.offset as usize)
            .take(if args.limit == 0 { usize::MAX } else { args.limit as usize })
            .collect();

        if page.is_empty() {
            return Err(NoteError::NotFound);
        }
        Ok(page)
    }

    async fn count(&self, ctx: &Context) -> Result<u64, NoteError> {
        self.calls.lock().unwrap().count += 1;
        ctx.check()?;
        self.injected(|f| f.count, "count notes")?;

        if let Some(count) = *self.count_override.lock().unwrap() {
            return Ok(count);
        }
        Ok(self.notes.lock().unwrap().len() as u64)
    }
}
