//! One action per note use case, each a thin layer over a [`NoteStore`].

mod create;
mod delete;
mod get_by_id;
mod list;
mod update;

use std::sync::Arc;

pub use create::CreateAction;
pub use delete::DeleteAction;
pub use get_by_id::GetByIdAction;
pub use list::ListAction;
pub use update::UpdateAction;

use super::store::NoteStore;

/// All note actions built over one shared store
#[derive(Clone)]
pub struct NoteActions {
    pub create: CreateAction,
    pub get_by_id: GetByIdAction,
    pub update: UpdateAction,
    pub delete: DeleteAction,
    pub list: ListAction,
}

impl NoteActions {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self {
            create: CreateAction::new(Arc::clone(&store)),
            get_by_id: GetByIdAction::new(Arc::clone(&store)),
            update: UpdateAction::new(Arc::clone(&store)),
            delete: DeleteAction::new(Arc::clone(&store)),
            list: ListAction::new(store),
        }
    }
}
