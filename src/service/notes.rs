//! Note CRUD over the store, with absence turned into `NotFound`.

use crate::error::AppError;
use crate::model::{Note, NoteContent};
use crate::store::NoteStore;
use std::sync::Arc;

/// The store treats a missing id as a normal value; this layer is where it
/// becomes an error. The store handle is injected once at construction.
#[derive(Clone)]
pub struct NoteService {
    store: Arc<NoteStore>,
}

impl NoteService {
    pub fn new(store: Arc<NoteStore>) -> Self {
        Self { store }
    }

    pub fn create(&self, content: NoteContent) -> Note {
        let note = self.store.save(&content.title, &content.body);
        tracing::debug!(id = note.id, "note created");
        note
    }

    pub fn all(&self) -> Vec<Note> {
        self.store.find_all()
    }

    pub fn one(&self, id: u64) -> Result<Note, AppError> {
        self.store.find_by_id(id).ok_or(AppError::NotFound(id))
    }

    pub fn update(&self, id: u64, content: NoteContent) -> Result<Note, AppError> {
        let note = self
            .store
            .update(id, &content.title, &content.body)
            .ok_or(AppError::NotFound(id))?;
        tracing::debug!(id, "note updated");
        Ok(note)
    }

    pub fn delete(&self, id: u64) -> Result<(), AppError> {
        if !self.store.delete(id) {
            return Err(AppError::NotFound(id));
        }
        tracing::debug!(id, "note deleted");
        Ok(())
    }
}
