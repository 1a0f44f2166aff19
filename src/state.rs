//! Shared application state for all routes.

use crate::service::NoteService;

#[derive(Clone)]
pub struct AppState {
    pub service: NoteService,
}
