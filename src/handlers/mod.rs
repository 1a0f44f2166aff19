//! HTTP handlers for note CRUD.

pub mod notes;
pub use notes::*;
