//! In-memory notes REST service: store, service, and HTTP mapping.

pub mod config;
pub mod error;
pub mod model;
pub mod state;
pub mod store;
pub mod service;
pub mod handlers;
pub mod routes;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError, ErrorResponse};
pub use model::{Note, NoteContent, NoteRequest};
pub use state::AppState;
pub use store::NoteStore;
pub use service::{NoteService, RequestValidator};
pub use routes::{app, common_routes, note_routes};
