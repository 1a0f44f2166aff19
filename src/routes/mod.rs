//! Router assembly.

mod common;
mod notes;

pub use common::common_routes;
pub use notes::note_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

/// Payloads are small JSON bodies; anything larger is rejected before parsing.
const BODY_LIMIT_BYTES: usize = 16 * 1024;

/// Full application router: common routes plus note CRUD.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(note_routes(state))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
}
