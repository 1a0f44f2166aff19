//! Note CRUD handlers: create, list, read, update, delete.

use crate::error::{AppError, ErrorResponse};
use crate::model::{Note, NoteRequest};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, OriginalUri, Path, State},
    http::StatusCode,
    Json,
};

fn parse_id(id_str: &str) -> Result<u64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid note id '{}'", id_str)))
}

pub async fn create(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<NoteRequest>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, ErrorResponse> {
    let path = uri.path();
    let Json(req) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()).at(path))?;
    let content = RequestValidator::validate(&req).map_err(|e| e.at(path))?;
    let note = state.service.create(content);
    Ok((StatusCode::CREATED, Json(note)))
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<Note>> {
    Json(state.service.all())
}

pub async fn read(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, ErrorResponse> {
    let path = uri.path();
    let id = parse_id(&id_str).map_err(|e| e.at(path))?;
    let note = state.service.one(id).map_err(|e| e.at(path))?;
    Ok((StatusCode::OK, Json(note)))
}

pub async fn update(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id_str): Path<String>,
    payload: Result<Json<NoteRequest>, JsonRejection>,
) -> Result<impl axum::response::IntoResponse, ErrorResponse> {
    let path = uri.path();
    let id = parse_id(&id_str).map_err(|e| e.at(path))?;
    let Json(req) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()).at(path))?;
    let content = RequestValidator::validate(&req).map_err(|e| e.at(path))?;
    let note = state.service.update(id, content).map_err(|e| e.at(path))?;
    Ok((StatusCode::OK, Json(note)))
}

pub async fn delete(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Path(id_str): Path<String>,
) -> Result<StatusCode, ErrorResponse> {
    let path = uri.path();
    let id = parse_id(&id_str).map_err(|e| e.at(path))?;
    state.service.delete(id).map_err(|e| e.at(path))?;
    Ok(StatusCode::NO_CONTENT)
}
