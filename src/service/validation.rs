//! Request validation: presence and length, checked before the service runs.

use crate::error::AppError;
use crate::model::{NoteContent, NoteRequest};

pub const TITLE_MAX: usize = 10;
pub const BODY_MAX: usize = 100;

pub struct RequestValidator;

impl RequestValidator {
    /// Check presence and length on the trimmed fields, reporting the first
    /// failing field (title before body, required before length). Returns the
    /// trimmed content on success.
    pub fn validate(req: &NoteRequest) -> Result<NoteContent, AppError> {
        let title = validate_field("Title", req.title.as_deref(), TITLE_MAX)?;
        let body = validate_field("Body", req.body.as_deref(), BODY_MAX)?;
        Ok(NoteContent { title, body })
    }
}

fn validate_field(name: &str, value: Option<&str>, max: usize) -> Result<String, AppError> {
    let trimmed = value.map(str::trim).unwrap_or("");
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{} is required", name)));
    }
    // Character count, not byte length.
    if trimmed.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            name, max
        )));
    }
    Ok(trimmed.to_owned())
}
