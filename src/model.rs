//! Note domain types and request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored note. The store owns the canonical copy; everything handed out is
/// an independent clone.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Incoming payload for create and update. Fields deserialize as options so a
/// missing key surfaces as a validation failure, not a deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// Validated, trimmed note fields ready for the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteContent {
    pub title: String,
    pub body: String,
}
