// ── Knowledge-base document upload ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Ingestion state of an uploaded document.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DocumentStatus {
    Completed,
    Processing,
    Failed,
    Pending,
}

/// A document uploaded to feed the tourism-AI knowledge base.
///
/// Produced by the upload pipeline; read-only here. `size` is the
/// human-formatted string the console displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    pub id: String,
    pub file_name: String,
    pub status: DocumentStatus,
    pub size: String,
    pub uploaded_at: DateTime<Utc>,
}
