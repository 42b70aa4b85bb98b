use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A stored contact form submission.
///
/// Attributes the store holds beyond the five known fields are kept in
/// `extra` and serialized alongside them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Message {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Message {
    /// Creates a new message with a fresh id, stamped at `now`.
    #[must_use]
    pub fn create(submission: ContactSubmission, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: submission.name,
            email: submission.email,
            message: submission.message,
            created_at: format_timestamp(now),
            extra: Map::new(),
        }
    }
}

/// RFC 3339 in UTC with fixed microsecond precision, so string order
/// matches chronological order.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// A validated submission: all three fields present and non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub body_text: String,
}
