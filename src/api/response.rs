//! Response builders shared by both handlers.
//!
//! Every response carries the same CORS header set; handlers differ only in
//! the methods they declare.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

/// Methods declared by the submit handler.
pub const SUBMIT_METHODS: &str = "POST,OPTIONS";
/// Methods declared by the list handler.
pub const LIST_METHODS: &str = "GET,OPTIONS";

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Form submitted successfully!";
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// API Gateway proxy response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

#[must_use]
pub fn cors_headers(methods: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        (
            "Access-Control-Allow-Headers".to_string(),
            "Content-Type".to_string(),
        ),
        ("Access-Control-Allow-Methods".to_string(), methods.to_string()),
        ("Content-Type".to_string(), "application/json".to_string()),
    ])
}

impl ApiResponse {
    /// Serializes `payload` as the body. Falls back to the generic error if
    /// serialization fails.
    #[must_use]
    pub fn json(status_code: u16, methods: &str, payload: &impl Serialize) -> Self {
        match serde_json::to_string(payload) {
            Ok(body) => Self {
                status_code,
                headers: cors_headers(methods),
                body,
            },
            Err(e) => {
                error!("Failed to serialize response body: {}", e);
                Self::generic_error(methods)
            }
        }
    }

    /// Returns a `{"message": ...}` body.
    #[must_use]
    pub fn message(status_code: u16, methods: &str, text: &str) -> Self {
        Self {
            status_code,
            headers: cors_headers(methods),
            body: json!({ "message": text }).to_string(),
        }
    }

    #[must_use]
    pub fn generic_error(methods: &str) -> Self {
        Self::message(500, methods, GENERIC_ERROR_MESSAGE)
    }

    /// Answers a CORS preflight.
    #[must_use]
    pub fn preflight(methods: &str) -> Self {
        Self {
            status_code: 200,
            headers: cors_headers(methods),
            body: String::new(),
        }
    }
}
