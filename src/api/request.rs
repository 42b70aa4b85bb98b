use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use serde_json::Value;

use crate::core::models::ContactSubmission;
use crate::errors::ContactError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method from either API Gateway payload format.
pub fn http_method(event: &Value) -> Option<&str> {
    v_str(event, &["requestContext", "http", "method"]).or_else(|| v_str(event, &["httpMethod"]))
}

pub fn is_preflight(event: &Value) -> bool {
    http_method(event).is_some_and(|m| m.eq_ignore_ascii_case("OPTIONS"))
}

/// Returns the request body as text.
///
/// # Errors
///
/// Returns a parse error if the body is absent or cannot be decoded.
pub fn extract_body(event: &Value) -> Result<String, ContactError> {
    let Some(body) = event.get("body") else {
        return Err(ContactError::ParseError("missing body".to_string()));
    };

    match body {
        Value::String(text) => {
            let encoded = event
                .get("isBase64Encoded")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            if encoded {
                let bytes = STANDARD
                    .decode(text)
                    .map_err(|e| ContactError::ParseError(format!("invalid base64 body: {e}")))?;
                String::from_utf8(bytes)
                    .map_err(|e| ContactError::ParseError(format!("body is not UTF-8: {e}")))
            } else {
                Ok(text.clone())
            }
        }
        Value::Object(_) => Ok(body.to_string()),
        Value::Null => Err(ContactError::ParseError("missing body".to_string())),
        _ => Err(ContactError::ParseError(
            "body must be a JSON object".to_string(),
        )),
    }
}

#[derive(Debug, Default, Deserialize)]
struct SubmissionPayload {
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
}

/// Decodes and validates a submission body. Values are kept verbatim; a
/// field that is empty after trimming counts as missing.
///
/// # Errors
///
/// Returns a parse error for malformed JSON and a validation error naming
/// every missing field.
pub fn parse_submission(body: &str) -> Result<ContactSubmission, ContactError> {
    let payload: SubmissionPayload = serde_json::from_str(body)?;

    let present = |field: Option<String>| field.filter(|v| !v.trim().is_empty());
    let (name, email, message) = (
        present(payload.name),
        present(payload.email),
        present(payload.message),
    );

    match (name, email, message) {
        (Some(name), Some(email), Some(message)) => Ok(ContactSubmission {
            name,
            email,
            message,
        }),
        (name, email, message) => {
            let missing: Vec<&str> = [
                ("name", name.is_none()),
                ("email", email.is_none()),
                ("message", message.is_none()),
            ]
            .into_iter()
            .filter_map(|(field, absent)| absent.then_some(field))
            .collect();
            Err(ContactError::ValidationError(missing.join(", ")))
        }
    }
}
