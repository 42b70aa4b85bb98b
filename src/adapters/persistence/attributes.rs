//! Conversion between DynamoDB attribute values and plain JSON.
//!
//! DynamoDB carries numbers as decimal strings on the wire. Reading an item
//! turns them back into JSON numbers so the list response holds ordinary
//! numeric values.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Number, Value};

use crate::core::models::Message;
use crate::errors::ContactError;

pub type Item = HashMap<String, AttributeValue>;

/// Item written for a new message. Only the five known fields are stored.
#[must_use]
pub fn message_to_item(message: &Message) -> Item {
    HashMap::from([
        ("id".to_string(), AttributeValue::S(message.id.clone())),
        ("name".to_string(), AttributeValue::S(message.name.clone())),
        ("email".to_string(), AttributeValue::S(message.email.clone())),
        ("message".to_string(), AttributeValue::S(message.message.clone())),
        (
            "createdAt".to_string(),
            AttributeValue::S(message.created_at.clone()),
        ),
    ])
}

/// # Errors
///
/// Returns an error if a known field holds a non-string value.
pub fn item_to_message(item: Item) -> Result<Message, ContactError> {
    let object: Map<String, Value> = item
        .into_iter()
        .map(|(key, value)| (key, attribute_to_json(value)))
        .collect();

    serde_json::from_value(Value::Object(object))
        .map_err(|e| ContactError::StoreError(format!("malformed item: {e}")))
}

#[must_use]
pub fn attribute_to_json(value: AttributeValue) -> Value {
    match value {
        AttributeValue::S(s) => Value::String(s),
        AttributeValue::N(n) => number_to_json(&n),
        AttributeValue::Bool(b) => Value::Bool(b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::B(blob) => Value::String(STANDARD.encode(blob.into_inner())),
        AttributeValue::Ss(list) => Value::Array(list.into_iter().map(Value::String).collect()),
        AttributeValue::Ns(list) => Value::Array(
            list.iter()
                .map(String::as_str)
                .map(number_to_json)
                .collect(),
        ),
        AttributeValue::Bs(list) => Value::Array(
            list.into_iter()
                .map(|blob| Value::String(STANDARD.encode(blob.into_inner())))
                .collect(),
        ),
        AttributeValue::L(list) => Value::Array(list.into_iter().map(attribute_to_json).collect()),
        AttributeValue::M(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, attribute_to_json(value)))
                .collect(),
        ),
        _ => Value::Null,
    }
}

/// Integral values stay integers; everything else becomes a float. A string
/// that is not a finite number is passed through unchanged.
#[must_use]
pub fn number_to_json(raw: &str) -> Value {
    let raw = raw.trim();
    if let Ok(int) = raw.parse::<i64>() {
        return Value::Number(int.into());
    }
    if let Ok(uint) = raw.parse::<u64>() {
        return Value::Number(uint.into());
    }
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map_or_else(|| Value::String(raw.to_string()), Value::Number)
}
