#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use guestbook::ContactError;
use guestbook::adapters::{ItemStore, Notifier};
use guestbook::api::HandlerContext;
use guestbook::core::config::AppConfig;
use guestbook::core::models::{Message, OutboundEmail};
use serde_json::{Value, json};

pub const SENDER: &str = "owner@example.com";

/// In-memory store that returns items in insertion order.
#[derive(Default)]
pub struct MemoryStore {
    items: Mutex<Vec<Message>>,
    pub fail_put: bool,
    pub fail_scan: bool,
}

impl MemoryStore {
    pub fn with_items(items: Vec<Message>) -> Self {
        Self {
            items: Mutex::new(items),
            ..Self::default()
        }
    }

    pub fn failing_put() -> Self {
        Self {
            fail_put: true,
            ..Self::default()
        }
    }

    pub fn failing_scan() -> Self {
        Self {
            fail_scan: true,
            ..Self::default()
        }
    }

    pub fn items(&self) -> Vec<Message> {
        self.items.lock().expect("poisoned mutex").clone()
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn put(&self, message: &Message) -> Result<(), ContactError> {
        if self.fail_put {
            return Err(ContactError::StoreError("put rejected".to_string()));
        }
        let mut items = self.items.lock().expect("poisoned mutex");
        if items.iter().any(|m| m.id == message.id) {
            return Err(ContactError::StoreError("conditional check failed".to_string()));
        }
        items.push(message.clone());
        Ok(())
    }

    async fn scan_all(&self) -> Result<Vec<Message>, ContactError> {
        if self.fail_scan {
            return Err(ContactError::StoreError("scan rejected".to_string()));
        }
        Ok(self.items())
    }
}

#[derive(Default)]
pub struct CapturingNotifier {
    sent: Mutex<Vec<OutboundEmail>>,
    pub fail: bool,
}

impl CapturingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().expect("poisoned mutex").clone()
    }
}

#[async_trait]
impl Notifier for CapturingNotifier {
    async fn send(&self, email: &OutboundEmail) -> Result<(), ContactError> {
        if self.fail {
            return Err(ContactError::NotifyError("sender not verified".to_string()));
        }
        self.sent.lock().expect("poisoned mutex").push(email.clone());
        Ok(())
    }
}

pub fn config() -> AppConfig {
    AppConfig {
        table_name: "messages".to_string(),
        verified_email: Some(SENDER.to_string()),
    }
}

pub fn context(store: &Arc<MemoryStore>, notifier: &Arc<CapturingNotifier>) -> HandlerContext {
    HandlerContext::new(config(), store.clone(), notifier.clone())
}

pub fn post(body: &Value) -> Value {
    json!({ "httpMethod": "POST", "body": body.to_string() })
}

pub fn get() -> Value {
    json!({ "requestContext": { "http": { "method": "GET" } } })
}

pub fn stored(id: &str, created_at: &str) -> Message {
    Message {
        id: id.to_string(),
        name: format!("name-{id}"),
        email: format!("{id}@example.com"),
        message: format!("message from {id}"),
        created_at: created_at.to_string(),
        ..Message::default()
    }
}

pub fn assert_cors(headers: &std::collections::BTreeMap<String, String>, methods: &str) {
    assert_eq!(headers["Access-Control-Allow-Origin"], "*");
    assert_eq!(headers["Access-Control-Allow-Headers"], "Content-Type");
    assert_eq!(headers["Access-Control-Allow-Methods"], methods);
}
