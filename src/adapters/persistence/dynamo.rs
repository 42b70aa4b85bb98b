use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use tracing::debug;

use super::ItemStore;
use super::attributes::{item_to_message, message_to_item};
use crate::core::models::Message;
use crate::errors::ContactError;

/// Rejects the write if an item with the same id already exists.
const INSERT_ONLY: &str = "attribute_not_exists(id)";

#[derive(Debug, Clone)]
pub struct DynamoItemStore {
    client: DynamoClient,
    table_name: String,
}

impl DynamoItemStore {
    #[must_use]
    pub fn new(client: DynamoClient, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl ItemStore for DynamoItemStore {
    async fn put(&self, message: &Message) -> Result<(), ContactError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(message_to_item(message)))
            .condition_expression(INSERT_ONLY)
            .send()
            .await
            .map_err(|e| {
                ContactError::StoreError(format!("dynamodb put_item: {}", DisplayErrorContext(&e)))
            })?;
        Ok(())
    }

    async fn scan_all(&self) -> Result<Vec<Message>, ContactError> {
        let mut messages = Vec::new();
        let mut start_key = None;

        // One logical read: follow LastEvaluatedKey until the table is exhausted.
        loop {
            let page = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|e| {
                    ContactError::StoreError(format!("dynamodb scan: {}", DisplayErrorContext(&e)))
                })?;

            let items = page.items.unwrap_or_default();
            debug!(count = items.len(), "Scanned page");
            for item in items {
                messages.push(item_to_message(item)?);
            }

            match page.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(messages)
    }
}
