/// Persistence adapters for stored messages.
///
/// This module contains:
/// - The `ItemStore` interface the handlers depend on
/// - The DynamoDB implementation and its attribute mapping
pub mod attributes;
pub mod dynamo;

use async_trait::async_trait;

use crate::core::models::Message;
use crate::errors::ContactError;

pub use dynamo::DynamoItemStore;

#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Inserts a new message. Never overwrites an existing item.
    async fn put(&self, message: &Message) -> Result<(), ContactError>;

    /// Reads every stored message, in no particular order.
    async fn scan_all(&self) -> Result<Vec<Message>, ContactError>;
}
