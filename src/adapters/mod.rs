/// Adapter layer for the external collaborators.
///
/// This module contains:
/// - Persistence adapters (the item store and its DynamoDB implementation)
/// - Messaging adapters (the notifier and its SES implementation)
pub mod messaging;
pub mod persistence;

pub use messaging::{Notifier, SesNotifier};
pub use persistence::{DynamoItemStore, ItemStore};
