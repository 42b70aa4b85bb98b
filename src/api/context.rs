use std::sync::Arc;

use crate::adapters::{DynamoItemStore, ItemStore, Notifier, SesNotifier};
use crate::core::config::AppConfig;

/// Everything a handler needs, built once per process and shared across
/// invocations.
#[derive(Clone)]
pub struct HandlerContext {
    pub config: AppConfig,
    pub store: Arc<dyn ItemStore>,
    pub notifier: Arc<dyn Notifier>,
}

impl HandlerContext {
    #[must_use]
    pub fn new(config: AppConfig, store: Arc<dyn ItemStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            config,
            store,
            notifier,
        }
    }

    /// Builds DynamoDB and SES clients from the standard AWS config chain.
    pub async fn from_config(config: AppConfig) -> Self {
        let shared = aws_config::from_env().load().await;
        let store = DynamoItemStore::new(
            aws_sdk_dynamodb::Client::new(&shared),
            config.table_name.clone(),
        );
        let notifier = SesNotifier::new(aws_sdk_ses::Client::new(&shared));

        Self::new(config, Arc::new(store), Arc::new(notifier))
    }
}
