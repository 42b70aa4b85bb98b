/// Messaging adapters for outbound notifications.
pub mod ses;

use async_trait::async_trait;

use crate::core::models::OutboundEmail;
use crate::errors::ContactError;

pub use ses::SesNotifier;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), ContactError>;
}
