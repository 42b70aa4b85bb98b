use async_trait::async_trait;
use aws_sdk_ses::Client as SesClient;
use aws_sdk_ses::error::DisplayErrorContext;
use aws_sdk_ses::types::{Body, Content, Destination, Message as SesMessage};

use super::Notifier;
use crate::core::models::OutboundEmail;
use crate::errors::ContactError;

#[derive(Debug, Clone)]
pub struct SesNotifier {
    client: SesClient,
}

impl SesNotifier {
    #[must_use]
    pub fn new(client: SesClient) -> Self {
        Self { client }
    }
}

fn text_content(data: &str) -> Result<Content, ContactError> {
    Content::builder()
        .data(data)
        .charset("UTF-8")
        .build()
        .map_err(|e| ContactError::NotifyError(format!("ses content: {e}")))
}

#[async_trait]
impl Notifier for SesNotifier {
    async fn send(&self, email: &OutboundEmail) -> Result<(), ContactError> {
        let destination = Destination::builder()
            .set_to_addresses(Some(email.to.clone()))
            .build();
        let message = SesMessage::builder()
            .subject(text_content(&email.subject)?)
            .body(Body::builder().text(text_content(&email.body_text)?).build())
            .build();

        self.client
            .send_email()
            .source(&email.from)
            .destination(destination)
            .message(message)
            .send()
            .await
            .map_err(|e| {
                ContactError::NotifyError(format!("ses send_email: {}", DisplayErrorContext(&e)))
            })?;
        Ok(())
    }
}
