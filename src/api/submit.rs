//! Submit handler: validate, store, then notify.
//!
//! Any failure, whether bad input or an infrastructure error, produces the
//! same generic 500 response. The error is logged with its class so the two
//! can be told apart in the logs. If the store write succeeds and the send
//! fails, the message stays stored.

use chrono::Utc;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{debug, error, info};

use super::context::HandlerContext;
use super::request;
use super::response::{ApiResponse, SUBMIT_METHODS, SUBMIT_SUCCESS_MESSAGE};
use crate::core::models::Message;
use crate::core::notification::build_notification;
use crate::errors::ContactError;

/// Lambda entry point for the submit function.
///
/// # Errors
///
/// Never fails; every error is turned into a 500 response.
#[tracing::instrument(level = "info", skip(ctx, event), fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    ctx: &HandlerContext,
    event: LambdaEvent<Value>,
) -> Result<ApiResponse, Error> {
    Ok(handle_submit(ctx, &event.payload).await)
}

pub async fn handle_submit(ctx: &HandlerContext, event: &Value) -> ApiResponse {
    debug!("Received event: {}", event);

    if request::is_preflight(event) {
        return ApiResponse::preflight(SUBMIT_METHODS);
    }

    match submit(ctx, event).await {
        Ok(message) => {
            info!(id = %message.id, "Submission stored and notification sent");
            ApiResponse::message(200, SUBMIT_METHODS, SUBMIT_SUCCESS_MESSAGE)
        }
        Err(e) => {
            error!(kind = e.kind(), validation = e.is_validation(), "Error: {}", e);
            ApiResponse::generic_error(SUBMIT_METHODS)
        }
    }
}

async fn submit(ctx: &HandlerContext, event: &Value) -> Result<Message, ContactError> {
    let body = request::extract_body(event)?;
    let submission = request::parse_submission(&body)?;
    let sender = ctx.config.sender_address()?;

    let message = Message::create(submission, Utc::now());
    ctx.store.put(&message).await?;
    info!(id = %message.id, "Saved message to item store");

    let email = build_notification(&message, sender);
    ctx.notifier.send(&email).await?;
    info!(id = %message.id, "Sent email notification");

    Ok(message)
}
