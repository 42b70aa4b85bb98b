//! List handler: every stored message, newest first.
//!
//! The whole table is read on each call. There is no size bound.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{debug, error, info};

use super::context::HandlerContext;
use super::request;
use super::response::{ApiResponse, LIST_METHODS};
use crate::core::models::Message;

/// Lambda entry point for the list function.
///
/// # Errors
///
/// Never fails; a store error is turned into a 500 response.
#[tracing::instrument(level = "info", skip(ctx, event), fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    ctx: &HandlerContext,
    event: LambdaEvent<Value>,
) -> Result<ApiResponse, Error> {
    Ok(handle_list(ctx, &event.payload).await)
}

pub async fn handle_list(ctx: &HandlerContext, event: &Value) -> ApiResponse {
    debug!("Received event: {}", event);

    if request::is_preflight(event) {
        return ApiResponse::preflight(LIST_METHODS);
    }

    match ctx.store.scan_all().await {
        Ok(mut messages) => {
            sort_newest_first(&mut messages);
            info!("Found {} items.", messages.len());
            ApiResponse::json(200, LIST_METHODS, &messages)
        }
        Err(e) => {
            error!(kind = e.kind(), "Error: {}", e);
            ApiResponse::generic_error(LIST_METHODS)
        }
    }
}

/// Descending by `createdAt`. The sort is stable, so ties keep store order.
pub fn sort_newest_first(messages: &mut [Message]) {
    messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
