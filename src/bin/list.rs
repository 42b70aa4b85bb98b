use std::sync::Arc;

use guestbook::api::{HandlerContext, list};
use guestbook::core::config::AppConfig;
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    guestbook::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    let ctx = Arc::new(HandlerContext::from_config(config).await);
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let ctx = Arc::clone(&ctx);
        async move { list::function_handler(&ctx, event).await }
    }))
    .await
}
