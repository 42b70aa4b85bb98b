/// Guestbook - a contact form backend running on AWS Lambda.
///
/// This crate implements two Lambda functions behind API Gateway:
/// 1. A submit Lambda that validates a contact form submission, stores it in
///    DynamoDB and emails a notification through SES
/// 2. A list Lambda that returns every stored submission, newest first
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - DynamoDB as the item store
/// - SES for notification emails
/// - Tokio for async runtime
///
/// Clients and configuration are built once per process into a
/// [`api::HandlerContext`] and shared by every invocation.
///
/// # Example
///
/// ```no_run
/// use guestbook::api::{HandlerContext, submit};
/// use guestbook::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     guestbook::setup_logging();
///
///     let config = AppConfig {
///         table_name: "guestbook-messages".to_string(),
///         verified_email: Some("owner@example.com".to_string()),
///     };
///     let ctx = HandlerContext::from_config(config).await;
///
///     let event = serde_json::json!({
///         "httpMethod": "POST",
///         "body": r#"{"name":"Alice","email":"a@example.com","message":"Hello"}"#
///     });
///     let response = submit::handle_submit(&ctx, &event).await;
///     println!("{}", response.status_code);
///     Ok(())
/// }
/// ```
pub mod adapters;
pub mod api;
pub mod core;
pub mod errors;

pub use errors::ContactError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs. The level is INFO, or DEBUG when built with the `debug-logs`
/// feature. Calling it more than once is harmless.
///
/// # Example
///
/// ```
/// guestbook::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::prelude::*;

    let level = if cfg!(feature = "debug-logs") {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(level)
        .with(fmt_layer)
        .try_init();
}
