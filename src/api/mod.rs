//! Lambda handlers and request/response processing

pub mod context;
pub mod list;
pub mod request;
pub mod response;
pub mod submit;

pub use context::HandlerContext;
pub use response::ApiResponse;
