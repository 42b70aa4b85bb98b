use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Missing required fields: {0}")]
    ValidationError(String),

    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Failed to access item store: {0}")]
    StoreError(String),

    #[error("Failed to send notification: {0}")]
    NotifyError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl ContactError {
    /// True when the caller sent something unusable, as opposed to an
    /// infrastructure failure. Both still produce the same generic response.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::ParseError(_))
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ValidationError(_) => "validation",
            Self::ParseError(_) => "parse",
            Self::StoreError(_) => "store",
            Self::NotifyError(_) => "notify",
            Self::ConfigError(_) => "config",
        }
    }
}

impl From<serde_json::Error> for ContactError {
    fn from(error: serde_json::Error) -> Self {
        ContactError::ParseError(error.to_string())
    }
}
