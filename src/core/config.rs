use std::env;

use crate::errors::ContactError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub table_name: String,
    pub verified_email: Option<String>,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns an error if `TABLE_NAME` is unset or blank.
    pub fn from_env() -> Result<Self, ContactError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if `TABLE_NAME` is unset or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ContactError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            table_name: non_blank("TABLE_NAME")
                .ok_or_else(|| ContactError::ConfigError("TABLE_NAME is not set".to_string()))?,
            verified_email: non_blank("VERIFIED_EMAIL"),
        })
    }

    /// The address notifications are sent from and to.
    ///
    /// # Errors
    ///
    /// Returns an error if `VERIFIED_EMAIL` was not configured.
    pub fn sender_address(&self) -> Result<&str, ContactError> {
        self.verified_email
            .as_deref()
            .ok_or_else(|| ContactError::ConfigError("VERIFIED_EMAIL is not set".to_string()))
    }
}
