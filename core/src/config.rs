//! Client configuration: where the service lives and which token to send.

use std::fmt;

use crate::error::ApiError;

pub const BASE_URL_VAR: &str = "ENSEK_BASE_URL";
pub const TOKEN_VAR: &str = "ENSEK_TOKEN";
pub const DEFAULT_BASE_URL: &str = "https://qacandidatetest.ensek.io";

/// Base URL and bearer token, fixed for the lifetime of a test run.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: String,
}

impl ClientConfig {
    pub fn new(base_url: &str, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Read `ENSEK_BASE_URL` (optional) and `ENSEK_TOKEN` (required).
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = non_blank(lookup(BASE_URL_VAR))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::Config(format!(
                "{BASE_URL_VAR} must be an http(s) URL, got {base_url:?}"
            )));
        }

        let token = non_blank(lookup(TOKEN_VAR))
            .ok_or_else(|| ApiError::Config(format!("{TOKEN_VAR} must be set")))?;

        Ok(Self::new(&base_url, token))
    }
}

/// `ENSEK_BASE_URL` when it is set to something other than whitespace.
pub fn base_url_override() -> Option<String> {
    non_blank(std::env::var(BASE_URL_VAR).ok())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}
