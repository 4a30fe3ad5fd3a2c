//! Harness configuration.
//!
//! Built once before any scenario runs and never mutated afterwards.

use std::time::Duration;

use probe_domain::{Credential, DomainError};
use url::Url;

use crate::error::ApplicationResult;

/// Endpoint, default credential and request defaults for the harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    endpoint: Url,
    credential: Credential,
    content_type: String,
    timeout: Option<Duration>,
}

impl HarnessConfig {
    /// Creates a configuration for the given create-user endpoint.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUrl` if the endpoint is not http(s).
    pub fn new(endpoint: Url, credential: Credential) -> ApplicationResult<Self> {
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(DomainError::InvalidUrl(format!(
                "URL must start with http:// or https://: {endpoint}"
            ))
            .into());
        }

        Ok(Self {
            endpoint,
            credential,
            content_type: mime::APPLICATION_JSON.to_string(),
            timeout: None,
        })
    }

    /// Parses the endpoint from a string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUrl` if the string is not an absolute
    /// http(s) URL.
    pub fn parse(endpoint: &str, credential: Credential) -> ApplicationResult<Self> {
        let trimmed = endpoint.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidUrl("URL is required".to_string()).into());
        }
        let url = Url::parse(trimmed)
            .map_err(|e| DomainError::InvalidUrl(format!("{e}: {trimmed}")))?;
        Self::new(url, credential)
    }

    /// Sets a per-request timeout (builder pattern).
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The create-user endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The credential used when a step does not override it.
    #[must_use]
    pub const fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Content-Type declared when a step does not override it.
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Per-request timeout, if any.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
