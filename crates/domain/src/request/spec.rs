//! Request specification type

use std::time::Duration;

use url::Url;

use super::{Headers, Payload};
use crate::error::DomainResult;

/// A fully resolved POST request, ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRequest {
    /// Target URL
    pub url: Url,
    /// HTTP headers, sent in order
    pub headers: Headers,
    /// Raw request body
    pub body: Vec<u8>,
    /// Optional per-request timeout
    pub timeout: Option<Duration>,
}

impl PostRequest {
    /// Creates a request with the given body and no headers.
    #[must_use]
    pub const fn new(url: Url, body: Vec<u8>) -> Self {
        Self {
            url,
            headers: Headers::new(),
            body,
            timeout: None,
        }
    }

    /// Creates a request whose body is the JSON form of `payload`.
    ///
    /// No `Content-Type` header is added; the caller decides what to declare.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized.
    pub fn with_payload(url: Url, payload: &Payload) -> DomainResult<Self> {
        Ok(Self::new(url, payload.to_json_bytes()?))
    }

    /// Sets a header (builder pattern).
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }

    /// Sets the timeout (builder pattern).
    #[must_use]
    pub const fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the declared content type, if any.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type")
    }
}
