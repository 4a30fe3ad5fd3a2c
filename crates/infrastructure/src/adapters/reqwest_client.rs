//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `HttpTransport` port. Every response is
//! returned as an `Outcome` whatever its status; only failures where no
//! response arrived become `TransportError`.

use std::time::{Duration, Instant};

use probe_application::ports::{HttpTransport, TransportError, TransportFuture};
use probe_domain::{Header, Headers, Outcome, PostRequest};
use reqwest::Client;

/// Maximum number of redirects followed before giving up.
const MAX_REDIRECTS: usize = 10;

/// HTTP transport backed by `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a new transport with default settings.
    ///
    /// Default configuration:
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: "user-probe/<version>"
    /// - No client-wide timeout (set per request through the harness)
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("user-probe/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Maps reqwest errors to `TransportError`.
    fn map_error(error: &reqwest::Error, timeout: Option<Duration>) -> TransportError {
        if error.is_builder() {
            return TransportError::InvalidRequest(error.to_string());
        }

        if error.is_timeout() {
            return TransportError::Timeout {
                timeout_ms: timeout.map_or(0, |t| u64::try_from(t.as_millis()).unwrap_or(u64::MAX)),
            };
        }

        if error.is_connect() {
            let message = format!("{error:?}").to_lowercase();
            let host = error
                .url()
                .and_then(|u| u.host_str().map(str::to_string))
                .unwrap_or_else(|| "unknown".to_string());
            if message.contains("dns") || message.contains("resolve") {
                return TransportError::DnsError {
                    host,
                    message: error.to_string(),
                };
            }
            if message.contains("refused") {
                return TransportError::ConnectionRefused {
                    host,
                    port: error
                        .url()
                        .and_then(reqwest::Url::port_or_known_default)
                        .unwrap_or(80),
                };
            }
            return TransportError::ConnectionFailed(error.to_string());
        }

        if error.is_redirect() {
            return TransportError::Other(format!("too many redirects (max {MAX_REDIRECTS})"));
        }

        TransportError::Other(error.to_string())
    }

    fn collect_headers(headers: &reqwest::header::HeaderMap) -> Headers {
        headers
            .iter()
            .map(|(name, value)| Header::new(name.as_str(), value.to_str().unwrap_or("<binary>")))
            .collect()
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: &PostRequest) -> TransportFuture<'_> {
        let url = request.url.clone();
        let headers = request.headers.clone();
        let body = request.body.clone();
        let timeout = request.timeout;

        Box::pin(async move {
            let start = Instant::now();

            let mut builder = self.client.post(url);
            for header in headers.iter() {
                builder = builder.header(&header.name, &header.value);
            }
            if let Some(timeout) = timeout {
                builder = builder.timeout(timeout);
            }

            let response = builder
                .body(body)
                .send()
                .await
                .map_err(|e| Self::map_error(&e, timeout))?;

            let status = response.status().as_u16();
            let response_headers = Self::collect_headers(response.headers());
            let body_bytes = response
                .bytes()
                .await
                .map_err(|e| TransportError::Body(e.to_string()))?;

            Ok(Outcome::new(
                status,
                response_headers,
                &body_bytes,
                start.elapsed(),
            ))
        })
    }
}
