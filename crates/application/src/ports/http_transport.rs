//! HTTP transport port

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use probe_domain::{Outcome, PostRequest};
use thiserror::Error;

/// Boxed future returned by [`HttpTransport::send`].
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Outcome, TransportError>> + Send + 'a>>;

/// Failures where no HTTP response was received.
///
/// A response with an error status is never a `TransportError`; it is an
/// `Outcome` like any other.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The request did not complete within the configured timeout.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// Timeout that elapsed.
        timeout_ms: u64,
    },

    /// The host name could not be resolved.
    #[error("could not resolve host '{host}': {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Underlying message.
        message: String,
    },

    /// The server actively refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// The connection failed for another reason (TLS, reset, ...).
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The request could not be built (e.g. a header value HTTP rejects).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The response started but its body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// Anything else.
    #[error("{0}")]
    Other(String),
}

/// Port for sending a POST request and collecting whatever comes back.
///
/// Implementations must return `Ok` for every response received, whatever its
/// status code, and `Err` only when no response was received.
pub trait HttpTransport: Send + Sync {
    /// Sends the request once. No retries.
    fn send(&self, request: &PostRequest) -> TransportFuture<'_>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    fn send(&self, request: &PostRequest) -> TransportFuture<'_> {
        (**self).send(request)
    }
}
