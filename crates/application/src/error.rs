//! Application error types

use probe_domain::DomainError;
use thiserror::Error;

use crate::ports::TransportError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// A request got no response at all.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
