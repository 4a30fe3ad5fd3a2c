//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while building requests or scenarios.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The payload could not be turned into a request body.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// A scenario definition is unusable.
    #[error("invalid scenario {id}: {reason}")]
    InvalidScenario {
        /// Scenario identifier.
        id: u32,
        /// What is wrong with it.
        reason: String,
    },
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
