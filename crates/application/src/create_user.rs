//! Create User Use Case
//!
//! The request harness: builds one POST from a scenario step, sends it, and
//! normalizes whatever happens into an [`Attempt`].

use std::sync::Arc;

use probe_domain::request::ROLL_NUMBER_HEADER;
use probe_domain::{Credential, DomainResult, Outcome, Payload, PostRequest, StatusCode, Step};
use tracing::{debug, info, warn};

use crate::config::HarnessConfig;
use crate::ports::{HttpTransport, TransportError};

/// What happened to one request.
///
/// Error statuses are `Responded`, exactly like successes; only a missing
/// response is `TransportFailed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    /// The service answered.
    Responded(Outcome),
    /// No response was received.
    TransportFailed(TransportError),
}

impl Attempt {
    /// Returns the status code if the service answered.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Responded(outcome) => Some(outcome.status),
            Self::TransportFailed(_) => None,
        }
    }

    /// Converts into a `Result` so a transport failure can be propagated with `?`.
    ///
    /// # Errors
    ///
    /// Returns the transport error if no response was received.
    pub fn into_outcome(self) -> Result<Outcome, TransportError> {
        match self {
            Self::Responded(outcome) => Ok(outcome),
            Self::TransportFailed(error) => Err(error),
        }
    }
}

impl From<Result<Outcome, TransportError>> for Attempt {
    fn from(result: Result<Outcome, TransportError>) -> Self {
        match result {
            Ok(outcome) => Self::Responded(outcome),
            Err(error) => Self::TransportFailed(error),
        }
    }
}

/// Use case for calling the create-user endpoint.
///
/// Holds only the transport and immutable configuration, so it can be shared
/// and called concurrently.
///
/// # Example
///
/// ```ignore
/// let transport = ReqwestTransport::new()?;
/// let harness = CreateUser::new(Arc::new(transport), config);
///
/// let attempt = harness.create(&Payload::user("Test", "User", 9999999999u64, "t@example.com")).await;
/// assert_eq!(attempt.status(), Some(StatusCode::CREATED));
/// ```
pub struct CreateUser<T: HttpTransport> {
    transport: Arc<T>,
    config: Arc<HarnessConfig>,
}

impl<T: HttpTransport> Clone for CreateUser<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            config: Arc::clone(&self.config),
        }
    }
}

impl<T: HttpTransport> CreateUser<T> {
    /// Creates the harness.
    pub fn new(transport: Arc<T>, config: HarnessConfig) -> Self {
        Self {
            transport,
            config: Arc::new(config),
        }
    }

    /// Sends `payload` with the configured credential.
    pub async fn create(&self, payload: &Payload) -> Attempt {
        self.execute(&Step::new(payload.clone())).await
    }

    /// Sends `payload` with an explicit credential (which may be empty).
    pub async fn create_with(&self, payload: &Payload, credential: &Credential) -> Attempt {
        self.execute(&Step::new(payload.clone()).credential(credential.clone()))
            .await
    }

    /// Sends one scenario step.
    pub async fn execute(&self, step: &Step) -> Attempt {
        let request = match self.build_request(step) {
            Ok(request) => request,
            Err(e) => return Attempt::TransportFailed(TransportError::InvalidRequest(e.to_string())),
        };

        let extra: Vec<_> = step.payload.extra_fields().collect();
        debug!(
            url = %request.url,
            content_type = request.content_type(),
            ?extra,
            "sending create-user request"
        );

        let attempt = Attempt::from(self.transport.send(&request).await);
        match &attempt {
            Attempt::Responded(outcome) => {
                info!(
                    status = %outcome.status,
                    elapsed = ?outcome.duration,
                    "create-user responded"
                );
                debug!(
                    content_type = outcome.header("content-type"),
                    body = %outcome.body.pretty(),
                    "response data"
                );
            }
            Attempt::TransportFailed(error) => {
                warn!(%error, "create-user got no response");
            }
        }
        attempt
    }

    /// Builds the wire request for a step.
    ///
    /// The body is always the JSON form of the payload. `Content-Type` is the
    /// step's override or the configured default, and `roll-number` is sent
    /// unless the step omits it.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized.
    pub fn build_request(&self, step: &Step) -> DomainResult<PostRequest> {
        let content_type = step
            .content_type
            .as_deref()
            .unwrap_or_else(|| self.config.content_type());

        let mut request = PostRequest::with_payload(self.config.endpoint().clone(), &step.payload)?
            .header("Content-Type", content_type)
            .timeout(self.config.timeout());

        if let Some(credential) = step.credential.resolve(self.config.credential()) {
            request = request.header(ROLL_NUMBER_HEADER, credential.as_str());
        }

        Ok(request)
    }
}
