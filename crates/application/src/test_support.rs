//! Scripted transport shared by the unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use probe_domain::{Credential, Headers, Outcome, PostRequest};

use crate::config::HarnessConfig;
use crate::ports::{HttpTransport, TransportError, TransportFuture};

pub fn config() -> HarnessConfig {
    HarnessConfig::parse(
        "https://api.example.com/create/user",
        Credential::new("RA2211003010123"),
    )
    .unwrap()
}

pub fn outcome(status: u16) -> Outcome {
    Outcome::new(
        status,
        Headers::new(),
        br#"{"message":"scripted"}"#,
        Duration::from_millis(10),
    )
}

/// Replies with scripted results in order and records every request.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Result<Outcome, TransportError>>>,
    requests: Mutex<Vec<PostRequest>>,
}

impl MockTransport {
    pub fn new(replies: impl IntoIterator<Item = Result<Outcome, TransportError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn statuses(codes: &[u16]) -> Self {
        Self::new(codes.iter().map(|&code| Ok(outcome(code))))
    }

    pub fn requests(&self) -> Vec<PostRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpTransport for MockTransport {
    fn send(&self, request: &PostRequest) -> TransportFuture<'_> {
        self.requests.lock().unwrap().push(request.clone());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no scripted reply".to_string())));
        Box::pin(async move { reply })
    }
}
