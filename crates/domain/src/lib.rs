//! Probe Domain - Core types for the create-user contract probe
//!
//! This crate defines payloads, credentials, requests, outcomes and the
//! declarative scenario table. All types here are pure Rust with no I/O.

pub mod error;
pub mod request;
pub mod response;
pub mod scenario;
pub mod testing;

pub use error::{DomainError, DomainResult};
pub use request::{Credential, CredentialChoice, Header, Headers, Payload, PostRequest};
pub use response::{Outcome, ResponseBody, StatusCode};
pub use scenario::{SUITE_NAME, Scenario, Step, select, standard_scenarios, validate_table};
pub use testing::{ScenarioResult, ScenarioVerdict, StatusExpectation, SuiteReport};
