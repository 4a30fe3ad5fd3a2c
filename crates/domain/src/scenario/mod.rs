//! Declarative scenario definitions.
//!
//! A scenario is zero or more setup steps whose outcomes are ignored, one
//! asserted step, and the status expectation for that step.

mod catalog;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::request::{Credential, CredentialChoice, Payload};
use crate::testing::StatusExpectation;

pub use catalog::{SUITE_NAME, standard_scenarios};

/// One create-user request as a scenario describes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// JSON body fields.
    pub payload: Payload,
    /// Which credential to send.
    #[serde(default)]
    pub credential: CredentialChoice,
    /// Content-Type override; `None` declares JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl Step {
    /// Creates a step that uses the configured credential and JSON content type.
    #[must_use]
    pub fn new(payload: Payload) -> Self {
        Self {
            payload,
            credential: CredentialChoice::Configured,
            content_type: None,
        }
    }

    /// Sends this exact credential instead of the configured one.
    #[must_use]
    pub fn credential(mut self, credential: impl Into<Credential>) -> Self {
        self.credential = CredentialChoice::Explicit(credential.into());
        self
    }

    /// Leaves the credential header off entirely.
    #[must_use]
    pub fn without_credential(mut self) -> Self {
        self.credential = CredentialChoice::Omitted;
        self
    }

    /// Declares a different Content-Type. The body stays JSON.
    #[must_use]
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

impl From<Payload> for Step {
    fn from(payload: Payload) -> Self {
        Self::new(payload)
    }
}

/// An independent request/assert case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Identifier, unique within a table.
    pub id: u32,
    /// Human-readable name.
    pub name: String,
    /// Requests issued first; their outcomes are not asserted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub setup: Vec<Step>,
    /// The request whose status is asserted.
    pub request: Step,
    /// Expected status for `request`.
    pub expect: StatusExpectation,
}

impl Scenario {
    /// Creates a scenario with no setup steps.
    #[must_use]
    pub fn new(
        id: u32,
        name: impl Into<String>,
        request: impl Into<Step>,
        expect: StatusExpectation,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            setup: Vec::new(),
            request: request.into(),
            expect,
        }
    }

    /// Adds a setup step (builder pattern).
    #[must_use]
    pub fn with_setup(mut self, step: impl Into<Step>) -> Self {
        self.setup.push(step.into());
        self
    }

    /// Checks that the scenario can be run.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidScenario` if the name is blank or a
    /// Content-Type override is blank.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(self.invalid("name must not be empty"));
        }
        let blank_content_type = self
            .setup
            .iter()
            .chain(std::iter::once(&self.request))
            .any(|step| step.content_type.as_deref().is_some_and(|ct| ct.trim().is_empty()));
        if blank_content_type {
            return Err(self.invalid("content type override must not be empty"));
        }
        Ok(())
    }

    fn invalid(&self, reason: &str) -> DomainError {
        DomainError::InvalidScenario {
            id: self.id,
            reason: reason.to_string(),
        }
    }
}

/// Validates every scenario in a table and checks ids are unique.
///
/// # Errors
///
/// Returns the first problem found.
pub fn validate_table(scenarios: &[Scenario]) -> DomainResult<()> {
    let mut seen = HashSet::with_capacity(scenarios.len());
    for scenario in scenarios {
        scenario.validate()?;
        if !seen.insert(scenario.id) {
            return Err(scenario.invalid("duplicate scenario id"));
        }
    }
    Ok(())
}

/// Keeps only the scenarios whose id is listed, preserving table order.
///
/// An empty id list keeps everything.
#[must_use]
pub fn select(scenarios: Vec<Scenario>, ids: &[u32]) -> Vec<Scenario> {
    if ids.is_empty() {
        return scenarios;
    }
    scenarios.into_iter().filter(|s| ids.contains(&s.id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::StatusCode;
    use pretty_assertions::assert_eq;

    fn payload() -> Payload {
        Payload::user("Test", "User", 9_999_999_999_u64, "test.user@example.com")
    }

    #[test]
    fn test_step_builders() {
        let step = Step::new(payload()).credential("1").content_type("application/xml");
        assert_eq!(step.credential, CredentialChoice::Explicit(Credential::new("1")));
        assert_eq!(step.content_type.as_deref(), Some("application/xml"));

        let step = Step::new(payload()).without_credential();
        assert_eq!(step.credential, CredentialChoice::Omitted);
    }

    #[test]
    fn test_validate_rejects_blank_name_and_content_type() {
        let blank = Scenario::new(1, " ", payload(), StatusExpectation::Exact(201));
        assert!(matches!(
            blank.validate(),
            Err(DomainError::InvalidScenario { id: 1, .. })
        ));

        let blank_ct = Scenario::new(
            2,
            "ct",
            Step::new(payload()).content_type(""),
            StatusExpectation::Exact(415),
        );
        assert!(blank_ct.validate().is_err());
    }

    #[test]
    fn test_validate_table_rejects_duplicate_ids() {
        let table = vec![
            Scenario::new(1, "a", payload(), StatusExpectation::exact(StatusCode::CREATED)),
            Scenario::new(1, "b", payload(), StatusExpectation::exact(StatusCode::CREATED)),
        ];
        assert_eq!(
            validate_table(&table),
            Err(DomainError::InvalidScenario {
                id: 1,
                reason: "duplicate scenario id".to_string()
            })
        );
    }

    #[test]
    fn test_select_keeps_table_order() {
        let table = standard_scenarios();
        let picked = select(table.clone(), &[23, 5]);
        assert_eq!(picked.iter().map(|s| s.id).collect::<Vec<_>>(), vec![5, 23]);
        assert_eq!(select(table, &[]).len(), 30);
    }

    #[test]
    fn test_scenario_deserializes_from_table_row() {
        let json = r#"{
            "id": 27,
            "name": "short roll number",
            "request": {
                "payload": {"firstName": "Short", "lastName": "Roll"},
                "credential": {"explicit": "1"}
            },
            "expect": 400
        }"#;
        let scenario: Scenario = serde_json::from_str(json).unwrap();

        assert_eq!(scenario.setup, Vec::new());
        assert_eq!(scenario.expect, StatusExpectation::Exact(400));
        assert_eq!(scenario.request.content_type, None);
        assert_eq!(
            scenario.request.credential,
            CredentialChoice::Explicit(Credential::new("1"))
        );
    }
}
