//! Status assertions and scenario results.
//!
//! This module provides the types used to judge an outcome and to report on a
//! run of scenarios.

use serde::{Deserialize, Serialize};

use crate::response::StatusCode;

/// Expected status code value or range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum StatusExpectation {
    /// Exact status code.
    Exact(u16),
    /// One of multiple status codes.
    OneOf(Vec<u16>),
    /// Range of status codes (e.g., 200-299).
    Range {
        /// Minimum status code (inclusive).
        min: u16,
        /// Maximum status code (inclusive).
        max: u16,
    },
    /// Anything except this status code.
    Not {
        /// The excluded status code.
        not: u16,
    },
}

impl StatusExpectation {
    /// Check if a status code matches this expectation.
    #[must_use]
    pub fn matches(&self, status: StatusCode) -> bool {
        let status = status.as_u16();
        match self {
            Self::Exact(expected) => status == *expected,
            Self::OneOf(codes) => codes.contains(&status),
            Self::Range { min, max } => status >= *min && status <= *max,
            Self::Not { not } => status != *not,
        }
    }

    /// Get description of the expectation.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Exact(code) => format!("= {code}"),
            Self::OneOf(codes) => {
                let codes_str: Vec<_> = codes.iter().map(ToString::to_string).collect();
                format!("in [{}]", codes_str.join(", "))
            }
            Self::Range { min, max } => format!("in {min}-{max}"),
            Self::Not { not } => format!("!= {not}"),
        }
    }

    /// Create an exact status expectation.
    #[must_use]
    pub const fn exact(code: StatusCode) -> Self {
        Self::Exact(code.as_u16())
    }

    /// Create an expectation that excludes one status code.
    #[must_use]
    pub const fn not(code: StatusCode) -> Self {
        Self::Not { not: code.as_u16() }
    }
}

/// Verdict for one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum ScenarioVerdict {
    /// The asserted request's status matched.
    Passed {
        /// Status that was observed.
        status: StatusCode,
    },
    /// The asserted request's status did not match.
    Failed {
        /// Status that was observed.
        status: StatusCode,
        /// What was expected.
        expected: StatusExpectation,
    },
    /// The asserted request never got a response.
    Errored {
        /// Transport failure description.
        cause: String,
    },
}

impl ScenarioVerdict {
    /// Judges an observed status against an expectation.
    #[must_use]
    pub fn judge(status: StatusCode, expected: &StatusExpectation) -> Self {
        if expected.matches(status) {
            Self::Passed { status }
        } else {
            Self::Failed {
                status,
                expected: expected.clone(),
            }
        }
    }

    /// Returns true if the scenario passed.
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }

    /// Returns the observed status, if any response was received.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Passed { status } | Self::Failed { status, .. } => Some(*status),
            Self::Errored { .. } => None,
        }
    }
}

/// Result of running a single scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Scenario identifier.
    pub id: u32,
    /// Scenario name.
    pub name: String,
    /// What happened.
    pub verdict: ScenarioVerdict,
    /// Wall-clock time for setup and asserted requests, in milliseconds.
    pub duration_ms: u64,
}

impl ScenarioResult {
    /// Returns true if the scenario passed.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.verdict.is_passed()
    }

    /// One-line human-readable summary.
    #[must_use]
    pub fn summary(&self) -> String {
        match &self.verdict {
            ScenarioVerdict::Passed { status } => {
                format!("PASS {:>2}. {} ({status})", self.id, self.name)
            }
            ScenarioVerdict::Failed { status, expected } => format!(
                "FAIL {:>2}. {}: expected status {}, got {status}",
                self.id,
                self.name,
                expected.description()
            ),
            ScenarioVerdict::Errored { cause } => {
                format!("ERR  {:>2}. {}: {cause}", self.id, self.name)
            }
        }
    }
}

/// Results from running a set of scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Suite name.
    pub suite_name: String,
    /// Individual scenario results, in execution order.
    pub results: Vec<ScenarioResult>,
    /// Total number of scenarios run.
    pub total: usize,
    /// Number of passed scenarios.
    pub passed: usize,
    /// Number of failed scenarios.
    pub failed: usize,
    /// Number of scenarios that never got a response.
    pub errored: usize,
    /// Execution time in milliseconds.
    pub duration_ms: u64,
}

impl SuiteReport {
    /// Create a new report.
    #[must_use]
    pub fn new(suite_name: impl Into<String>, results: Vec<ScenarioResult>, duration_ms: u64) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed()).count();
        let errored = results
            .iter()
            .filter(|r| matches!(r.verdict, ScenarioVerdict::Errored { .. }))
            .count();

        Self {
            suite_name: suite_name.into(),
            results,
            total,
            passed,
            failed: total - passed - errored,
            errored,
            duration_ms,
        }
    }

    /// Check if all scenarios passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.passed == self.total
    }

    /// Get pass rate as percentage.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    /// Iterates over the results that did not pass.
    pub fn problems(&self) -> impl Iterator<Item = &ScenarioResult> {
        self.results.iter().filter(|r| !r.passed())
    }
}
