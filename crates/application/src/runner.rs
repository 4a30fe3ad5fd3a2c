//! Scenario runner.
//!
//! Executes scenarios against the harness and produces verdicts.

use std::time::Instant;

use probe_domain::{Scenario, ScenarioResult, ScenarioVerdict, SuiteReport};
use tracing::{Instrument, info, info_span, warn};

use crate::create_user::{Attempt, CreateUser};
use crate::ports::HttpTransport;

/// Runs scenarios one after another through a [`CreateUser`] harness.
pub struct ScenarioRunner<T: HttpTransport> {
    harness: CreateUser<T>,
    /// Whether to stop on first scenario that does not pass.
    stop_on_failure: bool,
}

impl<T: HttpTransport> ScenarioRunner<T> {
    /// Create a new runner.
    #[must_use]
    pub const fn new(harness: CreateUser<T>) -> Self {
        Self {
            harness,
            stop_on_failure: false,
        }
    }

    /// Set whether to stop on first failure.
    #[must_use]
    pub const fn with_stop_on_failure(mut self, stop: bool) -> Self {
        self.stop_on_failure = stop;
        self
    }

    /// Run a single scenario: setup steps first, then the asserted step.
    pub async fn run(&self, scenario: &Scenario) -> ScenarioResult {
        let start = Instant::now();
        let span = info_span!("scenario", id = scenario.id, name = %scenario.name);
        let verdict = self.run_steps(scenario).instrument(span).await;

        let result = ScenarioResult {
            id: scenario.id,
            name: scenario.name.clone(),
            verdict,
            duration_ms: elapsed_ms(start),
        };
        if result.passed() {
            info!("{}", result.summary());
        } else {
            warn!("{}", result.summary());
        }
        result
    }

    async fn run_steps(&self, scenario: &Scenario) -> ScenarioVerdict {
        for (index, step) in scenario.setup.iter().enumerate() {
            if let Attempt::TransportFailed(error) = self.harness.execute(step).await {
                warn!(step = index + 1, %error, "setup request got no response, continuing");
            }
        }

        match self.harness.execute(&scenario.request).await {
            Attempt::Responded(outcome) => ScenarioVerdict::judge(outcome.status, &scenario.expect),
            Attempt::TransportFailed(error) => ScenarioVerdict::Errored {
                cause: error.to_string(),
            },
        }
    }

    /// Run scenarios sequentially and collect a report.
    pub async fn run_all(&self, suite_name: &str, scenarios: &[Scenario]) -> SuiteReport {
        let start = Instant::now();
        let mut results = Vec::with_capacity(scenarios.len());

        for scenario in scenarios {
            let result = self.run(scenario).await;
            let failed = !result.passed();
            results.push(result);

            if failed && self.stop_on_failure {
                break;
            }
        }

        let report = SuiteReport::new(suite_name, results, elapsed_ms(start));
        info!(
            suite = %report.suite_name,
            total = report.total,
            passed = report.passed,
            failed = report.failed,
            errored = report.errored,
            "suite finished"
        );
        report
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
