//! User Probe - Main Entry Point
//!
//! Loads configuration from the environment (and `.env`), runs the scenario
//! table against the configured create-user endpoint, prints a summary, and
//! exits non-zero if any scenario did not pass.

use std::process::ExitCode;
use std::sync::Arc;

use probe_application::{CreateUser, ScenarioRunner};
use probe_domain::SuiteReport;
use probe_infrastructure::{ProbeSettings, ReqwestTransport, init_tracing, load_dotenv};
use tracing::info;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let dotenv = load_dotenv();
    init_tracing()?;
    if let Some(path) = dotenv {
        info!(path = %path.display(), "loaded .env");
    }

    let settings = ProbeSettings::from_env()?;
    info!(endpoint = %settings.harness.endpoint(), "configuration loaded");

    let table = settings.scenario_table().await?;

    let transport = ReqwestTransport::new()?;
    let runner = ScenarioRunner::new(CreateUser::new(Arc::new(transport), settings.harness))
        .with_stop_on_failure(settings.fail_fast);
    let report = runner.run_all(&table.name, &table.scenarios).await;

    println!("{}", render_report(&report));

    Ok(if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn render_report(report: &SuiteReport) -> String {
    let mut lines = vec![report.suite_name.clone()];
    lines.extend(report.results.iter().map(|r| format!("  {}", r.summary())));
    lines.push(format!(
        "{} passed, {} failed, {} errored ({:.1}%) in {} ms",
        report.passed,
        report.failed,
        report.errored,
        report.pass_rate(),
        report.duration_ms
    ));
    lines.join("\n")
}
