//! Environment configuration loading.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file. Loading goes through a lookup function so it can be exercised
//! without touching the real environment.

use std::path::PathBuf;
use std::time::Duration;

use probe_application::{ApplicationError, HarnessConfig};
use probe_domain::Credential;
use thiserror::Error;

use crate::serialization::{ScenarioTable, ScenarioTableError};

/// Create-user endpoint URL.
pub const API_BASE_URL: &str = "API_BASE_URL";
/// Default roll-number credential.
pub const ROLL_NUMBER: &str = "ROLL_NUMBER";
/// Optional per-request timeout in milliseconds.
pub const PROBE_TIMEOUT_MS: &str = "PROBE_TIMEOUT_MS";
/// Optional path to a YAML or JSON scenario table.
pub const PROBE_SCENARIOS: &str = "PROBE_SCENARIOS";
/// Optional comma-separated list of scenario ids to run.
pub const PROBE_ONLY: &str = "PROBE_ONLY";
/// Optional flag: stop at the first scenario that does not pass.
pub const PROBE_FAIL_FAST: &str = "PROBE_FAIL_FAST";

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("missing {0} environment variable")]
    Missing(&'static str),

    /// A variable is set but cannot be used.
    #[error("invalid {var}: {reason}")]
    Invalid {
        /// Variable name.
        var: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// The values did not make a valid harness configuration.
    #[error(transparent)]
    Harness(#[from] ApplicationError),
}

/// Everything the probe binary needs, loaded once at startup.
#[derive(Debug, Clone)]
pub struct ProbeSettings {
    /// Harness configuration (endpoint, credential, timeout).
    pub harness: HarnessConfig,
    /// Scenario table to run instead of the built-in one.
    pub scenario_file: Option<PathBuf>,
    /// Scenario ids to run; empty means all.
    pub only: Vec<u32>,
    /// Stop at the first scenario that does not pass.
    pub fail_fast: bool,
}

impl ProbeSettings {
    /// Loads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads settings through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup(API_BASE_URL).ok_or(ConfigError::Missing(API_BASE_URL))?;
        let credential =
            Credential::new(lookup(ROLL_NUMBER).ok_or(ConfigError::Missing(ROLL_NUMBER))?);
        if credential.is_empty() {
            tracing::warn!("{ROLL_NUMBER} is empty; requests will be unauthorized");
        }

        let mut harness = HarnessConfig::parse(&endpoint, credential)?;
        if let Some(raw) = non_blank(lookup(PROBE_TIMEOUT_MS)) {
            harness = harness.with_timeout(parse_timeout(&raw)?);
        }

        let only = non_blank(lookup(PROBE_ONLY))
            .map(|raw| parse_ids(&raw))
            .transpose()?
            .unwrap_or_default();

        let fail_fast = non_blank(lookup(PROBE_FAIL_FAST))
            .map(|raw| parse_flag(PROBE_FAIL_FAST, &raw))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            harness,
            scenario_file: non_blank(lookup(PROBE_SCENARIOS)).map(PathBuf::from),
            only,
            fail_fast,
        })
    }

    /// The scenarios to run: the table file if one is configured, otherwise
    /// the built-in table, narrowed to the selected ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the table file cannot be loaded or no scenario
    /// matches the selected ids.
    pub async fn scenario_table(&self) -> Result<ScenarioTable, ScenarioTableError> {
        let table = match &self.scenario_file {
            Some(path) => ScenarioTable::load(path).await?,
            None => ScenarioTable::standard(),
        };
        table.select(&self.only)
    }
}

/// Seeds the environment from a `.env` file if one is found.
///
/// Returns the path that was loaded.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::Invalid {
            var: PROBE_TIMEOUT_MS,
            reason: "must be greater than zero".to_string(),
        }),
        Ok(ms) => Ok(Duration::from_millis(ms)),
        Err(e) => Err(ConfigError::Invalid {
            var: PROBE_TIMEOUT_MS,
            reason: format!("{e}: {raw}"),
        }),
    }
}

fn parse_flag(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            reason: format!("expected true or false: {raw}"),
        }),
    }
}

fn parse_ids(raw: &str) -> Result<Vec<u32>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u32>().map_err(|e| ConfigError::Invalid {
                var: PROBE_ONLY,
                reason: format!("{e}: {part}"),
            })
        })
        .collect()
}
