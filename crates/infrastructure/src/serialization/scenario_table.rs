//! Scenario tables stored as YAML or JSON.
//!
//! A table file looks like:
//!
//! ```yaml
//! name: Smoke
//! scenarios:
//!   - id: 1
//!     name: Successfully create a new user
//!     request:
//!       payload: { firstName: Test, lastName: User, phoneNumber: 9999999999, emailId: test.user@example.com }
//!     expect: 201
//! ```

use std::path::{Path, PathBuf};

use probe_domain::{DomainError, SUITE_NAME, Scenario, select, standard_scenarios, validate_table};
use serde::{Deserialize, Serialize};

/// Error type for scenario table loading.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioTableError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The extension is not one of yaml, yml, json.
    #[error("unsupported scenario file format: {}", .0.display())]
    UnknownFormat(PathBuf),

    /// YAML parsing failed.
    #[error("YAML deserialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing failed.
    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The table parsed but is not runnable.
    #[error(transparent)]
    Invalid(#[from] DomainError),

    /// An id filter matched no scenario in the table.
    #[error("no scenarios match the selected ids {ids:?}")]
    NothingSelected {
        /// The ids that were asked for.
        ids: Vec<u32>,
    },
}

/// On-disk format of a scenario table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// YAML (`.yaml` / `.yml`).
    Yaml,
    /// JSON (`.json`).
    Json,
}

impl TableFormat {
    /// Picks the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// A named list of scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioTable {
    /// Suite name used in reports.
    #[serde(default = "default_name")]
    pub name: String,
    /// Scenarios in execution order.
    pub scenarios: Vec<Scenario>,
}

fn default_name() -> String {
    SUITE_NAME.to_string()
}

impl ScenarioTable {
    /// The built-in thirty-scenario table.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            name: SUITE_NAME.to_string(),
            scenarios: standard_scenarios(),
        }
    }

    /// Parses and validates a table.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not parse or the table is invalid.
    pub fn parse(text: &str, format: TableFormat) -> Result<Self, ScenarioTableError> {
        let table: Self = match format {
            // Enum variants are written as single-key maps, the same shape JSON uses.
            TableFormat::Yaml => serde_yaml::with::singleton_map_recursive::deserialize(
                serde_yaml::Deserializer::from_str(text),
            )?,
            TableFormat::Json => serde_json::from_str(text)?,
        };
        validate_table(&table.scenarios)?;
        Ok(table)
    }

    /// Keeps only the scenarios with the given ids; an empty list keeps all.
    ///
    /// # Errors
    ///
    /// Returns `NothingSelected` if the ids match nothing.
    pub fn select(self, ids: &[u32]) -> Result<Self, ScenarioTableError> {
        let scenarios = select(self.scenarios, ids);
        if scenarios.is_empty() {
            return Err(ScenarioTableError::NothingSelected { ids: ids.to_vec() });
        }
        Ok(Self {
            name: self.name,
            scenarios,
        })
    }

    /// Reads, parses and validates a table file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unknown extension,
    /// does not parse, or is invalid.
    pub async fn load(path: &Path) -> Result<Self, ScenarioTableError> {
        let format = TableFormat::from_path(path)
            .ok_or_else(|| ScenarioTableError::UnknownFormat(path.to_path_buf()))?;
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ScenarioTableError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let table = Self::parse(&text, format)?;
        tracing::debug!(path = %path.display(), count = table.scenarios.len(), "loaded scenario table");
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use probe_domain::request::{Credential, CredentialChoice, PHONE_NUMBER};
    use probe_domain::StatusExpectation;
    use serde_json::json;

    const YAML: &str = r#"
name: Duplicates
scenarios:
  - id: 3
    name: duplicate phone
    setup:
      - payload: { firstName: Test1, lastName: User1, phoneNumber: 8888888888, emailId: a@example.com }
    request:
      payload: { firstName: Test2, lastName: User2, phoneNumber: 8888888888, emailId: b@example.com }
    expect: 400
  - id: 15
    name: injection
    request:
      payload: { firstName: "Robert'; DROP TABLE Users; --", lastName: User }
      credential: { explicit: "" }
      content_type: application/xml
    expect: { not: 500 }
"#;

    #[test]
    fn test_format_from_path() {
        assert_eq!(TableFormat::from_path(Path::new("a.YML")), Some(TableFormat::Yaml));
        assert_eq!(TableFormat::from_path(Path::new("a.json")), Some(TableFormat::Json));
        assert_eq!(TableFormat::from_path(Path::new("a.toml")), None);
        assert_eq!(TableFormat::from_path(Path::new("scenarios")), None);
    }

    #[test]
    fn test_parse_yaml() {
        let table = ScenarioTable::parse(YAML, TableFormat::Yaml).unwrap();

        assert_eq!(table.name, "Duplicates");
        assert_eq!(table.scenarios.len(), 2);
        assert_eq!(
            table.scenarios[0].setup[0].payload.get(PHONE_NUMBER),
            Some(&json!(8_888_888_888_u64))
        );
        assert_eq!(table.scenarios[1].expect, StatusExpectation::Not { not: 500 });
        assert_eq!(
            table.scenarios[1].request.credential,
            CredentialChoice::Explicit(Credential::new(""))
        );
    }

    #[test]
    fn test_parse_yaml_credential_forms() {
        let yaml = r#"
scenarios:
  - id: 5
    name: empty roll number
    request:
      payload: { firstName: Test }
      credential: { explicit: "" }
    expect: 401
  - id: 27
    name: short roll number
    request:
      payload: { firstName: Short }
      credential: { explicit: "1" }
    expect: 400
  - id: 31
    name: no roll number header
    request:
      payload: { firstName: Absent }
      credential: omitted
    expect: 401
  - id: 32
    name: configured roll number
    request:
      payload: { firstName: Default }
      credential: configured
    expect: 201
"#;
        let table = ScenarioTable::parse(yaml, TableFormat::Yaml).unwrap();
        let credentials: Vec<_> = table
            .scenarios
            .iter()
            .map(|s| s.request.credential.clone())
            .collect();

        assert_eq!(table.name, SUITE_NAME);
        assert_eq!(
            credentials,
            vec![
                CredentialChoice::Explicit(Credential::new("")),
                CredentialChoice::Explicit(Credential::new("1")),
                CredentialChoice::Omitted,
                CredentialChoice::Configured,
            ]
        );
    }

    #[test]
    fn test_yaml_and_json_tables_agree() {
        let json = r#"{"name": "Duplicates", "scenarios": [
            {"id": 3, "name": "duplicate phone",
             "setup": [{"payload": {"firstName": "Test1", "lastName": "User1", "phoneNumber": 8888888888, "emailId": "a@example.com"}}],
             "request": {"payload": {"firstName": "Test2", "lastName": "User2", "phoneNumber": 8888888888, "emailId": "b@example.com"}},
             "expect": 400},
            {"id": 15, "name": "injection",
             "request": {"payload": {"firstName": "Robert'; DROP TABLE Users; --", "lastName": "User"},
                         "credential": {"explicit": ""}, "content_type": "application/xml"},
             "expect": {"not": 500}}
        ]}"#;

        assert_eq!(
            ScenarioTable::parse(YAML, TableFormat::Yaml).unwrap(),
            ScenarioTable::parse(json, TableFormat::Json).unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_duplicate_ids() {
        let json = r#"{"scenarios": [
            {"id": 1, "name": "a", "request": {"payload": {}}, "expect": 201},
            {"id": 1, "name": "b", "request": {"payload": {}}, "expect": 201}
        ]}"#;
        assert!(matches!(
            ScenarioTable::parse(json, TableFormat::Json),
            Err(ScenarioTableError::Invalid(DomainError::InvalidScenario { id: 1, .. }))
        ));
    }

    #[test]
    fn test_standard_table_survives_json() {
        let table = ScenarioTable::standard();
        let text = serde_json::to_string(&table).unwrap();

        assert_eq!(ScenarioTable::parse(&text, TableFormat::Json).unwrap(), table);
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenarios.yaml");
        std::fs::write(&path, YAML).unwrap();

        let table = ScenarioTable::load(&path).await.unwrap();
        assert_eq!(table.scenarios.iter().map(|s| s.id).collect::<Vec<_>>(), vec![3, 15]);
    }

    #[test]
    fn test_select_narrows_or_fails() {
        let table = ScenarioTable::parse(YAML, TableFormat::Yaml).unwrap();

        let picked = table.clone().select(&[15]).unwrap();
        assert_eq!(picked.name, "Duplicates");
        assert_eq!(picked.scenarios.iter().map(|s| s.id).collect::<Vec<_>>(), vec![15]);

        assert_eq!(table.clone().select(&[]).unwrap(), table);
        assert!(matches!(
            table.select(&[4]),
            Err(ScenarioTableError::NothingSelected { .. })
        ));
    }

    #[tokio::test]
    async fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = ScenarioTable::load(&dir.path().join("missing.yaml")).await;
        assert!(matches!(missing, Err(ScenarioTableError::Io { .. })));

        let unknown = ScenarioTable::load(&dir.path().join("table.toml")).await;
        assert!(matches!(unknown, Err(ScenarioTableError::UnknownFormat(_))));
    }
}
