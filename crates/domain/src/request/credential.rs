//! Roll-number credential handling.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of the header carrying the credential.
pub const ROLL_NUMBER_HEADER: &str = "roll-number";

/// The authorization string sent in the `roll-number` header.
///
/// Any string is accepted, including the empty string: the service decides
/// what is valid. `Debug` only reveals the length.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    /// Creates a credential from any string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw credential value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the credential is the empty string.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the length of the credential in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential({} chars)", self.char_len())
    }
}

impl From<&str> for Credential {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Credential {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Which credential a single request should carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialChoice {
    /// Use the credential from the harness configuration.
    #[default]
    Configured,
    /// Send this exact value instead (may be empty).
    Explicit(Credential),
    /// Do not send the header at all.
    Omitted,
}

impl CredentialChoice {
    /// Resolves the choice against the configured default.
    ///
    /// Returns `None` when the header must not be sent.
    #[must_use]
    pub const fn resolve<'a>(&'a self, configured: &'a Credential) -> Option<&'a Credential> {
        match self {
            Self::Configured => Some(configured),
            Self::Explicit(credential) => Some(credential),
            Self::Omitted => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_debug_hides_value() {
        let credential = Credential::new("RA2211003010123");
        assert_eq!(format!("{credential:?}"), "Credential(15 chars)");
    }

    #[test]
    fn test_resolve() {
        let configured = Credential::new("RA001");
        let empty = CredentialChoice::Explicit(Credential::new(""));

        assert_eq!(CredentialChoice::Configured.resolve(&configured), Some(&configured));
        assert_eq!(empty.resolve(&configured).map(Credential::is_empty), Some(true));
        assert_eq!(CredentialChoice::Omitted.resolve(&configured), None);
    }

    #[test]
    fn test_choice_serde_shape() {
        let explicit: CredentialChoice = serde_json::from_str(r#"{"explicit":"1"}"#).unwrap();
        assert_eq!(explicit, CredentialChoice::Explicit(Credential::new("1")));

        let omitted: CredentialChoice = serde_json::from_str(r#""omitted""#).unwrap();
        assert_eq!(omitted, CredentialChoice::Omitted);
    }
}
