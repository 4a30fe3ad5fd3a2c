//! User payload sent to the create-user endpoint.
//!
//! The payload is deliberately schemaless: recognised fields have helpers,
//! anything else is carried through untouched. Validation is the remote
//! service's job.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult};

/// Field name for the user's first name.
pub const FIRST_NAME: &str = "firstName";
/// Field name for the user's last name.
pub const LAST_NAME: &str = "lastName";
/// Field name for the phone number (number or string).
pub const PHONE_NUMBER: &str = "phoneNumber";
/// Field name for the e-mail address.
pub const EMAIL_ID: &str = "emailId";

/// A field name to JSON value mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload {
    fields: Map<String, Value>,
}

impl Payload {
    /// Creates an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a payload with all four recognised fields set.
    #[must_use]
    pub fn user(
        first_name: impl Into<Value>,
        last_name: impl Into<Value>,
        phone_number: impl Into<Value>,
        email_id: impl Into<Value>,
    ) -> Self {
        Self::new()
            .with(FIRST_NAME, first_name)
            .with(LAST_NAME, last_name)
            .with(PHONE_NUMBER, phone_number)
            .with(EMAIL_ID, email_id)
    }

    /// Sets a field (builder pattern). Any field name is accepted.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Removes a field (builder pattern).
    #[must_use]
    pub fn without(mut self, name: &str) -> Self {
        self.fields.remove(name);
        self
    }

    /// Sets a field, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    /// Returns a field value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns the field names that are not one of the four recognised ones.
    pub fn extra_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .keys()
            .map(String::as_str)
            .filter(|k| ![FIRST_NAME, LAST_NAME, PHONE_NUMBER, EMAIL_ID].contains(k))
    }

    /// Serializes the payload as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPayload` if serialization fails.
    pub fn to_json_bytes(&self) -> DomainResult<Vec<u8>> {
        serde_json::to_vec(&self.fields).map_err(|e| DomainError::InvalidPayload(e.to_string()))
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}
