//! HTTP Request domain types

mod credential;
mod header;
mod payload;
mod spec;

pub use credential::{Credential, CredentialChoice, ROLL_NUMBER_HEADER};
pub use header::{Header, Headers};
pub use payload::{EMAIL_ID, FIRST_NAME, LAST_NAME, PHONE_NUMBER, Payload};
pub use spec::PostRequest;
