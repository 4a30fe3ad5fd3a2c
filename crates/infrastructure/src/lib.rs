//! Probe Infrastructure - Adapters and implementations
//!
//! This crate provides the reqwest transport behind the application's
//! `HttpTransport` port, environment configuration, scenario table files and
//! tracing setup.

pub mod adapters;
pub mod config;
pub mod serialization;
pub mod telemetry;

pub use adapters::ReqwestTransport;
pub use config::{ConfigError, ProbeSettings, load_dotenv};
pub use serialization::{ScenarioTable, ScenarioTableError, TableFormat};
pub use telemetry::init_tracing;
