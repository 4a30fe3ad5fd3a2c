//! Probe Application - Request harness and scenario runner
//!
//! This crate contains the create-user harness, the scenario runner, and the
//! port the infrastructure layer implements to reach the network.

pub mod config;
pub mod create_user;
pub mod error;
pub mod ports;
pub mod runner;

#[cfg(test)]
mod test_support;

pub use config::HarnessConfig;
pub use create_user::{Attempt, CreateUser};
pub use error::{ApplicationError, ApplicationResult};
pub use runner::ScenarioRunner;
