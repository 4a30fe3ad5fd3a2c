//! Scenario table files.
//!
//! The built-in table lives in the domain crate; these helpers let a run use
//! a table kept on disk instead.

mod scenario_table;

pub use scenario_table::{ScenarioTable, ScenarioTableError, TableFormat};
