//! CLI library components for the catalog import checker.

pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
