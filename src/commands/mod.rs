//! CLI subcommand handlers.

pub mod analyze;
pub mod config;
