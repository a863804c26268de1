//! CLI layer: argument parsing, command execution, top-level errors

pub mod args;
pub mod commands;
pub mod error;

pub use error::{CliError, CliResult};
