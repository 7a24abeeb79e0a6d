//! CLI module for stockroom
//!
//! Provides the command-line front end:
//! - init: create the data directory and an empty slot
//! - add / update / remove / get / list / filter: record operations
//! - categories, report: read-only views
//! - clear: drop the whole inventory

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, ReportKind};
pub use commands::{execute, init, run, run_command};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_response};
