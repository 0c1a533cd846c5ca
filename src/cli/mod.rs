//! # CLI Module
//!
//! Argument parsing and command dispatch for the kindred binary.

pub mod args;
pub mod commands;
pub mod errors;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliResult};
