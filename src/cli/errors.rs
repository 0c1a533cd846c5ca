//! CLI-specific error types
//!
//! All CLI errors are fatal; main prints them and exits non-zero.

use thiserror::Error;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// The PORT environment variable is not a valid port number
    #[error("Invalid PORT value: '{0}'")]
    InvalidPort(String),

    /// The member store seed was rejected
    #[error("Failed to seed member store: {0}")]
    Seed(String),

    /// Tokio runtime construction failed
    #[error("Failed to create tokio runtime: {0}")]
    Runtime(String),

    /// The HTTP server exited with an error
    #[error("HTTP server failed: {0}")]
    Server(String),
}
