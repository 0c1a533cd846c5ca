//! CLI argument definitions using clap
//!
//! Commands:
//! - kindred serve [--host <host>] [--port <port>]

use clap::{Parser, Subcommand};

/// kindred - an in-memory family member registry with a JSON HTTP API
#[derive(Parser, Debug)]
#[command(name = "kindred")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the API server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to (falls back to the PORT env var, then 3000)
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
