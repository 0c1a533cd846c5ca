//! CLI command implementations
//!
//! The serve command is the composition root: it resolves the
//! configuration, seeds the member store, and hands both to the HTTP
//! server. Nothing else constructs the store.

use std::env;
use std::sync::Arc;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::store::{FamilyStructure, Member};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve { host, port } => serve(&host, port),
    }
}

/// Start the API server.
///
/// Port precedence: --port flag, then the PORT env var, then 3000.
pub fn serve(host: &str, port: Option<u16>) -> CliResult<()> {
    let port = resolve_port(port, env::var("PORT").ok().as_deref())?;

    let config = HttpServerConfig {
        host: host.to_string(),
        port,
        ..Default::default()
    };

    let family = Arc::new(jackson_family()?);
    let server = HttpServer::with_config(config, family);

    let rt = tokio::runtime::Runtime::new().map_err(|e| CliError::Runtime(e.to_string()))?;

    rt.block_on(async { server.start().await.map_err(|e| CliError::Server(e.to_string())) })
}

/// Resolve the listening port from the flag and the PORT env var
fn resolve_port(flag: Option<u16>, env_port: Option<&str>) -> CliResult<u16> {
    if let Some(port) = flag {
        return Ok(port);
    }

    match env_port {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| CliError::InvalidPort(raw.to_string())),
        None => Ok(3000),
    }
}

/// The seed collection served at startup
fn jackson_family() -> CliResult<FamilyStructure> {
    let members = vec![
        Member::new(1, "John", 33, vec![7, 13, 22]),
        Member::new(2, "Jane", 35, vec![10, 14, 3]),
        Member::new(3, "Jimmy", 5, vec![1]),
    ];

    FamilyStructure::with_members("Jackson", members).map_err(|e| CliError::Seed(e.to_string()))
}
