//! # HTTP Server
//!
//! Binds the member routes into an Axum server with CORS.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::observability::{Logger, Severity};
use crate::store::FamilyStructure;

use super::config::HttpServerConfig;
use super::member_routes::{member_routes, MemberState};

/// HTTP server for the member API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(family: Arc<FamilyStructure>) -> Self {
        Self::with_config(HttpServerConfig::default(), family)
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig, family: Arc<FamilyStructure>) -> Self {
        let router = Self::build_router(&config, family);
        Self { config, router }
    }

    /// Build the router with member routes and CORS
    fn build_router(config: &HttpServerConfig, family: Arc<FamilyStructure>) -> Router {
        let state = Arc::new(MemberState::new(family));

        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // If no origins configured, use permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        member_routes(state).layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("{}", e)))?;

        let listener = TcpListener::bind(addr).await?;

        let addr_str = addr.to_string();
        Logger::log(
            Severity::Info,
            "http_server_started",
            &[("addr", addr_str.as_str())],
        );

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
