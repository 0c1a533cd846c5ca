//! # HTTP Server Module
//!
//! Axum-based JSON API over the member store.
//!
//! # Endpoints
//!
//! - `GET /` - Sitemap of available endpoints
//! - `GET /members` - Full member collection
//! - `GET /member/:id` - Single member by id
//! - `POST /member` - Add a member
//! - `DELETE /member/:id` - Remove a member by id

pub mod config;
pub mod errors;
pub mod member_routes;
pub mod response;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
