//! kindred - an in-memory family member registry with a JSON HTTP API

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
