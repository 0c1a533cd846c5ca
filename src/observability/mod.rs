//! # Observability Module
//!
//! Structured JSON event logging.

pub mod logger;

pub use logger::{Logger, Severity};
