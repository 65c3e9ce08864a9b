//! HTTP server for the telemetry viewer.
//!
//! This module hosts the transport loop, the fixed request router, and the
//! resolvers behind each route: the layered asset catalog, log file
//! downloads, and generic static serving, all funneled through conditional
//! gzip compression.

mod response;
mod config;
mod error;
mod compress;
mod assets;
mod logs;
mod static_files;
mod router;
mod http_server;

// Re-export public items
pub use response::{HttpResponse, StatusCode};
pub use config::ServerConfig;
pub use config::{BUNDLED_ASSETS_DIR, default_extra_assets, is_robot_host};
pub use error::Error;
pub use http_server::HttpServer;
pub use logs::{ALLOWED_LOG_SUFFIXES, LogEntry};
