//! Companion HTTP server for a robot telemetry viewer.
//!
//! The viewer's compiled web bundle, an enumerable asset catalog, and raw
//! robot log files are exposed over a handful of GET routes:
//!
//! - `/assets` — a JSON map of every asset file available to the viewer,
//!   merged from the bundled assets shipped with the web build and a
//!   deployment-specific extra directory
//! - `/assets/<path>` — the asset bytes themselves, with the extra directory
//!   taking precedence over the bundled one
//! - `/logs` and `/logs/<name>` — listing and download of robot log files
//!   from an operator-chosen folder, gated behind an enable flag
//! - everything else — generic static serving of the web bundle
//!
//! All routes live under a configurable URL prefix, and responses are
//! gzip-compressed when the client advertises support.
//!
//! # Examples
//!
//! ```no_run
//! use litescope::server::{HttpServer, ServerConfig};
//!
//! # async fn run() -> Result<(), litescope::ServerError> {
//! let config = ServerConfig {
//!     log_downloads_enabled: true,
//!     ..ServerConfig::default()
//! };
//!
//! HttpServer::new(config).start().await?;
//! # Ok(())
//! # }
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{Error as ParserError, HttpRequest, HttpVersion, Method, RequestTarget, parse_request};
pub use server::{Error as ServerError, HttpResponse, HttpServer, ServerConfig, StatusCode};
