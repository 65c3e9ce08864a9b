//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Hostname of the robot coprocessor deployment.
const ROBOT_HOSTNAME: &str = "robot";

/// Fixed extra-assets location on the robot coprocessor.
const ROBOT_EXTRA_ASSETS: &str = "/home/systemcore/ascope_assets";

/// Directory under the served root holding the assets shipped with the web
/// build. Never served directly; reachable only through the asset routes.
pub const BUNDLED_ASSETS_DIR: &str = "bundledAssets";

/// HTTP server configuration.
///
/// Built once at startup and shared read-only with every request handler.
#[derive(Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The maximum number of concurrent connections.
    pub max_connections: usize,
    /// The read buffer size.
    pub read_buffer_size: usize,
    /// URL prefix under which every route is served.
    pub web_root: String,
    /// Root directory for generic static serving (the compiled web bundle).
    pub root: PathBuf,
    /// Assets shipped with the web build, under the served root.
    pub bundled_assets: PathBuf,
    /// User-supplied supplementary assets.
    pub extra_assets: PathBuf,
    /// Whether raw log downloads are allowed.
    pub log_downloads_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:5808".parse().unwrap(),
            max_connections: 1024,
            read_buffer_size: 8192,
            web_root: "/as".to_string(),
            root: PathBuf::from("static"),
            bundled_assets: PathBuf::from("static").join(BUNDLED_ASSETS_DIR),
            extra_assets: PathBuf::from("ascope_assets"),
            log_downloads_enabled: false,
        }
    }
}

/// Whether this process is running on the robot coprocessor itself.
///
/// Checked once at startup; log downloads default to enabled there because
/// the operator already has filesystem access.
pub fn is_robot_host() -> bool {
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .is_some_and(|name| name == ROBOT_HOSTNAME)
}

/// Default extra-assets directory for the deployment context.
pub fn default_extra_assets(on_robot: bool) -> PathBuf {
    if on_robot {
        PathBuf::from(ROBOT_EXTRA_ASSETS)
    } else {
        PathBuf::from("ascope_assets")
    }
}
