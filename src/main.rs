//! Binary entry point for the telemetry viewer companion server.

use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};

use litescope::server::{
    BUNDLED_ASSETS_DIR, HttpServer, ServerConfig, default_extra_assets, is_robot_host,
};

#[derive(Parser, Debug)]
#[command(name = "litescope", version, about = "Companion server for a robot telemetry viewer")]
struct Cli {
    /// Port to listen on.
    #[arg(long, default_value_t = 5808)]
    port: u16,

    /// Directory holding the compiled web bundle.
    #[arg(long, default_value = "static")]
    root: PathBuf,

    /// Directory holding user-supplied extra assets (defaults to the
    /// deployment-specific location).
    #[arg(long)]
    extra_assets: Option<PathBuf>,

    /// URL prefix under which every route is served.
    #[arg(long, default_value = "/as")]
    web_root: String,

    /// Allow raw log downloads regardless of deployment context.
    #[arg(long)]
    enable_logs: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the logger
    env_logger::init();

    let cli = Cli::parse();

    let on_robot = is_robot_host();
    let extra_assets = cli.extra_assets.unwrap_or_else(|| default_extra_assets(on_robot));
    let log_downloads_enabled = on_robot || cli.enable_logs;

    // Create the extra assets folder before accepting connections; failure
    // here is fatal.
    if !extra_assets.exists() {
        fs::create_dir_all(&extra_assets)?;
        info!("Created folder for extra assets: {path}", path = extra_assets.display());
    }

    if !log_downloads_enabled {
        warn!("Log downloads are currently disabled. Pass --enable-logs to override.");
        warn!(
            "WARNING: When enabled, log downloads provide unrestricted access \
             to all log files on the host filesystem."
        );
    }

    let config = ServerConfig {
        addr: SocketAddr::from(([0, 0, 0, 0], cli.port)),
        web_root: cli.web_root,
        bundled_assets: cli.root.join(BUNDLED_ASSETS_DIR),
        root: cli.root,
        extra_assets,
        log_downloads_enabled,
        ..ServerConfig::default()
    };

    let server = HttpServer::new(config);
    server.start().await?;

    Ok(())
}
