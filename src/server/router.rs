//! Request routing.
//!
//! Stateless dispatch: each request is matched against a fixed priority
//! order of path and prefix tests under the configured URL prefix, and the
//! winning handler's response is passed through compression negotiation.
//! There is nothing to register and nothing to cache.

use std::fs;
use std::path::Path;

use log::debug;

use crate::parser::{HttpRequest, Method};
use crate::server::assets::{asset_catalog, resolve_asset};
use crate::server::compress;
use crate::server::config::{BUNDLED_ASSETS_DIR, ServerConfig};
use crate::server::error::Error;
use crate::server::logs::{self, LogEntry};
use crate::server::response::{HttpResponse, StatusCode};
use crate::server::static_files::resolve_static;

/// Dispatch a parsed request to the matching resource handler.
///
/// Priority order:
/// 1. the reserved bundled-assets sub-path — always not found, those files
///    are reachable only through the asset routes
/// 2. the asset listing (exact match, trailing slash optional)
/// 3. an asset fetch (prefix match)
/// 4. the log listing (exact match, trailing slash optional)
/// 5. a log fetch (prefix match)
/// 6. generic static serving from the served root
pub fn dispatch(config: &ServerConfig, request: &HttpRequest) -> Result<HttpResponse, Error> {
    if request.method != Method::GET {
        return Err(Error::MethodNotAllowed(
            request.method,
            request.target.path.clone(),
        ));
    }

    let path = request.target.path.as_str();
    let route = |suffix: &str| format!("{root}{suffix}", root = config.web_root);

    let response = if path.starts_with(&route(&format!("/{BUNDLED_ASSETS_DIR}"))) {
        debug!("Refusing direct access to bundled assets: {path}");
        return Err(Error::NotFound(path.to_string()));
    } else if path == route("/assets") || path == route("/assets/") {
        serve_asset_listing(config)?
    } else if path.starts_with(&route("/assets")) {
        serve_asset(config, request)?
    } else if path == route("/logs") || path == route("/logs/") {
        serve_log_listing(config, request)?
    } else if path.starts_with(&route("/logs")) {
        serve_log_file(config, request)?
    } else {
        serve_static(config, request)?
    };

    compress::negotiate(request, response)
}

/// The full asset catalog as compact JSON.
fn serve_asset_listing(config: &ServerConfig) -> Result<HttpResponse, Error> {
    let catalog = asset_catalog(config);
    HttpResponse::new(StatusCode::Ok).with_json(&catalog)
}

/// One asset, resolved through the layered roots.
fn serve_asset(config: &ServerConfig, request: &HttpRequest) -> Result<HttpResponse, Error> {
    let prefix = format!("{root}/assets/", root = config.web_root);
    let asset_path = request
        .target
        .decoded_suffix(&prefix)
        .and_then(|path| resolve_asset(config, &path))
        .ok_or_else(|| Error::NotFound(request.target.path.clone()))?;

    // The file existed a moment ago; a failure now is a server error.
    let body = fs::read(&asset_path)?;
    let mime = mime_guess::from_path(&asset_path).first_or_octet_stream();

    Ok(HttpResponse::new(StatusCode::Ok)
        .with_content_type(mime.to_string())
        .with_body_bytes(body))
}

/// The log files inside the requested folder, as a JSON array.
///
/// An empty array when downloads are disabled or no folder was given; not
/// found when the folder is not an existing directory.
fn serve_log_listing(config: &ServerConfig, request: &HttpRequest) -> Result<HttpResponse, Error> {
    let mut files: Vec<LogEntry> = Vec::new();

    if config.log_downloads_enabled {
        if let Some(folder) = request.target.first_query_value("folder") {
            let folder_path = Path::new(folder);
            if !folder_path.is_dir() {
                return Err(Error::NotFound(folder.to_string()));
            }
            files = logs::list_log_files(folder_path)?;
        }
    }

    HttpResponse::new(StatusCode::Ok).with_json(&files)
}

/// One log file, streamed raw from the requested folder.
fn serve_log_file(config: &ServerConfig, request: &HttpRequest) -> Result<HttpResponse, Error> {
    let prefix = format!("{root}/logs/", root = config.web_root);

    if config.log_downloads_enabled {
        if let Some(folder) = request.target.first_query_value("folder") {
            let log_path = request
                .target
                .decoded_suffix(&prefix)
                .and_then(|filename| logs::resolve_log_file(folder, &filename));
            if let Some(log_path) = log_path {
                let body = fs::read(&log_path)?;
                return Ok(HttpResponse::new(StatusCode::Ok)
                    .with_content_type("application/octet-stream")
                    .with_body_bytes(body));
            }
        }
    }

    Err(Error::NotFound(request.target.path.clone()))
}

/// Fallthrough: plain directory-to-file mapping from the served root.
fn serve_static(config: &ServerConfig, request: &HttpRequest) -> Result<HttpResponse, Error> {
    let url_path = request
        .target
        .decoded_suffix(&config.web_root)
        .unwrap_or_else(|| request.target.decoded_path());

    let file_path = resolve_static(&config.root, &url_path)
        .ok_or_else(|| Error::NotFound(request.target.path.clone()))?;

    let body = fs::read(&file_path)?;
    let mime = mime_guess::from_path(&file_path).first_or_octet_stream();

    Ok(HttpResponse::new(StatusCode::Ok)
        .with_content_type(mime.to_string())
        .with_body_bytes(body))
}
