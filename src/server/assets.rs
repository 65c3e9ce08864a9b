//! Layered asset catalog and resolution.
//!
//! Assets come from two roots: the bundled assets shipped with the web build
//! and a deployment-specific extra directory. The catalog merges both trees;
//! fetches probe the extra root first, so an extra asset shadows a bundled
//! one with the same relative path.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use walkdir::WalkDir;

use crate::server::config::ServerConfig;

/// Per-asset configuration file whose contents are inlined into the catalog.
const CONFIG_FILE_NAME: &str = "config.json";

/// Whether a file name carries the hidden-file marker.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Walk both asset roots and build the relative-path -> contents map.
///
/// Every regular file is keyed by its path relative to the root that holds
/// it. Only `config.json` files contribute contents (their parsed JSON, or
/// `null` when unreadable or malformed); all other files map to `null` — the
/// key itself communicates existence. The extra root is walked second, so on
/// a shared relative path its entry overwrites the bundled one. A root that
/// does not exist contributes nothing.
///
/// The walk happens per request; nothing is cached, so the catalog always
/// reflects the file system as it is now.
pub fn asset_catalog(config: &ServerConfig) -> BTreeMap<String, Option<Value>> {
    let mut catalog = BTreeMap::new();

    for root in [&config.bundled_assets, &config.extra_assets] {
        for entry in WalkDir::new(root).into_iter().filter_map(Result::ok) {
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if is_hidden(&name) {
                continue;
            }

            let contents = if name == CONFIG_FILE_NAME {
                read_config_contents(entry.path())
            } else {
                None
            };

            if let Ok(relative) = entry.path().strip_prefix(root) {
                catalog.insert(relative.to_string_lossy().into_owned(), contents);
            }
        }
    }

    catalog
}

/// Best-effort read of a `config.json`; any failure yields `None`.
fn read_config_contents(path: &Path) -> Option<Value> {
    let raw = fs::read_to_string(path).ok()?;
    serde_json::from_str(&raw).ok()
}

/// Resolve a relative asset path to a file on disk.
///
/// Candidates are probed in order: the extra root, then the bundled root.
/// The first that exists as a regular file wins. Note the inversion relative
/// to the catalog walk order above; both orderings are intentional and give
/// the extra root precedence either way.
pub fn resolve_asset(config: &ServerConfig, asset_path: &str) -> Option<PathBuf> {
    for root in [&config.extra_assets, &config.bundled_assets] {
        let candidate = root.join(asset_path);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}
