//! Generic static file serving for paths outside the dedicated routes.

use std::path::{Component, Path, PathBuf};

/// Map a decoded URL path onto a file under the served root.
///
/// `.` and `..` segments are dropped rather than resolved, so the result
/// never leaves the root. A directory resolves to the `index.html` inside it
/// when one exists; otherwise, and for anything that is not a regular file,
/// the lookup fails.
pub fn resolve_static(root: &Path, url_path: &str) -> Option<PathBuf> {
    let mut path = root.to_path_buf();
    for component in Path::new(url_path.trim_start_matches('/')).components() {
        if let Component::Normal(part) = component {
            path.push(part);
        }
    }

    if path.is_dir() {
        let index = path.join("index.html");
        if !index.exists() {
            return None;
        }
        path = index;
    }

    path.is_file().then_some(path)
}
