//! Log file listing and retrieval.
//!
//! Both operations are gated behind the log-downloads flag and an extension
//! allow-list. The folder itself comes verbatim from the query string: when
//! the feature is enabled, the client can point it anywhere the process can
//! read. That trust boundary is deliberate — the gate only opens on the
//! robot host or with an explicit flag, and the startup warning states the
//! exposure plainly.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::server::assets::is_hidden;

/// File suffixes recognized as downloadable log formats. Hoot not supported.
pub const ALLOWED_LOG_SUFFIXES: &[&str] = &[".wpilog", ".rlog"];

/// A downloadable log file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub name: String,
    pub size: u64,
}

/// Whether a file name ends with one of the recognized log suffixes.
pub fn has_allowed_suffix(name: &str) -> bool {
    ALLOWED_LOG_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// List the log files directly inside `folder`.
///
/// Non-recursive. Hidden names, disallowed suffixes, and anything that is
/// not a regular file are skipped. Enumeration order is whatever the
/// directory yields.
pub fn list_log_files(folder: &Path) -> io::Result<Vec<LogEntry>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_hidden(&name) || !has_allowed_suffix(&name) {
            continue;
        }
        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            continue;
        }
        files.push(LogEntry {
            name,
            size: metadata.len(),
        });
    }

    Ok(files)
}

/// Resolve a named log file inside `folder`, enforcing the suffix allow-list.
///
/// Existence is the only other check; read failures are the caller's to
/// surface as a server error.
pub fn resolve_log_file(folder: &str, filename: &str) -> Option<PathBuf> {
    if !has_allowed_suffix(filename) {
        return None;
    }
    let path = Path::new(folder).join(filename);
    path.exists().then_some(path)
}
