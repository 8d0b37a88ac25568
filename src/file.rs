//! Config file discovery and `key = value` parsing.
//!
//! # Format
//!
//! ```text
//! # comment
//! debug
//! seat = seat1
//! xkb-layout = "de"
//! ```
//!
//! One key per line; blank lines and `#` lines are skipped. Keys are option
//! long names, matched exactly. Files have no negation syntax: a bare key
//! turns a boolean on, and `key = no` turns it off.
//!
//! `key =` with nothing after it reads like a bare key for booleans and as
//! the empty string for string options. A quoted empty value (`key = ""`) is
//! always an explicit empty argument, which a boolean rejects.
//!
//! Every value a file sets is **locked**, so the first source to mention a
//! key wins over later files and over the command line. Problems with a
//! single line (unknown key, bad value) are logged and the line skipped; the
//! rest of the file still applies.
//!
//! # Discovery
//!
//! Each [`SearchPath`] resolves to one directory, checked for
//! `{dir}/{file_name}`. Candidates are applied in list order, and missing
//! files are silently skipped. Only actual I/O errors (permissions, etc.)
//! are propagated.

use std::path::{Path, PathBuf};

use crate::error::ConfError;
use crate::option::{ConfOption, find_long};
use crate::types::SearchPath;

/// Resolve a [`SearchPath`] to a concrete directory.
///
/// `app_name` is used by `SearchPath::Platform` to construct the platform-specific
/// config directory (e.g. `~/.config/{app_name}/` on Linux).
///
/// Returns `None` if the path cannot be resolved (e.g. no home directory found).
pub fn resolve_search_path(sp: &SearchPath, app_name: &str) -> Option<PathBuf> {
    match sp {
        SearchPath::Platform => {
            let proj = directories::ProjectDirs::from("", "", app_name)?;
            Some(proj.config_dir().to_path_buf())
        }
        SearchPath::Home(subdir) => {
            let user = directories::UserDirs::new()?;
            Some(user.home_dir().join(subdir))
        }
        SearchPath::Cwd => std::env::current_dir().ok(),
        SearchPath::Path(p) => Some(p.clone()),
    }
}

/// Expand search paths into candidate file paths, in application order.
///
/// Unresolvable entries are dropped.
pub fn candidate_files(search_paths: &[SearchPath], file_name: &str, app_name: &str) -> Vec<PathBuf> {
    search_paths
        .iter()
        .filter_map(|sp| resolve_search_path(sp, app_name))
        .map(|dir| dir.join(file_name))
        .collect()
}

/// Apply every candidate file that exists, in order.
///
/// Missing files are skipped. Returns the paths that were actually applied.
pub fn parse_all_files<C>(
    options: &mut [ConfOption<C>],
    config: &mut C,
    candidates: &[PathBuf],
) -> Result<Vec<PathBuf>, ConfError> {
    let mut applied = Vec::new();
    for path in candidates {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                parse_content(options, config, &content, path);
                applied.push(path.clone());
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file");
            }
            Err(e) => {
                return Err(ConfError::Io {
                    path: path.clone(),
                    source: e,
                });
            }
        }
    }
    Ok(applied)
}

/// Apply a single, explicitly requested file. A missing file is an error.
pub fn parse_file<C>(
    options: &mut [ConfOption<C>],
    config: &mut C,
    path: &Path,
) -> Result<(), ConfError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ConfError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    parse_content(options, config, &content, path);
    Ok(())
}

/// Apply pre-loaded file content. `origin` only labels log messages.
pub fn parse_content<C>(options: &mut [ConfOption<C>], config: &mut C, content: &str, origin: &Path) {
    for (i, line) in content.lines().enumerate() {
        let line_no = i + 1;
        let Some((key, arg)) = split_line(line) else {
            continue;
        };

        if key.is_empty() {
            tracing::warn!(path = %origin.display(), line = line_no, "missing key before '='");
            continue;
        }

        let Some(opt) = find_long(options, key) else {
            tracing::warn!(path = %origin.display(), line = line_no, key, "unknown config key");
            continue;
        };

        if opt.is_locked() {
            tracing::debug!(path = %origin.display(), line = line_no, key, "already set, ignored");
            continue;
        }

        // A bare key means "no argument"; so does `key =` for types that take none.
        let arg = arg
            .filter(|v| !v.is_empty() || opt.conf_type().has_arg())
            .map(unquote);

        match opt.parse(config, true, arg) {
            Ok(()) => {
                opt.lock();
                tracing::debug!(path = %origin.display(), line = line_no, key, "set from config file");
            }
            Err(e) => {
                tracing::warn!(path = %origin.display(), line = line_no, "{e}");
            }
        }
    }
}

/// Split a line into `(key, value)`.
///
/// Returns `None` for blank and comment lines. A line without `=` yields
/// `(key, None)`. The value is returned still quoted; see [`unquote`].
fn split_line(line: &str) -> Option<(&str, Option<&str>)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    match trimmed.split_once('=') {
        Some((key, value)) => Some((key.trim_end(), Some(value.trim_start()))),
        None => Some((trimmed, None)),
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2
            && let Some(inner) = value
                .strip_prefix(quote)
                .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
