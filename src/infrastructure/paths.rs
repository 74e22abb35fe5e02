//! Path manipulation utilities for the Zellij sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which
//! points at the directory Zellij was started from (usually `$HOME`).

use std::path::PathBuf;

const HOST_ROOT: &str = "/host";

/// Directory holding the preference file and trace output:
/// `/host/.local/share/zellij/swipedeck`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij/swipedeck")
}

/// Expands a leading `~` to the `/host` mount.
///
/// # Examples
///
/// ```
/// use swipedeck::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/decks/friends.json"), "/host/decks/friends.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', HOST_ROOT, 1)
    } else if path == "~" {
        HOST_ROOT.to_string()
    } else {
        path.to_string()
    }
}

/// Turns a user-supplied path into a sandbox path.
///
/// Tilde paths are expanded and relative paths are taken relative to `/host`.
/// Absolute paths are used as given.
#[must_use]
pub fn resolve_host_path(path: &str) -> PathBuf {
    let expanded = PathBuf::from(expand_tilde(path.trim()));
    if expanded.is_absolute() {
        expanded
    } else {
        PathBuf::from(HOST_ROOT).join(expanded)
    }
}

/// Removes the `/host` prefix for display.
///
/// # Examples
///
/// ```
/// use swipedeck::infrastructure::strip_host_prefix;
///
/// assert_eq!(strip_host_prefix("/host/decks/seed.json"), "/decks/seed.json");
/// assert_eq!(strip_host_prefix("built-in"), "built-in");
/// ```
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    path.strip_prefix(HOST_ROOT).unwrap_or(path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_live_under_host() {
        assert_eq!(resolve_host_path("decks/a.json"), PathBuf::from("/host/decks/a.json"));
        assert_eq!(resolve_host_path("~/a.json"), PathBuf::from("/host/a.json"));
        assert_eq!(resolve_host_path("/tmp/a.json"), PathBuf::from("/tmp/a.json"));
    }

    #[test]
    fn data_dir_is_inside_host() {
        assert!(get_data_dir().starts_with("/host"));
        assert!(get_data_dir().ends_with("swipedeck"));
    }
}
