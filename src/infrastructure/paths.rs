//! Filesystem path helpers.
//!
//! Locates the per-user data directory used for log output and expands
//! tilde-prefixed paths from configuration values such as custom theme files.

use std::path::PathBuf;

/// Returns the data directory for folio-core state and logs.
///
/// Resolves to `~/.local/share/folio-core`, falling back to a relative
/// `.folio-core` directory when no home directory is available.
#[must_use]
pub fn data_dir() -> PathBuf {
    home_dir().map_or_else(
        || PathBuf::from(".folio-core"),
        |home| home.join(".local").join("share").join("folio-core"),
    )
}

/// Expands a leading tilde to the user's home directory.
///
/// Paths without a tilde prefix are returned unchanged, as are tilde paths
/// when no home directory can be determined.
///
/// # Examples
///
/// ```
/// use folio_core::infrastructure::paths::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = home_dir() else {
        return path.to_string();
    };
    if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest).to_string_lossy().to_string()
    } else if path == "~" {
        home.to_string_lossy().to_string()
    } else {
        path.to_string()
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_tilde_paths_pass_through() {
        assert_eq!(expand_tilde("/etc/folio.toml"), "/etc/folio.toml");
        assert_eq!(expand_tilde("relative/theme.toml"), "relative/theme.toml");
    }

    #[test]
    fn tilde_prefix_expands_when_home_is_set() {
        if std::env::var_os("HOME").is_some() {
            let expanded = expand_tilde("~/themes/custom.toml");
            assert!(expanded.ends_with("/themes/custom.toml"));
            assert!(!expanded.starts_with('~'));
        }
    }
}
