//! Path utilities for the Zellij sandbox environment.
//!
//! Inside a Zellij plugin the host filesystem is mounted under `/host`, which
//! points at the cwd of the last focused terminal (typically the user's home
//! directory). These helpers resolve the plugin's data locations and expand
//! tilde paths into their sandbox equivalents.

use std::path::PathBuf;

/// Returns the data directory for Vitrine.
///
/// Resolves to `/host/.local/share/zellij/vitrine` in the sandbox, which is
/// `~/.local/share/zellij/vitrine` when Zellij was started from the home
/// directory. Both the catalog document and the trace file live here.
///
/// # Examples
///
/// ```
/// use vitrine::infrastructure::get_data_dir;
///
/// let dir = get_data_dir();
/// assert_eq!(dir.to_str().unwrap(), "/host/.local/share/zellij/vitrine");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("vitrine")
}

/// Default location of the catalog document.
#[must_use]
pub fn catalog_file() -> PathBuf {
    get_data_dir().join("products.json")
}

/// Expands tilde paths to use the `/host` prefix for the Zellij sandbox.
///
/// # Examples
///
/// ```
/// use vitrine::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/catalogo/products.json"), "/host/catalogo/products.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path.json"), "/absolute/path.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
