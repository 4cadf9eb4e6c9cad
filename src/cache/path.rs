use std::{env, path::PathBuf};

/// File name of the cache inside the config directory.
const CACHE_FILE: &str = "cdinfo";

/// Application subdirectory under the config root.
const APP_DIR: &str = "cdstash";

/// Resolve the path to the cache file.
///
/// Order: `CDSTASH_CACHE_PATH` env override, then the default location.
pub fn resolve_cache_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os("CDSTASH_CACHE_PATH") {
        return Some(PathBuf::from(path));
    }
    default_cache_path()
}

/// Default location: `$XDG_CONFIG_HOME/cdstash/cdinfo`, falling back to
/// `~/.config/cdstash/cdinfo`, or `None` when neither root is set.
pub fn default_cache_path() -> Option<PathBuf> {
    let config_dir = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_dir.map(|dir| dir.join(APP_DIR).join(CACHE_FILE))
}
