//! Configuration file location.
//!
//! Resolution order:
//!
//! - An explicit `--config` path always wins, whether or not it exists.
//! - `config.yaml` in the current working directory, if present.
//! - `<config dir>/gamepad-overlay/config.yaml` (`~/.config` on Linux,
//!   `%APPDATA%` on Windows). It may not exist yet, in which case the
//!   overlay runs on defaults.

use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory name under the platform config dir
const APP_DIR: &str = "gamepad-overlay";
const CONFIG_FILE: &str = "config.yaml";

/// Pick the configuration file to use
pub fn resolve_config_path(explicit: Option<&str>) -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    resolve_in(explicit, &cwd, dirs::config_dir())
}

fn resolve_in(explicit: Option<&str>, cwd: &Path, config_dir: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return PathBuf::from(path);
    }

    let local = cwd.join(CONFIG_FILE);
    if local.exists() {
        debug!("Using config from working directory: {}", local.display());
        return local;
    }

    match config_dir {
        Some(dir) => dir.join(APP_DIR).join(CONFIG_FILE),
        None => local,
    }
}
