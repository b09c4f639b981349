// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **Environment variable** (`REEL_VIEWER_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "ReelViewer";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "REEL_VIEWER_CONFIG_DIR";

/// Returns the application config directory path.
///
/// - Linux: `~/.config/ReelViewer/`
/// - macOS: `~/Library/Application Support/ReelViewer/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\ReelViewer\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
///
/// The override takes highest priority, then a non-empty
/// `REEL_VIEWER_CONFIG_DIR`, then the platform directory with the app name
/// appended.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn explicit_override_wins() {
        let path = PathBuf::from("/tmp/reel-override");
        assert_eq!(
            get_app_config_dir_with_override(Some(path.clone())),
            Some(path)
        );
    }

    #[test]
    fn env_var_overrides_platform_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/tmp/reel-env");
        let resolved = get_app_config_dir();
        std::env::remove_var(ENV_CONFIG_DIR);

        assert_eq!(resolved, Some(PathBuf::from("/tmp/reel-env")));
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");
        let resolved = get_app_config_dir();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = resolved {
            assert!(path.ends_with(APP_NAME));
        }
    }
}
