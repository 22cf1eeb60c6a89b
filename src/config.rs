//! Runtime settings shared by the CLI and the GUI.

use std::path::PathBuf;

/// Environment variable overriding the settings file location.
pub const STORE_ENV: &str = "TRADEBOARD_STORE";

const APP_DIR: &str = "tradeboard";
const STORE_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// JSON file backing the key-value store.
    pub store_path: PathBuf,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            chart_width: 1000,
            chart_height: 600,
        }
    }
}

impl Settings {
    /// Defaults, with the store path taken from `TRADEBOARD_STORE` when set.
    pub fn from_env() -> Self {
        let mut s = Self::default();
        if let Some(path) = std::env::var_os(STORE_ENV).filter(|p| !p.is_empty()) {
            s.store_path = PathBuf::from(path);
        }
        s
    }

    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }
}

/// `<config dir>/tradeboard/settings.json`, or `./tradeboard-settings.json`
/// on platforms without a config dir.
pub fn default_store_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join(APP_DIR).join(STORE_FILE))
        .unwrap_or_else(|| PathBuf::from("tradeboard-settings.json"))
}
