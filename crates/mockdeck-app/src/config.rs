//! Settings for mockdeck, loaded from config.toml
//!
//! Resolution order:
//! 1. Explicit `--config <path>` on the command line
//! 2. `$XDG_CONFIG_HOME/mockdeck/config.toml` (platform config dir)
//! 3. Built-in defaults
//!
//! A missing or unparseable file falls back to defaults with a warning; the
//! console should never refuse to start over configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use mockdeck_core::prelude::*;

const CONFIG_DIR: &str = "mockdeck";
const CONFIG_FILENAME: &str = "config.toml";

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Backend endpoint settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendSettings {
    /// Base URL of the user-record REST API
    #[serde(default = "default_user_api_url")]
    pub user_api_url: String,

    /// Base URL of the stub-mapping admin API
    #[serde(default = "default_admin_api_url")]
    pub admin_api_url: String,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            user_api_url: default_user_api_url(),
            admin_api_url: default_admin_api_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl BackendSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Rows per page in the user table
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_user_api_url() -> String {
    "http://localhost:8080/api/v1".to_string()
}

fn default_admin_api_url() -> String {
    "http://localhost:8088/__admin".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_page_size() -> usize {
    10
}

/// Path of the default config file in the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from an explicit path, or from the default location.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(explicit: Option<&Path>) -> Settings {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) => path,
            None => return Settings::default(),
        },
    };

    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.backend.user_api_url, "http://localhost:8080/api/v1");
        assert_eq!(settings.backend.admin_api_url, "http://localhost:8088/__admin");
        assert_eq!(settings.backend.timeout_ms, 5000);
        assert_eq!(settings.backend.timeout(), Duration::from_secs(5));
        assert_eq!(settings.ui.page_size, 10);
    }

    #[test]
    fn test_load_full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"
[backend]
user_api_url = "http://users.test/api"
admin_api_url = "http://wiremock.test/__admin"
timeout_ms = 2500

[ui]
page_size = 25
"#
        )
        .unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings.backend.user_api_url, "http://users.test/api");
        assert_eq!(settings.backend.timeout_ms, 2500);
        assert_eq!(settings.ui.page_size, 25);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\npage_size = 5\n").unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings.ui.page_size, 5);
        assert_eq!(settings.backend.timeout_ms, 5000);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(Some(&dir.path().join("nope.toml")));
        assert_eq!(settings.ui.page_size, 10);
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not [valid toml").unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings.backend.timeout_ms, 5000);
    }
}
