//! Global settings
//!
//! Settings are read from YAML (content with a `common:` section) or TOML
//! and kept in a process-wide [`GLOBAL`] instance.
//!
//! ```yaml
//! common:
//!   log_level: "debug"
//!   rename_timestamp_format: "%Y-%m-%d %H:%M:%S"
//! rule_sets:
//!   - "Streaming"
//! proxies:
//!   - uri: "ss://rc4:pw@1.2.3.4:8388"
//!     name: "Tokyo"
//! ```

use std::error::Error;
use std::fs;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::models::ProxyDictionary;

fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_rename_timestamp_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct CommonSettings {
    log_level: String,
    rename_timestamp_format: String,
}

impl Default for CommonSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            rename_timestamp_format: default_rename_timestamp_format(),
        }
    }
}

/// On-disk layout shared by the YAML and TOML forms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct SettingsFile {
    common: CommonSettings,
    rule_sets: Vec<String>,
    proxies: Vec<ProxyDictionary>,
}

/// Settings structure to hold global configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Path the settings were loaded from, empty when built in.
    pub pref_path: String,
    pub log_level: String,
    /// chrono format used when a proxy name clashes with a rule-set name.
    pub rename_timestamp_format: String,
    /// Rule-set names seeding the rule-set namespace.
    pub rule_sets: Vec<String>,
    /// Proxy dictionaries seeding the proxy store.
    pub proxies: Vec<ProxyDictionary>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::from_file(SettingsFile::default())
    }
}

impl Settings {
    fn from_file(file: SettingsFile) -> Self {
        let mut rename_timestamp_format = file.common.rename_timestamp_format;
        if rename_timestamp_format.trim().is_empty() {
            rename_timestamp_format = default_rename_timestamp_format();
        }
        Settings {
            pref_path: String::new(),
            log_level: file.common.log_level,
            rename_timestamp_format,
            rule_sets: file.rule_sets,
            proxies: file.proxies,
        }
    }
}

impl Settings {
    /// Create a new settings instance with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current() -> Arc<Settings> {
        GLOBAL
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn load_from_content(content: &str) -> Result<Self, Box<dyn Error>> {
        if content.contains("common:") {
            let file: SettingsFile = serde_yaml::from_str(content)?;
            return Ok(Settings::from_file(file));
        }

        let file: SettingsFile = toml::from_str(content)?;
        Ok(Settings::from_file(file))
    }

    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        let mut settings = Settings::load_from_content(&content)?;
        settings.pref_path = path.to_owned();
        Ok(settings)
    }
}

// Global settings instance
pub static GLOBAL: LazyLock<RwLock<Arc<Settings>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Settings::new())));

fn replace_global(settings: Settings) {
    *GLOBAL.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(settings);
}

/// Replace the global settings with ones parsed from `content`
pub fn update_settings_from_content(content: &str) -> Result<(), Box<dyn Error>> {
    replace_global(Settings::load_from_content(content)?);
    Ok(())
}

/// Replace the global settings with ones read from `path`
pub fn update_settings_from_file(path: &str) -> Result<(), Box<dyn Error>> {
    replace_global(Settings::load_from_file(path)?);
    Ok(())
}
