//
//  gerrit-rest-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Loading, saving, and accessing client settings stored as TOML in a
//! platform-specific directory.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/gerrit/config.toml`
//! - **macOS**: `~/Library/Application Support/gerrit/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\gerrit\config\config.toml`
//!
//! The `GERRIT_CONFIG` environment variable overrides the location.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [core]
//! default_host = "review.example.com"
//! timeout = 30
//!
//! [hosts."review.example.com"]
//! url = "https://review.example.com"
//! username = "jdoe"
//! http_password = "generated-password"
//!
//! [hosts."legacy.example.com"]
//! url = "https://legacy.example.com/gerrit"
//! version_fallback = "<2.8"
//! ```
//!
//! ## Submodules
//!
//! - [`file`]: Low-level configuration file I/O operations
//! - [`hosts`]: Host-specific configuration and utilities

mod file;
mod hosts;

pub use file::*;
pub use hosts::*;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the configuration file path.
pub const CONFIG_PATH_ENV: &str = "GERRIT_CONFIG";

/// Global configuration container.
///
/// # Fields
///
/// * `core` - Settings shared by all hosts
/// * `hosts` - Map of host key (normalized hostname) to host-specific configuration
///
/// # Examples
///
/// ```rust
/// use gerrit_rest_client::config::{Config, HostConfig};
///
/// let mut config = Config::default();
/// config.add_host(HostConfig::new("https://review.example.com/"));
/// assert!(config.host_config("review.example.com").is_some());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Settings shared by all hosts.
    #[serde(default)]
    pub core: CoreConfig,

    /// Per-host settings keyed by normalized hostname.
    #[serde(default)]
    pub hosts: HashMap<String, HostConfig>,
}

/// Settings shared by all hosts.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CoreConfig {
    /// Host used when none is given on the command line.
    #[serde(default)]
    pub default_host: Option<String>,

    /// Request timeout in seconds, enforced by the HTTP client.
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl Config {
    /// Loads configuration from the default location.
    ///
    /// # Returns
    ///
    /// - `Ok(Config)` - The loaded or default configuration
    /// - `Err` - If the file exists but cannot be read or parsed
    ///
    /// # Notes
    ///
    /// - A missing configuration file is not an error; defaults are used
    /// - The configuration path is determined by [`Config::config_path`]
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from `path`, or defaults if the file is absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if config_exists(path) {
            let content = read_config_file(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Returns the configuration file path.
    ///
    /// `GERRIT_CONFIG` wins over the platform directory.
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dirs = ProjectDirs::from("", "", "gerrit")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Looks up a host by name or URL.
    pub fn host_config(&self, host: &str) -> Option<&HostConfig> {
        self.hosts.get(&normalize_host(host))
    }

    /// Resolves the host to use: `host` if given, else the default host.
    pub fn resolve_host(&self, host: Option<&str>) -> Option<&HostConfig> {
        match host {
            Some(host) => self.host_config(host),
            None => self
                .core
                .default_host
                .as_deref()
                .and_then(|host| self.host_config(host)),
        }
    }

    /// Adds or replaces a host entry, keyed by its normalized hostname.
    pub fn add_host(&mut self, host: HostConfig) {
        self.hosts.insert(normalize_host(&host.url), host);
    }

    /// Gets a core configuration value by key.
    ///
    /// Supported keys: `default_host`, `timeout`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default_host" => self.core.default_host.clone(),
            "timeout" => self.core.timeout.map(|t| t.to_string()),
            _ => None,
        }
    }

    /// Sets a core configuration value by key.
    ///
    /// Returns `false` for unknown keys or values that do not parse.
    pub fn set(&mut self, key: &str, value: String) -> bool {
        match key {
            "default_host" => {
                self.core.default_host = Some(value);
                true
            }
            "timeout" => match value.parse() {
                Ok(seconds) => {
                    self.core.timeout = Some(seconds);
                    true
                }
                Err(_) => false,
            },
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("default_host", "review.example.com".to_string());
        let mut host = HostConfig::new("https://review.example.com");
        host.username = Some("jdoe".to_string());
        host.version_fallback = Some("<2.8".to_string());
        config.add_host(host);
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        let resolved = loaded.resolve_host(None).unwrap();
        assert_eq!(resolved.username.as_deref(), Some("jdoe"));
    }

    #[test]
    fn test_parse_toml() {
        let config: Config = toml::from_str(
            r#"
            [core]
            default_host = "review.example.com"
            timeout = 15

            [hosts."review.example.com"]
            url = "https://review.example.com"
            username = "jdoe"
            http_password = "pw"
            "#,
        )
        .unwrap();
        assert_eq!(config.get("timeout").as_deref(), Some("15"));
        let host = config.host_config("https://review.example.com/").unwrap();
        assert_eq!(host.http_password.as_deref(), Some("pw"));
    }

    #[test]
    fn test_set_rejects_unknown_and_invalid() {
        let mut config = Config::default();
        assert!(!config.set("editor", "vim".to_string()));
        assert!(!config.set("timeout", "soon".to_string()));
        assert!(config.set("timeout", "20".to_string()));
        assert_eq!(config.core.timeout, Some(20));
    }
}
