//! Configuration management for the weft CLI
//!
//! Persists a small TOML config in the platform config directory and
//! resolves the package-manager binary. The config location honors the
//! `WEFT_CONFIG` environment variable (tests, isolated runs) and a
//! pointer file next to the default location.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use which::which;

/// Fallback install timeout when neither flag nor config provide one
pub const DEFAULT_INSTALL_TIMEOUT_SECS: u64 = 600;

/// Error type for config operations
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
    /// The package-manager binary could not be found on PATH
    MissingBinary(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Failed to parse config: {}", e),
            ConfigError::Serialize(e) => write!(f, "Failed to serialize config: {}", e),
            ConfigError::MissingBinary(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        ConfigError::Serialize(e)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub npm_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_root: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_timeout_secs: Option<u64>,
}

impl Config {
    pub fn path() -> PathBuf {
        // Honor explicit override via WEFT_CONFIG for tests / isolated runs.
        // If set and non-empty, use that path immediately.
        if let Ok(env_path) = std::env::var("WEFT_CONFIG") {
            let trimmed = env_path.trim();
            if !trimmed.is_empty() {
                return PathBuf::from(trimmed);
            }
        }

        // Default config file path (platform-appropriate).
        #[cfg(not(target_os = "windows"))]
        let default = dirs::home_dir().map_or_else(
            || PathBuf::from(".config/weft/weft.toml"),
            |h| h.join(".config").join("weft").join("weft.toml"),
        );

        #[cfg(target_os = "windows")]
        let default = dirs::config_dir().map_or_else(
            || PathBuf::from("weft\\weft.toml"),
            |c| c.join("weft").join("weft.toml"),
        );

        // A pointer file next to the default config, e.g.
        // ~/.config/weft/.weft_config_path, redirects to another location.
        if let Some(parent) = default.parent() {
            let pointer = parent.join(".weft_config_path");
            if pointer.exists() {
                if let Ok(contents) = fs::read_to_string(&pointer) {
                    let trimmed = contents.trim();
                    if !trimmed.is_empty() {
                        return PathBuf::from(trimmed);
                    }
                }
            }
        }

        default
    }

    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "npm-path" => self.npm_path.clone(),
            "virtual-root" => self.virtual_root.clone(),
            "install-timeout" => self.install_timeout_secs.map(|s| s.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: String) {
        match key {
            "npm-path" => self.npm_path = Some(value),
            "virtual-root" => self.virtual_root = Some(value),
            "install-timeout" => self.install_timeout_secs = value.parse().ok(),
            _ => {}
        }
    }

    pub fn is_empty(&self) -> bool {
        self.npm_path.is_none() && self.virtual_root.is_none() && self.install_timeout_secs.is_none()
    }

    pub fn values_iter(&self) -> Vec<(&str, String)> {
        let mut values = Vec::new();
        if let Some(ref val) = self.npm_path {
            values.push(("npm-path", val.clone()));
        }
        if let Some(ref val) = self.virtual_root {
            values.push(("virtual-root", val.clone()));
        }
        if let Some(val) = self.install_timeout_secs {
            values.push(("install-timeout", val.to_string()));
        }
        values
    }

    /// Effective install timeout: configured value or the default
    pub fn install_timeout(&self) -> Duration {
        Duration::from_secs(
            self.install_timeout_secs
                .unwrap_or(DEFAULT_INSTALL_TIMEOUT_SECS),
        )
    }

    /// Resolve the package-manager binary, re-checking a stored path and
    /// falling back to PATH lookup. The resolved path is persisted.
    pub fn ensure_npm_path(&mut self) -> Result<String, ConfigError> {
        if let Some(ref path) = self.npm_path {
            if std::path::Path::new(path).exists() {
                return Ok(path.clone());
            }
            // Path was in config but doesn't exist, clear it
            eprintln!("Stored npm path no longer exists: {}", path);
            self.npm_path = None;
        }

        match which("npm") {
            Ok(path) => {
                let path_str = path.to_string_lossy().trim().to_string();
                self.npm_path = Some(path_str.clone());
                self.save()?;
                Ok(path_str)
            }
            Err(_) => Err(ConfigError::MissingBinary(
                "npm is not installed. Please install Node.js from: https://nodejs.org/".to_string(),
            )),
        }
    }
}
