// ghfeed - Latest releases and commits of a GitHub repository from its Atom feeds
// Copyright (C) 2025 ghfeed contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Configuration system for ghfeed - TOML-based with XDG compliance.

use crate::common::error::{GhFeedError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for ghfeed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Network settings
    pub network: NetworkConfig,
    /// Output settings
    pub output: OutputConfig,
    /// UI preferences
    pub ui: UiConfig,
}

/// General application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable debug logging
    pub verbose: bool,
    /// Log file location (relative to XDG data dir)
    pub log_file: Option<String>,
}

/// Network settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// HTTP proxy (optional)
    pub proxy: Option<String>,
    /// User agent string
    pub user_agent: String,
    /// Skip TLS certificate verification. Exposes every fetch to
    /// man-in-the-middle attacks.
    pub insecure: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
            proxy: None,
            user_agent: format!("ghfeed/{}", env!("CARGO_PKG_VERSION")),
            insecure: false,
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving releases.atom / commits.atom, empty for the current directory
    pub directory: String,
    /// Entries written per feed kind
    pub count: i64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: String::new(),
            count: 1,
        }
    }
}

/// UI preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable colored output
    pub colors: bool,
    /// Show a spinner while fetching
    pub progress: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            colors: true,
            progress: true,
        }
    }
}

impl Config {
    /// Get the configuration directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ghfeed")
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the data directory path
    pub fn data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join("ghfeed")
    }

    /// Load configuration from a specific file, or defaults if absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| GhFeedError::Config(format!("Failed to read config: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| GhFeedError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Resolve the log file path, if file logging is configured
    pub fn log_path(&self) -> Option<PathBuf> {
        self.general.log_file.as_ref().map(|file| Self::data_dir().join(file))
    }

    /// Apply environment variable overrides
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from<F>(mut self, var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // GHFEED_VERBOSE
        if var("GHFEED_VERBOSE").is_some() {
            self.general.verbose = true;
        }

        // GHFEED_INSECURE
        if var("GHFEED_INSECURE").is_some() {
            self.network.insecure = true;
        }

        // GHFEED_NO_COLORS
        if var("GHFEED_NO_COLORS").is_some() || var("NO_COLOR").is_some() {
            self.ui.colors = false;
        }

        // GHFEED_TIMEOUT
        if let Some(secs) = var("GHFEED_TIMEOUT").and_then(|t| t.parse().ok()) {
            self.network.timeout_secs = secs;
        }

        // HTTPS_PROXY / HTTP_PROXY
        if let Some(proxy) = var("HTTPS_PROXY").or_else(|| var("HTTP_PROXY")) {
            self.network.proxy = Some(proxy);
        }

        self
    }
}

/// Generate default configuration file content
pub fn generate_default_config() -> String {
    let config = Config::default();
    toml::to_string_pretty(&config).unwrap_or_else(|_| String::from("# Failed to generate config"))
}
