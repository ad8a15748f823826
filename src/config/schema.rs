//! Configuration schema for Brewtagger
//!
//! Configuration is stored at `~/.config/brewtagger/config.toml`

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// External tool locations
    pub tools: ToolsConfig,

    /// Tagging behavior
    pub tagging: TaggingConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: LogFormat,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Text,
        }
    }
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// key=value text lines
    Text,
    /// One JSON object per line
    Json,
}

/// Programs invoked as subprocesses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Homebrew CLI
    pub brew: String,

    /// Mac App Store CLI
    pub mas: String,

    /// Finder tag CLI
    pub tag: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            brew: "brew".to_string(),
            mas: "mas".to_string(),
            tag: "/opt/homebrew/bin/tag".to_string(),
        }
    }
}

/// Tagging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggingConfig {
    /// Directory scanned for `*.app` bundles
    pub applications_dir: PathBuf,

    /// Color applied to cask-installed apps
    pub cask_color: String,

    /// Color applied to App Store apps
    pub store_color: String,

    /// Discover and tag App Store apps (requires `mas`)
    pub store_apps: bool,
}

impl Default for TaggingConfig {
    fn default() -> Self {
        Self {
            applications_dir: PathBuf::from("/Applications"),
            cask_color: "Yellow".to_string(),
            store_color: "Blue".to_string(),
            store_apps: true,
        }
    }
}

impl TaggingConfig {
    /// Use a single color for both origins
    pub fn with_single_color(mut self, color: impl Into<String>) -> Self {
        let color = color.into();
        self.cask_color = color.clone();
        self.store_color = color;
        self
    }
}
