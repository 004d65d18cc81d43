//! Configuration file management for bhashantar.
//!
//! This module handles loading application configuration from a TOML file in the
//! user's config directory. A commented default file is written on first run.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::language::TargetLanguage;

/// Embedded default configuration template.
const DEFAULT_CONFIG: &str = include_str!("../../environments/bhashantar.toml");

/// Current application version from Cargo.toml
const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Processing endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Full URL of the processing endpoint
    #[serde(default = "default_endpoint_url")]
    pub url: String,
    /// Request timeout in seconds. No timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_endpoint_url() -> String {
    "http://127.0.0.1:8000/process".to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: default_endpoint_url(),
            timeout_secs: None,
        }
    }
}

impl EndpointConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Values used when the command line does not provide them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Target language code, e.g. "hi-IN". Prompted for when unset.
    #[serde(default)]
    pub target_language: Option<String>,
}

impl DefaultsConfig {
    /// The configured default language, if it is a supported code.
    pub fn target_language(&self) -> Option<TargetLanguage> {
        let code = self.target_language.as_deref()?;
        let language = TargetLanguage::from_code(code);
        if language.is_none() {
            tracing::warn!("Ignoring unsupported default target language '{code}'");
        }
        language
    }
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Print the insights region after the transcription and translation
    #[serde(default = "default_true")]
    pub show_insights: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_insights: true,
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BhashantarConfig {
    #[serde(default)]
    pub config_version: Option<String>,
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl BhashantarConfig {
    /// Loads configuration from the user's config directory, creating the
    /// default file first if there is none.
    ///
    /// # Errors
    /// - If the config directory cannot be determined or created
    /// - If the config file cannot be read or written
    /// - If the TOML is malformed
    pub fn load() -> anyhow::Result<Self> {
        let config_path = get_config_path()?;
        ensure_config_file(&config_path)?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    /// - If the file cannot be read
    /// - If the TOML is malformed
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {e}", path.display()))?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file '{}': {e}", path.display()))
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let config: BhashantarConfig = toml::from_str(content)?;
        if let Some(version) = &config.config_version {
            if version != CURRENT_VERSION {
                tracing::debug!(
                    "Config written by version {version}, running {CURRENT_VERSION}"
                );
            }
        }
        Ok(config)
    }
}

/// Writes the default configuration if `path` does not exist yet.
///
/// # Errors
/// - If the parent directory cannot be created
/// - If the file cannot be written
pub fn ensure_config_file(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| anyhow::anyhow!("Failed to create config directory: {e}"))?;
    }

    let content = format!("config_version = \"{CURRENT_VERSION}\"\n{DEFAULT_CONFIG}");
    fs::write(path, content)
        .map_err(|e| anyhow::anyhow!("Failed to write default config: {e}"))?;
    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}

/// Retrieves the path to the config file.
///
/// # Errors
/// - If the home directory cannot be determined
pub fn get_config_path() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
    Ok(home
        .join(".config")
        .join("bhashantar")
        .join("bhashantar.toml"))
}
