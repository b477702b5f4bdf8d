//! Configuration loading.
//!
//! Loads `wayfarer.toml`. Every section uses `#[serde(default)]` so a
//! minimal or empty file is valid, and a missing file at the default
//! location means "all defaults".

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::catalog::{CatalogSource, DEFAULT_ORIGIN};
use crate::extractors::{DEFAULT_DESTINATION, KNOWN_CITIES};
use crate::pipeline::DEFAULT_SPOKEN_OPTIONS;

/// Config file name inside the config directory.
pub const CONFIG_FILE: &str = "wayfarer.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Flight catalog location and search origin.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Destination extraction settings.
    #[serde(default)]
    pub nlu: NluConfig,

    /// Spoken response settings.
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Log level and optional file output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where flights come from and where they depart.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// File path or `http(s)://` URL of the JSON catalog.
    #[serde(default = "default_catalog_source")]
    pub source: String,

    /// Origin city every search filters on.
    #[serde(default = "default_origin")]
    pub origin: String,
}

impl CatalogConfig {
    /// Interpret [`CatalogConfig::source`].
    pub fn catalog_source(&self) -> CatalogSource {
        CatalogSource::from_location(&self.source)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: default_catalog_source(),
            origin: default_origin(),
        }
    }
}

/// Destination extraction settings.
#[derive(Debug, Clone, Deserialize)]
pub struct NluConfig {
    /// City assumed when none is heard.
    #[serde(default = "default_destination")]
    pub default_destination: String,

    /// Cities recognised by name, in priority order.
    #[serde(default = "default_cities")]
    pub cities: Vec<String>,
}

impl Default for NluConfig {
    fn default() -> Self {
        Self {
            default_destination: default_destination(),
            cities: default_cities(),
        }
    }
}

/// Spoken response settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    /// How many of the cheapest flights the summary reads out.
    #[serde(default = "default_spoken_options")]
    pub spoken_options: usize,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            spoken_options: default_spoken_options(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for daily-rotated JSON logs; console only when unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: None,
        }
    }
}

// Default value functions for serde

fn default_catalog_source() -> String {
    "data/flights.json".to_owned()
}
fn default_origin() -> String {
    DEFAULT_ORIGIN.to_owned()
}
fn default_destination() -> String {
    DEFAULT_DESTINATION.to_owned()
}
fn default_cities() -> Vec<String> {
    KNOWN_CITIES.iter().map(|c| (*c).to_owned()).collect()
}
fn default_spoken_options() -> usize {
    DEFAULT_SPOKEN_OPTIONS
}
fn default_log_level() -> String {
    "info".to_owned()
}

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config at {}", path.display()))?;
    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config at {}", path.display()))?;
    Ok(config)
}

/// Load `~/.wayfarer/wayfarer.toml`, or defaults if it does not exist.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined or an
/// existing file cannot be read or parsed.
pub fn load_default_config() -> anyhow::Result<Config> {
    let path = config_dir()?.join(CONFIG_FILE);
    if path.exists() {
        load_config(&path)
    } else {
        Ok(Config::default())
    }
}

/// Resolve the default config directory (`~/.wayfarer/`).
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn config_dir() -> anyhow::Result<PathBuf> {
    let home = directories::BaseDirs::new()
        .ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
    Ok(home.home_dir().join(".wayfarer"))
}
