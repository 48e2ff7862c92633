//! `species-stat.toml` configuration shared by the web server and the CLI.

use crate::builtin;
use crate::error::ConfigError;
use crate::summary::DEFAULT_MAX_NOTES;
use crate::taxonomy::{Taxonomy, TaxonomyDefinition};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name searched for in the current and parent directories.
pub const CONFIG_FILE: &str = "species-stat.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub taxonomy: TaxonomyConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

/// Where taxonomy definitions come from. Built-in data when `path` is unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryConfig {
    #[serde(default = "default_max_notes")]
    pub max_notes: usize,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3000 }
fn default_db_path() -> PathBuf { PathBuf::from(".species-stat/survey.db") }
fn default_max_notes() -> usize { DEFAULT_MAX_NOTES }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_notes: default_max_notes(),
        }
    }
}

impl Config {
    /// Load `species-stat.toml` from the current or a parent directory,
    /// falling back to defaults when none exists.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::current_dir().ok().and_then(|dir| find_config_file(&dir)) {
            Some(path) => Self::from_path(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config = toml::from_str(&content).map_err(|e| ConfigError::parse(path, e.to_string()))?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::io(path, e))
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load the configured taxonomy.
    pub fn load_taxonomy(&self) -> Result<Taxonomy, ConfigError> {
        let definition = match &self.taxonomy.path {
            Some(path) => read_definition(path)?,
            None => builtin::definition(),
        };
        Ok(Taxonomy::load(definition)?)
    }
}

/// Read a taxonomy definition; `.json` files are JSON, anything else TOML.
pub fn read_definition(path: &Path) -> Result<TaxonomyDefinition, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        serde_json::from_str(&content).map_err(|e| ConfigError::parse(path, e.to_string()))
    } else {
        toml::from_str(&content).map_err(|e| ConfigError::parse(path, e.to_string()))
    }
}

/// Find `species-stat.toml` in `start` or one of its parents.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.exists() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}
