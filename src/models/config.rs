//! Configuration model.

use crate::models::language::{locate_language, Language};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ranking configuration.
    pub ranking: RankingConfig,
    /// Search configuration.
    pub search: SearchConfig,
    /// Preferred subtitle languages (ISO code or full name), most wanted first.
    pub languages: Vec<String>,
}

/// Ranking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Weight (0-100) of input identifiers missing from a candidate.
    pub input_ratio: u8,
    /// Rank given to versions the provider flagged as certain matches.
    pub certain_match_rank: f64,
}

/// Search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum providers queried at once.
    pub max_concurrent_providers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ranking: RankingConfig::default(),
            search: SearchConfig::default(),
            languages: vec!["eng".to_string()],
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            input_ratio: 90,
            certain_match_rank: 100.0,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_concurrent_providers: 4,
        }
    }
}

impl Config {
    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.ranking.input_ratio > 100 {
            return Err(Error::InvalidConfig(format!(
                "ranking.input_ratio must be between 0 and 100 (got {})",
                self.ranking.input_ratio
            )));
        }
        if !(0.0..=100.0).contains(&self.ranking.certain_match_rank) {
            return Err(Error::InvalidConfig(format!(
                "ranking.certain_match_rank must be between 0 and 100 (got {})",
                self.ranking.certain_match_rank
            )));
        }
        if self.search.max_concurrent_providers == 0 {
            return Err(Error::InvalidConfig(
                "search.max_concurrent_providers must be at least 1".to_string(),
            ));
        }
        self.preferred_languages()?;
        Ok(())
    }

    /// Resolve the preferred languages through the registry.
    pub fn preferred_languages(&self) -> Result<Vec<&'static Language>> {
        self.languages
            .iter()
            .map(|name| {
                locate_language(name).ok_or_else(|| Error::UnsupportedLanguage(name.clone()))
            })
            .collect()
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("subit")
}

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs_config_path().join("config.toml")
}

/// Load and validate configuration from a specific file.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from the default location, falling back to defaults.
pub fn load_config() -> Config {
    let config_path = default_config_path();

    if config_path.exists() {
        match load_config_from(&config_path) {
            Ok(config) => return config,
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", config_path.display(), e);
            }
        }
    }

    Config::default()
}
