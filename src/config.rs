//! Persistent configuration.
//!
//! Stored as TOML under the platform config directory
//! (`~/.config/confsift/config.toml` on Linux). Every field has a default so
//! a missing or partial file never fails; CLI flags override whatever the
//! file says.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::enrich::DEFAULT_SUMMARY_WORDS;
use crate::parser::{SplitMode, TimeMode, DEFAULT_VENUE_KEYWORDS};

/// Tool configuration, TOML round-tripped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Substrings that classify a block as naming a venue.
    pub venue_keywords: Vec<String>,
    /// Default block splitting mode.
    pub split_mode: SplitMode,
    /// Default time recognition mode.
    pub time_mode: TimeMode,
    /// Word cap for extractive summaries.
    pub summary_words: usize,
    /// Default interest keywords, comma-separated.
    pub keywords: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            venue_keywords: DEFAULT_VENUE_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            split_mode: SplitMode::default(),
            time_mode: TimeMode::default(),
            summary_words: DEFAULT_SUMMARY_WORDS,
            keywords: String::new(),
        }
    }
}

impl Config {
    /// Path of the config file inside the platform config directory.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join("confsift").join("config.toml"))
    }

    /// Loads the config file, falling back to defaults when it doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.venue_keywords, config.venue_keywords);
        assert_eq!(parsed.split_mode, config.split_mode);
        assert_eq!(parsed.summary_words, DEFAULT_SUMMARY_WORDS);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: Config = toml::from_str("summary_words = 10").unwrap();
        assert_eq!(config.summary_words, 10);
        assert_eq!(config.time_mode, TimeMode::default());
        assert!(!config.venue_keywords.is_empty());
    }

    #[test]
    fn modes_serialize_kebab_case() {
        let config = Config {
            split_mode: SplitMode::BlankLine,
            time_mode: TimeMode::Scan,
            ..Config::default()
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("split_mode = \"blank-line\""));
        assert!(toml_str.contains("time_mode = \"scan\""));
    }
}
