//! Application configuration
//!
//! Loaded from `{config_dir}/vocards/config.toml` (or an explicit path).
//! A missing file means defaults. `ANTHROPIC_API_KEY` and `VOCARDS_API_URL`
//! take precedence over the file so the key never has to be written to disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::flashcards::{
    LanguagePair, DEFAULT_GENERATION_COUNT, MAX_GENERATION_COUNT, MIN_GENERATION_COUNT,
};

pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
pub const API_URL_ENV: &str = "VOCARDS_API_URL";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Settings for the text-generation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub api_version: String,
    pub generation_max_tokens: u32,
    pub translation_max_tokens: u32,
    pub generation_timeout_secs: u64,
    pub translation_timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.anthropic.com".to_string(),
            api_key: String::new(),
            model: "claude-sonnet-4-20250514".to_string(),
            api_version: "2023-06-01".to_string(),
            generation_max_tokens: 2000,
            translation_max_tokens: 200,
            generation_timeout_secs: 30,
            translation_timeout_secs: 15,
        }
    }
}

/// Form defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub language_pair: LanguagePair,
    pub card_count: u8,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            language_pair: LanguagePair::default(),
            card_count: DEFAULT_GENERATION_COUNT,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub gateway: GatewayConfig,
    pub defaults: DefaultsConfig,
}

impl AppConfig {
    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vocards").join("config.toml"))
    }

    /// Load from `path` (or the default location), then apply environment
    /// overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::default_path(),
        };

        let mut config = match path {
            Some(ref p) if p.exists() => {
                log::info!("Loading config from {}", p.display());
                Self::from_toml(&fs::read_to_string(p)?)?
            }
            Some(ref p) => {
                log::debug!("No config at {}, using defaults", p.display());
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Override file values with non-empty environment values
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.trim().is_empty()) {
            self.gateway.api_key = key.trim().to_string();
        }
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.gateway.api_url = url.trim().to_string();
        }
    }

    pub fn validate(&self) -> Result<()> {
        let count = self.defaults.card_count;
        if !(MIN_GENERATION_COUNT..=MAX_GENERATION_COUNT).contains(&count) {
            return Err(ConfigError::Invalid(format!(
                "defaults.card_count must be between {} and {}, got {}",
                MIN_GENERATION_COUNT, MAX_GENERATION_COUNT, count
            )));
        }

        let url = &self.gateway.api_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::Invalid(
                "gateway.api_url must start with http:// or https://".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.gateway.model, "claude-sonnet-4-20250514");
        assert_eq!(config.gateway.generation_max_tokens, 2000);
        assert_eq!(config.gateway.translation_timeout_secs, 15);
        assert_eq!(config.defaults.card_count, 10);
        assert_eq!(config.defaults.language_pair, LanguagePair::RuEn);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [gateway]
            model = "claude-haiku"

            [defaults]
            language_pair = "en-ru"
            "#,
        )
        .unwrap();

        assert_eq!(config.gateway.model, "claude-haiku");
        assert_eq!(config.gateway.api_url, "https://api.anthropic.com");
        assert_eq!(config.defaults.language_pair, LanguagePair::EnRu);
        assert_eq!(config.defaults.card_count, 10);
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = AppConfig::from_toml(
            r#"
            [gateway]
            api_key = "from-file"
            "#,
        )
        .unwrap();

        config.apply_env(|key| match key {
            API_KEY_ENV => Some("from-env".to_string()),
            API_URL_ENV => Some("   ".to_string()),
            _ => None,
        });

        assert_eq!(config.gateway.api_key, "from-env");
        assert_eq!(config.gateway.api_url, "https://api.anthropic.com");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let config = AppConfig::from_toml("[defaults]\ncard_count = 30\n").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = AppConfig::from_toml("[gateway]\napi_url = \"ftp://x\"\n").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        assert!(matches!(
            AppConfig::from_toml("[defaults]\nlanguage_pair = \"de-en\"\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[defaults]\ncard_count = 15\n").unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.defaults.card_count, 15);

        let missing = temp.path().join("missing.toml");
        let config = AppConfig::load(Some(&missing)).unwrap();
        assert_eq!(config.defaults.card_count, 10);
    }
}
