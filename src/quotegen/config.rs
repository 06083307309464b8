use crate::commands::SelectionPolicy;
use crate::error::{QuoteError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for quotegen, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteConfig {
    /// Maximum number of quotes per selection; `None` returns all of them
    #[serde(default)]
    pub max_quotes: Option<usize>,

    /// Artificial delay before a submission completes, in milliseconds
    #[serde(default)]
    pub loading_delay_ms: u64,

    /// External corpus file; `None` uses the bundled quotes
    #[serde(default)]
    pub corpus_path: Option<PathBuf>,
}

/// Keys accepted by `quotegen config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    MaxQuotes,
    DelayMs,
    Corpus,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 3] = [ConfigKey::MaxQuotes, ConfigKey::DelayMs, ConfigKey::Corpus];

    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::MaxQuotes => "max-quotes",
            ConfigKey::DelayMs => "delay-ms",
            ConfigKey::Corpus => "corpus",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigKey {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self> {
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| QuoteError::Config(format!("Unknown config key: {}", s)))
    }
}

impl QuoteConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: QuoteConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn policy(&self) -> SelectionPolicy {
        SelectionPolicy::from_limit(self.max_quotes)
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    /// Current value of a key, formatted the way `set` accepts it.
    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::MaxQuotes => self
                .max_quotes
                .map(|n| n.to_string())
                .unwrap_or_else(|| "all".to_string()),
            ConfigKey::DelayMs => self.loading_delay_ms.to_string(),
            ConfigKey::Corpus => self
                .corpus_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "bundled".to_string()),
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            ConfigKey::MaxQuotes => {
                self.max_quotes = if value.eq_ignore_ascii_case("all") {
                    None
                } else {
                    match value.parse::<usize>() {
                        Ok(0) | Err(_) => {
                            return Err(QuoteError::Config(format!(
                                "max-quotes must be a positive number or \"all\", got \"{}\"",
                                value
                            )))
                        }
                        Ok(n) => Some(n),
                    }
                };
            }
            ConfigKey::DelayMs => {
                self.loading_delay_ms = value.parse().map_err(|_| {
                    QuoteError::Config(format!(
                        "delay-ms must be a number of milliseconds, got \"{}\"",
                        value
                    ))
                })?;
            }
            ConfigKey::Corpus => {
                self.corpus_path = if value.is_empty() || value == "bundled" {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QuoteConfig::default();
        assert_eq!(config.max_quotes, None);
        assert_eq!(config.loading_delay_ms, 0);
        assert_eq!(config.policy(), SelectionPolicy::Full);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = QuoteConfig::load(dir.path()).unwrap();
        assert_eq!(config, QuoteConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");

        let mut config = QuoteConfig::default();
        config.set(ConfigKey::MaxQuotes, "3").unwrap();
        config.set(ConfigKey::DelayMs, "250").unwrap();
        config.save(&nested).unwrap();

        let loaded = QuoteConfig::load(&nested).unwrap();
        assert_eq!(loaded.policy(), SelectionPolicy::Capped(3));
        assert_eq!(loaded.loading_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: QuoteConfig = serde_json::from_str(r#"{"max_quotes": 5}"#).unwrap();
        assert_eq!(config.max_quotes, Some(5));
        assert_eq!(config.loading_delay_ms, 0);
        assert_eq!(config.corpus_path, None);
    }

    #[test]
    fn test_set_max_quotes_all_and_invalid() {
        let mut config = QuoteConfig::default();
        config.set(ConfigKey::MaxQuotes, "3").unwrap();
        config.set(ConfigKey::MaxQuotes, "ALL").unwrap();
        assert_eq!(config.max_quotes, None);

        assert!(config.set(ConfigKey::MaxQuotes, "0").is_err());
        assert!(config.set(ConfigKey::MaxQuotes, "many").is_err());
        assert!(config.set(ConfigKey::DelayMs, "-1").is_err());
    }

    #[test]
    fn test_corpus_key() {
        let mut config = QuoteConfig::default();
        config.set(ConfigKey::Corpus, "/tmp/quotes.json").unwrap();
        assert_eq!(config.get(ConfigKey::Corpus), "/tmp/quotes.json");
        config.set(ConfigKey::Corpus, "bundled").unwrap();
        assert_eq!(config.corpus_path, None);
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!("max-quotes".parse::<ConfigKey>().unwrap(), ConfigKey::MaxQuotes);
        assert_eq!("delay-ms".parse::<ConfigKey>().unwrap(), ConfigKey::DelayMs);
        assert!("file-ext".parse::<ConfigKey>().is_err());
    }
}
