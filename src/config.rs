//! Application configuration read from the environment.

use crate::models::settings::{DEFAULT_THRESHOLD, parse_count};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = "db.sqlite3";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Remote card service; the local SQLite store is used when unset.
    pub api_url: Option<String>,
    pub db_path: PathBuf,
    pub threshold: u32,
    /// `None` means "the whole deck".
    pub sample_size: Option<u32>,
    pub persist_attempts: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            threshold: DEFAULT_THRESHOLD,
            sample_size: None,
            persist_attempts: false,
        }
    }
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let api_url = lookup("FLASHCARDS_API_URL").filter(|url| !url.trim().is_empty());
        let db_path = lookup("FLASHCARDS_DB_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);
        let threshold = lookup("FLASHCARDS_THRESHOLD")
            .map(|value| parse_count(&value))
            .unwrap_or(defaults.threshold);
        let sample_size = lookup("FLASHCARDS_SAMPLE_SIZE").map(|value| parse_count(&value));
        let persist_attempts = lookup("FLASHCARDS_PERSIST")
            .map(|value| parse_flag(&value))
            .unwrap_or(defaults.persist_attempts);

        Self {
            api_url,
            db_path,
            threshold,
            sample_size,
            persist_attempts,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn test_reads_all_keys() {
        let config = config_from(&[
            ("FLASHCARDS_API_URL", "https://cards.example.com/prod"),
            ("FLASHCARDS_DB_PATH", "/tmp/cards.db"),
            ("FLASHCARDS_THRESHOLD", "3"),
            ("FLASHCARDS_SAMPLE_SIZE", "10"),
            ("FLASHCARDS_PERSIST", "true"),
        ]);

        assert_eq!(config.api_url.as_deref(), Some("https://cards.example.com/prod"));
        assert_eq!(config.db_path, PathBuf::from("/tmp/cards.db"));
        assert_eq!(config.threshold, 3);
        assert_eq!(config.sample_size, Some(10));
        assert!(config.persist_attempts);
    }

    #[test]
    fn test_malformed_numbers_become_zero() {
        let config = config_from(&[
            ("FLASHCARDS_THRESHOLD", ""),
            ("FLASHCARDS_SAMPLE_SIZE", "lots"),
            ("FLASHCARDS_API_URL", "  "),
        ]);

        assert_eq!(config.threshold, 0);
        assert_eq!(config.sample_size, Some(0));
        assert_eq!(config.api_url, None);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("YES"));
        assert!(parse_flag(" 1 "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("nope"));
    }
}
