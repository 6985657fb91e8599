use crate::error::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const HOME_ENV: &str = "FLASHCARDS_HOME";

/// User defaults, stored in `<config dir>/config.json`. Command-line flags win over these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlashcardsConfig {
    /// Card file loaded before the first prompt
    #[serde(default)]
    pub import_from: Option<PathBuf>,

    /// Card file written on `exit`
    #[serde(default)]
    pub export_to: Option<PathBuf>,

    /// Colorize result messages on a terminal
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for FlashcardsConfig {
    fn default() -> Self {
        Self {
            import_from: None,
            export_to: None,
            color: default_color(),
        }
    }
}

impl FlashcardsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: FlashcardsConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}

/// Explicit directory first, then `$FLASHCARDS_HOME`, then the platform config dir.
pub fn resolve_config_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .or_else(|| std::env::var_os(HOME_ENV).map(PathBuf::from))
        .or_else(|| {
            ProjectDirs::from("com", "flashcards", "flashcards")
                .map(|dirs| dirs.config_dir().to_path_buf())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FlashcardsConfig::default();
        assert!(config.color);
        assert!(config.import_from.is_none());
        assert!(config.export_to.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = FlashcardsConfig::load(dir.path()).unwrap();
        assert_eq!(config, FlashcardsConfig::default());
    }

    #[test]
    fn test_load_full_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = FlashcardsConfig {
            import_from: Some(PathBuf::from("in.txt")),
            export_to: Some(PathBuf::from("out.txt")),
            color: false,
        };
        let json = serde_json::to_string_pretty(&config).unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), json).unwrap();

        let loaded = FlashcardsConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"export_to": "deck.txt"}"#).unwrap();

        let loaded = FlashcardsConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.export_to, Some(PathBuf::from("deck.txt")));
        assert!(loaded.color);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();
        assert!(FlashcardsConfig::load(dir.path()).is_err());
    }

    #[test]
    fn test_explicit_dir_wins() {
        let dir = PathBuf::from("/tmp/explicit-flashcards");
        assert_eq!(resolve_config_dir(Some(dir.clone())), Some(dir));
    }
}
