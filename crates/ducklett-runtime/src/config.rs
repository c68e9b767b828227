use crate::Result;
use ducklett_engine::DEFAULT_LOCALE;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_DECLINE_TIMEOUT_MS: u64 = 1500;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Contents of `<workspace>/config.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Locale for the confirmation date, e.g. `es_ES` or `en_US`
    pub locale: String,

    /// How long the decision buttons stay disabled after a "no"
    pub decline_timeout_ms: u64,

    pub sound: bool,

    /// Default filter when neither `DUCKLETT_LOG` nor `--log-level` is set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            decline_timeout_ms: DEFAULT_DECLINE_TIMEOUT_MS,
            sound: true,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn decline_timeout(&self) -> Duration {
        Duration::from_millis(self.decline_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.locale, "es_ES");
        assert_eq!(config.decline_timeout(), Duration::from_millis(1500));
        assert!(config.sound);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            locale: "en_US".to_string(),
            decline_timeout_ms: 500,
            sound: false,
            log_level: "debug".to_string(),
        };
        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "sound = false\n")?;

        let loaded = Config::load_from(&config_path)?;
        assert!(!loaded.sound);
        assert_eq!(loaded.locale, "es_ES");
        assert_eq!(loaded.decline_timeout_ms, 1500);
        Ok(())
    }

    #[test]
    fn test_invalid_file_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "decline_timeout_ms = \"soon\"\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());
        Ok(())
    }
}
