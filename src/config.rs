// Configuration module for the improved Tears of Guthix interface

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

// =============================================================================
// CONFIGURATION STRUCTURES
// =============================================================================

/// Interface display settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceSettings {
    /// Alternate colors on odd ticks for urgent states
    #[serde(default = "default_flashing_text")]
    pub flashing_text: bool,

    /// Float +N / -N next to the counter when the tears count changes
    #[serde(default = "default_show_plus_minus")]
    pub show_plus_minus_on_collect: bool,
}

fn default_flashing_text() -> bool {
    true
}
fn default_show_plus_minus() -> bool {
    true
}

impl Default for InterfaceSettings {
    fn default() -> Self {
        Self {
            flashing_text: default_flashing_text(),
            show_plus_minus_on_collect: default_show_plus_minus(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LoggingSettings {
    /// Also log to stdout
    #[serde(default)]
    pub console: bool,
    /// Log file path (relative to the config file or absolute). Empty = no file logging.
    #[serde(default)]
    pub log_file: String,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub interface: InterfaceSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

// =============================================================================
// CONFIG LOADING
// =============================================================================

#[derive(Debug)]
pub enum ConfigError {
    ReadError(std::io::Error),
    ParseError(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(e) => write!(f, "Failed to read config file: {}", e),
            ConfigError::ParseError(e) => write!(f, "Failed to parse config file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub const CONFIG_FILENAME: &'static str = "improved_tears.toml";

    /// Parse configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(ConfigError::ParseError)
    }

    /// Load `improved_tears.toml` from a directory.
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        Self::load(&dir.join(Self::CONFIG_FILENAME))
    }

    /// Load configuration from a file, using defaults if it does not exist
    pub fn load(config_path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %config_path.display(), "[config] Looking for config");

        if !config_path.exists() {
            debug!("[config] No config found, using defaults");
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path).map_err(ConfigError::ReadError)?;
        let config = Self::from_toml_str(&contents)?;
        info!(
            path = %config_path.display(),
            flashing_text = config.interface.flashing_text,
            show_plus_minus_on_collect = config.interface.show_plus_minus_on_collect,
            "[config] Loaded config"
        );
        Ok(config)
    }

    /// Resolved log file path, if file logging is enabled
    ///
    /// Relative paths are taken relative to `base_dir`.
    pub fn log_file_path(&self, base_dir: &Path) -> Option<PathBuf> {
        if self.logging.log_file.is_empty() {
            return None;
        }
        let path = PathBuf::from(&self.logging.log_file);
        if path.is_absolute() {
            Some(path)
        } else {
            Some(base_dir.join(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "improved_tears_{}_{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.interface.flashing_text);
        assert!(config.interface.show_plus_minus_on_collect);
        assert!(!config.logging.console);
        assert!(config.logging.log_file.is_empty());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = Config::from_toml_str(
            r#"
            [interface]
            flashing_text = false
            "#,
        )
        .unwrap();
        assert!(!config.interface.flashing_text);
        assert!(config.interface.show_plus_minus_on_collect);
        assert_eq!(config.logging, LoggingSettings::default());
    }

    #[test]
    fn test_full_toml() {
        let config = Config::from_toml_str(
            r#"
            [interface]
            flashing_text = true
            show_plus_minus_on_collect = false

            [logging]
            console = true
            log_file = "tears.log"
            "#,
        )
        .unwrap();
        assert!(!config.interface.show_plus_minus_on_collect);
        assert!(config.logging.console);
        assert_eq!(config.logging.log_file, "tears.log");
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = Config::from_toml_str("[interface\nflashing_text = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let err = Config::from_toml_str("[interface]\nflashing_text = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = temp_dir("missing");
        let config = Config::load(&dir.join("does_not_exist.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_dir() {
        let dir = temp_dir("load");
        let mut file = fs::File::create(dir.join(Config::CONFIG_FILENAME)).unwrap();
        writeln!(file, "[interface]\nshow_plus_minus_on_collect = false").unwrap();
        drop(file);

        let config = Config::load_from_dir(&dir).unwrap();
        assert!(!config.interface.show_plus_minus_on_collect);
        assert!(config.interface.flashing_text);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_log_file_path() {
        let base = Path::new("/opt/tears");
        let mut config = Config::default();
        assert_eq!(config.log_file_path(base), None);

        config.logging.log_file = "tears.log".to_string();
        assert_eq!(
            config.log_file_path(base),
            Some(PathBuf::from("/opt/tears/tears.log"))
        );

        config.logging.log_file = "/var/log/tears.log".to_string();
        assert_eq!(
            config.log_file_path(base),
            Some(PathBuf::from("/var/log/tears.log"))
        );
    }

    #[test]
    fn test_shipped_config_parses() {
        let config = Config::from_toml_str(include_str!("../improved_tears.toml")).unwrap();
        assert_eq!(config.interface, InterfaceSettings::default());
    }
}
