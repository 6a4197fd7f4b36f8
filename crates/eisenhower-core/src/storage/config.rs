//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Input form defaults (urgency and importance sliders)
//! - Display settings for the task list and quadrant panels
//! - Log verbosity
//!
//! Configuration is stored at `~/.config/eisenhower/config.toml`.
//! Tasks themselves are never written to disk.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::ConfigError;
use crate::form::InputForm;
use crate::task::Score;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const MAX_PRIORITY_PRECISION: usize = 4;

/// Input form defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub default_urgency: Score,
    #[serde(default)]
    pub default_importance: Score,
}

/// Display configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Decimal places on the priority badge.
    #[serde(default = "default_precision")]
    pub priority_precision: usize,
    /// Whether completed tasks still appear in the quadrant panels.
    #[serde(default = "default_true")]
    pub show_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/eisenhower/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

// Default functions
fn default_precision() -> usize {
    1
}
fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".into()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            default_urgency: Score::NEUTRAL,
            default_importance: Score::NEUTRAL,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            priority_precision: default_precision(),
            show_completed: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(ConfigError::UnknownKey(key.to_string()));
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|_| invalid(format!("'{value}' is not a bool")))?,
                    ),
                    serde_json::Value::Number(_) => value
                        .parse::<u64>()
                        .map(|n| serde_json::Value::Number(n.into()))
                        .map_err(|_| invalid(format!("'{value}' is not a whole number")))?,
                    serde_json::Value::Object(_) => {
                        return Err(invalid("cannot replace a whole section".to_string()))
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }

        Err(ConfigError::UnknownKey(key.to_string()))
    }

    /// Default location of the config file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from `path`, writing defaults there if the file is missing.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to `path`, creating its parent directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| save_failed(e.to_string()))?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Check values the type system can't express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.priority_precision > MAX_PRIORITY_PRECISION {
            return Err(ConfigError::InvalidValue {
                key: "display.priority_precision".to_string(),
                message: format!("must be at most {MAX_PRIORITY_PRECISION}"),
            });
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                key: "logging.level".to_string(),
                message: format!("expected one of {}", LOG_LEVELS.join(", ")),
            });
        }
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key. The change is only applied
    /// if the resulting config is valid; call [`Config::save_to`] to persist it.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is invalid.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// A fresh input form using the configured slider defaults.
    pub fn input_form(&self) -> InputForm {
        InputForm::with_defaults(self.input.default_urgency, self.input.default_importance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
        assert_eq!(parsed.input.default_urgency.get(), 5);
        assert_eq!(parsed.display.priority_precision, 1);
    }

    #[test]
    fn missing_sections_take_defaults() {
        let parsed: Config = toml::from_str("[display]\nshow_completed = false\n").unwrap();
        assert!(!parsed.display.show_completed);
        assert_eq!(parsed.display.priority_precision, 1);
        assert_eq!(parsed.input, InputConfig::default());
        assert_eq!(parsed.logging.level, "warn");
    }

    #[test]
    fn out_of_range_score_fails_to_parse() {
        let result: Result<Config, _> = toml::from_str("[input]\ndefault_urgency = 11\n");
        assert!(result.is_err());
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("input.default_urgency").as_deref(), Some("5"));
        assert_eq!(cfg.get("display.show_completed").as_deref(), Some("true"));
        assert_eq!(cfg.get("logging.level").as_deref(), Some("warn"));
        assert!(cfg.get("display.missing_key").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn set_updates_values() {
        let mut cfg = Config::default();
        cfg.set("input.default_importance", "7").unwrap();
        cfg.set("display.show_completed", "false").unwrap();
        cfg.set("logging.level", "debug").unwrap();
        assert_eq!(cfg.input.default_importance.get(), 7);
        assert!(!cfg.display.show_completed);
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("display.nonexistent_key", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn set_rejects_invalid_values_and_keeps_state() {
        let mut cfg = Config::default();
        assert!(cfg.set("input.default_urgency", "0").is_err());
        assert!(cfg.set("input.default_urgency", "11").is_err());
        assert!(cfg.set("display.show_completed", "maybe").is_err());
        assert!(cfg.set("display.priority_precision", "9").is_err());
        assert!(cfg.set("logging.level", "loud").is_err());
        assert!(cfg.set("input", "3").is_err());
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn load_from_writes_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.set("input.default_urgency", "8").unwrap();
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn load_from_creates_missing_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("config.toml");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn load_from_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"shouty\"\n").unwrap();
        assert!(Config::load_from(&path).is_err());
        std::fs::write(&path, "not = [valid").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::LoadFailed { .. })
        ));
    }

    #[test]
    fn input_form_uses_defaults() {
        let mut cfg = Config::default();
        cfg.set("input.default_urgency", "2").unwrap();
        let form = cfg.input_form();
        assert_eq!((form.urgency, form.importance), (2, 5));
    }
}
