//! # Configuration
//!
//! Settings live in `config.json` next to the data files. A missing file means
//! defaults; missing keys inside the file fall back to their individual defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `time-limit` | `300` | Seconds allowed for a whole quiz run |
//! | `export-prefix` | `cyberpunk-quiz-results` | File name prefix for CSV/JSON exports |

use crate::error::{QuizError, Result};
use crate::session::DEFAULT_TIME_LIMIT_SECS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_EXPORT_PREFIX: &str = "cyberpunk-quiz-results";

pub const CONFIG_KEYS: [&str; 2] = ["time-limit", "export-prefix"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct QuizConfig {
    /// Seconds allowed for one quiz run
    #[serde(default = "default_time_limit")]
    pub time_limit: u64,

    /// Prefix for exported result files
    #[serde(default = "default_export_prefix")]
    pub export_prefix: String,
}

fn default_time_limit() -> u64 {
    DEFAULT_TIME_LIMIT_SECS
}

fn default_export_prefix() -> String {
    DEFAULT_EXPORT_PREFIX.to_string()
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            time_limit: default_time_limit(),
            export_prefix: default_export_prefix(),
        }
    }
}

impl QuizConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(QuizError::Io)?;
        let config: QuizConfig =
            serde_json::from_str(&content).map_err(QuizError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(QuizError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(QuizError::Serialization)?;
        fs::write(config_path, content).map_err(QuizError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "time-limit" => Ok(self.time_limit.to_string()),
            "export-prefix" => Ok(self.export_prefix.clone()),
            _ => Err(unknown_key(key)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "time-limit" => {
                let secs: u64 = value.trim().parse().map_err(|_| {
                    QuizError::Config(format!("time-limit must be a number of seconds, got {:?}", value))
                })?;
                if secs == 0 {
                    return Err(QuizError::Config("time-limit must be positive".into()));
                }
                self.time_limit = secs;
            }
            "export-prefix" => {
                let prefix = value.trim();
                if prefix.is_empty() || prefix.contains(['/', '\\']) {
                    return Err(QuizError::Config(format!(
                        "export-prefix must be a plain file name prefix, got {:?}",
                        value
                    )));
                }
                self.export_prefix = prefix.to_string();
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> QuizError {
    QuizError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = QuizConfig::default();
        assert_eq!(config.time_limit, 300);
        assert_eq!(config.export_prefix, "cyberpunk-quiz-results");
    }

    #[test]
    fn missing_keys_fall_back_individually() {
        let config: QuizConfig = serde_json::from_str(r#"{"time-limit": 60}"#).unwrap();
        assert_eq!(config.time_limit, 60);
        assert_eq!(config.export_prefix, "cyberpunk-quiz-results");
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut config = QuizConfig::default();
        config.set("time-limit", "120").unwrap();
        config.set("export-prefix", "scores").unwrap();
        assert_eq!(config.get("time-limit").unwrap(), "120");
        assert_eq!(config.get("export-prefix").unwrap(), "scores");
    }

    #[test]
    fn rejects_bad_values() {
        let mut config = QuizConfig::default();
        assert!(config.set("time-limit", "soon").is_err());
        assert!(config.set("time-limit", "0").is_err());
        assert!(config.set("export-prefix", "../x").is_err());
        assert!(config.set("colour", "green").is_err());
        assert_eq!(config, QuizConfig::default());
    }

    #[test]
    fn load_missing_dir_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = QuizConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, QuizConfig::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = QuizConfig::default();
        config.time_limit = 42;
        config.save(dir.path()).unwrap();
        assert_eq!(QuizConfig::load(dir.path()).unwrap(), config);
    }
}
