use crate::error::{MeditateError, Result};
use crate::model::Language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_MINUTES: f64 = 5.0;
/// Longest default session that can be stored. Sessions requested directly are unbounded.
const MAX_DEFAULT_MINUTES: f64 = 24.0 * 60.0;

pub const LANGUAGE_KEY: &str = "language";
pub const MINUTES_KEY: &str = "minutes";
pub const KEYS: [&str; 2] = [LANGUAGE_KEY, MINUTES_KEY];

/// User defaults, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeditateConfig {
    /// Language used when none is given on the command line
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Session length used when none is given on the command line
    #[serde(default = "default_minutes")]
    pub default_minutes: f64,
}

fn default_language() -> String {
    Language::DEFAULT.as_str().to_string()
}

fn default_minutes() -> f64 {
    DEFAULT_MINUTES
}

impl Default for MeditateConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            default_minutes: DEFAULT_MINUTES,
        }
    }
}

impl MeditateConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: MeditateConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Current value of a key, formatted for display
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            LANGUAGE_KEY => Ok(self.default_language.clone()),
            MINUTES_KEY => Ok(self.default_minutes.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    /// Sets a key from its textual form, validating the value
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            LANGUAGE_KEY => {
                let language = Language::parse(value).ok_or_else(|| {
                    MeditateError::Config(format!("Unsupported language: {}", value))
                })?;
                self.default_language = language.as_str().to_string();
            }
            MINUTES_KEY => {
                let minutes: f64 = value.trim().parse().map_err(|_| {
                    MeditateError::Config(format!("Not a number of minutes: {}", value))
                })?;
                if !minutes.is_finite() || minutes <= 0.0 || minutes > MAX_DEFAULT_MINUTES {
                    return Err(MeditateError::Config(format!(
                        "Minutes must be between 0 and {}: {}",
                        MAX_DEFAULT_MINUTES, value
                    )));
                }
                self.default_minutes = minutes;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> MeditateError {
    MeditateError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        KEYS.join(", ")
    ))
}
