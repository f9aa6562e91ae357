//! Configuration for the ketbook CLI.
//!
//! Sources, highest precedence first:
//! 1. Command-line flags (applied by the caller)
//! 2. Environment variables (`KETBOOK_` prefix)
//! 3. Configuration file (YAML): `--config <path>`, else
//!    `~/.ketbook/config.yaml` when present
//! 4. Default values

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::logging::LogFormat;

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// How rendered bundles are written
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON bundles
    #[serde(default)]
    pub pretty: bool,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive (e.g. "debug", "ketbook_display=trace").
    /// When unset the `-v` count decides.
    #[serde(default)]
    pub level: Option<String>,

    /// Log format: "console" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            format: default_log_format(),
        }
    }
}

fn default_log_format() -> String {
    "console".to_string()
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config =
            serde_yaml_ng::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit file, the default file, or
    /// defaults, then apply environment overrides.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path().filter(|p| p.is_file()) {
                Some(path) => {
                    tracing::debug!(path = %path.display(), "using default config file");
                    Self::from_file(path)?
                }
                None => Config::default(),
            },
        };

        let config = config.merge_env();
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    fn merge_env(self) -> Self {
        self.merge_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`.
    ///
    /// Only variables that are set override the current values. A
    /// `KETBOOK_PRETTY` value that is not a boolean is ignored.
    pub fn merge_env_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("KETBOOK_PRETTY") {
            if let Some(pretty) = parse_bool(&v) {
                self.output.pretty = pretty;
            }
        }
        if let Some(v) = lookup("KETBOOK_LOG_LEVEL") {
            self.logging.level = Some(v);
        }
        if let Some(v) = lookup("KETBOOK_LOG_FORMAT") {
            self.logging.format = v;
        }
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.log_format()?;
        if let Some(level) = &self.logging.level {
            if level.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "logging.level must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Parsed log format.
    pub fn log_format(&self) -> Result<LogFormat, ConfigError> {
        match self.logging.format.to_lowercase().as_str() {
            "console" => Ok(LogFormat::Console),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::Invalid(format!(
                "unknown log format '{other}' (expected 'console' or 'json')"
            ))),
        }
    }
}

/// `~/.ketbook/config.yaml`, if a home directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".ketbook").join("config.yaml"))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
