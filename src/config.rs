//! Service configuration.
//!
//! Settings come from three layers, later layers winning:
//!   1. built-in defaults
//!   2. an optional TOML file (`watertrace.toml`, or `WATERTRACE_CONFIG`)
//!   3. environment variables (a `.env` file is loaded by `main`)
//!
//! # Environment injection
//! `apply_env_overrides` takes a lookup function instead of reading
//! `std::env` directly, so tests can supply variables without touching the
//! process environment.

use serde::Deserialize;
use std::path::Path;

use crate::logging::LogLevel;
use crate::model::ConfigError;

/// Config file read when `WATERTRACE_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "./watertrace.toml";

// ---------------------------------------------------------------------------
// Configuration sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub predict: PredictConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `debug`, `info`, `warn`, `error`.
    pub level: String,
    /// Append-only log file, in addition to the console.
    pub file: Option<String>,
    pub console_timestamps: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PredictConfig {
    /// Largest horizon `/api/predict` will extrapolate.
    pub max_years: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            console_timestamps: true,
        }
    }
}

impl Default for PredictConfig {
    fn default() -> Self {
        Self { max_years: 100 }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl ServiceConfig {
    /// Parses a TOML document. Missing sections and keys keep their defaults.
    pub fn from_toml_str(contents: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Reads `path` if it exists; a missing file yields the defaults.
    pub fn load_file(path: &str) -> Result<Self, ConfigError> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml_str(&contents, path)
    }

    /// Full load from the process environment: file (if any), then env
    /// overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var("WATERTRACE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::load_file(&path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Applies `WATERTRACE_HOST`, `WATERTRACE_PORT` (or `PORT`),
    /// `WATERTRACE_LOG_LEVEL` and `WATERTRACE_LOG_FILE`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("WATERTRACE_HOST") {
            self.server.host = host;
        }

        if let Some(port) = lookup("WATERTRACE_PORT").or_else(|| lookup("PORT")) {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "port",
                value: port.clone(),
            })?;
        }

        if let Some(level) = lookup("WATERTRACE_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Some(file) = lookup("WATERTRACE_LOG_FILE") {
            self.logging.file = if file.trim().is_empty() { None } else { Some(file) };
        }

        self.validate()
    }

    /// Checks values serde cannot: the log level name and the prediction cap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.log_level()?;
        if self.predict.max_years < 1 {
            return Err(ConfigError::InvalidValue {
                key: "predict.max_years",
                value: self.predict.max_years.to_string(),
            });
        }
        Ok(())
    }

    pub fn log_level(&self) -> Result<LogLevel, ConfigError> {
        self.logging
            .level
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                key: "logging.level",
                value: self.logging.level.clone(),
            })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
