//! Process configuration resolved once at startup

use std::fmt;
use std::str::FromStr;

use super::source::{EnvSettings, SettingsSource};

/// Environment key for the agent runtime ARN
pub const RUNTIME_ARN_KEY: &str = "AGENTCORE_RUNTIME_ARN";
/// Environment key for the AWS region
pub const REGION_KEY: &str = "AWS_REGION";
/// Environment key for the log level
pub const LOG_LEVEL_KEY: &str = "LOG_LEVEL";

/// Deployed DSS query/retrieve supervisor runtime
pub const DEFAULT_RUNTIME_ARN: &str =
    "arn:aws:bedrock-agentcore:us-east-1:519677643490:runtime/dss_query_retrieve_agent-UO4Mf76GpU";
pub const DEFAULT_REGION: &str = "us-east-1";

/// Errors that can occur while building the configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be set")]
    MissingValue { key: &'static str },

    #[error("Invalid log level: {0:?} (expected DEBUG, INFO, WARN or ERROR)")]
    InvalidLogLevel(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// The matching `tracing` level
    pub fn as_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable server configuration
///
/// A `Config` can only be obtained through a constructor that checks the
/// runtime ARN and region are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    runtime_arn: String,
    region: String,
    log_level: LogLevel,
}

impl Config {
    /// Build a configuration from explicit values
    pub fn new(
        runtime_arn: impl Into<String>,
        region: impl Into<String>,
        log_level: LogLevel,
    ) -> ConfigResult<Self> {
        let runtime_arn = runtime_arn.into().trim().to_string();
        let region = region.into().trim().to_string();

        if runtime_arn.is_empty() {
            return Err(ConfigError::MissingValue { key: RUNTIME_ARN_KEY });
        }
        if region.is_empty() {
            return Err(ConfigError::MissingValue { key: REGION_KEY });
        }

        Ok(Self {
            runtime_arn,
            region,
            log_level,
        })
    }

    /// Resolve the configuration from a settings source, applying defaults
    /// for keys that are not set
    ///
    /// A key explicitly set to an empty string does not fall back to the
    /// default, so `AGENTCORE_RUNTIME_ARN=""` fails validation.
    pub fn from_source(source: &dyn SettingsSource) -> ConfigResult<Self> {
        let runtime_arn = source
            .get(RUNTIME_ARN_KEY)
            .unwrap_or_else(|| DEFAULT_RUNTIME_ARN.to_string());
        let region = source
            .get(REGION_KEY)
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        let log_level = match source.get(LOG_LEVEL_KEY) {
            Some(level) => level.parse()?,
            None => LogLevel::default(),
        };

        Self::new(runtime_arn, region, log_level)
    }

    /// Resolve the configuration from the process environment
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_source(&EnvSettings::new())
    }

    pub fn runtime_arn(&self) -> &str {
        &self.runtime_arn
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }
}
