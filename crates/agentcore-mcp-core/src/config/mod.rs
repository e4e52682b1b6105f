//! Configuration
//!
//! The configuration is resolved once at startup from a `SettingsSource`:
//! - `EnvSettings`: process environment (the normal case)
//! - `MemorySettings`: in-memory for testing

mod settings;
mod source;

pub use settings::{
    Config, ConfigError, ConfigResult, LogLevel,
    DEFAULT_REGION, DEFAULT_RUNTIME_ARN, LOG_LEVEL_KEY, REGION_KEY, RUNTIME_ARN_KEY,
};
pub use source::{EnvSettings, MemorySettings, SettingsSource};
