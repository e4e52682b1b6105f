//! Settings sources for configuration lookup

use std::collections::HashMap;
use std::env::{self, VarError};

/// A read-only key/value source the configuration is resolved from
///
/// Implementations:
/// - `EnvSettings`: the process environment
/// - `MemorySettings`: in-memory map for testing and embedding
pub trait SettingsSource: Send + Sync {
    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Look up a value by key
    ///
    /// Returns `None` only when the key is not set at all. A key that is set
    /// to the empty string returns `Some("")`.
    fn get(&self, key: &str) -> Option<String>;
}

/// Settings source backed by environment variables
///
/// Values from a `.env` file are visible here once the binary has loaded it.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvSettings;

impl EnvSettings {
    pub fn new() -> Self {
        Self
    }
}

impl SettingsSource for EnvSettings {
    fn name(&self) -> &str {
        "env"
    }

    /// A variable that is set but not valid UTF-8 reads as the empty string,
    /// so it fails validation instead of falling back to a default.
    fn get(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => Some(String::new()),
        }
    }
}

/// In-memory settings source
///
/// # Example
///
/// ```
/// use agentcore_mcp_core::config::{MemorySettings, SettingsSource};
///
/// let settings = MemorySettings::new().with("AWS_REGION", "eu-west-1");
/// assert_eq!(settings.get("AWS_REGION").as_deref(), Some("eu-west-1"));
/// assert_eq!(settings.get("LOG_LEVEL"), None);
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemorySettings {
    values: HashMap<String, String>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a value
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl SettingsSource for MemorySettings {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_settings_lookup() {
        let settings = MemorySettings::new()
            .with("A", "1")
            .with("B", "")
            .with("A", "2");

        assert_eq!(settings.name(), "memory");
        assert_eq!(settings.get("A").as_deref(), Some("2"));
        assert_eq!(settings.get("B").as_deref(), Some(""));
        assert_eq!(settings.get("C"), None);
    }

    #[test]
    fn test_env_settings_unset_key() {
        let settings = EnvSettings::new();
        assert_eq!(settings.name(), "env");
        assert_eq!(settings.get("AGENTCORE_MCP_TEST_UNSET_KEY_93F1"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_env_settings_non_utf8_value_is_rejected() {
        use crate::config::{Config, ConfigError};
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        const KEY: &str = "AGENTCORE_MCP_TEST_NON_UTF8_KEY_5C2A";
        env::set_var(KEY, OsStr::from_bytes(&[b'a', b'r', b'n', 0xff]));

        let settings = EnvSettings::new();
        assert_eq!(settings.get(KEY).as_deref(), Some(""));

        let source = MemorySettings::new().with(
            crate::config::RUNTIME_ARN_KEY,
            settings.get(KEY).unwrap_or_default(),
        );
        assert_eq!(
            Config::from_source(&source),
            Err(ConfigError::MissingValue {
                key: crate::config::RUNTIME_ARN_KEY
            })
        );

        env::remove_var(KEY);
    }
}
