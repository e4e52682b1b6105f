//! `tracing`-backed logger and subscriber setup

use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;

use super::traits::Logger;

/// Value of the `component` field on every event
const COMPONENT: &str = "agentcore_mcp";

/// A logger that forwards to the `tracing` macros
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!(component = COMPONENT, "{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!(component = COMPONENT, "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(component = COMPONENT, "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(component = COMPONENT, "{}", message);
    }
}

/// Build the level filter: `RUST_LOG` wins when set, otherwise `level`
pub fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()))
}

/// Install the global fmt subscriber
///
/// Output goes to stderr; stdout carries the MCP protocol. Returns `false`
/// if a global subscriber was already installed.
pub fn init_tracing(level: LogLevel) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok()
}
