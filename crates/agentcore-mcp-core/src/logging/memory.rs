//! Recording logger

use parking_lot::Mutex;

use crate::config::LogLevel;

use super::traits::Logger;

/// A logger that keeps every line in memory
///
/// Handy in tests that need to check a failure was actually reported.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<(LogLevel, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded messages at the given level
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Whether any line at `level` contains `needle`
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.lines
            .lock()
            .iter()
            .any(|(l, m)| *l == level && m.contains(needle))
    }

    fn push(&self, level: LogLevel, message: &str) {
        self.lines.lock().push((level, message.to_string()));
    }
}

impl Logger for MemoryLogger {
    fn debug(&self, message: &str) {
        self.push(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_records_levels() {
        let logger = MemoryLogger::new();
        logger.info("started");
        logger.error("boom: access denied");
        logger.debug("chunk 3");

        assert_eq!(logger.messages_at(LogLevel::Debug), vec!["chunk 3".to_string()]);
        assert_eq!(logger.messages_at(LogLevel::Info), vec!["started".to_string()]);
        assert!(logger.contains(LogLevel::Error, "access denied"));
        assert!(!logger.contains(LogLevel::Warn, "access denied"));
    }
}
