//! Internal log record structure.

use crate::level::LogLevel;
use chrono::Local;

/// One formatted-on-construction log entry, sent over the channel to the
/// writer thread.
#[derive(Debug, Clone)]
pub(crate) struct LogRecord {
    pub timestamp: String,
    pub level: LogLevel,
    pub component: Option<String>,
    pub message: String,
}

impl LogRecord {
    /// Creates a record stamped with the current local time.
    pub fn new(level: LogLevel, component: Option<String>, message: String) -> Self {
        Self {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
            level,
            component,
            message,
        }
    }

    /// Formats the record as a single log line:
    /// `[timestamp] LEVEL [component] message\n`
    pub fn format(&self) -> String {
        match &self.component {
            Some(component) => format!(
                "[{}] {:<5} [{}] {}\n",
                self.timestamp,
                self.level.as_str(),
                component,
                self.message
            ),
            None => format!(
                "[{}] {:<5} {}\n",
                self.timestamp,
                self.level.as_str(),
                self.message
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_format_with_component() {
        let record = LogRecord::new(
            LogLevel::Error,
            Some("HTTP".to_string()),
            "connection refused".to_string(),
        );
        let line = record.format();

        assert!(line.contains("ERROR"));
        assert!(line.contains("[HTTP]"));
        assert!(line.contains("connection refused"));
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn test_record_format_without_component() {
        let record = LogRecord::new(LogLevel::Info, None, "starting".to_string());
        let line = record.format();

        assert!(line.contains("INFO"));
        assert!(!line.contains('[') || line.starts_with('['));
        assert!(line.contains("starting"));
    }

    #[test]
    fn test_timestamp_shape() {
        let record = LogRecord::new(LogLevel::Info, None, "t".to_string());
        // YYYY-MM-DD HH:MM:SS.mmm
        assert!(record.timestamp.len() >= 23);
        assert!(record.timestamp.contains('-'));
        assert!(record.timestamp.contains(':'));
        assert!(record.timestamp.contains('.'));
    }
}
