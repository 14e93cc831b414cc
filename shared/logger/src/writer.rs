//! Dedicated log file writer thread.

use crate::error::Result;
use crate::record::LogRecord;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::mpsc::Receiver;

/// Owns the open log file; runs on its own thread and drains the channel
/// until every sender is dropped.
pub(crate) struct LogWriter {
    file: File,
}

impl LogWriter {
    /// Opens (or creates) the log file in append mode.
    pub fn new(log_path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;
        Ok(Self { file })
    }

    /// Writes and flushes one record. Failures go to stderr; a broken log
    /// file must not take the application down.
    fn write_record(&mut self, record: &LogRecord) {
        if let Err(e) = self.file.write_all(record.format().as_bytes()) {
            eprintln!("failed to write log record: {}", e);
            return;
        }
        if let Err(e) = self.file.flush() {
            eprintln!("failed to flush log file: {}", e);
        }
    }

    /// Drains the channel until it closes.
    pub fn run(mut self, receiver: Receiver<LogRecord>) {
        for record in receiver {
            self.write_record(&record);
        }
    }
}

/// Spawns the dedicated writer thread for a log file.
pub(crate) fn spawn_writer_thread(log_path: &Path, receiver: Receiver<LogRecord>) -> Result<()> {
    let writer = LogWriter::new(log_path)?;
    std::thread::spawn(move || writer.run(receiver));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LogLevel;
    use std::fs;
    use std::sync::mpsc::channel;
    use std::thread;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn test_writer_creates_file() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let writer = LogWriter::new(&log_path);
        assert!(writer.is_ok());
        assert!(log_path.exists());
    }

    #[test]
    fn test_write_record() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let mut writer = LogWriter::new(&log_path).unwrap();
        writer.write_record(&LogRecord::new(
            LogLevel::Info,
            None,
            "hello log".to_string(),
        ));

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("INFO"));
        assert!(content.contains("hello log"));
    }

    #[test]
    fn test_spawned_thread_drains_channel() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");
        let (sender, receiver) = channel();

        spawn_writer_thread(&log_path, receiver).unwrap();
        sender
            .send(LogRecord::new(
                LogLevel::Debug,
                Some("Writer".to_string()),
                "thread test".to_string(),
            ))
            .unwrap();
        drop(sender);

        thread::sleep(Duration::from_millis(100));

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("thread test"));
    }
}
