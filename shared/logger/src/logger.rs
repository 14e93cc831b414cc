//! Thread-safe asynchronous logger.
//!
//! Formatting happens on the calling thread; file I/O happens on a single
//! dedicated writer thread fed through a channel, so logging never blocks
//! the caller on disk.

use crate::error::Result;
use crate::level::LogLevel;
use crate::record::LogRecord;
use crate::writer::spawn_writer_thread;
use std::path::Path;
use std::sync::mpsc::{Sender, channel};

/// Handle to the logging pipeline.
///
/// Clones and scoped handles share one writer thread and one open file;
/// creating a scope is free and infallible.
///
/// # Examples
///
/// ```no_run
/// use logging::{LogLevel, Logger};
///
/// let logger = Logger::new("app.log".as_ref(), LogLevel::Info, true).unwrap();
/// let http_logger = logger.scoped("HTTP");
/// logger.info("service started");
/// http_logger.warn("slow request");
/// ```
#[derive(Clone)]
pub struct Logger {
    sender: Sender<LogRecord>,
    level: LogLevel,
    component: Option<String>,
    console_output: bool,
}

impl Logger {
    /// Creates a logger writing to `log_path`, spawning the writer thread.
    ///
    /// Records below `level` are discarded. With `console_output` set,
    /// every record is also printed to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be created or opened.
    pub fn new(log_path: &Path, level: LogLevel, console_output: bool) -> Result<Self> {
        let (sender, receiver) = channel();
        spawn_writer_thread(log_path, receiver)?;
        Ok(Logger {
            sender,
            level,
            component: None,
            console_output,
        })
    }

    /// Returns a handle tagged with a component name (e.g. "HTTP",
    /// "Orders"). Shares this logger's writer thread and settings.
    pub fn scoped(&self, component: &str) -> Self {
        Logger {
            sender: self.sender.clone(),
            level: self.level,
            component: Some(component.to_string()),
            console_output: self.console_output,
        }
    }

    /// Logs a debug message.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Logs an info message.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Logs a warning message.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Logs an error message.
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn log(&self, level: LogLevel, message: &str) {
        if level < self.level {
            return;
        }
        let record = LogRecord::new(level, self.component.clone(), message.to_string());

        if self.console_output {
            print!("{}", record.format());
        }

        // The writer thread only dies when every sender is gone, so a send
        // failure here means shutdown is already underway.
        let _ = self.sender.send(record);
    }
}
