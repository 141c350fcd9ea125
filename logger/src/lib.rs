//! Leveled logger used by the graphical interface to report failures to the
//! developer console. Writes `[LEVEL] [timestamp]: message` lines to stderr
//! (ANSI colored) or appends them to a file.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use chrono::Utc;

/// Severity of a log line. Levels are ordered, so a logger can drop
/// everything below its minimum.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

enum Sink {
    Stderr,
    File(File),
}

pub struct Logger {
    sink: Sink,
    min_level: LogLevel,
}

impl Logger {
    /// Logger writing colored lines to stderr.
    pub fn stderr() -> Self {
        Self {
            sink: Sink::Stderr,
            min_level: LogLevel::Info,
        }
    }

    /// Logger appending plain lines to the file at `path`.
    pub fn to_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            sink: Sink::File(file),
            min_level: LogLevel::Info,
        })
    }

    /// Drops every line below `level`.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn info(&mut self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&mut self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&mut self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn log(&mut self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("[{}] [{}]: {}", level, timestamp, message);

        match &mut self.sink {
            Sink::Stderr => {
                let color = match level {
                    LogLevel::Info => "\x1b[96m",
                    LogLevel::Warn => "\x1b[93m",
                    LogLevel::Error => "\x1b[91m",
                };
                eprintln!("{}{}\x1b[0m", color, line);
            }
            Sink::File(file) => {
                // A failing log write must never take the app down.
                let _ = writeln!(file, "{}", line).and_then(|_| file.flush());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_log_path(tag: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("travel-planner-{}-{}.log", tag, std::process::id()))
    }

    #[test]
    fn file_logger_writes_tagged_lines() {
        let path = temp_log_path("tagged");
        let mut logger = Logger::to_file(&path).unwrap();

        logger.info("search started");
        logger.error("search failed");

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[INFO]"));
        assert!(contents.contains("search started"));
        assert!(contents.contains("[ERROR]"));
        assert!(contents.contains("search failed"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn min_level_drops_lower_levels() {
        let path = temp_log_path("filtered");
        let mut logger = Logger::to_file(&path)
            .unwrap()
            .with_min_level(LogLevel::Warn);

        logger.info("too quiet to matter");
        logger.warn("worth keeping");

        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("too quiet to matter"));
        assert!(contents.contains("worth keeping"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn stderr_logger_does_not_panic() {
        let mut logger = Logger::stderr();
        logger.info("info line");
        logger.warn("warn line");
        logger.error("error line");
    }
}
