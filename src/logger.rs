//! Injectable logging capability.
//!
//! The request executor only depends on [`Logger`]; the default
//! [`LogFacade`] forwards to the `log` crate so the application picks the
//! sink, and [`FileLogger`] keeps the append-only `combined.log` /
//! `error.log` pair.

use anyhow::{Context, Result, anyhow};
use chrono::{SecondsFormat, Utc};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU8, Ordering};

/// Severity, most severe first. A logger with threshold `t` emits `level`
/// when `level <= t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Http = 3,
    Verbose = 4,
    Debug = 5,
}

impl LogLevel {
    const ALL: [LogLevel; 6] = [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Http,
        LogLevel::Verbose,
        LogLevel::Debug,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Http => "http",
            LogLevel::Verbose => "verbose",
            LogLevel::Debug => "debug",
        }
    }

    fn from_u8(value: u8) -> LogLevel {
        Self::ALL
            .get(value as usize)
            .copied()
            .unwrap_or(LogLevel::Debug)
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow!("Unknown log level '{}'", s))
    }
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info | LogLevel::Http => log::Level::Info,
            LogLevel::Verbose | LogLevel::Debug => log::Level::Debug,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Logger: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
}

impl dyn Logger {
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn http(&self, message: &str) {
        self.log(LogLevel::Http, message);
    }

    pub fn verbose(&self, message: &str) {
        self.log(LogLevel::Verbose, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }
}

/// Forwards to whatever `log` backend the application installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFacade;

impl Logger for LogFacade {
    fn log(&self, level: LogLevel, message: &str) {
        log::log!(target: "rspamd_client", log::Level::from(level), "{}", message);
    }
}

/// Appends formatted lines to `combined.log`, and error lines to `error.log`
/// as well, inside a directory. Every emitted line is also passed to the
/// `log` facade.
pub struct FileLogger {
    combined: Mutex<File>,
    errors: Mutex<File>,
    level: AtomicU8,
}

impl FileLogger {
    /// Opens (or creates) both log files in `dir` for appending.
    pub fn open(dir: &Path, level: LogLevel) -> Result<Self> {
        Ok(Self {
            combined: Mutex::new(open_append(&dir.join("combined.log"))?),
            errors: Mutex::new(open_append(&dir.join("error.log"))?),
            level: AtomicU8::new(level as u8),
        })
    }

    /// Returns the current threshold.
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Changes the threshold; takes effect for the next line.
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    fn should_log(&self, level: LogLevel) -> bool {
        level <= self.level()
    }
}

impl Logger for FileLogger {
    fn log(&self, level: LogLevel, message: &str) {
        if !self.should_log(level) {
            return;
        }

        let line = format_line(level, message);
        write_line(&self.combined, &line);
        if level == LogLevel::Error {
            write_line(&self.errors, &line);
        }
        LogFacade.log(level, message);
    }
}

fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {:?}", path))
}

fn format_line(level: LogLevel, message: &str) -> String {
    format!(
        "{} [{}] {}",
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        level.as_str().to_uppercase(),
        message
    )
}

// Synchronous on purpose: one short line per request. Anything heavier
// belongs on a dedicated writer task, not on the request path.
// A failing log sink must never take the caller down with it.
fn write_line(file: &Mutex<File>, line: &str) {
    let Ok(mut file) = file.lock() else {
        return;
    };
    if let Err(e) = writeln!(file, "{}", line) {
        log::warn!("Failed to write log line: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use std::sync::Arc;
    use tempfile::tempdir;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Info < LogLevel::Http);
        assert!(LogLevel::Verbose < LogLevel::Debug);
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!("http".parse::<LogLevel>().unwrap(), LogLevel::Http);
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert!("trace".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_level_maps_onto_log_crate() {
        assert_eq!(log::Level::from(LogLevel::Http), log::Level::Info);
        assert_eq!(log::Level::from(LogLevel::Verbose), log::Level::Debug);
        assert_eq!(log::Level::from(LogLevel::Debug), log::Level::Debug);
    }

    #[test]
    fn test_dyn_logger_helpers_dispatch_level() {
        let mut mock = MockLogger::new();
        mock.expect_log()
            .with(eq(LogLevel::Warn), eq("careful"))
            .times(1)
            .return_const(());
        mock.expect_log()
            .with(eq(LogLevel::Http), eq("POST /checkv2"))
            .times(1)
            .return_const(());

        let logger: Arc<dyn Logger> = Arc::new(mock);
        logger.warn("careful");
        logger.http("POST /checkv2");
    }

    #[test_log::test]
    fn test_log_facade_does_not_panic() {
        let logger: Arc<dyn Logger> = Arc::new(LogFacade);
        logger.debug("Making request to http://localhost:11333/checkv2");
    }

    #[test]
    fn test_file_logger_writes_combined_and_error() {
        let dir = tempdir().unwrap();
        let logger = FileLogger::open(dir.path(), LogLevel::Info).unwrap();

        logger.log(LogLevel::Info, "service reachable");
        logger.log(LogLevel::Error, "service gone");

        let combined = std::fs::read_to_string(dir.path().join("combined.log")).unwrap();
        let errors = std::fs::read_to_string(dir.path().join("error.log")).unwrap();

        assert_eq!(combined.lines().count(), 2);
        assert!(combined.contains("[INFO] service reachable"));
        assert!(combined.contains("[ERROR] service gone"));
        assert_eq!(errors.lines().count(), 1);
        assert!(errors.contains("[ERROR] service gone"));
    }

    #[test]
    fn test_file_logger_respects_threshold() {
        let dir = tempdir().unwrap();
        let logger = FileLogger::open(dir.path(), LogLevel::Info).unwrap();

        logger.log(LogLevel::Debug, "hidden");
        logger.set_level(LogLevel::Debug);
        assert_eq!(logger.level(), LogLevel::Debug);
        logger.log(LogLevel::Debug, "shown");

        let combined = std::fs::read_to_string(dir.path().join("combined.log")).unwrap();
        assert!(!combined.contains("hidden"));
        assert!(combined.contains("[DEBUG] shown"));
    }

    #[test]
    fn test_file_logger_appends_across_instances() {
        let dir = tempdir().unwrap();
        FileLogger::open(dir.path(), LogLevel::Info)
            .unwrap()
            .log(LogLevel::Info, "first");
        FileLogger::open(dir.path(), LogLevel::Info)
            .unwrap()
            .log(LogLevel::Info, "second");

        let combined = std::fs::read_to_string(dir.path().join("combined.log")).unwrap();
        let lines: Vec<&str> = combined.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("first"));
        assert!(lines[1].ends_with("second"));
    }

    #[test]
    fn test_file_logger_open_fails_for_missing_dir() {
        let dir = tempdir().unwrap();
        let result = FileLogger::open(&dir.path().join("missing"), LogLevel::Info);
        assert!(result.is_err());
    }
}
