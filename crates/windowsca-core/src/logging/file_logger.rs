//! File-based debug logger for troubleshooting
//!
//! Terraform owns the plugin's stdout and filters stderr through `TF_LOG`,
//! so when a configure problem needs investigating it is easier to turn on
//! a dedicated log file:
//!
//! - `WINDOWSCA_DEBUG=1` (or `true`) enables the file logger
//! - `WINDOWSCA_LOG_LEVEL` sets the minimum level (default `debug`)
//!
//! Lines go to `terraform-provider-windowsca-debug.log` in the temp directory.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::time::SystemTime;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::environment::{EnvironmentSource, ProcessEnvironment};

const DEBUG_VAR: &str = "WINDOWSCA_DEBUG";
const LEVEL_VAR: &str = "WINDOWSCA_LOG_LEVEL";
const LOG_FILE_NAME: &str = "terraform-provider-windowsca-debug.log";

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    /// Parse a level name, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO "),
            LogLevel::Warn => write!(f, "WARN "),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// File logger settings read from the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    pub enabled: bool,
    pub min_level: LogLevel,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            min_level: LogLevel::Debug,
        }
    }
}

impl LogSettings {
    pub fn from_env(env: &dyn EnvironmentSource) -> Self {
        let enabled = env
            .get(DEBUG_VAR)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let min_level = env
            .get(LEVEL_VAR)
            .and_then(|v| LogLevel::parse(&v))
            .unwrap_or(LogLevel::Debug);

        Self { enabled, min_level }
    }

    fn accepts(&self, level: LogLevel) -> bool {
        self.enabled && level >= self.min_level
    }
}

struct FileLoggerState {
    file: Option<File>,
    settings: LogSettings,
}

impl FileLoggerState {
    fn new() -> Self {
        let settings = LogSettings::from_env(&ProcessEnvironment::new());
        let file = if settings.enabled {
            open_log_file()
        } else {
            None
        };

        Self { file, settings }
    }

    fn write(&mut self, level: LogLevel, module: &str, message: &str) {
        if !self.settings.accepts(level) {
            return;
        }

        if let Some(ref mut file) = self.file {
            let _ = writeln!(file, "[{}] [{}] [{}] {}", timestamp(), level, module, message);
            let _ = file.flush();
        }
    }
}

fn open_log_file() -> Option<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path())
        .ok()
}

/// Wall-clock time of day, UTC, as `HH:MM:SS.mmm`
fn timestamp() -> String {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs();
            format!(
                "{:02}:{:02}:{:02}.{:03}",
                (secs % 86400) / 3600,
                (secs % 3600) / 60,
                secs % 60,
                d.subsec_millis()
            )
        })
        .unwrap_or_else(|_| "??:??:??.???".to_string())
}

static LOGGER: Lazy<Mutex<FileLoggerState>> = Lazy::new(|| Mutex::new(FileLoggerState::new()));

/// Log a message at the specified level
pub fn log(level: LogLevel, module: &str, message: &str) {
    LOGGER.lock().write(level, module, message);
}

pub fn trace(module: &str, message: &str) {
    log(LogLevel::Trace, module, message);
}

pub fn debug(module: &str, message: &str) {
    log(LogLevel::Debug, module, message);
}

pub fn info(module: &str, message: &str) {
    log(LogLevel::Info, module, message);
}

pub fn warn(module: &str, message: &str) {
    log(LogLevel::Warn, module, message);
}

pub fn error(module: &str, message: &str) {
    log(LogLevel::Error, module, message);
}

/// Get the path to the log file
pub fn log_file_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(LOG_FILE_NAME);
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::MemoryEnvironment;

    #[test]
    fn test_log_levels() {
        assert!(LogLevel::Debug > LogLevel::Trace);
        assert!(LogLevel::Info > LogLevel::Debug);
        assert!(LogLevel::Warn > LogLevel::Info);
        assert!(LogLevel::Error > LogLevel::Warn);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(LogLevel::parse("TRACE"), Some(LogLevel::Trace));
        assert_eq!(LogLevel::parse(" warning "), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("verbose"), None);
    }

    #[test]
    fn test_settings_default_disabled() {
        let settings = LogSettings::from_env(&MemoryEnvironment::new());
        assert_eq!(settings, LogSettings::default());
        assert!(!settings.accepts(LogLevel::Error));
    }

    #[test]
    fn test_settings_from_env() {
        let env = MemoryEnvironment::with_vars([(DEBUG_VAR, "TRUE"), (LEVEL_VAR, "warn")]);
        let settings = LogSettings::from_env(&env);
        assert!(settings.enabled);
        assert_eq!(settings.min_level, LogLevel::Warn);
        assert!(!settings.accepts(LogLevel::Info));
        assert!(settings.accepts(LogLevel::Error));
    }

    #[test]
    fn test_settings_bad_level_falls_back() {
        let env = MemoryEnvironment::with_vars([(DEBUG_VAR, "1"), (LEVEL_VAR, "loud")]);
        assert_eq!(LogSettings::from_env(&env).min_level, LogLevel::Debug);
    }

    #[test]
    fn test_log_file_path() {
        assert!(log_file_path().ends_with(LOG_FILE_NAME));
    }

    #[test]
    fn test_logging() {
        // Just make sure it doesn't panic
        debug("test", "test message");
        info("test", "test message");
        warn("test", "test message");
        error("test", "test message");
    }
}
