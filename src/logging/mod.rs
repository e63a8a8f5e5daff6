//! Diagnostic logging to disk.
//!
//! When enabled, `tracing` events are written to a daily file
//! `complib_<date>.log` in the configured log directory (default:
//! `~/.local/share/complib/logs/`). Nothing is written to the terminal.

use crate::config::LoggingConfig;
use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Expand a leading `~` to the home directory.
pub fn expand_log_dir(log_dir: &str) -> PathBuf {
    if let Some(rest) = log_dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if log_dir == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(log_dir)
}

pub fn log_file_name(date: chrono::NaiveDate) -> String {
    format!("complib_{}.log", date.format("%Y-%m-%d"))
}

/// Install the global subscriber. Returns the log file path, or `None` when
/// logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let log_dir = expand_log_dir(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let path = log_dir.join(log_file_name(chrono::Local::now().date_naive()));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_log_dir() {
        assert_eq!(expand_log_dir("/var/log/complib"), PathBuf::from("/var/log/complib"));
        assert_eq!(expand_log_dir("relative/logs"), PathBuf::from("relative/logs"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_log_dir("~/logs"), home.join("logs"));
        }
    }

    #[test]
    fn test_log_file_name() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(log_file_name(date), "complib_2024-03-09.log");
    }

    #[test]
    fn test_disabled_logging_is_noop() {
        let cfg = LoggingConfig::default();
        assert_eq!(init(&cfg).unwrap(), None);
    }
}
