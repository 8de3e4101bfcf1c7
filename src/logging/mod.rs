//! Diagnostic logging to disk.
//!
//! The terminal belongs to the UI, so `tracing` output goes to a daily file
//! `flagquiz_<date>.log` in the configured log directory (default:
//! `~/.local/share/flagquiz/logs/`). With logging disabled no subscriber is
//! installed and every `tracing` macro is a no-op.

use crate::config::LoggingConfig;
use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;

/// Install the file subscriber if logging is enabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level = parse_level(&config.level)?;
    let log_dir = expand_log_dir(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let filepath = log_dir.join(format!("flagquiz_{}.log", date));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&filepath)
        .with_context(|| format!("Failed to open log file {}", filepath.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!(path = %filepath.display(), "logging started");
    Ok(())
}

fn parse_level(level: &str) -> Result<Level> {
    level
        .trim()
        .parse::<Level>()
        .map_err(|_| anyhow!("Invalid log level '{}'", level))
}

/// Expand a leading `~` to the home directory.
fn expand_log_dir(log_dir: &str) -> PathBuf {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("info").unwrap(), Level::INFO);
        assert_eq!(parse_level("DEBUG").unwrap(), Level::DEBUG);
        assert_eq!(parse_level(" warn ").unwrap(), Level::WARN);
        assert!(parse_level("loud").is_err());
    }

    #[test]
    fn test_expand_log_dir() {
        assert_eq!(expand_log_dir("/var/log/quiz"), PathBuf::from("/var/log/quiz"));
        assert_eq!(expand_log_dir("logs"), PathBuf::from("logs"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_log_dir("~/q/logs"), home.join("q/logs"));
            assert_eq!(expand_log_dir("~"), home);
        }
    }

    #[test]
    fn test_disabled_installs_nothing() {
        let config = LoggingConfig::default();
        assert!(init(&config).is_ok());
    }
}
