//! Configuration data model.
//!
//! Every field has a default so a partial (or missing) `config.toml` works.
//! The quiz itself is fixed: round count, catalog and validation delay are
//! not configurable.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Terminal presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Interval of the UI tick that animates the validation spinner.
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Ask for confirmation before going back to the start.
    #[serde(default = "default_true")]
    pub confirm_back: bool,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            confirm_back: true,
            show_key_hints: true,
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `tracing` level name: trace, debug, info, warn or error.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_tick_rate() -> u64 {
    50
}
fn default_log_dir() -> String {
    "~/.local/share/flagquiz/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}
