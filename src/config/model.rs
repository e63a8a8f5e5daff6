//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML. Every field has a
//! default so the application works without a config file.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Browser appearance and startup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Category selected when the browser opens.
    #[serde(default = "default_initial_category")]
    pub initial_category: String,
    /// Tags shown on each card; the detail view shows all of them.
    #[serde(default = "default_tag_limit")]
    pub tag_limit: usize,
    /// Minimum card width in terminal columns.
    #[serde(default = "default_card_width")]
    pub card_width: u16,
    #[serde(default = "default_notice_secs")]
    pub notice_secs: u64,
    #[serde(default = "default_true")]
    pub show_preview_urls: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            initial_category: default_initial_category(),
            tag_limit: default_tag_limit(),
            card_width: default_card_width(),
            notice_secs: default_notice_secs(),
            show_preview_urls: true,
        }
    }
}

/// Diagnostic log settings. The terminal is owned by the UI, so logs go to
/// a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `tracing` filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_initial_category() -> String {
    "buttons".to_string()
}
fn default_tag_limit() -> usize {
    3
}
fn default_card_width() -> u16 {
    34
}
fn default_notice_secs() -> u64 {
    3
}
fn default_log_dir() -> String {
    "~/.local/share/complib/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
