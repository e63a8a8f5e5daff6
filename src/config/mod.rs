pub mod model;

use anyhow::{Context, Result};
use std::path::PathBuf;

pub use model::{AppConfig, LoggingConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("complib")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("Failed to parse config file {}", path.display()))
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.ui.initial_category, "buttons");
        assert_eq!(cfg.ui.tag_limit, 3);
        assert_eq!(cfg.ui.notice_secs, 3);
        assert!(cfg.ui.show_preview_urls);
        assert!(!cfg.logging.enabled);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let cfg = parse_config(
            r#"
            [ui]
            initial_category = "icons"
            tag_limit = 5

            [logging]
            enabled = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.ui.initial_category, "icons");
        assert_eq!(cfg.ui.tag_limit, 5);
        assert_eq!(cfg.ui.card_width, 34);
        assert!(cfg.logging.enabled);
        assert_eq!(cfg.logging.log_dir, "~/.local/share/complib/logs");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(parse_config("[ui]\ntag_limit = \"many\"").is_err());
    }
}
