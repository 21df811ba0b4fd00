//! Board Configuration
//!
//! Read once at startup from `<script type="application/json" id="board-config">`.

use serde::Deserialize;
use thiserror::Error;

/// Id of the script element holding the config JSON
pub const CONFIG_ELEMENT_ID: &str = "board-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid board config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Board heading
    pub title: String,
    /// error | warn | info | debug | trace
    pub log_level: String,
    /// Move the order to the drop column when a drag ends on a column
    pub commit_on_drop: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            title: "Orders".to_string(),
            log_level: "info".to_string(),
            commit_on_drop: true,
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parsed log level, `Info` when unrecognised
    pub fn level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Load from the page, falling back to defaults
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
            return Self::default();
        };
        Self::from_json(&text).unwrap_or_else(|e| {
            log::warn!("[APP] {}, using defaults", e);
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = BoardConfig::from_json(r#"{"title": "Kitchen"}"#).unwrap();
        assert_eq!(config.title, "Kitchen");
        assert!(config.commit_on_drop);
        assert_eq!(config.level(), log::LevelFilter::Info);
    }

    #[test]
    fn test_full_json() {
        let config = BoardConfig::from_json(
            r#"{"title": "Bar", "log_level": "debug", "commit_on_drop": false}"#,
        )
        .unwrap();
        assert!(!config.commit_on_drop);
        assert_eq!(config.level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_bad_json_is_error() {
        assert!(matches!(
            BoardConfig::from_json("{title:"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let config = BoardConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert_eq!(config.level(), log::LevelFilter::Info);
    }
}
