//! Frontend Configuration
//!
//! Timings and endpoints, optionally overridden by the page through a
//! `<script type="application/json" id="focus-config">` data island.

use serde::Deserialize;

/// Id of the data island carrying config overrides
pub const CONFIG_ISLAND_ID: &str = "focus-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    /// Prefix for every API path ("" = same origin)
    pub api_base: String,
    /// Delay before the page reloads after a successful mutation
    pub reload_delay_ms: u32,
    /// Delay before focusing the first field of a freshly opened tab
    pub focus_delay_ms: u32,
    pub toast_visible_ms: u32,
    pub toast_fade_ms: u32,
    pub autosave_debounce_ms: u32,
    /// Completed-count refresh interval
    pub completed_poll_ms: u32,
    /// Delay between a task toggle and the completed-count refresh
    pub count_refresh_delay_ms: u32,
    /// Delay before leaving a deleted project's page
    pub delete_redirect_ms: u32,
    pub draft_key_prefix: String,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            reload_delay_ms: 1000,
            focus_delay_ms: 100,
            toast_visible_ms: 3000,
            toast_fade_ms: 300,
            autosave_debounce_ms: 500,
            completed_poll_ms: 30_000,
            count_refresh_delay_ms: 500,
            delete_redirect_ms: 1500,
            draft_key_prefix: "focus-form-".to_string(),
        }
    }
}

impl FocusConfig {
    /// Parse overrides; unknown keys are ignored, missing keys keep defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut config: FocusConfig = serde_json::from_str(raw)?;
        config.api_base = config.api_base.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Read the config island from the page, falling back to defaults
    pub fn load() -> Self {
        let Some(raw) = crate::dom::data_island(CONFIG_ISLAND_ID) else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => {
                tracing::debug!(?config, "loaded config overrides");
                config
            }
            Err(error) => {
                tracing::warn!(%error, "ignoring malformed config island");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_timings() {
        let config = FocusConfig::default();
        assert_eq!(config.reload_delay_ms, 1000);
        assert_eq!(config.toast_visible_ms + config.toast_fade_ms, 3300);
        assert_eq!(config.autosave_debounce_ms, 500);
        assert_eq!(config.completed_poll_ms, 30_000);
        assert_eq!(config.draft_key_prefix, "focus-form-");
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = FocusConfig::from_json(r#"{"reload_delay_ms": 250, "extra": 1}"#).unwrap();
        assert_eq!(config.reload_delay_ms, 250);
        assert_eq!(config.focus_delay_ms, 100);
        assert_eq!(config.api_base, "");
    }

    #[test]
    fn test_api_base_trailing_slash_is_trimmed() {
        let config = FocusConfig::from_json(r#"{"api_base": "https://focus.example/"}"#).unwrap();
        assert_eq!(config.api_base, "https://focus.example");
    }

    #[test]
    fn test_malformed_override_is_an_error() {
        assert!(FocusConfig::from_json("{").is_err());
        assert!(FocusConfig::from_json(r#"{"reload_delay_ms": "soon"}"#).is_err());
    }
}
