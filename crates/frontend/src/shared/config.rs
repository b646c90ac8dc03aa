//! Runtime configuration of the front-desk UI.
//!
//! Defaults are compiled in. A JSON object stored in localStorage under
//! [`CONFIG_STORAGE_KEY`] overrides any subset of the fields, which lets the
//! desk enable the room-status fetch without a rebuild.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

pub const CONFIG_STORAGE_KEY: &str = "frontdesk_config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How long a notification stays before it fades
    pub notification_timeout_ms: u32,
    pub notification_fade_ms: u32,
    /// Quiet period before live validation runs
    pub validation_debounce_ms: u32,
    /// Submit buttons re-enable after this even if the page never unloads
    pub submit_fallback_ms: u32,
    pub room_status_fetch_enabled: bool,
    pub total_rooms: u16,
    /// Prefix for API paths; empty means same origin
    pub api_base: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            notification_timeout_ms: 5000,
            notification_fade_ms: 300,
            validation_debounce_ms: 300,
            submit_fallback_ms: 10_000,
            room_status_fetch_enabled: false,
            total_rooms: contracts::domain::a001_room::TOTAL_ROOMS,
            api_base: String::new(),
            log_level: "debug".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with the localStorage override, if any
    pub fn load() -> Self {
        match stored_override() {
            Some(raw) => Self::from_override(&raw),
            None => Self::default(),
        }
    }

    /// Parse an override document. Malformed input falls back to defaults.
    pub fn from_override(raw: &str) -> Self {
        match serde_json::from_str::<AppConfig>(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring malformed {}: {}", CONFIG_STORAGE_KEY, e);
                Self::default()
            }
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }
}

fn stored_override() -> Option<String> {
    window()?
        .local_storage()
        .ok()??
        .get_item(CONFIG_STORAGE_KEY)
        .ok()?
}

/// Config provided at the app root
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.notification_timeout_ms, 5000);
        assert_eq!(config.validation_debounce_ms, 300);
        assert_eq!(config.total_rooms, 157);
        assert!(!config.room_status_fetch_enabled);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_override(
            r#"{"room_status_fetch_enabled": true, "api_base": "http://desk:5000"}"#,
        );
        assert!(config.room_status_fetch_enabled);
        assert_eq!(config.api_base, "http://desk:5000");
        assert_eq!(config.notification_fade_ms, 300);
    }

    #[test]
    fn test_malformed_override_uses_defaults() {
        assert_eq!(AppConfig::from_override("{not json"), AppConfig::default());
    }

    #[test]
    fn test_log_level() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.log_level = "warn".to_string();
        assert_eq!(config.log_level(), log::Level::Warn);
        config.log_level = "loud".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
