use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use super::filter::FilterMode;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Filter selected at startup
    #[serde(default)]
    pub default_filter: FilterMode,
    /// Hex color overrides keyed by theme slot (e.g. `background = "#000000"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            default_filter: FilterMode::All,
            colors: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NotificationConfig {
    /// How long a status message stays visible
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            duration_ms: default_duration_ms(),
        }
    }
}

impl NotificationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

fn default_true() -> bool {
    true
}

fn default_duration_ms() -> u64 {
    3000
}
