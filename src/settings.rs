use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const SETTINGS_FILE: &str = "settings.json";
pub const SETTINGS_ENV: &str = "FLOATING_COUNTER_SETTINGS";

/// Host-shell settings. Counter values are intentionally not part of this.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Write logs to this file instead of stderr.
    #[serde(default)]
    pub log_file: Option<String>,
    /// Last known outer window position. If absent the platform picks one.
    #[serde(default)]
    pub window_pos: Option<(i32, i32)>,
    #[serde(default = "default_always_on_top")]
    pub always_on_top: bool,
}

fn default_always_on_top() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            window_pos: None,
            always_on_top: default_always_on_top(),
        }
    }
}

impl Settings {
    /// Settings path, taken from `FLOATING_COUNTER_SETTINGS` when set.
    pub fn path() -> String {
        std::env::var(SETTINGS_ENV).unwrap_or_else(|_| SETTINGS_FILE.to_string())
    }

    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(&content).with_context(|| format!("parsing settings file {path}"))
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("writing settings file {path}"))?;
        Ok(())
    }
}
