//! Synchronizer options, parsed from the JSON handed over by the page.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ─── Config ───────────────────────────────────────────────────────────────

/// Options for installing a synchronizer.
///
/// Every field is optional in JSON; missing keys take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SyncConfig {
    /// Selector for the drawable surface. Default: **`canvas`**.
    pub selector: String,

    /// Name of the event dispatched on the surface after each cycle.
    /// Default: **`resize`**.
    pub event_name: String,

    /// Coalesce resize bursts, running only the last one after this many
    /// milliseconds of quiet. Default: **0** (every resize runs a cycle).
    pub debounce_ms: u32,

    /// Maximum level for the console logger. Default: **`info`**.
    pub log_level: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            selector: "canvas".to_string(),
            event_name: "resize".to_string(),
            debounce_ms: 0,
            log_level: "info".to_string(),
        }
    }
}

impl SyncConfig {
    /// Parse options from JSON. A blank string yields the defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError`] on malformed JSON, unknown keys, or empty
    /// selector / event name.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_json::from_str(json).map_err(|source| ConfigError::Parse { source })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.selector.trim().is_empty() {
            return Err(ConfigError::Empty { field: "selector" });
        }
        if self.event_name.trim().is_empty() {
            return Err(ConfigError::Empty { field: "eventName" });
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        log::LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_json_gives_defaults() {
        assert_eq!(SyncConfig::from_json("  ").unwrap(), SyncConfig::default());
        assert_eq!(SyncConfig::from_json("{}").unwrap(), SyncConfig::default());
    }

    #[test]
    fn camel_case_keys_override_defaults() {
        let config =
            SyncConfig::from_json(r##"{"selector":"#canvas","debounceMs":50,"logLevel":"debug"}"##)
                .unwrap();
        assert_eq!(config.selector, "#canvas");
        assert_eq!(config.event_name, "resize");
        assert_eq!(config.debounce_ms, 50);
        assert_eq!(config.level_filter().unwrap(), log::LevelFilter::Debug);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = SyncConfig::from_json(r#"{"selektor":"canvas"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn rejects_empty_selector() {
        let err = SyncConfig::from_json(r#"{"selector":" "}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Empty { field: "selector" }));
    }

    #[test]
    fn rejects_empty_event_name() {
        let err = SyncConfig::from_json(r#"{"eventName":""}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Empty { field: "eventName" }));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let err = SyncConfig::from_json(r#"{"logLevel":"loud"}"#).unwrap_err();
        assert_eq!(err.to_string(), "unknown log level `loud`");
    }
}
