//! User settings for EventDesk
//!
//! Display preferences and the handful of knobs the dashboard and audit
//! trail read at start-up.

use serde::{Deserialize, Serialize};

use super::paths::EventDeskPaths;
use crate::error::EventDeskError;

/// User settings for EventDesk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format (strftime) for due dates and expense dates
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Date-time format (strftime) for event dates
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,

    /// Number of upcoming events shown on the dashboard
    #[serde(default = "default_upcoming_limit")]
    pub upcoming_limit: usize,

    /// Whether mutations are written to the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%b %d, %Y".to_string()
}

fn default_datetime_format() -> String {
    "%b %d, %Y at %-I:%M %p".to_string()
}

fn default_upcoming_limit() -> usize {
    5
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            datetime_format: default_datetime_format(),
            upcoming_limit: default_upcoming_limit(),
            audit_enabled: default_true(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &EventDeskPaths) -> Result<Self, EventDeskError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| EventDeskError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| EventDeskError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &EventDeskPaths) -> Result<(), EventDeskError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| EventDeskError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| EventDeskError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
