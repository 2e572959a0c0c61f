//! Clock sensor configuration types.

use serde::{Deserialize, Serialize};

fn default_format() -> String {
    "%Y, %b %d. %a, %H:%M:%S".to_string()
}

fn default_label() -> String {
    "T ".to_string()
}

/// Clock sensor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockSensorConfig {
    /// strftime-style format applied to the local time
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_label")]
    pub label: String,
}

impl Default for ClockSensorConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            label: default_label(),
        }
    }
}
