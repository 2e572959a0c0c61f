//! Wireless link sensor configuration types.

use serde::{Deserialize, Serialize};

fn default_pattern() -> String {
    "/sys/class/net/w*/operstate".to_string()
}

fn default_connected() -> String {
    "C".to_string()
}

fn default_disconnected() -> String {
    "DC".to_string()
}

/// Wireless link sensor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WirelessSensorConfig {
    /// Glob for the interface operstate file. One path component may hold
    /// wildcards; the first match in sorted order is read.
    #[serde(default = "default_pattern")]
    pub pattern: String,
    /// Shown when the operstate is `up`
    #[serde(default = "default_connected")]
    pub connected: String,
    /// Shown when the operstate is `down`
    #[serde(default = "default_disconnected")]
    pub disconnected: String,
}

impl Default for WirelessSensorConfig {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            connected: default_connected(),
            disconnected: default_disconnected(),
        }
    }
}
