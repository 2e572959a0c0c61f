//! Battery charge sensor configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_path() -> PathBuf {
    PathBuf::from("/sys/class/power_supply/BAT0/capacity")
}

fn default_label() -> String {
    "B ".to_string()
}

/// Battery charge sensor configuration (single battery device)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatterySensorConfig {
    #[serde(default = "default_path")]
    pub path: PathBuf,
    #[serde(default = "default_label")]
    pub label: String,
}

impl Default for BatterySensorConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            label: default_label(),
        }
    }
}
