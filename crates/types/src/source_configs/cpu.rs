//! CPU load sensor configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_path() -> PathBuf {
    PathBuf::from("/proc/loadavg")
}

fn default_label() -> String {
    "CPU".to_string()
}

/// CPU load sensor configuration
///
/// The segment is the label immediately followed by the raw 1-minute load
/// average, with no unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuSensorConfig {
    /// Load-average pseudo-file; the first whitespace-delimited token is used
    #[serde(default = "default_path")]
    pub path: PathBuf,
    #[serde(default = "default_label")]
    pub label: String,
}

impl Default for CpuSensorConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            label: default_label(),
        }
    }
}
