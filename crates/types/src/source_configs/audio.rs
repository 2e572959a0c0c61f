//! Audio volume sensor configuration types.

use serde::{Deserialize, Serialize};

use super::CommandSpec;

fn default_command() -> CommandSpec {
    CommandSpec::new("pactl", &["get-sink-volume", "0"])
}

fn default_field() -> usize {
    5
}

fn default_label() -> String {
    "A ".to_string()
}

/// Audio volume sensor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioSensorConfig {
    /// Mixer query for a fixed sink
    #[serde(default = "default_command")]
    pub command: CommandSpec,
    /// 1-based whitespace field of the first output line holding the volume
    #[serde(default = "default_field")]
    pub field: usize,
    #[serde(default = "default_label")]
    pub label: String,
}

impl Default for AudioSensorConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            field: default_field(),
            label: default_label(),
        }
    }
}
