//! Screen brightness sensor configuration types.

use serde::{Deserialize, Serialize};

use super::CommandSpec;

fn default_command() -> CommandSpec {
    CommandSpec::new("xbacklight", &["-get"])
}

fn default_label() -> String {
    "L ".to_string()
}

/// Screen brightness sensor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrightnessSensorConfig {
    /// Must print a numeric percentage
    #[serde(default = "default_command")]
    pub command: CommandSpec,
    #[serde(default = "default_label")]
    pub label: String,
}

impl Default for BrightnessSensorConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            label: default_label(),
        }
    }
}
