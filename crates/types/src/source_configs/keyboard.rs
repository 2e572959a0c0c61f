//! Keyboard layout sensor configuration types.

use serde::{Deserialize, Serialize};

use super::CommandSpec;

fn default_command() -> CommandSpec {
    CommandSpec::new("xkb-switch", &["-p"])
}

/// Keyboard layout sensor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardSensorConfig {
    /// Layout query; the first line of its output is the layout code
    #[serde(default = "default_command")]
    pub command: CommandSpec,
    #[serde(default)]
    pub label: String,
}

impl Default for KeyboardSensorConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            label: String::new(),
        }
    }
}
