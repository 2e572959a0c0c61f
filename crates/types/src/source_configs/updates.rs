//! Pending package updates sensor configuration types.

use serde::{Deserialize, Serialize};

use super::CommandSpec;

fn default_command() -> CommandSpec {
    CommandSpec::new("checkupdates", &[])
}

fn default_label() -> String {
    "U ".to_string()
}

/// Pending updates sensor configuration
///
/// The value is the number of non-empty lines the command prints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatesSensorConfig {
    #[serde(default = "default_command")]
    pub command: CommandSpec,
    #[serde(default = "default_label")]
    pub label: String,
}

impl Default for UpdatesSensorConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            label: default_label(),
        }
    }
}
