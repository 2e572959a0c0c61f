//! Memory usage sensor configuration types.

use serde::{Deserialize, Serialize};

use super::CommandSpec;

/// Where the used-memory figure comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MemoryBackend {
    /// Parse the `Mem:` row of `free -h` style output
    #[serde(rename = "command")]
    #[default]
    Command,
    /// Read the kernel counters in-process through sysinfo
    #[serde(rename = "sysinfo")]
    Sysinfo,
}

fn default_command() -> CommandSpec {
    CommandSpec::new("free", &["-h"])
}

fn default_label() -> String {
    "M ".to_string()
}

/// Memory usage sensor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemorySensorConfig {
    #[serde(default)]
    pub backend: MemoryBackend,
    /// Only used by [`MemoryBackend::Command`]
    #[serde(default = "default_command")]
    pub command: CommandSpec,
    #[serde(default = "default_label")]
    pub label: String,
}

impl Default for MemorySensorConfig {
    fn default() -> Self {
        Self {
            backend: MemoryBackend::default(),
            command: default_command(),
            label: default_label(),
        }
    }
}
