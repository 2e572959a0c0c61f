//! Memory (RAM) sensor implementation

use dwmstat_core::{Raw, Reading, Sensor, SensorMetadata};
use dwmstat_types::{MemoryBackend, MemorySensorConfig};
use once_cell::sync::Lazy;
use std::sync::Mutex;
use sysinfo::System;

/// Shared sysinfo::System instance for all MemorySensor instances.
/// Only touched by the sysinfo backend.
static SHARED_MEMORY_SYSTEM: Lazy<Mutex<System>> = Lazy::new(|| {
    log::info!("Creating shared Memory sysinfo::System instance");
    Mutex::new(System::new())
});

const UNITS: [&str; 6] = ["B", "K", "M", "G", "T", "P"];

/// Memory usage sensor
///
/// Reports used memory in human-readable form (`2.1G`). With the command
/// backend the value is the used column of the `Mem:` row of `free -h`
/// with the trailing binary-unit `i` removed (`512Mi` becomes `512M`).
pub struct MemorySensor {
    metadata: SensorMetadata,
    reading: Reading,
}

impl MemorySensor {
    pub fn new() -> Self {
        Self::with_config(MemorySensorConfig::default())
    }

    pub fn with_config(config: MemorySensorConfig) -> Self {
        let metadata = SensorMetadata {
            id: "memory".to_string(),
            name: "Memory (RAM)".to_string(),
            description: "Used system memory".to_string(),
            label: config.label,
        };

        let reading = match config.backend {
            MemoryBackend::Command => Reading::Command(config.command),
            MemoryBackend::Sysinfo => Reading::Native,
        };

        Self { metadata, reading }
    }

    /// Pick the used column out of the `Mem:` row
    fn parse_free(text: &str) -> Option<String> {
        let used = text
            .lines()
            .find(|line| line.trim_start().starts_with("Mem:"))?
            .split_whitespace()
            .nth(2)?;
        let normalized = used.strip_suffix('i').unwrap_or(used);
        (!normalized.is_empty()).then(|| normalized.to_string())
    }

    fn sample_sysinfo() -> Option<String> {
        // Recover from a poisoned mutex - the System is refreshed right away anyway
        let mut system = SHARED_MEMORY_SYSTEM.lock().unwrap_or_else(|poisoned| {
            log::warn!("Shared memory system mutex was poisoned, recovering");
            poisoned.into_inner()
        });
        system.refresh_memory();
        let used = system.used_memory();
        drop(system);

        Some(human_size(used))
    }
}

impl Default for MemorySensor {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a byte count the way `free -h` does, minus the `i`:
/// one decimal below 10 units, whole numbers above.
pub fn human_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{}{}", bytes, UNITS[0])
    } else if value < 10.0 {
        format!("{:.1}{}", value, UNITS[unit])
    } else {
        format!("{:.0}{}", value, UNITS[unit])
    }
}

impl Sensor for MemorySensor {
    fn metadata(&self) -> &SensorMetadata {
        &self.metadata
    }

    fn reading(&self) -> &Reading {
        &self.reading
    }

    fn extract(&self, raw: &Raw) -> Option<String> {
        match raw {
            Raw::Text(text) => Self::parse_free(text),
            Raw::Native => Self::sample_sysinfo(),
            Raw::Time(_) => None,
        }
    }
}
