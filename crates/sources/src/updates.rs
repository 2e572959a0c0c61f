//! Pending package updates sensor implementation

use dwmstat_core::{Raw, Reading, Sensor, SensorMetadata};
use dwmstat_types::UpdatesSensorConfig;

/// Counts the lines printed by an update check such as `checkupdates`.
///
/// An empty listing is a valid answer ("U 0"); only a command that could
/// not be run at all leaves the segment empty.
pub struct UpdatesSensor {
    metadata: SensorMetadata,
    reading: Reading,
}

impl UpdatesSensor {
    pub fn new() -> Self {
        Self::with_config(UpdatesSensorConfig::default())
    }

    pub fn with_config(config: UpdatesSensorConfig) -> Self {
        let metadata = SensorMetadata {
            id: "updates".to_string(),
            name: "Pending Updates".to_string(),
            description: "Number of packages with pending updates".to_string(),
            label: config.label,
        };

        Self {
            metadata,
            reading: Reading::Command(config.command),
        }
    }
}

impl Default for UpdatesSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl Sensor for UpdatesSensor {
    fn metadata(&self) -> &SensorMetadata {
        &self.metadata
    }

    fn reading(&self) -> &Reading {
        &self.reading
    }

    fn extract(&self, raw: &Raw) -> Option<String> {
        let Raw::Text(text) = raw else {
            return None;
        };
        let count = text.lines().filter(|line| !line.trim().is_empty()).count();
        Some(count.to_string())
    }
}
