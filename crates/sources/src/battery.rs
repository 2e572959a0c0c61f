//! Battery charge sensor implementation

use dwmstat_core::{Raw, Reading, Sensor, SensorMetadata};
use dwmstat_types::BatterySensorConfig;

/// Battery charge sensor for a single battery device
pub struct BatterySensor {
    metadata: SensorMetadata,
    reading: Reading,
}

impl BatterySensor {
    pub fn new() -> Self {
        Self::with_config(BatterySensorConfig::default())
    }

    pub fn with_config(config: BatterySensorConfig) -> Self {
        let metadata = SensorMetadata {
            id: "battery".to_string(),
            name: "Battery".to_string(),
            description: "Battery capacity percentage".to_string(),
            label: config.label,
        };

        Self {
            metadata,
            reading: Reading::File(config.path),
        }
    }
}

impl Default for BatterySensor {
    fn default() -> Self {
        Self::new()
    }
}

impl Sensor for BatterySensor {
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
        let capacity = text.trim();
        (!capacity.is_empty()).then(|| format!("{}%", capacity))
    }
}
