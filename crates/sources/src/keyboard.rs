//! Keyboard layout sensor implementation

use dwmstat_core::{Raw, Reading, Sensor, SensorMetadata};
use dwmstat_types::KeyboardSensorConfig;

/// Keyboard layout sensor, backed by an external layout query command
pub struct KeyboardSensor {
    metadata: SensorMetadata,
    reading: Reading,
}

impl KeyboardSensor {
    pub fn new() -> Self {
        Self::with_config(KeyboardSensorConfig::default())
    }

    pub fn with_config(config: KeyboardSensorConfig) -> Self {
        let metadata = SensorMetadata {
            id: "keyboard".to_string(),
            name: "Keyboard Layout".to_string(),
            description: "Active keyboard layout code".to_string(),
            label: config.label,
        };

        Self {
            metadata,
            reading: Reading::Command(config.command),
        }
    }
}

impl Default for KeyboardSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl Sensor for KeyboardSensor {
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
        let layout = text.lines().next()?.trim();
        (!layout.is_empty()).then(|| layout.to_string())
    }
}
