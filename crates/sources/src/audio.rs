//! Audio volume sensor implementation

use dwmstat_core::{Raw, Reading, Sensor, SensorMetadata};
use dwmstat_types::AudioSensorConfig;

/// Audio volume sensor
///
/// Takes one whitespace-separated field from the first line of the mixer
/// output. For `pactl get-sink-volume 0` the fifth field is the left
/// channel percentage.
pub struct AudioSensor {
    metadata: SensorMetadata,
    reading: Reading,
    field: usize,
}

impl AudioSensor {
    pub fn new() -> Self {
        Self::with_config(AudioSensorConfig::default())
    }

    pub fn with_config(config: AudioSensorConfig) -> Self {
        let metadata = SensorMetadata {
            id: "audio".to_string(),
            name: "Audio Volume".to_string(),
            description: "Volume of a fixed audio sink".to_string(),
            label: config.label,
        };

        Self {
            metadata,
            reading: Reading::Command(config.command),
            field: config.field,
        }
    }
}

impl Default for AudioSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl Sensor for AudioSensor {
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
        let index = self.field.checked_sub(1)?;
        text.lines()
            .next()?
            .split_whitespace()
            .nth(index)
            .map(str::to_string)
    }
}
