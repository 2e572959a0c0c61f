//! Screen brightness sensor implementation

use dwmstat_core::{Raw, Reading, Sensor, SensorMetadata};
use dwmstat_types::BrightnessSensorConfig;

/// Screen brightness sensor, rounded to the nearest whole percent
pub struct BrightnessSensor {
    metadata: SensorMetadata,
    reading: Reading,
}

impl BrightnessSensor {
    pub fn new() -> Self {
        Self::with_config(BrightnessSensorConfig::default())
    }

    pub fn with_config(config: BrightnessSensorConfig) -> Self {
        let metadata = SensorMetadata {
            id: "brightness".to_string(),
            name: "Brightness".to_string(),
            description: "Backlight brightness percentage".to_string(),
            label: config.label,
        };

        Self {
            metadata,
            reading: Reading::Command(config.command),
        }
    }
}

impl Default for BrightnessSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl Sensor for BrightnessSensor {
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
        let percent: f64 = text.trim().parse().ok()?;
        percent
            .is_finite()
            .then(|| format!("{}%", percent.round() as i64))
    }
}
