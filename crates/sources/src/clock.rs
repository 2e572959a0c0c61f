//! Clock sensor implementation

use dwmstat_core::{Raw, Reading, Sensor, SensorMetadata};
use dwmstat_types::ClockSensorConfig;
use std::fmt::Write;

/// Wall-clock sensor, local time
pub struct ClockSensor {
    metadata: SensorMetadata,
    reading: Reading,
    format: String,
}

impl ClockSensor {
    pub fn new() -> Self {
        Self::with_config(ClockSensorConfig::default())
    }

    pub fn with_config(config: ClockSensorConfig) -> Self {
        let metadata = SensorMetadata {
            id: "clock".to_string(),
            name: "Clock".to_string(),
            description: "Current local date and time".to_string(),
            label: config.label,
        };

        Self {
            metadata,
            reading: Reading::Clock,
            format: config.format,
        }
    }
}

impl Default for ClockSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl Sensor for ClockSensor {
    fn metadata(&self) -> &SensorMetadata {
        &self.metadata
    }

    fn reading(&self) -> &Reading {
        &self.reading
    }

    fn extract(&self, raw: &Raw) -> Option<String> {
        let Raw::Time(now) = raw else {
            return None;
        };
        // write! reports an invalid format string as an error instead of panicking
        let mut formatted = String::new();
        if write!(formatted, "{}", now.format(&self.format)).is_err() {
            log::debug!("Invalid clock format {:?}", self.format);
            return None;
        }
        Some(formatted)
    }
}
