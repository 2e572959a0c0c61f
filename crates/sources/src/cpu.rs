//! CPU load sensor implementation

use dwmstat_core::{Raw, Reading, Sensor, SensorMetadata};
use dwmstat_types::CpuSensorConfig;

/// CPU load sensor
///
/// Reports the raw 1-minute load average, i.e. the first token of
/// `/proc/loadavg`.
pub struct CpuSensor {
    metadata: SensorMetadata,
    reading: Reading,
}

impl CpuSensor {
    pub fn new() -> Self {
        Self::with_config(CpuSensorConfig::default())
    }

    pub fn with_config(config: CpuSensorConfig) -> Self {
        let metadata = SensorMetadata {
            id: "cpu".to_string(),
            name: "CPU Load".to_string(),
            description: "1-minute load average".to_string(),
            label: config.label,
        };

        Self {
            metadata,
            reading: Reading::File(config.path),
        }
    }
}

impl Default for CpuSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl Sensor for CpuSensor {
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
        text.split_whitespace().next().map(str::to_string)
    }
}
