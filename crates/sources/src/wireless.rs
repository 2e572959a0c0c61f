//! Wireless link sensor implementation

use dwmstat_core::{Raw, Reading, Sensor, SensorMetadata};
use dwmstat_types::WirelessSensorConfig;

/// Wireless link sensor
///
/// Maps the interface operstate to a short marker. Only `up` and `down`
/// are recognized; every other state (`unknown`, `dormant`, a missing
/// interface) leaves the segment empty.
pub struct WirelessSensor {
    metadata: SensorMetadata,
    reading: Reading,
    connected: String,
    disconnected: String,
}

impl WirelessSensor {
    pub fn new() -> Self {
        Self::with_config(WirelessSensorConfig::default())
    }

    pub fn with_config(config: WirelessSensorConfig) -> Self {
        let metadata = SensorMetadata {
            id: "wireless".to_string(),
            name: "Wireless Link".to_string(),
            description: "Wireless interface connection state".to_string(),
            label: String::new(),
        };

        Self {
            metadata,
            reading: Reading::Glob(config.pattern),
            connected: config.connected,
            disconnected: config.disconnected,
        }
    }
}

impl Default for WirelessSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl Sensor for WirelessSensor {
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
        match text.trim() {
            "up" => Some(self.connected.clone()),
            "down" => Some(self.disconnected.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(state: &str) -> String {
        let sensor = WirelessSensor::new();
        let value = sensor.extract(&Raw::Text(state.to_string()));
        sensor.segment(value).to_string()
    }

    #[test]
    fn test_up_and_down() {
        assert_eq!(render("up\n"), "C");
        assert_eq!(render("down\n"), "DC");
    }

    #[test]
    fn test_other_states_are_empty() {
        assert_eq!(render("unknown\n"), "");
        assert_eq!(render("dormant"), "");
        assert_eq!(render(""), "");
        // Several matched interfaces concatenated do not match either state
        assert_eq!(render("up\ndown\n"), "");
    }

    #[tokio::test]
    async fn test_missing_interface_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let sensor = WirelessSensor::with_config(WirelessSensorConfig {
            pattern: format!("{}/w*/operstate", dir.path().display()),
            ..WirelessSensorConfig::default()
        });
        let segment = dwmstat_core::sample(std::sync::Arc::new(sensor), dwmstat_core::SENSOR_TIMEOUT).await;
        assert!(segment.is_empty());
    }

    #[tokio::test]
    async fn test_reads_matched_operstate() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("wlan0")).unwrap();
        std::fs::write(dir.path().join("wlan0").join("operstate"), "up\n").unwrap();

        let sensor = WirelessSensor::with_config(WirelessSensorConfig {
            pattern: format!("{}/w*/operstate", dir.path().display()),
            ..WirelessSensorConfig::default()
        });
        let segment = dwmstat_core::sample(std::sync::Arc::new(sensor), dwmstat_core::SENSOR_TIMEOUT).await;
        assert_eq!(segment.to_string(), "C");
    }
}
