//! Sensor configuration types for all status sensors.

pub mod audio;
pub mod battery;
pub mod brightness;
pub mod clock;
pub mod cpu;
pub mod keyboard;
pub mod memory;
pub mod updates;
pub mod wireless;

// Re-export all sensor config types for convenience
pub use audio::AudioSensorConfig;
pub use battery::BatterySensorConfig;
pub use brightness::BrightnessSensorConfig;
pub use clock::ClockSensorConfig;
pub use cpu::CpuSensorConfig;
pub use keyboard::KeyboardSensorConfig;
pub use memory::{MemoryBackend, MemorySensorConfig};
pub use updates::UpdatesSensorConfig;
pub use wireless::WirelessSensorConfig;

use serde::{Deserialize, Serialize};

/// An external program invocation: program name plus arguments.
///
/// Programs are resolved through `PATH`; no shell is involved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }
}

/// Type-safe enum for all sensor configurations.
/// Uses serde tag for JSON serialization: {"sensor": "cpu", ...}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "sensor")]
pub enum SensorConfig {
    #[serde(rename = "cpu")]
    Cpu(CpuSensorConfig),

    #[serde(rename = "keyboard")]
    Keyboard(KeyboardSensorConfig),

    #[serde(rename = "wireless")]
    Wireless(WirelessSensorConfig),

    #[serde(rename = "memory")]
    Memory(MemorySensorConfig),

    #[serde(rename = "brightness")]
    Brightness(BrightnessSensorConfig),

    #[serde(rename = "audio")]
    Audio(AudioSensorConfig),

    #[serde(rename = "battery")]
    Battery(BatterySensorConfig),

    #[serde(rename = "clock")]
    Clock(ClockSensorConfig),

    #[serde(rename = "updates")]
    Updates(UpdatesSensorConfig),
}

impl SensorConfig {
    /// Get the sensor id string
    pub fn sensor_id(&self) -> &'static str {
        match self {
            SensorConfig::Cpu(_) => "cpu",
            SensorConfig::Keyboard(_) => "keyboard",
            SensorConfig::Wireless(_) => "wireless",
            SensorConfig::Memory(_) => "memory",
            SensorConfig::Brightness(_) => "brightness",
            SensorConfig::Audio(_) => "audio",
            SensorConfig::Battery(_) => "battery",
            SensorConfig::Clock(_) => "clock",
            SensorConfig::Updates(_) => "updates",
        }
    }

    /// The default status line: CPU, keyboard layout, wireless, memory,
    /// brightness, audio, battery, clock.
    ///
    /// The update counter is not part of it and has to be listed explicitly.
    pub fn default_order() -> Vec<SensorConfig> {
        vec![
            SensorConfig::Cpu(CpuSensorConfig::default()),
            SensorConfig::Keyboard(KeyboardSensorConfig::default()),
            SensorConfig::Wireless(WirelessSensorConfig::default()),
            SensorConfig::Memory(MemorySensorConfig::default()),
            SensorConfig::Brightness(BrightnessSensorConfig::default()),
            SensorConfig::Audio(AudioSensorConfig::default()),
            SensorConfig::Battery(BatterySensorConfig::default()),
            SensorConfig::Clock(ClockSensorConfig::default()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_config_serialization() {
        let config = SensorConfig::Memory(MemorySensorConfig::default());
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"sensor\":\"memory\""));

        let deserialized: SensorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.sensor_id(), "memory");
        assert_eq!(deserialized, config);
    }

    #[test]
    fn test_sparse_config_uses_defaults() {
        let config: SensorConfig = serde_json::from_str(r#"{"sensor": "battery"}"#).unwrap();
        assert_eq!(config, SensorConfig::Battery(BatterySensorConfig::default()));

        let config: SensorConfig =
            serde_json::from_str(r#"{"sensor": "battery", "path": "/sys/class/power_supply/BAT1/capacity"}"#)
                .unwrap();
        match config {
            SensorConfig::Battery(battery) => {
                assert_eq!(battery.path.to_str(), Some("/sys/class/power_supply/BAT1/capacity"));
                assert_eq!(battery.label, "B ");
            }
            other => panic!("unexpected config {:?}", other),
        }
    }

    #[test]
    fn test_default_order() {
        let ids: Vec<&str> = SensorConfig::default_order()
            .iter()
            .map(SensorConfig::sensor_id)
            .collect();
        assert_eq!(
            ids,
            ["cpu", "keyboard", "wireless", "memory", "brightness", "audio", "battery", "clock"]
        );
    }
}
