//! dwmstat-sources: Sensor implementations for the dwmstat status aggregator.

mod audio;
mod battery;
mod brightness;
mod clock;
mod cpu;
mod keyboard;
mod memory;
mod updates;
mod wireless;

pub use audio::AudioSensor;
pub use battery::BatterySensor;
pub use brightness::BrightnessSensor;
pub use clock::ClockSensor;
pub use cpu::CpuSensor;
pub use keyboard::KeyboardSensor;
pub use memory::{human_size, MemorySensor};
pub use updates::UpdatesSensor;
pub use wireless::WirelessSensor;

use dwmstat_core::{BoxedSensor, SensorConfig, SharedSensor};

/// Build the sensor described by a config entry
pub fn create_sensor(config: &SensorConfig) -> BoxedSensor {
    match config.clone() {
        SensorConfig::Cpu(cfg) => Box::new(CpuSensor::with_config(cfg)),
        SensorConfig::Keyboard(cfg) => Box::new(KeyboardSensor::with_config(cfg)),
        SensorConfig::Wireless(cfg) => Box::new(WirelessSensor::with_config(cfg)),
        SensorConfig::Memory(cfg) => Box::new(MemorySensor::with_config(cfg)),
        SensorConfig::Brightness(cfg) => Box::new(BrightnessSensor::with_config(cfg)),
        SensorConfig::Audio(cfg) => Box::new(AudioSensor::with_config(cfg)),
        SensorConfig::Battery(cfg) => Box::new(BatterySensor::with_config(cfg)),
        SensorConfig::Clock(cfg) => Box::new(ClockSensor::with_config(cfg)),
        SensorConfig::Updates(cfg) => Box::new(UpdatesSensor::with_config(cfg)),
    }
}

/// Build every configured sensor, keeping the configured order
pub fn create_sensors(configs: &[SensorConfig]) -> Vec<SharedSensor> {
    configs
        .iter()
        .map(|config| {
            log::debug!("Creating sensor {}", config.sensor_id());
            SharedSensor::from(create_sensor(config))
        })
        .collect()
}
