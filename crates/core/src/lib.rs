//! dwmstat-core: Core traits and sampling for the dwmstat status aggregator.
//!
//! This crate contains the [`Sensor`] capability, the [`Reading`] model that
//! describes what a sensor consumes, and the bounded async acquisition that
//! turns a sensor into a [`Segment`](dwmstat_types::Segment) each tick.

pub mod constants;
mod reading;
mod sensor;

pub use constants::{ALERT_PERIOD_TICKS, SENSOR_TIMEOUT, TICK_INTERVAL};
pub use reading::{acquire, resolve_glob, sample};
pub use sensor::{BoxedSensor, Raw, Reading, Sensor, SensorMetadata, SharedSensor};

// Re-export types used in trait signatures for convenience
pub use dwmstat_types::{CommandSpec, Segment, SensorConfig};
