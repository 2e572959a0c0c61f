//! dwmstat-types: Shared data types for the dwmstat status aggregator.
//!
//! This crate contains pure data types (segments, sensor configs, theme
//! style references) shared by every dwmstat crate. Nothing here performs
//! I/O, which keeps it usable from tests and config tooling alike.

pub mod segment;
pub mod source_configs;
pub mod theme;

// Re-export commonly used types at the crate root for convenience
pub use segment::{Segment, StatusLine, SEPARATOR};
pub use source_configs::{
    AudioSensorConfig, BatterySensorConfig, BrightnessSensorConfig, ClockSensorConfig,
    CommandSpec, CpuSensorConfig, KeyboardSensorConfig, MemoryBackend, MemorySensorConfig,
    SensorConfig, UpdatesSensorConfig, WirelessSensorConfig,
};
pub use theme::{SegmentStyle, StyleRef};
