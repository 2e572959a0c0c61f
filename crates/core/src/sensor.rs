//! Sensor trait and related types

use chrono::{DateTime, Local};
use dwmstat_types::{CommandSpec, Segment};
use std::path::PathBuf;
use std::sync::Arc;

/// Metadata about a sensor
#[derive(Debug, Clone)]
pub struct SensorMetadata {
    /// Unique identifier for this sensor type
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Description of what this sensor reports
    pub description: String,
    /// Prefix rendered in front of the value, spacing included
    pub label: String,
}

/// What a sensor consumes each tick.
///
/// Acquisition is done by the sampler so that every sensor gets the same
/// timeout and error policy; sensors only parse.
#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    /// Contents of a (pseudo-)file
    File(PathBuf),
    /// Contents of the first file matching a glob pattern
    Glob(String),
    /// Standard output of an external command
    Command(CommandSpec),
    /// The current local time
    Clock,
    /// The sensor gathers its data itself inside [`Sensor::extract`].
    /// Extraction runs on the blocking pool.
    Native,
}

/// Raw input handed to [`Sensor::extract`]
#[derive(Debug, Clone)]
pub enum Raw {
    Text(String),
    Time(DateTime<Local>),
    Native,
}

/// Trait for all status sensors
///
/// A sensor turns one external data source into the value part of a
/// segment. It never fails: unusable input yields `None`, which renders as
/// an empty segment.
pub trait Sensor: Send + Sync {
    /// Get metadata about this sensor
    fn metadata(&self) -> &SensorMetadata;

    /// The input to acquire for this tick
    fn reading(&self) -> &Reading;

    /// Extract the value from raw input
    fn extract(&self, raw: &Raw) -> Option<String>;

    /// Build the segment for an extracted value
    fn segment(&self, value: Option<String>) -> Segment {
        let metadata = self.metadata();
        match value {
            Some(value) => Segment::new(&metadata.id, &metadata.label, value),
            None => Segment::empty(&metadata.id),
        }
    }
}

/// Type-erased sensor for dynamic dispatch
pub type BoxedSensor = Box<dyn Sensor>;

/// Sensor handle that can be moved into sampling tasks
pub type SharedSensor = Arc<dyn Sensor>;
