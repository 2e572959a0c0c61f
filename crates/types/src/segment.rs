//! Segments and the status line they are joined into

use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal separator placed between two adjacent segments
pub const SEPARATOR: &str = " | ";

/// One labeled piece of the status string, produced by a single sensor.
///
/// The label carries its own spacing (`"M "`, `"CPU"`), so rendering is a
/// plain concatenation. A segment with an empty value renders as nothing
/// but still occupies its slot in the [`StatusLine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Id of the sensor that produced this segment (e.g. "memory")
    pub source: String,
    pub label: String,
    pub value: String,
}

impl Segment {
    pub fn new(source: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            label: label.into(),
            value: value.into(),
        }
    }

    /// A degraded segment: the sensor had nothing to report this tick
    pub fn empty(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            label: String::new(),
            value: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            return Ok(());
        }
        write!(f, "{}{}", self.label, self.value)
    }
}

/// The ordered segments of one tick.
///
/// Built fresh every tick and never diffed against the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    segments: Vec<Segment>,
}

impl StatusLine {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Join the segments with [`SEPARATOR`], rendering each one through `render`.
    ///
    /// Empty segments keep their position, so N segments always yield N-1
    /// separators.
    pub fn join_with<F>(&self, mut render: F) -> String
    where
        F: FnMut(&Segment) -> String,
    {
        self.segments
            .iter()
            .map(|segment| render(segment))
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join_with(|segment| segment.to_string()))
    }
}

impl FromIterator<Segment> for StatusLine {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
