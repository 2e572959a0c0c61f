//! Theme style references.
//!
//! A style names palette entries; the theme loader in the main crate turns
//! them into concrete escape markers once the palette file has been read.

use serde::{Deserialize, Serialize};

/// A foreground/background pair of palette names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRef {
    pub fg: String,
    pub bg: String,
}

impl StyleRef {
    pub fn new(fg: impl Into<String>, bg: impl Into<String>) -> Self {
        Self {
            fg: fg.into(),
            bg: bg.into(),
        }
    }
}

/// Colors applied to one segment: the label (icon glyph) and the value
/// can be styled independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentStyle {
    #[serde(default)]
    pub label: Option<StyleRef>,
    #[serde(default)]
    pub value: Option<StyleRef>,
}

impl SegmentStyle {
    pub fn new(label: StyleRef, value: StyleRef) -> Self {
        Self {
            label: Some(label),
            value: Some(value),
        }
    }
}
