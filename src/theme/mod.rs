//! Status2d color theming
//!
//! A theme is loaded once at startup: the palette file is parsed and every
//! configured segment style is resolved into concrete escape markers. Any
//! problem is reported immediately so the bar never shows half-resolved
//! markers.

mod palette;

pub use palette::Palette;

use crate::config::ThemeConfig;
use dwmstat_types::{Segment, StyleRef};
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Restores the bar's default colors
pub const RESET: &str = "^d^";

/// Errors raised while loading a theme
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("cannot read theme file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path:?} line {line}: expected name=value, found {content:?}")]
    Syntax {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("theme {path:?} has no color named {name:?} (used by the {sensor} segment)")]
    UnknownColor {
        path: PathBuf,
        name: String,
        sensor: String,
    },
}

/// A resolved foreground/background escape pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeMarker {
    pub fg: String,
    pub bg: String,
}

impl ThemeMarker {
    pub fn new(fg_color: &str, bg_color: &str) -> Self {
        Self {
            fg: format!("^c{}^", fg_color),
            bg: format!("^b{}^", bg_color),
        }
    }

    fn resolve(style: &StyleRef, palette: &Palette, sensor: &str) -> Result<Self, ThemeError> {
        let lookup = |name: &str| {
            palette.get(name).ok_or_else(|| ThemeError::UnknownColor {
                path: palette.path().to_path_buf(),
                name: name.to_string(),
                sensor: sensor.to_string(),
            })
        };
        Ok(Self::new(lookup(&style.fg)?, lookup(&style.bg)?))
    }

    fn open(&self, out: &mut String) {
        out.push_str(&self.fg);
        out.push_str(&self.bg);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ResolvedStyle {
    label: Option<ThemeMarker>,
    value: Option<ThemeMarker>,
}

/// Resolved markers for every styled sensor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    styles: HashMap<String, ResolvedStyle>,
}

impl Theme {
    /// Load the palette file and resolve the configured styles
    pub fn load(config: &ThemeConfig) -> Result<Self, ThemeError> {
        let palette = Palette::load(&config.path)?;
        Self::resolve(config, &palette)
    }

    /// Resolve the configured styles against an already parsed palette
    pub fn resolve(config: &ThemeConfig, palette: &Palette) -> Result<Self, ThemeError> {
        let mut styles = HashMap::with_capacity(config.styles.len());

        for (sensor, style) in &config.styles {
            let label = style
                .label
                .as_ref()
                .map(|s| ThemeMarker::resolve(s, palette, sensor))
                .transpose()?;
            let value = style
                .value
                .as_ref()
                .map(|s| ThemeMarker::resolve(s, palette, sensor))
                .transpose()?;
            styles.insert(sensor.clone(), ResolvedStyle { label, value });
        }

        log::debug!("Resolved theme styles for {} sensors", styles.len());
        Ok(Self { styles })
    }

    /// Render a segment with its markers.
    ///
    /// Empty segments stay empty and unstyled sensors render as plain text.
    pub fn render(&self, segment: &Segment) -> String {
        if segment.is_empty() {
            return String::new();
        }
        let Some(style) = self.styles.get(&segment.source) else {
            return segment.to_string();
        };

        let mut out = String::new();
        if let Some(marker) = &style.label {
            marker.open(&mut out);
        }
        out.push_str(&segment.label);
        if let Some(marker) = &style.value {
            marker.open(&mut out);
        }
        out.push_str(&segment.value);
        if style.label.is_some() || style.value.is_some() {
            out.push_str(RESET);
        }
        out
    }
}
