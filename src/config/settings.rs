//! Application configuration

use anyhow::{Context, Result};
use dwmstat_core::{ALERT_PERIOD_TICKS, SENSOR_TIMEOUT, TICK_INTERVAL};
use dwmstat_types::{SegmentStyle, SensorConfig, StyleRef};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Current config format version
pub const CONFIG_VERSION: u32 = 1;

/// Application-wide configuration
///
/// Every field has a default, so an empty JSON object is a valid config
/// describing the stock status line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the config format
    #[serde(default = "default_version")]
    pub version: u32,
    /// Time between two refreshes
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Per-sensor bound on acquiring a reading
    #[serde(default = "default_sensor_timeout_ms")]
    pub sensor_timeout_ms: u64,
    /// Periodic battery alert
    #[serde(default)]
    pub alert: AlertConfig,
    /// Sensors in display order
    #[serde(default = "SensorConfig::default_order")]
    pub sensors: Vec<SensorConfig>,
    /// Status2d colors; plain text when absent
    #[serde(default)]
    pub theme: Option<ThemeConfig>,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_interval_ms() -> u64 {
    TICK_INTERVAL.as_millis() as u64
}

fn default_sensor_timeout_ms() -> u64 {
    SENSOR_TIMEOUT.as_millis() as u64
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            interval_ms: default_interval_ms(),
            sensor_timeout_ms: default_sensor_timeout_ms(),
            alert: AlertConfig::default(),
            sensors: SensorConfig::default_order(),
            theme: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location.
    ///
    /// A missing file is not an error: the defaults are returned.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            log::info!("No config at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        config
            .validate()
            .with_context(|| format!("Invalid config {:?}", path))?;
        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Reject values that would leave the bar permanently blank
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.sensor_timeout_ms > 0,
            "sensor_timeout_ms must be greater than zero"
        );
        Ok(())
    }

    /// Save configuration to a specific file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "dwmstat")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }

    pub fn sensor_timeout(&self) -> Duration {
        Duration::from_millis(self.sensor_timeout_ms)
    }

    /// Point the theme at another palette file, keeping configured styles.
    /// Enables the default styles when no theme was configured.
    pub fn set_theme_path(&mut self, path: PathBuf) {
        match &mut self.theme {
            Some(theme) => theme.path = path,
            None => self.theme = Some(ThemeConfig::with_default_styles(path)),
        }
    }
}

/// Battery alert configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Script run without arguments; `null` disables the alert
    #[serde(default = "default_alert_script")]
    pub script: Option<PathBuf>,
    #[serde(default = "default_every_ticks")]
    pub every_ticks: u64,
}

fn default_alert_script() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".local/bin/battery-alert"))
}

fn default_every_ticks() -> u64 {
    ALERT_PERIOD_TICKS
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            script: default_alert_script(),
            every_ticks: default_every_ticks(),
        }
    }
}

/// Theme configuration: a palette file plus per-sensor styles keyed by
/// sensor id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub path: PathBuf,
    #[serde(default = "default_styles")]
    pub styles: BTreeMap<String, SegmentStyle>,
}

impl ThemeConfig {
    pub fn with_default_styles(path: PathBuf) -> Self {
        Self {
            path,
            styles: default_styles(),
        }
    }
}

/// Accent-colored icon on the left, neutral value on the right
fn default_styles() -> BTreeMap<String, SegmentStyle> {
    let accents = [
        ("cpu", "green"),
        ("keyboard", "blue"),
        ("wireless", "blue"),
        ("memory", "darkblue"),
        ("brightness", "red"),
        ("audio", "green"),
        ("battery", "red"),
        ("clock", "darkblue"),
        ("updates", "green"),
    ];

    accents
        .into_iter()
        .map(|(sensor, accent)| {
            (
                sensor.to_string(),
                SegmentStyle::new(StyleRef::new("black", accent), StyleRef::new("white", "grey")),
            )
        })
        .collect()
}
