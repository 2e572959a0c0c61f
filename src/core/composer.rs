//! Status composition: sample every sensor once and join the results

use crate::theme::Theme;
use dwmstat_core::{sample, SharedSensor};
use dwmstat_types::{Segment, StatusLine};
use log::error;
use std::sync::Arc;
use std::time::Duration;

/// Samples the configured sensors and renders the status line
///
/// Sensors are sampled concurrently, one task each, but the results are
/// collected in configured order so the line never depends on which
/// sensor answered first.
pub struct Composer {
    sensors: Vec<SharedSensor>,
    timeout: Duration,
    theme: Option<Theme>,
}

impl Composer {
    pub fn new(sensors: Vec<SharedSensor>, timeout: Duration) -> Self {
        Self {
            sensors,
            timeout,
            theme: None,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn sensor_count(&self) -> usize {
        self.sensors.len()
    }

    /// Sample every sensor exactly once
    pub async fn sample(&self) -> StatusLine {
        let tasks: Vec<_> = self
            .sensors
            .iter()
            .map(|sensor| tokio::spawn(sample(Arc::clone(sensor), self.timeout)))
            .collect();

        let mut segments = Vec::with_capacity(tasks.len());
        for (sensor, task) in self.sensors.iter().zip(tasks) {
            match task.await {
                Ok(segment) => segments.push(segment),
                Err(e) => {
                    let id = &sensor.metadata().id;
                    error!("Sampling task for {} failed: {}", id, e);
                    segments.push(Segment::empty(id));
                }
            }
        }

        StatusLine::new(segments)
    }

    /// Render a sampled line, with theme markers when a theme is loaded
    pub fn render(&self, line: &StatusLine) -> String {
        match &self.theme {
            Some(theme) => line.join_with(|segment| theme.render(segment)),
            None => line.to_string(),
        }
    }

    /// Sample and render in one go
    pub async fn compose(&self) -> String {
        let line = self.sample().await;
        self.render(&line)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::ThemeConfig;
    use crate::theme::Palette;
    use dwmstat_core::{CommandSpec, Raw, Reading, Sensor, SensorMetadata};
    use dwmstat_types::{SegmentStyle, StyleRef, SEPARATOR};
    use std::path::Path;
    use std::time::Instant;

    /// Sensor with a fixed answer and no I/O
    pub(crate) struct FixedSensor {
        metadata: SensorMetadata,
        reading: Reading,
        value: Option<String>,
    }

    impl FixedSensor {
        pub(crate) fn shared(id: &str, label: &str, value: Option<&str>) -> SharedSensor {
            Arc::new(Self {
                metadata: SensorMetadata {
                    id: id.to_string(),
                    name: id.to_string(),
                    description: String::new(),
                    label: label.to_string(),
                },
                reading: Reading::Clock,
                value: value.map(str::to_string),
            })
        }

        /// Answers with the trimmed stdout of a shell snippet
        fn shell(id: &str, script: &str) -> SharedSensor {
            Arc::new(Self {
                metadata: SensorMetadata {
                    id: id.to_string(),
                    name: id.to_string(),
                    description: String::new(),
                    label: String::new(),
                },
                reading: Reading::Command(CommandSpec::new("sh", &["-c", script])),
                value: None,
            })
        }
    }

    impl Sensor for FixedSensor {
        fn metadata(&self) -> &SensorMetadata {
            &self.metadata
        }

        fn reading(&self) -> &Reading {
            &self.reading
        }

        fn extract(&self, raw: &Raw) -> Option<String> {
            match raw {
                Raw::Text(text) => Some(text.trim().to_string()).filter(|t| !t.is_empty()),
                _ => self.value.clone(),
            }
        }
    }

    fn mixed_sensors() -> Vec<SharedSensor> {
        vec![
            FixedSensor::shared("cpu", "CPU", Some("0.52")),
            FixedSensor::shared("keyboard", "", None),
            FixedSensor::shared("wireless", "", Some("C")),
            FixedSensor::shared("memory", "M ", Some("2.1G")),
            FixedSensor::shared("brightness", "L ", None),
            FixedSensor::shared("audio", "A ", Some("65%")),
            FixedSensor::shared("battery", "B ", None),
            FixedSensor::shared("clock", "T ", Some("2024, Mar 05. Tue, 14:07:09")),
        ]
    }

    #[tokio::test]
    async fn test_fixed_order_and_empty_slots() {
        let composer = Composer::new(mixed_sensors(), Duration::from_millis(300));
        let text = composer.compose().await;
        assert_eq!(
            text,
            "CPU0.52 |  | C | M 2.1G |  | A 65% |  | T 2024, Mar 05. Tue, 14:07:09"
        );
    }

    #[tokio::test]
    async fn test_separator_count_matches_sensor_count() {
        for empty in 0..=3 {
            let sensors: Vec<SharedSensor> = (0..5)
                .map(|i| {
                    let value = if i < empty { None } else { Some("x") };
                    FixedSensor::shared(&format!("s{}", i), "", value)
                })
                .collect();
            let composer = Composer::new(sensors, Duration::from_millis(300));
            let text = composer.compose().await;
            assert_eq!(text.matches(SEPARATOR).count(), composer.sensor_count() - 1);
        }
    }

    #[tokio::test]
    async fn test_compose_is_idempotent() {
        let composer = Composer::new(mixed_sensors(), Duration::from_millis(300));
        let first = composer.compose().await;
        let second = composer.compose().await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_order_does_not_depend_on_completion_order() {
        let sensors = vec![
            FixedSensor::shell("slow", "sleep 0.2; echo slow"),
            FixedSensor::shell("fast", "echo fast"),
        ];
        let composer = Composer::new(sensors, Duration::from_secs(2));
        assert_eq!(composer.compose().await, "slow | fast");
    }

    #[tokio::test]
    async fn test_hung_sensor_only_blanks_its_own_slot() {
        let bound = Duration::from_millis(200);
        let sensors = vec![
            FixedSensor::shared("cpu", "CPU", Some("0.10")),
            FixedSensor::shell("hung", "sleep 10"),
            FixedSensor::shared("battery", "B ", Some("50%")),
        ];
        let composer = Composer::new(sensors, bound);

        let start = Instant::now();
        let text = composer.compose().await;

        assert_eq!(text, "CPU0.10 |  | B 50%");
        assert!(start.elapsed() < bound + Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_themed_rendering_keeps_separators() {
        let palette = Palette::parse("fg=#ffffff\nbg=#000000\n", Path::new("t")).unwrap();
        let mut config = ThemeConfig::with_default_styles("t".into());
        config.styles.clear();
        config.styles.insert(
            "cpu".to_string(),
            SegmentStyle {
                label: None,
                value: Some(StyleRef::new("fg", "bg")),
            },
        );
        let theme = Theme::resolve(&config, &palette).unwrap();

        let composer = Composer::new(mixed_sensors(), Duration::from_millis(300)).with_theme(theme);
        let text = composer.compose().await;

        assert!(text.starts_with("CPU^c#ffffff^^b#000000^0.52^d^ |  | C"));
        assert_eq!(text.matches(SEPARATOR).count(), 7);
    }
}
