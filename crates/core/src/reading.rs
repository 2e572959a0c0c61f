//! Bounded acquisition of sensor readings

use crate::sensor::{Raw, Reading, SharedSensor};
use anyhow::{Context, Result};
use chrono::Local;
use dwmstat_types::{CommandSpec, Segment};
use globset::Glob;
use log::{debug, trace};
use std::path::{Component, Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

/// Sample one sensor, giving up after `timeout`.
///
/// Any failure along the way (missing file, missing command, timeout,
/// unparsable output) produces the sensor's empty segment.
pub async fn sample(sensor: SharedSensor, timeout: Duration) -> Segment {
    let value = match tokio::time::timeout(timeout, read_value(&sensor)).await {
        Ok(value) => value,
        Err(_) => {
            debug!(
                "Sensor {} timed out after {:?}",
                sensor.metadata().id,
                timeout
            );
            None
        }
    };
    sensor.segment(value)
}

async fn read_value(sensor: &SharedSensor) -> Option<String> {
    if matches!(sensor.reading(), Reading::Native) {
        let sensor = Arc::clone(sensor);
        let id = sensor.metadata().id.clone();
        return match tokio::task::spawn_blocking(move || sensor.extract(&Raw::Native)).await {
            Ok(value) => value,
            Err(e) => {
                debug!("Native sampling for {} failed: {}", id, e);
                None
            }
        };
    }

    let raw = acquire(sensor.reading()).await?;
    sensor.extract(&raw)
}

/// Acquire the raw input described by `reading`
pub async fn acquire(reading: &Reading) -> Option<Raw> {
    match reading {
        Reading::File(path) => read_file(path).await.map(Raw::Text),
        Reading::Glob(pattern) => {
            let path = match resolve_glob(pattern).await {
                Ok(Some(path)) => path,
                Ok(None) => {
                    trace!("No match for {}", pattern);
                    return None;
                }
                Err(e) => {
                    debug!("Failed to resolve {}: {:#}", pattern, e);
                    return None;
                }
            };
            read_file(&path).await.map(Raw::Text)
        }
        Reading::Command(spec) => run_command(spec).await.map(Raw::Text),
        Reading::Clock => Some(Raw::Time(Local::now())),
        Reading::Native => Some(Raw::Native),
    }
}

async fn read_file(path: &Path) -> Option<String> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => Some(contents),
        Err(e) => {
            trace!("Could not read {:?}: {}", path, e);
            None
        }
    }
}

/// Run a command and capture its stdout.
///
/// The exit status is not interpreted: some tools signal "nothing to
/// report" through it while still printing usable output.
async fn run_command(spec: &CommandSpec) -> Option<String> {
    let output = tokio::process::Command::new(&spec.program)
        .args(&spec.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .output()
        .await;

    match output {
        Ok(output) => {
            if !output.status.success() {
                trace!("{} exited with {}", spec.program, output.status);
            }
            Some(String::from_utf8_lossy(&output.stdout).into_owned())
        }
        Err(e) => {
            trace!("Failed to run {}: {}", spec.program, e);
            None
        }
    }
}

fn has_wildcard(component: &Component<'_>) -> bool {
    component
        .as_os_str()
        .to_string_lossy()
        .contains(['*', '?', '[', '{'])
}

/// Resolve a path pattern with wildcards in one component to the first
/// existing match, in sorted order.
///
/// A pattern without wildcards resolves to itself.
pub async fn resolve_glob(pattern: &str) -> Result<Option<PathBuf>> {
    let path = Path::new(pattern);
    let components: Vec<Component<'_>> = path.components().collect();

    let Some(index) = components.iter().position(has_wildcard) else {
        return Ok(Some(path.to_path_buf()));
    };

    let mut base: PathBuf = components[..index].iter().collect();
    if base.as_os_str().is_empty() {
        base = PathBuf::from(".");
    }
    let rest: PathBuf = components[index + 1..].iter().collect();

    let matcher = Glob::new(&components[index].as_os_str().to_string_lossy())
        .with_context(|| format!("Invalid glob pattern {}", pattern))?
        .compile_matcher();

    let mut entries = tokio::fs::read_dir(&base)
        .await
        .with_context(|| format!("Cannot list {:?}", base))?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name();
        if matcher.is_match(Path::new(&name)) {
            names.push(name);
        }
    }
    names.sort();

    for name in names {
        let candidate = if rest.as_os_str().is_empty() {
            base.join(&name)
        } else {
            base.join(&name).join(&rest)
        };
        if tokio::fs::metadata(&candidate).await.is_ok() {
            return Ok(Some(candidate));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::{Sensor, SensorMetadata};
    use std::io::Write;
    use std::time::Instant;
    use tempfile::{NamedTempFile, TempDir};

    struct EchoSensor {
        metadata: SensorMetadata,
        reading: Reading,
    }

    impl EchoSensor {
        fn new(reading: Reading) -> Self {
            Self {
                metadata: SensorMetadata {
                    id: "echo".to_string(),
                    name: "Echo".to_string(),
                    description: "Returns the trimmed raw text".to_string(),
                    label: "E ".to_string(),
                },
                reading,
            }
        }
    }

    impl Sensor for EchoSensor {
        fn metadata(&self) -> &SensorMetadata {
            &self.metadata
        }

        fn reading(&self) -> &Reading {
            &self.reading
        }

        fn extract(&self, raw: &Raw) -> Option<String> {
            match raw {
                Raw::Text(text) => Some(text.trim().to_string()).filter(|t| !t.is_empty()),
                Raw::Native => Some("native".to_string()),
                Raw::Time(_) => None,
            }
        }
    }

    fn shared(reading: Reading) -> SharedSensor {
        Arc::new(EchoSensor::new(reading))
    }

    #[tokio::test]
    async fn test_file_reading() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "0.52 0.58 0.59 1/389 12345").unwrap();

        let segment = sample(shared(Reading::File(file.path().to_path_buf())), SENSOR_TIMEOUT_TEST).await;
        assert_eq!(segment.to_string(), "E 0.52 0.58 0.59 1/389 12345");
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_segment() {
        let segment = sample(
            shared(Reading::File(PathBuf::from("/nonexistent/dwmstat/file"))),
            SENSOR_TIMEOUT_TEST,
        )
        .await;
        assert!(segment.is_empty());
        assert_eq!(segment.source, "echo");
    }

    #[tokio::test]
    async fn test_command_stdout_is_captured() {
        let raw = acquire(&Reading::Command(CommandSpec::new("echo", &["hello"]))).await;
        match raw {
            Some(Raw::Text(text)) => assert_eq!(text, "hello\n"),
            other => panic!("unexpected raw {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_command_is_none() {
        let raw = acquire(&Reading::Command(CommandSpec::new("dwmstat-no-such-command", &[]))).await;
        assert!(raw.is_none());
    }

    #[tokio::test]
    async fn test_slow_command_times_out() {
        let sensor = shared(Reading::Command(CommandSpec::new("sh", &["-c", "sleep 5; echo late"])));
        let bound = Duration::from_millis(200);

        let start = Instant::now();
        let segment = sample(sensor, bound).await;

        assert!(segment.is_empty());
        assert!(start.elapsed() < bound + Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_native_reading_runs_extract() {
        let segment = sample(shared(Reading::Native), SENSOR_TIMEOUT_TEST).await;
        assert_eq!(segment.to_string(), "E native");
    }

    #[tokio::test]
    async fn test_glob_picks_first_sorted_match() {
        let dir = TempDir::new().unwrap();
        for name in ["wlp2s0", "wlan0", "eth0"] {
            std::fs::create_dir(dir.path().join(name)).unwrap();
            std::fs::write(dir.path().join(name).join("operstate"), format!("{}\n", name)).unwrap();
        }
        // Matching directory without the file is skipped
        std::fs::create_dir(dir.path().join("wa0")).unwrap();

        let pattern = format!("{}/w*/operstate", dir.path().display());
        let resolved = resolve_glob(&pattern).await.unwrap();
        assert_eq!(resolved, Some(dir.path().join("wlan0").join("operstate")));

        let segment = sample(shared(Reading::Glob(pattern)), SENSOR_TIMEOUT_TEST).await;
        assert_eq!(segment.to_string(), "E wlan0");
    }

    #[tokio::test]
    async fn test_glob_without_match() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("eth0")).unwrap();

        let pattern = format!("{}/w*/operstate", dir.path().display());
        assert_eq!(resolve_glob(&pattern).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_plain_path_resolves_to_itself() {
        let resolved = resolve_glob("/proc/loadavg").await.unwrap();
        assert_eq!(resolved, Some(PathBuf::from("/proc/loadavg")));
    }

    const SENSOR_TIMEOUT_TEST: Duration = Duration::from_secs(2);
}
