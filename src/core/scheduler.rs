//! Tick scheduler: drives one refresh per interval until cancelled

use super::alert::AlertTrigger;
use super::composer::Composer;
use super::publisher::{PublishError, Publisher};
use log::{info, trace};
use std::fmt;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// One iteration of the refresh loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Tick(u64);

impl Tick {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The tick counter, owned by the scheduler
#[derive(Debug, Default)]
pub struct TickState {
    current: Tick,
}

impl TickState {
    pub fn current(&self) -> Tick {
        self.current
    }

    /// Move to the next tick and return it
    pub fn advance(&mut self) -> Tick {
        self.current = Tick(self.current.0.wrapping_add(1));
        self.current
    }
}

/// Runs the compose/publish cycle once per interval
pub struct Scheduler<P> {
    composer: Composer,
    publisher: P,
    alert: AlertTrigger,
    interval: Duration,
    state: TickState,
}

impl<P: Publisher> Scheduler<P> {
    pub fn new(composer: Composer, publisher: P, alert: AlertTrigger, interval: Duration) -> Self {
        Self {
            composer,
            publisher,
            alert,
            interval,
            state: TickState::default(),
        }
    }

    pub fn tick(&self) -> Tick {
        self.state.current()
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Start the refresh loop
    ///
    /// Each iteration dispatches the battery alert when due, waits one
    /// interval, advances the tick and publishes a fresh line. No alert is
    /// started once a shutdown is pending. Returns `Ok` when `cancel` fires
    /// between ticks; a publishing error ends the loop and is returned to
    /// the caller, which reports it.
    pub async fn run(&mut self, cancel: CancellationToken) -> Result<(), PublishError> {
        let mut interval = tokio::time::interval_at(Instant::now() + self.interval, self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            "Refreshing {} sensors every {:?}",
            self.composer.sensor_count(),
            self.interval
        );

        loop {
            // Detached; nothing here waits for the script
            if !cancel.is_cancelled() {
                let _ = self.alert.maybe_fire(self.state.current());
            }

            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("Stopping after tick {}", self.state.current());
                    return Ok(());
                }
                _ = interval.tick() => {}
            }

            let tick = self.state.advance();
            self.refresh(tick).await?;
        }
    }

    /// Compose and publish a single line without touching the tick counter
    pub async fn run_once(&mut self) -> Result<String, PublishError> {
        let tick = self.state.current();
        self.refresh(tick).await
    }

    async fn refresh(&mut self, tick: Tick) -> Result<String, PublishError> {
        let start = Instant::now();
        let text = self.composer.compose().await;

        self.publisher.publish(&text)?;

        trace!("Tick {} took {:?}: {}", tick, start.elapsed(), text);
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::composer::tests::FixedSensor;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    /// Records published lines and cancels the run after `limit` of them
    struct RecordingPublisher {
        lines: Arc<Mutex<Vec<String>>>,
        limit: usize,
        cancel: CancellationToken,
    }

    impl Publisher for RecordingPublisher {
        fn publish(&mut self, text: &str) -> Result<(), PublishError> {
            let mut lines = self.lines.lock().unwrap();
            lines.push(text.to_string());
            if lines.len() >= self.limit {
                self.cancel.cancel();
            }
            Ok(())
        }
    }

    struct FailingPublisher {
        attempts: usize,
    }

    impl Publisher for FailingPublisher {
        fn publish(&mut self, _text: &str) -> Result<(), PublishError> {
            self.attempts += 1;
            Err(PublishError::Io(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "display gone",
            )))
        }
    }

    fn composer() -> Composer {
        Composer::new(
            vec![
                FixedSensor::shared("cpu", "CPU", Some("0.52")),
                FixedSensor::shared("battery", "B ", None),
            ],
            Duration::from_millis(300),
        )
    }

    /// Alert script appending one line to `marker` per run
    fn marker_script(dir: &Path, marker: &Path) -> PathBuf {
        let script = dir.join("battery-alert");
        std::fs::write(
            &script,
            format!("#!/bin/sh\necho fired >> '{}'\n", marker.display()),
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    fn runs(marker: &Path) -> usize {
        std::fs::read_to_string(marker)
            .map(|text| text.lines().count())
            .unwrap_or(0)
    }

    #[test]
    fn test_tick_state_advances_by_one() {
        let mut state = TickState::default();
        assert_eq!(state.current(), Tick::new(0));
        assert_eq!(state.advance(), Tick::new(1));
        assert_eq!(state.advance(), Tick::new(2));
        assert_eq!(state.current().value(), 2);
    }

    #[tokio::test]
    async fn test_run_publishes_every_tick_until_cancelled() {
        let cancel = CancellationToken::new();
        let lines = Arc::new(Mutex::new(Vec::new()));
        let publisher = RecordingPublisher {
            lines: Arc::clone(&lines),
            limit: 3,
            cancel: cancel.clone(),
        };

        let mut scheduler = Scheduler::new(
            composer(),
            publisher,
            AlertTrigger::disabled(),
            Duration::from_millis(10),
        );
        scheduler.run(cancel).await.unwrap();

        assert_eq!(scheduler.tick(), Tick::new(3));
        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line == "CPU0.52 | "));
    }

    #[tokio::test]
    async fn test_cancel_before_first_tick() {
        let cancel = CancellationToken::new();
        cancel.cancel();

        let mut scheduler = Scheduler::new(
            composer(),
            FailingPublisher { attempts: 0 },
            AlertTrigger::disabled(),
            Duration::from_secs(60),
        );
        scheduler.run(cancel).await.unwrap();

        assert_eq!(scheduler.tick(), Tick::new(0));
        assert_eq!(scheduler.publisher().attempts, 0);
    }

    #[tokio::test]
    async fn test_publish_failure_ends_the_loop() {
        let mut scheduler = Scheduler::new(
            composer(),
            FailingPublisher { attempts: 0 },
            AlertTrigger::disabled(),
            Duration::from_millis(10),
        );

        let result = scheduler.run(CancellationToken::new()).await;

        assert!(matches!(result, Err(PublishError::Io(_))));
        assert_eq!(scheduler.publisher().attempts, 1);
        assert_eq!(scheduler.tick(), Tick::new(1));
    }

    #[tokio::test]
    async fn test_run_once() {
        let cancel = CancellationToken::new();
        let lines = Arc::new(Mutex::new(Vec::new()));
        let publisher = RecordingPublisher {
            lines: Arc::clone(&lines),
            limit: usize::MAX,
            cancel,
        };

        let mut scheduler = Scheduler::new(
            composer(),
            publisher,
            AlertTrigger::disabled(),
            Duration::from_secs(1),
        );
        let text = scheduler.run_once().await.unwrap();

        assert_eq!(text, "CPU0.52 | ");
        assert_eq!(*lines.lock().unwrap(), vec!["CPU0.52 | ".to_string()]);
        assert_eq!(scheduler.tick(), Tick::new(0));
    }

    #[tokio::test]
    async fn test_alert_fires_on_first_and_sixtieth_tick() {
        let dir = tempfile::TempDir::new().unwrap();
        let marker = dir.path().join("fired");
        let script = marker_script(dir.path(), &marker);

        let cancel = CancellationToken::new();
        let lines = Arc::new(Mutex::new(Vec::new()));
        // Line 60 is published before the tick-60 alert is due, so run one past it
        let publisher = RecordingPublisher {
            lines: Arc::clone(&lines),
            limit: 61,
            cancel: cancel.clone(),
        };

        let mut scheduler = Scheduler::new(
            composer(),
            publisher,
            AlertTrigger::new(Some(script), 60),
            Duration::from_millis(5),
        );
        scheduler.run(cancel).await.unwrap();
        assert_eq!(scheduler.tick(), Tick::new(61));
        assert_eq!(lines.lock().unwrap().len(), 61);

        // The scripts run detached; give them time to finish
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while runs(&marker) < 2 && std::time::Instant::now() < deadline {
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(runs(&marker), 2);
    }

    #[tokio::test]
    async fn test_no_alert_once_shutdown_is_pending() {
        let dir = tempfile::TempDir::new().unwrap();
        let marker = dir.path().join("fired");
        let script = marker_script(dir.path(), &marker);

        let cancel = CancellationToken::new();
        cancel.cancel();

        let mut scheduler = Scheduler::new(
            composer(),
            FailingPublisher { attempts: 0 },
            AlertTrigger::new(Some(script), 60),
            Duration::from_millis(5),
        );
        scheduler.run(cancel).await.unwrap();

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(runs(&marker), 0);
        assert_eq!(scheduler.publisher().attempts, 0);
    }
}
