//! Periodic battery alert

use super::scheduler::Tick;
use crate::config::AlertConfig;
use log::{debug, trace};
use std::path::PathBuf;
use std::process::Stdio;
use tokio::task::JoinHandle;

/// Whether the alert runs on `tick`: on the first tick and on every
/// `every`-th tick after it. `every == 0` leaves only the first tick.
pub fn should_fire(tick: Tick, every: u64) -> bool {
    let tick = tick.value();
    tick == 0 || (every != 0 && tick % every == 0)
}

/// Fires the external battery-alert script on its cadence.
///
/// The script is best effort: it runs detached, its output is discarded
/// and a failure to start it is only logged.
#[derive(Debug, Clone)]
pub struct AlertTrigger {
    script: Option<PathBuf>,
    every: u64,
}

impl AlertTrigger {
    pub fn new(script: Option<PathBuf>, every: u64) -> Self {
        Self { script, every }
    }

    pub fn from_config(config: &AlertConfig) -> Self {
        Self::new(config.script.clone(), config.every_ticks)
    }

    /// A trigger that never fires
    pub fn disabled() -> Self {
        Self::new(None, 0)
    }

    pub fn fires(&self, tick: Tick) -> bool {
        self.script.is_some() && should_fire(tick, self.every)
    }

    /// Dispatch the script if `tick` is due.
    ///
    /// The returned handle may be dropped; the task keeps running and reaps
    /// the child on its own.
    pub fn maybe_fire(&self, tick: Tick) -> Option<JoinHandle<()>> {
        if !self.fires(tick) {
            return None;
        }
        let script = self.script.clone()?;
        debug!("Running battery alert {:?} on tick {}", script, tick);
        Some(tokio::spawn(run_detached(script)))
    }
}

async fn run_detached(script: PathBuf) {
    let child = tokio::process::Command::new(&script)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match child {
        Ok(mut child) => match child.wait().await {
            Ok(status) => trace!("Battery alert {:?} finished with {}", script, status),
            Err(e) => debug!("Waiting for battery alert {:?} failed: {}", script, e),
        },
        Err(e) => debug!("Battery alert {:?} could not be started: {}", script, e),
    }
}
