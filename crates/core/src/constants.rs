//! Shared constants for the application

use std::time::Duration;

/// Time between two status refreshes
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Upper bound for a single sensor reading before its segment is left empty.
/// Keeps a hung command from stalling the whole refresh.
pub const SENSOR_TIMEOUT: Duration = Duration::from_millis(300);

/// The battery alert runs on tick 0 and then once every this many ticks
pub const ALERT_PERIOD_TICKS: u64 = 60;
