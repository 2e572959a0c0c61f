//! dwmstat: a status aggregator for dwm-style window managers
//!
//! This library provides the runtime behind the `dwmstat` binary:
//! - Configuration loading and the stock sensor order
//! - Status2d color themes loaded from shell-style palette files
//! - The composer that samples all sensors once per tick
//! - Publishers that set the X root window name (or print to stdout)
//! - The tick scheduler and its periodic battery alert

pub mod config;
pub mod core;
pub mod theme;

// Re-export commonly used types
pub use config::{AlertConfig, AppConfig, ThemeConfig};
pub use core::{AlertTrigger, Composer, PublishError, Publisher, Scheduler, Tick};
pub use theme::{Theme, ThemeError};
