//! Configuration management

mod settings;

pub use settings::{AlertConfig, AppConfig, ThemeConfig, CONFIG_VERSION};
