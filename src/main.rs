use anyhow::{Context, Result};
use clap::Parser;
use dwmstat::config::AppConfig;
use dwmstat::core::{AlertTrigger, Composer, Publisher, Scheduler, StdoutPublisher, X11Publisher};
use dwmstat::theme::Theme;
use log::{error, info, warn};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::signal::unix::{signal, SignalKind};
use tokio_util::sync::CancellationToken;

/// dwmstat - system status for the dwm bar
#[derive(Parser, Debug, Clone)]
#[command(name = "dwmstat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Configuration file (defaults to the user config directory)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Palette file for status2d colors; enables the themed output
    #[arg(short = 't', long = "theme", value_name = "PATH")]
    theme: Option<PathBuf>,

    /// X display to publish to (defaults to $DISPLAY)
    #[arg(long = "display", value_name = "DISPLAY")]
    display: Option<String>,

    /// Print each status line to stdout instead of setting the root window name
    #[arg(long = "stdout")]
    stdout: bool,

    /// Publish a single status line and exit
    #[arg(long = "once")]
    once: bool,

    /// Write the default configuration to the config path and exit
    #[arg(long = "write-default-config")]
    write_default_config: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Level 0 (default): warn only
    // Level 1: info, 2: debug, 3+: trace
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    warn!("Starting dwmstat v{}", env!("CARGO_PKG_VERSION"));

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    if cli.write_default_config {
        let path = match &cli.config {
            Some(path) => path.clone(),
            None => AppConfig::config_path()?,
        };
        AppConfig::default().save_to_path(&path)?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load().unwrap_or_else(|e| {
            warn!("Failed to load config, using defaults: {:#}", e);
            AppConfig::default()
        }),
    };

    if let Some(path) = cli.theme.clone() {
        config.set_theme_path(path);
    }

    let theme = config
        .theme
        .as_ref()
        .map(Theme::load)
        .transpose()
        .context("Failed to load theme")?;

    let sensors = dwmstat_sources::create_sensors(&config.sensors);
    let mut composer = Composer::new(sensors, config.sensor_timeout());
    if let Some(theme) = theme {
        composer = composer.with_theme(theme);
    }
    let alert = AlertTrigger::from_config(&config.alert);

    if cli.stdout {
        let scheduler = Scheduler::new(composer, StdoutPublisher::stdout(), alert, config.interval());
        drive(scheduler, cli.once).await
    } else {
        let publisher = X11Publisher::connect(cli.display.as_deref())?;
        let scheduler = Scheduler::new(composer, publisher, alert, config.interval());
        drive(scheduler, cli.once).await
    }
}

async fn drive<P: Publisher>(mut scheduler: Scheduler<P>, once: bool) -> Result<()> {
    if once {
        scheduler.run_once().await?;
        return Ok(());
    }

    let cancel = CancellationToken::new();
    tokio::spawn(cancel_on_signal(cancel.clone()));

    scheduler
        .run(cancel)
        .await
        .context("Status loop terminated")?;
    Ok(())
}

/// Cancel the refresh loop on SIGINT or SIGTERM
async fn cancel_on_signal(cancel: CancellationToken) {
    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(terminate) => terminate,
        Err(e) => {
            warn!("Cannot listen for SIGTERM: {}", e);
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Received SIGINT, shutting down");
                cancel.cancel();
            }
            return;
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => info!("Received SIGINT, shutting down"),
        _ = terminate.recv() => info!("Received SIGTERM, shutting down"),
    }
    cancel.cancel();
}
