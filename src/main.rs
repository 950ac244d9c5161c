//! Gamepad Overlay
//!
//! Desktop overlay showing the buttons and axes each controller has used.

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gamepad_overlay::config::{ConfigWatcher, OverlayConfig};
use gamepad_overlay::input::gamepad::{list_devices, print_gamepad_diagnostics, run_visualizer};
use gamepad_overlay::paths::resolve_config_path;

/// Gamepad Overlay - show which controller inputs have been used
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// List connected controllers and exit
    #[arg(long)]
    list_devices: bool,

    /// Log detailed controller diagnostics and exit
    #[arg(long)]
    diagnostics: bool,
}

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    init_logging(&args.log_level)?;

    if args.list_devices {
        return list_devices();
    }

    if args.diagnostics {
        return print_gamepad_diagnostics();
    }

    let config_path = resolve_config_path(args.config.as_deref());
    info!("Starting Gamepad Overlay...");
    info!("Configuration file: {}", config_path.display());

    let config = OverlayConfig::load_or_default(&config_path)?;

    let watcher = if config_path.exists() {
        match ConfigWatcher::new(config_path.clone()) {
            Ok(watcher) => Some(watcher),
            Err(e) => {
                warn!("Hot-reload disabled: {:#}", e);
                None
            },
        }
    } else {
        info!("No config file found, using defaults");
        None
    };

    run_visualizer(config, watcher)?;

    info!("Gamepad Overlay closed");
    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .init();

    Ok(())
}
