//! Gamepad overlay window
//!
//! Draws, for every tracked controller, the buttons and axes it has used so
//! far, in a column of its own.

mod app;
pub mod canvas;
pub mod drawing;
pub mod rendering;

use crate::config::{ConfigWatcher, OverlayConfig};
use crate::input::gamepad::domain::InputDomain;
use crate::input::gamepad::provider::GilrsProvider;
use anyhow::{anyhow, Result};

pub use app::OverlayApp;

/// Entry point for the overlay
///
/// Blocks until the window is closed.
pub fn run_visualizer(config: OverlayConfig, watcher: Option<ConfigWatcher>) -> Result<()> {
    let provider = GilrsProvider::new(InputDomain::default())?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window.title.clone())
            .with_inner_size([config.window.width, config.window.height]),
        ..Default::default()
    };

    let title = config.window.title.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |_cc| Ok(Box::new(OverlayApp::new(provider, config, watcher)))),
    )
    .map_err(|e| anyhow!("Overlay window failed: {}", e))
}
