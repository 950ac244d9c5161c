//! eframe application driving the overlay frame loop.
//!
//! Every frame [`OverlayApp`] applies any reloaded configuration, polls gilrs,
//! registers newly connected controllers, then updates and renders one column
//! per tracked controller.

use super::canvas::EguiCanvas;
use super::rendering::{column_origin, OverlayRenderer};
use crate::config::{ConfigWatcher, OverlayConfig};
use crate::input::gamepad::provider::GilrsProvider;
use crate::input::gamepad::registry::DeviceRegistry;
use tracing::info;

pub struct OverlayApp {
    provider: GilrsProvider,
    registry: DeviceRegistry,
    config: OverlayConfig,
    watcher: Option<ConfigWatcher>,
}

impl OverlayApp {
    pub fn new(provider: GilrsProvider, config: OverlayConfig, watcher: Option<ConfigWatcher>) -> Self {
        let mut registry = DeviceRegistry::new(Default::default(), config.devices.max_devices);
        registry.set_style(config.display_style());

        Self {
            provider,
            registry,
            config,
            watcher,
        }
    }

    fn apply_config_reload(&mut self) {
        let Some(config) = self.watcher.as_ref().and_then(|w| w.try_next_config()) else {
            return;
        };
        apply_config(&mut self.registry, &self.config, &config);
        self.config = config;
    }
}

/// Push a reloaded config into the registry
///
/// Style and device count apply from the next frame on; window settings only
/// at the next start.
fn apply_config(registry: &mut DeviceRegistry, current: &OverlayConfig, reloaded: &OverlayConfig) {
    if reloaded.window != current.window {
        info!("Window settings changed; they apply on next start");
    }
    registry.set_style(reloaded.display_style());
    registry.set_max_devices(reloaded.devices.max_devices);
}

impl eframe::App for OverlayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_config_reload();

        self.provider.poll();
        self.registry.discover(&self.provider);
        self.registry.update_all(&self.provider);

        let layout = &self.config.layout;
        let show_sticks = self.config.devices.show_sticks;
        let columns = self.registry.column_count();
        let screen_width = ctx.screen_rect().width();

        let frame = egui::Frame::none().fill(self.config.clear_color());
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let mut canvas = EguiCanvas::new(ui.painter());

            for (index, tracker) in self.registry.iter().enumerate() {
                let origin = column_origin(index, screen_width, columns, layout.display_gap);
                let mut renderer = OverlayRenderer::new(&mut canvas, &self.provider, tracker);
                let height = renderer.render_observed_inputs(origin, layout.font_size, layout.line_gap);

                if show_sticks {
                    let below = egui::pos2(origin.x, origin.y + height);
                    renderer.render_sticks(below, layout.font_size, layout.line_gap);
                }
            }
        });

        ctx.request_repaint();
    }
}
