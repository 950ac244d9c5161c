//! Configuration file watcher for hot-reload support
//!
//! The overlay runs a synchronous frame loop, so reloads are handed over
//! through a crossbeam channel and picked up with [`ConfigWatcher::try_next_config`].

use anyhow::{Context, Result};
use crossbeam::channel::{self, Receiver, Sender};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use super::OverlayConfig;

/// Time to let an editor finish writing before the file is re-read
const DEBOUNCE: Duration = Duration::from_millis(100);

/// Config watcher that monitors file changes and delivers reloaded configs
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<OverlayConfig>,
}

impl ConfigWatcher {
    /// Watch `config_path`, which must exist
    pub fn new(config_path: PathBuf) -> Result<Self> {
        let (event_tx, event_rx) = channel::unbounded::<()>();
        let (config_tx, config_rx) = channel::bounded(10);

        let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
            match res {
                Ok(event) => {
                    if matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                        debug!("Config file modified: {:?}", event.paths);
                        let _ = event_tx.send(());
                    }
                },
                Err(e) => {
                    error!("Watch error: {}", e);
                },
            }
        })?;

        watcher
            .watch(&config_path, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch config file: {}", config_path.display()))?;

        let reload_path = config_path.clone();
        thread::Builder::new()
            .name("config-reload".to_string())
            .spawn(move || reload_loop(&reload_path, event_rx, config_tx))
            .context("Failed to spawn config reload thread")?;

        info!("Config file watcher started for: {}", config_path.display());

        Ok(Self {
            _watcher: watcher,
            rx: config_rx,
        })
    }

    /// Most recent reloaded config, if any arrived since the last call
    pub fn try_next_config(&self) -> Option<OverlayConfig> {
        self.rx.try_iter().last()
    }
}

/// Runs until the watcher (and with it the event sender) is dropped
fn reload_loop(path: &Path, events: Receiver<()>, configs: Sender<OverlayConfig>) {
    while events.recv().is_ok() {
        // Debounce: a single save often produces several events
        thread::sleep(DEBOUNCE);
        while events.try_recv().is_ok() {}

        match OverlayConfig::load(path) {
            Ok(config) => {
                info!("Configuration reloaded successfully");
                if configs.send(config).is_err() {
                    break;
                }
            },
            Err(e) => {
                warn!("Failed to reload config (keeping old config): {:#}", e);
            },
        }
    }
    debug!("Config reload thread stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Instant;
    use tempfile::TempDir;

    /// First delivered config matching `wanted`, skipping any others
    fn wait_for_config(
        watcher: &ConfigWatcher,
        timeout: Duration,
        wanted: impl Fn(&OverlayConfig) -> bool,
    ) -> Option<OverlayConfig> {
        let start = Instant::now();
        while start.elapsed() < timeout {
            if let Some(config) = watcher.try_next_config().filter(|c| wanted(c)) {
                return Some(config);
            }
            thread::sleep(Duration::from_millis(20));
        }
        None
    }

    #[test]
    fn test_config_watcher_basic() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("test-config.yaml");
        fs::write(&config_path, "layout:\n  font_size: 20\n")?;

        let watcher = ConfigWatcher::new(config_path.clone())?;
        assert!(watcher.try_next_config().is_none());

        thread::sleep(Duration::from_millis(100));
        fs::write(&config_path, "layout:\n  font_size: 32\n")?;

        // Some platforms coalesce or drop events; only check what arrives
        let reloaded = wait_for_config(&watcher, Duration::from_secs(2), |c| c.layout.font_size == 32.0);
        if let Some(config) = reloaded {
            assert_eq!(config.layout.line_gap, 5.0);
        }
        Ok(())
    }

    #[test]
    fn test_invalid_reload_is_not_delivered() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "")?;

        let watcher = ConfigWatcher::new(config_path.clone())?;
        thread::sleep(Duration::from_millis(100));
        fs::write(&config_path, "layout:\n  font_size: -3\n")?;

        // Let the invalid edit go through the reload thread first
        thread::sleep(DEBOUNCE * 4);
        fs::write(&config_path, "layout:\n  font_size: 18\n")?;

        let mut delivered = Vec::new();
        let start = Instant::now();
        while start.elapsed() < Duration::from_secs(3) {
            delivered.extend(watcher.rx.try_iter());
            if delivered.iter().any(|c| c.layout.font_size == 18.0) {
                break;
            }
            thread::sleep(Duration::from_millis(20));
        }

        assert!(delivered.iter().any(|c| c.layout.font_size == 18.0));
        assert!(delivered.iter().all(|c| c.layout.font_size > 0.0));
        Ok(())
    }

    #[test]
    fn test_missing_file_cannot_be_watched() {
        let temp_dir = TempDir::new().unwrap();
        assert!(ConfigWatcher::new(temp_dir.path().join("nope.yaml")).is_err());
    }
}
