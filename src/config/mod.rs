//! Configuration management for the gamepad overlay
//!
//! Handles loading, parsing, and hot-reloading of the YAML configuration file.
//! Every field has a default, so an empty (or missing) file is a valid config.

pub mod watcher;

use anyhow::{Context, Result};
use egui::Color32;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::input::gamepad::registry::DEFAULT_MAX_DEVICES;
use crate::input::gamepad::tracker::DisplayStyle;

pub use watcher::ConfigWatcher;

/// Errors found while decoding or validating the configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid color '{0}' (expected #RRGGBB)")]
    InvalidColor(String),

    #[error("layout.font_size must be positive, got {0}")]
    FontSize(f32),

    #[error("layout.{field} cannot be negative, got {value}")]
    NegativeGap { field: &'static str, value: f32 },

    #[error("window size must be non-zero, got {width}x{height}")]
    WindowSize { width: f32, height: f32 },

    #[error("devices.max_devices must be at least 1")]
    NoDevices,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub window: WindowConfig,
    pub layout: LayoutConfig,
    pub style: StyleConfig,
    pub devices: DevicesConfig,
}

/// Native window settings, read once at startup
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Gamepad Overlay".to_string(),
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Text size and spacing of each device column
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub font_size: f32,
    pub line_gap: f32,
    pub display_gap: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            font_size: 24.0,
            line_gap: 5.0,
            display_gap: 10.0,
        }
    }
}

/// Overlay colors
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StyleConfig {
    pub foreground: HexColor,
    pub background: HexColor,
    /// Window clear color
    pub clear: HexColor,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            foreground: HexColor(Color32::from_rgb(0xE6, 0x29, 0x37)),
            background: HexColor(Color32::BLACK),
            clear: HexColor(Color32::from_rgb(0xF5, 0xF5, 0xF5)),
        }
    }
}

/// Device scanning options
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DevicesConfig {
    pub max_devices: usize,
    /// Draw stick plots below the observed inputs
    pub show_sticks: bool,
}

impl Default for DevicesConfig {
    fn default() -> Self {
        Self {
            max_devices: DEFAULT_MAX_DEVICES,
            show_sticks: false,
        }
    }
}

/// Opaque RGB color written as `#RRGGBB` in YAML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(pub Color32);

impl HexColor {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor(text.to_string());
        let digits = text.trim().strip_prefix('#').ok_or_else(invalid)?;
        let bytes = hex::decode(digits).map_err(|_| invalid())?;

        match bytes.as_slice() {
            [r, g, b] => Ok(Self(Color32::from_rgb(*r, *g, *b))),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, _] = self.0.to_array();
        write!(f, "#{}", hex::encode_upper([r, g, b]))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl OverlayConfig {
    /// Load configuration from file with validation
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_yaml(&contents)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate YAML text
    pub fn from_yaml(contents: &str) -> Result<Self> {
        // serde_yaml rejects an empty document for a struct
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: OverlayConfig =
            serde_yaml::from_str(contents).context("Failed to parse YAML config")?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self).context("Failed to serialize config to YAML")?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate numeric settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        let layout = &self.layout;
        if !(layout.font_size > 0.0) {
            return Err(ConfigError::FontSize(layout.font_size));
        }
        for (field, value) in [("line_gap", layout.line_gap), ("display_gap", layout.display_gap)] {
            if value < 0.0 {
                return Err(ConfigError::NegativeGap { field, value });
            }
        }

        let window = &self.window;
        if !(window.width > 0.0 && window.height > 0.0) {
            return Err(ConfigError::WindowSize {
                width: window.width,
                height: window.height,
            });
        }

        if self.devices.max_devices == 0 {
            return Err(ConfigError::NoDevices);
        }

        Ok(())
    }

    /// Colors applied to every tracker
    pub fn display_style(&self) -> DisplayStyle {
        DisplayStyle {
            foreground: self.style.foreground.0,
            background: self.style.background.0,
        }
    }

    pub fn clear_color(&self) -> Color32 {
        self.style.clear.0
    }
}
