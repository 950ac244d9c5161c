//! Registry of tracked controllers
//!
//! Scans a fixed range of device slots every frame and creates one
//! [`ControllerTracker`] per newly seen device. Entries are never removed: a
//! controller that disconnects keeps its column, so nothing shifts on screen
//! while it reconnects.

use super::domain::{DeviceId, InputDomain};
use super::source::InputSource;
use super::tracker::{ControllerTracker, DisplayStyle};
use std::collections::HashSet;
use tracing::info;

/// Default number of device slots scanned each frame
pub const DEFAULT_MAX_DEVICES: usize = 4;

/// Arena of trackers keyed by device handle, in registration order
#[derive(Debug)]
pub struct DeviceRegistry {
    trackers: Vec<ControllerTracker>,
    domain: InputDomain,
    style: DisplayStyle,
    max_devices: usize,
    /// Registered devices currently reported unavailable
    offline: HashSet<DeviceId>,
}

impl DeviceRegistry {
    /// Empty registry scanning slots `0..max_devices`
    pub fn new(domain: InputDomain, max_devices: usize) -> Self {
        Self {
            trackers: Vec::new(),
            domain,
            style: DisplayStyle::default(),
            max_devices,
            offline: HashSet::new(),
        }
    }

    /// Register every available device that is not tracked yet
    ///
    /// Returns the number of trackers added. Also logs when a registered
    /// device goes away or comes back.
    pub fn discover<S: InputSource + ?Sized>(&mut self, source: &S) -> usize {
        let mut added = 0;

        for slot in 0..self.max_devices {
            let device = DeviceId(slot);
            let available = source.is_device_available(device);

            if self.get(device).is_some() {
                self.note_availability(device, available, source);
                continue;
            }
            if !available {
                continue;
            }

            let mut tracker = ControllerTracker::new(device, self.domain);
            tracker.set_style(self.style);
            self.trackers.push(tracker);
            added += 1;

            info!("Tracking controller {}: \"{}\"", device, source.device_name(device));
        }

        added
    }

    fn note_availability<S: InputSource + ?Sized>(&mut self, device: DeviceId, available: bool, source: &S) {
        if available {
            if self.offline.remove(&device) {
                info!("Controller {} reconnected: \"{}\"", device, source.device_name(device));
            }
        } else if self.offline.insert(device) {
            info!("Controller {} disconnected (keeping its observations)", device);
        }
    }

    /// Sample every tracked device
    pub fn update_all<S: InputSource + ?Sized>(&mut self, source: &S) {
        for tracker in &mut self.trackers {
            tracker.update(source);
        }
    }

    /// Apply `style` to every tracker, current and future
    pub fn set_style(&mut self, style: DisplayStyle) {
        self.style = style;
        for tracker in &mut self.trackers {
            tracker.set_style(style);
        }
    }

    /// Change how many slots are scanned; existing trackers are kept
    pub fn set_max_devices(&mut self, max_devices: usize) {
        self.max_devices = max_devices;
    }

    pub fn max_devices(&self) -> usize {
        self.max_devices
    }

    /// Number of columns the screen is divided into
    ///
    /// Never fewer than the trackers already registered, so lowering
    /// `max_devices` keeps every existing column on screen.
    pub fn column_count(&self) -> usize {
        self.max_devices.max(self.trackers.len()).max(1)
    }

    pub fn style(&self) -> DisplayStyle {
        self.style
    }

    pub fn get(&self, device: DeviceId) -> Option<&ControllerTracker> {
        self.trackers.iter().find(|t| t.device() == device)
    }

    pub fn is_online(&self, device: DeviceId) -> bool {
        self.get(device).is_some() && !self.offline.contains(&device)
    }

    /// Trackers in registration order
    pub fn iter(&self) -> impl Iterator<Item = &ControllerTracker> {
        self.trackers.iter()
    }

    pub fn len(&self) -> usize {
        self.trackers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trackers.is_empty()
    }
}
