//! GilRs-backed input source
//!
//! [`GilrsProvider`] is polled once per frame from the overlay's frame loop.
//! It drains the gilrs event queue (which is what updates gilrs' cached
//! gamepad state) and keeps a [`ButtonSnapshot`] so that pressed/released
//! edges can be answered for the current frame.

use super::domain::{DeviceId, InputDomain};
use super::source::InputSource;
use anyhow::{anyhow, Result};
use gilrs::{Axis, Button, Event, EventType, Gamepad, GamepadId, Gilrs};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// Held buttons of the current and the previous frame
#[derive(Debug, Clone, Default)]
pub struct ButtonSnapshot {
    held: HashSet<(DeviceId, Button)>,
    previously_held: HashSet<(DeviceId, Button)>,
}

impl ButtonSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame in which exactly `held` is down
    pub fn advance(&mut self, held: HashSet<(DeviceId, Button)>) {
        self.previously_held = std::mem::replace(&mut self.held, held);
    }

    pub fn down(&self, device: DeviceId, button: Button) -> bool {
        self.held.contains(&(device, button))
    }

    /// Down this frame, up the frame before
    pub fn pressed(&self, device: DeviceId, button: Button) -> bool {
        self.down(device, button) && !self.previously_held.contains(&(device, button))
    }

    /// Up this frame, down the frame before
    pub fn released(&self, device: DeviceId, button: Button) -> bool {
        !self.down(device, button) && self.previously_held.contains(&(device, button))
    }
}

/// Frame-polled gilrs input source
pub struct GilrsProvider {
    gilrs: Gilrs,
    domain: InputDomain,
    /// Device handle → gilrs id, refreshed on every poll
    ids: HashMap<DeviceId, GamepadId>,
    buttons: ButtonSnapshot,
}

impl GilrsProvider {
    /// Initialise gilrs
    pub fn new(domain: InputDomain) -> Result<Self> {
        let gilrs = Gilrs::new().map_err(|e| anyhow!("Failed to initialize gilrs: {}", e))?;
        info!("gilrs initialized");

        let mut provider = Self {
            gilrs,
            domain,
            ids: HashMap::new(),
            buttons: ButtonSnapshot::new(),
        };
        provider.refresh();
        Ok(provider)
    }

    /// Advance one frame: process pending events and snapshot button state
    pub fn poll(&mut self) {
        while let Some(Event { id, event, .. }) = self.gilrs.next_event() {
            match event {
                EventType::Connected => {
                    debug!("gilrs controller connected: {:?}", id);
                },
                EventType::Disconnected => {
                    debug!("gilrs controller disconnected: {:?}", id);
                },
                _ => {},
            }
        }

        self.refresh();
    }

    /// Re-map connected devices and publish their held buttons as a new frame
    fn refresh(&mut self) {
        self.ids.clear();
        let mut held = HashSet::new();
        for (id, gamepad) in self.gilrs.gamepads() {
            if !gamepad.is_connected() {
                continue;
            }
            let device = DeviceId(usize::from(id));
            self.ids.insert(device, id);

            for &button in self.domain.buttons {
                if gamepad.is_pressed(button) {
                    held.insert((device, button));
                }
            }
        }
        self.buttons.advance(held);
    }

    fn gamepad(&self, device: DeviceId) -> Option<Gamepad<'_>> {
        self.ids
            .get(&device)
            .and_then(|id| self.gilrs.connected_gamepad(*id))
    }

    /// Devices currently connected, ordered by handle
    pub fn connected_devices(&self) -> Vec<DeviceId> {
        let mut devices: Vec<_> = self.ids.keys().copied().collect();
        devices.sort();
        devices
    }
}

/// gilrs reports up as positive Y; the overlay draws with Y pointing down
fn to_screen_orientation(axis: Axis, value: f32) -> f32 {
    match axis {
        Axis::LeftStickY | Axis::RightStickY | Axis::DPadY => -value,
        _ => value,
    }
}

impl InputSource for GilrsProvider {
    fn is_device_available(&self, device: DeviceId) -> bool {
        self.gamepad(device).is_some()
    }

    fn is_button_down(&self, device: DeviceId, button: Button) -> bool {
        self.buttons.down(device, button)
    }

    fn is_button_pressed(&self, device: DeviceId, button: Button) -> bool {
        self.buttons.pressed(device, button)
    }

    fn is_button_released(&self, device: DeviceId, button: Button) -> bool {
        self.buttons.released(device, button)
    }

    fn axis_movement(&self, device: DeviceId, axis: Axis) -> f32 {
        self.gamepad(device)
            .map(|gamepad| to_screen_orientation(axis, gamepad.value(axis)))
            .unwrap_or(0.0)
    }

    fn device_name(&self, device: DeviceId) -> String {
        self.gamepad(device)
            .map(|gamepad| gamepad.name().to_string())
            .unwrap_or_default()
    }

    fn axis_count(&self, device: DeviceId) -> usize {
        self.gamepad(device)
            .map(|gamepad| {
                self.domain
                    .axes
                    .iter()
                    .filter(|axis| gamepad.axis_code(**axis).is_some())
                    .count()
            })
            .unwrap_or(0)
    }
}
