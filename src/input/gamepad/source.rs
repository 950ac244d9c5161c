//! Live input queries consumed by the tracker and the renderer
//!
//! [`InputSource`] is the seam between the overlay and whatever backend polls
//! the hardware. The production implementation is
//! [`GilrsProvider`](super::provider::GilrsProvider); tests script one.

use super::domain::DeviceId;
use gilrs::{Axis, Button};

/// Per-frame view of controller state
///
/// Queries for an unknown or disconnected device must not fail: they answer
/// "not held" and `0.0`. Axis values are roughly in `[-1.0, 1.0]` and follow
/// screen orientation, so positive Y points toward the bottom of the screen.
pub trait InputSource {
    /// Whether a controller currently occupies this slot
    fn is_device_available(&self, device: DeviceId) -> bool;

    /// Button is held this frame
    fn is_button_down(&self, device: DeviceId, button: Button) -> bool;

    /// Button is not held this frame
    fn is_button_up(&self, device: DeviceId, button: Button) -> bool {
        !self.is_button_down(device, button)
    }

    /// Button went down since the previous frame
    fn is_button_pressed(&self, device: DeviceId, button: Button) -> bool;

    /// Button went up since the previous frame
    fn is_button_released(&self, device: DeviceId, button: Button) -> bool;

    /// Current axis deflection
    fn axis_movement(&self, device: DeviceId, axis: Axis) -> f32;

    /// Human readable device name, empty if unknown
    fn device_name(&self, device: DeviceId) -> String;

    /// Number of axes the device reports
    fn axis_count(&self, device: DeviceId) -> usize;
}

/// Which live button state an indicator samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonPredicate {
    /// Held this frame
    #[default]
    Down,
    /// Not held this frame
    Up,
    /// Went down this frame
    Pressed,
    /// Went up this frame
    Released,
}

impl ButtonPredicate {
    /// Evaluate the predicate against a source
    pub fn sample<S: InputSource + ?Sized>(self, source: &S, device: DeviceId, button: Button) -> bool {
        match self {
            Self::Down => source.is_button_down(device, button),
            Self::Up => source.is_button_up(device, button),
            Self::Pressed => source.is_button_pressed(device, button),
            Self::Released => source.is_button_released(device, button),
        }
    }
}
