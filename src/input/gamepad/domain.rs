//! Device handles and the fixed button/axis domains
//!
//! The overlay never reflects over enums at runtime. Instead the complete,
//! ordered list of button kinds and axis kinds is spelled out here, and the
//! position of a kind in its list is its canonical rank.

use gilrs::{Axis, Button};
use std::fmt;

/// Opaque handle for a physical controller slot
///
/// Stable for as long as the controller stays connected. Handles are issued
/// by the input backend, never by the overlay itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeviceId(pub usize);

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Every button kind, in canonical order.
pub const BUTTONS: &[Button] = &[
    Button::South,
    Button::East,
    Button::North,
    Button::West,
    Button::C,
    Button::Z,
    Button::LeftTrigger,
    Button::LeftTrigger2,
    Button::RightTrigger,
    Button::RightTrigger2,
    Button::Select,
    Button::Start,
    Button::Mode,
    Button::LeftThumb,
    Button::RightThumb,
    Button::DPadUp,
    Button::DPadDown,
    Button::DPadLeft,
    Button::DPadRight,
];

/// Every axis kind, in canonical order.
pub const AXES: &[Axis] = &[
    Axis::LeftStickX,
    Axis::LeftStickY,
    Axis::LeftZ,
    Axis::RightStickX,
    Axis::RightStickY,
    Axis::RightZ,
    Axis::DPadX,
    Axis::DPadY,
];

/// The two stick pairs drawn as 2D indicators: (label, x axis, y axis)
pub const STICKS: &[(&str, Axis, Axis)] = &[
    ("LeftStick", Axis::LeftStickX, Axis::LeftStickY),
    ("RightStick", Axis::RightStickX, Axis::RightStickY),
];

/// Ordered button and axis domains scanned by a tracker
///
/// Cheap to copy; both lists are static.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputDomain {
    pub buttons: &'static [Button],
    pub axes: &'static [Axis],
}

impl InputDomain {
    /// Domain restricted to the given lists (mostly useful in tests)
    pub const fn new(buttons: &'static [Button], axes: &'static [Axis]) -> Self {
        Self { buttons, axes }
    }
}

/// Canonical rank of `kind` within `domain`, `None` if outside it
pub fn canonical_rank<K: PartialEq>(domain: &[K], kind: K) -> Option<usize> {
    domain.iter().position(|k| *k == kind)
}

impl Default for InputDomain {
    fn default() -> Self {
        Self::new(BUTTONS, AXES)
    }
}

/// Canonical display name of a button
pub fn button_name(button: Button) -> String {
    format!("{:?}", button)
}

/// Canonical display name of an axis
pub fn axis_name(axis: Axis) -> String {
    format!("{:?}", axis)
}
