//! Gamepad input support using GilRs
//!
//! Tracks which buttons and axes each connected controller has shown so far
//! and renders them as an on-screen overlay.

pub mod diagnostics;
pub mod domain;
pub mod normalize;
pub mod provider;
pub mod registry;
pub mod source;
pub mod tracker;
pub mod visualizer;

pub use diagnostics::{list_devices, print_gamepad_diagnostics};
pub use domain::{DeviceId, InputDomain};
pub use provider::GilrsProvider;
pub use registry::DeviceRegistry;
pub use source::{ButtonPredicate, InputSource};
pub use tracker::{ControllerTracker, DisplayStyle, ObservedSet};
pub use visualizer::run_visualizer;
