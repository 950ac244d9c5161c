//! Test doubles for the input and drawing collaborators

use crate::input::gamepad::domain::DeviceId;
use crate::input::gamepad::provider::ButtonSnapshot;
use crate::input::gamepad::source::InputSource;
use crate::input::gamepad::visualizer::canvas::Canvas;
use egui::{Color32, Pos2, Rect};
use gilrs::{Axis, Button};
use std::collections::{HashMap, HashSet};

/// Scripted [`InputSource`]
///
/// Mutate the "next" state with `hold`/`release`/`set_axis`, then call
/// `advance_frame` to publish it. Pressed/released edges compare the published
/// frame with the one before it.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    names: HashMap<DeviceId, String>,
    pending: HashSet<(DeviceId, Button)>,
    buttons: ButtonSnapshot,
    axes: HashMap<(DeviceId, Axis), f32>,
    axis_counts: HashMap<DeviceId, usize>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect(&mut self, device: DeviceId, name: &str) {
        self.names.insert(device, name.to_string());
    }

    pub fn disconnect(&mut self, device: DeviceId) {
        self.names.remove(&device);
    }

    pub fn hold(&mut self, device: DeviceId, button: Button) {
        self.pending.insert((device, button));
    }

    pub fn release(&mut self, device: DeviceId, button: Button) {
        self.pending.remove(&(device, button));
    }

    pub fn set_axis(&mut self, device: DeviceId, axis: Axis, value: f32) {
        self.axes.insert((device, axis), value);
    }

    pub fn set_axis_count(&mut self, device: DeviceId, count: usize) {
        self.axis_counts.insert(device, count);
    }

    pub fn advance_frame(&mut self) {
        self.buttons.advance(self.pending.clone());
    }
}

impl InputSource for ScriptedSource {
    fn is_device_available(&self, device: DeviceId) -> bool {
        self.names.contains_key(&device)
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
        self.axes.get(&(device, axis)).copied().unwrap_or(0.0)
    }

    fn device_name(&self, device: DeviceId) -> String {
        self.names.get(&device).cloned().unwrap_or_default()
    }

    fn axis_count(&self, device: DeviceId) -> usize {
        self.axis_counts.get(&device).copied().unwrap_or(0)
    }
}

/// One primitive emitted through [`Canvas`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color32 },
    StrokeRect { rect: Rect, thickness: f32, color: Color32 },
    FillCircle { center: Pos2, radius: f32, color: Color32 },
    StrokeCircle { center: Pos2, radius: f32, color: Color32 },
    Line { from: Pos2, to: Pos2, color: Color32 },
    Text { text: String, position: Pos2, font_size: f32, color: Color32 },
}

/// [`Canvas`] that records everything drawn on it
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<(String, Pos2)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, position, .. } => Some((text.clone(), *position)),
                _ => None,
            })
            .collect()
    }

    pub fn fill_rects(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color32) {
        self.commands.push(DrawCommand::StrokeRect { rect, thickness, color });
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.commands.push(DrawCommand::StrokeCircle { center, radius, color });
    }

    fn line(&mut self, from: Pos2, to: Pos2, color: Color32) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn text(&mut self, text: &str, position: Pos2, font_size: f32, color: Color32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            font_size,
            color,
        });
    }
}
