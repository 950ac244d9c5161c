//! Layout of one device's overlay column
//!
//! Nothing here is cached: every call lays the column out again from the
//! origin, the font size and the line gap, reading the tracker's observations
//! and the live values from the input source.

use super::canvas::Canvas;
use super::drawing;
use crate::input::gamepad::domain::{axis_name, button_name, STICKS};
use crate::input::gamepad::source::{ButtonPredicate, InputSource};
use crate::input::gamepad::tracker::ControllerTracker;
use egui::{Pos2, Vec2};
use gilrs::{Axis, Button};

/// Number of text lines above the button rows
pub const HEADER_LINES: usize = 3;

/// Axis bars are this many font sizes wide
const AXIS_BAR_WIDTH_FACTOR: f32 = 3.0;

/// Height of every text, button and axis row
pub fn row_height(font_size: f32, line_gap: f32) -> f32 {
    font_size + line_gap
}

/// Height of one stick row
pub fn stick_row_height(font_size: f32, line_gap: f32) -> f32 {
    2.0 * font_size + line_gap
}

/// Top-left corner of the column for the device at registry `index`
///
/// Columns are `screen_width / max_devices` apart, with `display_gap` in
/// front of each one and above all of them.
pub fn column_origin(index: usize, screen_width: f32, max_devices: usize, display_gap: f32) -> Pos2 {
    let stride = screen_width / max_devices.max(1) as f32;
    let x = stride * index as f32 + display_gap * (index + 1) as f32;
    egui::pos2(x, display_gap)
}

/// Draws a tracker's observations with live values
pub struct OverlayRenderer<'a, C: Canvas + ?Sized, S: InputSource + ?Sized> {
    canvas: &'a mut C,
    source: &'a S,
    tracker: &'a ControllerTracker,
}

impl<'a, C: Canvas + ?Sized, S: InputSource + ?Sized> OverlayRenderer<'a, C, S> {
    pub fn new(canvas: &'a mut C, source: &'a S, tracker: &'a ControllerTracker) -> Self {
        Self {
            canvas,
            source,
            tracker,
        }
    }

    /// Axis bar for the live value of `axis`
    pub fn draw_axis(&mut self, origin: Pos2, size: Vec2, axis: Axis) {
        let value = self.source.axis_movement(self.tracker.device(), axis);
        drawing::draw_axis(&mut *self.canvas, self.tracker.style(), origin, size, value);
    }

    /// Stick indicator combining the live values of two axes
    pub fn draw_stick(&mut self, center: Pos2, radius: f32, x_axis: Axis, y_axis: Axis) {
        let device = self.tracker.device();
        let x = self.source.axis_movement(device, x_axis);
        let y = self.source.axis_movement(device, y_axis);
        drawing::draw_stick(&mut *self.canvas, self.tracker.style(), center, radius, x, y);
    }

    /// Button indicator, filled while `predicate` holds for `button`
    pub fn draw_button(&mut self, position: Pos2, radius: f32, button: Button, predicate: ButtonPredicate) {
        let active = predicate.sample(self.source, self.tracker.device(), button);
        drawing::draw_button(&mut *self.canvas, self.tracker.style(), position, radius, active);
    }

    /// Header, one row per observed button, one row per observed axis
    ///
    /// Returns the height consumed below `origin`.
    pub fn render_observed_inputs(&mut self, origin: Pos2, font_size: f32, line_gap: f32) -> f32 {
        let tracker = self.tracker;
        let device = tracker.device();
        let style = tracker.style();
        let row = row_height(font_size, line_gap);
        let mut y = origin.y;

        let header = [
            self.source.device_name(device),
            format!("ID: {}", device),
            format!("Axis Count: {}", self.source.axis_count(device)),
        ];
        for line in &header {
            self.canvas.text(line, egui::pos2(origin.x, y), font_size, style.background);
            y += row;
        }

        // Buttons
        let radius = font_size / 2.0;
        let text_x = origin.x + radius * 2.0 + line_gap;
        for button in tracker.buttons() {
            let center = egui::pos2(origin.x + radius, y + radius);
            self.draw_button(center, radius, button, ButtonPredicate::Down);
            self.canvas
                .text(&button_name(button), egui::pos2(text_x, y), font_size, style.background);
            y += row;
        }

        // Axes
        let bar_size = egui::vec2(font_size * AXIS_BAR_WIDTH_FACTOR, font_size);
        let text_x = origin.x + bar_size.x + line_gap;
        for axis in tracker.axes() {
            self.draw_axis(egui::pos2(origin.x, y), bar_size, axis);
            let value = self.source.axis_movement(device, axis);
            let label = format!("{} {:.2}", axis_name(axis), value);
            self.canvas.text(&label, egui::pos2(text_x, y), font_size, style.background);
            y += row;
        }

        y - origin.y
    }

    /// One stick indicator row per stick whose X and Y axes were both observed
    ///
    /// Returns the height consumed below `origin`.
    pub fn render_sticks(&mut self, origin: Pos2, font_size: f32, line_gap: f32) -> f32 {
        let tracker = self.tracker;
        let device = tracker.device();
        let style = tracker.style();
        let radius = font_size;
        let text_x = origin.x + radius * 2.0 + line_gap;
        let mut y = origin.y;

        for &(label, x_axis, y_axis) in STICKS {
            if !(tracker.has_axis(x_axis) && tracker.has_axis(y_axis)) {
                continue;
            }
            let center = egui::pos2(origin.x + radius, y + radius);
            self.draw_stick(center, radius, x_axis, y_axis);

            let text = format!(
                "{} ({:.2}, {:.2})",
                label,
                self.source.axis_movement(device, x_axis),
                self.source.axis_movement(device, y_axis),
            );
            self.canvas.text(&text, egui::pos2(text_x, y), font_size, style.background);
            y += stick_row_height(font_size, line_gap);
        }

        y - origin.y
    }
}
