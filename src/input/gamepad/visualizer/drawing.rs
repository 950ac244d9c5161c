//! Low-level indicator drawing for the overlay
//!
//! Each function draws one indicator from plain values. Geometry lives in
//! separate pure functions ([`axis_fill_rect`], [`stick_point`]) so it can be
//! checked without a canvas.

use super::canvas::Canvas;
use crate::input::gamepad::normalize::radial_clamp;
use crate::input::gamepad::tracker::DisplayStyle;
use egui::{Color32, Pos2, Rect, Vec2};

/// Radius of the dot marking the current stick position
pub const STICK_DOT_RADIUS: f32 = 3.0;

/// Outline thickness of axis bars
const AXIS_OUTLINE_THICKNESS: f32 = 1.0;

/// Fill rectangle of an axis bar at `origin` with `size` for `value`
///
/// The fill grows from the horizontal center: rightward for positive values,
/// leftward for negative ones. A value of exactly zero still gets a one unit
/// sliver so the center stays visible.
pub fn axis_fill_rect(origin: Pos2, size: Vec2, value: f32) -> Rect {
    let left = if value >= 0.0 {
        origin.x + size.x / 2.0
    } else {
        origin.x + size.x / 2.0 * (1.0 + value)
    };

    let width = if value == 0.0 {
        1.0
    } else {
        size.x * value.abs() / 2.0
    };

    Rect::from_min_size(egui::pos2(left, origin.y), egui::vec2(width, size.y))
}

/// Screen position of a stick vector plotted in a circle of `radius`
///
/// Vectors longer than 1 are clamped to the circle edge.
pub fn stick_point(center: Pos2, radius: f32, x: f32, y: f32) -> Pos2 {
    let (x, y) = radial_clamp(x, y);
    egui::pos2(center.x + x * radius, center.y + y * radius)
}

/// Draw a signed one-dimensional axis bar
pub fn draw_axis<C: Canvas + ?Sized>(
    canvas: &mut C,
    style: DisplayStyle,
    origin: Pos2,
    size: Vec2,
    value: f32,
) {
    let outline = Rect::from_min_size(origin, size);
    canvas.fill_rect(axis_fill_rect(origin, size, value), style.foreground);
    canvas.stroke_rect(outline, AXIS_OUTLINE_THICKNESS, style.background);
}

/// Draw a two-axis stick: bounding circle, direction line and position dot
pub fn draw_stick<C: Canvas + ?Sized>(
    canvas: &mut C,
    style: DisplayStyle,
    center: Pos2,
    radius: f32,
    x: f32,
    y: f32,
) {
    let point = stick_point(center, radius, x, y);
    canvas.stroke_circle(center, radius, style.background);
    canvas.line(center, point, style.foreground);
    canvas.fill_circle(point, STICK_DOT_RADIUS, style.foreground);
}

/// Draw a button indicator, filled when `active`
pub fn draw_button<C: Canvas + ?Sized>(
    canvas: &mut C,
    style: DisplayStyle,
    position: Pos2,
    radius: f32,
    active: bool,
) {
    let fill = if active {
        style.foreground
    } else {
        Color32::TRANSPARENT
    };
    canvas.fill_circle(position, radius, fill);
    canvas.stroke_circle(position, radius, style.background);
}
