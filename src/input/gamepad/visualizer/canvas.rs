//! Drawing primitives the overlay renders through
//!
//! The renderer only knows [`Canvas`]; [`EguiCanvas`] forwards to an
//! [`egui::Painter`] for the real window.

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke};

/// Immediate-mode drawing surface in screen coordinates
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Color32);
    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color32);
    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);
    fn stroke_circle(&mut self, center: Pos2, radius: f32, color: Color32);
    fn line(&mut self, from: Pos2, to: Pos2, color: Color32);
    /// Draw `text` with its top-left corner at `position`
    fn text(&mut self, text: &str, position: Pos2, font_size: f32, color: Color32);
}

/// [`Canvas`] backed by an egui painter
pub struct EguiCanvas<'a> {
    painter: &'a Painter,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a Painter) -> Self {
        Self { painter }
    }
}

impl Canvas for EguiCanvas<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.painter.rect_filled(rect, 0.0, color);
    }

    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color32) {
        self.painter.rect_stroke(rect, 0.0, Stroke::new(thickness, color));
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter.circle_filled(center, radius, color);
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter.circle_stroke(center, radius, Stroke::new(1.0, color));
    }

    fn line(&mut self, from: Pos2, to: Pos2, color: Color32) {
        self.painter.line_segment([from, to], Stroke::new(1.0, color));
    }

    fn text(&mut self, text: &str, position: Pos2, font_size: f32, color: Color32) {
        self.painter.text(
            position,
            Align2::LEFT_TOP,
            text,
            FontId::proportional(font_size),
            color,
        );
    }
}
