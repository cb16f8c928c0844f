use egui::{Align2, Color32, FontId, Painter, Pos2, Stroke};
use glam::Vec2;
use orrery_core::Rgb;

use crate::scene::{Scene, Shape, TextAlign};

fn pos(v: Vec2) -> Pos2 {
    Pos2::new(v.x, v.y)
}

fn color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

fn anchor(align: TextAlign) -> Align2 {
    match align {
        TextAlign::TopLeft => Align2::LEFT_TOP,
        TextAlign::Center => Align2::CENTER_CENTER,
    }
}

/// Paints the draw list in order onto an egui layer.
pub fn paint_scene(painter: &Painter, scene: &Scene) {
    for shape in &scene.shapes {
        match shape {
            Shape::OrbitGuide { center, radius, width, color: c } => {
                painter.circle_stroke(pos(*center), *radius, Stroke::new(*width, color(*c)));
            }
            Shape::Body { center, radius, color: c } => {
                painter.circle_filled(pos(*center), *radius, color(*c));
            }
            Shape::Text { pos: p, text, size, color: c, align } => {
                painter.text(pos(*p), anchor(*align), text, FontId::proportional(*size), color(*c));
            }
        }
    }
}
