use eframe::egui::{self, Align2, Color32, FontId, Painter, Pos2, Shape};

use crate::widget::geometry::{Color, Point, Rect};
use crate::widget::render::{Primitive, Stroke};

pub fn to_color32(color: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

pub fn to_pos2(point: Point) -> Pos2 {
    egui::pos2(point.x, point.y)
}

pub fn to_rect(rect: Rect) -> egui::Rect {
    egui::Rect::from_min_size(egui::pos2(rect.x, rect.y), egui::vec2(rect.w, rect.h))
}

fn to_stroke(stroke: Stroke) -> egui::Stroke {
    egui::Stroke::new(stroke.width, to_color32(stroke.color))
}

/// Paints primitives in order; later entries land on top.
pub fn paint(painter: &Painter, primitives: &[Primitive]) {
    for primitive in primitives {
        match primitive {
            Primitive::RoundedRect {
                rect,
                radius,
                fill,
                stroke,
            } => {
                let rect = to_rect(*rect);
                if let Some(fill) = fill {
                    painter.rect_filled(rect, *radius, to_color32(*fill));
                }
                if let Some(stroke) = stroke {
                    painter.rect_stroke(rect, *radius, to_stroke(*stroke));
                }
            }
            Primitive::Circle {
                center,
                radius,
                fill,
                stroke,
            } => {
                painter.circle(
                    to_pos2(*center),
                    *radius,
                    fill.map(to_color32).unwrap_or(Color32::TRANSPARENT),
                    stroke.map(to_stroke).unwrap_or(egui::Stroke::NONE),
                );
            }
            Primitive::Line { from, to, stroke } => {
                painter.line_segment([to_pos2(*from), to_pos2(*to)], to_stroke(*stroke));
            }
            Primitive::Polyline { points, stroke } => {
                let points = points.iter().copied().map(to_pos2).collect();
                painter.add(Shape::line(points, to_stroke(*stroke)));
            }
            Primitive::Text {
                rect,
                text,
                size,
                color,
            } => {
                painter.text(
                    to_rect(*rect).center(),
                    Align2::CENTER_CENTER,
                    text,
                    FontId::proportional(*size),
                    to_color32(*color),
                );
            }
        }
    }
}
