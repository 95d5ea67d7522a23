use crate::widget::counters::CounterModel;
use crate::widget::geometry::{Color, Point, Rect};
use crate::widget::layout::{ButtonSpec, Layout};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// One drawing instruction for the host surface, in widget-local units.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    RoundedRect {
        rect: Rect,
        radius: f32,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Circle {
        center: Point,
        radius: f32,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Polyline {
        points: Vec<Point>,
        stroke: Stroke,
    },
    /// Text centered in `rect`.
    Text {
        rect: Rect,
        text: String,
        size: f32,
        color: Color,
    },
}

/// Builds the full frame back to front.
pub fn render(model: &CounterModel, layout: &Layout) -> Vec<Primitive> {
    let mut out = Vec::with_capacity(24);
    push_frame(&mut out, layout);
    push_display(&mut out, model, layout);
    push_tabs(&mut out, model.active_tab(), layout);
    push_buttons(&mut out, layout);
    out
}

fn push_frame(out: &mut Vec<Primitive>, layout: &Layout) {
    let frame = &layout.frame;
    out.push(Primitive::RoundedRect {
        rect: frame.fill_rect,
        radius: frame.fill_radius,
        fill: Some(frame.fill),
        stroke: None,
    });
    out.push(Primitive::RoundedRect {
        rect: frame.border_rect,
        radius: frame.border_radius,
        fill: None,
        stroke: Some(Stroke::new(frame.border_width, frame.border)),
    });
}

fn push_display(out: &mut Vec<Primitive>, model: &CounterModel, layout: &Layout) {
    let display = &layout.display;
    out.push(Primitive::RoundedRect {
        rect: display.rect,
        radius: display.radius,
        fill: Some(display.fill),
        stroke: None,
    });
    out.push(Primitive::Text {
        rect: display.rect,
        text: model.display_text(),
        size: display.text_size,
        color: display.text_color,
    });
}

fn push_tabs(out: &mut Vec<Primitive>, active: usize, layout: &Layout) {
    let tabs = &layout.tabs;
    for (idx, (center, color)) in tabs.centers().zip(tabs.colors).enumerate() {
        out.push(Primitive::Circle {
            center,
            radius: tabs.radius,
            fill: Some(color),
            stroke: None,
        });
        if idx == active {
            out.push(Primitive::Circle {
                center,
                radius: tabs.ring_radius,
                fill: None,
                stroke: Some(Stroke::new(tabs.ring_width, tabs.ring_color)),
            });
        }
    }
}

fn push_buttons(out: &mut Vec<Primitive>, layout: &Layout) {
    let glyph = &layout.glyph;
    let pen = Stroke::new(glyph.width, glyph.color);

    let c = push_button_base(out, &layout.increment, layout);
    out.push(Primitive::Line {
        from: c.offset(0.0, -glyph.arm),
        to: c.offset(0.0, glyph.arm),
        stroke: pen,
    });
    out.push(Primitive::Line {
        from: c.offset(-glyph.arm, 0.0),
        to: c.offset(glyph.arm, 0.0),
        stroke: pen,
    });

    let c = push_button_base(out, &layout.decrement, layout);
    out.push(Primitive::Line {
        from: c.offset(-glyph.arm, 0.0),
        to: c.offset(glyph.arm, 0.0),
        stroke: pen,
    });

    let c = push_button_base(out, &layout.reset, layout);
    let thin = Stroke::new(glyph.cross_width, glyph.color);
    let (arc, arrow) = reset_glyph(c, layout);
    out.push(Primitive::Polyline {
        points: arc,
        stroke: thin,
    });
    out.push(Primitive::Polyline {
        points: arrow,
        stroke: thin,
    });

    let c = push_button_base(out, &layout.close, layout);
    let cross = thin;
    let d = glyph.cross;
    out.push(Primitive::Line {
        from: c.offset(-d, -d),
        to: c.offset(d, d),
        stroke: cross,
    });
    out.push(Primitive::Line {
        from: c.offset(d, -d),
        to: c.offset(-d, d),
        stroke: cross,
    });
}

fn push_button_base(out: &mut Vec<Primitive>, button: &ButtonSpec, layout: &Layout) -> Point {
    out.push(Primitive::Circle {
        center: button.center,
        radius: button.radius,
        fill: Some(button.fill),
        stroke: Some(Stroke::new(layout.button_border_width, layout.button_border)),
    });
    button.center
}

/// Open clockwise arc plus a two-segment arrowhead at its end.
fn reset_glyph(center: Point, layout: &Layout) -> (Vec<Point>, Vec<Point>) {
    let glyph = &layout.glyph;
    let segments = glyph.reset_segments.max(1);
    let on_arc = |angle: f32| {
        center.offset(
            glyph.reset_radius * angle.cos(),
            glyph.reset_radius * angle.sin(),
        )
    };

    let arc: Vec<Point> = (0..=segments)
        .map(|i| glyph.reset_start + glyph.reset_sweep * i as f32 / segments as f32)
        .map(on_arc)
        .collect();

    let end_angle = glyph.reset_start + glyph.reset_sweep;
    let tip = on_arc(end_angle);
    // Tangent of a clockwise sweep (y down) at the end point.
    let (tx, ty) = (-end_angle.sin(), end_angle.cos());
    // Normal pointing away from the center.
    let (nx, ny) = (end_angle.cos(), end_angle.sin());
    let a = glyph.reset_arrow;
    let arrow = vec![
        tip.offset(-tx * a + nx * a, -ty * a + ny * a),
        tip,
        tip.offset(-tx * a - nx * a, -ty * a - ny * a),
    ];

    (arc, arrow)
}
