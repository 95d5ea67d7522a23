//! Fixed visual design of the widget.
//!
//! Both the renderer and the hit tester read from [`Layout`], so a shape
//! moved here moves its click target with it.

use crate::widget::counters::TAB_COUNT;
use crate::widget::geometry::{Color, Point, Rect};

pub const WINDOW_SIZE: (f32, f32) = (124.0, 105.0);

pub const REPO_URL: &str = "https://github.com/pertamaks/floating-counter";
pub const CONTEXT_ACTION_LABEL: &str = "\u{a9} 2025 pertamaks/floating-counter";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSpec {
    pub fill_rect: Rect,
    pub fill_radius: f32,
    pub fill: Color,
    pub border_rect: Rect,
    pub border_radius: f32,
    pub border: Color,
    pub border_width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySpec {
    pub rect: Rect,
    pub radius: f32,
    pub fill: Color,
    pub text_color: Color,
    pub text_size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabStripSpec {
    pub xs: [f32; TAB_COUNT],
    pub y: f32,
    pub radius: f32,
    pub colors: [Color; TAB_COUNT],
    pub ring_radius: f32,
    pub ring_color: Color,
    pub ring_width: f32,
    pub hit_radius: f32,
}

impl TabStripSpec {
    pub fn center(&self, tab: usize) -> Option<Point> {
        self.xs.get(tab).map(|x| Point::new(*x, self.y))
    }

    pub fn centers(&self) -> impl Iterator<Item = Point> + '_ {
        self.xs.iter().map(move |x| Point::new(*x, self.y))
    }
}

/// A round button. `hit_radius` is deliberately a touch larger than the
/// drawn `radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonSpec {
    pub center: Point,
    pub radius: f32,
    pub hit_radius: f32,
    pub fill: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphSpec {
    pub color: Color,
    pub width: f32,
    /// Half-length of the "+" and "-" strokes.
    pub arm: f32,
    /// Half-extent of the close cross.
    pub cross: f32,
    pub cross_width: f32,
    pub reset_radius: f32,
    /// Start angle of the reset arc in radians, screen coordinates (y down).
    pub reset_start: f32,
    pub reset_sweep: f32,
    pub reset_segments: usize,
    pub reset_arrow: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub window: Rect,
    pub frame: FrameSpec,
    pub display: DisplaySpec,
    pub tabs: TabStripSpec,
    pub increment: ButtonSpec,
    pub decrement: ButtonSpec,
    pub close: ButtonSpec,
    pub reset: ButtonSpec,
    pub button_border: Color,
    pub button_border_width: f32,
    pub glyph: GlyphSpec,
}

impl Layout {
    pub const DEFAULT: Layout = Layout {
        window: Rect::new(0.0, 0.0, WINDOW_SIZE.0, WINDOW_SIZE.1),
        frame: FrameSpec {
            fill_rect: Rect::new(15.0, 10.0, 94.0, 87.0),
            fill_radius: 14.0,
            fill: Color::hex(0xC0BEB3),
            border_rect: Rect::new(13.5, 8.5, 97.0, 90.0),
            border_radius: 15.5,
            border: Color::WHITE,
            border_width: 3.0,
        },
        display: DisplaySpec {
            rect: Rect::new(22.0, 23.0, 80.0, 68.0),
            radius: 7.0,
            fill: Color::WHITE,
            text_color: Color::BLACK,
            text_size: 42.0,
        },
        tabs: TabStripSpec {
            xs: [36.0, 49.0, 62.0, 74.0, 87.0],
            y: 16.0,
            radius: 4.0,
            colors: [
                Color::hex(0xF7D474),
                Color::hex(0xE09322),
                Color::hex(0xA1413F),
                Color::hex(0x484366),
                Color::hex(0x6BB09A),
            ],
            ring_radius: 5.0,
            ring_color: Color::WHITE,
            ring_width: 1.5,
            hit_radius: 5.0,
        },
        increment: ButtonSpec {
            center: Point::new(109.0, 74.0),
            radius: 14.0,
            hit_radius: 15.0,
            fill: Color::hex(0x63BAAA),
        },
        decrement: ButtonSpec {
            center: Point::new(15.0, 74.0),
            radius: 14.0,
            hit_radius: 15.0,
            fill: Color::hex(0x8B275D),
        },
        close: ButtonSpec {
            center: Point::new(109.0, 12.0),
            radius: 11.0,
            hit_radius: 12.0,
            fill: Color::BLACK,
        },
        reset: ButtonSpec {
            center: Point::new(22.0, 93.0),
            radius: 11.0,
            hit_radius: 12.0,
            fill: Color::BLACK,
        },
        button_border: Color::WHITE,
        button_border_width: 3.0,
        glyph: GlyphSpec {
            color: Color::WHITE,
            width: 2.5,
            arm: 6.0,
            cross: 4.0,
            cross_width: 1.5,
            reset_radius: 5.0,
            reset_start: -std::f32::consts::FRAC_PI_3,
            reset_sweep: 5.0 * std::f32::consts::FRAC_PI_3,
            reset_segments: 16,
            reset_arrow: 2.5,
        },
    };
}

impl Default for Layout {
    fn default() -> Self {
        Self::DEFAULT
    }
}
