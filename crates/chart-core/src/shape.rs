// File: crates/chart-core/src/shape.rs
// Summary: Free-form diagram shapes in data space: rounded boxes and straight segments.

use skia_safe as skia;

/// Rectangle at `(x, y)` (lower-left, data space) of `width` x `height`, grown by
/// `pad` on every side and rounded with radius `pad`.
#[derive(Clone, Copy, Debug)]
pub struct RoundedBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub pad: f64,
    pub fill: skia::Color,
    pub edge: skia::Color,
    pub edge_width: f32,
}

impl RoundedBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            pad: 0.1,
            fill: skia::Color::WHITE,
            edge: skia::Color::BLACK,
            edge_width: 1.0,
        }
    }

    pub fn with_pad(mut self, pad: f64) -> Self {
        self.pad = pad;
        self
    }

    pub fn with_colors(mut self, fill: skia::Color, edge: skia::Color) -> Self {
        self.fill = fill;
        self.edge = edge;
        self
    }

    pub fn with_edge_width(mut self, width: f32) -> Self {
        self.edge_width = width;
        self
    }

    /// Data-space bounds including padding: (x0, y0, x1, y1).
    pub fn outer_bounds(&self) -> (f64, f64, f64, f64) {
        (self.x - self.pad, self.y - self.pad, self.x + self.width + self.pad, self.y + self.height + self.pad)
    }
}

/// Straight line between two data points, optionally ending in an arrowhead at `to`.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub color: skia::Color,
    pub width: f32,
    pub arrow: bool,
}

impl Segment {
    pub fn new(from: (f64, f64), to: (f64, f64), color: skia::Color) -> Self {
        Self { from, to, color, width: 1.5, arrow: false }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_arrow(mut self) -> Self {
        self.arrow = true;
        self
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Shape {
    RoundedBox(RoundedBox),
    Segment(Segment),
}

impl From<RoundedBox> for Shape {
    fn from(b: RoundedBox) -> Self { Shape::RoundedBox(b) }
}

impl From<Segment> for Shape {
    fn from(s: Segment) -> Self { Shape::Segment(s) }
}
