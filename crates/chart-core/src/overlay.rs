// File: crates/chart-core/src/overlay.rs
// Summary: Overlays drawn on top of a chart's data: reference lines, spans and annotations.

use skia_safe as skia;

use crate::series::LineDash;
use crate::text::{HAlign, VAlign};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Line across the whole plot at a fixed data value (axhline / axvline).
#[derive(Clone, Debug)]
pub struct RefLine {
    pub orientation: Orientation,
    pub value: f64,
    pub color: skia::Color,
    pub width: f32,
    pub dash: LineDash,
    pub alpha: f32,
    pub label: Option<String>,
}

impl RefLine {
    pub fn horizontal(y: f64, color: skia::Color) -> Self {
        Self::new(Orientation::Horizontal, y, color)
    }

    pub fn vertical(x: f64, color: skia::Color) -> Self {
        Self::new(Orientation::Vertical, x, color)
    }

    fn new(orientation: Orientation, value: f64, color: skia::Color) -> Self {
        Self { orientation, value, color, width: 1.5, dash: LineDash::Solid, alpha: 1.0, label: None }
    }

    pub fn dashed(mut self) -> Self {
        self.dash = LineDash::Dashed;
        self
    }

    pub fn dotted(mut self) -> Self {
        self.dash = LineDash::Dotted;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Horizontal band between `y0` and `y1` covering the axes fraction `x_from..x_to` (axhspan).
#[derive(Clone, Copy, Debug)]
pub struct Band {
    pub y0: f64,
    pub y1: f64,
    pub x_from: f32,
    pub x_to: f32,
    pub color: skia::Color,
    pub alpha: f32,
}

impl Band {
    pub fn new(y0: f64, y1: f64, color: skia::Color) -> Self {
        Self { y0, y1, x_from: 0.0, x_to: 1.0, color, alpha: 1.0 }
    }

    pub fn with_x_fraction(mut self, from: f32, to: f32) -> Self {
        self.x_from = from;
        self.x_to = to;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }
}

/// Text at a data position, optionally with an arrow from the text to `target`.
#[derive(Clone, Debug)]
pub struct Annotation {
    pub text: String,
    /// Anchor of the text, in data coordinates.
    pub at: (f64, f64),
    /// Arrow tip, in data coordinates.
    pub target: Option<(f64, f64)>,
    pub arrow_color: skia::Color,
    /// Font size in points; `None` uses the theme's base size.
    pub size: Option<f32>,
    pub color: Option<skia::Color>,
    pub bold: bool,
    pub h_align: HAlign,
    pub v_align: VAlign,
}

impl Annotation {
    pub fn text(text: impl Into<String>, at: (f64, f64)) -> Self {
        Self {
            text: text.into(),
            at,
            target: None,
            arrow_color: skia::Color::BLACK,
            size: None,
            color: None,
            bold: false,
            h_align: HAlign::Left,
            v_align: VAlign::Bottom,
        }
    }

    /// Text at `text_at` with an arrow pointing at `target`.
    pub fn arrow(text: impl Into<String>, target: (f64, f64), text_at: (f64, f64), color: skia::Color) -> Self {
        let mut a = Self::text(text, text_at);
        a.target = Some(target);
        a.arrow_color = color;
        a.h_align = HAlign::Center;
        a
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn aligned(mut self, h: HAlign, v: VAlign) -> Self {
        self.h_align = h;
        self.v_align = v;
        self
    }
}
