// File: crates/chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout: multi-line, aligned, bold and rotated labels.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

const SANS_FAMILIES: &[&str] = &["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// Font settings for one piece of text.
#[derive(Clone, Copy, Debug)]
pub struct LabelStyle {
    pub size: f32,
    pub color: skia::Color,
    pub bold: bool,
}

impl LabelStyle {
    pub fn new(size: f32, color: skia::Color) -> Self {
        Self { size, color, bold: false }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(style: &LabelStyle) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(style.size.max(1.0));
        ts.set_color(style.color);
        ts.set_font_families(SANS_FAMILIES);
        if style.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    /// Shape `text` (may contain `\n`) with lines aligned per `align`; the
    /// paragraph width equals its longest line.
    pub fn layout(&self, text: &str, style: &LabelStyle, align: HAlign) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(match align {
            HAlign::Left => TextAlign::Left,
            HAlign::Center => TextAlign::Center,
            HAlign::Right => TextAlign::Right,
        });
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(style));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        let width = paragraph.longest_line().ceil() + 1.0;
        paragraph.layout(width);
        paragraph
    }

    /// Width of the longest line and total height, in points.
    pub fn measure(&self, text: &str, style: &LabelStyle) -> (f32, f32) {
        if text.is_empty() { return (0.0, 0.0); }
        let p = self.layout(text, style, HAlign::Left);
        let height = p.height().max(style.size * 1.2 * line_count(text) as f32);
        (p.longest_line(), height)
    }

    /// Draw `text` so that its bounding box is anchored at `(x, y)` per `h`/`v`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, style: &LabelStyle, h: HAlign, v: VAlign) {
        if text.is_empty() { return; }
        let p = self.layout(text, style, h);
        let (w, ht) = (p.longest_line(), p.height());
        let left = match h {
            HAlign::Left => x,
            HAlign::Center => x - w * 0.5,
            HAlign::Right => x - w,
        };
        let top = match v {
            VAlign::Top => y,
            VAlign::Center => y - ht * 0.5,
            VAlign::Bottom => y - ht,
        };
        p.paint(canvas, (left, top));
    }

    /// Draw rotated by `degrees` (counter-clockwise on screen) around the anchor `(x, y)`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_rotated(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        style: &LabelStyle,
        h: HAlign,
        v: VAlign,
        degrees: f32,
    ) {
        if degrees == 0.0 {
            self.draw(canvas, text, x, y, style, h, v);
            return;
        }
        canvas.save();
        canvas.translate((x, y));
        canvas.rotate(-degrees, None);
        self.draw(canvas, text, 0.0, 0.0, style, h, v);
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Extent of a `w` x `h` box after rotation by `degrees`.
pub fn rotated_extent(w: f32, h: f32, degrees: f32) -> (f32, f32) {
    let r = degrees.to_radians();
    let (s, c) = (r.sin().abs(), r.cos().abs());
    (w * c + h * s, w * s + h * c)
}
