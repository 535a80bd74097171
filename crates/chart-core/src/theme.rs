// File: crates/chart-core/src/theme.rs
// Summary: Report styling (background, grid, text colors, base font size) and color helpers.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick_label: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
    /// Base font size in points; titles and labels scale from it.
    pub font_size: f32,
    pub grid_width: f32,
}

impl Theme {
    /// White background with a light gray grid and no axis spines, the look of a
    /// whitegrid-style statistical plot.
    pub fn whitegrid() -> Self {
        Self {
            name: "whitegrid",
            background: skia::Color::WHITE,
            grid: rgb(0xcccccc),
            axis_line: rgb(0xcccccc),
            axis_label: rgb(0x262626),
            tick_label: rgb(0x262626),
            legend_background: rgba(0xffffff, 0.8),
            legend_border: rgb(0xcccccc),
            font_size: 10.0,
            grid_width: 0.8,
        }
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size.max(1.0);
        self
    }

    /// Tick labels follow the base size.
    pub fn tick_size(&self) -> f32 { self.font_size }
    /// Legend text is one step smaller than the base size.
    pub fn legend_size(&self) -> f32 { (self.font_size - 1.0).max(1.0) }
}

impl Default for Theme {
    fn default() -> Self { Self::whitegrid() }
}

/// Opaque color from a `0xRRGGBB` literal.
pub fn rgb(hex: u32) -> skia::Color {
    skia::Color::from_argb(255, (hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Color from a `0xRRGGBB` literal with alpha in `0.0..=1.0`.
pub fn rgba(hex: u32, alpha: f32) -> skia::Color {
    with_alpha(rgb(hex), alpha)
}

/// Replace the alpha channel of `color`.
pub fn with_alpha(color: skia::Color, alpha: f32) -> skia::Color {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    skia::Color::from_argb(a, color.r(), color.g(), color.b())
}
