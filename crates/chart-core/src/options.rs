// File: crates/chart-core/src/options.rs
// Summary: Render options: physical size, resolution, fallback insets and theme.

use crate::theme::Theme;
use crate::types::{inches_to_px, Insets, DEFAULT_DPI, HEIGHT_IN, POINTS_PER_INCH, WIDTH_IN};

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width_in: f32,
    pub height_in: f32,
    pub dpi: f32,
    /// Plot margins used when labels are off; with labels the layout is measured.
    pub insets: Insets,
    pub theme: Theme,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width_in: WIDTH_IN,
            height_in: HEIGHT_IN,
            dpi: DEFAULT_DPI,
            insets: Insets::default(),
            theme: Theme::whitegrid(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn from_inches(width_in: f32, height_in: f32, dpi: f32) -> Self {
        Self { width_in, height_in, dpi, ..Self::default() }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Output size in pixels.
    pub fn pixel_size(&self) -> (i32, i32) {
        (inches_to_px(self.width_in, self.dpi).max(1), inches_to_px(self.height_in, self.dpi).max(1))
    }

    /// Page size in layout points.
    pub fn size_pt(&self) -> (f32, f32) {
        (self.width_in * POINTS_PER_INCH, self.height_in * POINTS_PER_INCH)
    }

    /// Pixels per point.
    pub fn scale(&self) -> f32 {
        self.dpi / POINTS_PER_INCH
    }
}
