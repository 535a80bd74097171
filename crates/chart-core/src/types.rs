// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (physical sizes, paddings).

/// Layout unit: typographic points per inch. Font sizes and stroke widths are in points.
pub const POINTS_PER_INCH: f32 = 72.0;
/// Default output resolution.
pub const DEFAULT_DPI: f32 = 200.0;
/// Default figure width in inches.
pub const WIDTH_IN: f32 = 8.0;
/// Default figure height in inches.
pub const HEIGHT_IN: f32 = 5.0;

/// Margins around the plot area, in points.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(52.0, 18.0, 18.0, 40.0)
    }
}

/// Convert a physical length to pixels at `dpi`.
#[inline]
pub fn inches_to_px(inches: f32, dpi: f32) -> i32 {
    (inches * dpi).round() as i32
}
