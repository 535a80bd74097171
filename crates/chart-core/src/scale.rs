// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-screen transforms for the X and Y axes.

/// Data coordinate on either axis.
pub type Value = f64;

/// Maps the data interval `[vmin, vmax]` onto the screen interval `[start_px, end_px]`.
/// `end_px < start_px` is allowed (vertical axes grow upwards on screen).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub start_px: f32,
    pub end_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl LinearScale {
    pub fn new(start_px: f32, end_px: f32, vmin: Value, mut vmax: Value) -> Self {
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { start_px, end_px, vmin, vmax }
    }

    /// Horizontal scale over a plot rectangle's left..right.
    pub fn horizontal(left: f32, right: f32, vmin: Value, vmax: Value) -> Self {
        Self::new(left, right, vmin, vmax)
    }

    /// Vertical scale over a plot rectangle: `vmin` at the bottom, `vmax` at the top.
    pub fn vertical(top: f32, bottom: f32, vmin: Value, vmax: Value) -> Self {
        Self::new(bottom, top, vmin, vmax)
    }

    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        let span = self.vmax - self.vmin;
        self.start_px + ((v - self.vmin) / span) as f32 * (self.end_px - self.start_px)
    }

    /// Length in points of a data-space distance.
    #[inline]
    pub fn len_px(&self, d: Value) -> f32 {
        (d / (self.vmax - self.vmin)) as f32 * (self.end_px - self.start_px).abs()
    }

    /// Screen position of a fraction of the axis (0 = `start_px`, 1 = `end_px`).
    #[inline]
    pub fn fraction_px(&self, f: f32) -> f32 {
        self.start_px + f * (self.end_px - self.start_px)
    }
}
