// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for point-space layout math.

use skia_safe as skia;

/// Axis-aligned rectangle in layout points (y grows downwards).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }

    /// Shrink by `insets`, never producing a negative extent.
    pub fn inset(&self, left: f32, top: f32, right: f32, bottom: f32) -> Self {
        let l = self.left + left;
        let t = self.top + top;
        let r = (self.right - right).max(l + 1.0);
        let b = (self.bottom - bottom).max(t + 1.0);
        Self::from_ltrb(l, t, r, b)
    }

    /// Split horizontally into `n` equal columns separated by `gap`.
    pub fn columns(&self, n: usize, gap: f32) -> Vec<RectF> {
        let n = n.max(1);
        let total_gap = gap * (n as f32 - 1.0);
        let w = ((self.width() - total_gap) / n as f32).max(1.0);
        (0..n)
            .map(|i| {
                let l = self.left + i as f32 * (w + gap);
                Self::from_ltrb(l, self.top, l + w, self.bottom)
            })
            .collect()
    }

    pub fn to_skia(self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}
