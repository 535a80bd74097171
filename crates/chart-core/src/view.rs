// File: crates/chart-core/src/view.rs
// Summary: Visible data ranges and autoscale over every series type.

use crate::series::{SeriesType, BASELINE};
use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Tight bounds of all series in `chart`. Falls back to the unit square when empty.
    pub fn from_chart(chart: &Chart) -> Self {
        let mut b = Bounds::empty();
        for s in &chart.series {
            match s.series_type {
                SeriesType::Line => {
                    for &(x, y) in &s.data_xy { b.add(x, y); }
                }
                SeriesType::Area => {
                    for &(x, y) in &s.data_xy {
                        b.add(x, y);
                        b.add(x, BASELINE);
                    }
                }
                SeriesType::HorizontalBar => {
                    let half = s.style.bar_height * 0.5;
                    for bar in &s.bars {
                        b.add(BASELINE, bar.row - half);
                        b.add(bar.value, bar.row + half);
                    }
                }
                SeriesType::BrokenBar => {
                    for sp in &s.spans {
                        b.add(sp.x, sp.y);
                        b.add(sp.x + sp.width, sp.y + sp.height);
                    }
                }
            }
        }
        b.into_view()
    }

    /// Grow each side by `margin` times the span on that axis.
    pub fn with_margin(self, x_margin: f64, y_margin: f64) -> Self {
        let mx = (self.x_max - self.x_min) * x_margin;
        let my = (self.y_max - self.y_min) * y_margin;
        Self { x_min: self.x_min - mx, x_max: self.x_max + mx, y_min: self.y_min - my, y_max: self.y_max + my }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}

struct Bounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Bounds {
    fn empty() -> Self {
        Self { x_min: f64::INFINITY, x_max: f64::NEG_INFINITY, y_min: f64::INFINITY, y_max: f64::NEG_INFINITY }
    }

    fn add(&mut self, x: f64, y: f64) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
    }

    fn into_view(self) -> ViewState {
        let Bounds { x_min, mut x_max, y_min, mut y_max } = self;
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return ViewState { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        ViewState { x_min, x_max, y_min, y_max }
    }
}
