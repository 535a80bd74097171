// File: crates/chart-core/src/series.rs
// Summary: Series model for line, area, horizontal bar and broken-bar (interval) data.

use skia_safe as skia;

use crate::theme::rgb;

/// Value-axis origin of areas and bars.
pub const BASELINE: f64 = 0.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,          // connected (x, y) points, optional markers
    Area,          // fill between the baseline and (x, y) points
    HorizontalBar, // one bar per row, length = value
    BrokenBar,     // free rectangles given as (x, width) x (y, height)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Marker {
    None,
    /// Filled circle; size is the diameter in points.
    Circle(f32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineDash {
    Solid,
    Dashed,
    Dotted,
}

impl LineDash {
    /// On/off intervals in points for a stroke of `width`.
    pub fn intervals(&self, width: f32) -> Option<[f32; 2]> {
        let w = width.max(0.5);
        match self {
            LineDash::Solid => None,
            LineDash::Dashed => Some([3.7 * w, 1.6 * w]),
            LineDash::Dotted => Some([w, 1.65 * w]),
        }
    }
}

/// One horizontal bar: `row` is its position on the category axis.
#[derive(Clone, Copy, Debug)]
pub struct Bar {
    pub row: f64,
    pub value: f64,
    pub color: skia::Color,
}

/// Axis-aligned rectangle in data space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub x: f64,
    pub width: f64,
    pub y: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct SeriesStyle {
    pub color: skia::Color,
    pub line_width: f32,
    pub alpha: f32,
    pub dash: LineDash,
    pub marker: Marker,
    /// Bar thickness as a fraction of one row.
    pub bar_height: f64,
    /// Bar outline; `None` leaves bars unstroked.
    pub edge: Option<skia::Color>,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            color: rgb(0x1f77b4),
            line_width: 1.5,
            alpha: 1.0,
            dash: LineDash::Solid,
            marker: Marker::None,
            bar_height: 0.8,
            edge: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>, // used by Line/Area
    pub bars: Vec<Bar>,           // used by HorizontalBar
    pub spans: Vec<Span>,         // used by BrokenBar
    pub style: SeriesStyle,
}

impl Series {
    pub fn new(series_type: SeriesType) -> Self {
        Self {
            series_type,
            data_xy: Vec::new(),
            bars: Vec::new(),
            spans: Vec::new(),
            style: SeriesStyle::default(),
        }
    }

    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, ..Self::new(series_type) }
    }

    pub fn line(data: Vec<(f64, f64)>) -> Self {
        Self::with_data(SeriesType::Line, data)
    }

    pub fn area(data: Vec<(f64, f64)>) -> Self {
        Self::with_data(SeriesType::Area, data)
    }

    /// Bars for `values` on rows `0..values.len()`, colored per bar.
    pub fn horizontal_bars(values: &[f64], colors: &[skia::Color]) -> Self {
        let fallback = SeriesStyle::default().color;
        let bars = values
            .iter()
            .enumerate()
            .map(|(i, &value)| Bar { row: i as f64, value, color: colors.get(i).copied().unwrap_or(fallback) })
            .collect();
        Self { bars, ..Self::new(SeriesType::HorizontalBar) }
    }

    /// Rectangles covering `x_ranges` (start, width), each over the same `(y, height)` band.
    pub fn broken_bars(x_ranges: &[(f64, f64)], y_range: (f64, f64)) -> Self {
        let spans = x_ranges
            .iter()
            .map(|&(x, width)| Span { x, width, y: y_range.0, height: y_range.1 })
            .collect();
        Self { spans, ..Self::new(SeriesType::BrokenBar) }
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.style.color = color;
        self
    }

    pub fn with_line_width(mut self, width: f32) -> Self {
        self.style.line_width = width;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.style.alpha = alpha;
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.style.marker = marker;
        self
    }

    pub fn with_bar_height(mut self, height: f64) -> Self {
        self.style.bar_height = height;
        self
    }

    pub fn with_edge(mut self, edge: skia::Color) -> Self {
        self.style.edge = Some(edge);
        self
    }

    /// Number of drawable elements: points, bars or spans depending on the type.
    pub fn len(&self) -> usize {
        match self.series_type {
            SeriesType::Line | SeriesType::Area => self.data_xy.len(),
            SeriesType::HorizontalBar => self.bars.len(),
            SeriesType::BrokenBar => self.spans.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Filled series paint below lines.
    pub fn is_patch(&self) -> bool {
        !matches!(self.series_type, SeriesType::Line)
    }
}
