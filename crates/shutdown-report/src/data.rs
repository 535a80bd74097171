// File: crates/shutdown-report/src/data.rs
// Summary: In-memory shapes of the transcribed datasets (time series, categories, intervals, diagram nodes).

use anyhow::{anyhow, Result};
use chart_core::{day_number, rgb, Annotation, Color, HAlign, RoundedBox, Segment, VAlign};
use chrono::{NaiveDate, NaiveDateTime};

use crate::palette;

/// Naive UTC datetime from calendar fields.
pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .ok_or_else(|| anyhow!("invalid timestamp {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}"))
}

/// Ordered (x, value) pairs. For datetime series x is a day number.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeSeries {
    pub points: Vec<(f64, f64)>,
}

impl TimeSeries {
    pub fn from_datetimes(points: &[(NaiveDateTime, f64)]) -> Self {
        Self { points: points.iter().map(|&(t, v)| (day_number(t), v)).collect() }
    }

    /// Pair each hour with a value; the shorter input decides the length.
    pub fn from_hours(hours: impl IntoIterator<Item = u32>, values: &[f64]) -> Self {
        Self { points: hours.into_iter().zip(values).map(|(h, &v)| (h as f64, v)).collect() }
    }

    /// Compute one value per hour with `rule`.
    pub fn synthesize(hours: impl IntoIterator<Item = u32>, rule: impl Fn(u32) -> f64) -> Self {
        Self { points: hours.into_iter().map(|h| (h as f64, rule(h))).collect() }
    }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.1)
    }
}

#[derive(Clone, Debug)]
pub struct CategoryEntry {
    pub label: String,
    pub value: f64,
    pub color: Color,
}

/// (label, value, color) triples, one per bar.
#[derive(Clone, Debug, Default)]
pub struct CategoricalSeries {
    pub entries: Vec<CategoryEntry>,
}

impl CategoricalSeries {
    pub fn new(entries: Vec<CategoryEntry>) -> Self {
        Self { entries }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.value).collect()
    }

    pub fn colors(&self) -> Vec<Color> {
        self.entries.iter().map(|e| e.color).collect()
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

/// Kind of network operator, as colored in the prefix chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AsnCategory {
    Government,
    Backbone,
    IspMobile,
}

impl AsnCategory {
    pub const ALL: [AsnCategory; 3] = [AsnCategory::Government, AsnCategory::Backbone, AsnCategory::IspMobile];

    pub fn color(self) -> Color {
        rgb(match self {
            AsnCategory::Government => palette::RED,
            AsnCategory::Backbone => palette::PURPLE,
            AsnCategory::IspMobile => palette::GREEN,
        })
    }

    pub fn label(self) -> &'static str {
        match self {
            AsnCategory::Government => "Government/TIC",
            AsnCategory::Backbone => "Backbone",
            AsnCategory::IspMobile => "ISP/Mobile",
        }
    }
}

/// (start, duration) windows on the x axis, all over the same (start, height) band on y.
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalSet {
    pub intervals: Vec<(f64, f64)>,
    pub band: (f64, f64),
}

impl IntervalSet {
    /// One window of `width` centred on each day index `1..=days`.
    pub fn daily(days: u32, width: f64, band: (f64, f64)) -> Self {
        let intervals = (1..=days).map(|d| (d as f64 - width * 0.5, width)).collect();
        Self { intervals, band }
    }

    pub fn len(&self) -> usize { self.intervals.len() }

    pub fn is_empty(&self) -> bool { self.intervals.is_empty() }
}

/// Labelled box of the architecture diagram with lines to other positions.
#[derive(Clone, Debug)]
pub struct DiagramNode {
    pub label: String,
    /// Lower-left corner before padding.
    pub origin: (f64, f64),
    pub size: (f64, f64),
    pub pad: f64,
    pub fill: Color,
    pub edge: Color,
    pub edge_width: f32,
    pub label_size: f32,
    pub label_color: Color,
    /// Line targets, drawn from the top centre of the box.
    pub connects_to: Vec<(f64, f64)>,
}

impl DiagramNode {
    /// Box of `size` centred at `center`.
    pub fn centered(label: impl Into<String>, center: (f64, f64), size: (f64, f64)) -> Self {
        Self::at(label, (center.0 - size.0 * 0.5, center.1 - size.1 * 0.5), size)
    }

    pub fn at(label: impl Into<String>, origin: (f64, f64), size: (f64, f64)) -> Self {
        Self {
            label: label.into(),
            origin,
            size,
            pad: 0.1,
            fill: rgb(palette::WHITE),
            edge: rgb(palette::NAVY),
            edge_width: 2.0,
            label_size: 10.0,
            label_color: rgb(palette::WHITE),
            connects_to: Vec::new(),
        }
    }

    pub fn styled(mut self, fill: u32, edge: u32, edge_width: f32, pad: f64) -> Self {
        self.fill = rgb(fill);
        self.edge = rgb(edge);
        self.edge_width = edge_width;
        self.pad = pad;
        self
    }

    pub fn with_label_style(mut self, size: f32, color: u32) -> Self {
        self.label_size = size;
        self.label_color = rgb(color);
        self
    }

    pub fn connect_to(mut self, target: (f64, f64)) -> Self {
        self.connects_to.push(target);
        self
    }

    pub fn center(&self) -> (f64, f64) {
        (self.origin.0 + self.size.0 * 0.5, self.origin.1 + self.size.1 * 0.5)
    }

    pub fn top_center(&self) -> (f64, f64) {
        (self.origin.0 + self.size.0 * 0.5, self.origin.1 + self.size.1)
    }

    pub fn to_box(&self) -> RoundedBox {
        RoundedBox::new(self.origin.0, self.origin.1, self.size.0, self.size.1)
            .with_pad(self.pad)
            .with_colors(self.fill, self.edge)
            .with_edge_width(self.edge_width)
    }

    pub fn label_annotation(&self) -> Annotation {
        Annotation::text(self.label.clone(), self.center())
            .with_size(self.label_size)
            .with_color(self.label_color)
            .bold()
            .aligned(HAlign::Center, VAlign::Center)
    }

    pub fn connectors(&self, color: Color, width: f32) -> Vec<Segment> {
        let from = self.top_center();
        self.connects_to.iter().map(|&to| Segment::new(from, to, color).with_width(width)).collect()
    }
}
