// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges, tick placement and tick label formatting.

use chrono::DateTime;

use crate::grid::{decimals_for_step, nice_ticks};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Where ticks go.
#[derive(Clone, Debug, PartialEq)]
pub enum Ticks {
    /// Nice 1/2/5 steps; the count follows the axis length on screen.
    Auto,
    /// Explicit positions with explicit labels.
    Labeled(Vec<(f64, String)>),
}

/// How tick values are turned into text.
#[derive(Clone, Debug, PartialEq)]
pub enum TickFormat {
    /// Plain numbers with as few decimals as the tick step needs.
    Number,
    /// Values are day numbers (days since 1970-01-01 UTC) formatted with a
    /// chrono `strftime` pattern.
    Date(String),
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub ticks: Ticks,
    pub format: TickFormat,
    /// Tick label rotation in degrees, counter-clockwise.
    pub tick_rotation: f32,
    pub grid: bool,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            ticks: Ticks::Auto,
            format: TickFormat::Number,
            tick_rotation: 0.0,
            grid: true,
        }
    }

    pub fn default_x() -> Self { Self::new("", 0.0, 1.0) }

    pub fn default_y() -> Self { Self::new("", 0.0, 1.0) }

    pub fn with_ticks(mut self, ticks: Ticks) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn with_format(mut self, format: TickFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_tick_rotation(mut self, degrees: f32) -> Self {
        self.tick_rotation = degrees;
        self
    }

    /// Categorical axis: one labelled tick per row index `0..labels.len()`.
    pub fn categories<S: AsRef<str>>(label: impl Into<String>, labels: &[S]) -> Self {
        let ticks = labels
            .iter()
            .enumerate()
            .map(|(i, l)| (i as f64, l.as_ref().to_string()))
            .collect();
        let n = labels.len() as f64;
        Self::new(label, -0.5, (n - 0.5).max(0.5)).with_ticks(Ticks::Labeled(ticks))
    }

    /// Tick positions and labels, restricted to the visible range.
    /// `target` is the preferred tick count for `Ticks::Auto`.
    pub fn tick_marks(&self, target: usize) -> Vec<(f64, String)> {
        let (lo, hi) = (self.min.min(self.max), self.min.max(self.max));
        let inside = |v: f64| v >= lo - 1e-9 && v <= hi + 1e-9;
        match &self.ticks {
            Ticks::Auto => {
                let values = nice_ticks(lo, hi, target);
                let step = if values.len() >= 2 { values[1] - values[0] } else { hi - lo };
                values.into_iter().map(|v| (v, self.format_value(v, step))).collect()
            }
            Ticks::Labeled(marks) => marks.iter().filter(|(v, _)| inside(*v)).cloned().collect(),
        }
    }

    pub fn format_value(&self, v: f64, step: f64) -> String {
        match &self.format {
            TickFormat::Number => format_number(v, step),
            TickFormat::Date(pattern) => format_day_number(v, pattern),
        }
    }
}

/// Format `v` with the decimals the tick spacing `step` calls for.
pub fn format_number(v: f64, step: f64) -> String {
    let decimals = decimals_for_step(step);
    let s = format!("{:.*}", decimals, v);
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}

/// Format a day number with a chrono `strftime` pattern. Out-of-range values
/// fall back to the plain number.
pub fn format_day_number(days: f64, pattern: &str) -> String {
    let secs = (days * SECONDS_PER_DAY).round() as i64;
    match DateTime::from_timestamp(secs, 0) {
        Some(dt) => dt.format(pattern).to_string(),
        None => format_number(days, 1.0),
    }
}

/// Day number (fractional days since the Unix epoch, UTC) of a naive UTC datetime.
pub fn day_number(dt: chrono::NaiveDateTime) -> f64 {
    dt.and_utc().timestamp() as f64 / SECONDS_PER_DAY
}
