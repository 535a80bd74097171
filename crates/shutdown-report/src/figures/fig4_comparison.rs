// File: crates/shutdown-report/src/figures/fig4_comparison.rs
// Summary: Figure 4, 2019 total withdrawal next to the 2022 recurring curfew.

use anyhow::Result;
use chart_core::{rgb, Axis, Chart, Figure, RefLine, Series, Theme};

use super::DPI;
use crate::data::TimeSeries;
use crate::palette::{DARK_PURPLE, DARK_RED, GRAY, PURPLE, RED};

pub const FILE_NAME: &str = "fig4_2019_vs_2022.png";

/// 2019 visibility sampled every 4 hours from Nov 16. Longer than the 7-day
/// window on purpose; `series_2019` cuts it to the window.
pub const VISIBILITY_2019: [f64; 44] = [
    100.0, 100.0, 100.0, 67.0, 40.0, 25.0, 8.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0,
    5.0, 15.0, 10.0, 7.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 20.0, 45.0, 70.0, 90.0, 95.0, 98.0, 100.0, 100.0,
    100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0,
];

pub const HOURS_2019: u32 = 7 * 24;
pub const STEP_2019: usize = 4;
pub const HOURS_2022: u32 = 13 * 24;

/// Daily window (UTC hour of day, inclusive) during which mobile networks were cut.
pub const CURFEW_HOURS: std::ops::RangeInclusive<u32> = 12..=20;
/// Mobile visibility inside the curfew window; only part of the network stayed up.
pub const CURFEW_VISIBILITY: f64 = 20.0;
pub const NORMAL_VISIBILITY: f64 = 100.0;

/// Axis label size in both panels.
const AXIS_LABEL_SIZE: f32 = 11.0;

/// Visibility at `hour` counted from Sep 21 00:00 UTC.
pub fn curfew_visibility(hour: u32) -> f64 {
    if CURFEW_HOURS.contains(&(hour % 24)) {
        CURFEW_VISIBILITY
    } else {
        NORMAL_VISIBILITY
    }
}

pub fn series_2019() -> TimeSeries {
    TimeSeries::from_hours((0..HOURS_2019).step_by(STEP_2019), &VISIBILITY_2019)
}

pub fn series_2022() -> TimeSeries {
    TimeSeries::synthesize(0..HOURS_2022, curfew_visibility)
}

fn panel(title: &str, x_label: &str, y_label: &str, series: TimeSeries, fill: u32, stroke: u32, width: f32) -> Chart {
    let mut chart = Chart::new().with_title(title, 12.0);
    chart.label_size = Some(AXIS_LABEL_SIZE);
    chart.add_series(Series::area(series.points.clone()).with_color(rgb(fill)).with_alpha(0.5));
    chart.add_series(Series::line(series.points).with_color(rgb(stroke)).with_line_width(width));
    chart.add_ref_line(RefLine::horizontal(50.0, rgb(GRAY)).dotted().with_alpha(0.5));
    chart.autoscale_x(0.05);
    chart.x_axis.label = x_label.into();
    chart.y_axis = Axis::new(y_label, 0.0, 110.0);
    chart
}

pub fn build(theme: &Theme) -> Result<Figure> {
    let left = panel(
        "2019: Total BGP Withdrawal\n\"Visible, crude, complete\"",
        "Hours from Nov 16",
        "BGP Visibility (%)",
        series_2019(),
        RED,
        DARK_RED,
        2.0,
    );
    let right = panel(
        "2022: Daily \"Digital Curfew\"\n\"Stealth, targeted, recurring\"",
        "Hours from Sep 21",
        "Mobile Network Visibility (%)",
        series_2022(),
        PURPLE,
        DARK_PURPLE,
        0.5,
    );

    let mut fig = Figure::new(14.0, 6.0)
        .with_title("Evolution of Iran Shutdown Tactics: 2019 vs 2022", 14.0)
        .with_dpi(DPI)
        .with_theme(*theme);
    fig.add_panel(left);
    fig.add_panel(right);
    Ok(fig)
}
