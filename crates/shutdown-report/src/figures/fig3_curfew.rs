// File: crates/shutdown-report/src/figures/fig3_curfew.rs
// Summary: Figure 3, the September 2022 "digital curfew" as one shutdown window per day.

use anyhow::{anyhow, Result};
use chart_core::{rgb, Annotation, Axis, Band, Chart, Figure, HAlign, Series, Theme, Ticks, VAlign};
use chrono::{Days, NaiveDate};

use super::DPI;
use crate::data::IntervalSet;
use crate::palette::RED;

pub const FILE_NAME: &str = "fig3_sep2022_curfew.png";

pub const DAYS: u32 = 13;
/// Shutdown window, 4 PM to midnight local, in UTC hours.
pub const WINDOW_START_UTC: f64 = 12.5;
pub const WINDOW_HOURS: f64 = 8.0;
/// Width of each day's bar on the day axis.
const BAR_WIDTH: f64 = 0.8;

pub fn windows() -> IntervalSet {
    IntervalSet::daily(DAYS, BAR_WIDTH, (WINDOW_START_UTC, WINDOW_HOURS))
}

/// Calendar labels for day indices `1..=DAYS`, starting Sep 20, 2022.
pub fn day_labels() -> Result<Vec<(f64, String)>> {
    let first = NaiveDate::from_ymd_opt(2022, 9, 20).ok_or_else(|| anyhow!("invalid start date"))?;
    (0..DAYS)
        .map(|i| {
            let date = first
                .checked_add_days(Days::new(u64::from(i)))
                .ok_or_else(|| anyhow!("day {i} out of range"))?;
            Ok(((i + 1) as f64, date.format("%b %-d").to_string()))
        })
        .collect()
}

pub fn build(theme: &Theme) -> Result<Figure> {
    let windows = windows();

    let mut chart = Chart::new().with_title(
        "September 2022 \"Digital Curfew\" Pattern\nDaily shutdowns: 4:00 PM - Midnight local (~100 hours total)",
        13.0,
    );
    chart.label_size = Some(12.0);
    chart.add_series(Series::broken_bars(&windows.intervals, windows.band).with_color(rgb(RED)).with_alpha(0.8));

    chart.x_axis = Axis::new("", 0.5, DAYS as f64 + 0.5)
        .with_ticks(Ticks::Labeled(day_labels()?))
        .with_tick_rotation(45.0);
    chart.y_axis = Axis::new("Hour of Day (UTC)", 0.0, 24.0).with_ticks(Ticks::Labeled(
        [0, 6, 12, 18, 24].iter().map(|&h| (h as f64, format!("{h:02}:00"))).collect(),
    ));

    // key: a sliver of the window at the left edge, explained by the text beside it
    let window_end = WINDOW_START_UTC + WINDOW_HOURS;
    chart.add_band(Band::new(WINDOW_START_UTC, window_end, rgb(RED)).with_x_fraction(0.0, 0.05).with_alpha(0.8));
    chart.annotate(
        Annotation::text("\u{2190} Shutdown window\n   (8 hours/day)", (0.8, (WINDOW_START_UTC + window_end) * 0.5))
            .with_size(10.0)
            .aligned(HAlign::Left, VAlign::Center),
    );

    Ok(Figure::single(chart, 14.0, 5.0).with_dpi(DPI).with_theme(*theme))
}
