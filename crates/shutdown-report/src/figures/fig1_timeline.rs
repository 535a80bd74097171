// File: crates/shutdown-report/src/figures/fig1_timeline.rs
// Summary: Figure 1, BGP visibility through the November 2019 shutdown (IODA/OONI).

use anyhow::Result;
use chart_core::{rgb, Annotation, Axis, Chart, Figure, Legend, LegendLoc, Marker, RefLine, Series, Theme, TickFormat};

use super::DPI;
use crate::data::{utc, TimeSeries};
use crate::palette::{GREEN, NAVY, RED};

pub const FILE_NAME: &str = "fig1_nov2019_timeline.png";

/// (day of November 2019, hour, minute, BGP visibility % of normal), UTC.
pub const VISIBILITY: [(u32, u32, u32, f64); 14] = [
    (16, 12, 0, 100.0), // before
    (16, 14, 0, 67.0),  // first drop, -33 %
    (16, 17, 0, 40.0),  // Shatel
    (16, 18, 0, 25.0),  // ParsOnline
    (16, 20, 0, 8.0),   // full shutdown
    (17, 0, 0, 5.0),
    (17, 19, 0, 15.0), // partial return, 8 provinces
    (18, 0, 0, 10.0),
    (19, 0, 0, 7.0),
    (20, 0, 0, 5.0),
    (21, 9, 0, 20.0), // recovery starts
    (21, 18, 0, 45.0),
    (22, 12, 0, 70.0),
    (23, 10, 50, 90.0), // significant restoration
];

/// (day, hour, value, text) of the arrowed call-outs.
pub const CALLOUTS: [(u32, u32, f64, &str); 4] = [
    (16, 14, 67.0, "First drop\n-33% BGP\n(~15k /24s)"),
    (16, 17, 40.0, "Shatel\ndrops"),
    (20, 0, 5.0, "5% of normal"),
    (21, 9, 20.0, "Recovery\nbegins"),
];

/// Vertical offset of call-out text above its point.
const CALLOUT_LIFT: f64 = 15.0;

pub fn series() -> Result<TimeSeries> {
    let points = VISIBILITY
        .iter()
        .map(|&(d, h, m, v)| Ok((utc(2019, 11, d, h, m)?, v)))
        .collect::<Result<Vec<_>>>()?;
    Ok(TimeSeries::from_datetimes(&points))
}

pub fn build(theme: &Theme) -> Result<Figure> {
    let series = series()?;

    let mut chart = Chart::new()
        .with_title("November 2019 Iran Internet Shutdown - BGP Visibility\n(Data: OONI/IODA)", 14.0);
    chart.label_size = Some(12.0);
    chart.add_series(Series::area(series.points.clone()).with_color(rgb(RED)).with_alpha(0.3));
    chart.add_series(
        Series::line(series.points)
            .with_color(rgb(RED))
            .with_line_width(2.0)
            .with_marker(Marker::Circle(8.0)),
    );

    for (d, h, v, text) in CALLOUTS {
        let x = chart_core::day_number(utc(2019, 11, d, h, 0)?);
        chart.annotate(Annotation::arrow(text, (x, v), (x, v + CALLOUT_LIFT), rgb(NAVY)).with_size(9.0));
    }

    chart.add_ref_line(RefLine::horizontal(100.0, rgb(GREEN)).dashed().with_alpha(0.5).with_label("Normal"));
    chart.autoscale_axes(0.05);
    chart.x_axis.label = "Date (November 2019)".into();
    chart.x_axis.format = TickFormat::Date("%b %d\n%H:%M".into());
    chart.y_axis = Axis::new("BGP Visibility (% of normal)", 0.0, 110.0);
    chart.set_legend(Legend::new(LegendLoc::UpperCenter));

    Ok(Figure::single(chart, 14.0, 6.0).with_dpi(DPI).with_theme(*theme))
}
