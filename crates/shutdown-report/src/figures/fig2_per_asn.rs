// File: crates/shutdown-report/src/figures/fig2_per_asn.rs
// Summary: Figure 2, hour each ASN dropped off on November 16, 2019 (OONI).

use anyhow::Result;
use chart_core::{rgb, Annotation, Axis, Chart, Color, Figure, HAlign, Legend, LegendLoc, RefLine, Series, Theme, VAlign};

use super::DPI;
use crate::data::{CategoricalSeries, CategoryEntry};
use crate::palette::{BLUE, PURPLE, RED};

pub const FILE_NAME: &str = "fig2_per_asn_timing.png";

/// (ASN label, hours after Nov 16 00:00 UTC, color). Cellular first, then fixed line.
pub const DROPS: [(&str, f64, u32); 6] = [
    ("AS44244\n(Irancell)", 14.0, RED),
    ("AS197207\n(MCI)", 14.5, RED),
    ("AS57218\n(Rightel)", 15.0, RED),
    ("AS31549\n(Shatel)", 17.0, BLUE),
    ("AS16322\n(ParsOnline)", 18.0, BLUE),
    ("AS58224\n(TIC)", 16.5, PURPLE),
];

const MOBILE_START: f64 = 14.0;
const FIXED_START: f64 = 17.0;
/// Gap between a bar's end and its clock label, in hours.
const LABEL_OFFSET: f64 = 0.3;

/// `HH:MM` for a fractional hour; minutes are truncated, not rounded.
pub fn clock_label(hours: f64) -> String {
    let whole = hours.trunc();
    let minutes = ((hours - whole) * 60.0).trunc();
    format!("{:02}:{:02}", whole as i64, minutes as i64)
}

pub fn entities() -> CategoricalSeries {
    CategoricalSeries::new(
        DROPS
            .iter()
            .map(|&(label, value, color)| CategoryEntry { label: label.to_string(), value, color: rgb(color) })
            .collect(),
    )
}

pub fn build(theme: &Theme) -> Result<Figure> {
    let entities = entities();

    let mut chart = Chart::new().with_title(
        "Per-ASN Shutdown Timing - November 16, 2019\nMobile operators disconnected ~3 hours before fixed-line",
        13.0,
    );
    chart.label_size = Some(12.0);
    chart.add_series(
        Series::horizontal_bars(&entities.values(), &entities.colors())
            .with_bar_height(0.6)
            .with_edge(Color::WHITE),
    );
    chart.add_ref_line(RefLine::vertical(MOBILE_START, rgb(RED)).dashed().with_alpha(0.7).with_label("Mobile operators start"));
    chart.add_ref_line(RefLine::vertical(FIXED_START, rgb(BLUE)).dashed().with_alpha(0.7).with_label("Fixed ISPs start"));

    for (row, e) in entities.entries.iter().enumerate() {
        chart.annotate(
            Annotation::text(format!("{} UTC", clock_label(e.value)), (e.value + LABEL_OFFSET, row as f64))
                .with_size(10.0)
                .aligned(HAlign::Left, VAlign::Center),
        );
    }

    chart.autoscale_x(0.05);
    chart.x_axis.label = "Time (Hours after Nov 16, 00:00 UTC)".into();
    chart.y_axis = Axis::categories("", &entities.labels());
    chart.set_legend(Legend::new(LegendLoc::LowerRight));

    Ok(Figure::single(chart, 12.0, 6.0).with_dpi(DPI).with_theme(*theme))
}
