// File: crates/shutdown-report/src/figures/fig6_prefixes.rs
// Summary: Figure 6, announced prefixes per major Iranian ASN (RIPEstat, Jan 2024).

use anyhow::Result;
use chart_core::{Annotation, Axis, Chart, Color, Figure, HAlign, Legend, LegendEntry, LegendLoc, Series, Theme, VAlign};

use super::DPI;
use crate::data::{AsnCategory, CategoricalSeries, CategoryEntry};

pub const FILE_NAME: &str = "fig6_prefix_counts.png";

/// (ASN label, announced prefixes, category), largest first.
pub const PREFIXES: [(&str, u32, AsnCategory); 9] = [
    ("AS58224\n(TIC)", 1236, AsnCategory::Government),
    ("AS197207\n(MCI)", 905, AsnCategory::IspMobile),
    ("AS42337\n(Respina)", 725, AsnCategory::Backbone),
    ("AS44244\n(Irancell)", 461, AsnCategory::IspMobile),
    ("AS43754\n(Asiatech)", 322, AsnCategory::IspMobile),
    ("AS25184\n(Afranet)", 232, AsnCategory::IspMobile),
    ("AS31549\n(Shatel)", 185, AsnCategory::IspMobile),
    ("AS12880\n(DCI)", 75, AsnCategory::Backbone),
    ("AS49666\n(TIC-GW)", 29, AsnCategory::Government),
];

const X_MAX: f64 = 1400.0;
/// Gap between a bar's end and its count label, in prefixes.
const LABEL_OFFSET: f64 = 20.0;

pub fn entities() -> CategoricalSeries {
    CategoricalSeries::new(
        PREFIXES
            .iter()
            .map(|&(label, count, category)| CategoryEntry {
                label: label.to_string(),
                value: f64::from(count),
                color: category.color(),
            })
            .collect(),
    )
}

pub fn build(theme: &Theme) -> Result<Figure> {
    let entities = entities();

    let mut chart = Chart::new()
        .with_title("Major Iranian ASNs - Current Prefix Announcements\n(Data: RIPEstat, Jan 2024)", 13.0);
    chart.label_size = Some(12.0);
    chart.add_series(Series::horizontal_bars(&entities.values(), &entities.colors()).with_edge(Color::WHITE));

    for (row, &(_, count, _)) in PREFIXES.iter().enumerate() {
        chart.annotate(
            Annotation::text(count.to_string(), (f64::from(count) + LABEL_OFFSET, row as f64))
                .with_size(10.0)
                .bold()
                .aligned(HAlign::Left, VAlign::Center),
        );
    }

    chart.x_axis = Axis::new("Number of Announced Prefixes", 0.0, X_MAX);
    chart.y_axis = Axis::categories("", &entities.labels());
    let handles = AsnCategory::ALL.iter().map(|c| LegendEntry::patch(c.label(), c.color())).collect();
    chart.set_legend(Legend::with_handles(LegendLoc::LowerRight, handles));

    Ok(Figure::single(chart, 10.0, 6.0).with_dpi(DPI).with_theme(*theme))
}
