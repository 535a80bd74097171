// File: crates/shutdown-report/tests/figures.rs
// Purpose: Dataset rules and per-figure element counts, checked on the built models.

use chart_core::{LegendLoc, SeriesType};
use shutdown_report::data::AsnCategory;
use shutdown_report::figures::{
    fig1_timeline, fig2_per_asn, fig3_curfew, fig4_comparison, fig5_architecture, fig6_prefixes,
};
use shutdown_report::style;

#[test]
fn clock_labels_truncate_minutes() {
    assert_eq!(fig2_per_asn::clock_label(14.5), "14:30");
    assert_eq!(fig2_per_asn::clock_label(17.0), "17:00");
    assert_eq!(fig2_per_asn::clock_label(16.5), "16:30");
    assert_eq!(fig2_per_asn::clock_label(9.99), "09:59");
}

#[test]
fn curfew_rule_boundaries() {
    use fig4_comparison::curfew_visibility;
    assert_eq!(curfew_visibility(12), 20.0);
    assert_eq!(curfew_visibility(20), 20.0);
    assert_eq!(curfew_visibility(11), 100.0);
    assert_eq!(curfew_visibility(21), 100.0);
    // same window on later days
    assert_eq!(curfew_visibility(24 * 5 + 12), 20.0);
    assert_eq!(curfew_visibility(24 * 5 + 21), 100.0);
}

#[test]
fn synthesized_2022_series_follows_rule() {
    let series = fig4_comparison::series_2022();
    assert_eq!(series.len(), 312);
    for &(h, v) in &series.points {
        let expected = if (12..=20).contains(&((h as u32) % 24)) { 20.0 } else { 100.0 };
        assert_eq!(v, expected, "hour {h}");
    }
}

#[test]
fn series_2019_is_cut_to_the_week() {
    let series = fig4_comparison::series_2019();
    assert_eq!(series.len(), 42);
    assert_eq!(series.points.last().copied(), Some((164.0, 100.0)));
    assert_eq!(series.values().take(4).collect::<Vec<_>>(), vec![100.0, 100.0, 100.0, 67.0]);
}

#[test]
fn fig1_plots_fourteen_points_with_four_callouts() {
    let series = fig1_timeline::series().expect("valid timestamps");
    assert_eq!(series.len(), 14);
    assert!(series.points.windows(2).all(|w| w[0].0 < w[1].0));

    let fig = fig1_timeline::build(&style()).expect("build fig1");
    let chart = &fig.panels[0];
    assert_eq!(chart.annotations.len(), 4);
    assert!(chart.annotations.iter().all(|a| a.target.is_some()));
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (0.0, 110.0));
    assert_eq!(chart.ref_lines.len(), 1);
    assert_eq!(chart.ref_lines[0].value, 100.0);
    assert_eq!(fig.pixel_size(), (2800, 1200));
}

#[test]
fn fig2_has_six_bars_and_two_group_markers() {
    let fig = fig2_per_asn::build(&style()).expect("build fig2");
    let chart = &fig.panels[0];
    assert_eq!(chart.bar_count(), 6);
    assert_eq!(chart.ref_lines.iter().map(|l| l.value).collect::<Vec<_>>(), vec![14.0, 17.0]);
    let labels: Vec<&str> = chart.annotations.iter().map(|a| a.text.as_str()).collect();
    assert_eq!(labels[1], "14:30 UTC");
    assert_eq!(labels[3], "17:00 UTC");
    assert_eq!(chart.x_axis.min, 0.0);
    assert_eq!(chart.legend_entries().len(), 2);
}

#[test]
fn fig3_draws_one_window_per_day() {
    let fig = fig3_curfew::build(&style()).expect("build fig3");
    let chart = &fig.panels[0];
    assert_eq!(chart.span_count(), 13);
    let windows = fig3_curfew::windows();
    let (start, width) = windows.intervals[0];
    assert!((start - 0.6).abs() < 1e-12 && (width - 0.8).abs() < 1e-12);
    assert_eq!(windows.band, (12.5, 8.0));

    let labels = fig3_curfew::day_labels().expect("valid dates");
    assert_eq!(labels.len(), 13);
    assert_eq!(labels[0].1, "Sep 20");
    assert_eq!(labels[10].1, "Sep 30");
    assert_eq!(labels[11].1, "Oct 1");
    assert_eq!(fig.pixel_size(), (2800, 1000));
}

#[test]
fn fig4_has_two_panels() {
    let fig = fig4_comparison::build(&style()).expect("build fig4");
    assert_eq!(fig.panels.len(), 2);
    assert!(fig.title.is_some());
    for panel in &fig.panels {
        assert_eq!(panel.series.len(), 2);
        assert_eq!(panel.ref_lines[0].value, 50.0);
        assert_eq!(panel.label_size, Some(11.0));
        assert_eq!(panel.title_size, Some(12.0));
    }
}

#[test]
fn fig5_tiers_have_four_and_five_boxes() {
    assert_eq!(fig5_architecture::tier2().len(), 4);
    assert_eq!(fig5_architecture::tier3().len(), 5);

    let fig = fig5_architecture::build(&style()).expect("build fig5");
    let chart = &fig.panels[0];
    assert!(!chart.frame);
    // upstreams + gateway + 4 backbone + 5 ISPs + summary
    assert_eq!(chart.boxes().count(), 12);
    let tier2_fill = fig5_architecture::tier2()[0].fill;
    let tier3_fill = fig5_architecture::tier3()[0].fill;
    assert_eq!(chart.boxes().filter(|b| b.fill == tier2_fill).count(), 4);
    assert_eq!(chart.boxes().filter(|b| b.fill == tier3_fill).count(), 5);
    // one link per backbone box plus the upstream arrow
    assert_eq!(chart.shapes.len() - 12, 5);
    assert_eq!(chart.annotations.len(), 12);
}

#[test]
fn fig5_backbone_links_meet_at_gateway() {
    for node in fig5_architecture::tier2() {
        assert_eq!(node.connects_to, vec![(6.0, 7.5)]);
        let (_, top) = node.top_center();
        assert!((top - 6.1).abs() < 1e-9);
    }
}

#[test]
fn fig6_renders_nine_bars_colored_by_category() {
    let fig = fig6_prefixes::build(&style()).expect("build fig6");
    let chart = &fig.panels[0];
    assert_eq!(chart.bar_count(), 9);
    let bars = &chart.series.iter().find(|s| s.series_type == SeriesType::HorizontalBar).expect("bar series").bars;
    assert_eq!(bars[0].value, 1236.0);
    assert_eq!(bars[0].color, AsnCategory::Government.color());
    assert_eq!(bars[2].color, AsnCategory::Backbone.color());
    assert_eq!(bars[1].color, AsnCategory::IspMobile.color());
    assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 1400.0));

    let legend = chart.legend.as_ref().expect("legend");
    assert_eq!(legend.loc, LegendLoc::LowerRight);
    let labels: Vec<String> = chart.legend_entries().into_iter().map(|e| e.label).collect();
    assert_eq!(labels, ["Government/TIC", "Backbone", "ISP/Mobile"]);
}
