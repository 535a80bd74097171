// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale over mixed series types.

use chart_core::{rgb, Chart, Series, ViewState};

#[test]
fn autoscale_mixed_series() {
    let mut chart = Chart::new();

    // XY series
    chart.add_series(Series::line(vec![(0.0, 1.0), (5.0, 3.0)]));

    // Broken bars reaching further up
    chart.add_series(Series::broken_bars(&[(2.0, 1.0)], (1.5, 4.5)));

    chart.autoscale_axes(0.0);

    // X spans 0..5 from line vs 2..3 from spans => expect 0..5
    assert!(chart.x_axis.min <= 0.0 + 1e-9);
    assert!(chart.x_axis.max >= 5.0 - 1e-9);

    // Y min is the line's 1.0, max the span top 6.0
    assert!((chart.y_axis.min - 1.0).abs() < 1e-9);
    assert!((chart.y_axis.max - 6.0).abs() < 1e-9);
}

#[test]
fn bars_stay_pinned_to_baseline() {
    let mut chart = Chart::new();
    chart.add_series(Series::horizontal_bars(&[14.0, 18.0], &[rgb(0xe74c3c), rgb(0x3498db)]).with_bar_height(0.6));

    chart.autoscale_axes(0.05);

    assert_eq!(chart.x_axis.min, 0.0);
    assert!((chart.x_axis.max - 18.9).abs() < 1e-9);
    // rows 0 and 1, each +-0.3, then 5 % of the 1.6 span
    assert!((chart.y_axis.min - (-0.3 - 0.08)).abs() < 1e-9);
    assert!((chart.y_axis.max - (1.3 + 0.08)).abs() < 1e-9);
}

#[test]
fn area_includes_its_baseline() {
    let mut chart = Chart::new();
    chart.add_series(Series::area(vec![(0.0, 20.0), (1.0, 100.0)]));
    let view = ViewState::from_chart(&chart);
    assert_eq!(view.y_min, 0.0);
    assert_eq!(view.y_max, 100.0);
}

#[test]
fn empty_chart_falls_back_to_unit_square() {
    let view = ViewState::from_chart(&Chart::new());
    assert_eq!((view.x_min, view.x_max, view.y_min, view.y_max), (0.0, 1.0, 0.0, 1.0));
}
