// File: crates/chart-core/tests/figure.rs
// Purpose: Multi-panel figures and diagram shapes render to correctly sized PNGs.

use chart_core::{rgb, Annotation, Axis, Chart, ChartError, Figure, HAlign, RoundedBox, Segment, Series, VAlign};

const WHITE: [u8; 4] = [255, 255, 255, 255];

/// Non-background pixels in the rightmost `cols` columns.
fn right_edge_ink(fig: &Figure, cols: usize) -> usize {
    let (px, w, h, stride) = fig.render_to_rgba8().expect("render figure");
    let w = w as usize;
    (0..h as usize)
        .flat_map(|y| (w - cols..w).map(move |x| y * stride + x * 4))
        .filter(|&i| px[i..i + 4] != WHITE)
        .count()
}

fn panel(values: Vec<(f64, f64)>) -> Chart {
    let mut chart = Chart::new().with_title("panel", 10.0);
    chart.add_series(Series::area(values.clone()).with_alpha(0.5));
    chart.add_series(Series::line(values));
    chart.autoscale_axes(0.05);
    chart
}

#[test]
fn two_panels_share_one_page() {
    let mut fig = Figure::new(6.0, 3.0).with_title("Two panels", 12.0).with_dpi(100.0);
    fig.add_panel(panel(vec![(0.0, 1.0), (1.0, 2.0), (2.0, 1.5)]));
    fig.add_panel(panel(vec![(0.0, 3.0), (1.0, 1.0)]));

    assert_eq!(fig.pixel_size(), (600, 300));
    let bytes = fig.render_to_png_bytes().expect("render figure");
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (600, 300));
    // white page corner
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn diagram_without_axes() {
    let mut chart = Chart::new();
    chart.hide_axes();
    chart.x_axis = Axis::new("", 0.0, 12.0);
    chart.y_axis = Axis::new("", 0.0, 12.0);
    chart.add_shape(RoundedBox::new(4.0, 10.0, 4.0, 1.0).with_colors(rgb(0x3498db), rgb(0x2980b9)));
    chart.add_shape(RoundedBox::new(3.5, 7.5, 5.0, 1.2).with_colors(rgb(0xe74c3c), rgb(0xc0392b)).with_edge_width(3.0));
    chart.add_shape(Segment::new((6.0, 10.0), (6.0, 8.7), rgb(0x2c3e50)).with_arrow());
    chart.annotate(Annotation::text("gateway", (6.0, 8.1)).aligned(HAlign::Center, VAlign::Center));

    assert_eq!(chart.boxes().count(), 2);
    let fig = Figure::single(chart, 3.0, 3.0).with_dpi(100.0);
    let out = std::path::PathBuf::from("target/test_out/diagram.png");
    fig.render_to_png(&out).expect("render diagram");
    assert!(std::fs::metadata(&out).expect("output exists").len() > 0);
}

#[test]
fn empty_figure_is_an_error() {
    let fig = Figure::new(2.0, 2.0);
    assert!(matches!(fig.render_to_png_bytes(), Err(ChartError::EmptyFigure)));
}

#[test]
fn bar_labels_past_the_data_stay_on_page() {
    let values = [14.0, 18.0];
    let mut chart = Chart::new().with_title("labels", 12.0);
    chart.add_series(Series::horizontal_bars(&values, &[rgb(0xe74c3c), rgb(0x3498db)]));
    for (row, v) in values.iter().enumerate() {
        chart.annotate(
            Annotation::text(format!("{v:.0}:00 UTC, last drop"), (v + 0.3, row as f64))
                .aligned(HAlign::Left, VAlign::Center),
        );
    }
    chart.autoscale_x(0.05);
    chart.y_axis = Axis::categories("", &["first", "second"]);

    let fig = Figure::single(chart, 4.0, 2.0).with_dpi(100.0);
    assert_eq!(right_edge_ink(&fig, 3), 0);
}

#[test]
fn boxes_past_the_range_stay_on_page() {
    let mut chart = Chart::new();
    chart.hide_axes();
    chart.x_axis = Axis::new("", 0.0, 12.0);
    chart.y_axis = Axis::new("", 0.0, 12.0);
    // padded right edge at 12.33
    chart.add_shape(RoundedBox::new(10.7, 2.5, 1.6, 1.0).with_pad(0.03).with_colors(rgb(0x27ae60), rgb(0x1e8449)).with_edge_width(2.0));

    let fig = Figure::single(chart, 3.0, 3.0).with_dpi(100.0);
    assert_eq!(right_edge_ink(&fig, 3), 0);
}
