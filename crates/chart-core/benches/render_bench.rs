// File: crates/chart-core/benches/render_bench.rs
// Summary: Criterion benchmark for rendering a two-panel curfew comparison to PNG bytes.

use chart_core::{rgb, Axis, Chart, Figure, Series};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_panel(hours: u32) -> Chart {
    let data: Vec<(f64, f64)> = (0..hours)
        .map(|h| (h as f64, if (12..=20).contains(&(h % 24)) { 20.0 } else { 100.0 }))
        .collect();
    let mut ch = Chart::new().with_title("bench", 12.0);
    ch.add_series(Series::area(data.clone()).with_color(rgb(0x9b59b6)).with_alpha(0.5));
    ch.add_series(Series::line(data).with_color(rgb(0x8e44ad)).with_line_width(0.5));
    ch.autoscale_x(0.05);
    ch.y_axis = Axis::new("Y", 0.0, 110.0);
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &dpi in &[100.0f32, 200.0] {
        group.bench_function(format!("two_panels_{dpi}dpi"), |b| {
            let mut fig = Figure::new(14.0, 6.0).with_dpi(dpi);
            fig.add_panel(build_panel(168));
            fig.add_panel(build_panel(312));
            b.iter(|| black_box(fig.render_to_png_bytes().expect("render")));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
