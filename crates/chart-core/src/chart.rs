// File: crates/chart-core/src/chart.rs
// Summary: Chart (one axes panel) model, measured layout and the Skia paint pipeline.

use std::path::Path;

use skia_safe as skia;

use crate::error::Result;
use crate::geometry::RectF;
use crate::legend::{Legend, LegendEntry, LegendLoc, LegendSwatch};
use crate::options::RenderOptions;
use crate::overlay::{Annotation, Band, Orientation, RefLine};
use crate::raster::{encode_png, rasterize, write_file, Rgba8};
use crate::scale::LinearScale;
use crate::series::{LineDash, Marker, Series, SeriesType, BASELINE};
use crate::shape::{RoundedBox, Segment, Shape};
use crate::text::{line_count, rotated_extent, HAlign, LabelStyle, TextShaper, VAlign};
use crate::theme::{with_alpha, Theme};
use crate::view::ViewState;
use crate::Axis;

/// Outer padding around a panel, in points.
const PAD: f32 = 6.0;
/// Gap between tick labels and the plot edge.
const TICK_PAD: f32 = 3.5;
/// Gap between tick labels and the axis label, and between title and plot.
const LABEL_GAP: f32 = 5.0;

pub struct Chart {
    pub title: Option<String>,
    /// Title size in points; `None` uses base size + 2.
    pub title_size: Option<f32>,
    /// Axis label size in points; `None` uses base size + 1.
    pub label_size: Option<f32>,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub ref_lines: Vec<RefLine>,
    pub bands: Vec<Band>,
    pub annotations: Vec<Annotation>,
    pub shapes: Vec<Shape>,
    pub legend: Option<Legend>,
    /// Grid, spines, ticks and axis labels. Off for diagrams.
    pub frame: bool,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            title_size: None,
            label_size: None,
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            ref_lines: Vec::new(),
            bands: Vec::new(),
            annotations: Vec::new(),
            shapes: Vec::new(),
            legend: None,
            frame: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>, size: f32) -> Self {
        self.title = Some(title.into());
        self.title_size = Some(size);
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn add_ref_line(&mut self, line: RefLine) {
        self.ref_lines.push(line);
    }

    pub fn add_band(&mut self, band: Band) {
        self.bands.push(band);
    }

    pub fn annotate(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    pub fn add_shape(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    pub fn set_legend(&mut self, legend: Legend) {
        self.legend = Some(legend);
    }

    /// Hide grid, spines, ticks and axis labels.
    pub fn hide_axes(&mut self) {
        self.frame = false;
    }

    /// Fit both axes to the data, widening each side by `margin` times the span.
    /// Bar charts keep their value axis pinned at the baseline.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let view = ViewState::from_chart(self).with_margin(margin, margin);
        let view = self.pin_to_bar_baseline(view);
        view.apply_to_chart(self);
    }

    /// Fit only the x axis.
    pub fn autoscale_x(&mut self, margin: f64) {
        let view = self.pin_to_bar_baseline(ViewState::from_chart(self).with_margin(margin, margin));
        self.x_axis.min = view.x_min;
        self.x_axis.max = view.x_max;
    }

    fn pin_to_bar_baseline(&self, mut view: ViewState) -> ViewState {
        for s in self.series.iter().filter(|s| s.series_type == SeriesType::HorizontalBar) {
            if s.bars.iter().all(|b| b.value >= BASELINE) && view.x_min < BASELINE {
                view.x_min = BASELINE;
            }
        }
        view
    }

    /// Number of bars across all horizontal bar series.
    pub fn bar_count(&self) -> usize {
        self.series.iter().filter(|s| s.series_type == SeriesType::HorizontalBar).map(|s| s.bars.len()).sum()
    }

    /// Number of rectangles across all broken-bar series.
    pub fn span_count(&self) -> usize {
        self.series.iter().filter(|s| s.series_type == SeriesType::BrokenBar).map(|s| s.spans.len()).sum()
    }

    /// Rounded boxes in drawing order.
    pub fn boxes(&self) -> impl Iterator<Item = &RoundedBox> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::RoundedBox(b) => Some(b),
            Shape::Segment(_) => None,
        })
    }

    /// Legend entries: labeled reference lines, then explicit extras.
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        let Some(legend) = &self.legend else { return Vec::new() };
        let mut out = Vec::new();
        if !legend.only_extra {
            for l in &self.ref_lines {
                let Some(label) = &l.label else { continue };
                out.push(LegendEntry {
                    label: label.clone(),
                    swatch: LegendSwatch::Line { color: with_alpha(l.color, l.alpha), width: l.width, dash: l.dash },
                });
            }
        }
        out.extend(legend.extra.iter().cloned());
        out
    }

    /// Render the chart alone on a page sized by `opts`, returning RGBA8 pixels.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<Rgba8> {
        rasterize(opts, |canvas, shaper, page| {
            self.draw(canvas, shaper, page.inset(PAD, PAD, PAD, PAD), opts);
        })
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        encode_png(pixels, w, h)
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_file(output_png_path.as_ref(), &bytes)
    }

    /// Paint this panel into `outer` (layout points) on `canvas`.
    pub fn draw(&self, canvas: &skia::Canvas, shaper: &TextShaper, outer: RectF, opts: &RenderOptions) {
        let theme = &opts.theme;
        let plot = if opts.draw_labels {
            self.measure_plot_rect(shaper, outer, theme)
        } else {
            let i = opts.insets;
            outer.inset(i.left, i.top, i.right, i.bottom)
        };
        let sx = LinearScale::horizontal(plot.left, plot.right, self.x_axis.min, self.x_axis.max);
        let sy = LinearScale::vertical(plot.top, plot.bottom, self.y_axis.min, self.y_axis.max);
        let x_ticks = self.x_axis.tick_marks(x_tick_target(plot.width()));
        let y_ticks = self.y_axis.tick_marks(y_tick_target(plot.height()));

        if self.frame {
            draw_grid(canvas, plot, &sx, &sy, &self.x_axis, &self.y_axis, &x_ticks, &y_ticks, theme);
            canvas.save();
            canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        }

        // Patches
        for band in &self.bands {
            draw_band(canvas, &sx, &sy, band);
        }
        for s in self.series.iter().filter(|s| s.is_patch()) {
            match s.series_type {
                SeriesType::Area => draw_area_series(canvas, &sx, &sy, s),
                SeriesType::HorizontalBar => draw_bar_series(canvas, &sx, &sy, s),
                SeriesType::BrokenBar => draw_broken_bar_series(canvas, &sx, &sy, s),
                SeriesType::Line => {}
            }
        }
        for b in self.boxes() {
            draw_rounded_box(canvas, &sx, &sy, b);
        }

        // Lines
        for s in self.series.iter().filter(|s| s.series_type == SeriesType::Line) {
            draw_line_series(canvas, &sx, &sy, s);
        }
        for l in &self.ref_lines {
            draw_ref_line(canvas, plot, &sx, &sy, l);
        }
        for shape in &self.shapes {
            if let Shape::Segment(seg) = shape {
                draw_segment(canvas, &sx, &sy, seg);
            }
        }

        if self.frame {
            canvas.restore();
            draw_spines(canvas, plot, theme);
        }

        // Text
        for a in &self.annotations {
            draw_annotation(canvas, shaper, &sx, &sy, a, theme);
        }
        if opts.draw_labels {
            if self.frame {
                self.draw_axis_labels(canvas, shaper, plot, &sx, &sy, &x_ticks, &y_ticks, theme);
            }
            if let Some(title) = &self.title {
                let style = LabelStyle::new(self.title_size(theme), theme.axis_label).bold();
                shaper.draw(canvas, title, plot.center_x(), plot.top - LABEL_GAP, &style, HAlign::Center, VAlign::Bottom);
            }
            let entries = self.legend_entries();
            if let (Some(legend), false) = (&self.legend, entries.is_empty()) {
                draw_legend(canvas, shaper, plot, legend.loc, &entries, theme);
            }
        }
    }

    fn title_size(&self, theme: &Theme) -> f32 {
        self.title_size.unwrap_or(theme.font_size + 2.0)
    }

    fn label_size(&self, theme: &Theme) -> f32 {
        self.label_size.unwrap_or(theme.font_size + 1.0)
    }

    /// Tight layout: reserve room for the title, tick labels, axis labels and
    /// anything drawn past the right end of the x range.
    fn measure_plot_rect(&self, shaper: &TextShaper, outer: RectF, theme: &Theme) -> RectF {
        let mut top = 0.0f32;
        if let Some(title) = &self.title {
            let style = LabelStyle::new(self.title_size(theme), theme.axis_label).bold();
            top += shaper.measure(title, &style).1 + LABEL_GAP * 2.0;
        }
        if !self.frame {
            return self.fit_right_edge(shaper, outer.inset(0.0, top, 0.0, 0.0), outer.right, theme);
        }

        let tick_style = LabelStyle::new(theme.tick_size(), theme.tick_label);
        let label_style = LabelStyle::new(self.label_size(theme), theme.axis_label);

        // Tick counts depend on the plot size; estimate it from the outer rect.
        let x_ticks = self.x_axis.tick_marks(x_tick_target(outer.width() * 0.9));
        let y_ticks = self.y_axis.tick_marks(y_tick_target(outer.height() * 0.8));

        let y_tick_w = y_ticks
            .iter()
            .map(|(_, t)| shaper.measure(t, &tick_style).0)
            .fold(0.0f32, f32::max);
        let mut x_tick_h = 0.0f32;
        let mut x_overhang = 0.0f32;
        for (_, t) in &x_ticks {
            let (w, h) = shaper.measure(t, &tick_style);
            let (rw, rh) = rotated_extent(w, h, self.x_axis.tick_rotation);
            x_tick_h = x_tick_h.max(rh);
            if self.x_axis.tick_rotation == 0.0 {
                x_overhang = x_overhang.max(rw * 0.5);
            }
        }

        let x_label_h = if self.x_axis.label.is_empty() { 0.0 } else { shaper.measure(&self.x_axis.label, &label_style).1 + LABEL_GAP };
        let y_label_h = if self.y_axis.label.is_empty() { 0.0 } else { shaper.measure(&self.y_axis.label, &label_style).1 + LABEL_GAP };

        let left = y_label_h + y_tick_w + TICK_PAD;
        let bottom = x_label_h + x_tick_h + TICK_PAD;
        // half a tick label of headroom for the topmost y tick
        let top = top.max(tick_style.size * 0.6);
        self.fit_right_edge(shaper, outer.inset(left, top, x_overhang, bottom), outer.right, theme)
    }

    /// Narrow `plot` until annotation text and diagram shapes near the x maximum
    /// end at or before `limit`.
    fn fit_right_edge(&self, shaper: &TextShaper, plot: RectF, limit: f32, theme: &Theme) -> RectF {
        let span = self.x_axis.max - self.x_axis.min;
        if span.abs() < 1e-12 {
            return plot;
        }
        let fraction = |x: f64| ((x - self.x_axis.min) / span) as f32;

        // (position as a fraction of the plot width, extent past it in points)
        let mut reach: Vec<(f32, f32)> = Vec::new();
        for a in &self.annotations {
            let (w, _) = shaper.measure(&a.text, &annotation_style(a, theme));
            let past = match a.h_align {
                HAlign::Left => w,
                HAlign::Center => w * 0.5,
                HAlign::Right => 0.0,
            };
            reach.push((fraction(a.at.0), past));
            if let Some(target) = a.target {
                reach.push((fraction(target.0), 0.0));
            }
        }
        for shape in &self.shapes {
            match shape {
                Shape::RoundedBox(b) => reach.push((fraction(b.outer_bounds().2), b.edge_width * 0.5)),
                Shape::Segment(s) => reach.push((fraction(s.from.0.max(s.to.0)), s.width * 0.5)),
            }
        }

        let width = reach
            .iter()
            .filter(|(f, _)| *f > 0.0)
            .map(|&(f, past)| (limit - plot.left - past) / f)
            .fold(plot.width(), f32::min);
        RectF::from_ltrb(plot.left, plot.top, plot.left + width.max(1.0), plot.bottom)
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_axis_labels(
        &self,
        canvas: &skia::Canvas,
        shaper: &TextShaper,
        plot: RectF,
        sx: &LinearScale,
        sy: &LinearScale,
        x_ticks: &[(f64, String)],
        y_ticks: &[(f64, String)],
        theme: &Theme,
    ) {
        let tick_style = LabelStyle::new(theme.tick_size(), theme.tick_label);
        let label_style = LabelStyle::new(self.label_size(theme), theme.axis_label);

        let rotation = self.x_axis.tick_rotation;
        let x_align = if rotation == 0.0 { HAlign::Center } else { HAlign::Right };
        let mut x_tick_h = 0.0f32;
        for (v, t) in x_ticks {
            let (w, h) = shaper.measure(t, &tick_style);
            x_tick_h = x_tick_h.max(rotated_extent(w, h, rotation).1);
            shaper.draw_rotated(canvas, t, sx.to_px(*v), plot.bottom + TICK_PAD, &tick_style, x_align, VAlign::Top, rotation);
        }

        let mut y_tick_w = 0.0f32;
        for (v, t) in y_ticks {
            y_tick_w = y_tick_w.max(shaper.measure(t, &tick_style).0);
            shaper.draw(canvas, t, plot.left - TICK_PAD, sy.to_px(*v), &tick_style, HAlign::Right, VAlign::Center);
        }

        if !self.x_axis.label.is_empty() {
            let y = plot.bottom + TICK_PAD + x_tick_h + LABEL_GAP;
            shaper.draw(canvas, &self.x_axis.label, plot.center_x(), y, &label_style, HAlign::Center, VAlign::Top);
        }
        if !self.y_axis.label.is_empty() {
            let (_, h) = shaper.measure(&self.y_axis.label, &label_style);
            let x = plot.left - TICK_PAD - y_tick_w - LABEL_GAP - h * 0.5;
            let y = (plot.top + plot.bottom) * 0.5;
            shaper.draw_rotated(canvas, &self.y_axis.label, x, y, &label_style, HAlign::Center, VAlign::Center, 90.0);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn x_tick_target(len: f32) -> usize {
    ((len / 70.0).round() as usize).clamp(3, 10)
}

fn y_tick_target(len: f32) -> usize {
    ((len / 40.0).round() as usize).clamp(3, 8)
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn stroke_paint(color: skia::Color, width: f32, dash: LineDash) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_stroke_join(skia::paint::Join::Round);
    paint.set_color(color);
    if let Some(intervals) = dash.intervals(width) {
        paint.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
    }
    paint
}

#[allow(clippy::too_many_arguments)]
fn draw_grid(
    canvas: &skia::Canvas,
    plot: RectF,
    sx: &LinearScale,
    sy: &LinearScale,
    x_axis: &Axis,
    y_axis: &Axis,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
    theme: &Theme,
) {
    let paint = stroke_paint(theme.grid, theme.grid_width, LineDash::Solid);
    if x_axis.grid {
        for (v, _) in x_ticks {
            let x = sx.to_px(*v);
            canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
        }
    }
    if y_axis.grid {
        for (v, _) in y_ticks {
            let y = sy.to_px(*v);
            canvas.draw_line((plot.left, y), (plot.right, y), &paint);
        }
    }
}

fn draw_spines(canvas: &skia::Canvas, plot: RectF, theme: &Theme) {
    let paint = stroke_paint(theme.axis_line, 1.0, LineDash::Solid);
    canvas.draw_rect(plot.to_skia(), &paint);
}

fn draw_band(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, band: &Band) {
    let (l, r) = (sx.fraction_px(band.x_from), sx.fraction_px(band.x_to));
    let (a, b) = (sy.to_px(band.y0), sy.to_px(band.y1));
    let rect = skia::Rect::from_ltrb(l, a.min(b), r, a.max(b));
    canvas.draw_rect(rect, &fill_paint(with_alpha(band.color, band.alpha)));
}

fn draw_area_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }
    let base = sy.to_px(BASELINE);
    let mut path = skia::Path::new();
    path.move_to((sx.to_px(data[0].0), base));
    for &(x, y) in data {
        path.line_to((sx.to_px(x), sy.to_px(y)));
    }
    path.line_to((sx.to_px(data[data.len() - 1].0), base));
    path.close();
    canvas.draw_path(&path, &fill_paint(with_alpha(series.style.color, series.style.alpha)));
}

fn draw_line_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series) {
    let data = &series.data_xy;
    if data.is_empty() {
        return;
    }
    let style = &series.style;
    let color = with_alpha(style.color, style.alpha);

    if data.len() >= 2 {
        let mut path = skia::Path::new();
        let (x0, y0) = data[0];
        path.move_to((sx.to_px(x0), sy.to_px(y0)));
        for &(x, y) in data.iter().skip(1) {
            path.line_to((sx.to_px(x), sy.to_px(y)));
        }
        canvas.draw_path(&path, &stroke_paint(color, style.line_width, style.dash));
    }

    if let Marker::Circle(size) = style.marker {
        let paint = fill_paint(color);
        for &(x, y) in data {
            canvas.draw_circle((sx.to_px(x), sy.to_px(y)), size * 0.5, &paint);
        }
    }
}

fn draw_bar_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series) {
    let half = series.style.bar_height * 0.5;
    let base = sx.to_px(BASELINE);
    let edge = series.style.edge.map(|c| stroke_paint(c, 1.0, LineDash::Solid));
    for bar in &series.bars {
        let end = sx.to_px(bar.value);
        let (a, b) = (sy.to_px(bar.row - half), sy.to_px(bar.row + half));
        let rect = skia::Rect::from_ltrb(base.min(end), a.min(b), base.max(end), a.max(b));
        canvas.draw_rect(rect, &fill_paint(with_alpha(bar.color, series.style.alpha)));
        if let Some(edge) = &edge {
            canvas.draw_rect(rect, edge);
        }
    }
}

fn draw_broken_bar_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series) {
    let paint = fill_paint(with_alpha(series.style.color, series.style.alpha));
    for sp in &series.spans {
        let (l, r) = (sx.to_px(sp.x), sx.to_px(sp.x + sp.width));
        let (a, b) = (sy.to_px(sp.y), sy.to_px(sp.y + sp.height));
        canvas.draw_rect(skia::Rect::from_ltrb(l.min(r), a.min(b), l.max(r), a.max(b)), &paint);
    }
}

fn draw_ref_line(canvas: &skia::Canvas, plot: RectF, sx: &LinearScale, sy: &LinearScale, line: &RefLine) {
    let paint = stroke_paint(with_alpha(line.color, line.alpha), line.width, line.dash);
    match line.orientation {
        Orientation::Horizontal => {
            let y = sy.to_px(line.value);
            canvas.draw_line((plot.left, y), (plot.right, y), &paint);
        }
        Orientation::Vertical => {
            let x = sx.to_px(line.value);
            canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
        }
    }
}

fn draw_rounded_box(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, b: &RoundedBox) {
    let (x0, y0, x1, y1) = b.outer_bounds();
    let (l, r) = (sx.to_px(x0), sx.to_px(x1));
    let (t, bt) = (sy.to_px(y1), sy.to_px(y0));
    let rect = skia::Rect::from_ltrb(l.min(r), t.min(bt), l.max(r), t.max(bt));
    let (rx, ry) = (sx.len_px(b.pad), sy.len_px(b.pad));
    canvas.draw_round_rect(rect, rx, ry, &fill_paint(b.fill));
    if b.edge_width > 0.0 {
        canvas.draw_round_rect(rect, rx, ry, &stroke_paint(b.edge, b.edge_width, LineDash::Solid));
    }
}

fn draw_segment(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, seg: &Segment) {
    let from = (sx.to_px(seg.from.0), sy.to_px(seg.from.1));
    let to = (sx.to_px(seg.to.0), sy.to_px(seg.to.1));
    let paint = stroke_paint(seg.color, seg.width, LineDash::Solid);
    canvas.draw_line(from, to, &paint);
    if seg.arrow {
        draw_arrow_head(canvas, from, to, &paint);
    }
}

/// Open "->" head at `to`, pointing away from `from`.
fn draw_arrow_head(canvas: &skia::Canvas, from: (f32, f32), to: (f32, f32), paint: &skia::Paint) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let len = (dx * dx + dy * dy).sqrt();
    if len < 1e-3 {
        return;
    }
    let (ux, uy) = (dx / len, dy / len);
    let head = (paint.stroke_width() * 2.0 + 5.0).min(len);
    let spread = 0.4f32;
    for sign in [-1.0f32, 1.0] {
        let (c, s) = (spread.cos(), sign * spread.sin());
        let bx = -(ux * c - uy * s);
        let by = -(ux * s + uy * c);
        canvas.draw_line(to, (to.0 + bx * head, to.1 + by * head), paint);
    }
}

fn draw_annotation(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    sx: &LinearScale,
    sy: &LinearScale,
    a: &Annotation,
    theme: &Theme,
) {
    let style = annotation_style(a, theme);
    let anchor = (sx.to_px(a.at.0), sy.to_px(a.at.1));

    if let Some(target) = a.target {
        let tip = (sx.to_px(target.0), sy.to_px(target.1));
        let (dx, dy) = (tip.0 - anchor.0, tip.1 - anchor.1);
        let len = (dx * dx + dy * dy).sqrt();
        if len > 4.0 {
            let (ux, uy) = (dx / len, dy / len);
            let gap = if a.text.is_empty() { 0.0 } else { 2.0 };
            let start = (anchor.0 + ux * gap, anchor.1 + uy * gap);
            let end = (tip.0 - ux * 2.0, tip.1 - uy * 2.0);
            let paint = stroke_paint(a.arrow_color, 1.0, LineDash::Solid);
            canvas.draw_line(start, end, &paint);
            draw_arrow_head(canvas, start, end, &paint);
        }
    }
    shaper.draw(canvas, &a.text, anchor.0, anchor.1, &style, a.h_align, a.v_align);
}

fn annotation_style(a: &Annotation, theme: &Theme) -> LabelStyle {
    let mut style = LabelStyle::new(a.size.unwrap_or(theme.font_size), a.color.unwrap_or(theme.axis_label));
    style.bold = a.bold;
    style
}

fn draw_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: RectF,
    loc: LegendLoc,
    entries: &[LegendEntry],
    theme: &Theme,
) {
    let style = LabelStyle::new(theme.legend_size(), theme.axis_label);
    let swatch_w = 20.0;
    let pad = 5.0;
    let row_h = style.size * 1.45;
    let text_w = entries.iter().map(|e| shaper.measure(&e.label, &style).0).fold(0.0f32, f32::max);
    let rows: f32 = entries.iter().map(|e| line_count(&e.label) as f32).sum();
    let w = pad * 2.0 + swatch_w + 6.0 + text_w;
    let h = pad * 2.0 + rows * row_h;
    let margin = 6.0;

    let (left, top) = match loc {
        LegendLoc::UpperCenter => (plot.center_x() - w * 0.5, plot.top + margin),
        LegendLoc::LowerRight => (plot.right - margin - w, plot.bottom - margin - h),
    };
    let frame = skia::Rect::from_xywh(left, top, w, h);
    canvas.draw_round_rect(frame, 3.0, 3.0, &fill_paint(theme.legend_background));
    canvas.draw_round_rect(frame, 3.0, 3.0, &stroke_paint(theme.legend_border, 0.8, LineDash::Solid));

    let mut y = top + pad;
    for e in entries {
        let lines = line_count(&e.label) as f32;
        let cy = y + row_h * lines * 0.5;
        let sx0 = left + pad;
        match &e.swatch {
            LegendSwatch::Line { color, width, dash } => {
                canvas.draw_line((sx0, cy), (sx0 + swatch_w, cy), &stroke_paint(*color, *width, *dash));
            }
            LegendSwatch::Patch { color } => {
                let sw = skia::Rect::from_xywh(sx0, cy - row_h * 0.3, swatch_w, row_h * 0.6);
                canvas.draw_rect(sw, &fill_paint(*color));
            }
        }
        shaper.draw(canvas, &e.label, sx0 + swatch_w + 6.0, cy, &style, HAlign::Left, VAlign::Center);
        y += row_h * lines;
    }
}
