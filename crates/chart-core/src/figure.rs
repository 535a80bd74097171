// File: crates/chart-core/src/figure.rs
// Summary: A page of one or more chart panels side by side, with an optional super-title.

use std::path::Path;

use crate::chart::Chart;
use crate::error::{ChartError, Result};
use crate::options::RenderOptions;
use crate::raster::{encode_png, rasterize, write_file, Rgba8};
use crate::text::{HAlign, LabelStyle, VAlign};
use crate::theme::Theme;

/// Margin around the page, in points.
const PAGE_PAD: f32 = 8.0;
/// Horizontal gap between panels.
const PANEL_GAP: f32 = 24.0;

pub struct Figure {
    pub panels: Vec<Chart>,
    pub title: Option<String>,
    /// Super-title size in points; `None` uses base size + 3.
    pub title_size: Option<f32>,
    pub options: RenderOptions,
}

impl Figure {
    /// Empty figure of `width_in` x `height_in` inches at the default resolution.
    pub fn new(width_in: f32, height_in: f32) -> Self {
        Self {
            panels: Vec::new(),
            title: None,
            title_size: None,
            options: RenderOptions { width_in, height_in, ..RenderOptions::default() },
        }
    }

    /// Figure holding a single chart.
    pub fn single(chart: Chart, width_in: f32, height_in: f32) -> Self {
        let mut fig = Self::new(width_in, height_in);
        fig.add_panel(chart);
        fig
    }

    pub fn add_panel(&mut self, chart: Chart) {
        self.panels.push(chart);
    }

    pub fn with_title(mut self, title: impl Into<String>, size: f32) -> Self {
        self.title = Some(title.into());
        self.title_size = Some(size);
        self
    }

    pub fn with_dpi(mut self, dpi: f32) -> Self {
        self.options.dpi = dpi;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.options.theme = theme;
        self
    }

    /// Output size in pixels.
    pub fn pixel_size(&self) -> (i32, i32) {
        self.options.pixel_size()
    }

    pub fn render_to_rgba8(&self) -> Result<Rgba8> {
        if self.panels.is_empty() {
            return Err(ChartError::EmptyFigure);
        }
        let opts = &self.options;
        rasterize(opts, |canvas, shaper, page| {
            let mut area = page.inset(PAGE_PAD, PAGE_PAD, PAGE_PAD, PAGE_PAD);
            if let (Some(title), true) = (&self.title, opts.draw_labels) {
                let size = self.title_size.unwrap_or(opts.theme.font_size + 3.0);
                let style = LabelStyle::new(size, opts.theme.axis_label).bold();
                let (_, h) = shaper.measure(title, &style);
                shaper.draw(canvas, title, area.center_x(), area.top, &style, HAlign::Center, VAlign::Top);
                area = area.inset(0.0, h + PANEL_GAP * 0.5, 0.0, 0.0);
            }
            for (chart, rect) in self.panels.iter().zip(area.columns(self.panels.len(), PANEL_GAP)) {
                chart.draw(canvas, shaper, rect, opts);
            }
        })
    }

    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8()?;
        encode_png(pixels, w, h)
    }

    pub fn render_to_png(&self, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes()?;
        write_file(output_png_path.as_ref(), &bytes)
    }
}
