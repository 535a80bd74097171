// File: crates/shutdown-report/src/report.rs
// Summary: Sequential report runner: build each figure, write its PNG, confirm on stdout.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::Theme;
use log::LevelFilter;

use crate::figures::{FigureJob, ALL};

/// Width of the closing banner rules.
const RULE_WIDTH: usize = 60;

/// Install the stderr logger: warnings by default, `RUST_LOG` filters on top.
/// Panics if a logger is already installed.
pub fn init_logging() {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(LevelFilter::Warn);
    // RUST_LOG only adjusts diagnostics on stderr; stdout is fixed
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

/// Global style for every figure: whitegrid look, 11 pt base font.
pub fn style() -> Theme {
    Theme::whitegrid().with_font_size(11.0)
}

/// Render one figure into `out_dir`, returning the written path.
pub fn render_one(job: &FigureJob, out_dir: &Path, theme: &Theme) -> Result<PathBuf> {
    log::info!("rendering {}", job.file_name);
    let figure = (job.build)(theme).with_context(|| format!("building {}", job.file_name))?;
    let path = out_dir.join(job.file_name);
    figure
        .render_to_png(&path)
        .with_context(|| format!("rendering {}", path.display()))?;
    Ok(path)
}

/// Render all six figures in order. The first failure stops the run; files
/// written before it stay on disk.
pub fn render_all(out_dir: &Path, theme: &Theme) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(ALL.len());
    for job in &ALL {
        let path = render_one(job, out_dir, theme)?;
        println!("Saved: {}", job.file_name);
        written.push(path);
    }
    Ok(written)
}

pub fn closing_banner() -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("\n{rule}\nAll data-driven visualizations created!\n{rule}")
}
