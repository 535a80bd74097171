// File: crates/chart-core/src/legend.rs
// Summary: Legend placement and entries (line swatches and color patches).

use skia_safe as skia;

use crate::series::LineDash;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendLoc {
    UpperCenter,
    LowerRight,
}

#[derive(Clone, Debug)]
pub enum LegendSwatch {
    Line { color: skia::Color, width: f32, dash: LineDash },
    Patch { color: skia::Color },
}

#[derive(Clone, Debug)]
pub struct LegendEntry {
    pub label: String,
    pub swatch: LegendSwatch,
}

impl LegendEntry {
    pub fn patch(label: impl Into<String>, color: skia::Color) -> Self {
        Self { label: label.into(), swatch: LegendSwatch::Patch { color } }
    }
}

#[derive(Clone, Debug)]
pub struct Legend {
    pub loc: LegendLoc,
    /// Entries beyond the ones derived from labeled reference lines.
    pub extra: Vec<LegendEntry>,
    /// Only draw `extra`; skip the derived entries.
    pub only_extra: bool,
}

impl Legend {
    pub fn new(loc: LegendLoc) -> Self {
        Self { loc, extra: Vec::new(), only_extra: false }
    }

    /// Legend built from explicit handles only.
    pub fn with_handles(loc: LegendLoc, handles: Vec<LegendEntry>) -> Self {
        Self { loc, extra: handles, only_extra: true }
    }
}
