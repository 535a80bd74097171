// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the chart model and headless PNG rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;
pub mod overlay;
pub mod shape;
pub mod legend;
pub mod figure;
pub mod options;
pub mod raster;
pub mod error;

pub use chart::Chart;
pub use options::RenderOptions;
pub use series::{Bar, LineDash, Marker, Series, SeriesType, Span};
pub use axis::{day_number, Axis, TickFormat, Ticks};
pub use view::ViewState;
pub use theme::{rgb, rgba, Theme};
pub use text::{HAlign, TextShaper, VAlign};
pub use overlay::{Annotation, Band, RefLine};
pub use shape::{RoundedBox, Segment, Shape};
pub use legend::{Legend, LegendEntry, LegendLoc};
pub use figure::Figure;
pub use error::{ChartError, Result};

/// Color type used throughout the API.
pub use skia_safe::Color;
