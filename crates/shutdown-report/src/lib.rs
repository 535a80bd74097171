// File: crates/shutdown-report/src/lib.rs
// Summary: Iran internet-shutdown report: transcribed datasets rendered as six PNG figures.
// Sources: OONI, IODA, Kentik, RIPE RIS / RIPEstat.

pub mod data;
pub mod figures;
pub mod palette;
pub mod report;

pub use figures::{FigureJob, ALL as FIGURES};
pub use report::{closing_banner, init_logging, render_all, render_one, style};
