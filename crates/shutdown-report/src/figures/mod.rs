// File: crates/shutdown-report/src/figures/mod.rs
// Summary: The six report figures; each module owns its literal dataset and builds a `Figure`.

use anyhow::Result;
use chart_core::{Figure, Theme};

pub mod fig1_timeline;
pub mod fig2_per_asn;
pub mod fig3_curfew;
pub mod fig4_comparison;
pub mod fig5_architecture;
pub mod fig6_prefixes;

/// Output resolution shared by every figure.
pub const DPI: f32 = 200.0;

/// A figure's output file name and its builder.
pub struct FigureJob {
    pub file_name: &'static str,
    pub build: fn(&Theme) -> Result<Figure>,
}

/// All figures in output order.
pub const ALL: [FigureJob; 6] = [
    FigureJob { file_name: fig1_timeline::FILE_NAME, build: fig1_timeline::build },
    FigureJob { file_name: fig2_per_asn::FILE_NAME, build: fig2_per_asn::build },
    FigureJob { file_name: fig3_curfew::FILE_NAME, build: fig3_curfew::build },
    FigureJob { file_name: fig4_comparison::FILE_NAME, build: fig4_comparison::build },
    FigureJob { file_name: fig5_architecture::FILE_NAME, build: fig5_architecture::build },
    FigureJob { file_name: fig6_prefixes::FILE_NAME, build: fig6_prefixes::build },
];
