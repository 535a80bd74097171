// File: crates/shutdown-report/src/main.rs
// Summary: Renders every report figure into the working directory.

use std::path::Path;

use anyhow::Result;

fn main() -> Result<()> {
    shutdown_report::init_logging();

    let theme = shutdown_report::style();
    let written = shutdown_report::render_all(Path::new("."), &theme)?;
    log::debug!("{} figures written", written.len());

    println!("{}", shutdown_report::closing_banner());
    Ok(())
}
