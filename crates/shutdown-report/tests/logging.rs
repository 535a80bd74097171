// File: crates/shutdown-report/tests/logging.rs
// Purpose: Logger setup installs a global logger that passes warnings.
// Kept to a single test: the logger can only be installed once per process.

#[test]
fn init_logging_installs_warn_logger() {
    std::env::remove_var("RUST_LOG");
    shutdown_report::init_logging();

    assert_eq!(log::max_level(), log::LevelFilter::Warn);
    assert!(log::log_enabled!(log::Level::Warn));
    assert!(!log::log_enabled!(log::Level::Info));
}
