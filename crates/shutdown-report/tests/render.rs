// File: crates/shutdown-report/tests/render.rs
// Purpose: End-to-end run writes six PNGs with fixed names and sizes, stable across runs.

use std::path::PathBuf;

use chart_core::Figure;
use shutdown_report::figures::{fig2_per_asn, fig5_architecture};
use shutdown_report::{closing_banner, render_all, style, FIGURES};

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

const EXPECTED: [(&str, u32, u32); 6] = [
    ("fig1_nov2019_timeline.png", 2800, 1200),
    ("fig2_per_asn_timing.png", 2400, 1200),
    ("fig3_sep2022_curfew.png", 2800, 1000),
    ("fig4_2019_vs_2022.png", 2800, 1200),
    ("fig5_current_architecture.png", 2400, 2000),
    ("fig6_prefix_counts.png", 2000, 1200),
];

fn out_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target/test_out").join(name);
    std::fs::create_dir_all(&dir).expect("create output dir");
    dir
}

#[test]
fn figure_names_are_fixed() {
    let names: Vec<&str> = FIGURES.iter().map(|f| f.file_name).collect();
    let expected: Vec<&str> = EXPECTED.iter().map(|e| e.0).collect();
    assert_eq!(names, expected);
}

#[test]
fn render_all_writes_six_pngs() {
    let dir = out_dir("report_run");
    let written = render_all(&dir, &style()).expect("report renders");
    assert_eq!(written.len(), 6);

    for (path, (name, w, h)) in written.iter().zip(EXPECTED) {
        assert_eq!(path, &dir.join(name));
        let bytes = std::fs::read(path).expect("read output");
        assert!(bytes.starts_with(&PNG_SIGNATURE), "{name} is not a PNG");
        let img = image::load_from_memory(&bytes).expect("decode png");
        assert_eq!((img.width(), img.height()), (w, h), "{name} size");
        // white background in the corner
        assert_eq!(img.to_rgba8().get_pixel(0, 0).0, [255, 255, 255, 255], "{name} background");
    }
}

#[test]
fn reruns_produce_identical_files() {
    let first = out_dir("report_first");
    let second = out_dir("report_second");
    render_all(&first, &style()).expect("first run");
    render_all(&second, &style()).expect("second run");

    for (name, _, _) in EXPECTED {
        let a = std::fs::read(first.join(name)).expect("first output");
        let b = std::fs::read(second.join(name)).expect("second output");
        assert_eq!(a.len(), b.len(), "{name} size differs between runs");
        assert_eq!(a, b, "{name} differs between runs");
    }
}

/// Non-background pixels in the rightmost `cols` columns.
fn right_edge_ink(fig: &Figure, cols: usize) -> usize {
    let (px, w, h, stride) = fig.render_to_rgba8().expect("render figure");
    let w = w as usize;
    (0..h as usize)
        .flat_map(|y| (w - cols..w).map(move |x| y * stride + x * 4))
        .filter(|&i| px[i..i + 4] != [255, 255, 255, 255])
        .count()
}

#[test]
fn fig2_clock_labels_fit_on_page() {
    let fig = fig2_per_asn::build(&style()).expect("build fig2");
    assert_eq!(right_edge_ink(&fig, 3), 0);
}

#[test]
fn fig5_rightmost_boxes_fit_on_page() {
    let fig = fig5_architecture::build(&style()).expect("build fig5");
    assert_eq!(right_edge_ink(&fig, 3), 0);
}

#[test]
fn banner_is_framed_by_rules() {
    let banner = closing_banner();
    let rule = "=".repeat(60);
    let lines: Vec<&str> = banner.lines().collect();
    assert_eq!(lines, ["", rule.as_str(), "All data-driven visualizations created!", rule.as_str()]);
}
