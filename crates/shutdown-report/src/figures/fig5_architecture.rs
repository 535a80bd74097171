// File: crates/shutdown-report/src/figures/fig5_architecture.rs
// Summary: Figure 5, layered BGP architecture with the single TIC gateway (RIPEstat, Jan 2024).

use anyhow::Result;
use chart_core::{rgb, Axis, Chart, Figure, Segment, Theme};

use super::DPI;
use crate::data::DiagramNode;
use crate::palette::{
    BLUE, DARK_BLUE, DARK_GREEN, DARK_PURPLE, DARK_RED, GREEN, NAVY, ORANGE, PURPLE, RED, SAND, SILVER, WHITE,
};

pub const FILE_NAME: &str = "fig5_current_architecture.png";

/// Diagram space is 0..EXTENT on both axes.
const EXTENT: f64 = 12.0;
/// Bottom centre of the gateway box, where backbone links converge.
const GATEWAY_BOTTOM: (f64, f64) = (6.0, 7.5);

/// Backbone tier: (centre x, centre y, label).
pub const TIER2: [(f64, f64, &str); 4] = [
    (2.0, 5.5, "AS58224\nTIC\n1,236 prefixes"),
    (5.0, 5.5, "AS12880\nDCI\n75 prefixes"),
    (8.0, 5.5, "AS42337\nRespina\n725 prefixes"),
    (11.0, 5.5, "AS48159\nKish\n15 prefixes"),
];

/// ISP tier: (centre x, centre y, label).
pub const TIER3: [(f64, f64, &str); 5] = [
    (1.5, 3.0, "AS197207\nMCI\n905 pfx"),
    (4.0, 3.0, "AS44244\nIrancell\n461 pfx"),
    (6.5, 3.0, "AS31549\nShatel\n185 pfx"),
    (9.0, 3.0, "AS25184\nAfranet\n232 pfx"),
    (11.5, 3.0, "AS43754\nAsiatech\n322 pfx"),
];

pub fn upstreams() -> DiagramNode {
    DiagramNode::at("14 International Upstreams\n(AS6762, AS6453, AS3257, etc.)", (4.0, 10.0), (4.0, 1.0))
        .styled(BLUE, DARK_BLUE, 2.0, 0.1)
        .with_label_style(10.0, WHITE)
}

pub fn gateway() -> DiagramNode {
    DiagramNode::at("AS49666 - TIC Gateway\n29 prefixes | CHOKEPOINT", (3.5, 7.5), (5.0, 1.2))
        .styled(RED, DARK_RED, 3.0, 0.1)
        .with_label_style(11.0, WHITE)
}

pub fn tier2() -> Vec<DiagramNode> {
    TIER2
        .iter()
        .map(|&(x, y, label)| {
            DiagramNode::centered(label, (x, y), (2.0, 1.2))
                .styled(PURPLE, DARK_PURPLE, 2.0, 0.05)
                .with_label_style(9.0, WHITE)
                .connect_to(GATEWAY_BOTTOM)
        })
        .collect()
}

pub fn tier3() -> Vec<DiagramNode> {
    TIER3
        .iter()
        .map(|&(x, y, label)| {
            DiagramNode::centered(label, (x, y), (1.6, 1.0))
                .styled(GREEN, DARK_GREEN, 2.0, 0.03)
                .with_label_style(8.0, WHITE)
        })
        .collect()
}

pub fn summary() -> DiagramNode {
    DiagramNode::at(
        "Current State: 3,613 total prefixes | 347-370 RIS peers visibility | Single gateway architecture",
        (0.5, 0.5),
        (11.0, 1.5),
    )
    .styled(SAND, ORANGE, 2.0, 0.1)
    .with_label_style(10.0, NAVY)
}

pub fn build(theme: &Theme) -> Result<Figure> {
    let mut chart = Chart::new()
        .with_title("Iran's Internet Architecture - Current BGP State\n(Data: RIPEstat, Jan 2024)", 14.0);
    chart.hide_axes();
    chart.x_axis = Axis::new("", 0.0, EXTENT);
    chart.y_axis = Axis::new("", 0.0, EXTENT);

    let upstreams = upstreams();
    let gateway = gateway();
    let mut nodes = vec![upstreams.clone(), gateway.clone()];
    nodes.extend(tier2());
    nodes.extend(tier3());
    nodes.push(summary());

    for node in &nodes {
        chart.add_shape(node.to_box());
        for link in node.connectors(rgb(SILVER), 1.5) {
            chart.add_shape(link);
        }
        chart.annotate(node.label_annotation());
    }

    // upstream traffic enters through the gateway only
    let gateway_top = (gateway.center().0, gateway.top_center().1);
    chart.add_shape(Segment::new((upstreams.center().0, upstreams.origin.1), gateway_top, rgb(NAVY)).with_width(2.0).with_arrow());

    Ok(Figure::single(chart, 12.0, 10.0).with_dpi(DPI).with_theme(*theme))
}
