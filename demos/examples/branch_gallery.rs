// Copyright 2026 the Bough Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Branches for a small mind map, printed as draw commands.
//!
//! This example shows how the pieces fit together:
//! - `bough_metrics` sizes each node box from its caption,
//! - `bough_branch` routes a curve from every child to the root,
//! - a local [`DrawSurface`] implementation records what a real canvas
//!   backend would receive.
//!
//! The four children are placed so every horizontal case shows up: fully
//! left, fully right, and overlapping on either side.
//!
//! Run:
//! - `cargo run -p bough_examples --example branch_gallery`

use bough_branch::{BranchParams, BranchRenderer, DrawSurface, NodeBox, RenderFlags};
use bough_metrics::{
    CaptionConstraints, CaptionFont, CaptionKind, FontWeight, TextMeasurer, caption_extent,
};
use kurbo::{CubicBez, Point, Rect, Size, Vec2};

/// Measures at a flat advance width per character, standing in for a real
/// text backend.
struct CharCells;

impl TextMeasurer for CharCells {
    fn measure(&mut self, caption: &str, constraints: &CaptionConstraints) -> Size {
        let advance = match constraints.weight {
            FontWeight::Normal => 0.55,
            FontWeight::Bold => 0.60,
        };
        let ideal = caption.chars().count() as f64 * constraints.font_size * advance;
        Size::new(
            ideal.clamp(constraints.min_width, constraints.max_width),
            constraints.font_size * 1.4,
        )
    }
}

/// Prints every command a canvas backend would execute.
struct PrintSurface;

impl DrawSurface for PrintSurface {
    type Paint = &'static str;

    fn prepare_region(&mut self, region: Rect) {
        println!(
            "  canvas {:6.1} x {:5.1} at ({:7.1}, {:6.1})",
            region.width(),
            region.height(),
            region.x0,
            region.y0
        );
    }

    fn stroke_cubic(&mut self, curve: CubicBez, width: f64, paint: &Self::Paint) {
        println!(
            "  stroke {paint:<10} width {width:4.1}  ({:6.1}, {:5.1}) .. ({:6.1}, {:5.1}) .. ({:6.1}, {:5.1}) .. ({:6.1}, {:5.1})",
            curve.p0.x,
            curve.p0.y,
            curve.p1.x,
            curve.p1.y,
            curve.p2.x,
            curve.p2.y,
            curve.p3.x,
            curve.p3.y
        );
    }

    fn control_marker(&mut self, center: Point, radius: f64) {
        println!("  marker r {radius:.1} at ({:6.1}, {:5.1})", center.x, center.y);
    }
}

/// Box extents for a caption: measured size plus the padding and border the
/// demo stylesheet would add.
fn node_box(caption: &str, kind: CaptionKind, zoom: f64) -> NodeBox {
    let font = CaptionFont {
        size: 15.0,
        weight: match kind {
            CaptionKind::Root => FontWeight::Bold,
            CaptionKind::Node => FontWeight::Normal,
        },
    };
    let caption_size = caption_extent(&mut CharCells, caption, &font, kind, zoom);
    // 4px of padding top and bottom, 2px of bottom border.
    let height = caption_size.height + 8.0;
    NodeBox::new(caption_size.width, height, height + 2.0)
}

fn main() {
    let zoom = 1.0;
    let renderer =
        BranchRenderer::with_flags(RenderFlags::default() | RenderFlags::CONTROL_MARKERS);

    let root = node_box("Weekend trip", CaptionKind::Root, zoom);
    println!(
        "root box {:.1} x {:.1} (outer {:.1})",
        root.width, root.height, root.outer_height
    );

    // Child offsets relative to the root box origin, in layout units.
    let children = [
        ("Packing list", Vec2::new(220.0, -70.0), "seagreen"),
        ("Route", Vec2::new(240.0, 60.0), "steelblue"),
        ("Budget", Vec2::new(-180.0, -40.0), "firebrick"),
        ("Music", Vec2::new(40.0, 90.0), "goldenrod"),
    ];

    let mut surface = PrintSurface;
    let mut route_box = None;
    for (caption, offset, paint) in children {
        let child = node_box(caption, CaptionKind::Node, zoom);
        println!("\n{caption}:");
        let params = BranchParams {
            depth: 1,
            offset,
            child,
            parent: root,
            zoom,
        };
        renderer.render(&mut surface, &params, &paint);
        if caption == "Route" {
            route_box = Some(child);
        }
    }

    // One level deeper: the branch thins and joins its parent's thicker
    // stroke dead center.
    let route = route_box.expect("Route was rendered above");
    let detour = node_box("Scenic detour", CaptionKind::Node, zoom);
    println!("\nScenic detour:");
    let params = BranchParams {
        depth: 2,
        offset: Vec2::new(200.0, 50.0),
        child: detour,
        parent: route,
        zoom,
    };
    renderer.render(&mut surface, &params, &"steelblue");
}
