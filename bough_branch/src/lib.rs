// Copyright 2026 the Bough Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bough Branch: branch-curve geometry for tree and mind-map diagrams.
//!
//! This crate computes the curved connector (the "branch") drawn between a
//! child node and its parent in a tree diagram, given only the two measured
//! node boxes, the child's offset, the nesting depth, and the zoom factor.
//! It is intentionally decoupled from any particular node model, layout
//! engine, or drawing backend: layout hands in two [`NodeBox`] values and an
//! offset, and the stroke command goes out through the [`DrawSurface`] seam.
//!
//! # Typical usage
//!
//! - Lay out your nodes however you like; for caption-driven box sizes see
//!   the `bough_metrics` crate.
//! - Once per parent-child edge per redraw, build a [`BranchParams`] and call
//!   [`BranchRenderer::render`] with your surface.
//! - The surface first receives a `prepare_region` call with the curve's
//!   bounding rectangle (position a canvas there, or grow a dirty region),
//!   then exactly one stroked cubic Bézier.
//!
//! Rendering is pure and stateless: every call is independent, so distinct
//! edges may be rendered in any order or in parallel. When only the geometry
//! is wanted (testing, hit regions, caching), [`BranchRenderer::plot`]
//! returns the [`BranchPlot`] without touching a surface.
//!
//! # Key types
//!
//! - [`BranchRenderer`] – resolves placement and emits one curve per edge,
//!   configured with [`RenderFlags`].
//! - [`BranchParams`] – per-edge inputs `{depth, offset, child, parent, zoom}`.
//! - [`BranchPlot`] – the result: bounding frame, cubic curve, stroke width.
//! - [`DrawSurface`] – trait for backends that receive the stroke; the
//!   paint it strokes with is an opaque associated type.
//! - [`line_width`] – the depth/zoom stroke-width policy, also usable on its
//!   own (for example to pre-size node borders to match their branch).
//!
//! # Example
//!
//! ```
//! use bough_branch::{BranchParams, BranchRenderer, DrawSurface, NodeBox};
//! use kurbo::{CubicBez, Rect, Vec2};
//!
//! struct Println;
//!
//! impl DrawSurface for Println {
//!     type Paint = &'static str;
//!
//!     fn prepare_region(&mut self, region: Rect) {
//!         println!(
//!             "canvas {} x {} at ({}, {})",
//!             region.width(),
//!             region.height(),
//!             region.x0,
//!             region.y0
//!         );
//!     }
//!
//!     fn stroke_cubic(&mut self, curve: CubicBez, width: f64, paint: &Self::Paint) {
//!         println!("stroke {curve:?} at width {width} in {paint}");
//!     }
//! }
//!
//! let renderer = BranchRenderer::new();
//! let params = BranchParams {
//!     depth: 1,
//!     offset: Vec2::new(180.0, 60.0),
//!     child: NodeBox::new(70.0, 22.0, 26.0),
//!     parent: NodeBox::new(100.0, 26.0, 30.0),
//!     zoom: 1.0,
//! };
//! renderer.render(&mut Println, &params, &"steelblue");
//! ```
//!
//! # Coordinate frames
//!
//! The child offset is in pre-zoom layout units and is the only input the
//! renderer scales; box extents arrive in screen pixels (measurement already
//! applies zoom). The emitted frame is relative to the child box origin and
//! the curve is local to the frame, so a backend can back each edge with its
//! own small canvas placed at the frame origin.
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod placement;
mod render;
mod surface;
mod types;
mod width;

pub use placement::{HorizontalPlacement, HorizontalSpan, VerticalSpan, horizontal_span, vertical_span};
pub use render::{BranchParams, BranchPlot, BranchRenderer, CONTROL_MARKER_RADIUS, RenderFlags};
pub use surface::DrawSurface;
pub use types::NodeBox;
pub use width::{BASE_LINE_WIDTH, DEPTH_TAPER, MIN_LINE_WIDTH, line_width};
