// Copyright 2026 the Bough Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Branch-curve computation and the per-edge render entry point.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{CubicBez, Point, Rect, Size, Vec2};

use crate::placement::{horizontal_span, vertical_span};
use crate::surface::DrawSurface;
use crate::types::NodeBox;
use crate::width::line_width;

/// Radius of the dots emitted under [`RenderFlags::CONTROL_MARKERS`], in
/// screen pixels. Not zoom-scaled.
pub const CONTROL_MARKER_RADIUS: f64 = 4.0;

bitflags::bitflags! {
    /// Options controlling branch rendering.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RenderFlags: u8 {
        /// Widen non-overlapping frames by one pixel.
        ///
        /// Some rasterizers round the frame edge inward, opening a hairline
        /// seam between the curve and the parent box; the extra pixel
        /// closes it. Clear this on backends that do not show the artifact.
        const ROUNDING_SLACK  = 0b0000_0001;
        /// Emit the two Bézier control points as filled dots after the
        /// stroke, via [`crate::DrawSurface::control_marker`].
        const CONTROL_MARKERS = 0b0000_0010;
    }
}

impl Default for RenderFlags {
    fn default() -> Self {
        Self::ROUNDING_SLACK
    }
}

/// Inputs for one branch render.
///
/// Box extents are in screen pixels (zoom already applied by measurement);
/// the offset is in pre-zoom layout units and is the only input the
/// renderer scales.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BranchParams {
    /// Nesting depth of the child node. Children of the root are depth 1.
    pub depth: u32,
    /// Child box origin relative to the parent box origin, pre-zoom.
    pub offset: Vec2,
    /// Child box extents.
    pub child: NodeBox,
    /// Parent box extents.
    pub parent: NodeBox,
    /// Zoom applied uniformly to the diagram. Positive and finite.
    pub zoom: f64,
}

/// One fully computed branch: bounding frame, curve, and stroke width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BranchPlot {
    /// Bounding rectangle of the curve, relative to the child box origin.
    pub frame: Rect,
    /// The curve, in frame-local coordinates.
    pub curve: CubicBez,
    /// Stroke width for the curve. Never below
    /// [`crate::MIN_LINE_WIDTH`], and never wider than the frame.
    pub stroke_width: f64,
}

/// Computes and issues the curve connecting a child node to its parent.
///
/// Stateless: calling [`plot`](Self::plot) twice with identical inputs
/// yields bit-identical plots, and distinct edges may be rendered in any
/// order. Construct once per view (the flags rarely change) and reuse it
/// for every edge of every redraw.
#[derive(Clone, Copy, Debug, Default)]
pub struct BranchRenderer {
    flags: RenderFlags,
}

impl BranchRenderer {
    /// Renderer with the default flags.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer with explicit flags.
    #[must_use]
    pub const fn with_flags(flags: RenderFlags) -> Self {
        Self { flags }
    }

    /// The active flags.
    #[must_use]
    pub const fn flags(&self) -> RenderFlags {
        self.flags
    }

    /// Computes the branch geometry for `params` without drawing anything.
    ///
    /// Inputs are trusted numeric data from layout; non-finite values,
    /// negative extents, and non-positive zoom are contract violations,
    /// debug-asserted here and degrading to a garbage-in garbage-out curve
    /// in release builds.
    #[must_use]
    pub fn plot(&self, params: &BranchParams) -> BranchPlot {
        debug_assert!(
            params.zoom.is_finite() && params.zoom > 0.0,
            "zoom must be positive and finite; got {}",
            params.zoom
        );
        debug_assert!(
            params.offset.x.is_finite() && params.offset.y.is_finite(),
            "offset must be finite; got {:?}",
            params.offset
        );

        let offset_x = params.offset.x * params.zoom;
        let offset_y = params.offset.y * params.zoom;

        let slack = if self.flags.contains(RenderFlags::ROUNDING_SLACK) {
            1.0
        } else {
            0.0
        };
        let h = horizontal_span(offset_x, params.child.width, params.parent.width, slack);

        let depth = i32::try_from(params.depth).unwrap_or(i32::MAX);
        let stroke_width = line_width(params.zoom, depth);
        let half = stroke_width / 2.0;

        // Nearly coincident boxes would otherwise collapse the frame to a
        // sliver narrower than its own stroke.
        let width = h.width.max(stroke_width);

        let v = vertical_span(offset_y, &params.child, &params.parent);
        let frame = Rect::from_origin_size((h.left, v.top), Size::new(width, v.height));

        let (start_x, end_x) = if h.left_to_right {
            (0.0, width)
        } else {
            (width, 0.0)
        };

        // The child's thinner stroke joins the parent's thicker one; shift
        // the end point by half the width difference to center the join.
        let parent_stroke = line_width(params.zoom, depth - 1);
        let diff = (parent_stroke - stroke_width) / 2.0;

        let (start_y, end_y) = if v.top_to_bottom {
            (half, v.height - half - diff)
        } else {
            (v.height - half, half + diff)
        };

        let curve = if h.overlap {
            overlap_curve(start_x, start_y, end_x, end_y, half, h.left_to_right)
        } else {
            sweep_curve(start_x, start_y, end_x, end_y)
        };

        BranchPlot {
            frame,
            curve,
            stroke_width,
        }
    }

    /// Computes and draws one branch onto `surface`.
    ///
    /// Issues [`DrawSurface::prepare_region`] with the curve's bounding
    /// rectangle, then exactly one stroked cubic; with
    /// [`RenderFlags::CONTROL_MARKERS`] also two control-point dots.
    pub fn render<S: DrawSurface>(&self, surface: &mut S, params: &BranchParams, paint: &S::Paint) {
        let plot = self.plot(params);
        surface.prepare_region(plot.frame);
        surface.stroke_cubic(plot.curve, plot.stroke_width, paint);
        if self.flags.contains(RenderFlags::CONTROL_MARKERS) {
            surface.control_marker(plot.curve.p1, CONTROL_MARKER_RADIUS);
            surface.control_marker(plot.curve.p2, CONTROL_MARKER_RADIUS);
        }
    }
}

/// Curve for the common, non-overlapping case: leave the start point
/// roughly horizontally, then sweep into the end point.
fn sweep_curve(start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> CubicBez {
    let cp1 = Point::new((start_x - end_x).abs() / 2.0, start_y);
    let cp2_x = if start_x > end_x {
        start_x / 5.0
    } else {
        end_x - end_x / 5.0
    };
    CubicBez::new(
        Point::new(start_x, start_y),
        cp1,
        Point::new(cp2_x, end_y),
        Point::new(end_x, end_y),
    )
}

/// Curve for interpenetrating boxes. The endpoints are pulled in by half
/// the stroke width so the rounded caps stay inside the frame, and the
/// control points work off the vertical spread instead of the horizontal
/// one.
fn overlap_curve(
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    half_stroke: f64,
    left_to_right: bool,
) -> CubicBez {
    let (start_x, end_x) = if left_to_right {
        (start_x + half_stroke, end_x - half_stroke)
    } else {
        (start_x - half_stroke, end_x + half_stroke)
    };
    let cp1 = Point::new(start_x, (start_y - end_y).abs() / 2.0);
    let cp2_y = if start_y > end_y {
        start_y / 5.0
    } else {
        end_y - end_y / 5.0
    };
    CubicBez::new(
        Point::new(start_x, start_y),
        cp1,
        Point::new(end_x, cp2_y),
        Point::new(end_x, end_y),
    )
}
