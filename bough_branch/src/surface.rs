// Copyright 2026 the Bough Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between branch geometry and an actual drawing backend.

use kurbo::{CubicBez, Point, Rect};

/// A drawing backend that can receive one branch stroke.
///
/// Implementations are typically thin shims over a canvas, a scene builder,
/// or a display list. For every edge, [`prepare_region`](Self::prepare_region)
/// arrives strictly before the stroke it bounds, so a backend that backs
/// each edge with its own canvas can size and place that canvas first.
///
/// The renderer never inspects the paint it strokes with; pick whatever
/// color or brush representation the backend understands as
/// [`Paint`](Self::Paint).
pub trait DrawSurface {
    /// Opaque stroke paint, threaded through
    /// [`crate::BranchRenderer::render`] untouched.
    type Paint;

    /// Sizes and positions the backing surface for an upcoming stroke.
    ///
    /// `region` is the bounding rectangle of the curve, relative to the
    /// child box origin. The curve that follows is local to this region.
    fn prepare_region(&mut self, region: Rect);

    /// Strokes one cubic Bézier at the given width. No fill.
    fn stroke_cubic(&mut self, curve: CubicBez, width: f64, paint: &Self::Paint);

    /// Places a small filled dot marking a curve control point.
    ///
    /// Only called when [`crate::RenderFlags::CONTROL_MARKERS`] is set. The
    /// default does nothing; surfaces that visualize control points override
    /// this and pick their own contrasting fill.
    fn control_marker(&mut self, center: Point, radius: f64) {
        let _ = (center, radius);
    }
}
