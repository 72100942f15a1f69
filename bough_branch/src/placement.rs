// Copyright 2026 the Bough Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement resolution: which side of the parent the child sits on, and the
//! local span the connecting curve occupies.
//!
//! The horizontal axis carries the interesting branching: the child can sit
//! fully left or right of the parent, or overlap it on either side. Each
//! case produces a [`HorizontalSpan`] with the frame edge, extent, and draw
//! direction. The vertical axis needs no overlap distinction of its own; a
//! single above/below test yields the [`VerticalSpan`].

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::types::NodeBox;

/// Horizontal placement of a child box relative to its parent.
///
/// Classified from box centers. The two overlap variants cover layouts
/// where the boxes intersect along the horizontal axis; the draw direction
/// flips there so the curve still runs from the child anchor to the parent
/// anchor without doubling back.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum HorizontalPlacement {
    /// Child entirely to the left of the parent.
    LeftOf,
    /// Child to the left, boxes intersecting horizontally.
    LeftOverlap,
    /// Child entirely to the right of the parent.
    RightOf,
    /// Child to the right, boxes intersecting horizontally.
    RightOverlap,
}

impl HorizontalPlacement {
    /// Classifies the child's placement from its x offset and the two box
    /// widths, all in screen pixels.
    #[must_use]
    pub fn classify(offset_x: f64, child_width: f64, parent_width: f64) -> Self {
        let child_left = offset_x + child_width / 2.0 < parent_width / 2.0;
        if child_left {
            if offset_x.abs() > child_width {
                Self::LeftOf
            } else {
                Self::LeftOverlap
            }
        } else if offset_x > parent_width {
            Self::RightOf
        } else {
            Self::RightOverlap
        }
    }

    /// `true` for the two variants where the boxes intersect horizontally.
    #[must_use]
    pub const fn is_overlap(self) -> bool {
        matches!(self, Self::LeftOverlap | Self::RightOverlap)
    }
}

/// Normalized horizontal extent of a branch frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizontalSpan {
    /// Frame left edge, relative to the child box origin. Negative whenever
    /// the frame starts left of the child.
    pub left: f64,
    /// Frame width, before the degenerate-width clamp applied by the
    /// renderer.
    pub width: f64,
    /// `true` when the curve runs from the frame's left edge to its right.
    pub left_to_right: bool,
    /// `true` when the child and parent boxes intersect horizontally.
    pub overlap: bool,
}

/// Resolves the horizontal span for a child at `offset_x`.
///
/// `slack` widens the two non-overlap spans; backends whose rasterizer
/// rounds frame edges inward pass `1.0` to close the hairline seam that
/// would otherwise open between curve and parent box (see
/// [`crate::RenderFlags::ROUNDING_SLACK`]).
#[must_use]
pub fn horizontal_span(
    offset_x: f64,
    child_width: f64,
    parent_width: f64,
    slack: f64,
) -> HorizontalSpan {
    match HorizontalPlacement::classify(offset_x, child_width, parent_width) {
        HorizontalPlacement::LeftOf => HorizontalSpan {
            left: child_width,
            width: offset_x.abs() - child_width + slack,
            left_to_right: true,
            overlap: false,
        },
        HorizontalPlacement::LeftOverlap => HorizontalSpan {
            left: -offset_x,
            width: child_width + offset_x,
            left_to_right: false,
            overlap: true,
        },
        HorizontalPlacement::RightOf => HorizontalSpan {
            left: parent_width - offset_x,
            width: offset_x - parent_width + slack,
            left_to_right: false,
            overlap: false,
        },
        HorizontalPlacement::RightOverlap => HorizontalSpan {
            left: 0.0,
            width: parent_width - offset_x,
            left_to_right: true,
            overlap: true,
        },
    }
}

/// Normalized vertical extent of a branch frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalSpan {
    /// Frame top edge, relative to the child box origin.
    pub top: f64,
    /// Frame height.
    pub height: f64,
    /// `true` when the curve runs from the frame's top edge to its bottom.
    pub top_to_bottom: bool,
}

/// Resolves the vertical span for a child at `offset_y`.
///
/// The above/below test compares content extents, while the resulting
/// height runs to the border-inclusive [`NodeBox::outer_height`] of
/// whichever box the curve ends in.
#[must_use]
pub fn vertical_span(offset_y: f64, child: &NodeBox, parent: &NodeBox) -> VerticalSpan {
    let child_above = offset_y + child.height < parent.height;
    if child_above {
        let top = child.height;
        VerticalSpan {
            top,
            height: parent.outer_height - offset_y - top,
            top_to_bottom: true,
        }
    } else {
        let top = parent.height - offset_y;
        VerticalSpan {
            top,
            height: child.outer_height - top,
            top_to_bottom: false,
        }
    }
}
