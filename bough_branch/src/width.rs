// Copyright 2026 the Bough Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke-width policy for branch curves.
//!
//! Branches near the root are drawn thicker and taper as nesting deepens, so
//! the eye can follow a limb from the trunk outward. The whole policy scales
//! uniformly with zoom, with a floor that keeps deep branches visible at any
//! zoom level.

/// Stroke width of a branch attached directly to the root, at zoom 1.
pub const BASE_LINE_WIDTH: f64 = 12.0;

/// Width lost per level of nesting, at zoom 1.
pub const DEPTH_TAPER: f64 = 2.0;

/// Lower bound on every stroke width, regardless of depth and zoom.
pub const MIN_LINE_WIDTH: f64 = 2.0;

/// Stroke width for a branch ending at a node of the given `depth`.
///
/// Linear taper, scaled by `zoom`, clamped to [`MIN_LINE_WIDTH`]. Total over
/// all integer depths: callers pass `depth - 1` to obtain the parent
/// branch's width when centering a join, which is `-1` for a child of the
/// root.
#[must_use]
pub fn line_width(zoom: f64, depth: i32) -> f64 {
    let width = zoom * (BASE_LINE_WIDTH - f64::from(depth) * DEPTH_TAPER);
    width.max(MIN_LINE_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::{MIN_LINE_WIDTH, line_width};

    #[test]
    fn tapers_with_depth_until_floor() {
        assert_eq!(line_width(1.0, 1), 10.0);
        assert_eq!(line_width(1.0, 2), 8.0);
        assert_eq!(line_width(1.0, 3), 6.0);
        // Depths 5 and beyond all sit on the floor.
        assert_eq!(line_width(1.0, 5), MIN_LINE_WIDTH);
        assert_eq!(line_width(1.0, 40), MIN_LINE_WIDTH);
    }

    #[test]
    fn monotonically_non_increasing_in_depth() {
        for zoom in [0.25, 0.5, 1.0, 2.0, 3.0] {
            let mut previous = line_width(zoom, -1);
            for depth in 0..12 {
                let width = line_width(zoom, depth);
                assert!(
                    width <= previous,
                    "width grew from {previous} to {width} at depth {depth}, zoom {zoom}"
                );
                previous = width;
            }
        }
    }

    #[test]
    fn linear_in_zoom_above_the_floor() {
        for depth in -1..5 {
            assert_eq!(line_width(2.0, depth), 2.0 * line_width(1.0, depth));
        }
    }

    #[test]
    fn floor_holds_for_tiny_zoom_and_negative_depth() {
        assert!(line_width(0.01, 5) >= MIN_LINE_WIDTH);
        assert_eq!(line_width(1.0, -1), 14.0);
        assert!(line_width(0.05, -1) >= MIN_LINE_WIDTH);
    }
}
