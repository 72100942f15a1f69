// Copyright 2026 the Bough Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measured node extents consumed by branch geometry.

/// Extents of one node box, in screen pixels.
///
/// Whatever measures and lays out the nodes supplies these (for
/// caption-driven sizing see the `bough_metrics` crate); zoom is already
/// applied. `height` is the content extent with padding included;
/// `outer_height` additionally includes the border, and is the extent
/// vertical routing runs to so the curve meets the box edge rather than the
/// inside of its border.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeBox {
    /// Content width.
    pub width: f64,
    /// Content height, padding included.
    pub height: f64,
    /// Border-inclusive height.
    pub outer_height: f64,
}

impl NodeBox {
    /// Creates a box from its three extents.
    ///
    /// Extents are expected to be finite and non-negative. Misuse is caught
    /// in debug builds so it does not go unnoticed; release builds produce a
    /// degenerate but non-crashing curve downstream.
    #[must_use]
    pub fn new(width: f64, height: f64, outer_height: f64) -> Self {
        debug_assert!(
            width.is_finite() && height.is_finite() && outer_height.is_finite(),
            "NodeBox extents must be finite; got {width} x {height} (outer {outer_height})"
        );
        debug_assert!(
            width >= 0.0 && height >= 0.0 && outer_height >= 0.0,
            "NodeBox extents must be non-negative; got {width} x {height} (outer {outer_height})"
        );
        Self {
            width,
            height,
            outer_height,
        }
    }

    /// Creates a borderless box, whose outer height equals `height`.
    #[must_use]
    pub fn borderless(width: f64, height: f64) -> Self {
        Self::new(width, height, height)
    }
}

#[cfg(test)]
mod tests {
    use super::NodeBox;

    #[test]
    fn borderless_box_has_equal_heights() {
        let b = NodeBox::borderless(40.0, 20.0);
        assert_eq!(b.height, b.outer_height);
    }

    #[test]
    #[should_panic(expected = "finite")]
    #[cfg(debug_assertions)]
    fn non_finite_extents_are_rejected_in_debug() {
        let _ = NodeBox::new(f64::NAN, 20.0, 24.0);
    }
}
