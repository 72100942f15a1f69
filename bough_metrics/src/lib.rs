// Copyright 2026 the Bough Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bough Metrics: caption sizing for tree-diagram nodes.
//!
//! A node box must be exactly as large as its caption needs, at the current
//! zoom, within the diagram's width limits. Actually measuring text is a
//! backend concern (a hidden DOM element, a glyph shaper, a terminal cell
//! count), so this crate splits the job at a trait:
//!
//! - [`TextMeasurer`] – the external collaborator: given a caption and
//!   [`CaptionConstraints`], report the rendered [`Size`].
//! - [`caption_extent`] – the policy around it: scales the font and the
//!   width limits by zoom, picks the minimum width for the node's
//!   [`CaptionKind`], and pads the measurement with [`SAFETY_PADDING`] so
//!   editable captions neither wrap nor clip on backends that round text
//!   boxes down.
//!
//! The returned extent is in screen pixels and feeds straight into the box
//! extents that `bough_branch` routes curves between.
//!
//! # Example
//!
//! ```
//! use bough_metrics::{
//!     CaptionConstraints, CaptionFont, CaptionKind, FontWeight, TextMeasurer, caption_extent,
//! };
//! use kurbo::Size;
//!
//! /// Measures at a flat advance width per character.
//! struct CharCells;
//!
//! impl TextMeasurer for CharCells {
//!     fn measure(&mut self, caption: &str, constraints: &CaptionConstraints) -> Size {
//!         let ideal = caption.chars().count() as f64 * constraints.font_size * 0.5;
//!         Size::new(
//!             ideal.clamp(constraints.min_width, constraints.max_width),
//!             constraints.font_size * 1.4,
//!         )
//!     }
//! }
//!
//! let font = CaptionFont {
//!     size: 15.0,
//!     weight: FontWeight::Normal,
//! };
//! let size = caption_extent(&mut CharCells, "Pack the tent", &font, CaptionKind::Node, 1.0);
//! assert!(size.width >= 70.0);
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

use kurbo::Size;

/// Minimum caption width for the root node, at zoom 1.
pub const ROOT_CAPTION_MIN_WIDTH: f64 = 100.0;

/// Minimum caption width for any non-root node, at zoom 1.
pub const NODE_CAPTION_MIN_WIDTH: f64 = 70.0;

/// Maximum caption width before text wraps, at zoom 1.
pub const NODE_CAPTION_MAX_WIDTH: f64 = 150.0;

/// Extra pixels added to each measured axis.
///
/// Editable captions on some backends render one row short when sized to
/// the exact measurement; the slack keeps them from wrapping or clipping.
pub const SAFETY_PADDING: f64 = 2.0;

/// Weight of a caption font.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum FontWeight {
    /// Regular text.
    #[default]
    Normal,
    /// Bold text.
    Bold,
}

/// Font of a node caption, in pre-zoom units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaptionFont {
    /// Font size in pixels at zoom 1.
    pub size: f64,
    /// Font weight.
    pub weight: FontWeight,
}

/// Which node a caption belongs to; selects the minimum width.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CaptionKind {
    /// The root node of the map, kept wider so it reads as the trunk.
    Root,
    /// Any other node.
    Node,
}

impl CaptionKind {
    /// Minimum caption width for this kind of node, at zoom 1.
    #[must_use]
    pub const fn min_width(self) -> f64 {
        match self {
            Self::Root => ROOT_CAPTION_MIN_WIDTH,
            Self::Node => NODE_CAPTION_MIN_WIDTH,
        }
    }
}

/// Width constraints and font for one measurement, in screen pixels.
///
/// Everything here already has zoom applied; measurers never see the zoom
/// factor itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaptionConstraints {
    /// Font size.
    pub font_size: f64,
    /// Font weight.
    pub weight: FontWeight,
    /// Minimum rendered width.
    pub min_width: f64,
    /// Maximum rendered width; longer captions wrap.
    pub max_width: f64,
}

/// External collaborator that renders (or simulates) a caption to find the
/// size it occupies.
///
/// Takes `&mut self` so implementations can reuse a scratch element or keep
/// a shaping cache without interior mutability.
pub trait TextMeasurer {
    /// The size `caption` occupies when rendered under `constraints`.
    fn measure(&mut self, caption: &str, constraints: &CaptionConstraints) -> Size;
}

/// The screen extent a node must provide to show `caption`.
///
/// Builds zoom-scaled [`CaptionConstraints`], delegates to `measurer`, and
/// pads the result by [`SAFETY_PADDING`] on each axis. Stateless; zoom is
/// plain input.
#[must_use]
pub fn caption_extent<M: TextMeasurer>(
    measurer: &mut M,
    caption: &str,
    font: &CaptionFont,
    kind: CaptionKind,
    zoom: f64,
) -> Size {
    debug_assert!(
        zoom.is_finite() && zoom > 0.0,
        "zoom must be positive and finite; got {zoom}"
    );
    let constraints = CaptionConstraints {
        font_size: zoom * font.size,
        weight: font.weight,
        min_width: zoom * kind.min_width(),
        max_width: zoom * NODE_CAPTION_MAX_WIDTH,
    };
    let measured = measurer.measure(caption, &constraints);
    Size::new(
        measured.width + SAFETY_PADDING,
        measured.height + SAFETY_PADDING,
    )
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::{
        CaptionConstraints, CaptionFont, CaptionKind, FontWeight, NODE_CAPTION_MAX_WIDTH,
        NODE_CAPTION_MIN_WIDTH, ROOT_CAPTION_MIN_WIDTH, SAFETY_PADDING, TextMeasurer,
        caption_extent,
    };

    /// Fake measurer that records the constraints it was handed and clamps
    /// an ideal width into them.
    struct FakeMeasurer {
        last: Option<CaptionConstraints>,
    }

    impl FakeMeasurer {
        fn new() -> Self {
            Self { last: None }
        }
    }

    impl TextMeasurer for FakeMeasurer {
        fn measure(&mut self, caption: &str, constraints: &CaptionConstraints) -> Size {
            self.last = Some(*constraints);
            let ideal = caption.chars().count() as f64 * constraints.font_size * 0.5;
            Size::new(
                ideal.clamp(constraints.min_width, constraints.max_width),
                constraints.font_size * 1.4,
            )
        }
    }

    const FONT: CaptionFont = CaptionFont {
        size: 15.0,
        weight: FontWeight::Normal,
    };

    #[test]
    fn root_captions_get_the_wider_minimum() {
        let mut measurer = FakeMeasurer::new();
        let root = caption_extent(&mut measurer, "hi", &FONT, CaptionKind::Root, 1.0);
        let node = caption_extent(&mut measurer, "hi", &FONT, CaptionKind::Node, 1.0);
        assert_eq!(root.width, ROOT_CAPTION_MIN_WIDTH + SAFETY_PADDING);
        assert_eq!(node.width, NODE_CAPTION_MIN_WIDTH + SAFETY_PADDING);
    }

    #[test]
    fn zoom_scales_every_constraint() {
        let mut measurer = FakeMeasurer::new();
        let _ = caption_extent(&mut measurer, "hi", &FONT, CaptionKind::Node, 2.0);
        let constraints = measurer.last.expect("measurer was not consulted");
        assert_eq!(constraints.font_size, 30.0);
        assert_eq!(constraints.min_width, 2.0 * NODE_CAPTION_MIN_WIDTH);
        assert_eq!(constraints.max_width, 2.0 * NODE_CAPTION_MAX_WIDTH);
    }

    #[test]
    fn weight_passes_through_to_the_measurer() {
        let mut measurer = FakeMeasurer::new();
        let bold = CaptionFont {
            size: 15.0,
            weight: FontWeight::Bold,
        };
        let _ = caption_extent(&mut measurer, "hi", &bold, CaptionKind::Node, 1.0);
        let constraints = measurer.last.expect("measurer was not consulted");
        assert_eq!(constraints.weight, FontWeight::Bold);
    }

    #[test]
    fn safety_padding_is_added_to_both_axes() {
        let mut measurer = FakeMeasurer::new();
        let constraints = CaptionConstraints {
            font_size: 15.0,
            weight: FontWeight::Normal,
            min_width: NODE_CAPTION_MIN_WIDTH,
            max_width: NODE_CAPTION_MAX_WIDTH,
        };
        let raw = measurer.measure("a long enough caption", &constraints);
        let padded = caption_extent(
            &mut measurer,
            "a long enough caption",
            &FONT,
            CaptionKind::Node,
            1.0,
        );
        assert_eq!(padded.width, raw.width + SAFETY_PADDING);
        assert_eq!(padded.height, raw.height + SAFETY_PADDING);
    }

    #[test]
    fn long_captions_stop_at_the_maximum_width() {
        let mut measurer = FakeMeasurer::new();
        let size = caption_extent(
            &mut measurer,
            "an extremely long caption that would never fit on one line",
            &FONT,
            CaptionKind::Node,
            1.0,
        );
        assert_eq!(size.width, NODE_CAPTION_MAX_WIDTH + SAFETY_PADDING);
    }
}
