// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Zone: classify a pointer over a list item into a drop zone.
//!
//! While a component is dragged over an already-placed item, the host needs a
//! coarse answer to "what would dropping here mean?". This crate answers it
//! geometrically and nothing more: given the pointer and the hovered item's
//! bounding box it returns a [`Zone`].
//!
//! - [`Zone::Top`] / [`Zone::Bottom`]: insert before/after the item (vertical reorder).
//! - [`Zone::Left`] / [`Zone::Right`]: place side by side with the item (row layout).
//! - [`Zone::Center`]: over the body of the item; no structural meaning on its own.
//! - [`Zone::None`]: no usable input for this tick.
//!
//! ## Algorithm
//!
//! The pointer is translated into box-local coordinates and compared with
//! four thresholds derived from an edge margin `m` (see [`ZoneParams`]):
//! `height * m`, `height * (1 - m)`, `width * m`, and `width * (1 - m)`.
//! Checks run in a fixed order and the first match wins:
//! top, bottom, left, right, center. Near a corner the vertical bands
//! therefore take priority over the horizontal ones.
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use trellis_zone::{Zone, classify};
//!
//! let item = Rect::new(0.0, 0.0, 100.0, 100.0);
//!
//! assert_eq!(classify(Point::new(10.0, 50.0), item), Zone::Left);
//! // Top wins over left/right even though `x` is centered.
//! assert_eq!(classify(Point::new(50.0, 10.0), item), Zone::Top);
//! assert_eq!(classify(item.center(), item), Zone::Center);
//! ```
//!
//! Missing input is not an error. When the host has no pointer offset or the
//! item is not mounted yet, use [`classify_opt`], which yields [`Zone::None`]:
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use trellis_zone::{Zone, classify_opt};
//!
//! assert_eq!(classify_opt(None, Some(Rect::new(0.0, 0.0, 10.0, 10.0))), Zone::None);
//! assert_eq!(classify_opt(Some(Point::new(1.0, 1.0)), None), Zone::None);
//! ```
//!
//! ## Feedback
//!
//! [`Indicator`] maps a zone to the visual affordance a host typically draws
//! (an insertion line, a side bar, a highlight) and computes its rectangle.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds for `kurbo`.
//!
//! This crate is `no_std`.

#![no_std]

mod indicator;
mod zone;

pub use indicator::Indicator;
pub use zone::{Side, Zone};

use kurbo::{Point, Rect};

/// Edge margin used by [`classify`] and [`ZoneParams::default`].
pub const DEFAULT_EDGE_MARGIN: f64 = 0.3;

/// Parameters controlling zone classification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneParams {
    /// Fraction of the box, measured from each edge, that belongs to that edge's zone.
    ///
    /// Values are clamped to `[0, 0.5]` when classifying; a non-finite value
    /// falls back to [`DEFAULT_EDGE_MARGIN`].
    pub edge_margin: f64,
}

impl Default for ZoneParams {
    fn default() -> Self {
        Self {
            edge_margin: DEFAULT_EDGE_MARGIN,
        }
    }
}

impl ZoneParams {
    /// Create parameters with the given edge margin.
    pub const fn with_edge_margin(edge_margin: f64) -> Self {
        Self { edge_margin }
    }

    fn margin(&self) -> f64 {
        if self.edge_margin.is_finite() {
            self.edge_margin.clamp(0.0, 0.5)
        } else {
            DEFAULT_EDGE_MARGIN
        }
    }

    /// Classify `pointer` against `bounds` using these parameters.
    ///
    /// Both values must be in the same coordinate space. Non-finite input
    /// yields [`Zone::None`].
    pub fn classify(&self, pointer: Point, bounds: Rect) -> Zone {
        if !pointer.is_finite() || !bounds.is_finite() {
            return Zone::None;
        }
        let bounds = bounds.abs();
        let local = local_point(pointer, bounds);
        let m = self.margin();
        let (width, height) = (bounds.width(), bounds.height());

        if local.y < height * m {
            Zone::Top
        } else if local.y > height * (1.0 - m) {
            Zone::Bottom
        } else if local.x < width * m {
            Zone::Left
        } else if local.x > width * (1.0 - m) {
            Zone::Right
        } else {
            Zone::Center
        }
    }

    /// Like [`ZoneParams::classify`], treating a missing pointer or box as [`Zone::None`].
    pub fn classify_opt(&self, pointer: Option<Point>, bounds: Option<Rect>) -> Zone {
        match (pointer, bounds) {
            (Some(pointer), Some(bounds)) => self.classify(pointer, bounds),
            _ => Zone::None,
        }
    }
}

/// Classify `pointer` against `bounds` with the default edge margin.
pub fn classify(pointer: Point, bounds: Rect) -> Zone {
    ZoneParams::default().classify(pointer, bounds)
}

/// Classify with the default edge margin; missing input yields [`Zone::None`].
pub fn classify_opt(pointer: Option<Point>, bounds: Option<Rect>) -> Zone {
    ZoneParams::default().classify_opt(pointer, bounds)
}

/// Translate `pointer` into coordinates local to the top-left corner of `bounds`.
pub fn local_point(pointer: Point, bounds: Rect) -> Point {
    Point::new(pointer.x - bounds.x0, pointer.y - bounds.y0)
}

/// Whether `pointer` is at or below the vertical midpoint of `bounds`.
///
/// A downward reorder only commits once this holds. `bounds` is normalized
/// like in [`classify`].
pub fn past_midpoint(pointer: Point, bounds: Rect) -> bool {
    let bounds = bounds.abs();
    local_point(pointer, bounds).y >= bounds.height() / 2.0
}

/// Whether `pointer` is at or above the vertical midpoint of `bounds`.
///
/// An upward reorder only commits once this holds.
pub fn before_midpoint(pointer: Point, bounds: Rect) -> bool {
    let bounds = bounds.abs();
    local_point(pointer, bounds).y <= bounds.height() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

    #[test]
    fn examples_from_the_edges() {
        assert_eq!(classify(Point::new(10.0, 50.0), BOX), Zone::Left);
        assert_eq!(classify(Point::new(90.0, 50.0), BOX), Zone::Right);
        assert_eq!(classify(Point::new(50.0, 10.0), BOX), Zone::Top);
        assert_eq!(classify(Point::new(50.0, 90.0), BOX), Zone::Bottom);
    }

    #[test]
    fn vertical_bands_win_in_corners() {
        assert_eq!(classify(Point::new(5.0, 5.0), BOX), Zone::Top);
        assert_eq!(classify(Point::new(95.0, 5.0), BOX), Zone::Top);
        assert_eq!(classify(Point::new(5.0, 95.0), BOX), Zone::Bottom);
        assert_eq!(classify(Point::new(95.0, 95.0), BOX), Zone::Bottom);
    }

    #[test]
    fn geometric_center_is_center_for_any_size() {
        for bounds in [
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Rect::new(10.0, 20.0, 410.0, 60.0),
            Rect::new(-300.0, -5.0, -100.0, 900.0),
            Rect::new(3.5, 7.25, 4.0, 8.0),
        ] {
            assert_eq!(classify(bounds.center(), bounds), Zone::Center);
        }
    }

    #[test]
    fn translated_boxes_use_local_coordinates() {
        let bounds = Rect::new(200.0, 400.0, 300.0, 440.0);
        // 40 tall: top band is y < 12 locally.
        assert_eq!(classify(Point::new(250.0, 405.0), bounds), Zone::Top);
        assert_eq!(classify(Point::new(250.0, 435.0), bounds), Zone::Bottom);
        assert_eq!(classify(Point::new(205.0, 420.0), bounds), Zone::Left);
        assert_eq!(classify(Point::new(295.0, 420.0), bounds), Zone::Right);
    }

    #[test]
    fn thresholds_are_strict() {
        // Exactly on the 30% line is not inside the top band.
        assert_eq!(classify(Point::new(50.0, 30.0), BOX), Zone::Center);
        assert_eq!(classify(Point::new(50.0, 70.0), BOX), Zone::Center);
        assert_eq!(classify(Point::new(30.0, 50.0), BOX), Zone::Center);
        assert_eq!(classify(Point::new(70.0, 50.0), BOX), Zone::Center);
    }

    #[test]
    fn reflections_within_a_band_agree() {
        // Mirror across the vertical axis while staying in the top band.
        for x in [1.0, 12.0, 29.0, 40.0] {
            let a = classify(Point::new(x, 15.0), BOX);
            let b = classify(Point::new(100.0 - x, 15.0), BOX);
            assert_eq!(a, Zone::Top);
            assert_eq!(a, b);
        }
        // Mirror across the horizontal axis while staying in the left band.
        for y in [31.0, 40.0, 49.0] {
            let a = classify(Point::new(10.0, y), BOX);
            let b = classify(Point::new(10.0, 100.0 - y), BOX);
            assert_eq!(a, Zone::Left);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn inside_points_are_always_active() {
        let mut y = 0.5;
        while y < 100.0 {
            let mut x = 0.5;
            while x < 100.0 {
                assert!(classify(Point::new(x, y), BOX).is_active());
                x += 7.0;
            }
            y += 7.0;
        }
    }

    #[test]
    fn missing_or_non_finite_input_is_none() {
        assert_eq!(classify_opt(None, Some(BOX)), Zone::None);
        assert_eq!(classify_opt(Some(Point::new(1.0, 1.0)), None), Zone::None);
        assert_eq!(classify_opt(None, None), Zone::None);
        assert_eq!(classify(Point::new(f64::NAN, 10.0), BOX), Zone::None);
        assert_eq!(
            classify(Point::new(5.0, 5.0), Rect::new(0.0, 0.0, f64::INFINITY, 1.0)),
            Zone::None
        );
    }

    #[test]
    fn custom_margin_is_clamped() {
        let wide = ZoneParams::with_edge_margin(0.9);
        // Clamped to 0.5: everything off the center lines falls into top/bottom.
        assert_eq!(wide.classify(Point::new(50.0, 49.0), BOX), Zone::Top);
        assert_eq!(wide.classify(Point::new(50.0, 51.0), BOX), Zone::Bottom);
        assert_eq!(wide.classify(Point::new(10.0, 50.0), BOX), Zone::Left);

        let none = ZoneParams::with_edge_margin(0.0);
        assert_eq!(none.classify(Point::new(1.0, 1.0), BOX), Zone::Center);

        let bogus = ZoneParams::with_edge_margin(f64::NAN);
        assert_eq!(bogus.classify(Point::new(50.0, 10.0), BOX), Zone::Top);
    }

    #[test]
    fn midpoint_guards_meet_at_the_middle() {
        let bounds = Rect::new(0.0, 100.0, 80.0, 140.0);
        assert!(!past_midpoint(Point::new(0.0, 116.0), bounds));
        assert!(past_midpoint(Point::new(0.0, 120.0), bounds));
        assert!(past_midpoint(Point::new(0.0, 124.0), bounds));
        assert!(before_midpoint(Point::new(0.0, 116.0), bounds));
        assert!(before_midpoint(Point::new(0.0, 120.0), bounds));
        assert!(!before_midpoint(Point::new(0.0, 124.0), bounds));
    }

    #[test]
    fn midpoint_guards_follow_the_zone_on_reversed_boxes() {
        let reversed = Rect::new(80.0, 140.0, 0.0, 100.0);
        let upper = Point::new(40.0, 110.0);
        let lower = Point::new(40.0, 130.0);
        assert_eq!(classify(upper, reversed), Zone::Top);
        assert!(before_midpoint(upper, reversed));
        assert!(!past_midpoint(upper, reversed));
        assert_eq!(classify(lower, reversed), Zone::Bottom);
        assert!(past_midpoint(lower, reversed));
        assert!(!before_midpoint(lower, reversed));
    }
}
