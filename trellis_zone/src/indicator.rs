// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drop feedback derived from a [`Zone`].
//!
//! Hosts draw this while hovering; it carries no structural meaning.

use kurbo::Rect;

use crate::Zone;

/// Visual affordance for a hovered item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Indicator {
    /// Insertion line along the top edge.
    LineAbove,
    /// Insertion line along the bottom edge.
    LineBelow,
    /// Bar along the left edge (row placement).
    BarLeft,
    /// Bar along the right edge (row placement).
    BarRight,
    /// Whole item highlighted.
    Highlight,
    /// Nothing drawn.
    Hidden,
}

impl Indicator {
    /// The affordance for `zone`.
    pub const fn for_zone(zone: Zone) -> Self {
        match zone {
            Zone::Top => Self::LineAbove,
            Zone::Bottom => Self::LineBelow,
            Zone::Left => Self::BarLeft,
            Zone::Right => Self::BarRight,
            Zone::Center => Self::Highlight,
            Zone::None => Self::Hidden,
        }
    }

    /// Rectangle to paint for an item occupying `bounds`.
    ///
    /// Lines and bars are `thickness` wide, drawn inside `bounds` and clamped
    /// to its extent. Returns `None` for [`Indicator::Hidden`].
    pub fn rect(self, bounds: Rect, thickness: f64) -> Option<Rect> {
        let b = bounds.abs();
        let t = thickness.max(0.0);
        let tv = t.min(b.height());
        let th = t.min(b.width());
        match self {
            Self::LineAbove => Some(Rect::new(b.x0, b.y0, b.x1, b.y0 + tv)),
            Self::LineBelow => Some(Rect::new(b.x0, b.y1 - tv, b.x1, b.y1)),
            Self::BarLeft => Some(Rect::new(b.x0, b.y0, b.x0 + th, b.y1)),
            Self::BarRight => Some(Rect::new(b.x1 - th, b.y0, b.x1, b.y1)),
            Self::Highlight => Some(b),
            Self::Hidden => None,
        }
    }
}

impl From<Zone> for Indicator {
    fn from(zone: Zone) -> Self {
        Self::for_zone(zone)
    }
}
