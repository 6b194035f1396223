// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zone and side types.

/// Discrete classification of a pointer relative to a hovered item.
///
/// Zones are transient: they are recomputed on every hover tick and are never persisted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Upper edge band: insert before the item.
    Top,
    /// Lower edge band: insert after the item.
    Bottom,
    /// Left edge band: place to the left of the item in a row.
    Left,
    /// Right edge band: place to the right of the item in a row.
    Right,
    /// Body of the item.
    Center,
    /// No classification (missing input, pointer left, or gesture ended).
    #[default]
    None,
}

impl Zone {
    /// `true` for [`Zone::Top`] and [`Zone::Bottom`].
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// `true` for [`Zone::Left`] and [`Zone::Right`].
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// `true` for every zone except [`Zone::None`].
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::None)
    }

    /// The row side implied by a horizontal zone.
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::Left => Some(Side::Left),
            Self::Right => Some(Side::Right),
            _ => None,
        }
    }
}

/// End of a row layout at which a member is placed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Leftmost position.
    Left,
    /// Rightmost position.
    Right,
}

impl Side {
    /// Order `dragged` and `target` left-to-right for a new row.
    ///
    /// Dropping on the left side puts the dragged item first.
    pub fn order<T>(self, dragged: T, target: T) -> [T; 2] {
        match self {
            Self::Left => [dragged, target],
            Self::Right => [target, dragged],
        }
    }
}

impl From<Side> for Zone {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => Self::Left,
            Side::Right => Self::Right,
        }
    }
}
