// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement resolver.
//!
//! ## Overview
//!
//! Turns (payload, zone, hovered item, tree topology) into a [`Placement`].
//! The zone is an argument, never ambient state, and the tree is only read
//! through a [`RowLookup`], so every decision here is a pure function of its inputs
//! apart from the tracked index of a reorder payload.
//!
//! ## Branches
//!
//! Dispatch is by payload kind first, then by zone:
//!
//! | Payload     | Zone          | Hover                      | Drop                           |
//! |-------------|---------------|----------------------------|--------------------------------|
//! | `Reorder`   | top/bottom    | guarded [`Placement::Move`]| nothing                        |
//! | `Reorder`   | left/right    | nothing                    | `AddToRow` or `CreateRow`      |
//! | `Reorder`   | center/none   | nothing                    | nothing                        |
//! | `Palette`   | any           | nothing                    | [`Delegation::Insert`]         |
//! | `RowMember` | any           | nothing                    | [`Delegation::Relocate`]       |
//!
//! Dropping an item on itself never requests anything.
//!
//! ## Directional guard
//!
//! A live reorder moving downward only commits once the pointer is at or past
//! the vertical midpoint of the hovered item; moving upward only commits at or
//! above it. After a commit the payload's index follows the item, so sweeping
//! across siblings reorders smoothly instead of oscillating.

use kurbo::{Point, Rect};
use trellis_zone::{Zone, ZoneParams, before_midpoint, past_midpoint};

use crate::lookup::RowLookup;
use crate::payload::{DragPayload, PlacementNode};
use crate::placement::{Delegation, Placement};

/// The item under the pointer.
#[derive(Debug)]
pub struct HoverTarget<'a, N> {
    /// The hovered node.
    pub node: &'a N,
    /// Its index within its current sibling sequence.
    pub index: usize,
}

impl<N> Clone for HoverTarget<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for HoverTarget<'_, N> {}

impl<'a, N> HoverTarget<'a, N> {
    /// Target `node` at `index`.
    pub fn new(node: &'a N, index: usize) -> Self {
        Self { node, index }
    }
}

/// Placement decision logic, configured with the zone parameters it classifies with.
#[derive(Copy, Clone, Debug, Default)]
pub struct Resolver {
    params: ZoneParams,
}

impl Resolver {
    /// Resolver using the default edge margin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver using custom zone parameters.
    pub fn with_params(params: ZoneParams) -> Self {
        Self { params }
    }

    /// The zone parameters in use.
    pub fn params(&self) -> ZoneParams {
        self.params
    }

    /// Classify a pointer over an item's box.
    pub fn classify(&self, pointer: Point, bounds: Rect) -> Zone {
        self.params.classify(pointer, bounds)
    }

    /// Resolve one hover tick.
    ///
    /// Only reorder payloads over a top/bottom zone can produce a request here.
    /// On commit the payload's tracked index is updated to the target index.
    pub fn on_hover<N: PlacementNode>(
        &self,
        payload: &mut DragPayload<N>,
        target: HoverTarget<'_, N>,
        zone: Zone,
        pointer: Point,
        bounds: Rect,
    ) -> Placement<N> {
        let DragPayload::Reorder { node, index } = payload else {
            return Placement::None;
        };
        if !zone.is_vertical() {
            return Placement::None;
        }

        let (drag_index, hover_index) = (*index, target.index);
        if drag_index == hover_index || node.id() == target.node.id() {
            return Placement::None;
        }
        if drag_index < hover_index && !past_midpoint(pointer, bounds) {
            return Placement::None;
        }
        if drag_index > hover_index && !before_midpoint(pointer, bounds) {
            return Placement::None;
        }

        *index = hover_index;
        tracing::debug!(from = drag_index, to = hover_index, "live reorder");
        Placement::Move {
            from: drag_index,
            to: hover_index,
        }
    }

    /// Resolve a drop on `target` with the zone last computed for it.
    ///
    /// Row membership of the target is discovered through `rows` and only for
    /// left/right drops of reorder payloads.
    pub fn on_drop<N, R>(
        &self,
        payload: &DragPayload<N>,
        target: HoverTarget<'_, N>,
        zone: Zone,
        rows: &R,
    ) -> Placement<N>
    where
        N: PlacementNode,
        R: RowLookup<N> + ?Sized,
    {
        let target_id = target.node.id();
        let placement = match payload {
            DragPayload::Palette { kind } => Placement::Delegate(Delegation::Insert {
                kind: *kind,
                target: target_id,
                zone,
            }),
            DragPayload::RowMember { node } => {
                if node.id() == target_id {
                    Placement::None
                } else {
                    Placement::Delegate(Delegation::Relocate {
                        node: node.clone(),
                        target: target_id,
                        zone,
                    })
                }
            }
            DragPayload::Reorder { node, index } => {
                let Some(side) = zone.side() else {
                    return Placement::None;
                };
                if node.id() == target_id {
                    return Placement::None;
                }
                match rows.parent_row(&target_id) {
                    Some(row) => Placement::AddToRow {
                        dragged: node.clone(),
                        row,
                        side,
                    },
                    // Indices are only comparable within the same sequence.
                    None if *index == target.index => Placement::None,
                    None => Placement::CreateRow {
                        dragged: node.clone(),
                        target: target.node.clone(),
                        side,
                    },
                }
            }
        };
        tracing::debug!(kind = ?payload.kind(), ?zone, ?placement, "resolved drop");
        placement
    }
}
