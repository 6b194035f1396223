// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural requests and the collaborator contract that executes them.
//!
//! The resolver never edits the tree. It produces a [`Placement`], and
//! [`Placement::apply`] forwards it to whoever owns the tree through
//! [`PlacementSink`]. Each non-empty placement results in exactly one call.

use trellis_zone::{Side, Zone};

use crate::payload::PlacementNode;

/// A structural change requested by the resolver.
#[derive(Clone, Debug)]
pub enum Placement<N: PlacementNode> {
    /// Nothing to do.
    None,
    /// Reorder within the dragged item's sibling sequence.
    Move {
        /// Current index of the dragged item.
        from: usize,
        /// Index it moves to.
        to: usize,
    },
    /// Replace `target`'s slot with a new row of `dragged` and `target`.
    CreateRow {
        /// The dragged node.
        dragged: N,
        /// The node dropped on.
        target: N,
        /// Side of `target` the dragged node lands on.
        side: Side,
    },
    /// Put `dragged` at one end of an existing row.
    AddToRow {
        /// The dragged node.
        dragged: N,
        /// The row housing the node dropped on.
        row: N,
        /// End of the row.
        side: Side,
    },
    /// A drop the surrounding canvas has to carry out.
    Delegate(Delegation<N>),
}

/// Drops whose origin lies outside this list.
#[derive(Clone, Debug)]
pub enum Delegation<N: PlacementNode> {
    /// Materialize a palette component next to `target` as implied by `zone`.
    Insert {
        /// Type of the component to create.
        kind: N::Kind,
        /// Node dropped on.
        target: N::Id,
        /// Zone at drop time.
        zone: Zone,
    },
    /// Move a row member next to `target` as implied by `zone`.
    ///
    /// Detaching the node can leave its row with one member. The collaborator
    /// must dissolve such a row before the request returns.
    Relocate {
        /// The dragged row member.
        node: N,
        /// Node dropped on.
        target: N::Id,
        /// Zone at drop time.
        zone: Zone,
    },
}

impl<N: PlacementNode> Placement<N> {
    /// Whether this requests nothing.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Forward this request to `sink`. Returns `false` for [`Placement::None`].
    pub fn apply<S>(self, sink: &mut S) -> bool
    where
        S: PlacementSink<N> + ?Sized,
    {
        match self {
            Self::None => return false,
            Self::Move { from, to } => sink.request_move(from, to),
            Self::CreateRow {
                dragged,
                target,
                side,
            } => sink.request_create_row(dragged, target, side),
            Self::AddToRow { dragged, row, side } => sink.request_add_to_row(dragged, row, side),
            Self::Delegate(Delegation::Insert { kind, target, zone }) => {
                sink.request_insert(kind, target, zone);
            }
            Self::Delegate(Delegation::Relocate { node, target, zone }) => {
                sink.request_relocate(node, target, zone);
            }
        }
        true
    }
}

/// Callbacks implemented by the owner of the form tree.
pub trait PlacementSink<N: PlacementNode> {
    /// Stable same-parent move from `from` to `to`.
    fn request_move(&mut self, from: usize, to: usize);

    /// Replace `target`'s slot with a new row ordered per `side`.
    fn request_create_row(&mut self, dragged: N, target: N, side: Side);

    /// Insert `dragged` at the `side` end of `row`.
    fn request_add_to_row(&mut self, dragged: N, row: N, side: Side);

    /// Create a component of `kind` at the position `zone` implies relative to `target`.
    fn request_insert(&mut self, kind: N::Kind, target: N::Id, zone: Zone);

    /// Move a row member to the position `zone` implies relative to `target`.
    ///
    /// A row reduced below two members must be dissolved.
    fn request_relocate(&mut self, node: N, target: N::Id, zone: Zone);

    /// Select a node, or clear the selection.
    fn request_select(&mut self, id: Option<N::Id>);

    /// Delete a node.
    fn request_delete(&mut self, id: N::Id);

    /// An existing node was dragged onto a removal target.
    fn notify_delete_by_drag_out(&mut self, id: N::Id);
}
