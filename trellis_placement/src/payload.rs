// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag payloads and the node abstraction the resolver works over.

use core::fmt::Debug;

/// Read-only view of a placed component as the resolver needs it.
///
/// Implemented by the host's node type (see the `form_adapter` feature for
/// `trellis_form::ComponentNode`). Requests carry copies of nodes, hence `Clone`.
pub trait PlacementNode: Clone + Debug {
    /// Unique identifier.
    type Id: Copy + Eq + Debug;
    /// Component type tag, used for palette drags.
    type Kind: Copy + Debug;

    /// Identifier of this node.
    fn id(&self) -> Self::Id;

    /// Type tag of this node.
    fn kind(&self) -> Self::Kind;

    /// Whether this node is a row layout container.
    fn is_row(&self) -> bool;

    /// Ordered members (empty for leaves).
    fn children(&self) -> &[Self];
}

/// Where a drag started, which decides the resolver branch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    /// An item of this list being reordered.
    Reorder,
    /// A not-yet-created component from the palette.
    Palette,
    /// A member currently housed inside a row layout.
    RowMember,
}

/// What is being dragged, created at drag start and dropped at drag end.
#[derive(Clone, Debug)]
pub enum DragPayload<N: PlacementNode> {
    /// An existing item of this list.
    Reorder {
        /// Copy of the dragged node.
        node: N,
        /// Current index of the dragged node; follows live reorders.
        index: usize,
    },
    /// A palette entry; no node exists yet.
    Palette {
        /// Type of the component to create.
        kind: N::Kind,
    },
    /// An existing member of a row.
    RowMember {
        /// Copy of the dragged node.
        node: N,
    },
}

impl<N: PlacementNode> DragPayload<N> {
    /// Payload for reordering `node`, currently at `index`.
    pub fn reorder(node: N, index: usize) -> Self {
        Self::Reorder { node, index }
    }

    /// Payload for a palette entry of type `kind`.
    pub fn palette(kind: N::Kind) -> Self {
        Self::Palette { kind }
    }

    /// Payload for a node dragged out of its row.
    pub fn row_member(node: N) -> Self {
        Self::RowMember { node }
    }

    /// Which resolver branch applies.
    pub fn kind(&self) -> PayloadKind {
        match self {
            Self::Reorder { .. } => PayloadKind::Reorder,
            Self::Palette { .. } => PayloadKind::Palette,
            Self::RowMember { .. } => PayloadKind::RowMember,
        }
    }

    /// The dragged node, if it already exists.
    pub fn node(&self) -> Option<&N> {
        match self {
            Self::Reorder { node, .. } | Self::RowMember { node } => Some(node),
            Self::Palette { .. } => None,
        }
    }

    /// Id of the dragged node, if it already exists.
    pub fn dragged_id(&self) -> Option<N::Id> {
        self.node().map(PlacementNode::id)
    }

    /// Tracked index of a reorder drag.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Reorder { index, .. } => Some(*index),
            _ => None,
        }
    }
}
