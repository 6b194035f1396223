// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter for Trellis Form.
//!
//! ## Feature
//!
//! Enable with `form_adapter`.
//!
//! ## Notes
//!
//! - [`ComponentNode`] implements [`PlacementNode`].
//! - [`FormTree`] implements [`RowLookup`] through its parent index.
//! - [`FormCanvas`] owns a tree plus the selection and executes every request
//!   of [`PlacementSink`], including the drops the resolver delegates:
//!
//! | Drop            | top / bottom                     | left / right                  | center / none       |
//! |-----------------|----------------------------------|-------------------------------|---------------------|
//! | palette insert  | new node before / after the slot | new node joins or forms a row | appended to the end |
//! | row-member move | moved before / after the slot    | joins or forms a row          | nothing             |
//!
//! "The slot" is the target's own top-level position, or its row's when the
//! target is a row member.

use kurbo::{Point, Rect};
use trellis_form::{ComponentKind, ComponentNode, FormTree, NodeId};
use trellis_zone::{Side, Zone};

use crate::lookup::RowLookup;
use crate::payload::{DragPayload, PlacementNode};
use crate::placement::PlacementSink;
use crate::resolver::HoverTarget;
use crate::session::DragController;

impl PlacementNode for ComponentNode {
    type Id = NodeId;
    type Kind = ComponentKind;

    fn id(&self) -> NodeId {
        self.id
    }

    fn kind(&self) -> ComponentKind {
        self.kind
    }

    fn is_row(&self) -> bool {
        self.kind == ComponentKind::HorizontalLayout
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

impl RowLookup<ComponentNode> for FormTree {
    fn parent_row(&self, id: &NodeId) -> Option<ComponentNode> {
        Self::parent_row(self, *id).cloned()
    }
}

/// A form tree together with its selection, executing placement requests.
///
/// Moves requested by reorder drags apply to the top-level sequence.
#[derive(Clone, Debug, Default)]
pub struct FormCanvas {
    tree: FormTree,
    selected: Option<NodeId>,
}

impl FormCanvas {
    /// Wrap an existing form.
    pub fn new(tree: FormTree) -> Self {
        Self {
            tree,
            selected: None,
        }
    }

    /// The form.
    pub fn tree(&self) -> &FormTree {
        &self.tree
    }

    /// Mutable access to the form.
    pub fn tree_mut(&mut self) -> &mut FormTree {
        &mut self.tree
    }

    /// Unwrap the form.
    pub fn into_tree(self) -> FormTree {
        self.tree
    }

    /// The selected component.
    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// Payload for dragging the top-level item at `index`.
    pub fn reorder_payload(&self, index: usize) -> Option<DragPayload<ComponentNode>> {
        let node = self.tree.roots().get(index)?;
        Some(DragPayload::reorder(node.clone(), index))
    }

    /// Payload for dragging `id` out of its row.
    pub fn row_member_payload(&self, id: NodeId) -> Option<DragPayload<ComponentNode>> {
        self.tree.parent_row(id)?;
        self.tree.get(id).cloned().map(DragPayload::row_member)
    }

    /// Forward a hover tick over `target` to `drag`.
    ///
    /// Row members report their row's top-level index, so live reorders move
    /// the dragged item around the row as a whole.
    pub fn hover(
        &mut self,
        drag: &mut DragController<ComponentNode>,
        target: NodeId,
        pointer: Option<Point>,
        bounds: Option<Rect>,
    ) -> Zone {
        let Some((node, index)) = self.hover_target(target) else {
            return drag.zone();
        };
        drag.hover(HoverTarget::new(&node, index), pointer, bounds, self)
    }

    /// End `drag` with a drop on `target`. Returns whether a request was issued.
    ///
    /// A drop on an unknown node cancels the gesture.
    pub fn drop_on(&mut self, drag: &mut DragController<ComponentNode>, target: NodeId) -> bool {
        let Some((node, index)) = self.hover_target(target) else {
            drag.cancel();
            return false;
        };
        drag.finish(HoverTarget::new(&node, index), &self.tree).apply(self)
    }

    fn hover_target(&self, id: NodeId) -> Option<(ComponentNode, usize)> {
        let node = self.tree.get(id)?.clone();
        let index = self.tree.location_of(self.slot_of(id))?.index;
        Some((node, index))
    }

    /// The node occupying `id`'s top-level slot: its row, or itself.
    fn slot_of(&self, id: NodeId) -> NodeId {
        self.tree.parent_row(id).map_or(id, |row| row.id)
    }

    fn insert_beside(&mut self, node: ComponentNode, target: NodeId, after: bool) -> bool {
        match self.tree.location_of(self.slot_of(target)) {
            Some(loc) => self
                .tree
                .insert(loc.parent, loc.index + usize::from(after), node),
            None => self.tree.push(node),
        }
    }

    fn join_row(&mut self, id: NodeId, target: NodeId, side: Side) -> bool {
        match self.tree.parent_row(target).map(|row| row.id) {
            Some(row) => self.tree.add_to_row(id, row, side),
            None => self.tree.create_row(id, target, side).is_some(),
        }
    }

    fn forget_if_gone(&mut self) {
        if self.selected.is_some_and(|id| !self.tree.contains(id)) {
            self.selected = None;
        }
    }
}

impl PlacementSink<ComponentNode> for FormCanvas {
    fn request_move(&mut self, from: usize, to: usize) {
        if !self.tree.move_within(None, from, to) {
            tracing::debug!(from, to, "move out of range ignored");
        }
    }

    fn request_create_row(&mut self, dragged: ComponentNode, target: ComponentNode, side: Side) {
        if self.tree.create_row(dragged.id, target.id, side).is_none() {
            tracing::debug!(dragged = ?dragged.id, target = ?target.id, "row creation refused");
        }
    }

    fn request_add_to_row(&mut self, dragged: ComponentNode, row: ComponentNode, side: Side) {
        if !self.tree.add_to_row(dragged.id, row.id, side) {
            tracing::debug!(dragged = ?dragged.id, row = ?row.id, "row insertion refused");
        }
    }

    fn request_insert(&mut self, kind: ComponentKind, target: NodeId, zone: Zone) {
        let Some(node) = self.tree.create(kind) else {
            tracing::debug!(?kind, "node ids exhausted");
            return;
        };
        let id = node.id;
        let placed = match zone {
            Zone::Top => self.insert_beside(node, target, false),
            Zone::Bottom => self.insert_beside(node, target, true),
            Zone::Left | Zone::Right => {
                let pushed = self.tree.push(node);
                if let (true, Some(side)) = (pushed, zone.side()) {
                    self.join_row(id, target, side);
                }
                pushed
            }
            Zone::Center | Zone::None => self.tree.push(node),
        };
        if placed {
            tracing::debug!(?id, ?kind, ?zone, "inserted from palette");
            self.selected = Some(id);
        }
    }

    fn request_relocate(&mut self, node: ComponentNode, target: NodeId, zone: Zone) {
        let id = node.id;
        if id == target || !self.tree.contains(id) || !self.tree.contains(target) {
            return;
        }
        match zone {
            Zone::Top | Zone::Bottom => {
                // Detach first: dissolving the old row can move the target's slot.
                if let Some(detached) = self.tree.detach(id) {
                    self.insert_beside(detached, target, zone == Zone::Bottom);
                }
            }
            Zone::Left => {
                self.join_row(id, target, Side::Left);
            }
            Zone::Right => {
                self.join_row(id, target, Side::Right);
            }
            Zone::Center | Zone::None => return,
        }
        tracing::debug!(?id, ?target, ?zone, "relocated row member");
    }

    fn request_select(&mut self, id: Option<NodeId>) {
        self.selected = id.filter(|id| self.tree.contains(*id));
    }

    fn request_delete(&mut self, id: NodeId) {
        if self.tree.remove(id).is_some() {
            self.forget_if_gone();
        }
    }

    fn notify_delete_by_drag_out(&mut self, id: NodeId) {
        tracing::debug!(?id, "deleted by drag-out");
        self.request_delete(id);
    }
}
