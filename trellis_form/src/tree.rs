// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Form tree implementation: structure, parent index, and structural edits.

use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;
use trellis_zone::Side;

use crate::types::{ComponentKind, ComponentNode, Location, NodeId};

/// Root→node sequence of ids, inclusive of the node itself.
pub type NodePath = SmallVec<[NodeId; 4]>;

/// Ordered form of components with row layouts.
///
/// The tree owns the top-level sequence and keeps a parent index in sync with
/// every edit, so parent and row lookups never scan the whole form.
///
/// Edits that would break the tree's invariants are refused and leave it
/// untouched: ids stay unique, every node lives in exactly one sequence, and
/// a row layout never holds fewer than two members once an edit returns.
#[derive(Clone, Debug)]
pub struct FormTree {
    roots: Vec<ComponentNode>,
    /// Container of every live node; `None` for the top level.
    parents: HashMap<NodeId, Option<NodeId>>,
    next_id: u64,
}

impl Default for FormTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FormTree {
    /// Create an empty form.
    pub fn new() -> Self {
        Self {
            roots: Vec::new(),
            parents: HashMap::new(),
            next_id: 1,
        }
    }

    /// Materialize a new, not yet placed component with a fresh id.
    ///
    /// Returns `None` once the id space is exhausted.
    pub fn create(&mut self, kind: ComponentKind) -> Option<ComponentNode> {
        self.alloc_id().map(|id| ComponentNode::new(id, kind))
    }

    /// `u64::MAX` is never handed out, so a restored node carrying it
    /// exhausts the allocator instead of wrapping it.
    fn alloc_id(&mut self) -> Option<NodeId> {
        let id = self.next_id;
        self.next_id = id.checked_add(1)?;
        Some(NodeId(id))
    }

    /// The top-level sequence.
    pub fn roots(&self) -> &[ComponentNode] {
        &self.roots
    }

    /// Whether the form has no components.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of placed components, containers included.
    pub fn node_count(&self) -> usize {
        self.parents.len()
    }

    /// Whether `id` is placed in this form.
    pub fn contains(&self, id: NodeId) -> bool {
        self.parents.contains_key(&id)
    }

    /// Container of `id`, or `None` for top-level or unknown nodes.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(&id).copied().flatten()
    }

    /// The row layout housing `id`, if any.
    pub fn parent_row(&self, id: NodeId) -> Option<&ComponentNode> {
        let parent = self.parent_of(id)?;
        self.get(parent).filter(|n| n.is_row())
    }

    /// Root→node path for a placed node.
    pub fn path_to(&self, id: NodeId) -> Option<NodePath> {
        let mut path = NodePath::new();
        let mut current = Some(id);
        while let Some(node) = current {
            current = *self.parents.get(&node)?;
            path.push(node);
        }
        path.reverse();
        Some(path)
    }

    /// Look up a placed node.
    pub fn get(&self, id: NodeId) -> Option<&ComponentNode> {
        let path = self.path_to(id)?;
        let mut seq = self.roots.as_slice();
        let mut found = None;
        for step in path {
            let node = seq.iter().find(|n| n.id == step)?;
            seq = &node.children;
            found = Some(node);
        }
        found
    }

    /// Container and index of a placed node.
    pub fn location_of(&self, id: NodeId) -> Option<Location> {
        let parent = *self.parents.get(&id)?;
        let index = self.sequence(parent)?.iter().position(|n| n.id == id)?;
        Some(Location { parent, index })
    }

    /// Visit every placed node in depth-first order.
    pub fn visit<'a>(&'a self, mut f: impl FnMut(&'a ComponentNode)) {
        for node in &self.roots {
            node.visit(&mut f);
        }
    }

    /// Append a node (and its subtree) to the top level.
    ///
    /// Refused like [`FormTree::insert`].
    pub fn push(&mut self, node: ComponentNode) -> bool {
        self.insert(None, usize::MAX, node)
    }

    /// Insert a node at `index` in `parent`'s sequence (`None` for the top level).
    ///
    /// `index` is clamped to the sequence length. Returns `false` if `parent`
    /// is not a placed container, any id in the subtree is already in use, or
    /// the subtree itself is malformed (a leaf with children, a row with fewer
    /// than two members).
    pub fn insert(&mut self, parent: Option<NodeId>, index: usize, node: ComponentNode) -> bool {
        if !self.is_fresh(&node) || !is_well_shaped(&node) {
            return false;
        }
        if let Some(parent) = parent {
            if !self.get(parent).is_some_and(|p| p.kind.is_container()) {
                return false;
            }
        }
        self.place(parent, index, node)
    }

    /// Move the node at `from` to `to` within one sequence.
    ///
    /// The node is taken out and reinserted at `to`; siblings keep their relative order.
    pub fn move_within(&mut self, parent: Option<NodeId>, from: usize, to: usize) -> bool {
        let Some(seq) = self.sequence_mut(parent) else {
            return false;
        };
        if from >= seq.len() || to >= seq.len() {
            return false;
        }
        if from != to {
            let node = seq.remove(from);
            seq.insert(to, node);
        }
        true
    }

    /// Replace `target`'s slot with a new row holding `dragged` and `target`.
    ///
    /// `side` says on which side of `target` the dragged node lands. `dragged`
    /// is detached from wherever it lives first, dissolving its old row if
    /// that leaves a single member.
    ///
    /// Refused (returning `None`) for self-targets, containers, and targets
    /// already housed in a row; use [`FormTree::add_to_row`] for the latter.
    pub fn create_row(&mut self, dragged: NodeId, target: NodeId, side: Side) -> Option<NodeId> {
        if dragged == target {
            return None;
        }
        if self.get(dragged)?.kind.is_container()
            || self.get(target)?.kind.is_container()
            || self.parent_row(target).is_some()
        {
            return None;
        }

        let row_id = self.alloc_id()?;
        let dragged_node = self.detach(dragged)?;
        let loc = self.location_of(target)?;
        let target_node = self.sequence_mut(loc.parent)?.remove(loc.index);

        let mut row = ComponentNode::new(row_id, ComponentKind::HorizontalLayout);
        row.children.extend(side.order(dragged_node, target_node));
        self.place(loc.parent, loc.index, row);
        tracing::debug!(
            row = row_id.0,
            dragged = dragged.0,
            target = target.0,
            ?side,
            "created row"
        );
        Some(row_id)
    }

    /// Put `dragged` at the left or right end of an existing row.
    ///
    /// A member of the same row is moved to that end instead; the row is not
    /// dissolved in between.
    pub fn add_to_row(&mut self, dragged: NodeId, row: NodeId, side: Side) -> bool {
        if dragged == row || !self.get(row).is_some_and(ComponentNode::is_row) {
            return false;
        }
        if !self.get(dragged).is_some_and(|n| !n.kind.is_container()) {
            return false;
        }

        if self.parent_of(dragged) == Some(row) {
            let (Some(loc), Some(len)) = (
                self.location_of(dragged),
                self.get(row).map(|r| r.children.len()),
            ) else {
                return false;
            };
            let to = match side {
                Side::Left => 0,
                Side::Right => len - 1,
            };
            return self.move_within(Some(row), loc.index, to);
        }

        let Some(node) = self.detach(dragged) else {
            return false;
        };
        let index = match side {
            Side::Left => 0,
            Side::Right => usize::MAX,
        };
        tracing::debug!(dragged = dragged.0, row = row.0, ?side, "added to row");
        self.place(Some(row), index, node)
    }

    /// Take a node (and its subtree) out of the form.
    ///
    /// A row left with a single member is dissolved: the survivor takes the
    /// row's slot. A row left empty is removed.
    pub fn detach(&mut self, id: NodeId) -> Option<ComponentNode> {
        let loc = self.location_of(id)?;
        let node = self.sequence_mut(loc.parent)?.remove(loc.index);
        unindex_subtree(&mut self.parents, &node);
        if let Some(container) = loc.parent {
            self.settle(container);
        }
        Some(node)
    }

    /// Delete a node, with the same row dissolution as [`FormTree::detach`].
    pub fn remove(&mut self, id: NodeId) -> Option<ComponentNode> {
        let node = self.detach(id)?;
        tracing::debug!(id = id.0, "removed component");
        Some(node)
    }

    /// Check the structural invariants: unique ids, a consistent parent
    /// index, leaves without children, and rows with at least two members.
    pub fn check_invariants(&self) -> bool {
        fn walk(
            tree: &FormTree,
            nodes: &[ComponentNode],
            parent: Option<NodeId>,
            seen: &mut HashSet<NodeId>,
        ) -> bool {
            nodes.iter().all(|n| {
                seen.insert(n.id)
                    && tree.parents.get(&n.id) == Some(&parent)
                    && (n.kind.is_container() || n.children.is_empty())
                    && (!n.is_row() || n.children.len() >= 2)
                    && walk(tree, &n.children, Some(n.id), seen)
            })
        }

        let mut seen = HashSet::new();
        walk(self, &self.roots, None, &mut seen) && seen.len() == self.parents.len()
    }

    fn is_fresh(&self, node: &ComponentNode) -> bool {
        let mut seen = HashSet::new();
        let mut fresh = true;
        node.visit(&mut |n| {
            fresh &= !self.parents.contains_key(&n.id) && seen.insert(n.id);
        });
        fresh
    }

    fn sequence(&self, parent: Option<NodeId>) -> Option<&[ComponentNode]> {
        match parent {
            None => Some(&self.roots),
            Some(p) => self.get(p).map(|n| n.children.as_slice()),
        }
    }

    fn sequence_mut(&mut self, parent: Option<NodeId>) -> Option<&mut Vec<ComponentNode>> {
        let Some(parent) = parent else {
            return Some(&mut self.roots);
        };
        let path = self.path_to(parent)?;
        let mut seq = &mut self.roots;
        for step in path {
            let current = seq;
            let node = current.iter_mut().find(|n| n.id == step)?;
            seq = &mut node.children;
        }
        Some(seq)
    }

    /// Insert without freshness checks, then register the subtree.
    fn place(&mut self, parent: Option<NodeId>, index: usize, node: ComponentNode) -> bool {
        let mut entries = Vec::new();
        subtree_entries(&node, parent, &mut entries);
        let Some(seq) = self.sequence_mut(parent) else {
            return false;
        };
        let index = index.min(seq.len());
        seq.insert(index, node);
        for (id, parent) in entries {
            self.next_id = self.next_id.max(id.0.saturating_add(1));
            self.parents.insert(id, parent);
        }
        true
    }

    /// Restore the row invariant after `container` lost a member.
    fn settle(&mut self, container: NodeId) {
        let Some(row) = self.get(container) else {
            return;
        };
        if !row.is_row() || row.children.len() >= 2 {
            return;
        }
        let Some(loc) = self.location_of(container) else {
            return;
        };

        let survivor = {
            let Some(seq) = self.sequence_mut(loc.parent) else {
                return;
            };
            let mut row = seq.remove(loc.index);
            let last = row.children.pop();
            debug_assert!(row.children.is_empty(), "settled rows hold at most one member");
            last.map(|member| {
                let id = member.id;
                seq.insert(loc.index, member);
                id
            })
        };

        self.parents.remove(&container);
        match survivor {
            Some(id) => {
                self.parents.insert(id, loc.parent);
                tracing::debug!(row = container.0, survivor = id.0, "dissolved row");
            }
            None => {
                if let Some(parent) = loc.parent {
                    self.settle(parent);
                }
            }
        }
    }
}

fn is_well_shaped(node: &ComponentNode) -> bool {
    let shape_ok = if node.is_row() {
        node.children.len() >= 2
    } else {
        node.kind.is_container() || node.children.is_empty()
    };
    shape_ok && node.children.iter().all(is_well_shaped)
}

fn subtree_entries(
    node: &ComponentNode,
    parent: Option<NodeId>,
    out: &mut Vec<(NodeId, Option<NodeId>)>,
) {
    out.push((node.id, parent));
    for child in &node.children {
        subtree_entries(child, Some(node.id), out);
    }
}

fn unindex_subtree(parents: &mut HashMap<NodeId, Option<NodeId>>, node: &ComponentNode) {
    parents.remove(&node.id);
    for child in &node.children {
        unindex_subtree(parents, child);
    }
}
