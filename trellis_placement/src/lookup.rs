// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parent-row discovery.
//!
//! The resolver asks "is this node already in a row?" once per left/right drop.
//! That question is injected through [`RowLookup`] so hosts can answer it from
//! a maintained parent index and tests can supply a fake.

use crate::payload::PlacementNode;

/// Finds the row layout housing a node.
pub trait RowLookup<N: PlacementNode> {
    /// The row containing `id`, or `None` if it is not in a row.
    fn parent_row(&self, id: &N::Id) -> Option<N>;
}

impl<N: PlacementNode, R: RowLookup<N> + ?Sized> RowLookup<N> for &R {
    fn parent_row(&self, id: &N::Id) -> Option<N> {
        (**self).parent_row(id)
    }
}

/// A lookup for flat lists: nothing is ever in a row.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoRows;

impl<N: PlacementNode> RowLookup<N> for NoRows {
    fn parent_row(&self, _: &N::Id) -> Option<N> {
        None
    }
}

/// Depth-first scan of a node forest for a row whose members include the node.
///
/// Linear in the size of the forest; fine for the handful of components a form holds.
#[derive(Copy, Clone, Debug)]
pub struct LinearRowLookup<'a, N> {
    roots: &'a [N],
}

impl<'a, N: PlacementNode> LinearRowLookup<'a, N> {
    /// Scan `roots` and their descendants.
    pub fn new(roots: &'a [N]) -> Self {
        Self { roots }
    }
}

impl<N: PlacementNode> RowLookup<N> for LinearRowLookup<'_, N> {
    fn parent_row(&self, id: &N::Id) -> Option<N> {
        find_row(self.roots, id).cloned()
    }
}

fn find_row<'a, N: PlacementNode>(nodes: &'a [N], id: &N::Id) -> Option<&'a N> {
    nodes.iter().find_map(|node| {
        if node.is_row() && node.children().iter().any(|c| c.id() == *id) {
            Some(node)
        } else {
            find_row(node.children(), id)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::Item;
    use alloc::vec;

    #[test]
    fn linear_lookup_finds_the_housing_row() {
        let nodes = vec![
            Item::leaf(1),
            Item::row(10, vec![Item::leaf(2), Item::leaf(3)]),
            Item::leaf(4),
        ];
        let lookup = LinearRowLookup::new(&nodes);
        assert_eq!(lookup.parent_row(&3).map(|r| r.id), Some(10));
        assert_eq!(lookup.parent_row(&2).map(|r| r.id), Some(10));
        assert!(lookup.parent_row(&1).is_none());
        assert!(lookup.parent_row(&10).is_none());
        assert!(lookup.parent_row(&99).is_none());
    }

    #[test]
    fn no_rows_never_finds_one() {
        let lookup = NoRows;
        assert!(RowLookup::<Item>::parent_row(&lookup, &1).is_none());
    }
}
