// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Placement: decide what a drop in a form builder list does.
//!
//! ## Overview
//!
//! While a component is dragged over already-placed items, this crate turns
//! the pointer position into a structural request:
//!
//! - reorder in place (live, while hovering),
//! - create a side-by-side row with the hovered item,
//! - add to the row the hovered item already lives in,
//! - or hand the drop to the surrounding canvas (palette and row-member drags).
//!
//! It never edits the tree. Requests go out through [`PlacementSink`], which
//! the owner of the form implements; row membership is read through an
//! injected [`RowLookup`].
//!
//! ## Pieces
//!
//! - [`DragPayload`]: what is dragged, one variant per origin (reorder, palette, row member).
//! - [`Resolver`]: pure decision logic; [`Resolver::on_hover`] and [`Resolver::on_drop`].
//! - [`Placement`] / [`Delegation`]: the resulting request; [`Placement::apply`] forwards it.
//! - [`DragSession`] / [`DragController`]: per-gesture state (payload, cached
//!   zone, hovered item) with hover, leave, drop, drag-out, and cancel.
//! - [`trellis_zone`]: the geometric classifier the resolver uses for zones.
//!
//! ## Gesture flow
//!
//! 1) `begin` with a payload at drag start.
//! 2) `hover` on every pointer move over an item. The zone is recomputed from
//!    scratch each tick; reorder drags over the top/bottom band may move live.
//! 3) `drop_on` the hovered item. Left/right row requests are only ever issued here.
//! 4) Or `cancel`: nothing is requested and the zone goes back to none.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//! - `form_adapter`: enables [`adapters::form`], which executes requests
//!   against a `trellis_form::FormTree`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
mod lookup;
mod payload;
mod placement;
mod resolver;
mod session;

pub use lookup::{LinearRowLookup, NoRows, RowLookup};
pub use payload::{DragPayload, PayloadKind, PlacementNode};
pub use placement::{Delegation, Placement, PlacementSink};
pub use resolver::{HoverTarget, Resolver};
pub use session::{DragController, DragSession};

#[cfg(test)]
pub(crate) mod test_util {
    use alloc::vec::Vec;

    use trellis_zone::{Side, Zone};

    use crate::{PlacementNode, PlacementSink};

    #[derive(Clone, Debug, PartialEq)]
    pub(crate) struct Item {
        pub(crate) id: u32,
        row: bool,
        pub(crate) children: Vec<Self>,
    }

    impl Item {
        pub(crate) fn leaf(id: u32) -> Self {
            Self {
                id,
                row: false,
                children: Vec::new(),
            }
        }

        pub(crate) fn row(id: u32, children: Vec<Self>) -> Self {
            Self {
                id,
                row: true,
                children,
            }
        }
    }

    impl PlacementNode for Item {
        type Id = u32;
        type Kind = &'static str;

        fn id(&self) -> u32 {
            self.id
        }

        fn kind(&self) -> &'static str {
            if self.row { "row" } else { "field" }
        }

        fn is_row(&self) -> bool {
            self.row
        }

        fn children(&self) -> &[Self] {
            &self.children
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    pub(crate) enum Recorded {
        Move(usize, usize),
        CreateRow(u32, u32, Side),
        AddToRow(u32, u32, Side),
        Insert(&'static str, u32, Zone),
        Relocate(u32, u32, Zone),
        Select(Option<u32>),
        Delete(u32),
        DragOut(u32),
    }

    #[derive(Debug, Default)]
    pub(crate) struct RecordingSink {
        pub(crate) log: Vec<Recorded>,
    }

    impl PlacementSink<Item> for RecordingSink {
        fn request_move(&mut self, from: usize, to: usize) {
            self.log.push(Recorded::Move(from, to));
        }

        fn request_create_row(&mut self, dragged: Item, target: Item, side: Side) {
            self.log.push(Recorded::CreateRow(dragged.id, target.id, side));
        }

        fn request_add_to_row(&mut self, dragged: Item, row: Item, side: Side) {
            self.log.push(Recorded::AddToRow(dragged.id, row.id, side));
        }

        fn request_insert(&mut self, kind: &'static str, target: u32, zone: Zone) {
            self.log.push(Recorded::Insert(kind, target, zone));
        }

        fn request_relocate(&mut self, node: Item, target: u32, zone: Zone) {
            self.log.push(Recorded::Relocate(node.id, target, zone));
        }

        fn request_select(&mut self, id: Option<u32>) {
            self.log.push(Recorded::Select(id));
        }

        fn request_delete(&mut self, id: u32) {
            self.log.push(Recorded::Delete(id));
        }

        fn notify_delete_by_drag_out(&mut self, id: u32) {
            self.log.push(Recorded::DragOut(id));
        }
    }
}
