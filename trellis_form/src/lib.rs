// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Form: the component tree a form builder edits.
//!
//! A form is an ordered top-level sequence of [`ComponentNode`]s. Fields can be
//! grouped side by side in a row layout ([`ComponentKind::HorizontalLayout`]),
//! whose child order is the left-to-right order.
//!
//! [`FormTree`] owns that structure and executes the structural edits a drag
//! and drop engine asks for:
//!
//! - [`FormTree::move_within`]: stable reorder inside one sequence.
//! - [`FormTree::create_row`]: replace a target with a new row of two.
//! - [`FormTree::add_to_row`]: put a node at either end of an existing row.
//! - [`FormTree::detach`] / [`FormTree::remove`]: take a node out, dissolving a
//!   row that would be left with a single member.
//!
//! It keeps a parent index in sync with every edit, so [`FormTree::parent_row`]
//! is a map lookup rather than a scan of the whole form.
//!
//! ```rust
//! use trellis_form::{ComponentKind, FormTree};
//! use trellis_zone::Side;
//!
//! let mut form = FormTree::new();
//! let name = form.create(ComponentKind::TextInput).unwrap();
//! let email = form.create(ComponentKind::Email).unwrap();
//! let (name_id, email_id) = (name.id, email.id);
//! form.push(name);
//! form.push(email);
//!
//! // Drop `email` on the right side of `name`.
//! let row = form.create_row(email_id, name_id, Side::Right).unwrap();
//! assert_eq!(form.roots().len(), 1);
//! assert_eq!(form.parent_row(email_id).map(|r| r.id), Some(row));
//!
//! // Pulling one member out dissolves the row again.
//! form.detach(email_id);
//! assert_eq!(form.roots()[0].id, name_id);
//! assert!(form.check_invariants());
//! ```
//!
//! Invalid requests (unknown ids, non-container parents, self-targets) are
//! refused by returning `None`/`false` and leave the tree unchanged.
//!
//! ## Features
//!
//! - `std` (default): forwards `std` to `trellis_zone`.
//! - `libm`: forwards `libm` to `trellis_zone` for `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;
mod types;

pub use tree::{FormTree, NodePath};
pub use types::{ComponentKind, ComponentNode, Location, NodeId};
