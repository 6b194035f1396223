// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the form tree: identifiers, component kinds, and nodes.

use alloc::string::String;
use alloc::vec::Vec;

/// Identifier for a component, unique across a [`FormTree`](crate::FormTree).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(pub(crate) u64);

impl NodeId {
    /// Wrap a raw id, for example one restored by the host.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Closed set of component types a form can hold.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ComponentKind {
    /// Single-line text field.
    TextInput,
    /// Multi-line text field.
    TextArea,
    /// Numeric field.
    Number,
    /// Email address field.
    Email,
    /// Drop-down choice.
    Select,
    /// Boolean checkbox.
    Checkbox,
    /// Radio button group.
    Radio,
    /// Date picker.
    Date,
    /// Action button.
    Button,
    /// Row container laying its members out side by side.
    HorizontalLayout,
}

impl ComponentKind {
    /// Whether nodes of this kind hold children.
    pub const fn is_container(self) -> bool {
        matches!(self, Self::HorizontalLayout)
    }

    /// Label given to freshly created components.
    pub const fn default_label(self) -> &'static str {
        match self {
            Self::TextInput => "Text Input",
            Self::TextArea => "Text Area",
            Self::Number => "Number",
            Self::Email => "Email",
            Self::Select => "Select",
            Self::Checkbox => "Checkbox",
            Self::Radio => "Radio Group",
            Self::Date => "Date",
            Self::Button => "Button",
            Self::HorizontalLayout => "Row",
        }
    }
}

/// A placed component.
///
/// Only containers ([`ComponentKind::is_container`]) carry children. For a row,
/// the child order is the left-to-right order.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentNode {
    /// Unique identifier.
    pub id: NodeId,
    /// Component type.
    pub kind: ComponentKind,
    /// Display label.
    pub label: String,
    /// Ordered members; empty for leaves.
    pub children: Vec<Self>,
}

impl ComponentNode {
    /// Create a leaf or an empty container with the kind's default label.
    pub fn new(id: NodeId, kind: ComponentKind) -> Self {
        Self {
            id,
            kind,
            label: String::from(kind.default_label()),
            children: Vec::new(),
        }
    }

    /// Replace the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Whether this node is a row layout.
    pub fn is_row(&self) -> bool {
        self.kind == ComponentKind::HorizontalLayout
    }

    /// Visit this node and its descendants in depth-first order.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a Self)) {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }
}

/// Where a node sits: its container (`None` for the top-level sequence) and its index there.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Location {
    /// Containing node, or `None` for the top level.
    pub parent: Option<NodeId>,
    /// Index within the containing sequence.
    pub index: usize,
}
