// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag gestures over a laid-out form: zones + placement + form adapter.
//!
//! This example shows how to combine:
//! - `trellis_zone` for classifying the pointer against an item's box,
//! - `trellis_placement` for turning hover and drop into structural requests,
//! - `trellis_form` (through `FormCanvas`) for executing them.
//!
//! Run:
//! - `cargo run -p trellis_demos --example form_drag`
//! - `RUST_LOG=trellis_placement=debug,trellis_form=debug` to see the requests.

use std::collections::HashMap;

use kurbo::{Point, Rect};
use trellis_form::{ComponentKind, ComponentNode, FormTree, NodeId};
use trellis_placement::adapters::form::FormCanvas;
use trellis_placement::{DragController, DragPayload};
use trellis_zone::Indicator;

const WIDTH: f64 = 320.0;
const ITEM_HEIGHT: f64 = 48.0;

/// Stack top-level items vertically; split rows evenly across the width.
fn layout(tree: &FormTree) -> HashMap<NodeId, Rect> {
    let mut boxes = HashMap::new();
    for (i, node) in tree.roots().iter().enumerate() {
        let y0 = i as f64 * ITEM_HEIGHT;
        let slot = Rect::new(0.0, y0, WIDTH, y0 + ITEM_HEIGHT);
        boxes.insert(node.id, slot);
        let n = node.children.len().max(1) as f64;
        for (j, member) in node.children.iter().enumerate() {
            let x0 = j as f64 * WIDTH / n;
            boxes.insert(member.id, Rect::new(x0, y0, x0 + WIDTH / n, y0 + ITEM_HEIGHT));
        }
    }
    boxes
}

fn print_form(title: &str, tree: &FormTree) {
    fn line(node: &ComponentNode) -> String {
        if node.is_row() {
            let members: Vec<_> = node.children.iter().map(|m| m.label.as_str()).collect();
            format!("[{}]", members.join(" | "))
        } else {
            node.label.clone()
        }
    }
    println!("{title}:");
    for node in tree.roots() {
        println!("  {}", line(node));
    }
}

/// Point at fractions of `id`'s box.
fn at(
    boxes: &HashMap<NodeId, Rect>,
    id: NodeId,
    fx: f64,
    fy: f64,
) -> (Option<Point>, Option<Rect>) {
    let Some(b) = boxes.get(&id).copied() else {
        return (None, None);
    };
    let p = Point::new(b.x0 + b.width() * fx, b.y0 + b.height() * fy);
    (Some(p), Some(b))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut tree = FormTree::new();
    let mut ids = Vec::new();
    for (kind, label) in [
        (ComponentKind::TextInput, "First name"),
        (ComponentKind::TextInput, "Last name"),
        (ComponentKind::Email, "Email"),
        (ComponentKind::Checkbox, "Subscribe"),
    ] {
        let Some(node) = tree.create(kind) else {
            return;
        };
        let node = node.with_label(label);
        ids.push(node.id);
        tree.push(node);
    }
    let [first, last, email, subscribe] = [ids[0], ids[1], ids[2], ids[3]];

    let mut canvas = FormCanvas::new(tree);
    let mut drag = DragController::new();
    print_form("initial", canvas.tree());

    // 1) Drag "Subscribe" upward through "Email" and "Last name": it moves
    //    live each time the pointer is above a target's vertical midpoint.
    let boxes = layout(canvas.tree());
    if let Some(payload) = canvas.reorder_payload(3) {
        drag.begin(payload);
        let (p, b) = at(&boxes, email, 0.5, 0.1);
        canvas.hover(&mut drag, email, p, b);
        let (p, b) = at(&boxes, last, 0.5, 0.1);
        let zone = canvas.hover(&mut drag, last, p, b);
        println!("zone over 'Last name': {zone:?}");
        canvas.drop_on(&mut drag, last);
    }
    print_form("after live reorder", canvas.tree());

    // 2) Drop "Last name" on the right edge of "First name": new row.
    let boxes = layout(canvas.tree());
    let index = canvas.tree().location_of(last).map_or(0, |loc| loc.index);
    if let Some(payload) = canvas.reorder_payload(index) {
        drag.begin(payload);
        let (p, b) = at(&boxes, first, 0.95, 0.5);
        canvas.hover(&mut drag, first, p, b);
        assert_eq!(
            drag.indicator(),
            Indicator::BarRight,
            "right edge shows the row bar"
        );
        canvas.drop_on(&mut drag, first);
    }
    print_form("after row creation", canvas.tree());

    // 3) Drag a Date field from the palette onto the left edge of "First name":
    //    it joins the existing row.
    let boxes = layout(canvas.tree());
    drag.begin(DragPayload::palette(ComponentKind::Date));
    let (p, b) = at(&boxes, first, 0.05, 0.5);
    canvas.hover(&mut drag, first, p, b);
    canvas.drop_on(&mut drag, first);
    print_form("after palette drop", canvas.tree());
    println!("selected: {:?}", canvas.selected());

    // 4) Pull "Last name" out of the row and below "Email".
    let boxes = layout(canvas.tree());
    if let Some(payload) = canvas.row_member_payload(last) {
        drag.begin(payload);
        let (p, b) = at(&boxes, email, 0.5, 0.9);
        canvas.hover(&mut drag, email, p, b);
        canvas.drop_on(&mut drag, email);
    }
    print_form("after row-member move", canvas.tree());

    // 5) Drag "Subscribe" onto the trash area.
    let index = canvas.tree().location_of(subscribe).map_or(0, |loc| loc.index);
    if let Some(payload) = canvas.reorder_payload(index) {
        drag.begin(payload);
        drag.drop_on_removal_target(&mut canvas);
    }
    print_form("after drag-out", canvas.tree());
    assert!(canvas.tree().check_invariants(), "form stays well-formed");
    tracing::info!(components = canvas.tree().node_count(), "done");
}
