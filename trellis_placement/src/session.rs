// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag gesture state.
//!
//! A [`DragSession`] lives from drag start to drag end and carries the only
//! transient state of a gesture: the payload (with its tracked index), the
//! last computed [`Zone`], and which item that zone belongs to. Every way of
//! ending a gesture consumes the session, so nothing leaks into the next one.
//!
//! [`DragController`] holds at most one session and is what a list widget
//! usually keeps around.
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use trellis_placement::{DragController, DragPayload, HoverTarget, NoRows};
//! # use trellis_placement::{PlacementNode, PlacementSink};
//! # use trellis_zone::{Side, Zone};
//! # #[derive(Clone, Debug)] struct Field(u32);
//! # impl PlacementNode for Field {
//! #     type Id = u32; type Kind = ();
//! #     fn id(&self) -> u32 { self.0 } fn kind(&self) {}
//! #     fn is_row(&self) -> bool { false } fn children(&self) -> &[Self] { &[] }
//! # }
//! # #[derive(Default)] struct Rows(Vec<(u32, u32, Side)>);
//! # impl PlacementSink<Field> for Rows {
//! #     fn request_move(&mut self, _: usize, _: usize) {}
//! #     fn request_create_row(&mut self, d: Field, t: Field, s: Side) { self.0.push((d.0, t.0, s)); }
//! #     fn request_add_to_row(&mut self, _: Field, _: Field, _: Side) {}
//! #     fn request_insert(&mut self, _: (), _: u32, _: Zone) {}
//! #     fn request_relocate(&mut self, _: Field, _: u32, _: Zone) {}
//! #     fn request_select(&mut self, _: Option<u32>) {}
//! #     fn request_delete(&mut self, _: u32) {}
//! #     fn notify_delete_by_drag_out(&mut self, _: u32) {}
//! # }
//! let (a, b) = (Field(1), Field(2));
//! let b_box = Rect::new(0.0, 40.0, 300.0, 80.0);
//! let mut sink = Rows::default();
//!
//! let mut drag = DragController::new();
//! drag.begin(DragPayload::reorder(a, 0));
//! drag.hover(HoverTarget::new(&b, 1), Some(Point::new(290.0, 60.0)), Some(b_box), &mut sink);
//! assert!(drag.drop_on(HoverTarget::new(&b, 1), &NoRows, &mut sink));
//! assert_eq!(sink.0, vec![(1, 2, Side::Right)]);
//! assert!(!drag.is_active());
//! ```

use kurbo::{Point, Rect};
use trellis_zone::{Indicator, Zone};

use crate::lookup::RowLookup;
use crate::payload::{DragPayload, PayloadKind, PlacementNode};
use crate::placement::{Placement, PlacementSink};
use crate::resolver::{HoverTarget, Resolver};

/// State of one drag gesture.
#[derive(Clone, Debug)]
pub struct DragSession<N: PlacementNode> {
    payload: DragPayload<N>,
    resolver: Resolver,
    zone: Zone,
    hovered: Option<N::Id>,
}

impl<N: PlacementNode> DragSession<N> {
    /// Start a gesture with the default resolver.
    pub fn new(payload: DragPayload<N>) -> Self {
        Self::with_resolver(payload, Resolver::new())
    }

    /// Start a gesture with a configured resolver.
    pub fn with_resolver(payload: DragPayload<N>, resolver: Resolver) -> Self {
        tracing::debug!(kind = ?payload.kind(), "drag started");
        Self {
            payload,
            resolver,
            zone: Zone::None,
            hovered: None,
        }
    }

    /// What is being dragged.
    pub fn payload(&self) -> &DragPayload<N> {
        &self.payload
    }

    /// Last computed zone.
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Item the last zone was computed for.
    pub fn hovered(&self) -> Option<N::Id> {
        self.hovered
    }

    /// Feedback to draw over the hovered item.
    ///
    /// Hidden over the dragged item itself and for reorder drags over the
    /// center, where a drop would not change anything.
    pub fn indicator(&self) -> Indicator {
        let over_self = self.hovered.is_some() && self.hovered == self.payload.dragged_id();
        let inert_center = self.payload.kind() == PayloadKind::Reorder && self.zone == Zone::Center;
        if over_self || inert_center {
            Indicator::Hidden
        } else {
            Indicator::for_zone(self.zone)
        }
    }

    /// One hover tick over `target`.
    ///
    /// A missing pointer resets the zone to [`Zone::None`]; a missing box
    /// (item not mounted yet) skips the tick and keeps the previous state.
    /// Live reorders are forwarded to `sink` immediately.
    pub fn hover<S>(
        &mut self,
        target: HoverTarget<'_, N>,
        pointer: Option<Point>,
        bounds: Option<Rect>,
        sink: &mut S,
    ) -> Zone
    where
        S: PlacementSink<N> + ?Sized,
    {
        let Some(bounds) = bounds else {
            return self.zone;
        };
        let id = target.node.id();
        let Some(pointer) = pointer else {
            self.zone = Zone::None;
            self.hovered = Some(id);
            return Zone::None;
        };

        let zone = self.resolver.classify(pointer, bounds);
        if zone != self.zone || self.hovered != Some(id) {
            tracing::trace!(target_id = ?id, ?zone, "zone changed");
        }
        self.zone = zone;
        self.hovered = Some(id);

        self.resolver
            .on_hover(&mut self.payload, target, zone, pointer, bounds)
            .apply(sink);
        zone
    }

    /// The pointer left the item `id`.
    pub fn leave(&mut self, id: N::Id) {
        if self.hovered == Some(id) {
            self.zone = Zone::None;
            self.hovered = None;
        }
    }

    /// End the gesture with a drop on `target` and return the resulting request.
    ///
    /// The zone cached for `target` by the last hover tick decides the
    /// placement; a drop on an item that never received a hover tick uses
    /// [`Zone::None`].
    pub fn finish<R>(self, target: HoverTarget<'_, N>, rows: &R) -> Placement<N>
    where
        R: RowLookup<N> + ?Sized,
    {
        let zone = if self.hovered == Some(target.node.id()) {
            self.zone
        } else {
            Zone::None
        };
        self.resolver.on_drop(&self.payload, target, zone, rows)
    }

    /// Like [`DragSession::finish`], forwarding the request to `sink`.
    ///
    /// Returns whether a request was issued.
    pub fn drop_on<R, S>(self, target: HoverTarget<'_, N>, rows: &R, sink: &mut S) -> bool
    where
        R: RowLookup<N> + ?Sized,
        S: PlacementSink<N> + ?Sized,
    {
        self.finish(target, rows).apply(sink)
    }

    /// End the gesture over a removal target.
    ///
    /// Existing nodes are reported through
    /// [`PlacementSink::notify_delete_by_drag_out`]; palette drags have nothing to remove.
    pub fn drop_on_removal_target<S>(self, sink: &mut S) -> bool
    where
        S: PlacementSink<N> + ?Sized,
    {
        let Some(id) = self.payload.dragged_id() else {
            return false;
        };
        tracing::debug!(?id, "dragged out for removal");
        sink.notify_delete_by_drag_out(id);
        true
    }

    /// End the gesture without a drop. Requests nothing.
    pub fn cancel(self) {
        tracing::debug!(kind = ?self.payload.kind(), "drag canceled");
    }
}

/// Holder for the single active drag gesture of a list.
#[derive(Clone, Debug)]
pub struct DragController<N: PlacementNode> {
    session: Option<DragSession<N>>,
    resolver: Resolver,
}

impl<N: PlacementNode> Default for DragController<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: PlacementNode> DragController<N> {
    /// Controller using the default resolver.
    pub fn new() -> Self {
        Self::with_resolver(Resolver::new())
    }

    /// Controller whose sessions use `resolver`.
    pub fn with_resolver(resolver: Resolver) -> Self {
        Self {
            session: None,
            resolver,
        }
    }

    /// Start a gesture. A gesture still in flight is canceled first.
    pub fn begin(&mut self, payload: DragPayload<N>) {
        if let Some(stale) = self.session.take() {
            stale.cancel();
        }
        self.session = Some(DragSession::with_resolver(payload, self.resolver));
    }

    /// Whether a gesture is in flight.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The gesture in flight.
    pub fn session(&self) -> Option<&DragSession<N>> {
        self.session.as_ref()
    }

    /// Last computed zone; [`Zone::None`] when idle.
    pub fn zone(&self) -> Zone {
        self.session.as_ref().map_or(Zone::None, DragSession::zone)
    }

    /// Feedback to draw; [`Indicator::Hidden`] when idle.
    pub fn indicator(&self) -> Indicator {
        self.session
            .as_ref()
            .map_or(Indicator::Hidden, DragSession::indicator)
    }

    /// Forward a hover tick; [`Zone::None`] when idle.
    pub fn hover<S>(
        &mut self,
        target: HoverTarget<'_, N>,
        pointer: Option<Point>,
        bounds: Option<Rect>,
        sink: &mut S,
    ) -> Zone
    where
        S: PlacementSink<N> + ?Sized,
    {
        match self.session.as_mut() {
            Some(session) => session.hover(target, pointer, bounds, sink),
            None => Zone::None,
        }
    }

    /// Forward a pointer-leave for item `id`.
    pub fn leave(&mut self, id: N::Id) {
        if let Some(session) = self.session.as_mut() {
            session.leave(id);
        }
    }

    /// End the gesture with a drop on `target` and return the resulting request.
    ///
    /// Use this when the lookup and the sink are the same object; otherwise
    /// [`DragController::drop_on`] is shorter.
    pub fn finish<R>(&mut self, target: HoverTarget<'_, N>, rows: &R) -> Placement<N>
    where
        R: RowLookup<N> + ?Sized,
    {
        self.session
            .take()
            .map_or(Placement::None, |session| session.finish(target, rows))
    }

    /// End the gesture with a drop on `target`. Returns whether a request was issued.
    pub fn drop_on<R, S>(&mut self, target: HoverTarget<'_, N>, rows: &R, sink: &mut S) -> bool
    where
        R: RowLookup<N> + ?Sized,
        S: PlacementSink<N> + ?Sized,
    {
        self.session
            .take()
            .is_some_and(|session| session.drop_on(target, rows, sink))
    }

    /// End the gesture over a removal target.
    pub fn drop_on_removal_target<S>(&mut self, sink: &mut S) -> bool
    where
        S: PlacementSink<N> + ?Sized,
    {
        self.session
            .take()
            .is_some_and(|session| session.drop_on_removal_target(sink))
    }

    /// End the gesture without a drop (released outside any target, or aborted).
    ///
    /// Returns whether a gesture was in flight.
    pub fn cancel(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                session.cancel();
                true
            }
            None => false,
        }
    }

    /// Select `id` (or clear the selection) in response to a click.
    pub fn select<S>(&self, id: Option<N::Id>, sink: &mut S)
    where
        S: PlacementSink<N> + ?Sized,
    {
        sink.request_select(id);
    }

    /// Delete `id` in response to a direct action.
    ///
    /// A gesture dragging that node is canceled first.
    pub fn delete<S>(&mut self, id: N::Id, sink: &mut S)
    where
        S: PlacementSink<N> + ?Sized,
    {
        let drags_it = self
            .session
            .as_ref()
            .is_some_and(|s| s.payload.dragged_id() == Some(id));
        if drags_it {
            self.cancel();
        }
        sink.request_delete(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{LinearRowLookup, NoRows};
    use crate::test_util::{Item, Recorded, RecordingSink};
    use alloc::vec;
    use trellis_zone::Side;

    const B_BOX: Rect = Rect::new(0.0, 100.0, 200.0, 200.0);

    #[test]
    fn right_drop_creates_exactly_one_row() {
        let (a, b) = (Item::leaf(1), Item::leaf(2));
        let mut sink = RecordingSink::default();
        let mut drag = DragController::new();
        drag.begin(DragPayload::reorder(a, 0));
        let zone = drag.hover(
            HoverTarget::new(&b, 1),
            Some(Point::new(190.0, 150.0)),
            Some(B_BOX),
            &mut sink,
        );
        assert_eq!(zone, Zone::Right);
        assert_eq!(drag.indicator(), Indicator::BarRight);
        assert!(drag.drop_on(HoverTarget::new(&b, 1), &NoRows, &mut sink));
        assert_eq!(sink.log, vec![Recorded::CreateRow(1, 2, Side::Right)]);
        assert_eq!(drag.zone(), Zone::None);
    }

    #[test]
    fn left_drop_on_row_member_adds_to_row() {
        let nodes = vec![
            Item::row(10, vec![Item::leaf(2), Item::leaf(3)]),
            Item::leaf(1),
        ];
        let rows = LinearRowLookup::new(&nodes);
        let mut sink = RecordingSink::default();
        let mut drag = DragController::new();
        drag.begin(DragPayload::reorder(nodes[1].clone(), 1));
        let b = &nodes[0].children[1];
        drag.hover(
            HoverTarget::new(b, 1),
            Some(Point::new(10.0, 150.0)),
            Some(B_BOX),
            &mut sink,
        );
        drag.drop_on(HoverTarget::new(b, 1), &rows, &mut sink);
        assert_eq!(sink.log, vec![Recorded::AddToRow(1, 10, Side::Left)]);
    }

    #[test]
    fn cancel_requests_nothing_and_resets() {
        let mut sink = RecordingSink::default();
        let mut drag = DragController::new();
        drag.begin(DragPayload::reorder(Item::leaf(1), 0));
        drag.hover(
            HoverTarget::new(&Item::leaf(2), 1),
            Some(Point::new(5.0, 150.0)),
            Some(B_BOX),
            &mut sink,
        );
        assert_eq!(drag.zone(), Zone::Left);
        assert!(drag.cancel());
        assert!(sink.log.is_empty());
        assert_eq!(drag.zone(), Zone::None);
        assert_eq!(drag.indicator(), Indicator::Hidden);
        assert!(!drag.cancel());
    }

    #[test]
    fn live_reorder_during_hover() {
        let mut sink = RecordingSink::default();
        let mut drag = DragController::new();
        drag.begin(DragPayload::reorder(Item::leaf(1), 2));
        let target = Item::leaf(6);
        // Top band, above the midpoint while moving down: nothing.
        drag.hover(
            HoverTarget::new(&target, 5),
            Some(Point::new(100.0, 125.0)),
            Some(B_BOX),
            &mut sink,
        );
        assert!(sink.log.is_empty());
        drag.hover(
            HoverTarget::new(&target, 5),
            Some(Point::new(100.0, 180.0)),
            Some(B_BOX),
            &mut sink,
        );
        assert_eq!(sink.log, vec![Recorded::Move(2, 5)]);
        assert_eq!(drag.session().and_then(|s| s.payload().index()), Some(5));

        // Dropping after a vertical hover adds nothing further.
        drag.drop_on(HoverTarget::new(&target, 5), &NoRows, &mut sink);
        assert_eq!(sink.log, vec![Recorded::Move(2, 5)]);
    }

    #[test]
    fn missing_input_is_skipped() {
        let mut sink = RecordingSink::default();
        let mut session = DragSession::new(DragPayload::reorder(Item::leaf(1), 0));
        let b = Item::leaf(2);
        session.hover(
            HoverTarget::new(&b, 1),
            Some(Point::new(190.0, 150.0)),
            Some(B_BOX),
            &mut sink,
        );
        assert_eq!(session.zone(), Zone::Right);

        // No box: keep the previous zone.
        assert_eq!(
            session.hover(HoverTarget::new(&b, 1), Some(Point::new(5.0, 150.0)), None, &mut sink),
            Zone::Right
        );
        // No pointer: zone goes to none and a drop does nothing.
        assert_eq!(
            session.hover(HoverTarget::new(&b, 1), None, Some(B_BOX), &mut sink),
            Zone::None
        );
        assert!(!session.drop_on(HoverTarget::new(&b, 1), &NoRows, &mut sink));
        assert!(sink.log.is_empty());
    }

    #[test]
    fn leaving_clears_the_zone_for_that_item_only() {
        let mut sink = RecordingSink::default();
        let mut session = DragSession::new(DragPayload::<Item>::palette("text"));
        let b = Item::leaf(2);
        session.hover(
            HoverTarget::new(&b, 0),
            Some(Point::new(100.0, 105.0)),
            Some(B_BOX),
            &mut sink,
        );
        assert_eq!(session.zone(), Zone::Top);
        session.leave(9);
        assert_eq!(session.zone(), Zone::Top);
        session.leave(2);
        assert_eq!(session.zone(), Zone::None);
        assert_eq!(session.hovered(), None);
    }

    #[test]
    fn drop_on_an_unhovered_item_uses_no_zone() {
        let mut sink = RecordingSink::default();
        let mut session = DragSession::new(DragPayload::reorder(Item::leaf(1), 0));
        let (b, c) = (Item::leaf(2), Item::leaf(3));
        session.hover(
            HoverTarget::new(&b, 1),
            Some(Point::new(190.0, 150.0)),
            Some(B_BOX),
            &mut sink,
        );
        assert!(!session.drop_on(HoverTarget::new(&c, 2), &NoRows, &mut sink));
        assert!(sink.log.is_empty());
    }

    #[test]
    fn removal_target_reports_existing_nodes_only() {
        let mut sink = RecordingSink::default();
        let mut drag = DragController::new();
        drag.begin(DragPayload::row_member(Item::leaf(4)));
        assert!(drag.drop_on_removal_target(&mut sink));
        drag.begin(DragPayload::palette("text"));
        assert!(!drag.drop_on_removal_target(&mut sink));
        assert_eq!(sink.log, vec![Recorded::DragOut(4)]);
        assert!(!drag.is_active());
    }

    #[test]
    fn begin_replaces_a_stale_gesture() {
        let mut sink = RecordingSink::default();
        let mut drag = DragController::new();
        drag.begin(DragPayload::reorder(Item::leaf(1), 0));
        drag.hover(
            HoverTarget::new(&Item::leaf(2), 1),
            Some(Point::new(190.0, 150.0)),
            Some(B_BOX),
            &mut sink,
        );
        drag.begin(DragPayload::reorder(Item::leaf(3), 2));
        assert_eq!(drag.zone(), Zone::None);
        assert_eq!(drag.session().and_then(|s| s.payload().dragged_id()), Some(3));
        assert!(sink.log.is_empty());
    }

    #[test]
    fn indicator_hides_inert_feedback() {
        let mut sink = RecordingSink::default();
        let a = Item::leaf(1);
        let mut session = DragSession::new(DragPayload::reorder(a.clone(), 0));
        session.hover(
            HoverTarget::new(&Item::leaf(2), 1),
            Some(B_BOX.center()),
            Some(B_BOX),
            &mut sink,
        );
        assert_eq!(session.zone(), Zone::Center);
        assert_eq!(session.indicator(), Indicator::Hidden);

        session.hover(
            HoverTarget::new(&a, 0),
            Some(Point::new(5.0, 150.0)),
            Some(B_BOX),
            &mut sink,
        );
        assert_eq!(session.zone(), Zone::Left);
        assert_eq!(session.indicator(), Indicator::Hidden);

        let mut palette = DragSession::new(DragPayload::<Item>::palette("date"));
        palette.hover(
            HoverTarget::new(&Item::leaf(2), 1),
            Some(B_BOX.center()),
            Some(B_BOX),
            &mut sink,
        );
        assert_eq!(palette.indicator(), Indicator::Highlight);
    }

    #[test]
    fn selection_and_deletion_are_forwarded() {
        let mut sink = RecordingSink::default();
        let mut drag = DragController::new();
        drag.select(Some(3), &mut sink);
        drag.select(None, &mut sink);
        drag.begin(DragPayload::reorder(Item::leaf(3), 0));
        drag.delete(3, &mut sink);
        assert!(!drag.is_active());
        assert_eq!(
            sink.log,
            vec![
                Recorded::Select(Some(3)),
                Recorded::Select(None),
                Recorded::Delete(3)
            ]
        );
    }
}
