// Copyright 2026 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-session lifecycle: created on drag start, mutated on move, consumed
//! exactly once on drop or cancel.

use alloc::string::String;
use hashbrown::HashMap;
use kurbo::{Point, Vec2};

/// Whether (and how) a container lets its children be dragged.
///
/// The tracker refuses to start a session while the mode is [`DragMode::None`];
/// the distinction between [`DragMode::Clone`] and [`DragMode::Caption`] is a
/// presentation concern for the host (drag the whole component image vs. only
/// its caption) and does not affect resolution or reordering.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DragMode {
    /// Dragging is disabled.
    #[default]
    None,
    /// Drag a clone of the component.
    Clone,
    /// Drag by the component's caption only.
    Caption,
}

impl DragMode {
    /// Whether this mode permits starting a drag.
    pub const fn allows_drag(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// State of one in-flight drag.
///
/// A session is created by [`DragSession::begin`] when the pointer starts a
/// drag, updated with [`DragSession::move_to`] on every pointer move, and
/// consumed exactly once: [`DragSession::drop_at`] produces a
/// [`CompletedDrag`] for the reordering engine, while [`DragSession::cancel`]
/// discards it without any mutation. Consumption is enforced by move
/// semantics; there is no way to drop the same session twice.
///
/// `source` is the container the drag started in; `dragged` is the component
/// being moved. They differ when the host initiates the drag from a nested
/// reference (for example a tab caption standing in for its sheet).
#[derive(Clone, Debug)]
pub struct DragSession<K> {
    source: K,
    dragged: K,
    origin: Point,
    current: Point,
    payload: HashMap<String, String>,
}

impl<K: Copy> DragSession<K> {
    /// Start a session at the pointer-down position.
    pub fn begin(source: K, dragged: K, origin: Point) -> Self {
        Self {
            source,
            dragged,
            origin,
            current: origin,
            payload: HashMap::new(),
        }
    }

    /// The container the drag started in.
    pub fn source(&self) -> K {
        self.source
    }

    /// The component being dragged.
    pub fn dragged(&self) -> K {
        self.dragged
    }

    /// Pointer position at drag start.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Most recent pointer position.
    pub fn current(&self) -> Point {
        self.current
    }

    /// Record a pointer move.
    pub fn move_to(&mut self, position: Point) {
        self.current = position;
    }

    /// Attach an opaque key/value pair for the host to read back on drop.
    pub fn set_payload(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.payload.insert(key.into(), value.into());
    }

    /// Read back an opaque payload value.
    pub fn payload(&self, key: &str) -> Option<&str> {
        self.payload.get(key).map(String::as_str)
    }

    /// Consume the session with a drop at `position`.
    pub fn drop_at(mut self, position: Point) -> CompletedDrag<K> {
        self.current = position;
        CompletedDrag {
            source: self.source,
            dragged: self.dragged,
            origin: self.origin,
            drop_point: position,
            payload: self.payload,
        }
    }

    /// Consume the session without dropping. No mutation ever happens for a
    /// cancelled drag; the reordering engine is simply never invoked.
    pub fn cancel(self) {}
}

/// The outcome of a consumed session, handed to the reordering engine.
#[derive(Clone, Debug)]
pub struct CompletedDrag<K> {
    source: K,
    dragged: K,
    origin: Point,
    drop_point: Point,
    payload: HashMap<String, String>,
}

impl<K: Copy> CompletedDrag<K> {
    /// The container the drag started in.
    pub fn source(&self) -> K {
        self.source
    }

    /// The component that was dragged.
    pub fn dragged(&self) -> K {
        self.dragged
    }

    /// Pointer position at drag start.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Pointer position at drop.
    pub fn drop_point(&self) -> Point {
        self.drop_point
    }

    /// Pointer travel between drag start and drop. This is the translation a
    /// free-canvas move applies.
    pub fn delta(&self) -> Vec2 {
        self.drop_point - self.origin
    }

    /// Read back an opaque payload value.
    pub fn payload(&self, key: &str) -> Option<&str> {
        self.payload.get(key).map(String::as_str)
    }
}

/// Tracks at most one active session across pointer callbacks.
///
/// Drag handling is single-threaded and event-driven: down may begin a
/// session, moves update it, and up or cancel consume it. Independent drags
/// never overlap, so the tracker holds at most one session and a second
/// `begin` while one is active is refused.
#[derive(Clone, Debug, Default)]
pub struct DragTracker<K> {
    active: Option<DragSession<K>>,
}

impl<K: Copy> DragTracker<K> {
    /// Create a tracker with no active session.
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Begin a session if `mode` permits dragging and none is active.
    pub fn begin(&mut self, mode: DragMode, source: K, dragged: K, origin: Point) -> bool {
        if !mode.allows_drag() || self.active.is_some() {
            return false;
        }
        self.active = Some(DragSession::begin(source, dragged, origin));
        true
    }

    /// Record a pointer move on the active session, if any.
    pub fn move_to(&mut self, position: Point) {
        if let Some(session) = self.active.as_mut() {
            session.move_to(position);
        }
    }

    /// Access the active session.
    pub fn session(&self) -> Option<&DragSession<K>> {
        self.active.as_ref()
    }

    /// Mutable access to the active session (for payload writes).
    pub fn session_mut(&mut self) -> Option<&mut DragSession<K>> {
        self.active.as_mut()
    }

    /// Whether a drag is in flight.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Consume the active session with a drop at `position`.
    pub fn drop_at(&mut self, position: Point) -> Option<CompletedDrag<K>> {
        self.active.take().map(|s| s.drop_at(position))
    }

    /// Abort the active session (escape key, drop outside any target).
    ///
    /// Returns `true` if a session was discarded.
    pub fn cancel(&mut self) -> bool {
        match self.active.take() {
            Some(session) => {
                session.cancel();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_records_moves_and_delta() {
        let mut session: DragSession<u32> = DragSession::begin(1, 2, Point::new(10.0, 10.0));
        session.move_to(Point::new(25.0, 5.0));
        assert_eq!(session.current(), Point::new(25.0, 5.0));

        let done = session.drop_at(Point::new(30.0, 0.0));
        assert_eq!(done.delta(), Vec2::new(20.0, -10.0));
        assert_eq!(done.source(), 1);
        assert_eq!(done.dragged(), 2);
    }

    #[test]
    fn payload_round_trips_through_drop() {
        let mut session: DragSession<u32> = DragSession::begin(1, 2, Point::ZERO);
        session.set_payload("component", "tab-3");
        let done = session.drop_at(Point::ZERO);
        assert_eq!(done.payload("component"), Some("tab-3"));
        assert_eq!(done.payload("missing"), None);
    }

    #[test]
    fn tracker_refuses_disabled_mode() {
        let mut tracker: DragTracker<u32> = DragTracker::new();
        assert!(!tracker.begin(DragMode::None, 1, 2, Point::ZERO));
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn tracker_holds_at_most_one_session() {
        let mut tracker: DragTracker<u32> = DragTracker::new();
        assert!(tracker.begin(DragMode::Clone, 1, 2, Point::ZERO));
        assert!(!tracker.begin(DragMode::Clone, 3, 4, Point::ZERO));

        let done = tracker.drop_at(Point::new(5.0, 5.0)).unwrap();
        assert_eq!(done.dragged(), 2);
        // Consumed exactly once.
        assert!(tracker.drop_at(Point::ZERO).is_none());
    }

    #[test]
    fn cancel_discards_without_drop() {
        let mut tracker: DragTracker<u32> = DragTracker::new();
        tracker.begin(DragMode::Caption, 1, 2, Point::ZERO);
        assert!(tracker.cancel());
        assert!(!tracker.cancel());
        assert!(tracker.drop_at(Point::ZERO).is_none());
    }

    #[test]
    fn moves_without_session_are_ignored() {
        let mut tracker: DragTracker<u32> = DragTracker::new();
        tracker.move_to(Point::new(100.0, 100.0));
        assert!(!tracker.is_dragging());
    }
}
