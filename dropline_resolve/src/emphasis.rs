// Copyright 2026 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Emphasis transitions: which visual drop marker is active while dragging.
//!
//! The host paints a marker (an insertion edge, a center highlight, or the
//! "new tab" affordance on the spacer) while a drag hovers a target. This
//! module computes the transitions: at most one marker is active at any time,
//! and moving the hover or ending the drag clears the previous one before the
//! next is set. The state machine is `None → Some(target, marker) → None`;
//! it never touches the tree.

use crate::location::{DropLocation, HorizontalSide, VerticalSide};

/// A visual drop marker.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Insertion edge before a strip child.
    Left,
    /// Insertion edge after a strip child.
    Right,
    /// Highlight on the hovered child.
    Center,
    /// Insertion edge before a stack child.
    Top,
    /// Insertion edge after a stack child.
    Bottom,
    /// The trailing-spacer "new tab" affordance.
    NewTab,
}

impl Marker {
    /// The marker a resolved location calls for. Canvas drops have no marker.
    pub fn for_location(location: DropLocation) -> Option<Self> {
        match location {
            DropLocation::Strip { side, .. } => Some(match side {
                HorizontalSide::Left => Self::Left,
                HorizontalSide::Center => Self::Center,
                HorizontalSide::Right => Self::Right,
            }),
            DropLocation::Stack { side, .. } => Some(match side {
                VerticalSide::Top => Self::Top,
                VerticalSide::Middle => Self::Center,
                VerticalSide::Bottom => Self::Bottom,
            }),
            DropLocation::Canvas { .. } => None,
        }
    }
}

/// What an emphasis transition asks the host to repaint.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EmphasisChange<K> {
    /// Marker to remove, if one was active elsewhere.
    pub cleared: Option<(K, Marker)>,
    /// Marker to paint, if the hover moved somewhere new.
    pub set: Option<(K, Marker)>,
}

impl<K> EmphasisChange<K> {
    /// Whether this transition requires any repaint at all.
    pub fn is_noop(&self) -> bool {
        self.cleared.is_none() && self.set.is_none()
    }
}

/// Tracks the single active emphasis marker during a drag.
#[derive(Clone, Debug, Default)]
pub struct EmphasisState<K> {
    active: Option<(K, Marker)>,
}

impl<K: Copy + PartialEq> EmphasisState<K> {
    /// Create a state with no marker active.
    pub fn new() -> Self {
        Self { active: None }
    }

    /// The currently active `(target, marker)` pair, if any.
    pub fn active(&self) -> Option<(K, Marker)> {
        self.active
    }

    /// Move the hover to `(target, marker)`.
    ///
    /// Re-hovering the active pair is a no-op transition. Otherwise the
    /// previous marker (if any) is reported as cleared and the new one as set,
    /// preserving the one-marker invariant.
    pub fn hover(&mut self, target: K, marker: Marker) -> EmphasisChange<K> {
        if self.active == Some((target, marker)) {
            return EmphasisChange {
                cleared: None,
                set: None,
            };
        }
        let cleared = self.active.replace((target, marker));
        EmphasisChange {
            cleared,
            set: Some((target, marker)),
        }
    }

    /// Clear any active marker (hover left all targets, or the drag ended).
    ///
    /// Returns the pair to un-paint, if one was active.
    pub fn clear(&mut self) -> Option<(K, Marker)> {
        self.active.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::DropLocation;
    use kurbo::Vec2;

    #[test]
    fn first_hover_sets_without_clearing() {
        let mut state: EmphasisState<u32> = EmphasisState::new();
        let change = state.hover(1, Marker::Left);
        assert_eq!(change.cleared, None);
        assert_eq!(change.set, Some((1, Marker::Left)));
        assert_eq!(state.active(), Some((1, Marker::Left)));
    }

    #[test]
    fn moving_hover_clears_previous_marker() {
        let mut state: EmphasisState<u32> = EmphasisState::new();
        state.hover(1, Marker::Left);
        let change = state.hover(2, Marker::Center);
        assert_eq!(change.cleared, Some((1, Marker::Left)));
        assert_eq!(change.set, Some((2, Marker::Center)));
    }

    #[test]
    fn rehovering_same_pair_is_noop() {
        let mut state: EmphasisState<u32> = EmphasisState::new();
        state.hover(1, Marker::Right);
        let change = state.hover(1, Marker::Right);
        assert!(change.is_noop());
        assert_eq!(state.active(), Some((1, Marker::Right)));
    }

    #[test]
    fn clear_returns_active_pair_once() {
        let mut state: EmphasisState<u32> = EmphasisState::new();
        state.hover(3, Marker::NewTab);
        assert_eq!(state.clear(), Some((3, Marker::NewTab)));
        assert_eq!(state.clear(), None);
        assert_eq!(state.active(), None);
    }

    // One marker active at any time, for an arbitrary hover sequence.
    #[test]
    fn at_most_one_marker_across_sequences() {
        let mut state: EmphasisState<u32> = EmphasisState::new();
        let sequence = [
            (1, Marker::Left),
            (1, Marker::Center),
            (2, Marker::Top),
            (2, Marker::Top),
            (5, Marker::Bottom),
        ];
        for (target, marker) in sequence {
            let change = state.hover(target, marker);
            if let Some(set) = change.set {
                assert_eq!(state.active(), Some(set));
            }
            // Whatever was cleared is no longer the active pair.
            if let Some(cleared) = change.cleared {
                assert_ne!(state.active(), Some(cleared));
            }
        }
        assert_eq!(state.active(), Some((5, Marker::Bottom)));
    }

    #[test]
    fn markers_follow_resolved_locations() {
        use crate::location::{HorizontalSide, VerticalSide};
        assert_eq!(
            Marker::for_location(DropLocation::Strip {
                index: 0,
                side: HorizontalSide::Left
            }),
            Some(Marker::Left)
        );
        assert_eq!(
            Marker::for_location(DropLocation::Stack {
                index: 1,
                side: VerticalSide::Middle
            }),
            Some(Marker::Center)
        );
        assert_eq!(
            Marker::for_location(DropLocation::Canvas {
                delta: Vec2::new(1.0, 1.0)
            }),
            None
        );
    }
}
