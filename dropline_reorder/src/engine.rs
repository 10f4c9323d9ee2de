// Copyright 2026 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reordering engine: validate a resolved drop, then mutate the forest.

use dropline_layout::{Alignment, ContainerKind, LayoutForest, NodeId};
use dropline_resolve::DropLocation;
use dropline_session::CompletedDrag;
use kurbo::{Point, Vec2};

/// A successfully applied drop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ReorderResult {
    /// Container the component ended up in.
    pub destination: NodeId,
    /// Final child index; `None` for canvas moves, which have no child order.
    pub index: Option<usize>,
    /// Whether the component was detached from a previous parent on the way.
    pub removed_from_source: bool,
}

/// Why a drop was not applied. Rejections are expected interaction, not
/// faults: the tree is left untouched and no error is raised.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DropRejection {
    /// The move would place a container inside its own subtree.
    WouldCycle,
    /// The dragged component no longer exists (raced with a removal).
    StaleComponent,
    /// The destination container no longer exists.
    StaleTarget,
}

/// Outcome of one drop attempt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// The mutation was applied.
    Moved(ReorderResult),
    /// The drop was silently rejected; nothing changed.
    Rejected(DropRejection),
}

impl DropOutcome {
    /// Whether the drop was rejected.
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// Apply a resolved drop to the forest.
///
/// `dragged` is the component being moved, `source` the container the drag
/// started in, `destination` the container under the pointer, and `location`
/// the resolver's classification (which carries the hovered child index).
///
/// Validation happens before any mutation, in order:
/// 1. liveness of `dragged` and `destination` — a drop that raced with a
///    removal is rejected as stale;
/// 2. the cycle guard — moving a container onto itself or into its own
///    subtree is rejected via [`LayoutForest::is_ancestor_of`].
///
/// For ordered containers the final index derives from the hovered child:
/// after-variants (right / middle / bottom) land one past it, the trailing
/// spacer lands past the last tab, and intra-container moves first remove the
/// component and then compensate the hovered index for the shift that removal
/// caused. Dropping a child onto its own slot, from either side, restores the
/// original order exactly.
///
/// A [`DropLocation::Canvas`] location bypasses index computation entirely
/// and translates the component's absolute position by the recorded delta.
pub fn reorder(
    forest: &mut LayoutForest,
    dragged: NodeId,
    source: NodeId,
    destination: NodeId,
    location: DropLocation,
    alignment: Option<Alignment>,
) -> DropOutcome {
    // Re-validate liveness immediately before mutating.
    if !forest.is_alive(dragged) {
        return DropOutcome::Rejected(DropRejection::StaleComponent);
    }
    if !forest.is_alive(destination) {
        return DropOutcome::Rejected(DropRejection::StaleTarget);
    }

    let (hovered, after) = match location {
        DropLocation::Strip { index, side } => (index, side.drops_after()),
        DropLocation::Stack { index, side } => (index, side.drops_after()),
        DropLocation::Canvas { delta } => {
            return match apply_canvas_move(forest, dragged, delta) {
                Some(_) => DropOutcome::Moved(ReorderResult {
                    destination,
                    index: None,
                    removed_from_source: false,
                }),
                None => DropOutcome::Rejected(DropRejection::StaleComponent),
            };
        }
    };

    if destination == source
        && let Some(original) = forest.index_of(destination, dragged)
    {
        return reorder_within(forest, dragged, destination, original, hovered, after, alignment);
    }

    // Moving between containers. Refuse to drag an outer container into an
    // inner one.
    if dragged == destination || forest.is_ancestor_of(dragged, destination) {
        return DropOutcome::Rejected(DropRejection::WouldCycle);
    }

    let removed_from_source = forest.parent_of(dragged).is_some();
    let len = forest.child_count(destination);
    let at = (hovered + usize::from(after)).min(len);
    // attach() detaches from the previous parent; a component never has two.
    forest.attach(dragged, destination, Some(at));
    if alignment.is_some() {
        forest.set_alignment(dragged, alignment);
    }
    DropOutcome::Moved(ReorderResult {
        destination,
        index: Some(at),
        removed_from_source,
    })
}

/// Pure reordering inside one container.
fn reorder_within(
    forest: &mut LayoutForest,
    dragged: NodeId,
    container: NodeId,
    original: usize,
    hovered: usize,
    after: bool,
    alignment: Option<Alignment>,
) -> DropOutcome {
    // Detach first; the index math below is in post-removal coordinates.
    forest.detach(dragged);

    let at = if original == hovered {
        // Dropped onto its own slot (either side): restore the order.
        original
    } else {
        // Removal shifted every index past `original` down by one; compensate
        // when the hovered child was among them, then step past it for
        // after-placements.
        let hovered = if original < hovered { hovered - 1 } else { hovered };
        hovered + usize::from(after)
    };

    let at = at.min(forest.child_count(container));
    forest.attach(dragged, container, Some(at));
    if alignment.is_some() {
        forest.set_alignment(dragged, alignment);
    }
    DropOutcome::Moved(ReorderResult {
        destination: container,
        index: Some(at),
        removed_from_source: true,
    })
}

/// Translate a free-canvas component by the pointer delta recorded between
/// drag start and drop.
///
/// No index computation and no cycle guard apply; absolute containers do not
/// nest by child order. Returns the new position, or `None` when the
/// component is stale.
pub fn apply_canvas_move(
    forest: &mut LayoutForest,
    component: NodeId,
    delta: Vec2,
) -> Option<Point> {
    let position = forest.position_of(component)?;
    let moved = position + delta;
    forest.set_position(component, moved);
    Some(moved)
}

/// Consume a completed drag and apply it to the forest.
///
/// This is the drop dispatch: canvas locations become absolute moves, a
/// component dropped onto itself while sitting in a free canvas is moved
/// within that canvas (dragging a layout by its own body), and everything
/// else goes through [`reorder`].
pub fn drop_session(
    forest: &mut LayoutForest,
    drag: CompletedDrag<NodeId>,
    destination: NodeId,
    location: DropLocation,
    alignment: Option<Alignment>,
) -> DropOutcome {
    let dragged = drag.dragged();

    if let DropLocation::Canvas { delta } = location {
        return match apply_canvas_move(forest, dragged, delta) {
            Some(_) => DropOutcome::Moved(ReorderResult {
                destination,
                index: None,
                removed_from_source: false,
            }),
            None => DropOutcome::Rejected(DropRejection::StaleComponent),
        };
    }

    if dragged == destination {
        // The component was dropped onto itself. If it lives in a free
        // canvas, the drag is a move of the whole component.
        let parent_is_canvas = forest
            .parent_of(dragged)
            .and_then(|p| forest.kind(p))
            .is_some_and(|k| k == ContainerKind::FreeCanvas);
        if parent_is_canvas {
            return match apply_canvas_move(forest, dragged, drag.delta()) {
                Some(_) => DropOutcome::Moved(ReorderResult {
                    destination,
                    index: None,
                    removed_from_source: false,
                }),
                None => DropOutcome::Rejected(DropRejection::StaleComponent),
            };
        }
        return DropOutcome::Rejected(DropRejection::WouldCycle);
    }

    reorder(forest, dragged, drag.source(), destination, location, alignment)
}
