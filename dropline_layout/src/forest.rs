// Copyright 2026 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core forest implementation: structure, mutation, queries.

use alloc::vec::Vec;
use kurbo::{Point, Rect};
use smallvec::SmallVec;

use crate::types::{Alignment, ContainerKind, NodeData, NodeFlags, NodeId};

/// Inline capacity for child lists. Most containers hold a handful of children.
type Children = SmallVec<[NodeId; 8]>;

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Children,
    data: NodeData,
}

impl Node {
    fn new(generation: u32, data: NodeData) -> Self {
        Self {
            generation,
            parent: None,
            children: Children::new(),
            data,
        }
    }
}

/// A forest of layout nodes with ordered children.
///
/// This is the tree side of the drag-and-drop collaboration: it owns parent
/// links, ordered child sequences, and the per-node data the resolver and the
/// reordering engine read (bounds, positions, alignment, flags). It performs
/// no layout itself; the host's layout pass writes world-space bounds in and
/// the drop machinery reads them back.
///
/// Node identifiers are generational: removing a node frees its slot, and a
/// later insertion reusing the slot produces a distinct [`NodeId`]. Stale
/// identifiers answer queries with `None`/empty and make mutations no-ops,
/// which is what lets callers re-validate a drop that raced with a removal.
///
/// Structural invariants maintained by every mutation:
/// - a node has at most one parent, and appears at most once in that parent's
///   child sequence;
/// - no node is ever linked under its own descendant (no cycles);
/// - child indices stay within `[0, child_count]` (out-of-range inserts clamp
///   to an append).
///
/// ## Example
///
/// ```rust
/// use dropline_layout::{ContainerKind, LayoutForest, NodeData};
///
/// let mut forest = LayoutForest::new();
/// let stack = forest.insert(None, NodeData::container(ContainerKind::VerticalStack));
/// let a = forest.insert(Some(stack), NodeData::default());
/// let b = forest.insert(Some(stack), NodeData::default());
///
/// assert_eq!(forest.children_of(stack), &[a, b]);
/// assert_eq!(forest.index_of(stack, b), Some(1));
/// assert!(forest.is_ancestor_of(stack, b));
/// ```
#[derive(Clone, Default)]
pub struct LayoutForest {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl core::fmt::Debug for LayoutForest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("LayoutForest")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl LayoutForest {
    /// Create an empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new node as the last child of `parent` (or as a root if `None`).
    pub fn insert(&mut self, parent: Option<NodeId>, data: NodeData) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, data));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, data)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = NodeId::new(idx, generation);
        if let Some(p) = parent {
            // A fresh node has no descendants, so this cannot cycle.
            self.attach(id, p, None);
        }
        id
    }

    /// Remove a node and its subtree. Stale ids are ignored.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if self.node(id).parent.is_some() {
            self.detach(id);
        }
        let children: Children = self.node(id).children.clone();
        for child in children {
            self.remove(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Link `child` under `parent` at `index` (`None` appends).
    ///
    /// The child is detached from any previous parent first, so the
    /// single-parent invariant holds across the move. Indices past the end
    /// clamp to an append. Returns `false` without mutating when either id is
    /// stale, when `child == parent`, or when the link would place `parent`
    /// inside `child`'s own subtree.
    pub fn attach(&mut self, child: NodeId, parent: NodeId, index: Option<usize>) -> bool {
        if !self.is_alive(child) || !self.is_alive(parent) {
            return false;
        }
        if child == parent || self.is_ancestor_of(child, parent) {
            return false;
        }
        if self.node(child).parent.is_some() {
            self.detach(child);
        }
        let len = self.node(parent).children.len();
        let at = index.map_or(len, |i| i.min(len));
        self.node_mut(parent).children.insert(at, child);
        self.node_mut(child).parent = Some(parent);
        true
    }

    /// Unlink a node from its parent, leaving it alive as a root.
    ///
    /// Returns `false` if the id is stale or the node was already a root.
    pub fn detach(&mut self, id: NodeId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        let Some(parent) = self.node(id).parent else {
            return false;
        };
        let siblings = &mut self.node_mut(parent).children;
        if let Some(pos) = siblings.iter().position(|&c| c == id) {
            siblings.remove(pos);
        }
        self.node_mut(id).parent = None;
        true
    }

    /// Returns true if `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .is_some_and(|n| n.generation == id.generation())
    }

    /// The parent of a live node, or `None` for roots and stale ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        if !self.is_alive(id) {
            return None;
        }
        self.node(id).parent
    }

    /// The ordered children of a node, or an empty slice for stale ids.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        if !self.is_alive(id) {
            return &[];
        }
        &self.node(id).children
    }

    /// Number of children of a node; `0` for stale ids.
    pub fn child_count(&self, id: NodeId) -> usize {
        self.children_of(id).len()
    }

    /// The index of `child` within `parent`'s child sequence.
    pub fn index_of(&self, parent: NodeId, child: NodeId) -> Option<usize> {
        self.children_of(parent).iter().position(|&c| c == child)
    }

    /// Whether `candidate` is a strict ancestor of `possible_descendant`.
    ///
    /// This is the cycle-guard query: the reordering engine asks it before
    /// moving a container under another container. A node is not its own
    /// ancestor. Stale ids are nobody's ancestor.
    pub fn is_ancestor_of(&self, candidate: NodeId, possible_descendant: NodeId) -> bool {
        if !self.is_alive(candidate) || !self.is_alive(possible_descendant) {
            return false;
        }
        let mut current = self.node(possible_descendant).parent;
        while let Some(ancestor) = current {
            if ancestor == candidate {
                return true;
            }
            current = self.node(ancestor).parent;
        }
        false
    }

    /// The container kind of a live node.
    pub fn kind(&self, id: NodeId) -> Option<ContainerKind> {
        self.node_opt(id).map(|n| n.data.kind)
    }

    /// The world-space bounding box of a live node.
    pub fn bounds_of(&self, id: NodeId) -> Option<Rect> {
        self.node_opt(id).map(|n| n.data.bounds)
    }

    /// Update a node's world-space bounding box. No-op for stale ids.
    pub fn set_bounds(&mut self, id: NodeId, bounds: Rect) {
        if let Some(n) = self.node_opt_mut(id) {
            n.data.bounds = bounds;
        }
    }

    /// The absolute position of a live node within a free-canvas parent.
    pub fn position_of(&self, id: NodeId) -> Option<Point> {
        self.node_opt(id).map(|n| n.data.position)
    }

    /// Update a node's absolute position. No-op for stale ids.
    pub fn set_position(&mut self, id: NodeId, position: Point) {
        if let Some(n) = self.node_opt_mut(id) {
            n.data.position = position;
        }
    }

    /// The cell alignment of a live node, if one was applied.
    pub fn alignment_of(&self, id: NodeId) -> Option<Alignment> {
        self.node_opt(id).and_then(|n| n.data.alignment)
    }

    /// Apply a cell alignment to a node. No-op for stale ids.
    pub fn set_alignment(&mut self, id: NodeId, alignment: Option<Alignment>) {
        if let Some(n) = self.node_opt_mut(id) {
            n.data.alignment = alignment;
        }
    }

    /// The flags of a live node.
    pub fn flags(&self, id: NodeId) -> Option<NodeFlags> {
        self.node_opt(id).map(|n| n.data.flags)
    }

    /// Update a node's flags. No-op for stale ids.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        if let Some(n) = self.node_opt_mut(id) {
            n.data.flags = flags;
        }
    }

    // --- internals ---

    /// Access a node; panics if `id` is stale. Callers check liveness first.
    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.generation()).then_some(n)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        (n.generation == id.generation()).then_some(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContainerKind, NodeData};

    fn stack_with_children(forest: &mut LayoutForest, n: usize) -> (NodeId, Vec<NodeId>) {
        let stack = forest.insert(None, NodeData::container(ContainerKind::VerticalStack));
        let children = (0..n)
            .map(|_| forest.insert(Some(stack), NodeData::default()))
            .collect();
        (stack, children)
    }

    #[test]
    fn insert_appends_in_order() {
        let mut forest = LayoutForest::new();
        let (stack, kids) = stack_with_children(&mut forest, 3);
        assert_eq!(forest.children_of(stack), kids.as_slice());
        assert_eq!(forest.index_of(stack, kids[2]), Some(2));
        assert_eq!(forest.parent_of(kids[0]), Some(stack));
    }

    #[test]
    fn attach_moves_between_parents_with_single_parent_invariant() {
        let mut forest = LayoutForest::new();
        let (a, a_kids) = stack_with_children(&mut forest, 2);
        let (b, _) = stack_with_children(&mut forest, 1);

        assert!(forest.attach(a_kids[0], b, Some(0)));
        assert_eq!(forest.parent_of(a_kids[0]), Some(b));
        assert_eq!(forest.index_of(b, a_kids[0]), Some(0));
        // Gone from the old parent.
        assert_eq!(forest.index_of(a, a_kids[0]), None);
        assert_eq!(forest.child_count(a), 1);
    }

    #[test]
    fn attach_clamps_out_of_range_index_to_append() {
        let mut forest = LayoutForest::new();
        let (stack, kids) = stack_with_children(&mut forest, 2);
        let extra = forest.insert(None, NodeData::default());

        assert!(forest.attach(extra, stack, Some(99)));
        assert_eq!(forest.children_of(stack), &[kids[0], kids[1], extra]);
    }

    #[test]
    fn attach_refuses_cycles_and_self() {
        let mut forest = LayoutForest::new();
        let outer = forest.insert(None, NodeData::container(ContainerKind::VerticalStack));
        let inner = forest.insert(Some(outer), NodeData::container(ContainerKind::VerticalStack));
        let leaf = forest.insert(Some(inner), NodeData::default());

        assert!(!forest.attach(outer, inner, None));
        assert!(!forest.attach(outer, outer, None));
        // Tree unchanged.
        assert_eq!(forest.parent_of(outer), None);
        assert_eq!(forest.children_of(inner), &[leaf]);
    }

    #[test]
    fn is_ancestor_of_is_strict_and_transitive() {
        let mut forest = LayoutForest::new();
        let root = forest.insert(None, NodeData::container(ContainerKind::VerticalStack));
        let mid = forest.insert(Some(root), NodeData::container(ContainerKind::VerticalStack));
        let leaf = forest.insert(Some(mid), NodeData::default());

        assert!(forest.is_ancestor_of(root, leaf));
        assert!(forest.is_ancestor_of(mid, leaf));
        assert!(!forest.is_ancestor_of(leaf, root));
        assert!(!forest.is_ancestor_of(leaf, leaf));
    }

    #[test]
    fn remove_frees_subtree_and_stales_ids() {
        let mut forest = LayoutForest::new();
        let (stack, kids) = stack_with_children(&mut forest, 2);
        forest.remove(stack);

        assert!(!forest.is_alive(stack));
        assert!(!forest.is_alive(kids[0]));
        assert!(!forest.is_alive(kids[1]));
        assert!(forest.children_of(stack).is_empty());
    }

    #[test]
    fn slot_reuse_produces_distinct_ids() {
        let mut forest = LayoutForest::new();
        let first = forest.insert(None, NodeData::default());
        forest.remove(first);
        let second = forest.insert(None, NodeData::default());

        // Same slot, different generation: the old id stays stale.
        assert!(!forest.is_alive(first));
        assert!(forest.is_alive(second));
        assert_ne!(first, second);
    }

    #[test]
    fn mutations_on_stale_ids_are_noops() {
        let mut forest = LayoutForest::new();
        let node = forest.insert(None, NodeData::default());
        forest.remove(node);

        forest.set_bounds(node, Rect::new(0.0, 0.0, 10.0, 10.0));
        forest.set_position(node, Point::new(1.0, 2.0));
        forest.set_alignment(node, Some(Alignment::Center));
        assert_eq!(forest.bounds_of(node), None);
        assert_eq!(forest.position_of(node), None);
        assert_eq!(forest.alignment_of(node), None);
        assert!(!forest.detach(node));
    }

    #[test]
    fn detach_keeps_node_alive_as_root() {
        let mut forest = LayoutForest::new();
        let (stack, kids) = stack_with_children(&mut forest, 2);

        assert!(forest.detach(kids[1]));
        assert!(forest.is_alive(kids[1]));
        assert_eq!(forest.parent_of(kids[1]), None);
        assert_eq!(forest.children_of(stack), &[kids[0]]);
        // Detaching a root again reports false.
        assert!(!forest.detach(kids[1]));
    }
}
