// Copyright 2026 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the layout forest: node identifiers, container kinds,
//! flags, and per-node layout data.

use kurbo::{Point, Rect};

/// Identifier for a node in the forest (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

/// How a container arranges (and therefore accepts drops between) its children.
///
/// The drop-location resolver and the reordering engine branch on this tag;
/// there is no polymorphic dispatch involved.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// A plain component with no drop-relevant child order of its own.
    #[default]
    Leaf,
    /// A horizontal strip of children, e.g. a tab bar. Drops resolve to
    /// left/center/right of the hovered child, or to the trailing spacer.
    HorizontalStrip,
    /// A vertical stack of ordered children. Drops resolve to
    /// top/middle/bottom of the hovered child.
    VerticalStack,
    /// A free-form canvas. Children carry absolute positions; drops translate
    /// the dragged child by the pointer delta instead of reordering.
    FreeCanvas,
}

impl ContainerKind {
    /// Whether children of this container form an order that reordering can act on.
    pub const fn is_ordered(self) -> bool {
        matches!(self, Self::HorizontalStrip | Self::VerticalStack)
    }
}

bitflags::bitflags! {
    /// Node flags controlling drag-and-drop participation.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node may act as the source of a drag.
        const DRAG_SOURCE = 0b0000_0001;
        /// Node accepts drops.
        const DROP_TARGET = 0b0000_0010;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::DRAG_SOURCE | Self::DROP_TARGET
    }
}

/// Cell alignment applied to a child after it has been dropped into an
/// ordered container.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Align toward the leading edge (left/top).
    #[default]
    Leading,
    /// Center within the cell.
    Center,
    /// Align toward the trailing edge (right/bottom).
    Trailing,
}

/// Per-node layout data owned by the forest.
#[derive(Clone, Debug)]
pub struct NodeData {
    /// Container kind; `Leaf` for plain components.
    pub kind: ContainerKind,
    /// World-space bounding box, as reported by the host's layout pass.
    /// Used by callers to build drop zones for the resolver.
    pub bounds: Rect,
    /// Absolute position within a [`ContainerKind::FreeCanvas`] parent.
    /// Ignored for children of ordered containers.
    pub position: Point,
    /// Optional cell alignment within an ordered parent.
    pub alignment: Option<Alignment>,
    /// Drag-and-drop participation flags.
    pub flags: NodeFlags,
}

impl Default for NodeData {
    fn default() -> Self {
        Self {
            kind: ContainerKind::Leaf,
            bounds: Rect::ZERO,
            position: Point::ZERO,
            alignment: None,
            flags: NodeFlags::default(),
        }
    }
}

impl NodeData {
    /// Data for a container of the given kind.
    pub fn container(kind: ContainerKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Data for a leaf component with the given world-space bounds.
    pub fn leaf(bounds: Rect) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }
}
