// Copyright 2026 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropline Layout: the layout forest that drag-and-drop operates on.
//!
//! This crate models the widget hierarchy as a forest of nodes with ordered
//! children and per-node layout data. It is the "layout collaborator" the
//! rest of Dropline talks to:
//!
//! - [`LayoutForest`]: generational node arena with `children_of`,
//!   `index_of`, `attach`/`detach`, `remove`, bounds/position/alignment
//!   accessors, and the `is_ancestor_of` cycle-guard query.
//! - [`ContainerKind`]: tagged container variants — [`ContainerKind::HorizontalStrip`]
//!   (tab bars), [`ContainerKind::VerticalStack`] (ordered layouts), and
//!   [`ContainerKind::FreeCanvas`] (absolute layouts). The resolver and the
//!   reordering engine branch on this tag.
//! - [`NodeFlags`]: drag-source / drop-target participation.
//! - [`NodeData`] / [`Alignment`]: per-node geometry and drop alignment policy.
//!
//! The forest does not perform layout, rendering, or hit testing. The host
//! computes world-space bounds and writes them in via [`LayoutForest::set_bounds`];
//! drop resolution reads them back out.
//!
//! Identifiers are generational ([`NodeId`]): a stale id — one whose node was
//! removed, even if the slot was reused — answers queries with `None` and
//! makes mutations no-ops. The reordering engine relies on this to reject
//! drops that raced with a concurrent removal instead of corrupting the tree.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod forest;
mod types;

pub use forest::LayoutForest;
pub use types::{Alignment, ContainerKind, NodeData, NodeFlags, NodeId};
