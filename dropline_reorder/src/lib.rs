// Copyright 2026 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropline Reorder: turn a resolved drop into a tree mutation.
//!
//! This crate is the write side of the drag-and-drop pipeline. The resolver
//! classifies where a drop lands; this engine validates the move and applies
//! it to the [`dropline_layout::LayoutForest`]:
//!
//! - [`reorder`]: compute the final child index for ordered containers (the
//!   after-variants land one past the hovered child, the trailing spacer
//!   appends, intra-container moves compensate for the removal shift) and
//!   mutate the child order.
//! - [`apply_canvas_move`]: translate a free-canvas component by the pointer
//!   delta; no index, no cycle guard.
//! - [`drop_session`]: consume a [`dropline_session::CompletedDrag`] and
//!   dispatch between the two, including the case of a component dropped
//!   onto itself while sitting in a free canvas.
//!
//! Invalid drops never mutate and never raise: a move that would place a
//! container inside its own subtree, or that races with a removal, comes back
//! as [`DropOutcome::Rejected`] and the caller simply skips its notification
//! hook. The cycle test is the forest's `is_ancestor_of` query; staleness is
//! re-checked immediately before mutation, which is what the generational
//! [`dropline_layout::NodeId`]s exist for.
//!
//! ## Example
//!
//! ```rust
//! use dropline_layout::{ContainerKind, LayoutForest, NodeData};
//! use dropline_resolve::{DropLocation, VerticalSide};
//! use dropline_reorder::{DropOutcome, reorder};
//!
//! let mut forest = LayoutForest::new();
//! let stack = forest.insert(None, NodeData::container(ContainerKind::VerticalStack));
//! let x = forest.insert(Some(stack), NodeData::default());
//! let y = forest.insert(Some(stack), NodeData::default());
//! let z = forest.insert(Some(stack), NodeData::default());
//!
//! // Drag X and drop it on the bottom half of Y.
//! let location = DropLocation::Stack { index: 1, side: VerticalSide::Bottom };
//! let outcome = reorder(&mut forest, x, stack, stack, location, None);
//! assert!(!outcome.is_rejected());
//! assert_eq!(forest.children_of(stack), &[y, x, z]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod engine;

pub use engine::{DropOutcome, DropRejection, ReorderResult, apply_canvas_move, drop_session, reorder};
