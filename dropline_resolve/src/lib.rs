// Copyright 2026 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropline Resolve: classify where a drop lands.
//!
//! Given the geometry of what the pointer hovers (a tab, a row, the trailing
//! spacer, or free canvas space) and the pointer position, [`resolve`]
//! produces a discrete [`DropLocation`]:
//!
//! - horizontal strips (tab bars) classify into
//!   [`HorizontalSide::Left`]/[`HorizontalSide::Center`]/[`HorizontalSide::Right`]
//!   of the hovered child;
//! - vertical stacks classify into
//!   [`VerticalSide::Top`]/[`VerticalSide::Middle`]/[`VerticalSide::Bottom`];
//! - free canvases skip discretization and carry the raw pointer delta.
//!
//! The edge fraction is configurable via [`SplitRatio`] (default: the outer
//! 20% on each side). Resolution is a pure function of its inputs, so the
//! classification is testable in isolation from any widget toolkit.
//!
//! The [`emphasis`] module computes the matching visual-feedback transitions:
//! which single marker should be painted while the drag hovers, and what to
//! clear when it moves away or ends.
//!
//! ## Example
//!
//! ```rust
//! use dropline_resolve::{DropLocation, DropZone, HorizontalSide, SplitRatio, resolve};
//! use kurbo::{Point, Rect};
//!
//! let tab = Rect::new(100.0, 0.0, 200.0, 30.0);
//! let location = resolve(
//!     DropZone::Tab { index: 1, bounds: tab },
//!     Point::new(105.0, 15.0),
//!     Point::ZERO,
//!     SplitRatio::default(),
//! );
//! assert_eq!(location, DropLocation::Strip { index: 1, side: HorizontalSide::Left });
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod emphasis;
mod location;

pub use location::{
    DropLocation, DropZone, HorizontalSide, RatioError, SplitRatio, VerticalSide,
    horizontal_side, resolve, vertical_side,
};
