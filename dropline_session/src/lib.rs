// Copyright 2026 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropline Session: drag-session lifecycle and drop-metadata decoding.
//!
//! A drag is a short-lived, single-threaded interaction: it starts on pointer
//! down, is updated on every move, and ends exactly once — either with a drop
//! or with a cancellation. This crate models that lifecycle as values:
//!
//! - [`DragSession`]: one in-flight drag, carrying the source container, the
//!   dragged component, the pointer origin and current position, and an
//!   opaque key/value payload. Consumed by [`DragSession::drop_at`] (producing
//!   a [`CompletedDrag`]) or [`DragSession::cancel`]; move semantics make
//!   double-consumption unrepresentable.
//! - [`DragTracker`]: holds at most one active session across pointer
//!   callbacks and gates drag start on the container's [`DragMode`].
//! - [`MouseDetails`] / [`WireError`]: the codec for the opaque string the
//!   transport layer uses to ship mouse-event metadata. A payload that fails
//!   to decode aborts only the drop that carried it.
//!
//! ## Example
//!
//! ```rust
//! use dropline_session::{DragMode, DragTracker};
//! use kurbo::{Point, Vec2};
//!
//! let mut tracker: DragTracker<u32> = DragTracker::new();
//! assert!(tracker.begin(DragMode::Clone, 7, 42, Point::new(50.0, 50.0)));
//! tracker.move_to(Point::new(60.0, 45.0));
//!
//! let done = tracker.drop_at(Point::new(70.0, 40.0)).unwrap();
//! assert_eq!(done.dragged(), 42);
//! assert_eq!(done.delta(), Vec2::new(20.0, -10.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod session;
mod wire;

pub use session::{CompletedDrag, DragMode, DragSession, DragTracker};
pub use wire::{MouseButton, MouseDetails, WireError};
