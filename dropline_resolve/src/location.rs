// Copyright 2026 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drop-location classification: pure functions from geometry and pointer
//! position to a discrete drop location.

use core::fmt;
use kurbo::{Point, Rect, Vec2};

/// Fraction of a child's extent that counts as its leading/trailing edge.
///
/// A pointer strictly inside the outer `ratio` fraction of the hovered child's
/// width (or height) classifies as an edge drop; the middle classifies as
/// center. A pointer exactly on either threshold classifies as center — the
/// comparisons are strict, and tests pin both edges.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SplitRatio(f64);

impl SplitRatio {
    /// The conventional default: the outer 20% on each side is an edge drop.
    pub const DEFAULT: Self = Self(0.2);

    /// Validate a ratio. Must lie strictly inside `(0, 1)`.
    pub fn new(ratio: f64) -> Result<Self, RatioError> {
        if ratio > 0.0 && ratio < 1.0 {
            Ok(Self(ratio))
        } else {
            Err(RatioError { ratio })
        }
    }

    /// The raw fraction.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for SplitRatio {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Rejected split-ratio configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RatioError {
    /// The offending value.
    pub ratio: f64,
}

impl fmt::Display for RatioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "split ratio must lie strictly inside (0, 1), got {}",
            self.ratio
        )
    }
}

impl core::error::Error for RatioError {}

/// Where a drop lands relative to a child of a horizontal strip.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalSide {
    /// Before the hovered child.
    Left,
    /// Onto the hovered child.
    Center,
    /// After the hovered child.
    Right,
}

impl HorizontalSide {
    /// Whether this side places the dragged component after the hovered child.
    pub const fn drops_after(self) -> bool {
        matches!(self, Self::Right)
    }
}

/// Where a drop lands relative to a child of a vertical stack.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VerticalSide {
    /// Before the hovered child.
    Top,
    /// Onto the hovered child.
    Middle,
    /// After the hovered child.
    Bottom,
}

impl VerticalSide {
    /// Whether this side places the dragged component after the hovered child.
    ///
    /// `Middle` counts as after: dropping onto a child inserts behind it.
    pub const fn drops_after(self) -> bool {
        matches!(self, Self::Middle | Self::Bottom)
    }
}

/// What the pointer is hovering at drop time, as reported by the host's
/// hit test.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DropZone {
    /// A tab in a horizontal strip.
    Tab {
        /// Index of the hovered tab.
        index: usize,
        /// World-space bounds of the hovered tab.
        bounds: Rect,
    },
    /// The trailing spacer of a horizontal strip (the "new tab" affordance).
    Spacer {
        /// Number of tabs currently in the strip.
        tab_count: usize,
    },
    /// A row in a vertical stack.
    Row {
        /// Index of the hovered row.
        index: usize,
        /// World-space bounds of the hovered row.
        bounds: Rect,
    },
    /// Empty space of a free canvas.
    Canvas,
}

/// A classified drop location.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DropLocation {
    /// Drop within a horizontal strip, relative to the child at `index`.
    Strip {
        /// Hovered child index.
        index: usize,
        /// Side of the hovered child.
        side: HorizontalSide,
    },
    /// Drop within a vertical stack, relative to the child at `index`.
    Stack {
        /// Hovered child index.
        index: usize,
        /// Side of the hovered child.
        side: VerticalSide,
    },
    /// Drop on a free canvas: no discretization, just the pointer travel
    /// between drag start and drop.
    Canvas {
        /// Pointer delta from drag start to drop.
        delta: Vec2,
    },
}

/// Classify the horizontal position of `x` within `bounds`.
pub fn horizontal_side(bounds: Rect, x: f64, ratio: SplitRatio) -> HorizontalSide {
    let rel = x - bounds.x0;
    let width = bounds.width();
    if rel < width * ratio.get() {
        HorizontalSide::Left
    } else if rel > width * (1.0 - ratio.get()) {
        HorizontalSide::Right
    } else {
        HorizontalSide::Center
    }
}

/// Classify the vertical position of `y` within `bounds`.
pub fn vertical_side(bounds: Rect, y: f64, ratio: SplitRatio) -> VerticalSide {
    let rel = y - bounds.y0;
    let height = bounds.height();
    if rel < height * ratio.get() {
        VerticalSide::Top
    } else if rel > height * (1.0 - ratio.get()) {
        VerticalSide::Bottom
    } else {
        VerticalSide::Middle
    }
}

/// Resolve a drop into a discrete location.
///
/// Pure in its inputs: identical `(zone, pointer, drag_origin, ratio)` always
/// produce the same location, and calling it has no side effects.
///
/// The trailing spacer resolves to the last tab index with [`HorizontalSide::Right`],
/// so the engine appends past the end of the strip. For an empty strip the
/// spacer resolves to index `0` with `Right`; the engine clamps the insert to
/// an append at `0`.
pub fn resolve(
    zone: DropZone,
    pointer: Point,
    drag_origin: Point,
    ratio: SplitRatio,
) -> DropLocation {
    match zone {
        DropZone::Tab { index, bounds } => DropLocation::Strip {
            index,
            side: horizontal_side(bounds, pointer.x, ratio),
        },
        DropZone::Spacer { tab_count } => DropLocation::Strip {
            index: tab_count.saturating_sub(1),
            side: HorizontalSide::Right,
        },
        DropZone::Row { index, bounds } => DropLocation::Stack {
            index,
            side: vertical_side(bounds, pointer.y, ratio),
        },
        DropZone::Canvas => DropLocation::Canvas {
            delta: pointer - drag_origin,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAB: Rect = Rect::new(100.0, 0.0, 200.0, 30.0);
    const ROW: Rect = Rect::new(0.0, 50.0, 300.0, 100.0);

    #[test]
    fn ratio_rejects_out_of_range_values() {
        assert!(SplitRatio::new(0.2).is_ok());
        assert!(SplitRatio::new(0.0).is_err());
        assert!(SplitRatio::new(1.0).is_err());
        assert!(SplitRatio::new(-0.5).is_err());
        assert_eq!(SplitRatio::default().get(), 0.2);
    }

    #[test]
    fn horizontal_thirds_classify_as_expected() {
        let ratio = SplitRatio::default();
        assert_eq!(horizontal_side(TAB, 105.0, ratio), HorizontalSide::Left);
        assert_eq!(horizontal_side(TAB, 150.0, ratio), HorizontalSide::Center);
        assert_eq!(horizontal_side(TAB, 195.0, ratio), HorizontalSide::Right);
    }

    #[test]
    fn vertical_thirds_classify_as_expected() {
        let ratio = SplitRatio::default();
        assert_eq!(vertical_side(ROW, 55.0, ratio), VerticalSide::Top);
        assert_eq!(vertical_side(ROW, 75.0, ratio), VerticalSide::Middle);
        assert_eq!(vertical_side(ROW, 98.0, ratio), VerticalSide::Bottom);
    }

    // The boundary policy is strict comparison on both thresholds: a pointer
    // exactly at the split fraction is the lower bound of the center band.
    #[test]
    fn exact_thresholds_classify_center() {
        let ratio = SplitRatio::default();
        // Width 100, ratio 0.2: thresholds at x = 120 and x = 180.
        assert_eq!(horizontal_side(TAB, 120.0, ratio), HorizontalSide::Center);
        assert_eq!(horizontal_side(TAB, 180.0, ratio), HorizontalSide::Center);
        // Just inside the edges flips to Left/Right.
        assert_eq!(
            horizontal_side(TAB, 119.999, ratio),
            HorizontalSide::Left
        );
        assert_eq!(
            horizontal_side(TAB, 180.001, ratio),
            HorizontalSide::Right
        );
        // Height 50, ratio 0.2: thresholds at y = 60 and y = 90.
        assert_eq!(vertical_side(ROW, 60.0, ratio), VerticalSide::Middle);
        assert_eq!(vertical_side(ROW, 90.0, ratio), VerticalSide::Middle);
    }

    #[test]
    fn resolve_is_deterministic_over_a_grid() {
        let ratio = SplitRatio::new(0.25).unwrap();
        for step in 0..=40 {
            let x = TAB.x0 + f64::from(step) * TAB.width() / 40.0;
            let pointer = Point::new(x, 15.0);
            let zone = DropZone::Tab { index: 2, bounds: TAB };
            let first = resolve(zone, pointer, Point::ZERO, ratio);
            let second = resolve(zone, pointer, Point::ZERO, ratio);
            assert_eq!(first, second, "resolution must be idempotent at x={x}");
        }
    }

    #[test]
    fn spacer_resolves_to_trailing_right() {
        let loc = resolve(
            DropZone::Spacer { tab_count: 3 },
            Point::ZERO,
            Point::ZERO,
            SplitRatio::default(),
        );
        assert_eq!(
            loc,
            DropLocation::Strip {
                index: 2,
                side: HorizontalSide::Right
            }
        );
    }

    #[test]
    fn spacer_on_empty_strip_resolves_to_index_zero() {
        let loc = resolve(
            DropZone::Spacer { tab_count: 0 },
            Point::ZERO,
            Point::ZERO,
            SplitRatio::default(),
        );
        assert_eq!(
            loc,
            DropLocation::Strip {
                index: 0,
                side: HorizontalSide::Right
            }
        );
    }

    #[test]
    fn canvas_resolves_to_raw_delta() {
        let loc = resolve(
            DropZone::Canvas,
            Point::new(70.0, 40.0),
            Point::new(50.0, 50.0),
            SplitRatio::default(),
        );
        assert_eq!(
            loc,
            DropLocation::Canvas {
                delta: Vec2::new(20.0, -10.0)
            }
        );
    }

    #[test]
    fn after_variants_are_right_middle_bottom() {
        assert!(HorizontalSide::Right.drops_after());
        assert!(!HorizontalSide::Left.drops_after());
        assert!(!HorizontalSide::Center.drops_after());
        assert!(VerticalSide::Middle.drops_after());
        assert!(VerticalSide::Bottom.drops_after());
        assert!(!VerticalSide::Top.drops_after());
    }
}
