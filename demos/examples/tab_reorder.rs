// Copyright 2026 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walks one drag of a tab across a tab strip, end to end: session start,
//! location resolution, emphasis feedback, and the final reorder.

use dropline_layout::{ContainerKind, LayoutForest, NodeData};
use dropline_reorder::{DropOutcome, drop_session};
use dropline_resolve::emphasis::{EmphasisState, Marker};
use dropline_resolve::{DropZone, SplitRatio, resolve};
use dropline_session::{DragMode, DragTracker};
use kurbo::{Point, Rect};

fn main() {
    let mut forest = LayoutForest::new();
    let strip = forest.insert(None, NodeData::container(ContainerKind::HorizontalStrip));
    let tabs: Vec<_> = (0..3)
        .map(|i| {
            let x = 100.0 * f64::from(i);
            forest.insert(Some(strip), NodeData::leaf(Rect::new(x, 0.0, x + 100.0, 30.0)))
        })
        .collect();
    println!("strip before: {:?}", forest.children_of(strip));

    // Pointer down on the last tab starts the drag.
    let mut tracker = DragTracker::new();
    let grab = Point::new(250.0, 15.0);
    assert!(tracker.begin(DragMode::Clone, strip, tabs[2], grab));

    // While the pointer moves over the first tab's left edge, resolve the
    // location and update the emphasis marker the host would paint.
    let mut emphasis = EmphasisState::new();
    let hover = Point::new(10.0, 15.0);
    tracker.move_to(hover);
    let zone = DropZone::Tab {
        index: 0,
        bounds: forest.bounds_of(tabs[0]).unwrap(),
    };
    let location = resolve(zone, hover, grab, SplitRatio::default());
    if let Some(marker) = Marker::for_location(location) {
        let change = emphasis.hover(tabs[0], marker);
        println!("emphasis: clear {:?}, paint {:?}", change.cleared, change.set);
    }

    // Drop. The emphasis clears and the engine reorders the strip.
    let done = tracker.drop_at(hover).unwrap();
    emphasis.clear();
    match drop_session(&mut forest, done, strip, location, None) {
        DropOutcome::Moved(result) => println!("moved to index {:?}", result.index),
        DropOutcome::Rejected(why) => println!("rejected: {why:?}"),
    }
    println!("strip after: {:?}", forest.children_of(strip));
}
