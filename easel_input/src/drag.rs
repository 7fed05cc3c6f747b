// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking: incremental deltas and total offsets from pointer positions.
//!
//! A [`DragTracker`] exists only while a pointer is held down; the gesture
//! state machine creates one on press and drops it on release, so there is no
//! "not dragging" state to query.
//!
//! ```
//! use easel_input::drag::DragTracker;
//! use kurbo::{Point, Vec2};
//!
//! let mut drag = DragTracker::new(Point::new(10.0, 20.0));
//! assert_eq!(drag.advance(Point::new(15.0, 25.0)), Vec2::new(5.0, 5.0));
//! assert_eq!(drag.advance(Point::new(18.0, 21.0)), Vec2::new(3.0, -4.0));
//! assert_eq!(drag.total(), Vec2::new(8.0, 1.0));
//! ```

use kurbo::{Point, Vec2};

/// Start and latest pointer positions of an active drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragTracker {
    origin: Point,
    last: Point,
}

impl DragTracker {
    /// Starts tracking a drag that began at `pos`.
    #[must_use]
    pub fn new(pos: Point) -> Self {
        Self {
            origin: pos,
            last: pos,
        }
    }

    /// Where the drag started.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The most recent pointer position.
    #[must_use]
    pub fn last(&self) -> Point {
        self.last
    }

    /// Records a new position and returns the movement since the previous one.
    pub fn advance(&mut self, pos: Point) -> Vec2 {
        let delta = pos - self.last;
        self.last = pos;
        delta
    }

    /// Offset from the drag origin to the latest position.
    #[must_use]
    pub fn total(&self) -> Vec2 {
        self.last - self.origin
    }
}
