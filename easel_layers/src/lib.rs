// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Layers: shapes, stacking order and hit testing.
//!
//! This crate keeps track of _which shape is on top_. It does not store the
//! shapes themselves; callers keep them in whatever map suits their document
//! and hand in a lookup closure when hit testing.
//!
//! - [`Shape`] and [`Paint`]: a caller-keyed world-space rectangle with
//!   optional fill and stroke.
//! - [`ZOrder`]: the back-to-front sequence of keys. Reordering returns a new
//!   ordering and leaves the old one intact, which makes undo a matter of
//!   keeping the previous value.
//! - [`hit_test`] and [`hits`]: walk an ordering front to back and report the
//!   shapes under a world-space point.
//!
//! ## Minimal example
//!
//! ```rust
//! use easel_layers::{Paint, Shape, ZOrder, hit_test};
//! use kurbo::{Point, Rect};
//! use peniko::Color;
//!
//! let shapes = vec![
//!     Shape::new("back", Rect::new(0.0, 0.0, 200.0, 200.0), Paint::filled(Color::WHITE)),
//!     Shape::new("front", Rect::new(100.0, 100.0, 300.0, 300.0), Paint::default()),
//! ];
//! let order = ZOrder::try_from(vec!["back", "front"]).unwrap();
//! let lookup = |key: &&str| shapes.iter().find(|s| s.id == *key);
//!
//! let pt = Point::new(150.0, 150.0);
//! assert_eq!(hit_test(&order, lookup, pt, 0.0), Some(&"front"));
//!
//! // "Send to back" produces a new ordering; the old one is unchanged.
//! let sent_back = order.moved_to_back(&"front");
//! assert_eq!(hit_test(&sent_back, lookup, pt, 0.0), Some(&"back"));
//! assert_eq!(hit_test(&order, lookup, pt, 0.0), Some(&"front"));
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: select Kurbo's and Peniko's float backend.
//! - `serde`: serialize [`ZOrder`] as a plain list of keys.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod hit;
mod shape;
mod zorder;

pub use hit::{hit_test, hits};
pub use shape::{Paint, Shape};
pub use zorder::{DuplicateKeyError, ZOrder};
