// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Front-to-back hit testing over a [`ZOrder`].

use kurbo::Point;

use crate::shape::Shape;
use crate::zorder::ZOrder;

/// Every key whose shape is hit at `pt`, frontmost first.
///
/// `lookup` resolves a key to its shape; keys it cannot resolve are skipped.
/// `pt` and `tolerance` are in world units, so callers convert the pointer
/// with the viewport first and usually scale a pixel tolerance by the
/// current world-units-per-pixel.
pub fn hits<'o, 's, K, F>(
    order: &'o ZOrder<K>,
    mut lookup: F,
    pt: Point,
    tolerance: f64,
) -> impl Iterator<Item = &'o K>
where
    K: 's,
    F: FnMut(&K) -> Option<&'s Shape<K>>,
{
    order
        .iter_front_to_back()
        .filter(move |key| lookup(key).is_some_and(|shape| shape.hit(pt, tolerance)))
}

/// The topmost key whose shape is hit at `pt`.
///
/// ```rust
/// use easel_layers::{Paint, Shape, ZOrder, hit_test};
/// use kurbo::{Point, Rect};
///
/// let shapes = [
///     Shape::new(0_usize, Rect::new(0.0, 0.0, 100.0, 100.0), Paint::default()),
///     Shape::new(1_usize, Rect::new(50.0, 50.0, 150.0, 150.0), Paint::default()),
/// ];
/// let mut order = ZOrder::new();
/// order.push(0);
/// order.push(1);
///
/// let lookup = |k: &usize| shapes.get(*k);
/// assert_eq!(hit_test(&order, lookup, Point::new(75.0, 75.0), 0.0), Some(&1));
/// assert_eq!(hit_test(&order.moved_to_front(&0), lookup, Point::new(75.0, 75.0), 0.0), Some(&0));
/// assert_eq!(hit_test(&order, lookup, Point::new(500.0, 0.0), 0.0), None);
/// ```
pub fn hit_test<'o, 's, K, F>(
    order: &'o ZOrder<K>,
    lookup: F,
    pt: Point,
    tolerance: f64,
) -> Option<&'o K>
where
    K: 's,
    F: FnMut(&K) -> Option<&'s Shape<K>>,
{
    hits(order, lookup, pt, tolerance).next()
}
