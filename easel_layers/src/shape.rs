// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shapes and their paint.

use kurbo::{Point, Rect, Vec2};
use peniko::Color;

/// Fill and stroke of a shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    /// Interior color, or `None` for an outline-only shape.
    pub fill: Option<Color>,
    /// Outline color, or `None` for no outline.
    pub stroke: Option<Color>,
    /// Outline width in world units, centered on the shape's edge.
    pub stroke_width: f64,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: Some(Color::BLACK),
            stroke_width: 2.0,
        }
    }
}

impl Paint {
    /// A fill with no outline.
    #[must_use]
    pub const fn filled(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
            stroke_width: 0.0,
        }
    }

    /// An outline with no fill.
    #[must_use]
    pub const fn stroked(color: Color, width: f64) -> Self {
        Self {
            fill: None,
            stroke: Some(color),
            stroke_width: width,
        }
    }

    /// Returns a copy with `color` as the fill.
    #[must_use]
    pub const fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    /// How far the outline reaches past the shape's edge.
    ///
    /// Zero when there is no stroke or the width is not a positive finite number.
    #[must_use]
    pub fn stroke_reach(&self) -> f64 {
        if self.stroke.is_some() && self.stroke_width.is_finite() && self.stroke_width > 0.0 {
            self.stroke_width * 0.5
        } else {
            0.0
        }
    }
}

/// A shape on the canvas, identified by a caller-chosen key.
///
/// Geometry is a world-space bounding rectangle; stacking order lives in a
/// separate [`ZOrder`](crate::ZOrder).
#[derive(Clone, Debug, PartialEq)]
pub struct Shape<K> {
    /// Identity of the shape.
    pub id: K,
    /// World-space bounds, excluding the stroke.
    pub bounds: Rect,
    /// Fill and stroke.
    pub paint: Paint,
}

impl<K> Shape<K> {
    /// Creates a shape. `bounds` may be given with its corners in any order.
    #[must_use]
    pub fn new(id: K, bounds: Rect, paint: Paint) -> Self {
        Self {
            id,
            bounds: bounds.abs(),
            paint,
        }
    }

    /// The area the shape covers, including the outline.
    #[must_use]
    pub fn painted_bounds(&self) -> Rect {
        self.bounds.abs().inflate(self.paint.stroke_reach(), self.paint.stroke_reach())
    }

    /// Returns `true` if `pt` lies on the shape, its outline, or within
    /// `tolerance` world units of either. Edges are inclusive.
    #[must_use]
    pub fn hit(&self, pt: Point, tolerance: f64) -> bool {
        if !self.bounds.is_finite() || !pt.is_finite() {
            return false;
        }
        let slop = if tolerance.is_finite() {
            tolerance.max(0.0)
        } else {
            0.0
        };
        let area = self.painted_bounds().inflate(slop, slop);
        pt.x >= area.x0 && pt.x <= area.x1 && pt.y >= area.y0 && pt.y <= area.y1
    }

    /// Moves the shape by `delta` world units.
    pub fn translate(&mut self, delta: Vec2) {
        self.bounds = self.bounds + delta;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};
    use peniko::Color;

    use super::{Paint, Shape};

    #[test]
    fn stroke_reach_is_half_width() {
        assert_eq!(Paint::stroked(Color::BLACK, 6.0).stroke_reach(), 3.0);
        assert_eq!(Paint::filled(Color::WHITE).stroke_reach(), 0.0);
        assert_eq!(Paint::stroked(Color::BLACK, f64::NAN).stroke_reach(), 0.0);
        assert_eq!(Paint::stroked(Color::BLACK, -4.0).stroke_reach(), 0.0);
    }

    #[test]
    fn hit_includes_stroke_and_tolerance() {
        let shape = Shape::new(
            1_u32,
            Rect::new(0.0, 0.0, 100.0, 50.0),
            Paint::stroked(Color::BLACK, 4.0),
        );
        assert!(shape.hit(Point::new(50.0, 25.0), 0.0));
        assert!(shape.hit(Point::new(100.0, 50.0), 0.0));
        assert!(shape.hit(Point::new(102.0, 25.0), 0.0));
        assert!(!shape.hit(Point::new(103.0, 25.0), 0.0));
        assert!(shape.hit(Point::new(103.0, 25.0), 1.0));
        assert!(!shape.hit(Point::new(103.0, 25.0), -5.0));
    }

    #[test]
    fn reversed_corners_are_normalized() {
        let shape = Shape::new(
            "a",
            Rect::new(10.0, 10.0, -10.0, -10.0),
            Paint::filled(Color::WHITE),
        );
        assert_eq!(shape.bounds, Rect::new(-10.0, -10.0, 10.0, 10.0));
        assert!(shape.hit(Point::ORIGIN, 0.0));
    }

    #[test]
    fn non_finite_inputs_never_hit() {
        let shape = Shape::new(0_u8, Rect::new(0.0, 0.0, 1.0, 1.0), Paint::default());
        assert!(!shape.hit(Point::new(f64::NAN, 0.5), 0.0));
        assert!(shape.hit(Point::new(0.5, 0.5), f64::INFINITY));
    }

    #[test]
    fn translate_moves_bounds() {
        let mut shape = Shape::new(0_u8, Rect::new(0.0, 0.0, 10.0, 10.0), Paint::default());
        shape.translate(Vec2::new(5.0, -5.0));
        assert_eq!(shape.bounds, Rect::new(5.0, -5.0, 15.0, 5.0));
    }
}
