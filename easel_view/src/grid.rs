// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Background grid generation over the buffered visible rectangle.
//!
//! A [`GridLattice`] describes every multiple-of-spacing point covering a
//! world rectangle. It is a small `Copy` value; iterating it with
//! [`GridLattice::points`] yields the points lazily, row by row, and can be
//! restarted any number of times. Callers rebuild the lattice whenever the
//! visible rectangle changes rather than patching the previous one.
//!
//! ```rust
//! use easel_view::GridLattice;
//! use kurbo::{Point, Rect};
//!
//! let lattice = GridLattice::covering(Rect::new(-5.0, 0.0, 25.0, 10.0), 10.0);
//! assert_eq!(lattice.columns(), 5); // -10, 0, 10, 20, 30
//! assert_eq!(lattice.rows(), 2); // 0, 10
//! assert_eq!(lattice.points().next(), Some(Point::new(-10.0, 0.0)));
//! ```

use core::iter::FusedIterator;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};

/// The set of grid points covering a rectangle at a fixed spacing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLattice {
    spacing: f64,
    first_column: i64,
    first_row: i64,
    columns: u64,
    rows: u64,
}

impl GridLattice {
    /// A lattice with no points.
    pub const EMPTY: Self = Self {
        spacing: 1.0,
        first_column: 0,
        first_row: 0,
        columns: 0,
        rows: 0,
    };

    /// Builds the lattice covering `rect` at `spacing`.
    ///
    /// Columns run from `floor(x0 / spacing)` to `ceil(x1 / spacing)`
    /// inclusive, and likewise for rows, so the lattice reaches at least one
    /// spacing past every edge that is not already on a grid line.
    ///
    /// Rects with zero area, non-finite coordinates, or a non-positive
    /// spacing produce [`GridLattice::EMPTY`].
    #[must_use]
    pub fn covering(rect: Rect, spacing: f64) -> Self {
        let rect = rect.abs();
        if !(spacing.is_finite() && spacing > 0.0)
            || !rect.is_finite()
            || rect.width() <= 0.0
            || rect.height() <= 0.0
        {
            return Self::EMPTY;
        }
        let (first_column, columns) = axis_span(rect.x0, rect.x1, spacing);
        let (first_row, rows) = axis_span(rect.y0, rect.y1, spacing);
        Self {
            spacing,
            first_column,
            first_row,
            columns,
            rows,
        }
    }

    /// Distance between neighbouring points.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Number of columns (distinct x values).
    #[must_use]
    pub fn columns(&self) -> u64 {
        self.columns
    }

    /// Number of rows (distinct y values).
    #[must_use]
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Grid index of the leftmost column; its x coordinate is `index * spacing`.
    #[must_use]
    pub fn first_column(&self) -> i64 {
        self.first_column
    }

    /// Grid index of the topmost row.
    #[must_use]
    pub fn first_row(&self) -> i64 {
        self.first_row
    }

    /// Total number of points.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.columns.saturating_mul(self.rows)
    }

    /// Returns `true` if the lattice has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }

    /// The rectangle spanned by the outermost points.
    ///
    /// Returns [`Rect::ZERO`] for an empty lattice.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        if self.is_empty() {
            return Rect::ZERO;
        }
        Rect::new(
            self.column_x(0),
            self.row_y(0),
            self.column_x(self.columns - 1),
            self.row_y(self.rows - 1),
        )
    }

    /// Returns `true` if `pt` is one of the lattice points.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        if self.is_empty() {
            return false;
        }
        let col = pt.x / self.spacing;
        let row = pt.y / self.spacing;
        if col.floor() != col || row.floor() != row {
            return false;
        }
        let bounds = self.bounds();
        pt.x >= bounds.x0 && pt.x <= bounds.x1 && pt.y >= bounds.y0 && pt.y <= bounds.y1
    }

    /// Iterates the points row by row, left to right.
    #[must_use]
    pub fn points(&self) -> GridPoints {
        GridPoints {
            lattice: *self,
            front: 0,
            back: self.len(),
        }
    }

    fn column_x(&self, column: u64) -> f64 {
        index_to_coord(self.first_column, column, self.spacing)
    }

    fn row_y(&self, row: u64) -> f64 {
        index_to_coord(self.first_row, row, self.spacing)
    }

    fn point_at(&self, index: u64) -> Point {
        let row = index / self.columns;
        let column = index % self.columns;
        Point::new(self.column_x(column), self.row_y(row))
    }
}

impl IntoIterator for GridLattice {
    type Item = Point;
    type IntoIter = GridPoints;

    fn into_iter(self) -> GridPoints {
        self.points()
    }
}

impl IntoIterator for &GridLattice {
    type Item = Point;
    type IntoIter = GridPoints;

    fn into_iter(self) -> GridPoints {
        self.points()
    }
}

/// Lazy iterator over the points of a [`GridLattice`].
///
/// The number of points is a `u64` and may not fit in `usize`, so this is
/// not an [`ExactSizeIterator`]; use [`GridPoints::remaining`] for the exact
/// count.
#[derive(Clone, Debug)]
pub struct GridPoints {
    lattice: GridLattice,
    front: u64,
    back: u64,
}

impl GridPoints {
    /// Number of points not yet yielded from either end.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.back - self.front
    }
}

impl Iterator for GridPoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.front >= self.back {
            return None;
        }
        let pt = self.lattice.point_at(self.front);
        self.front += 1;
        Some(pt)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }

    fn nth(&mut self, n: usize) -> Option<Point> {
        let skip = u64::try_from(n).unwrap_or(u64::MAX);
        self.front = self.front.saturating_add(skip).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for GridPoints {
    fn next_back(&mut self) -> Option<Point> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.lattice.point_at(self.back))
    }
}

impl FusedIterator for GridPoints {}

fn axis_span(min: f64, max: f64, spacing: f64) -> (i64, u64) {
    let first = (min / spacing).floor();
    let last = (max / spacing).ceil();
    #[expect(
        clippy::cast_possible_truncation,
        reason = "float to int casts saturate; the inputs are finite"
    )]
    let (first, last) = (first as i64, last as i64);
    let count = last.abs_diff(first).saturating_add(1);
    (first, count)
}

fn index_to_coord(first: i64, offset: u64, spacing: f64) -> f64 {
    let index = i128::from(first) + i128::from(offset);
    index as f64 * spacing
}
