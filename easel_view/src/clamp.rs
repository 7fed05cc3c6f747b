// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounds and clamp policy for pan offsets.
//!
//! Pan is expressed in container-relative screen pixels: a world point `w`
//! lands at `w * zoom + pan`. For a world spanning `[world_min, world_max]`
//! on one axis (extent `W`), the modes produce these ranges:
//!
//! - [`ClampMode::WorldMargin`]: `[-(W * zoom) + container - W / 4, W / 4]`,
//!   intersected with the keep-visible range below.
//! - [`ClampMode::KeepSomeVisible`]: `[m - world_max * zoom, container - m - world_min * zoom]`,
//!   where `m` is the configured minimum overlap capped at half the container
//!   and half the scaled world.
//! - [`ClampMode::None`]: unbounded.
//!
//! When the range is empty (a container much larger than the scaled world),
//! the pan falls back to a position chosen by [`FitMode`], independent of the
//! proposed pan. Every function here is pure and idempotent.
//!
//! ```rust
//! use easel_view::ViewportConfig;
//! use easel_view::clamp::clamp_pan;
//! use kurbo::{Size, Vec2};
//!
//! let config = ViewportConfig::default();
//! let pan = clamp_pan(Vec2::new(50_000.0, 0.0), 1.0, Size::new(800.0, 600.0), &config);
//! assert_eq!(pan.x, 2_500.0);
//! ```

use kurbo::{Size, Vec2};

use crate::config::ViewportConfig;
use crate::modes::{ClampMode, FitMode};

/// Allowed pan values along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanRange {
    /// Any pan is allowed.
    Unbounded,
    /// Pan must lie in `[min, max]`.
    Bounded {
        /// Lowest allowed pan.
        min: f64,
        /// Highest allowed pan.
        max: f64,
    },
    /// No pan satisfies the constraints; a fallback position is used instead.
    Empty,
}

impl PanRange {
    /// Returns `true` if `pan` is allowed without correction.
    #[must_use]
    pub fn contains(&self, pan: f64) -> bool {
        match *self {
            Self::Unbounded => true,
            Self::Bounded { min, max } => pan >= min && pan <= max,
            Self::Empty => false,
        }
    }

    /// Corrects `pan` into this range, using `fallback` when the range is empty.
    #[must_use]
    pub fn clamp(&self, pan: f64, fallback: f64) -> f64 {
        match *self {
            Self::Unbounded => pan,
            Self::Bounded { min, max } => pan.clamp(min, max),
            Self::Empty => fallback,
        }
    }
}

/// Computes the allowed pan range along one axis.
///
/// `world_min..world_max` is the world extent on this axis, `container` the
/// container length in pixels.
#[must_use]
pub fn axis_pan_range(
    mode: ClampMode,
    world_min: f64,
    world_max: f64,
    container: f64,
    zoom: f64,
    min_visible_px: f64,
) -> PanRange {
    let extent = world_max - world_min;
    if mode == ClampMode::None || extent <= 0.0 || container <= 0.0 {
        return PanRange::Unbounded;
    }
    let scaled = extent * zoom;
    let overlap = min_visible_px.min(container * 0.5).min(scaled * 0.5).max(0.0);
    let keep_min = overlap - world_max * zoom;
    let keep_max = container - overlap - world_min * zoom;

    let (min, max) = if mode == ClampMode::WorldMargin {
        let margin = extent / 4.0;
        let max_pan = margin;
        let min_pan = -scaled + container - margin;
        (min_pan.max(keep_min), max_pan.min(keep_max))
    } else {
        (keep_min, keep_max)
    };

    if min <= max {
        PanRange::Bounded { min, max }
    } else {
        PanRange::Empty
    }
}

/// Pan used on one axis when its [`PanRange`] is empty.
#[must_use]
pub fn fallback_pan(
    fit_mode: FitMode,
    world_min: f64,
    world_max: f64,
    container: f64,
    zoom: f64,
) -> f64 {
    match fit_mode {
        FitMode::Center => container * 0.5 - (world_min + world_max) * 0.5 * zoom,
        FitMode::AlignMin => -world_min * zoom,
    }
}

/// Returns the allowed pan ranges `(x, y)` for the given zoom and container.
#[must_use]
pub fn pan_ranges(zoom: f64, container: Size, config: &ViewportConfig) -> (PanRange, PanRange) {
    let bounds = config.world_bounds();
    let x = axis_pan_range(
        config.clamp_mode,
        bounds.x0,
        bounds.x1,
        container.width,
        zoom,
        config.min_visible_px,
    );
    let y = axis_pan_range(
        config.clamp_mode,
        bounds.y0,
        bounds.y1,
        container.height,
        zoom,
        config.min_visible_px,
    );
    (x, y)
}

/// Corrects a proposed pan so the world stays reachable.
///
/// Each axis is clamped independently.
#[must_use]
pub fn clamp_pan(pan: Vec2, zoom: f64, container: Size, config: &ViewportConfig) -> Vec2 {
    let bounds = config.world_bounds();
    let (range_x, range_y) = pan_ranges(zoom, container, config);
    let fallback_x = fallback_pan(config.fit_mode, bounds.x0, bounds.x1, container.width, zoom);
    let fallback_y = fallback_pan(
        config.fit_mode,
        bounds.y0,
        bounds.y1,
        container.height,
        zoom,
    );
    Vec2::new(
        range_x.clamp(pan.x, fallback_x),
        range_y.clamp(pan.y, fallback_y),
    )
}

#[cfg(test)]
mod tests {
    use kurbo::{Size, Vec2};

    use super::{PanRange, axis_pan_range, clamp_pan};
    use crate::config::ViewportConfig;
    use crate::modes::{ClampMode, FitMode};

    const CONTAINER: Size = Size::new(800.0, 600.0);

    #[test]
    fn pan_past_world_edge_clamps_to_quarter_world() {
        let config = ViewportConfig::default();
        let pan = clamp_pan(Vec2::new(50_000.0, 0.0), 1.0, CONTAINER, &config);
        assert_eq!(pan.x, 2_500.0);
        assert_eq!(pan.y, 0.0);
    }

    #[test]
    fn world_margin_range_matches_formula_when_keep_visible_is_looser() {
        // At zoom 1 the lower bound comes from keeping the world on screen,
        // the upper bound from the quarter-world margin.
        let range = axis_pan_range(ClampMode::WorldMargin, -5_000.0, 5_000.0, 800.0, 1.0, 32.0);
        assert_eq!(
            range,
            PanRange::Bounded {
                min: 32.0 - 5_000.0,
                max: 2_500.0
            }
        );
    }

    #[test]
    fn keep_some_visible_bounds_follow_overlap() {
        let range = axis_pan_range(
            ClampMode::KeepSomeVisible,
            -5_000.0,
            5_000.0,
            800.0,
            0.5,
            32.0,
        );
        assert_eq!(
            range,
            PanRange::Bounded {
                min: 32.0 - 2_500.0,
                max: 800.0 - 32.0 + 2_500.0
            }
        );
    }

    #[test]
    fn clamp_is_idempotent() {
        let config = ViewportConfig::default();
        for &zoom in &[0.3, 0.75, 1.0, 1.8] {
            for &(x, y) in &[
                (50_000.0, -50_000.0),
                (-123.0, 456.0),
                (0.0, 0.0),
                (-1e9, 1e9),
            ] {
                let once = clamp_pan(Vec2::new(x, y), zoom, CONTAINER, &config);
                let twice = clamp_pan(once, zoom, CONTAINER, &config);
                assert_eq!(once, twice, "clamp must be idempotent at zoom {zoom}");
            }
        }
    }

    #[test]
    fn oversized_container_centers_world() {
        let config = ViewportConfig::default();
        let container = Size::new(20_000.0, 20_000.0);
        let range = axis_pan_range(
            ClampMode::WorldMargin,
            -5_000.0,
            5_000.0,
            container.width,
            0.3,
            32.0,
        );
        assert_eq!(range, PanRange::Empty);

        let pan = clamp_pan(Vec2::new(-7.0, 99.0), 0.3, container, &config);
        assert_eq!(pan, Vec2::new(10_000.0, 10_000.0));
    }

    #[test]
    fn oversized_container_can_align_min() {
        let config = ViewportConfig::default().with_fit_mode(FitMode::AlignMin);
        let container = Size::new(20_000.0, 20_000.0);
        let pan = clamp_pan(Vec2::ZERO, 0.3, container, &config);
        assert!((pan.x - 1_500.0).abs() < 1e-9);
        assert!((pan.y - 1_500.0).abs() < 1e-9);
    }

    #[test]
    fn none_mode_and_unmounted_container_are_unbounded() {
        let free = ViewportConfig::default().with_clamp_mode(ClampMode::None);
        let pan = Vec2::new(1e7, -1e7);
        assert_eq!(clamp_pan(pan, 1.0, CONTAINER, &free), pan);

        let config = ViewportConfig::default();
        assert_eq!(clamp_pan(pan, 1.0, Size::ZERO, &config), pan);
    }

    #[test]
    fn range_contains_reports_membership() {
        let range = PanRange::Bounded {
            min: -1.0,
            max: 1.0,
        };
        assert!(range.contains(0.5));
        assert!(!range.contains(2.0));
        assert!(PanRange::Unbounded.contains(f64::MAX));
        assert!(!PanRange::Empty.contains(0.0));
    }
}
