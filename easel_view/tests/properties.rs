// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-style tests for `easel_view`.
//!
//! These sweep a fixed set of pans, zooms and containers rather than using
//! random inputs, and check the invariants the viewport promises for all of
//! them.

use easel_view::clamp::clamp_pan;
use easel_view::{ClampMode, ConfigError, FitMode, GridLattice, Viewport, ViewportConfig};
use kurbo::{Point, Rect, Size, Vec2};

const ZOOMS: &[f64] = &[0.3, 0.45, 0.8, 1.0, 1.25, 1.8];
const PANS: &[(f64, f64)] = &[
    (0.0, 0.0),
    (-350.0, 125.5),
    (2_500.0, -4_000.0),
    (50_000.0, 50_000.0),
    (-50_000.0, -50_000.0),
];
const CONTAINERS: &[(f64, f64)] = &[(800.0, 600.0), (320.0, 480.0), (1_920.0, 1_080.0)];

fn viewports() -> impl Iterator<Item = Viewport> {
    CONTAINERS.iter().flat_map(|&(w, h)| {
        ZOOMS.iter().flat_map(move |&zoom| {
            PANS.iter().map(move |&(x, y)| {
                let mut vp = Viewport::new(Rect::new(0.0, 0.0, w, h));
                vp.set_zoom(zoom);
                vp.set_pan(Vec2::new(x, y));
                vp
            })
        })
    })
}

#[test]
fn screen_world_conversion_is_invertible() {
    let samples = [
        Point::new(0.0, 0.0),
        Point::new(-4_999.0, 4_999.0),
        Point::new(123.456, -789.012),
        Point::new(1e4, -1e4),
    ];
    for vp in viewports() {
        for &p in &samples {
            let back = vp.screen_to_world(vp.world_to_screen(p));
            assert!(
                (back - p).hypot() < 1e-6,
                "roundtrip drifted for {p:?} at zoom {}",
                vp.zoom()
            );
        }
    }
}

#[test]
fn clamp_is_idempotent_for_every_state() {
    let config = ViewportConfig::default();
    for vp in viewports() {
        let size = vp.container_size();
        let once = clamp_pan(vp.pan(), vp.zoom(), size, &config);
        assert_eq!(once, vp.pan(), "committed pan must already be clamped");
        let twice = clamp_pan(once, vp.zoom(), size, &config);
        assert_eq!(once, twice);
    }
}

#[test]
fn anchor_stays_fixed_when_clamp_does_not_intervene() {
    let mut vp = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
    vp.set_pan(Vec2::new(-1_200.0, -900.0));
    let anchors = [
        Point::new(400.0, 300.0),
        Point::new(10.0, 590.0),
        Point::new(799.0, 1.0),
    ];
    for &anchor in &anchors {
        for steps in [1, -1, 3, -2] {
            let world_before = vp.screen_to_world(anchor);
            vp.step_zoom(anchor, steps);
            let screen_after = vp.world_to_screen(world_before);
            assert!(
                (screen_after - anchor).hypot() < 1e-6,
                "anchor {anchor:?} moved to {screen_after:?} after {steps} steps"
            );
        }
    }
}

#[test]
fn clamped_world_always_overlaps_container() {
    for vp in viewports() {
        let container = Rect::from_origin_size(Point::ORIGIN, vp.container_size());
        let world_on_screen = vp.world_to_screen_rect(vp.world_bounds());
        let overlap = world_on_screen.intersect(container);
        assert!(
            overlap.width() > 0.0 && overlap.height() > 0.0,
            "world {world_on_screen:?} left container {container:?}"
        );
    }
}

#[test]
fn tiny_min_visible_still_leaves_overlap() {
    let modes = [ClampMode::KeepSomeVisible, ClampMode::WorldMargin];
    let fits = [FitMode::Center, FitMode::AlignMin];
    for clamp_mode in modes {
        for fit_mode in fits {
            let config = ViewportConfig {
                clamp_mode,
                fit_mode,
                ..ViewportConfig::default()
            }
            .with_min_visible_px(0.5);
            for &(w, h) in CONTAINERS {
                let container = Rect::new(0.0, 0.0, w, h);
                for &zoom in ZOOMS {
                    for &(x, y) in PANS {
                        let mut vp = Viewport::with_config(container, config).unwrap();
                        vp.set_zoom(zoom);
                        vp.set_pan(Vec2::new(x, y));
                        vp.pan_by(Vec2::new(1e9, 1e9));
                        let far = vp.world_to_screen_rect(vp.world_bounds());
                        vp.pan_by(Vec2::new(-2e9, -2e9));
                        let near = vp.world_to_screen_rect(vp.world_bounds());
                        for world_on_screen in [far, near] {
                            let overlap = world_on_screen.intersect(container);
                            assert!(
                                overlap.width() > 0.0 && overlap.height() > 0.0,
                                "{clamp_mode:?}/{fit_mode:?} at zoom {zoom}: world {world_on_screen:?} only touches {container:?}"
                            );
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn zero_min_visible_is_rejected() {
    let config = ViewportConfig::default().with_min_visible_px(0.0);
    let err = Viewport::with_config(Rect::new(0.0, 0.0, 800.0, 600.0), config).unwrap_err();
    assert_eq!(err, ConfigError::MinVisible(0.0));
}

#[test]
fn oversized_container_still_overlaps_world() {
    let mut vp = Viewport::new(Rect::new(0.0, 0.0, 20_000.0, 20_000.0));
    vp.set_zoom(0.3);
    vp.set_pan(Vec2::new(-1e6, 1e6));
    let world_on_screen = vp.world_to_screen_rect(vp.world_bounds());
    let center = world_on_screen.center();
    assert!((center.x - 10_000.0).abs() < 1e-6);
    assert!((center.y - 10_000.0).abs() < 1e-6);
}

#[test]
fn grid_covers_buffered_rect_without_gaps() {
    for vp in viewports() {
        let buffered = vp.compute_visible_rect();
        let grid = vp.grid();
        if buffered.width() <= 0.0 || buffered.height() <= 0.0 {
            assert!(grid.is_empty());
            continue;
        }
        let spacing = grid.spacing();
        let lattice = grid.bounds();
        assert!(lattice.x0 <= buffered.x0 && lattice.x1 >= buffered.x1);
        assert!(lattice.y0 <= buffered.y0 && lattice.y1 >= buffered.y1);
        // No gaps: every column/row step is exactly one spacing.
        let expected_columns = ((lattice.x1 - lattice.x0) / spacing).round() as u64 + 1;
        let expected_rows = ((lattice.y1 - lattice.y0) / spacing).round() as u64 + 1;
        assert_eq!(grid.columns(), expected_columns);
        assert_eq!(grid.rows(), expected_rows);
        assert_eq!(grid.points().count() as u64, grid.len());
    }
}

#[test]
fn panning_one_spacing_shifts_lattice_by_one_cell() {
    let mut vp = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
    vp.set_pan(Vec2::new(-1_000.0, -1_000.0));
    let spacing = vp.config().grid_spacing;
    let before = vp.grid();

    // Dragging the content left by one spacing reveals one more column on the right.
    vp.pan_by(Vec2::new(-spacing, 0.0));
    let after = vp.grid();

    assert_eq!(after.first_column(), before.first_column() + 1);
    assert_eq!(after.first_row(), before.first_row());
    assert!(after.columns().abs_diff(before.columns()) <= 1);
    assert_eq!(after.rows(), before.rows());

    let first_before: Vec<Point> = before.points().take(3).collect();
    let first_after: Vec<Point> = after.points().take(3).collect();
    for (b, a) in first_before.iter().zip(&first_after) {
        assert_eq!(a.x - b.x, spacing);
        assert_eq!(a.y, b.y);
    }
}

#[test]
fn grid_size_depends_on_view_not_world() {
    let small_world = ViewportConfig::default().with_world_size(10_000.0);
    let huge_world = ViewportConfig::default().with_world_size(10_000_000.0);
    let rect = Rect::new(0.0, 0.0, 800.0, 600.0);
    let mut a = Viewport::with_config(rect, small_world).unwrap();
    let mut b = Viewport::with_config(rect, huge_world).unwrap();
    a.set_pan(Vec2::new(-1_000.0, -1_000.0));
    b.set_pan(Vec2::new(-1_000.0, -1_000.0));
    assert_eq!(a.grid().len(), b.grid().len());
}

#[test]
fn lattice_rebuilt_from_same_rect_is_identical() {
    let rect = Rect::new(-37.0, 12.0, 410.0, 300.0);
    let a = GridLattice::covering(rect, 20.0);
    let b = GridLattice::covering(rect, 20.0);
    assert_eq!(a, b);
    assert!(a.points().eq(b.points()));
}

#[test]
fn independent_viewports_do_not_share_state() {
    let mut a = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
    let b = a.clone();
    a.zoom_in_center();
    a.pan_by(Vec2::new(-40.0, -40.0));
    assert_eq!(b.zoom(), 1.0);
    assert_eq!(b.pan(), Vec2::ZERO);
    assert_ne!(a.state(), b.state());
}

#[test]
fn resize_reclamps_pan() {
    let mut vp = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
    vp.set_zoom(0.3);
    vp.pan_by(Vec2::new(-1e6, 0.0));
    let narrow = vp.pan().x;
    vp.set_container_size(Size::new(1_600.0, 600.0));
    let (range_x, _) = vp.pan_limits();
    assert!(range_x.contains(vp.pan().x));
    assert!(vp.pan().x >= narrow);
}
