// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use easel_input::canvas::CanvasView;
use easel_input::gesture::InputEvent;
use easel_input::tool::Modifiers;
use easel_view::clamp::clamp_pan;
use easel_view::{GridLattice, Viewport, ViewportConfig};
use kurbo::{Point, Rect, Size, Vec2};

fn bench_grid_regeneration(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/grid");

    // The lattice is sized by the container, never by the world.
    for (w, h) in [(800.0, 600.0), (1_920.0, 1_080.0), (3_840.0, 2_160.0)] {
        let mut vp = Viewport::new(Rect::new(0.0, 0.0, w, h));
        vp.set_zoom(0.3);
        let grid = vp.grid();
        group.throughput(Throughput::Elements(grid.len()));

        group.bench_with_input(
            BenchmarkId::new("covering", format!("{w}x{h}")),
            &vp,
            |b, vp| {
                b.iter(|| {
                    let rect = black_box(vp).compute_visible_rect();
                    black_box(GridLattice::covering(rect, 20.0))
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("iterate", format!("{w}x{h}")),
            &grid,
            |b, grid| {
                b.iter(|| {
                    let mut acc = 0.0;
                    for pt in black_box(grid).points() {
                        acc += pt.x + pt.y;
                    }
                    black_box(acc)
                });
            },
        );
    }

    group.finish();
}

fn bench_clamp(c: &mut Criterion) {
    let config = ViewportConfig::default();
    let container = Size::new(1_280.0, 720.0);
    let pans: Vec<Vec2> = (0..1_024)
        .map(|i| {
            let t = f64::from(i) - 512.0;
            Vec2::new(t * 37.0, -t * 11.0)
        })
        .collect();

    let mut group = c.benchmark_group("viewport/clamp");
    group.throughput(Throughput::Elements(pans.len() as u64));
    group.bench_function("clamp_pan", |b| {
        b.iter(|| {
            for &pan in &pans {
                black_box(clamp_pan(black_box(pan), 0.75, container, &config));
            }
        });
    });
    group.finish();
}

fn bench_wheel_zoom(c: &mut Criterion) {
    c.bench_function("canvas/wheel_zoom_cycle", |b| {
        let mut canvas = CanvasView::new(Rect::new(0.0, 0.0, 1_280.0, 720.0));
        let pos = Point::new(640.0, 360.0);
        let mut delta_y = -1.0;
        b.iter(|| {
            // Bounce between the zoom limits so every iteration changes the view.
            if !canvas.viewport().can_zoom_in() {
                delta_y = 1.0;
            } else if !canvas.viewport().can_zoom_out() {
                delta_y = -1.0;
            }
            black_box(canvas.handle(InputEvent::Wheel {
                delta_y,
                pos,
                modifiers: Modifiers::CTRL,
            }))
        });
    });
}

criterion_group!(benches, bench_grid_regeneration, bench_clamp, bench_wheel_zoom);
criterion_main!(benches);
