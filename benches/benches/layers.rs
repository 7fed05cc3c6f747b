// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use easel_layers::{Paint, Shape, ZOrder, hit_test};
use kurbo::{Point, Rect};

fn build(len: u32) -> (Vec<Shape<u32>>, ZOrder<u32>) {
    let mut shapes = Vec::with_capacity(len as usize);
    let mut order = ZOrder::new();
    for id in 0..len {
        let x = f64::from(id % 64) * 30.0;
        let y = f64::from(id / 64) * 30.0;
        shapes.push(Shape::new(
            id,
            Rect::new(x, y, x + 40.0, y + 40.0),
            Paint::default(),
        ));
        order.push(id);
    }
    (shapes, order)
}

fn bench_reorder(c: &mut Criterion) {
    let mut group = c.benchmark_group("zorder/reorder");

    // Each move clones the ordering; this tracks what that costs per shape count.
    for len in [64_u32, 1_024, 8_192] {
        let (_, order) = build(len);
        let middle = len / 2;
        group.throughput(Throughput::Elements(u64::from(len)));

        group.bench_with_input(BenchmarkId::new("moved_to_front", len), &order, |b, order| {
            b.iter(|| black_box(order.moved_to_front(black_box(&middle))));
        });
        group.bench_with_input(BenchmarkId::new("moved_up", len), &order, |b, order| {
            b.iter(|| black_box(order.moved_up(black_box(&middle))));
        });
    }

    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("zorder/hit_test");

    for len in [64_u32, 1_024, 8_192] {
        let (shapes, order) = build(len);
        group.bench_with_input(BenchmarkId::new("miss", len), &order, |b, order| {
            let pt = Point::new(-500.0, -500.0);
            b.iter(|| black_box(hit_test(order, |k| shapes.get(*k as usize), pt, 2.0)));
        });
        group.bench_with_input(BenchmarkId::new("back_hit", len), &order, |b, order| {
            let pt = Point::new(5.0, 5.0);
            b.iter(|| black_box(hit_test(order, |k| shapes.get(*k as usize), pt, 2.0)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reorder, bench_hit_test);
criterion_main!(benches);
