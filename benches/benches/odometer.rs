// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cantor_axis::{Axis, AxisFlags, AxisMetrics, Orientation};
use cantor_odometer::{OdometerConfig, OdometerSystem, SuccessorTable};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;

fn bench_successor_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("successor_table");
    for depth in [8_u32, 12, 16, 20] {
        group.throughput(Throughput::Elements(1 << depth));
        group.bench_function(format!("build_depth_{depth}"), |b| {
            b.iter(|| {
                let t = SuccessorTable::new(black_box(depth)).unwrap();
                black_box(t.len());
            });
        });
    }
    let table = SuccessorTable::new(16).unwrap();
    group.bench_function("walk_full_cycle_depth_16", |b| {
        b.iter(|| {
            let mut x = 0;
            for _ in 0..table.len() {
                x = table.successor(x);
            }
            black_box(x);
        });
    });
    group.bench_function("advance_depth_16", |b| {
        b.iter(|| black_box(table.advance(black_box(12345), black_box(54321))));
    });
    group.finish();
}

fn bench_axis(c: &mut Criterion) {
    let mut group = c.benchmark_group("axis");
    for depth in [8_u32, 12, 16] {
        group.bench_function(format!("build_depth_{depth}"), |b| {
            b.iter(|| {
                let a = Axis::new(
                    700.0,
                    black_box(depth),
                    Orientation::Forward,
                    AxisFlags::VISIBLE | AxisFlags::NESTED_LEVELS,
                    AxisMetrics::default(),
                )
                .unwrap();
                black_box(a.finest().len());
            });
        });
    }
    let mut axis = Axis::new(
        700.0,
        8,
        Orientation::Forward,
        AxisFlags::VISIBLE | AxisFlags::NESTED_LEVELS,
        AxisMetrics::default(),
    )
    .unwrap();
    axis.set_selected(123);
    group.bench_function("emit_geometry_depth_8", |b| {
        b.iter(|| black_box(axis.emit_geometry().len()));
    });
    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    let sys = OdometerSystem::new(Point::new(50.0, 50.0), OdometerConfig::default()).unwrap();
    group.bench_function("update_and_emit_default", |b| {
        b.iter_batched(
            || sys.clone(),
            |mut sys| {
                sys.update(Point::new(black_box(321.0), black_box(234.0)));
                black_box(sys.emit_frame().len());
            },
            BatchSize::SmallInput,
        );
    });
    let big = OdometerSystem::new(
        Point::new(50.0, 50.0),
        OdometerConfig {
            orbit_iterations: 100,
            ..Default::default()
        },
    )
    .unwrap();
    group.bench_function("orbit_points_100", |b| {
        b.iter(|| black_box(big.orbit_points().len()));
    });
    group.finish();
}

criterion_group!(benches, bench_successor_table, bench_axis, bench_frame);
criterion_main!(benches);
