// Copyright 2026 the Graphview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use graphview_camera::{Camera, CameraState, PartialCameraState};
use kurbo::{Point, Size};

const DIMENSIONS: Size = Size::new(1920.0, 1080.0);

fn layout_points(n: usize) -> Vec<Point> {
    // Deterministic scatter over the nominal [0, 1] graph plane.
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            Point::new((t * 997.0).fract(), (t * 787.0).fract())
        })
        .collect()
}

fn bench_graph_to_viewport(c: &mut Criterion) {
    let camera = Camera::with_state(CameraState::new(0.37, 0.62, 0.4, 0.25));
    let points = layout_points(10_000);

    c.bench_function("graph_to_viewport_10k_points", |b| {
        b.iter(|| {
            for &point in &points {
                black_box(camera.graph_to_viewport(DIMENSIONS, black_box(point)));
            }
        });
    });

    c.bench_function("graph_to_viewport_transform", |b| {
        b.iter(|| black_box(camera.graph_to_viewport_transform(black_box(DIMENSIONS))));
    });
}

fn bench_round_trip(c: &mut Criterion) {
    let camera = Camera::with_state(CameraState::new(0.37, 0.62, 0.4, 0.25));
    let points = layout_points(1_000);

    c.bench_function("viewport_graph_round_trip_1k_points", |b| {
        b.iter(|| {
            for &point in &points {
                let view = camera.graph_to_viewport(DIMENSIONS, point);
                black_box(camera.viewport_to_graph(DIMENSIONS, view));
            }
        });
    });
}

fn bench_set_state(c: &mut Criterion) {
    c.bench_function("set_state_partial_churn", |b| {
        let mut camera = Camera::new();
        let mut ratio = 1.0;
        b.iter(|| {
            ratio = if ratio > 1e6 { 1.0 } else { ratio * 1.001 };
            camera.set_state(PartialCameraState::new().with_ratio(black_box(ratio)));
            black_box(camera.state());
        });
    });
}

criterion_group!(
    benches,
    bench_graph_to_viewport,
    bench_round_trip,
    bench_set_state
);
criterion_main!(benches);
