//! Criterion benchmarks for per-event camera operations.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{DVec2, DVec3};
use orbicam::camera::{BoundingBox, CameraController};
use orbicam::picking::{NoPick, PickHit};
use orbicam::CameraOptions;

fn viewport_camera() -> CameraController {
    match CameraController::new(
        DVec3::new(0.0, 20.0, 20.0),
        DVec3::ZERO,
        CameraOptions::default(),
    ) {
        Ok(c) => c,
        Err(e) => panic!("camera setup failed: {e}"),
    }
}

fn rotate_benchmark(c: &mut Criterion) {
    let mut camera = viewport_camera();
    c.bench_function("rotate_drag_step", |b| {
        b.iter(|| camera.rotate(black_box(DVec2::new(1.5, -0.5))))
    });
}

fn zoom_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom");

    group.bench_function("no_hit", |b| {
        b.iter(|| {
            let mut camera = viewport_camera();
            black_box(camera.zoom(DVec2::ZERO, black_box(120.0), &NoPick))
        })
    });

    let picker = |_: DVec2| Some(PickHit::at(DVec3::new(3.0, 0.0, -1.0)));
    group.bench_function("toward_hit", |b| {
        b.iter(|| {
            let mut camera = viewport_camera();
            black_box(camera.zoom(DVec2::ZERO, black_box(120.0), &picker))
        })
    });

    group.finish();
}

fn fit_benchmark(c: &mut Criterion) {
    let bounds = BoundingBox::new(DVec3::new(-4.0, 0.0, -2.0), DVec3::new(4.0, 3.0, 2.0));
    c.bench_function("fit_to_bounds", |b| {
        b.iter(|| {
            let mut camera = viewport_camera();
            camera.fit_to_bounds(black_box(&bounds));
            black_box(camera.spherical().radius())
        })
    });
}

criterion_group!(benches, rotate_benchmark, zoom_benchmark, fit_benchmark);
criterion_main!(benches);
