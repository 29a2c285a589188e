//! Per-frame cost of the choreographer update pass
//!
//! Measures:
//! - A steady frame with scroll held still
//! - A full scroll sweep, including tier switches from a resizing viewport
//! - Scene description build time for growing particle counts

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scrollscape_core::{FrameTimer, ScrollState};
use scrollscape_scene::{ChoreographyConfig, SceneChoreographer, SceneDescription};

const DT: f64 = 1.0 / 60.0;

fn bench_steady_frame(c: &mut Criterion) {
    let mut choreographer = SceneChoreographer::new(ChoreographyConfig::default()).unwrap();
    let mut timer = FrameTimer::new();
    let scroll = Some(ScrollState::new(0.5));

    c.bench_function("update_steady", |b| {
        b.iter(|| black_box(choreographer.update(scroll, timer.advance(DT), Some(16.0))))
    });
}

fn bench_scroll_sweep(c: &mut Criterion) {
    let frames = 120;
    let mut group = c.benchmark_group("scroll_sweep");
    group.throughput(Throughput::Elements(frames));

    group.bench_function("sweep_with_resize", |b| {
        b.iter(|| {
            let mut choreographer =
                SceneChoreographer::new(ChoreographyConfig::default()).unwrap();
            let mut timer = FrameTimer::new();
            for i in 0..frames {
                let offset = i as f32 / frames as f32;
                let width = if i % 40 < 20 { 16.0 } else { 6.0 };
                black_box(choreographer.update(
                    Some(ScrollState::new(offset)),
                    timer.advance(DT),
                    Some(width),
                ));
            }
        })
    });

    group.finish();
}

fn bench_scene_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_build");

    for count in [200usize, 2_000, 20_000] {
        let mut config = ChoreographyConfig::default();
        config.scene.voxel_count = count;
        config.stream.count = count / 5;

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &config, |b, config| {
            b.iter(|| black_box(SceneDescription::build(config)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_steady_frame,
    bench_scroll_sweep,
    bench_scene_build
);
criterion_main!(benches);
