use criterion::{Criterion, criterion_group, criterion_main};
use morph_chart::animation::{ManualFrameScheduler, Transition};
use morph_chart::core::{align_segments, map_to_points};
use morph_chart::render::RecordingSurface;
use morph_chart::{CanvasChart, ChartConfig};
use std::hint::black_box;

fn samples(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            (t * 0.05).sin() * 200.0 + t * 0.01
        })
        .collect()
}

fn bench_map_to_points_10k(c: &mut Criterion) {
    let data = samples(10_000);

    c.bench_function("map_to_points_10k", |b| {
        b.iter(|| {
            let _ = map_to_points(
                black_box(&data),
                black_box(1920.0),
                black_box(1080.0),
                black_box(50.0),
            )
            .expect("mapping should succeed");
        })
    });
}

fn bench_align_segments_1k_to_10k(c: &mut Criterion) {
    let small = map_to_points(&samples(1_000), 1920.0, 1080.0, 50.0).expect("map small");
    let big = map_to_points(&samples(10_000), 1920.0, 1080.0, 50.0).expect("map big");

    c.bench_function("align_segments_1k_to_10k", |b| {
        b.iter(|| {
            let _ = align_segments(black_box(&small), black_box(&big)).expect("align");
        })
    });
}

fn bench_transition_frame_10k(c: &mut Criterion) {
    let from = map_to_points(&samples(10_000), 1920.0, 1080.0, 50.0).expect("map from");
    let to: Vec<_> = from.iter().rev().copied().collect();
    let transition = Transition::new(from, to, 0.0, 300.0).expect("transition");

    c.bench_function("transition_frame_10k", |b| {
        b.iter(|| {
            let _ = transition.frame_at(black_box(150.0));
        })
    });
}

fn bench_chart_full_transition_2k(c: &mut Criterion) {
    let first = samples(2_000);
    let second: Vec<f64> = first.iter().map(|v| -v).collect();

    c.bench_function("chart_full_transition_2k", |b| {
        b.iter(|| {
            let mut chart = CanvasChart::new(
                RecordingSurface::new(1600, 900),
                ManualFrameScheduler::new(0.0),
                ChartConfig::default(),
            )
            .expect("chart init");
            chart.draw(black_box(&first)).expect("first draw");
            chart.draw(black_box(&second)).expect("second draw");
            while chart.is_animating() {
                let now = chart.scheduler_mut().advance(16.0);
                let handle = chart.scheduler_mut().fire().expect("pending frame");
                chart.on_frame(handle, now).expect("frame");
            }
        })
    });
}

criterion_group!(
    benches,
    bench_map_to_points_10k,
    bench_align_segments_1k_to_10k,
    bench_transition_frame_10k,
    bench_chart_full_transition_2k
);
criterion_main!(benches);
