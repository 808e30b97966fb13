//! Benchmarks for the per-frame hot paths of the engine.
use criterion::{Criterion, criterion_group, criterion_main};

use flick_physics::core::time::{Duration, Instant};
use flick_physics::core::{Size, Vector};
use flick_physics::{Engine, Settings, bounds};

fn bench_elastic(c: &mut Criterion) {
    let _ = c.bench_function("elastic", |b| {
        b.iter(|| {
            let mut accumulator = 0.0;

            for step in -200..200 {
                accumulator += bounds::elastic(
                    std::hint::black_box(step as f32 * 10.0),
                    std::hint::black_box(1_000.0),
                    std::hint::black_box(300.0),
                );
            }

            accumulator
        });
    });
}

fn bench_drag_and_settle(c: &mut Criterion) {
    let _ = c.bench_function("drag_and_settle", |b| {
        b.iter(|| {
            let mut engine = Engine::new(Settings::default());
            engine.viewport_resized(Size::new(300.0, 300.0));
            engine.content_resized(Size::new(1_000.0, 2_000.0));

            let mut now = Instant::now();

            engine.on_drag_changed(Vector::ZERO, now);

            for step in 1..=30 {
                now += Duration::from_millis(16);
                engine.on_drag_changed(Vector::new(step as f32 * -8.0, step as f32 * -12.0), now);
            }

            engine.on_drag_ended(now);

            while engine.tick(now) {
                now += Duration::from_millis(16);
            }

            engine.offset(now)
        });
    });
}

criterion_group!(benches, bench_elastic, bench_drag_and_settle);
criterion_main!(benches);
