use criterion::{black_box, criterion_group, criterion_main, Criterion};

use marsclock::ephemeris::compute;
use marsclock::status::render_status;

/// One snapshot per poll, as the updater does
fn bench_compute(c: &mut Criterion) {
    c.bench_function("compute_snapshot", |b| {
        b.iter(|| compute(black_box(1_700_000_000.0)))
    });
}

/// Ten years of hourly snapshots
fn bench_compute_span(c: &mut Criterion) {
    let epochs: Vec<f64> = (0..24 * 3653)
        .map(|h| 1_262_304_000.0 + h as f64 * 3600.0)
        .collect();

    c.bench_function("compute_snapshot/hourly_decade", |b| {
        b.iter(|| {
            for &secs in &epochs {
                black_box(compute(secs).ok());
            }
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let snapshot = compute(1_700_000_000.0).unwrap();
    c.bench_function("render_status", |b| {
        b.iter(|| render_status(black_box(&snapshot)))
    });
}

criterion_group!(benches, bench_compute, bench_compute_span, bench_render);
criterion_main!(benches);
