use clockwork::{bound_to_180, circular_mean, is_angle_between, Circle, MeanOptions};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn spread(n: usize) -> Vec<f64> {
    (0..n).map(|i| 350.0 + (i as f64 * 0.37) % 20.0).collect()
}

fn bench_wrapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrapping");

    group.bench_function("bound_to_180", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let angle = -1800.0 + i as f64 * 3.7;
                black_box(bound_to_180(black_box(angle)));
            }
        });
    });

    let hours = Circle::of::<clockwork::HourAngle>();
    group.bench_function("principal_hours", |b| {
        b.iter(|| {
            for i in 0..1000 {
                black_box(hours.principal(black_box(i as f64 * 0.05)));
            }
        });
    });

    group.finish();
}

fn bench_sectors(c: &mut Criterion) {
    let mut group = c.benchmark_group("sectors");

    group.bench_function("is_angle_between", |b| {
        b.iter(|| {
            for i in 0..1000 {
                black_box(is_angle_between(350.0, black_box(i as f64), 20.0));
            }
        });
    });

    let angles = spread(10_000);
    group.bench_function("sieve_10000", |b| {
        b.iter(|| Circle::DEGREES.sieve(black_box(&angles), 355.0, 5.0));
    });

    group.finish();
}

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");

    for size in [10usize, 1_000, 100_000] {
        let angles = spread(size);
        group.bench_with_input(BenchmarkId::new("circular_mean", size), &angles, |b, input| {
            b.iter(|| circular_mean(black_box(input)));
        });
    }

    let angles = spread(1_000);
    let options = MeanOptions {
        skip_nan: true,
        ..MeanOptions::default()
    };
    group.bench_function("circular_mean_skip_nan", |b| {
        b.iter(|| Circle::DEGREES.mean(black_box(&angles), &options));
    });

    group.finish();
}

criterion_group!(benches, bench_wrapping, bench_sectors, bench_statistics);
criterion_main!(benches);
