use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qrecip_core::{Divisor, ReciprocalEngine, SeriesAccumulator};

fn bench_reciprocal(c: &mut Criterion) {
    let mut group = c.benchmark_group("reciprocal");
    let engine = ReciprocalEngine::new();

    for &d in &[1u64, 3, 199_999, Divisor::MAX] {
        let divisor = Divisor::new(d).expect("bench divisor");
        group.bench_with_input(BenchmarkId::new("newton_40", d), &divisor, |b, &divisor| {
            b.iter(|| engine.reciprocal(black_box(divisor)));
        });
    }

    group.finish();
}

fn bench_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("series");
    let acc = SeriesAccumulator::new();

    // Keep term counts small to avoid long CI times
    for &n in &[1_000u64, 10_000u64] {
        group.throughput(Throughput::Elements(n));
        group.bench_with_input(BenchmarkId::new("compute_series", n), &n, |b, &n| {
            b.iter(|| acc.compute_series(black_box(n)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reciprocal, bench_series);
criterion_main!(benches);
