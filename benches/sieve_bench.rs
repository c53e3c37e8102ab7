use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sieve_ladder::{composite_offset_patterns, compress_period, SieveRegistry};

fn bench_ladder(c: &mut Criterion) {
    let registry = SieveRegistry::standard();
    let mut group = c.benchmark_group("ladder");
    for bound in [10_000usize, 1_000_000] {
        for (index, variant) in registry.iter() {
            group.bench_with_input(
                BenchmarkId::new(format!("{}-{}", index, variant.name), bound),
                &bound,
                |b, &bound| b.iter(|| (variant.run)(black_box(bound))),
            );
        }
    }
    group.finish();
}

fn bench_offset_patterns(c: &mut Criterion) {
    c.bench_function("composite_offset_patterns(100_000)", |b| {
        b.iter(|| composite_offset_patterns(black_box(100_000)));
    });
}

fn bench_compress_period(c: &mut Criterion) {
    let wheel = [6usize, 4, 2, 4, 2, 4, 6, 2];
    let sequence: Vec<usize> = wheel.iter().copied().cycle().take(10_000).collect();
    c.bench_function("compress_period(30-wheel x 1250)", |b| {
        b.iter(|| compress_period(black_box(&sequence)));
    });
}

criterion_group!(
    benches,
    bench_ladder,
    bench_offset_patterns,
    bench_compress_period,
);
criterion_main!(benches);
