use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tickchain::{
    advance_hash, advance_point, advance_scalar, derive_key_from_seed, derive_point_from_scalar,
    step_hybrid, step_point, step_scalar,
};

fn bench_step_point(c: &mut Criterion) {
    let point = derive_point_from_scalar(&derive_key_from_seed(b"bench chain"));

    c.bench_function("step_point", |bencher| {
        bencher.iter(|| black_box(step_point(black_box(&point))))
    });
}

fn bench_step_scalar(c: &mut Criterion) {
    let scalar = derive_key_from_seed(b"bench chain");

    c.bench_function("step_scalar", |bencher| {
        bencher.iter(|| black_box(step_scalar(black_box(&scalar))))
    });
}

fn bench_step_hybrid(c: &mut Criterion) {
    let point = derive_point_from_scalar(&derive_key_from_seed(b"bench chain"));

    c.bench_function("step_hybrid", |bencher| {
        bencher.iter(|| black_box(step_hybrid(black_box(b"carried"), black_box(&point))))
    });
}

fn bench_advance_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_hash");
    for count in [100u64, 1000, 10000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |bencher, &n| {
            bencher.iter(|| black_box(advance_hash(black_box(b"tick"), n)))
        });
    }
    group.finish();
}

fn bench_advance_point(c: &mut Criterion) {
    let point = derive_point_from_scalar(&derive_key_from_seed(b"bench chain"));

    let mut group = c.benchmark_group("advance_point");
    for count in [10u64, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |bencher, &n| {
            bencher.iter(|| black_box(advance_point(black_box(&point), n)))
        });
    }
    group.finish();
}

fn bench_advance_scalar(c: &mut Criterion) {
    let scalar = derive_key_from_seed(b"bench chain");

    let mut group = c.benchmark_group("advance_scalar");
    for count in [10u64, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |bencher, &n| {
            bencher.iter(|| black_box(advance_scalar(black_box(&scalar), n)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_step_point,
    bench_step_scalar,
    bench_step_hybrid,
    bench_advance_hash,
    bench_advance_point,
    bench_advance_scalar
);
criterion_main!(benches);
