use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{Point, Random, Scalar};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_mul_base(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = Scalar::random(&mut rng);

    c.bench_function("mul_base", |bencher| {
        bencher.iter(|| black_box(Point::mul_base(black_box(&scalar))))
    });
}

fn bench_point_scalar_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let point = Point::random(&mut rng);
    let scalar = Scalar::random(&mut rng);

    c.bench_function("point_scalar_mul", |bencher| {
        bencher.iter(|| black_box(black_box(point) * black_box(scalar)))
    });
}

fn bench_point_add(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = Point::random(&mut rng);
    let b = Point::random(&mut rng);

    c.bench_function("point_add", |bencher| {
        bencher.iter(|| black_box(black_box(a) + black_box(b)))
    });
}

fn bench_double_scalar_mul_basepoint(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = Scalar::random(&mut rng);
    let b = Scalar::random(&mut rng);
    let point = Point::random(&mut rng);

    c.bench_function("double_scalar_mul_basepoint", |bencher| {
        bencher.iter(|| {
            black_box(Point::double_scalar_mul_basepoint(
                black_box(&a),
                black_box(&point),
                black_box(&b),
            ))
        })
    });
}

fn bench_decode(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let bytes = Point::random(&mut rng).to_bytes();

    c.bench_function("point_decode", |bencher| {
        bencher.iter(|| black_box(Point::from_bytes(black_box(&bytes)).expect("decode")))
    });
}

criterion_group!(
    benches,
    bench_mul_base,
    bench_point_scalar_mul,
    bench_point_add,
    bench_double_scalar_mul_basepoint,
    bench_decode
);
criterion_main!(benches);
