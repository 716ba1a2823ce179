use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vector_algebra::{generate_random_vectors, sum, Vector};

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    for dim in [3, 64, 1024] {
        let vectors = generate_random_vectors(dim, 2).unwrap();
        let (a, b) = (&vectors[0], &vectors[1]);

        group.bench_with_input(BenchmarkId::new("add", dim), &dim, |bench, _| {
            bench.iter(|| Vector::add(black_box(a), black_box(b)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("multiply", dim), &dim, |bench, _| {
            bench.iter(|| black_box(a).multiply(black_box(b)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("scale", dim), &dim, |bench, _| {
            bench.iter(|| black_box(a).scale(black_box(1.111)))
        });
    }

    group.finish();
}

fn bench_unit(c: &mut Criterion) {
    let vectors = generate_random_vectors(128, 1).unwrap();
    let v = &vectors[0];

    c.bench_function("unit_128", |bench| {
        bench.iter(|| black_box(v).unit().unwrap())
    });
}

fn bench_sum(c: &mut Criterion) {
    let vectors = generate_random_vectors(32, 1000).unwrap();

    c.bench_function("sum_1000x32", |bench| {
        bench.iter(|| sum(black_box(&vectors)).unwrap())
    });
}

criterion_group!(benches, bench_arithmetic, bench_unit, bench_sum);
criterion_main!(benches);
