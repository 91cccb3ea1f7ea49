use criterion::{black_box, criterion_group, criterion_main, Criterion};
use node_pool::*;

fn bench_set(c: &mut Criterion) {
    c.bench_function("set", |b| {
        let mut pool = NodePool::new();

        b.iter(|| pool.set(black_box(500), black_box(0xEA)));
    });
}

fn bench_get(c: &mut Criterion) {
    c.bench_function("get", |b| {
        let mut pool = NodePool::new();
        let _ = pool.set(500, 0xEA);

        b.iter(|| pool.get(black_box(500)));
    });
}

fn bench_verify_initialized(c: &mut Criterion) {
    c.bench_function("verify_initialized", |b| {
        let pool = NodePool::new();

        b.iter(|| black_box(&pool).verify_initialized());
    });
}

criterion_group!(benches, bench_set, bench_get, bench_verify_initialized);
criterion_main!(benches);
