use subrand::rng::Prng;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_seeding(c: &mut Criterion) {
    c.bench_function("prng seed", |b| b.iter(|| Prng::from_seed(black_box(42))));
}

pub fn bench_sampling(c: &mut Criterion) {
    let mut rng = Prng::from_seed(42);
    c.bench_function("prng next_double", |b| b.iter(|| rng.next_double()));

    let mut rng = Prng::from_seed(42);
    c.bench_function("prng next_long", |b| b.iter(|| rng.next_long()));

    let mut rng = Prng::from_seed(42);
    let mut buf = [0u8; 64];
    c.bench_function("prng next_bytes 64 bytes", |b| {
        b.iter(|| rng.next_bytes(black_box(&mut buf)))
    });
}

criterion_group!(benches, bench_seeding, bench_sampling);
criterion_main!(benches);
